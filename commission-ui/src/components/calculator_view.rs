use gpui::{
    AppContext, ClickEvent, Context, Div, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, TextAlign, Window, div, prelude::FluentBuilder, px,
};
use gpui_component::{
    h_flex,
    input::{Input, InputState},
    v_flex,
};
use tracing::{info, warn};

use crate::{
    components::{
        dialogs::show_error_dialog,
        make_button,
        tier_tables::{average_units_table, sales_table},
    },
    state::ViewModel,
};

/// Target input, Calculate button and the two commission tables.
pub struct CalculatorView {
    target_input: Entity<InputState>,
    view_model: ViewModel,
}

impl CalculatorView {
    pub fn new(
        default_target: impl Into<String>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let view_model = ViewModel::new(default_target);
        let initial_text = SharedString::from(view_model.target_text.clone());

        let target_input = cx.new(|input_cx| {
            InputState::new(window, input_cx)
                .placeholder("40000")
                .default_value(initial_text)
        });

        Self {
            target_input,
            view_model,
        }
    }

    /// Recomputes both tables from the input.
    ///
    /// On invalid input the tables keep their previous rows and an error
    /// dialog is shown.
    fn calculate(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let text = self.target_input.read(cx).value().to_string();

        match self.view_model.submit_in_place(text) {
            Ok(()) => {
                info!(target_text = %self.view_model.target_text, "commission tables updated");
                cx.notify();
            }
            Err(error) => {
                warn!(input = error.input(), "rejected target");
                show_error_dialog(&error.to_string());
            }
        }
    }
}

impl Render for CalculatorView {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let calculate_button = make_button(
            "calculate",
            "Calculate",
            cx.listener(|this, _: &ClickEvent, window, cx| this.calculate(window, cx)),
        );

        v_flex()
            .size_full()
            .p_5()
            .gap_4()
            .child(
                make_labeled_row("Monthly target (R$):")
                    .child(Input::new(&self.target_input).w(px(160.)))
                    .child(calculate_button),
            )
            .when(!self.view_model.has_results(), |this| {
                this.child("Press Calculate to fill the commission tables.")
            })
            .child(
                h_flex()
                    .gap_4()
                    .items_start()
                    .child(sales_table(&self.view_model.sales_rows))
                    .child(average_units_table(&self.view_model.average_units_rows)),
            )
    }
}

fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex().items_center().gap_5().p(px(2.)).child(
        div()
            .min_w(px(150.))
            .text_align(TextAlign::Right)
            .child(label.into()),
    )
}
