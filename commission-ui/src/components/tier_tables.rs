//! Read-only tables for the two commission row sets.

use commission_core::{
    AverageUnitsRow, SalesCommissionRow,
    calculations::report::{AVERAGE_UNITS_HEADERS, SALES_HEADERS},
};
use gpui::{Div, FontWeight, IntoElement, ParentElement, SharedString, Styled, TextAlign, div, px};
use gpui_component::{h_flex, v_flex};

const COLUMN_WIDTH: f32 = 170.;
const VISIBLE_ROWS: usize = 5;

pub fn sales_table(rows: &[SalesCommissionRow]) -> Div {
    make_table(
        "1) Sales Commission",
        SALES_HEADERS,
        rows.iter().map(|r| {
            [
                r.range_label.clone().into(),
                r.rate_percent_label.clone().into(),
                r.earnings_label.clone().into(),
            ]
        }),
    )
}

pub fn average_units_table(rows: &[AverageUnitsRow]) -> Div {
    make_table(
        "2) Extra Commission by Average Units (earnings at 100 % of target)",
        AVERAGE_UNITS_HEADERS,
        rows.iter().map(|r| {
            [
                r.tier_label.into(),
                r.formula_label.clone().into(),
                r.earnings_at_target_label.clone().into(),
            ]
        }),
    )
}

/// Title, header row and a body sized for five rows whether or not it is filled.
fn make_table(
    title: &'static str,
    headers: [&'static str; 3],
    rows: impl Iterator<Item = [SharedString; 3]>,
) -> Div {
    let header = make_row(headers.map(SharedString::from)).font_weight(FontWeight::BOLD);

    v_flex()
        .gap_1()
        .child(div().font_weight(FontWeight::BOLD).child(title))
        .child(
            v_flex()
                .border_1()
                .rounded_md()
                .child(header.border_b_1())
                .child(
                    v_flex()
                        .min_h(px(28. * VISIBLE_ROWS as f32))
                        .children(rows.map(make_row)),
                ),
        )
}

fn make_row(cells: [SharedString; 3]) -> Div {
    h_flex().children(cells.into_iter().map(|cell| {
        div()
            .w(px(COLUMN_WIDTH))
            .p(px(4.))
            .text_align(TextAlign::Center)
            .child(cell)
            .into_any_element()
    }))
}
