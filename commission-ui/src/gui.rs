use anyhow::Result;
use gpui::{
    AnyElement, AnyView, App, AppContext, Application, Bounds, Context, IntoElement, KeyBinding,
    Menu, MenuItem, TitlebarOptions, Window, WindowBounds, WindowOptions, px,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::{
    Quit,
    components::{AppWindow, CalculatorView, WindowPreferences},
    config::AppConfig,
    quit,
};

const WINDOW_TITLE: &str = "Commission Calculator";

/// Runs the desktop application until the window is closed.
pub fn run(config: AppConfig) {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            setup_app(cx);
            if let Err(error) = open_main_window(&config, cx) {
                error!(?error, "could not open main window");
                cx.quit();
            }
        });
}

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: WINDOW_TITLE.into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the fixed-size calculator window.
pub fn open_main_window(
    config: &AppConfig,
    cx: &mut App,
) -> Result<()> {
    let preferences = WindowPreferences::new(px(config.window_width), px(config.window_height));
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None,
            preferences.size,
            cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some(WINDOW_TITLE.into()),
            ..Default::default()
        }),
        is_resizable: false,
        ..Default::default()
    };
    let default_target = config.default_target.clone();

    cx.open_window(options, move |window, cx| {
        let content = build_main_content(default_target, window, cx);
        let app_window = cx.new(|window_cx: &mut Context<AppWindow>| {
            let mut app_window = AppWindow::new(window_cx);
            app_window.set_content(content);
            app_window
        });
        cx.new(|root_cx| Root::new(AnyView::from(app_window), window, root_cx))
    })?;

    info!(title = WINDOW_TITLE, "main window opened");
    Ok(())
}

/// Builds the primary window content.
///
/// Returns a closure suitable for [`AppWindow::set_content`] that renders
/// the calculator view on each frame.
pub fn build_main_content(
    default_target: String,
    window: &mut Window,
    app_cx: &mut App,
) -> impl Fn() -> AnyElement + 'static {
    let view = app_cx.new(|view_cx: &mut Context<CalculatorView>| {
        CalculatorView::new(default_target, window, view_cx)
    });

    move || view.clone().into_any_element()
}
