//! AENEAS Studio - Desktop showcase
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use aeneas_gui::App;
use aeneas_gui::state::Settings;
use iced::Size;
use iced::window;
use tracing_subscriber::EnvFilter;

/// Minimum window size that still fits one project board and its caption.
const MIN_WINDOW_SIZE: Size = Size::new(960.0, 640.0);

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting AENEAS Studio");

    let settings = Settings::load();
    let size = Size::new(
        settings.display.window_width.max(MIN_WINDOW_SIZE.width),
        settings.display.window_height.max(MIN_WINDOW_SIZE.height),
    );

    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size,
            min_size: Some(MIN_WINDOW_SIZE),
            ..Default::default()
        })
        .run()
}
