use std::sync::Arc;

use edit_prefs::app::AppState;
use edit_prefs::platform::native::NativePlatform;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = AppState::new(Arc::new(NativePlatform::new()));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Preferences",
        native_options,
        Box::new(|_cc| Box::new(state)),
    )
}
