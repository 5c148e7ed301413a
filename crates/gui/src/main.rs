mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state` resolves to the lib crate
// types everywhere in the binary.
pub use polydraw_gui_lib::state;

use app::PolydrawApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polydraw_gui=info,shared=info".into()),
        )
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("polydraw")
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "polydraw",
        native_options,
        Box::new(|cc| Ok(Box::new(PolydrawApp::new(cc)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}
