#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod io;
mod model;
mod ui;

fn main() -> eframe::Result<()> {
    // Keep the handle alive for the lifetime of the app; dropping it
    // would shut the logger down.
    let _logger = match flexi_logger::Logger::try_with_env_or_str("info")
        .and_then(|logger| logger.start())
    {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: failed to initialise logging: {}", e);
            None
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 820.0])
            .with_min_inner_size([760.0, 520.0])
            .with_title("Milestones"),
        ..Default::default()
    };

    eframe::run_native(
        "Milestones",
        options,
        Box::new(|cc| Ok(Box::new(app::MilestonesApp::new(cc)))),
    )
}
