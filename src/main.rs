//! TokBoard - TikTok Influencer CSV Analytics & Interactive Dashboard
//!
//! A Rust application for exploring influencer CSV exports with filters,
//! KPIs and interactive charts.

use eframe::egui;
use tokboard::gui::TokBoardApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1200.0, 700.0])
            .with_title("TokBoard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "TokBoard",
        options,
        Box::new(|cc| Ok(Box::new(TokBoardApp::new(cc)))),
    )
}
