//! Othello GUI
//!
//! A graphical interface for playing Othello against the CPU or
//! another player at the same machine.

use othello::ui::OthelloApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([760.0, 560.0])
            .with_title("Othello"),
        ..Default::default()
    };

    eframe::run_native(
        "Othello",
        options,
        Box::new(|cc| Ok(Box::new(OthelloApp::new(cc)))),
    )
}
