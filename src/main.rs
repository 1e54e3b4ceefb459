//! Tic-tac-toe GUI
//!
//! A graphical interface for playing against the computer or another player.

use tictactoe::ui::TicTacToeApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([640.0, 520.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )
}
