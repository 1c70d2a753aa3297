//! inkpad — a minimal notepad
//!
//! Model-view-controller split: `document` holds the text being edited,
//! `file_io` reads and writes it, `history` tracks undo/redo snapshots,
//! and `app` wires menus, shortcuts, and the editor panel together.

mod app;
mod document;
mod file_io;
mod history;

use app::InkpadApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title("untitled — inkpad"),
        ..Default::default()
    };

    eframe::run_native(
        "inkpad",
        options,
        Box::new(|cc| {
            inkcore::InkTheme::default().apply(&cc.egui_ctx);
            Box::new(InkpadApp::new(cc))
        }),
    )
}
