//! Custom widgets shared by inkpad panels and dialogs

use crate::theme::InkColors;
use egui::{Response, Ui, Widget};

/// Status bar: paper bg, 1px ink border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(InkColors::PAPER)
        .stroke(egui::Stroke::new(1.0, InkColors::INK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}

/// File list item for open/save dialogs.
/// Selected items invert to ink-on-paper; hovered items get an outline.
pub struct FileListItem<'a> {
    name: &'a str,
    is_directory: bool,
    selected: bool,
}

impl<'a> FileListItem<'a> {
    pub fn new(name: &'a str, is_directory: bool) -> Self {
        Self { name, is_directory, selected: false }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> Widget for FileListItem<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let height = 20.0;
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), height),
            egui::Sense::click(),
        );

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            let text_color = if self.selected {
                painter.rect_filled(rect, 0.0, InkColors::INK);
                InkColors::PAPER
            } else {
                painter.rect_filled(rect, 0.0, InkColors::PAPER);
                if response.hovered() {
                    painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, InkColors::INK));
                }
                InkColors::INK
            };

            // icon
            let icon = if self.is_directory { "📁" } else { "📄" };
            let icon_rect = egui::Rect::from_min_size(
                rect.min + egui::vec2(4.0, 0.0),
                egui::vec2(16.0, height),
            );
            painter.text(
                icon_rect.center(),
                egui::Align2::CENTER_CENTER,
                icon,
                egui::FontId::proportional(12.0),
                text_color,
            );

            // filename
            painter.text(
                egui::pos2(rect.min.x + 24.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                self.name,
                egui::FontId::proportional(12.0),
                text_color,
            );
        }

        response
    }
}
