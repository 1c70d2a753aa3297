//! inkpad theme — high-contrast monochrome
//!
//! Paper white and ink black, 1px outlines, no rounding. Uses egui's
//! bundled fonts; only text styles and visuals are installed.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The two colors the UI is drawn in.
pub struct InkColors;

impl InkColors {
    pub const PAPER: Color32 = Color32::from_rgb(255, 255, 255);
    pub const INK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Theme configuration for inkpad windows
pub struct InkTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for InkTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl InkTheme {
    /// Apply the inkpad theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        // --- visuals: paper and ink only ---
        let mut visuals = Visuals::light();

        visuals.window_fill = InkColors::PAPER;
        visuals.panel_fill = InkColors::PAPER;
        visuals.faint_bg_color = InkColors::PAPER;
        visuals.extreme_bg_color = InkColors::PAPER;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;

        visuals.window_stroke = Stroke::new(1.0, InkColors::INK);

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = InkColors::PAPER;
            ws.bg_stroke = Stroke::new(1.0, InkColors::INK);
            ws.fg_stroke = Stroke::new(1.0, InkColors::INK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.hovered);
        bw(&mut visuals.widgets.active);
        bw(&mut visuals.widgets.open);

        // selection: grey background so highlighted text stays readable
        visuals.selection.bg_fill = Color32::from_rgb(160, 160, 160);
        visuals.selection.stroke = Stroke::new(1.0, InkColors::INK);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(InkColors::PAPER)
        .stroke(Stroke::new(1.0, InkColors::INK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| {
            ui.horizontal(add_contents).inner
        });
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}

/// Consume problematic key events before widgets see them.
/// Call this at the start of your app's update() function.
/// - Tab: prevents menu focus navigation and focus cycling
/// - Cmd+/Cmd-: prevents zoom scaling
pub fn consume_special_keys(ctx: &egui::Context) {
    // Detect Tab press before stripping events
    let tab_pressed = ctx.input(|i| {
        i.events.iter().any(|e| matches!(e,
            egui::Event::Key { key: egui::Key::Tab, pressed: true, .. }
        ))
    });

    // Save current focus so we can restore it after Tab cycling
    let focused_before = if tab_pressed {
        ctx.memory(|mem| mem.focused())
    } else {
        None
    };

    ctx.input_mut(|i| {
        let mut new_events = Vec::new();
        for event in i.events.iter() {
            match event {
                // Strip Tab Key events entirely
                egui::Event::Key { key: egui::Key::Tab, .. } => {}
                // Strip tab characters from text input
                egui::Event::Text(text) if text.contains('\t') => {
                    let stripped = text.replace('\t', "");
                    if !stripped.is_empty() {
                        new_events.push(egui::Event::Text(stripped));
                    }
                }
                // Strip zoom keys
                egui::Event::Key { key, modifiers, .. }
                    if modifiers.command && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals) => {}
                _ => { new_events.push(event.clone()); }
            }
        }
        i.events = new_events;
    });

    // Undo Tab-based focus cycling: egui processes Tab in begin_frame(),
    // before update() runs, so the focus jump has already happened by the
    // time we strip the event. Re-request focus on whatever held it.
    if tab_pressed {
        if let Some(id) = focused_before {
            ctx.memory_mut(|mem| mem.request_focus(id));
        } else if let Some(id) = ctx.memory(|mem| mem.focused()) {
            ctx.memory_mut(|mem| mem.surrender_focus(id));
        }
    }
}
