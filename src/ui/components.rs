//! Shared UI components.

use eframe::egui::{self, Color32, Response, RichText, Sense, StrokeKind, Ui};

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
    pub const ACCENT: Color32 = Color32::from_rgb(120, 170, 110);
}

/// Render a full-width navigation item with icon and label.
///
/// Returns the response which can be checked for `.clicked()`.
pub fn nav_item(ui: &mut Ui, icon: &str, label: &str, selected: bool) -> Response {
    let size = egui::vec2(ui.available_width(), 34.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact_selectable(&response, selected);

        if selected || response.hovered() {
            ui.painter().rect_filled(rect, 6.0, visuals.weak_bg_fill);
            ui.painter()
                .rect_stroke(rect, 6.0, visuals.bg_stroke, StrokeKind::Inside);
        }

        if selected {
            let marker = egui::Rect::from_min_size(rect.min, egui::vec2(3.0, rect.height()));
            ui.painter().rect_filled(marker, 1.0, colors::ACCENT);
        }

        ui.painter().text(
            egui::pos2(rect.left() + 20.0, rect.center().y),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(18.0),
            visuals.text_color(),
        );
        ui.painter().text(
            egui::pos2(rect.left() + 38.0, rect.center().y),
            egui::Align2::LEFT_CENTER,
            label,
            egui::FontId::proportional(14.0),
            visuals.text_color(),
        );
    }

    response
}

/// Render a panel header with title.
pub fn panel_header(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).size(24.0));
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(20.0);
}

/// Render a section group with a heading.
pub fn section<R>(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.heading(title);
        ui.add_space(5.0);
        add_contents(ui)
    })
    .inner
}

/// Outcome of the last save or action, shown inline.
pub type SaveStatus = Option<Result<String, String>>;

/// Render the inline status left by the last save attempt.
pub fn save_status(ui: &mut Ui, status: Option<&Result<String, String>>) {
    match status {
        Some(Ok(msg)) => {
            ui.label(RichText::new(msg).color(colors::SUCCESS));
        }
        Some(Err(e)) => {
            ui.label(RichText::new(e).color(colors::ERROR));
        }
        None => {}
    }
}

/// Render the Save / Reset row shared by settings panels.
///
/// Returns `(save_clicked, reset_clicked)`.
pub fn save_reset_row(ui: &mut Ui, modified: bool, status: Option<&Result<String, String>>) -> (bool, bool) {
    ui.add_space(15.0);
    ui.horizontal(|ui| {
        let save = ui.add_enabled(modified, egui::Button::new("Save")).clicked();

        if modified {
            ui.label(RichText::new("(unsaved changes)").color(colors::WARNING).italics());
        }

        let reset = ui.button("Reset to Defaults").clicked();

        save_status(ui, status);

        (save, reset)
    })
    .inner
}
