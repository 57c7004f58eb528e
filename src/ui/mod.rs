//! GUI: application shell, navigation rail, pages, and settings.

pub mod app;
pub mod components;
pub mod pages;
pub mod settings;
pub mod shell;
pub mod sidebar;

pub use app::ConsoleApp;

use eframe::egui;

/// Register the phosphor icon font alongside the default fonts.
pub fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}
