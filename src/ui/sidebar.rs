//! Navigation rail: brand header, route list, and settings shortcut.

use eframe::egui::{self, Rect, RichText, Ui};
use egui_phosphor::regular::{FLOWER_LOTUS, GEAR_SIX};

use crate::navigation::{NAV_ENTRIES, Route};

use super::components::{colors, nav_item};

/// Fixed width of the navigation rail.
pub const RAIL_WIDTH: f32 = 220.0;

/// Where a rendered link came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSource {
    /// One of the static navigation entries.
    Entry,
    /// The footer settings shortcut.
    Footer,
}

/// A link as it was drawn this frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderedLink {
    pub route: Route,
    pub path: &'static str,
    pub source: LinkSource,
    pub rect: Rect,
}

/// Result of rendering the rail.
#[derive(Debug, Default)]
pub struct SidebarOutput {
    /// Route the user activated this frame.
    pub navigate_to: Option<Route>,
    pub links: Vec<RenderedLink>,
}

/// Show the navigation rail.
pub fn show(ui: &mut Ui, current: Route) -> SidebarOutput {
    let mut output = SidebarOutput::default();

    brand_header(ui);

    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    for entry in &NAV_ENTRIES {
        let response = nav_item(ui, entry.icon.glyph(), entry.label, entry.route == current);
        if response.clicked() {
            output.navigate_to = Some(entry.route);
        }
        output.links.push(RenderedLink {
            route: entry.route,
            path: entry.path(),
            source: LinkSource::Entry,
            rect: response.rect,
        });
        ui.add_space(2.0);
    }

    // Settings shortcut pinned to the bottom of the rail
    ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
        ui.add_space(10.0);
        let response = nav_item(ui, GEAR_SIX, "Settings", false);
        if response.clicked() {
            output.navigate_to = Some(Route::Settings);
        }
        output.links.push(RenderedLink {
            route: Route::Settings,
            path: Route::Settings.path(),
            source: LinkSource::Footer,
            rect: response.rect,
        });
        ui.separator();
    });

    output
}

fn brand_header(ui: &mut Ui) {
    ui.add_space(16.0);
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.label(RichText::new(FLOWER_LOTUS).size(26.0).color(colors::ACCENT));
        ui.vertical(|ui| {
            ui.label(RichText::new("Panchakarma").size(18.0).strong());
            ui.label(RichText::new("Management System").small().weak());
        });
    });
}
