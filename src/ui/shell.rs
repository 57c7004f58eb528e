//! Application shell: navigation rail, header, and padded content region.

use chrono::Local;
use eframe::egui::{self, Margin, Rect, RichText, Ui};

use crate::config::ClinicConfig;
use crate::navigation::Route;

use super::components::colors;
use super::sidebar::{self, RAIL_WIDTH, RenderedLink};

/// Padding applied around page content.
pub const CONTENT_PADDING: i8 = 24;

/// Result of rendering the shell for one frame.
#[derive(Debug)]
pub struct ShellOutput {
    /// Route requested from the navigation rail.
    pub navigate_to: Option<Route>,
    pub links: Vec<RenderedLink>,
    pub rail_rect: Rect,
    pub header_rect: Rect,
    pub content_rect: Rect,
}

/// Render the shell around `add_contents`.
pub fn show(
    ctx: &egui::Context,
    clinic: &ClinicConfig,
    current: Route,
    add_contents: impl FnOnce(&mut Ui),
) -> ShellOutput {
    let rail = egui::SidePanel::left("nav_rail")
        .resizable(false)
        .exact_width(RAIL_WIDTH)
        .show(ctx, |ui| sidebar::show(ui, current));

    let header = egui::TopBottomPanel::top("header")
        .exact_height(56.0)
        .show(ctx, |ui| header_bar(ui, clinic, current));

    let content = egui::CentralPanel::default().show(ctx, |ui| {
        egui::Frame::new()
            .inner_margin(Margin::same(CONTENT_PADDING))
            .show(ui, |ui| {
                ui.set_min_size(ui.available_size());
                add_contents(ui);
            });
    });

    let sidebar::SidebarOutput { navigate_to, links } = rail.inner;

    ShellOutput {
        navigate_to,
        links,
        rail_rect: rail.response.rect,
        header_rect: header.response.rect,
        content_rect: content.response.rect,
    }
}

fn header_bar(ui: &mut Ui, clinic: &ClinicConfig, current: Route) {
    ui.horizontal_centered(|ui| {
        ui.add_space(8.0);
        ui.label(RichText::new(current.title()).size(20.0).strong());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new(Local::now().format("%a %d %b %Y  %H:%M").to_string())
                    .color(colors::NEUTRAL),
            );
            ui.separator();
            ui.vertical(|ui| {
                ui.label(RichText::new(&clinic.name).strong());
                ui.label(RichText::new(&clinic.tagline).small().weak());
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::run_frame;

    fn render(current: Route, add_contents: impl Fn(&mut Ui)) -> ShellOutput {
        let clinic = ClinicConfig::default();
        let mut output = None;
        run_frame(|ctx| {
            output = Some(show(ctx, &clinic, current, |ui| add_contents(ui)));
        });
        output.unwrap()
    }

    #[test]
    fn test_empty_content_still_renders_rail_and_header() {
        let output = render(Route::Dashboard, |_| {});

        assert!(output.rail_rect.width() > 0.0);
        assert!(output.header_rect.height() > 0.0);
        assert!(output.content_rect.area() > 0.0);
        assert_eq!(output.links.len(), 11);
    }

    #[test]
    fn test_regions_do_not_overlap() {
        let output = render(Route::Sessions, |ui| {
            ui.label("Session list");
        });

        assert!(output.rail_rect.right() <= output.header_rect.left() + 1.0);
        assert!(output.header_rect.bottom() <= output.content_rect.top() + 1.0);
        assert!(output.rail_rect.right() <= output.content_rect.left() + 1.0);
    }

    #[test]
    fn test_content_is_rendered_inside_padding() {
        let clinic = ClinicConfig::default();
        let mut inner = Rect::NOTHING;
        let mut outer = Rect::NOTHING;
        run_frame(|ctx| {
            let output = show(ctx, &clinic, Route::Patients, |ui| {
                inner = ui.label("Patient registry").rect;
            });
            outer = output.content_rect;
        });

        assert!(outer.contains_rect(inner));
        assert!(inner.left() >= outer.left() + CONTENT_PADDING as f32);
        assert!(inner.top() >= outer.top() + CONTENT_PADDING as f32);
    }
}
