//! Placeholder pages for routes without a dedicated screen yet.

use eframe::egui::{RichText, Ui};

use crate::navigation::{NAV_ENTRIES, Route};

use super::components::panel_header;

/// One-line description of what each area will hold.
pub fn description(route: Route) -> &'static str {
    match route {
        Route::Dashboard => "Today's therapies, occupancy, and alerts at a glance.",
        Route::Scheduler => "Plan and rebook therapy slots across therapists and rooms.",
        Route::Patients => "Patient registry, intake forms, and treatment history.",
        Route::Sessions => "Track ongoing and completed Panchakarma sessions.",
        Route::Protocols => "Define purvakarma, pradhanakarma, and paschatkarma protocols.",
        Route::Notifications => "Reminders and pre/post-procedure instructions sent to patients.",
        Route::Analytics => "Treatment outcomes, utilisation, and revenue reports.",
        Route::Centers => "Manage centers, rooms, and therapist assignments.",
        Route::Collaboration => "Share notes and hand over patients between practitioners.",
        Route::Settings => "Clinic, user, billing, security, and data settings.",
    }
}

/// Show the page for `route`.
pub fn show(ui: &mut Ui, route: Route) {
    panel_header(ui, route.title());

    let icon = NAV_ENTRIES
        .iter()
        .find(|e| e.route == route)
        .map(|e| e.icon.glyph())
        .unwrap_or_default();

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new(icon).size(48.0).weak());
        ui.add_space(10.0);
        ui.label(RichText::new("Coming soon").size(18.0).weak());
        ui.add_space(10.0);
        ui.label(description(route));
    });
}
