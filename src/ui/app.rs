//! Main application UI.

use eframe::egui;

use crate::config::AppConfig;
use crate::navigation::Route;

use super::components::colors;
use super::settings::SettingsHost;
use super::{pages, shell};

/// Main application state.
pub struct ConsoleApp {
    config: AppConfig,
    current_route: Route,
    /// Present only while the settings route is active.
    settings: Option<SettingsHost>,
    /// Config problem found at startup, shown until dismissed.
    startup_error: Option<String>,
}

impl ConsoleApp {
    pub fn new(config: AppConfig, startup_error: Option<String>) -> Self {
        let mut app = Self {
            current_route: Route::Dashboard,
            config,
            settings: None,
            startup_error,
        };
        let start = app.config.start_route();
        app.navigate(start);
        app
    }

    pub fn current_route(&self) -> Route {
        self.current_route
    }

    pub fn settings(&self) -> Option<&SettingsHost> {
        self.settings.as_ref()
    }

    pub fn settings_mut(&mut self) -> Option<&mut SettingsHost> {
        self.settings.as_mut()
    }

    /// Switch to `route`, mounting or dropping the settings page as needed.
    pub fn navigate(&mut self, route: Route) {
        if route == self.current_route && (route != Route::Settings || self.settings.is_some()) {
            return;
        }

        tracing::info!(from = self.current_route.path(), to = route.path(), "Navigate");
        self.current_route = route;
        self.settings = (route == Route::Settings).then(SettingsHost::new);
    }

    /// Render the startup error dialog.
    fn show_startup_error(&mut self, ctx: &egui::Context) {
        if let Some(ref error) = self.startup_error.clone() {
            egui::Window::new("Configuration Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(5.0);
                    ui.label("Default settings are in use for this session.");
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.startup_error = None;
                    }
                });
        }
    }

    /// Render one frame.
    pub fn ui(&mut self, ctx: &egui::Context) -> shell::ShellOutput {
        let route = self.current_route;
        let settings = &mut self.settings;

        let output = shell::show(ctx, &self.config.clinic, route, |ui| match settings {
            Some(host) if route == Route::Settings => host.show(ui),
            _ => pages::show(ui, route),
        });

        if let Some(next) = output.navigate_to {
            self.navigate(next);
        }

        self.show_startup_error(ctx);
        output
    }
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let _ = self.ui(ctx);
    }
}
