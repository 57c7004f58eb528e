//! System configuration: sessions, backups, maintenance.

use eframe::egui::{self, RichText, Ui};

use crate::error::{AppError, Result};
use crate::ui::components::{SaveStatus, colors, save_reset_row, section};

const VERBOSITY: [&str; 4] = ["error", "warn", "info", "debug"];

#[derive(Debug, Clone, PartialEq)]
pub struct SystemDraft {
    pub session_timeout_minutes: u32,
    pub auto_backup: bool,
    pub backup_hour: u8,
    pub maintenance_mode: bool,
    pub log_verbosity: String,
}

impl Default for SystemDraft {
    fn default() -> Self {
        Self {
            session_timeout_minutes: 30,
            auto_backup: true,
            backup_hour: 2,
            maintenance_mode: false,
            log_verbosity: "info".to_string(),
        }
    }
}

impl SystemDraft {
    pub fn validate(&self) -> Result<()> {
        if !(5..=480).contains(&self.session_timeout_minutes) {
            return Err(AppError::validation("Session timeout must be between 5 and 480 minutes"));
        }
        if self.backup_hour > 23 {
            return Err(AppError::validation("Backup hour must be between 0 and 23"));
        }
        if !VERBOSITY.contains(&self.log_verbosity.as_str()) {
            return Err(AppError::validation("Unknown log verbosity"));
        }
        Ok(())
    }
}

/// System configuration panel.
#[derive(Default)]
pub struct SystemConfiguration {
    pub draft: SystemDraft,
    saved: SystemDraft,
    status: SaveStatus,
}

impl SystemConfiguration {
    pub fn is_modified(&self) -> bool {
        self.draft != self.saved
    }

    pub fn save(&mut self) -> Result<()> {
        self.draft.validate()?;
        self.saved = self.draft.clone();
        tracing::info!(
            timeout = self.saved.session_timeout_minutes,
            maintenance = self.saved.maintenance_mode,
            "System configuration saved"
        );
        Ok(())
    }

    pub fn show(&mut self, ui: &mut Ui) {
        section(ui, "Sessions", |ui| {
            ui.horizontal(|ui| {
                ui.label("Idle timeout:");
                ui.add(
                    egui::DragValue::new(&mut self.draft.session_timeout_minutes)
                        .range(5..=480)
                        .suffix(" min"),
                );
            });
        });

        ui.add_space(15.0);

        section(ui, "Backups", |ui| {
            ui.checkbox(&mut self.draft.auto_backup, "Nightly automatic backup");
            ui.add_enabled_ui(self.draft.auto_backup, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Backup hour:");
                    ui.add(egui::DragValue::new(&mut self.draft.backup_hour).range(0..=23).suffix(":00"));
                });
            });
        });

        ui.add_space(15.0);

        section(ui, "Maintenance", |ui| {
            ui.checkbox(&mut self.draft.maintenance_mode, "Maintenance mode");
            if self.draft.maintenance_mode {
                ui.label(
                    RichText::new("Only administrators can sign in while maintenance mode is on.")
                        .color(colors::WARNING),
                );
            }

            ui.horizontal(|ui| {
                ui.label("Log verbosity:");
                egui::ComboBox::from_id_salt("system_verbosity")
                    .selected_text(self.draft.log_verbosity.as_str())
                    .show_ui(ui, |ui| {
                        for level in VERBOSITY {
                            ui.selectable_value(&mut self.draft.log_verbosity, level.to_string(), level);
                        }
                    });
            });
        });

        let (save, reset) = save_reset_row(ui, self.is_modified(), self.status.as_ref());
        if save {
            self.status = Some(match self.save() {
                Ok(()) => Ok("Saved".to_string()),
                Err(e) => Err(e.to_string()),
            });
        }
        if reset {
            self.draft = SystemDraft::default();
            self.status = None;
        }
    }
}
