//! Record retention and archival policy.

use std::path::{Path, PathBuf};

use chrono::Local;
use eframe::egui::{self, Ui};
use egui_phosphor::regular::EXPORT;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::ui::components::{SaveStatus, save_reset_row, save_status, section};

/// Retention policy for patient and session records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionPolicy {
    pub retention_years: u32,
    pub auto_archive: bool,
    pub archive_after_months: u32,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            retention_years: 7,
            auto_archive: true,
            archive_after_months: 24,
        }
    }
}

impl RetentionPolicy {
    pub fn validate(&self) -> Result<()> {
        if !(1..=30).contains(&self.retention_years) {
            return Err(AppError::validation("Retention must be between 1 and 30 years"));
        }
        if !(1..=120).contains(&self.archive_after_months) {
            return Err(AppError::validation("Archive age must be between 1 and 120 months"));
        }
        if self.auto_archive && self.archive_after_months >= self.retention_years * 12 {
            return Err(AppError::validation("Records must be archived before the retention period ends"));
        }
        Ok(())
    }
}

/// Write the policy as pretty JSON.
pub fn export_policy(policy: &RetentionPolicy, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(policy)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Generate default export filename with timestamp.
fn export_filename() -> String {
    format!("retention_policy_{}.json", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Ask the user where to save the export.
fn pick_export_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(export_filename())
        .add_filter("JSON", &["json"])
        .save_file()
}

/// Data management panel.
#[derive(Default)]
pub struct DataManagement {
    pub draft: RetentionPolicy,
    saved: RetentionPolicy,
    status: SaveStatus,
    export_status: SaveStatus,
}

impl DataManagement {
    pub fn is_modified(&self) -> bool {
        self.draft != self.saved
    }

    pub fn save(&mut self) -> Result<()> {
        self.draft.validate()?;
        self.saved = self.draft.clone();
        tracing::info!(years = self.saved.retention_years, "Retention policy saved");
        Ok(())
    }

    fn export(&mut self) {
        let Some(path) = pick_export_path() else {
            return;
        };

        self.export_status = Some(match export_policy(&self.saved, &path) {
            Ok(()) => {
                tracing::info!("Exported retention policy to {:?}", path);
                Ok(format!("Exported to: {}", path.display()))
            }
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                Err(format!("Export failed: {}", e))
            }
        });
    }

    pub fn show(&mut self, ui: &mut Ui) {
        section(ui, "Retention", |ui| {
            ui.horizontal(|ui| {
                ui.label("Keep records for");
                ui.add(egui::DragValue::new(&mut self.draft.retention_years).range(1..=30));
                ui.label("years");
            });

            ui.checkbox(&mut self.draft.auto_archive, "Archive inactive records automatically");
            ui.add_enabled_ui(self.draft.auto_archive, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Archive after");
                    ui.add(egui::DragValue::new(&mut self.draft.archive_after_months).range(1..=120));
                    ui.label("months of inactivity");
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
            self.draft = RetentionPolicy::default();
            self.status = None;
        }

        ui.add_space(15.0);

        section(ui, "Export", |ui| {
            ui.label("Export the saved retention policy as JSON.");
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                if ui.button(format!("{} Export Policy", EXPORT)).clicked() {
                    self.export();
                }
                save_status(ui, self.export_status.as_ref());
            });
        });
    }
}
