//! General clinic settings.

use eframe::egui::{self, Ui};

use crate::error::{AppError, Result};
use crate::ui::components::{SaveStatus, save_reset_row, section};

const TIMEZONES: [&str; 5] = ["Asia/Kolkata", "Asia/Dubai", "Europe/London", "America/New_York", "UTC"];
const LANGUAGES: [&str; 4] = ["English", "Hindi", "Malayalam", "Sanskrit"];
const DATE_FORMATS: [&str; 3] = ["%d/%m/%Y", "%Y-%m-%d", "%m/%d/%Y"];

/// Editable general settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralDraft {
    pub clinic_name: String,
    pub contact_email: String,
    pub phone: String,
    pub timezone: String,
    pub language: String,
    pub date_format: String,
}

impl Default for GeneralDraft {
    fn default() -> Self {
        Self {
            clinic_name: "Panchakarma Wellness Center".to_string(),
            contact_email: "admin@panchakarma.local".to_string(),
            phone: String::new(),
            timezone: TIMEZONES[0].to_string(),
            language: LANGUAGES[0].to_string(),
            date_format: DATE_FORMATS[0].to_string(),
        }
    }
}

impl GeneralDraft {
    pub fn validate(&self) -> Result<()> {
        if self.clinic_name.trim().is_empty() {
            return Err(AppError::validation("Clinic name cannot be empty"));
        }
        if !self.contact_email.contains('@') {
            return Err(AppError::validation("Contact email must contain '@'"));
        }
        if !self.phone.is_empty()
            && !self
                .phone
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-'))
        {
            return Err(AppError::validation("Phone may only contain digits, spaces, '+' and '-'"));
        }
        Ok(())
    }
}

/// General settings panel.
#[derive(Default)]
pub struct GeneralSettings {
    pub draft: GeneralDraft,
    saved: GeneralDraft,
    status: SaveStatus,
}

impl GeneralSettings {
    pub fn is_modified(&self) -> bool {
        self.draft != self.saved
    }

    /// Validate and commit the draft.
    pub fn save(&mut self) -> Result<()> {
        self.draft.validate()?;
        self.saved = self.draft.clone();
        tracing::info!(clinic = %self.saved.clinic_name, "General settings saved");
        Ok(())
    }

    pub fn show(&mut self, ui: &mut Ui) {
        section(ui, "Clinic Profile", |ui| {
            egui::Grid::new("general_profile_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Clinic name:");
                    ui.text_edit_singleline(&mut self.draft.clinic_name);
                    ui.end_row();

                    ui.label("Contact email:");
                    ui.text_edit_singleline(&mut self.draft.contact_email);
                    ui.end_row();

                    ui.label("Phone:");
                    ui.add(egui::TextEdit::singleline(&mut self.draft.phone).hint_text("+91 ..."));
                    ui.end_row();
                });
        });

        ui.add_space(15.0);

        section(ui, "Regional", |ui| {
            egui::Grid::new("general_regional_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Timezone:");
                    choice(ui, "general_timezone", &mut self.draft.timezone, &TIMEZONES);
                    ui.end_row();

                    ui.label("Language:");
                    choice(ui, "general_language", &mut self.draft.language, &LANGUAGES);
                    ui.end_row();

                    ui.label("Date format:");
                    choice(ui, "general_date_format", &mut self.draft.date_format, &DATE_FORMATS);
                    ui.end_row();
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
            self.draft = GeneralDraft::default();
            self.status = None;
        }
    }
}

fn choice(ui: &mut Ui, id: &str, value: &mut String, options: &[&str]) {
    egui::ComboBox::from_id_salt(id)
        .width(180.0)
        .selected_text(value.as_str())
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, option.to_string(), *option);
            }
        });
}
