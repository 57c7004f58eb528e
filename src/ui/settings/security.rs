//! Password and sign-in policy.

use eframe::egui::{self, Ui};

use crate::error::{AppError, Result};
use crate::ui::components::{SaveStatus, save_reset_row, section};

#[derive(Debug, Clone, PartialEq)]
pub struct SecurityDraft {
    pub min_password_length: u8,
    pub require_two_factor: bool,
    pub lockout_attempts: u8,
    /// 0 disables expiry.
    pub password_expiry_days: u16,
}

impl Default for SecurityDraft {
    fn default() -> Self {
        Self {
            min_password_length: 10,
            require_two_factor: false,
            lockout_attempts: 5,
            password_expiry_days: 90,
        }
    }
}

impl SecurityDraft {
    pub fn validate(&self) -> Result<()> {
        if !(8..=64).contains(&self.min_password_length) {
            return Err(AppError::validation("Minimum password length must be between 8 and 64"));
        }
        if !(3..=10).contains(&self.lockout_attempts) {
            return Err(AppError::validation("Lockout attempts must be between 3 and 10"));
        }
        if self.password_expiry_days != 0 && !(30..=365).contains(&self.password_expiry_days) {
            return Err(AppError::validation(
                "Password expiry must be 0 (never) or between 30 and 365 days",
            ));
        }
        Ok(())
    }

    /// Check a candidate password against the policy.
    pub fn accepts_password(&self, password: &str) -> bool {
        password.chars().count() >= self.min_password_length as usize
            && password.chars().any(|c| c.is_ascii_digit())
            && password.chars().any(|c| c.is_alphabetic())
    }
}

/// Security settings panel.
#[derive(Default)]
pub struct SecuritySettings {
    pub draft: SecurityDraft,
    saved: SecurityDraft,
    status: SaveStatus,
    sample_password: String,
}

impl SecuritySettings {
    pub fn is_modified(&self) -> bool {
        self.draft != self.saved
    }

    pub fn save(&mut self) -> Result<()> {
        self.draft.validate()?;
        self.saved = self.draft.clone();
        tracing::info!(
            min_length = self.saved.min_password_length,
            two_factor = self.saved.require_two_factor,
            "Security policy saved"
        );
        Ok(())
    }

    pub fn show(&mut self, ui: &mut Ui) {
        section(ui, "Password Policy", |ui| {
            egui::Grid::new("security_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Minimum length:");
                    ui.add(egui::DragValue::new(&mut self.draft.min_password_length).range(8..=64));
                    ui.end_row();

                    ui.label("Expiry:");
                    ui.add(
                        egui::DragValue::new(&mut self.draft.password_expiry_days)
                            .range(0..=365)
                            .suffix(" days"),
                    );
                    ui.end_row();

                    ui.label("Test a password:");
                    ui.add(egui::TextEdit::singleline(&mut self.sample_password).password(true));
                    ui.end_row();
                });

            if !self.sample_password.is_empty() {
                if self.draft.accepts_password(&self.sample_password) {
                    ui.label("Password meets the policy");
                } else {
                    ui.label("Password does not meet the policy");
                }
            }
        });

        ui.add_space(15.0);

        section(ui, "Sign-in", |ui| {
            ui.checkbox(&mut self.draft.require_two_factor, "Require two-factor authentication");
            ui.horizontal(|ui| {
                ui.label("Lock account after");
                ui.add(egui::DragValue::new(&mut self.draft.lockout_attempts).range(3..=10));
                ui.label("failed attempts");
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
            self.draft = SecurityDraft::default();
            self.status = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(SecurityDraft::default().validate().is_ok());
    }

    #[test]
    fn test_expiry_zero_means_never() {
        let mut draft = SecurityDraft::default();
        draft.password_expiry_days = 0;
        assert!(draft.validate().is_ok());
        draft.password_expiry_days = 10;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_length_and_lockout_bounds() {
        let mut draft = SecurityDraft::default();
        draft.min_password_length = 6;
        assert!(draft.validate().is_err());

        let mut draft = SecurityDraft::default();
        draft.lockout_attempts = 11;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_accepts_password() {
        let draft = SecurityDraft::default();
        assert!(draft.accepts_password("abhyanga2026"));
        assert!(!draft.accepts_password("short1"));
        assert!(!draft.accepts_password("nodigitsatall"));
    }
}
