//! Billing and invoicing settings.

use chrono::{Local, Months, NaiveDate};
use eframe::egui::{self, Ui};
use egui_extras::DatePickerButton;

use crate::error::{AppError, Result};
use crate::ui::components::{SaveStatus, save_reset_row, section};

const CURRENCIES: [&str; 4] = ["INR", "USD", "EUR", "AED"];

#[derive(Debug, Clone, PartialEq)]
pub struct BillingDraft {
    pub currency: String,
    pub tax_rate_percent: f32,
    pub invoice_prefix: String,
    pub payment_terms_days: u32,
    pub next_billing_date: NaiveDate,
}

impl Default for BillingDraft {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            currency: CURRENCIES[0].to_string(),
            tax_rate_percent: 18.0,
            invoice_prefix: "PK".to_string(),
            payment_terms_days: 15,
            next_billing_date: today.checked_add_months(Months::new(1)).unwrap_or(today),
        }
    }
}

impl BillingDraft {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.tax_rate_percent) {
            return Err(AppError::validation("Tax rate must be between 0 and 100 percent"));
        }
        let prefix_len = self.invoice_prefix.chars().count();
        if !(1..=8).contains(&prefix_len) || !self.invoice_prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::validation("Invoice prefix must be 1-8 letters or digits"));
        }
        if self.payment_terms_days > 120 {
            return Err(AppError::validation("Payment terms cannot exceed 120 days"));
        }
        Ok(())
    }

    /// Example invoice number for the given sequence.
    pub fn invoice_number(&self, sequence: u32) -> String {
        format!("{}-{}-{:05}", self.invoice_prefix, self.next_billing_date.format("%Y%m"), sequence)
    }
}

/// Billing settings panel.
#[derive(Default)]
pub struct BillingSettings {
    pub draft: BillingDraft,
    saved: BillingDraft,
    status: SaveStatus,
}

impl BillingSettings {
    pub fn is_modified(&self) -> bool {
        self.draft != self.saved
    }

    pub fn save(&mut self) -> Result<()> {
        self.draft.validate()?;
        self.saved = self.draft.clone();
        tracing::info!(currency = %self.saved.currency, tax = self.saved.tax_rate_percent, "Billing settings saved");
        Ok(())
    }

    pub fn show(&mut self, ui: &mut Ui) {
        section(ui, "Invoicing", |ui| {
            egui::Grid::new("billing_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Currency:");
                    egui::ComboBox::from_id_salt("billing_currency")
                        .selected_text(self.draft.currency.as_str())
                        .show_ui(ui, |ui| {
                            for currency in CURRENCIES {
                                ui.selectable_value(&mut self.draft.currency, currency.to_string(), currency);
                            }
                        });
                    ui.end_row();

                    ui.label("Tax rate:");
                    ui.add(egui::Slider::new(&mut self.draft.tax_rate_percent, 0.0..=100.0).suffix("%"));
                    ui.end_row();

                    ui.label("Invoice prefix:");
                    ui.add(egui::TextEdit::singleline(&mut self.draft.invoice_prefix).desired_width(80.0));
                    ui.end_row();

                    ui.label("Payment terms:");
                    ui.add(
                        egui::DragValue::new(&mut self.draft.payment_terms_days)
                            .range(0..=120)
                            .suffix(" days"),
                    );
                    ui.end_row();

                    ui.label("Next billing date:");
                    ui.add(DatePickerButton::new(&mut self.draft.next_billing_date).id_salt("billing_next_date"));
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.label(format!("Next invoice number: {}", self.draft.invoice_number(1)));
        });

        let (save, reset) = save_reset_row(ui, self.is_modified(), self.status.as_ref());
        if save {
            self.status = Some(match self.save() {
                Ok(()) => Ok("Saved".to_string()),
                Err(e) => Err(e.to_string()),
            });
        }
        if reset {
            self.draft = BillingDraft::default();
            self.status = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(BillingDraft::default().validate().is_ok());
    }

    #[test]
    fn test_tax_rate_bounds() {
        let mut draft = BillingDraft::default();
        draft.tax_rate_percent = 100.5;
        assert!(draft.validate().is_err());
        draft.tax_rate_percent = -1.0;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_invoice_prefix_rules() {
        let mut draft = BillingDraft::default();
        draft.invoice_prefix = String::new();
        assert!(draft.validate().is_err());
        draft.invoice_prefix = "TOOLONGPREFIX".to_string();
        assert!(draft.validate().is_err());
        draft.invoice_prefix = "PK-1".to_string();
        assert!(draft.validate().is_err());
        draft.invoice_prefix = "KAYA24".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_invoice_number_format() {
        let draft = BillingDraft {
            invoice_prefix: "PK".to_string(),
            next_billing_date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
            ..Default::default()
        };
        assert_eq!(draft.invoice_number(42), "PK-202611-00042");
    }
}
