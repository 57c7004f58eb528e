//! Staff account management.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{PLUS, TRASH};

use crate::error::{AppError, Result};
use crate::ui::components::{SaveStatus, colors, save_reset_row, save_status, section};

/// Staff role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Administrator,
    Practitioner,
    #[default]
    Therapist,
    Receptionist,
}

impl Role {
    const ALL: [Role; 4] = [
        Role::Administrator,
        Role::Practitioner,
        Role::Therapist,
        Role::Receptionist,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::Practitioner => "Practitioner",
            Role::Therapist => "Therapist",
            Role::Receptionist => "Receptionist",
        }
    }
}

/// One staff account.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccount {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
}

/// Form state for adding an account.
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// User management panel.
///
/// Add, remove, and activation changes edit the draft list; Save commits it.
pub struct UserManagement {
    pub users: Vec<UserAccount>,
    saved: Vec<UserAccount>,
    pub form: UserForm,
    status: SaveStatus,
    form_status: SaveStatus,
}

impl Default for UserManagement {
    fn default() -> Self {
        let users = default_users();
        Self {
            saved: users.clone(),
            users,
            form: UserForm::default(),
            status: None,
            form_status: None,
        }
    }
}

fn default_users() -> Vec<UserAccount> {
    vec![UserAccount {
        name: "Administrator".to_string(),
        email: "admin@panchakarma.local".to_string(),
        role: Role::Administrator,
        is_active: true,
    }]
}

/// Active administrators other than the account at `skip`.
fn active_admins_except(users: &[UserAccount], skip: Option<usize>) -> usize {
    users
        .iter()
        .enumerate()
        .filter(|(i, u)| Some(*i) != skip && u.role == Role::Administrator && u.is_active)
        .count()
}

impl UserManagement {
    pub fn is_modified(&self) -> bool {
        self.users != self.saved
    }

    /// Validate the form and append a new account to the draft.
    pub fn add_user(&mut self) -> Result<()> {
        let name = self.form.name.trim();
        let email = self.form.email.trim();

        if name.is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }
        if !email.contains('@') {
            return Err(AppError::validation("Email must contain '@'"));
        }
        if self.users.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
            return Err(AppError::validation(format!("A user with email {} already exists", email)));
        }

        tracing::debug!(email, role = self.form.role.name(), "User added to draft");
        self.users.push(UserAccount {
            name: name.to_string(),
            email: email.to_string(),
            role: self.form.role,
            is_active: true,
        });
        self.form = UserForm::default();
        Ok(())
    }

    /// Remove the account at `index`, keeping at least one active administrator.
    pub fn remove_user(&mut self, index: usize) -> Result<UserAccount> {
        let Some(user) = self.users.get(index) else {
            return Err(AppError::validation("No such user"));
        };

        if user.role == Role::Administrator && active_admins_except(&self.users, Some(index)) == 0 {
            return Err(AppError::validation("Cannot remove the last active administrator"));
        }

        let removed = self.users.remove(index);
        tracing::debug!(email = %removed.email, "User removed from draft");
        Ok(removed)
    }

    /// Activate or deactivate the account at `index`, keeping at least one active administrator.
    pub fn set_active(&mut self, index: usize, active: bool) -> Result<()> {
        let Some(user) = self.users.get(index) else {
            return Err(AppError::validation("No such user"));
        };

        if !active && user.role == Role::Administrator && active_admins_except(&self.users, Some(index)) == 0 {
            return Err(AppError::validation("Cannot deactivate the last active administrator"));
        }

        self.users[index].is_active = active;
        Ok(())
    }

    /// Validate and commit the draft list.
    pub fn save(&mut self) -> Result<()> {
        if active_admins_except(&self.users, None) == 0 {
            return Err(AppError::validation("At least one active administrator is required"));
        }
        for (i, user) in self.users.iter().enumerate() {
            if self.users[..i].iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
                return Err(AppError::validation(format!("Duplicate email: {}", user.email)));
            }
        }

        self.saved = self.users.clone();
        tracing::info!(accounts = self.saved.len(), "User accounts saved");
        Ok(())
    }

    /// Discard the draft and restore the default account list.
    pub fn reset(&mut self) {
        self.users = default_users();
        self.form = UserForm::default();
        self.status = None;
        self.form_status = None;
    }

    pub fn show(&mut self, ui: &mut Ui) {
        let mut remove = None;
        let mut toggle = None;

        section(ui, "Accounts", |ui| {
            ui.label(format!("{} accounts", self.users.len()));
            ui.add_space(8.0);

            egui::Grid::new("users_grid")
                .num_columns(5)
                .striped(true)
                .min_col_width(60.0)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.strong("Name");
                    ui.strong("Email");
                    ui.strong("Role");
                    ui.strong("Active");
                    ui.strong("Actions");
                    ui.end_row();

                    for (i, user) in self.users.iter().enumerate() {
                        ui.label(&user.name);
                        ui.label(&user.email);
                        ui.label(user.role.name());
                        let mut active = user.is_active;
                        if ui.checkbox(&mut active, "").changed() {
                            toggle = Some((i, active));
                        }
                        if ui.button(RichText::new(TRASH).color(colors::ERROR)).clicked() {
                            remove = Some(i);
                        }
                        ui.end_row();
                    }
                });
        });

        if let Some((index, active)) = toggle
            && let Err(e) = self.set_active(index, active)
        {
            self.form_status = Some(Err(e.to_string()));
        }

        if let Some(index) = remove {
            self.form_status = Some(match self.remove_user(index) {
                Ok(user) => Ok(format!("Removed {}", user.name)),
                Err(e) => Err(e.to_string()),
            });
        }

        ui.add_space(15.0);

        section(ui, "Add User", |ui| {
            egui::Grid::new("user_form_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut self.form.name);
                    ui.end_row();

                    ui.label("Email:");
                    ui.text_edit_singleline(&mut self.form.email);
                    ui.end_row();

                    ui.label("Role:");
                    egui::ComboBox::from_id_salt("user_role")
                        .width(180.0)
                        .selected_text(self.form.role.name())
                        .show_ui(ui, |ui| {
                            for role in Role::ALL {
                                ui.selectable_value(&mut self.form.role, role, role.name());
                            }
                        });
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(format!("{} Add User", PLUS)).clicked() {
                    self.form_status = Some(match self.add_user() {
                        Ok(()) => Ok("User added".to_string()),
                        Err(e) => Err(e.to_string()),
                    });
                }
                save_status(ui, self.form_status.as_ref());
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
            self.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(panel: &mut UserManagement, name: &str, email: &str, role: Role) {
        panel.form = UserForm {
            name: name.to_string(),
            email: email.to_string(),
            role,
        };
    }

    #[test]
    fn test_add_user() {
        let mut panel = UserManagement::default();
        fill(&mut panel, "Dr. Meera Nair", "meera@panchakarma.local", Role::Practitioner);
        panel.add_user().unwrap();

        assert_eq!(panel.users.len(), 2);
        assert_eq!(panel.users[1].role, Role::Practitioner);
        assert!(panel.form.name.is_empty());
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let mut panel = UserManagement::default();
        fill(&mut panel, "Second Admin", "ADMIN@panchakarma.local", Role::Administrator);
        assert!(panel.add_user().is_err());
        assert_eq!(panel.users.len(), 1);
    }

    #[test]
    fn test_invalid_form_rejected() {
        let mut panel = UserManagement::default();
        fill(&mut panel, "", "someone@panchakarma.local", Role::Therapist);
        assert!(panel.add_user().is_err());

        fill(&mut panel, "Ravi", "ravi", Role::Therapist);
        assert!(panel.add_user().is_err());
    }

    #[test]
    fn test_last_admin_cannot_be_removed() {
        let mut panel = UserManagement::default();
        assert!(panel.remove_user(0).is_err());

        fill(&mut panel, "Deputy", "deputy@panchakarma.local", Role::Administrator);
        panel.add_user().unwrap();
        assert!(panel.remove_user(0).is_ok());
        assert_eq!(panel.users.len(), 1);
        assert_eq!(panel.users[0].email, "deputy@panchakarma.local");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut panel = UserManagement::default();
        assert!(panel.remove_user(5).is_err());
    }

    #[test]
    fn test_last_admin_cannot_be_deactivated() {
        let mut panel = UserManagement::default();
        assert!(panel.set_active(0, false).is_err());
        assert!(panel.users[0].is_active);
        assert_eq!(active_admins_except(&panel.users, None), 1);
    }

    #[test]
    fn test_deactivate_admin_when_another_is_active() {
        let mut panel = UserManagement::default();
        fill(&mut panel, "Deputy", "deputy@panchakarma.local", Role::Administrator);
        panel.add_user().unwrap();

        panel.set_active(0, false).unwrap();
        assert!(!panel.users[0].is_active);

        // The deputy is now the only active administrator
        assert!(panel.set_active(1, false).is_err());
        assert!(panel.remove_user(1).is_err());
    }

    #[test]
    fn test_deactivate_non_admin() {
        let mut panel = UserManagement::default();
        fill(&mut panel, "Anita", "anita@panchakarma.local", Role::Therapist);
        panel.add_user().unwrap();

        panel.set_active(1, false).unwrap();
        assert!(!panel.users[1].is_active);
        panel.set_active(1, true).unwrap();
        assert!(panel.users[1].is_active);
        assert!(panel.set_active(9, false).is_err());
    }

    #[test]
    fn test_save_commits_draft() {
        let mut panel = UserManagement::default();
        assert!(!panel.is_modified());

        fill(&mut panel, "Dr. Meera Nair", "meera@panchakarma.local", Role::Practitioner);
        panel.add_user().unwrap();
        assert!(panel.is_modified());

        panel.save().unwrap();
        assert!(!panel.is_modified());
    }

    #[test]
    fn test_save_requires_active_admin() {
        let mut panel = UserManagement::default();
        panel.users[0].is_active = false;
        assert!(panel.save().is_err());
        assert!(panel.is_modified());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut panel = UserManagement::default();
        fill(&mut panel, "Anita", "anita@panchakarma.local", Role::Therapist);
        panel.add_user().unwrap();
        fill(&mut panel, "Half typed", "", Role::Receptionist);

        panel.reset();

        assert_eq!(panel.users, default_users());
        assert!(panel.form.name.is_empty());
        assert!(!panel.is_modified());
    }
}
