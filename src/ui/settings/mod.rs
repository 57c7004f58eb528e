//! Settings page: a tab bar over six administrative panels.
//!
//! Only the selected panel exists at any time. Switching tabs drops the
//! previous panel's state, so unsaved edits are discarded.

mod billing;
mod data;
mod general;
mod security;
mod system;
mod users;

use eframe::egui::{self, Rect, RichText, Ui};

pub use billing::{BillingDraft, BillingSettings};
pub use data::{DataManagement, RetentionPolicy, export_policy};
pub use general::{GeneralDraft, GeneralSettings};
pub use security::{SecurityDraft, SecuritySettings};
pub use system::{SystemConfiguration, SystemDraft};
pub use users::{Role, UserAccount, UserForm, UserManagement};

/// Settings tab identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SettingsTab {
    #[default]
    General,
    Users,
    System,
    Billing,
    Security,
    Data,
}

impl SettingsTab {
    /// All tabs in tab-bar order.
    pub const ALL: [SettingsTab; 6] = [
        SettingsTab::General,
        SettingsTab::Users,
        SettingsTab::System,
        SettingsTab::Billing,
        SettingsTab::Security,
        SettingsTab::Data,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SettingsTab::General => "general",
            SettingsTab::Users => "users",
            SettingsTab::System => "system",
            SettingsTab::Billing => "billing",
            SettingsTab::Security => "security",
            SettingsTab::Data => "data",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Users => "Users",
            SettingsTab::System => "System",
            SettingsTab::Billing => "Billing",
            SettingsTab::Security => "Security",
            SettingsTab::Data => "Data",
        }
    }

    pub fn from_id(id: &str) -> Option<SettingsTab> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

/// The one mounted settings panel.
pub enum ActivePanel {
    General(GeneralSettings),
    Users(UserManagement),
    System(SystemConfiguration),
    Billing(BillingSettings),
    Security(SecuritySettings),
    Data(DataManagement),
}

impl ActivePanel {
    /// Construct a fresh panel for `tab`.
    pub fn mount(tab: SettingsTab) -> Self {
        match tab {
            SettingsTab::General => ActivePanel::General(GeneralSettings::default()),
            SettingsTab::Users => ActivePanel::Users(UserManagement::default()),
            SettingsTab::System => ActivePanel::System(SystemConfiguration::default()),
            SettingsTab::Billing => ActivePanel::Billing(BillingSettings::default()),
            SettingsTab::Security => ActivePanel::Security(SecuritySettings::default()),
            SettingsTab::Data => ActivePanel::Data(DataManagement::default()),
        }
    }

    pub fn tab(&self) -> SettingsTab {
        match self {
            ActivePanel::General(_) => SettingsTab::General,
            ActivePanel::Users(_) => SettingsTab::Users,
            ActivePanel::System(_) => SettingsTab::System,
            ActivePanel::Billing(_) => SettingsTab::Billing,
            ActivePanel::Security(_) => SettingsTab::Security,
            ActivePanel::Data(_) => SettingsTab::Data,
        }
    }

    fn show(&mut self, ui: &mut Ui) {
        match self {
            ActivePanel::General(panel) => panel.show(ui),
            ActivePanel::Users(panel) => panel.show(ui),
            ActivePanel::System(panel) => panel.show(ui),
            ActivePanel::Billing(panel) => panel.show(ui),
            ActivePanel::Security(panel) => panel.show(ui),
            ActivePanel::Data(panel) => panel.show(ui),
        }
    }
}

/// Settings page state.
pub struct SettingsHost {
    active: ActivePanel,
    mounts: usize,
    /// Tab bar buttons as drawn in the last frame.
    tab_rects: Vec<(SettingsTab, Rect)>,
}

impl Default for SettingsHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsHost {
    /// New host with the General panel mounted.
    pub fn new() -> Self {
        tracing::debug!(tab = SettingsTab::General.id(), "Mounted settings panel");
        Self {
            active: ActivePanel::mount(SettingsTab::General),
            mounts: 1,
            tab_rects: Vec::new(),
        }
    }

    pub fn active_tab(&self) -> SettingsTab {
        self.active.tab()
    }

    pub fn active_panel(&self) -> &ActivePanel {
        &self.active
    }

    pub fn active_panel_mut(&mut self) -> &mut ActivePanel {
        &mut self.active
    }

    /// Number of panels mounted over the host's lifetime.
    pub fn mount_count(&self) -> usize {
        self.mounts
    }

    /// Screen rect of the tab button for `tab`, once the tab bar has been drawn.
    pub fn tab_rect(&self, tab: SettingsTab) -> Option<Rect> {
        self.tab_rects.iter().find(|(t, _)| *t == tab).map(|(_, rect)| *rect)
    }

    /// Select a tab. Returns `true` if a different panel was mounted.
    pub fn select(&mut self, tab: SettingsTab) -> bool {
        if tab == self.active.tab() {
            return false;
        }

        tracing::debug!(from = self.active.tab().id(), to = tab.id(), "Switching settings tab");
        self.active = ActivePanel::mount(tab);
        self.mounts += 1;
        true
    }

    /// Show the settings page.
    pub fn show(&mut self, ui: &mut Ui) {
        let mut selected = None;
        self.tab_rects.clear();

        ui.horizontal(|ui| {
            for tab in SettingsTab::ALL {
                let is_active = tab == self.active.tab();
                let text = RichText::new(tab.label()).size(15.0);
                let response = ui.selectable_label(is_active, text);
                if response.clicked() {
                    selected = Some(tab);
                }
                self.tab_rects.push((tab, response.rect));
                ui.add_space(4.0);
            }
        });
        ui.separator();
        ui.add_space(10.0);

        if let Some(tab) = selected {
            self.select(tab);
        }

        egui::ScrollArea::vertical()
            .id_salt(("settings_scroll", self.active.tab().id()))
            .show(ui, |ui| self.active.show(ui));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{TestUi, run_frame};

    /// Which of the six panels are mounted, in tab order.
    fn mounted(host: &SettingsHost) -> [bool; 6] {
        let panel = host.active_panel();
        [
            matches!(panel, ActivePanel::General(_)),
            matches!(panel, ActivePanel::Users(_)),
            matches!(panel, ActivePanel::System(_)),
            matches!(panel, ActivePanel::Billing(_)),
            matches!(panel, ActivePanel::Security(_)),
            matches!(panel, ActivePanel::Data(_)),
        ]
    }

    fn only(tab: SettingsTab) -> [bool; 6] {
        SettingsTab::ALL.map(|t| t == tab)
    }

    #[test]
    fn test_initial_tab_is_general() {
        let host = SettingsHost::new();
        assert_eq!(host.active_tab(), SettingsTab::General);
        assert_eq!(mounted(&host), only(SettingsTab::General));
        assert_eq!(host.mount_count(), 1);
    }

    #[test]
    fn test_select_mounts_exactly_one_panel() {
        let mut host = SettingsHost::new();

        for tab in SettingsTab::ALL.into_iter().rev() {
            host.select(tab);
            assert_eq!(host.active_tab(), tab);
            assert_eq!(mounted(&host), only(tab));
        }
    }

    #[test]
    fn test_select_same_tab_is_noop() {
        let mut host = SettingsHost::new();
        assert!(host.select(SettingsTab::Billing));
        assert_eq!(host.mount_count(), 2);

        assert!(!host.select(SettingsTab::Billing));
        assert_eq!(host.mount_count(), 2);
        assert_eq!(mounted(&host), only(SettingsTab::Billing));
    }

    #[test]
    fn test_reselect_keeps_unsaved_state() {
        let mut host = SettingsHost::new();
        if let ActivePanel::General(panel) = host.active_panel_mut() {
            panel.draft.clinic_name = "Unsaved name".to_string();
        }

        host.select(SettingsTab::General);

        match host.active_panel() {
            ActivePanel::General(panel) => assert_eq!(panel.draft.clinic_name, "Unsaved name"),
            _ => panic!("general panel should stay mounted"),
        }
    }

    #[test]
    fn test_switching_discards_unsaved_state() {
        let mut host = SettingsHost::new();
        if let ActivePanel::General(panel) = host.active_panel_mut() {
            panel.draft.clinic_name = "Unsaved name".to_string();
        }

        host.select(SettingsTab::Security);
        host.select(SettingsTab::General);

        match host.active_panel() {
            ActivePanel::General(panel) => {
                assert_eq!(panel.draft.clinic_name, GeneralSettings::default().draft.clinic_name);
            }
            _ => panic!("general panel should be mounted"),
        }
        assert_eq!(host.mount_count(), 3);
    }

    #[test]
    fn test_billing_scenario() {
        let mut host = SettingsHost::new();
        assert_eq!(mounted(&host), only(SettingsTab::General));

        assert!(host.select(SettingsTab::Billing));
        assert_eq!(mounted(&host), only(SettingsTab::Billing));
        let mounts = host.mount_count();

        assert!(!host.select(SettingsTab::Billing));
        assert_eq!(mounted(&host), only(SettingsTab::Billing));
        assert_eq!(host.mount_count(), mounts);
    }

    #[test]
    fn test_tab_ids() {
        let ids: Vec<_> = SettingsTab::ALL.iter().map(|t| t.id()).collect();
        assert_eq!(ids, ["general", "users", "system", "billing", "security", "data"]);
        for tab in SettingsTab::ALL {
            assert_eq!(SettingsTab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(SettingsTab::from_id("audit"), None);
    }

    #[test]
    fn test_every_panel_renders() {
        for tab in SettingsTab::ALL {
            let mut host = SettingsHost::new();
            host.select(tab);
            run_frame(|ctx| {
                egui::CentralPanel::default().show(ctx, |ui| host.show(ui));
            });
            assert_eq!(host.active_tab(), tab);
        }
    }

    fn show_host(ctx: &egui::Context, host: &mut SettingsHost) {
        egui::CentralPanel::default().show(ctx, |ui| host.show(ui));
    }

    #[test]
    fn test_tab_rects_recorded_in_order() {
        let mut host = SettingsHost::new();
        assert_eq!(host.tab_rect(SettingsTab::General), None);

        run_frame(|ctx| show_host(ctx, &mut host));

        let rects: Vec<_> = SettingsTab::ALL.iter().filter_map(|t| host.tab_rect(*t)).collect();
        assert_eq!(rects.len(), SettingsTab::ALL.len());
        for pair in rects.windows(2) {
            assert!(pair[0].left() < pair[1].left());
        }
    }

    #[test]
    fn test_clicking_billing_tab_mounts_billing() {
        let ui = TestUi::new();
        let mut host = SettingsHost::new();
        ui.frame(Vec::new(), |ctx| show_host(ctx, &mut host));

        let billing = host.tab_rect(SettingsTab::Billing).unwrap();
        ui.click(billing.center(), |ctx| show_host(ctx, &mut host));

        assert_eq!(host.active_tab(), SettingsTab::Billing);
        assert_eq!(mounted(&host), only(SettingsTab::Billing));
        assert_eq!(host.mount_count(), 2);

        // Clicking the active tab again keeps the mounted panel
        let billing = host.tab_rect(SettingsTab::Billing).unwrap();
        ui.click(billing.center(), |ctx| show_host(ctx, &mut host));

        assert_eq!(mounted(&host), only(SettingsTab::Billing));
        assert_eq!(host.mount_count(), 2);
    }

    #[test]
    fn test_clicking_tab_discards_unsaved_edits() {
        let ui = TestUi::new();
        let mut host = SettingsHost::new();
        if let ActivePanel::General(panel) = host.active_panel_mut() {
            panel.draft.clinic_name = "Unsaved name".to_string();
        }
        ui.frame(Vec::new(), |ctx| show_host(ctx, &mut host));

        let security = host.tab_rect(SettingsTab::Security).unwrap();
        ui.click(security.center(), |ctx| show_host(ctx, &mut host));
        assert_eq!(host.active_tab(), SettingsTab::Security);

        let general = host.tab_rect(SettingsTab::General).unwrap();
        ui.click(general.center(), |ctx| show_host(ctx, &mut host));

        match host.active_panel() {
            ActivePanel::General(panel) => {
                assert_eq!(panel.draft.clinic_name, GeneralSettings::default().draft.clinic_name);
            }
            _ => panic!("general panel should be mounted"),
        }
        assert_eq!(host.mount_count(), 3);
    }
}
