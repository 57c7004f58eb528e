//! Static route table for the navigation rail.

use egui_phosphor::regular::{
    BELL, BUILDINGS, CALENDAR, CHART_LINE, FLOWER_LOTUS, GEAR, HANDSHAKE, SQUARES_FOUR, STETHOSCOPE,
    USERS_THREE,
};

/// Top-level destination in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Scheduler,
    Patients,
    Sessions,
    Protocols,
    Notifications,
    Analytics,
    Centers,
    Collaboration,
    Settings,
}

impl Route {
    /// Destination path, as shown in links and stored in config.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Scheduler => "/scheduler",
            Route::Patients => "/patients",
            Route::Sessions => "/sessions",
            Route::Protocols => "/protocols",
            Route::Notifications => "/notifications",
            Route::Analytics => "/analytics",
            Route::Centers => "/centers",
            Route::Collaboration => "/collaboration",
            Route::Settings => "/settings",
        }
    }

    /// Page title shown in the header region.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Scheduler => "Therapy Scheduler",
            Route::Patients => "Patients",
            Route::Sessions => "Sessions",
            Route::Protocols => "Protocols",
            Route::Notifications => "Notifications",
            Route::Analytics => "Analytics",
            Route::Centers => "Centers",
            Route::Collaboration => "Collaboration",
            Route::Settings => "Settings",
        }
    }

    /// Look up a route by its exact destination path.
    pub fn from_path(path: &str) -> Option<Route> {
        NAV_ENTRIES.iter().map(|e| e.route).find(|r| r.path() == path)
    }
}

/// Icon identifier for a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Calendar,
    Patients,
    Sessions,
    Protocols,
    Bell,
    Chart,
    Buildings,
    Handshake,
    Gear,
}

impl NavIcon {
    /// Phosphor glyph rendered for this icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Dashboard => SQUARES_FOUR,
            NavIcon::Calendar => CALENDAR,
            NavIcon::Patients => USERS_THREE,
            NavIcon::Sessions => STETHOSCOPE,
            NavIcon::Protocols => FLOWER_LOTUS,
            NavIcon::Bell => BELL,
            NavIcon::Chart => CHART_LINE,
            NavIcon::Buildings => BUILDINGS,
            NavIcon::Handshake => HANDSHAKE,
            NavIcon::Gear => GEAR,
        }
    }
}

/// One entry of the navigation rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub route: Route,
    pub icon: NavIcon,
}

impl NavEntry {
    const fn new(label: &'static str, route: Route, icon: NavIcon) -> Self {
        Self { label, route, icon }
    }

    /// Destination path of this entry.
    pub fn path(&self) -> &'static str {
        self.route.path()
    }
}

/// Navigation entries in display order.
pub static NAV_ENTRIES: [NavEntry; 10] = [
    NavEntry::new("Dashboard", Route::Dashboard, NavIcon::Dashboard),
    NavEntry::new("Scheduler", Route::Scheduler, NavIcon::Calendar),
    NavEntry::new("Patients", Route::Patients, NavIcon::Patients),
    NavEntry::new("Sessions", Route::Sessions, NavIcon::Sessions),
    NavEntry::new("Protocols", Route::Protocols, NavIcon::Protocols),
    NavEntry::new("Notifications", Route::Notifications, NavIcon::Bell),
    NavEntry::new("Analytics", Route::Analytics, NavIcon::Chart),
    NavEntry::new("Centers", Route::Centers, NavIcon::Buildings),
    NavEntry::new("Collaboration", Route::Collaboration, NavIcon::Handshake),
    NavEntry::new("Settings", Route::Settings, NavIcon::Gear),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_entries_declared_paths() {
        let paths: Vec<_> = NAV_ENTRIES.iter().map(|e| e.path()).collect();
        assert_eq!(
            paths,
            [
                "/dashboard",
                "/scheduler",
                "/patients",
                "/sessions",
                "/protocols",
                "/notifications",
                "/analytics",
                "/centers",
                "/collaboration",
                "/settings",
            ]
        );
    }

    #[test]
    fn test_entries_unique() {
        let routes: HashSet<_> = NAV_ENTRIES.iter().map(|e| e.route).collect();
        assert_eq!(routes.len(), NAV_ENTRIES.len());
    }

    #[test]
    fn test_from_path() {
        for entry in &NAV_ENTRIES {
            assert_eq!(Route::from_path(entry.path()), Some(entry.route));
        }
        assert_eq!(Route::from_path("/billing"), None);
        assert_eq!(Route::from_path("dashboard"), None);
        assert_eq!(Route::from_path("/Dashboard"), None);
    }

    #[test]
    fn test_default_route() {
        assert_eq!(Route::default(), Route::Dashboard);
    }

    #[test]
    fn test_settings_is_last() {
        let last = NAV_ENTRIES.last().map(|e| e.route);
        assert_eq!(last, Some(Route::Settings));
    }
}
