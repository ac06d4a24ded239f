// Navigation domain model
use super::role::Role;

pub const DEFAULT_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub roles: &'static [Role],
}

impl NavigationItem {
    pub fn permits(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// A navigation item as shown to one role, marked against the current path.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NavigationEntry {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

pub const NAVIGATION: &[NavigationItem] = &[
    NavigationItem {
        name: "Dashboard",
        href: "/dashboard",
        icon: "layout-dashboard",
        roles: &[Role::Admin, Role::School, Role::Parent, Role::Student],
    },
    NavigationItem {
        name: "Users",
        href: "/users",
        icon: "users",
        roles: &[Role::Admin, Role::School],
    },
    NavigationItem {
        name: "Classes",
        href: "/classes",
        icon: "graduation-cap",
        roles: &[Role::Admin, Role::School, Role::Student],
    },
    NavigationItem {
        name: "Schedule",
        href: "/schedule",
        icon: "calendar",
        roles: &[Role::Admin, Role::School, Role::Parent, Role::Student],
    },
    NavigationItem {
        name: "Reports",
        href: "/reports",
        icon: "file-text",
        roles: &[Role::Admin, Role::School, Role::Parent],
    },
    NavigationItem {
        name: "Settings",
        href: "/settings",
        icon: "settings",
        roles: &[Role::Admin, Role::School, Role::Parent, Role::Student],
    },
];

/// Entries visible to `role`, in table order.
pub fn for_role(role: Role, current_path: &str) -> Vec<NavigationEntry> {
    NAVIGATION
        .iter()
        .filter(|item| item.permits(role))
        .map(|item| NavigationEntry {
            name: item.name,
            href: item.href,
            icon: item.icon,
            active: item.href == current_path,
        })
        .collect()
}
