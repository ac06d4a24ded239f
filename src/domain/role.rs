// Role domain model
use super::errors::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four classifications a session can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    School,
    Parent,
    Student,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::School, Role::Parent, Role::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::School => "school",
            Role::Parent => "parent",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownRole(s.to_string()))
    }
}
