// Session record domain model
use super::role::Role;
use serde::{Deserialize, Serialize};

/// The authenticated identity bound to the current client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn new(id: String, name: String, role: Role, email: String) -> Self {
        Self {
            id,
            name,
            role,
            email,
            avatar: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_omitted_when_absent() {
        let user = User::new("7".into(), "sam".into(), Role::Student, "sam@example.com".into());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("avatar").is_none());
        assert_eq!(json["role"], "student");
    }

    #[test]
    fn test_decode_without_avatar() {
        let user: User = serde_json::from_str(
            r#"{"id":"1","name":"jane","role":"parent","email":"jane@example.com"}"#,
        )
        .unwrap();
        assert_eq!(user.avatar, None);
        assert_eq!(user.role, Role::Parent);
    }
}
