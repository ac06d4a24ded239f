// Credential check used by the session store
use crate::domain::errors::DashboardError;
use crate::domain::role::Role;
use crate::domain::user::User;
use async_trait::async_trait;

#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Exchange credentials for a session record
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, DashboardError>;
}

/// Accepts any credentials and fabricates an admin user from the email.
///
/// Nothing is verified. Swap in a real implementation before exposing the
/// service to anyone.
#[derive(Debug, Clone, Default)]
pub struct MockAuthenticator;

impl MockAuthenticator {
    pub const USER_ID: &'static str = "1";
    pub const ROLE: Role = Role::Admin;
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(&self, email: &str, _password: &str) -> Result<User, DashboardError> {
        let name = email.split('@').next().unwrap_or(email);
        tracing::warn!(email, "Mock login accepted without credential verification");
        Ok(User::new(
            Self::USER_ID.to_string(),
            name.to_string(),
            Self::ROLE,
            email.to_string(),
        ))
    }
}
