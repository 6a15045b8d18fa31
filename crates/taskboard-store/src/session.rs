use async_trait::async_trait;
use taskboard_core::TaskboardResult;
use taskboard_domain::User;

/// Credential exchange surface. The interface is async because a real
/// backend would be, even though the demo implementation resolves
/// immediately without I/O.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> TaskboardResult<User>;
}

/// Accepts any credentials and hands back a fixed demo user.
pub struct DemoAuthenticator {
    user: User,
}

impl DemoAuthenticator {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

#[async_trait]
impl Authenticator for DemoAuthenticator {
    async fn login(&self, _email: &str, _password: &str) -> TaskboardResult<User> {
        Ok(self.user.clone())
    }
}

/// At most one authenticated user at a time, or none.
pub struct AuthSession {
    user: Option<User>,
    authenticator: Box<dyn Authenticator>,
}

impl AuthSession {
    /// A logged-out session.
    pub fn new(authenticator: Box<dyn Authenticator>) -> Self {
        Self {
            user: None,
            authenticator,
        }
    }

    /// A session that starts already authenticated, as the demo
    /// workspace does.
    pub fn with_user(authenticator: Box<dyn Authenticator>, user: User) -> Self {
        Self {
            user: Some(user),
            authenticator,
        }
    }

    pub async fn login(&mut self, email: &str, password: &str) -> TaskboardResult<&User> {
        let user = self.authenticator.login(email, password).await?;
        tracing::info!("Logged in as {} ({})", user.name, user.email);
        Ok(self.user.insert(user))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!("Logged out {}", user.name);
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_domain::seed;

    fn demo_session() -> AuthSession {
        let user = seed::demo_team().remove(0);
        AuthSession::new(Box::new(DemoAuthenticator::new(user)))
    }

    #[tokio::test]
    async fn test_login_always_succeeds_and_installs_demo_user() {
        let mut session = demo_session();
        assert!(!session.is_authenticated());

        let user = session.login("anyone@anywhere", "hunter2").await.unwrap();
        assert_eq!(user.name, "Emaya");
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_repeated_login_keeps_a_single_user() {
        let mut session = demo_session();
        session.login("a@b", "x").await.unwrap();
        session.login("c@d", "y").await.unwrap();

        assert!(session.user().is_some());
    }

    #[tokio::test]
    async fn test_logout_clears_the_session() {
        let mut session = demo_session();
        session.login("a@b", "x").await.unwrap();
        session.logout();

        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }
}
