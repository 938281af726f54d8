//! Mock auth session.

use tracing::{info, warn};
use tunebox_core::User;

/// Minimum accepted secret length.
const MIN_SECRET_LEN: usize = 6;

/// Auth session state: logged-in user or anonymous.
///
/// Pages gate access on `is_authenticated`; the session manager never
/// consults this directly.
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    user: Option<User>,
}

impl AuthSession {
    /// Create an anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt a login.
    ///
    /// Mock semantics: succeeds for any email containing '@' with a secret
    /// of at least six characters. The display name is the email local
    /// part.
    pub fn login(&mut self, email: &str, secret: &str) -> bool {
        let email = email.trim();
        if !email.contains('@') || email.starts_with('@') || secret.len() < MIN_SECRET_LEN {
            warn!(email = %email, "Login rejected");
            return false;
        }

        let name = email
            .split('@')
            .next()
            .unwrap_or(email)
            .to_string();

        info!(email = %email, name = %name, "Logged in");
        self.user = Some(User::new(name, email));
        true
    }

    /// Clear the session.
    pub fn logout(&mut self) {
        if self.user.take().is_some() {
            info!("Logged out");
        }
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Identity of the logged-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}
