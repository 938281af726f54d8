/// User identity type
use serde::{Deserialize, Serialize};

/// Identity of the logged-in user, as reported by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

impl User {
    /// Create a user identity.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
