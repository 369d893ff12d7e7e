//! Caller authentication against the static `API_USERS` table.

use secrecy::ExposeSecret;

use crate::config::ApiUser;
use crate::dispatch::DestinationKey;

/// Resolves a caller's identity and secret to their webhook destination.
pub trait Authenticator: Send + Sync {
    /// Returns `None` when the pair is unknown.
    fn authenticate(&self, identity: &str, secret: &str) -> Option<DestinationKey>;
}

/// Exact-match lookup over a fixed user list.
pub struct StaticAuthenticator {
    users: Vec<ApiUser>,
}

impl StaticAuthenticator {
    pub fn new(users: Vec<ApiUser>) -> Self {
        Self { users }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, identity: &str, secret: &str) -> Option<DestinationKey> {
        self.users
            .iter()
            .find(|u| u.username == identity && u.key.expose_secret() == secret)
            .map(|u| DestinationKey::new(u.ifttt_key.expose_secret()))
    }
}
