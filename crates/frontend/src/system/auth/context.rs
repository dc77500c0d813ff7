use contracts::system::identity::UserProfile;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// Not synced yet.
    Unknown,
    SignedIn,
    SignedOut,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Unknown => "unknown",
            SessionStatus::SignedIn => "signed-in",
            SessionStatus::SignedOut => "signed-out",
        }
    }
}

/// Identity capability: who is signed in, if anyone.
#[derive(Clone, Copy)]
pub struct IdentityContext {
    user: RwSignal<Option<UserProfile>>,
    status: RwSignal<SessionStatus>,
}

impl IdentityContext {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            status: RwSignal::new(SessionStatus::Unknown),
        }
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.user.get()
    }

    pub fn status(&self) -> SessionStatus {
        self.status.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.get() == SessionStatus::SignedIn
    }

    /// Replace the current identity.
    pub fn set_user(&self, user: Option<UserProfile>) {
        let status = if user.is_some() {
            SessionStatus::SignedIn
        } else {
            SessionStatus::SignedOut
        };
        self.user.set(user);
        self.status.set(status);
    }

    /// Drop the persisted session and the in-memory identity.
    pub fn sign_out(&self) {
        storage::clear_session();
        self.set_user(None);
        log::info!("Signed out");
    }
}

impl Default for IdentityContext {
    fn default() -> Self {
        Self::new()
    }
}
