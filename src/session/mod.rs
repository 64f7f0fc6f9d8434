//! Session resolution.
//!
//! The store is polled at every command boundary (the CLI analogue of
//! re-checking on route navigation); there is no change subscription, so a
//! concurrent logout elsewhere is only observed at the next command.

pub mod store;

use crate::models::user::{UserProfile, UserRole};
use store::CredentialStore;

/// The client's cached authenticated identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    /// Stored but never exercised: there is no local refresh flow, the access
    /// token is used until the server rejects it.
    pub refresh_token: String,
    pub user: Option<UserProfile>,
}

/// Resolved session, as a closed variant so every gating point matches
/// exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No usable access token in the store.
    Unauthenticated,
    Student(UserProfile),
    Admin(UserProfile),
    /// A token is present but the cached profile is absent or carries no
    /// recognized role.
    UnknownRole,
}

impl SessionState {
    /// True iff the store held a non-empty access token.
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, SessionState::Unauthenticated)
    }

    pub fn role(&self) -> Option<UserRole> {
        match self {
            SessionState::Student(_) => Some(UserRole::Student),
            SessionState::Admin(_) => Some(UserRole::Admin),
            SessionState::Unauthenticated | SessionState::UnknownRole => None,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Student(p) | SessionState::Admin(p) => Some(p),
            SessionState::Unauthenticated | SessionState::UnknownRole => None,
        }
    }
}

/// Derive the current session state from the store.
pub fn resolve(store: &CredentialStore) -> SessionState {
    let Some(session) = store.get() else {
        return SessionState::Unauthenticated;
    };
    if session.access_token.is_empty() {
        return SessionState::Unauthenticated;
    }
    match session.user {
        Some(profile) => match profile.role() {
            Some(UserRole::Student) => SessionState::Student(profile),
            Some(UserRole::Admin) => SessionState::Admin(profile),
            None => SessionState::UnknownRole,
        },
        None => SessionState::UnknownRole,
    }
}
