//! Identity collaborator and the session gate.

mod local;

pub use local::LocalIdentity;

use crate::errors::AppResult;
use crate::state::ClientState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub issued_at: DateTime<Utc>,
}

/// Magic-link identity provider.
pub trait IdentityProvider {
    /// Current session, `None` when signed out.
    fn get_session(&self) -> AppResult<Option<Session>>;

    /// Deliver a one-time sign-in link to `email`.
    fn send_login_link(&self, email: &str) -> AppResult<()>;

    /// Exchange the token from a delivered link for a session.
    fn verify_link(&self, token: &str) -> AppResult<Session>;

    fn sign_out(&self) -> AppResult<()>;
}

/// Whether loaded rows may be shown: a session for the privileged account
/// must exist and the gate flag must have been set by a successful login.
pub fn rows_visible(session: Option<&Session>, state: &ClientState, admin_email: &str) -> bool {
    let admin = admin_email.trim();
    if admin.is_empty() || !state.session_gate {
        return false;
    }
    session.is_some_and(|s| s.user.email.eq_ignore_ascii_case(admin))
}
