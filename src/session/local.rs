use super::{IdentityProvider, Session, User};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Sign-in links stop working after this many minutes.
pub const LINK_TTL_MINUTES: i64 = 15;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PendingLink {
    email: String,
    token: String,
    expires_at: DateTime<Utc>,
}

/// File-backed identity provider for a single privileged account.
///
/// "Sending" a link appends it to `outbox.yaml` in the state directory; the
/// token from that file completes the login. Only `admin_email` can sign in.
pub struct LocalIdentity {
    dir: PathBuf,
    admin_email: String,
}

impl LocalIdentity {
    pub fn new(dir: PathBuf, admin_email: &str) -> Self {
        Self {
            dir,
            admin_email: admin_email.trim().to_string(),
        }
    }

    fn session_file(&self) -> PathBuf {
        self.dir.join("session.yaml")
    }

    pub fn outbox_file(&self) -> PathBuf {
        self.dir.join("outbox.yaml")
    }

    fn read_pending(&self) -> Option<PendingLink> {
        let content = fs::read_to_string(self.outbox_file()).ok()?;
        serde_yaml::from_str(&content).ok()
    }
}

impl IdentityProvider for LocalIdentity {
    fn get_session(&self) -> AppResult<Option<Session>> {
        let Ok(content) = fs::read_to_string(self.session_file()) else {
            return Ok(None);
        };
        match serde_yaml::from_str::<Session>(&content) {
            Ok(s) => Ok(Some(s)),
            Err(e) => {
                log::warn!("discarding unreadable session file: {e}");
                Ok(None)
            }
        }
    }

    fn send_login_link(&self, email: &str) -> AppResult<()> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::Auth(format!("'{email}' is not an email address")));
        }
        if self.admin_email.is_empty() {
            return Err(AppError::MissingCredentials(
                "no admin_email configured".to_string(),
            ));
        }
        if !email.eq_ignore_ascii_case(&self.admin_email) {
            return Err(AppError::Auth(format!("{email} is not allowed to sign in")));
        }

        let link = PendingLink {
            email: email.to_string(),
            token: Uuid::new_v4().simple().to_string(),
            expires_at: Utc::now() + Duration::minutes(LINK_TTL_MINUTES),
        };

        fs::create_dir_all(&self.dir)?;
        fs::write(self.outbox_file(), serde_yaml::to_string(&link)?)?;
        log::info!("login link issued for {email}");
        Ok(())
    }

    fn verify_link(&self, token: &str) -> AppResult<Session> {
        let pending = self
            .read_pending()
            .ok_or_else(|| AppError::Auth("no login link is pending".to_string()))?;

        if pending.token != token.trim() {
            return Err(AppError::Auth("invalid login token".to_string()));
        }
        if Utc::now() > pending.expires_at {
            return Err(AppError::Auth("login link expired, request a new one".to_string()));
        }

        let session = Session {
            user: User {
                email: pending.email,
            },
            issued_at: Utc::now(),
        };

        fs::write(self.session_file(), serde_yaml::to_string(&session)?)?;
        fs::remove_file(self.outbox_file()).ok();
        Ok(session)
    }

    fn sign_out(&self) -> AppResult<()> {
        match fs::remove_file(self.session_file()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
