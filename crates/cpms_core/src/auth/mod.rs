//! Demo authentication gate over the session slot.
//!
//! # Responsibility
//! - Restore, establish and clear the single demo session.
//! - Persist the authenticated identity in the `cpms_user` slot.
//!
//! # Invariants
//! - A corrupt session payload is discarded and treated as logged-out;
//!   restoring a session never fails the caller.
//! - Any non-null session is authorized for all operations today; the
//!   per-operation capability check lives on [`User`].

use crate::model::user::User;
use crate::store::backend::StorageBackend;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Durable slot holding the serialized session identity.
pub const USER_SLOT: &str = "cpms_user";

const DEMO_EMAIL: &str = "admin@cpms.com";
const DEMO_PASSWORD: &str = "admin123";

fn demo_user() -> User {
    User {
        id: "1".to_string(),
        email: DEMO_EMAIL.to_string(),
        name: Some("Admin User".to_string()),
        role: "admin".to_string(),
    }
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Errors from authentication operations.
#[derive(Debug)]
pub enum AuthError {
    /// Email/password pair did not match the demo credentials.
    InvalidCredentials,
    /// Session slot write/remove failed.
    PersistFailure(String),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid credentials"),
            Self::PersistFailure(detail) => write!(f, "failed to persist session: {detail}"),
        }
    }
}

impl Error for AuthError {}

/// Session gate over an injected storage backend.
pub struct AuthGate<S: StorageBackend> {
    backend: S,
    current: Option<User>,
}

impl<S: StorageBackend> AuthGate<S> {
    /// Creates a gate with no active session. Call [`load`] to restore one.
    ///
    /// [`load`]: AuthGate::load
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            current: None,
        }
    }

    /// Restores the session from the durable slot, if one exists.
    ///
    /// Unreadable or corrupt payloads are dropped along with the slot; the
    /// user simply has to log in again.
    pub fn load(&mut self) {
        self.current = None;
        let payload = match self.backend.read(USER_SLOT) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("event=session_load module=auth status=error error={err}");
                return;
            }
        };
        let Some(bytes) = payload else {
            return;
        };
        match serde_json::from_slice::<User>(&bytes) {
            Ok(user) => {
                info!(
                    "event=session_load module=auth status=ok user_id={}",
                    user.id
                );
                self.current = Some(user);
            }
            Err(err) => {
                warn!("event=session_load module=auth status=error error_code=parse_failed error={err}");
                let _ = self.backend.remove(USER_SLOT);
            }
        }
    }

    /// Checks credentials and establishes the persisted session.
    pub fn login(&mut self, email: &str, password: &str) -> AuthResult<&User> {
        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            warn!("event=login module=auth status=error error_code=invalid_credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let user = demo_user();
        let bytes = serde_json::to_vec(&user)
            .map_err(|err| AuthError::PersistFailure(err.to_string()))?;
        self.backend
            .write(USER_SLOT, &bytes)
            .map_err(|err| AuthError::PersistFailure(err.to_string()))?;

        info!("event=login module=auth status=ok user_id={}", user.id);
        Ok(self.current.insert(user))
    }

    /// Clears the in-memory session and removes the durable slot.
    pub fn logout(&mut self) -> AuthResult<()> {
        self.current = None;
        self.backend
            .remove(USER_SLOT)
            .map_err(|err| AuthError::PersistFailure(err.to_string()))?;
        info!("event=logout module=auth status=ok");
        Ok(())
    }

    /// Returns the authenticated user, or `None` when logged out.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }
}
