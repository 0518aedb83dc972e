//! Session persistence
//!
//! The session is the bearer token plus the signed-in user's profile. It is
//! written only by login and cleared by logout or by a 401 from the API.
//! Callers receive a [`SessionStore`] rather than reaching for the file.

use std::path::PathBuf;
#[cfg(test)]
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::client::models::UserProfile;
use crate::config::{app_file, write_private};
use crate::error::{ConfigError, Result};

/// Signed-in state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token
    pub token: String,

    /// Profile returned by login
    pub user: UserProfile,
}

/// Read/write/clear access to the current session
pub trait SessionStore: Send + Sync {
    /// Current session, or `None` when signed out.
    ///
    /// A stored session with an empty token counts as signed out.
    fn get(&self) -> Result<Option<Session>>;

    /// Persist both token and user
    fn set(&self, session: Session) -> Result<()>;

    /// Remove token and user
    fn clear(&self) -> Result<()>;
}

/// Session kept in `~/.jobboard/session.yaml`
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Default session file path
    pub fn default_path() -> Result<PathBuf> {
        app_file("session.yaml")
    }

    /// Store at `path`, or at the default location
    pub fn at(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_path()?,
        };
        Ok(Self { path })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let session: Session = serde_yaml::from_str(&contents).map_err(|e| {
            ConfigError::ParseError(format!(
                "session {}: {}. Run `jobboard logout` to reset it.",
                self.path.display(),
                e
            ))
        })?;

        Ok(non_empty(session))
    }

    fn set(&self, session: Session) -> Result<()> {
        let contents =
            serde_yaml::to_string(&session).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        write_private(&self.path, &contents)?;
        log::debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                log::debug!("Session removed from {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory session for flow tests
#[cfg(test)]
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `session`
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<Session>> {
        let session = self.session.lock().unwrap_or_else(|e| e.into_inner());
        Ok(session.clone().and_then(non_empty))
    }

    fn set(&self, session: Session) -> Result<()> {
        *self.session.lock().unwrap_or_else(|e| e.into_inner()) = Some(session);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.session.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

fn non_empty(session: Session) -> Option<Session> {
    if session.token.trim().is_empty() {
        None
    } else {
        Some(session)
    }
}

#[cfg(test)]
pub(crate) fn test_session() -> Session {
    use crate::client::models::Role;

    Session {
        token: "tok-123".to_string(),
        user: UserProfile {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Employer,
        },
    }
}
