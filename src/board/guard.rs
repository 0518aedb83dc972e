//! Session gate for protected actions

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::session::{Session, SessionStore};

/// Current session, or [`Error::LoginRequired`] with `message`.
///
/// Never touches the network.
pub fn require_session<S: SessionStore + ?Sized>(store: &S, message: &str) -> Result<Session> {
    match store.get()? {
        Some(session) => Ok(session),
        None => {
            debug!("No session: {}", message);
            Err(Error::LoginRequired(message.to_string()))
        }
    }
}

/// Apply the side effect of a failed authenticated call and hand the error back.
///
/// A 401 means the token is no longer accepted, so the session is cleared.
pub fn expire_on_unauthorized<S: SessionStore + ?Sized>(store: &S, err: Error) -> Error {
    if err.is_unauthorized() {
        warn!("API rejected the session token; signing out");
        if let Err(clear_err) = store.clear() {
            warn!("Failed to clear session: {}", clear_err);
        }
    }
    err
}
