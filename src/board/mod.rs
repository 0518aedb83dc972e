//! Job board flows
//!
//! Each submodule is one screen of the board: it owns the screen's local
//! state and talks to the API through the [`client`](crate::client) traits and
//! to the session through [`SessionStore`](crate::session::SessionStore).
//! Flows never print. Successful actions return an [`Outcome`] (notice plus
//! where to go next); failures return the error, after applying their side
//! effects (a 401 clears the session).

use std::fmt;

pub mod applied;
pub mod auth_forms;
pub mod dashboard;
pub mod guard;
pub mod inflight;
pub mod job_form;
pub mod listing;
pub mod validation;

pub use applied::AppliedSet;
pub use auth_forms::{LoginForm, RegisterForm, logout};
pub use dashboard::DashboardView;
pub use job_form::JobForm;
pub use listing::ListingView;

/// Screen to show after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Login,
}

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// Transient user-visible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of a successful action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Notice,
    pub route: Option<Route>,
}

impl Outcome {
    /// Stay on the current screen
    pub fn stay(notice: Notice) -> Self {
        Self {
            notice,
            route: None,
        }
    }

    /// Navigate to `route`
    pub fn navigate(notice: Notice, route: Route) -> Self {
        Self {
            notice,
            route: Some(route),
        }
    }
}
