//! Login and registration forms

use log::{debug, info};

use super::inflight::FormStatus;
use super::validation::{Field, ValidationError};
use super::{Notice, Outcome, Route};
use crate::client::AuthApi;
use crate::client::models::{LoginRequest, RegisterRequest, Role};
use crate::error::{ApiError, Error, Result};
use crate::session::{Session, SessionStore};

/// Shortest password accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

fn check_email(errors: &mut ValidationError, email: &str) {
    let email = email.trim();
    if !email.is_empty() && !email.contains('@') {
        errors.reject(Field::Email, "must be a valid email address");
    }
}

/// Credentials for `POST /api/auth/login`
#[derive(Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    status: FormStatus,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            status: FormStatus::default(),
        }
    }

    pub fn validate(&self) -> std::result::Result<LoginRequest, ValidationError> {
        let mut errors = ValidationError::default();
        errors.require(Field::Email, &self.email);
        errors.require(Field::Password, &self.password);
        check_email(&mut errors, &self.email);
        errors.into_result()?;

        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    /// Sign in and persist the session.
    ///
    /// The store is written only after the API accepted the credentials; a
    /// failure leaves whatever session was there before.
    pub async fn submit<A, S>(&self, api: &A, store: &S) -> Result<Outcome>
    where
        A: AuthApi + ?Sized,
        S: SessionStore + ?Sized,
    {
        self.status.clear_error();
        let request = self.validate().map_err(|e| {
            self.status.set_error(e.to_string());
            Error::from(e)
        })?;

        debug!("Logging in as {}", request.email);
        let response = match self.status.run(api.login(&request)).await {
            Ok(response) if response.token.is_empty() => {
                let err: Error =
                    ApiError::InvalidResponse("Login response had no token".to_string()).into();
                self.status.set_error(err.to_string());
                return Err(err);
            }
            Ok(response) => response,
            Err(Error::Busy) => return Err(Error::Busy),
            Err(err) => {
                self.status.set_error(err.to_string());
                return Err(err);
            }
        };

        info!("Signed in as {} ({})", response.user.email, response.user.role);
        store.set(Session {
            token: response.token,
            user: response.user,
        })?;

        Ok(Outcome::navigate(
            Notice::success("Login successful!"),
            Route::Dashboard,
        ))
    }

    pub fn error(&self) -> Option<String> {
        self.status.error()
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    pub fn cancel(&self) {
        self.status.cancel();
    }
}

/// Profile for `POST /api/auth/register`
#[derive(Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    status: FormStatus,
}

impl RegisterForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role,
            status: FormStatus::default(),
        }
    }

    pub fn validate(&self) -> std::result::Result<RegisterRequest, ValidationError> {
        let mut errors = ValidationError::default();
        errors.require(Field::Name, &self.name);
        errors.require(Field::Email, &self.email);
        errors.require(Field::Password, &self.password);
        check_email(&mut errors, &self.email);
        if !self.password.is_empty() && self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.reject(
                Field::Password,
                format!("must be at least {} characters", MIN_PASSWORD_LEN),
            );
        }
        errors.into_result()?;

        Ok(RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
        })
    }

    /// Create the account. Does not sign in: the user is sent to login next.
    pub async fn submit<A>(&self, api: &A) -> Result<Outcome>
    where
        A: AuthApi + ?Sized,
    {
        self.status.clear_error();
        let request = self.validate().map_err(|e| {
            self.status.set_error(e.to_string());
            Error::from(e)
        })?;

        debug!("Registering {} as {}", request.email, request.role);
        match self.status.run(api.register(&request)).await {
            Ok(_) => Ok(Outcome::navigate(
                Notice::success("Account created! Please login."),
                Route::Login,
            )),
            Err(Error::Busy) => Err(Error::Busy),
            Err(err) => {
                self.status.set_error(err.to_string());
                Err(err)
            }
        }
    }

    pub fn error(&self) -> Option<String> {
        self.status.error()
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    pub fn cancel(&self) {
        self.status.cancel();
    }
}

/// Drop the stored session
pub fn logout<S: SessionStore + ?Sized>(store: &S) -> Result<Outcome> {
    let had_session = store.get().ok().flatten().is_some();
    store.clear()?;

    let notice = if had_session {
        Notice::success("Logged out")
    } else {
        Notice::info("Not logged in")
    };
    Ok(Outcome::navigate(notice, Route::Login))
}
