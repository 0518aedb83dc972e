//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::error::Result;

/// Authentication operations for the Job Board API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a bearer token and the user profile
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;

    /// Create an account. Does not sign the user in.
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse>;
}
