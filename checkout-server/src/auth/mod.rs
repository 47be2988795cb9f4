//! Identity boundary
//!
//! Session issuance and verification live in the upstream gateway; by the
//! time a request reaches this service the gateway has injected
//! `x-user-id` / `x-user-role` headers. [`CurrentUser`] is the extractor
//! over that contract.

use axum::extract::FromRequestParts;
use http::request::Parts;
use shared::{AppError, ErrorCode};

/// Authenticated caller identity
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub is_admin: bool,
}

impl CurrentUser {
    /// Admin-only endpoints call this before acting
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(AppError::new(ErrorCode::AdminRequired))
        }
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(AppError::not_authenticated)?
            .to_string();

        let is_admin = parts
            .headers
            .get("x-user-role")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|role| role == "admin");

        Ok(CurrentUser { id, is_admin })
    }
}
