//! Shared types for the checkout platform
//!
//! Domain models, the unified error system and small utilities used by
//! both `checkout-server` and any future admin tooling.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-export 公共类型
pub use error::{AppError, AppResult, ErrorCode};
pub use response::ApiResponse;
