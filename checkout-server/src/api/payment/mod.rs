//! Payment webhook API 模块
//!
//! 网关回调不经过用户身份层；payload 里回显的 order_id 即是定位依据。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/notification", post(handler::notification))
}
