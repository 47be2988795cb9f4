//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`carts`] - 购物车接口
//! - [`transactions`] - 结算与订单接口
//! - [`payment`] - 支付网关回调

pub mod carts;
pub mod health;
pub mod payment;
pub mod transactions;

use crate::core::ServerState;
use axum::Router;

/// Compose the full API router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(carts::router())
        .merge(transactions::router())
        .merge(payment::router())
}
