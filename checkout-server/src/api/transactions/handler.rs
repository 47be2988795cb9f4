//! Transactions API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use shared::models::{CheckoutRequest, StatusUpdateRequest, TransactionView};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

/// POST /api/transactions - 创建订单（结算）
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<ApiResponse<TransactionView>>> {
    if payload.orders.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyCheckout));
    }
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let view = state.checkout.create_order(&current_user.id, payload).await?;
    Ok(Json(ApiResponse::ok_with_message(
        view,
        "Order has been created",
    )))
}

/// GET /api/transactions - 获取所有订单（管理员）
pub async fn list(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<ApiResponse<Vec<TransactionView>>>> {
    current_user.require_admin()?;
    let views = state.checkout.list_orders().await?;
    Ok(Json(ApiResponse::ok(views)))
}

/// GET /api/user-transactions - 获取当前用户订单
pub async fn list_own(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<ApiResponse<Vec<TransactionView>>>> {
    let views = state.checkout.list_user_orders(&current_user.id).await?;
    Ok(Json(ApiResponse::ok(views)))
}

/// GET /api/transactions/:id - 获取订单详情
pub async fn get_by_id(
    State(state): State<ServerState>,
    _current_user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<TransactionView>>> {
    let view = state.checkout.get_order(&id).await?;
    Ok(Json(ApiResponse::ok(view)))
}

/// PATCH /api/transactions/:id - 更新订单状态（管理员覆盖）
pub async fn update_status(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    current_user.require_admin()?;
    state.checkout.update_status(&id, payload.status).await?;
    Ok(Json(ApiResponse::ok_with_message(
        (),
        "Order status has been updated",
    )))
}
