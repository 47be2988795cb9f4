//! Cart API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{RepoError, cart};
use shared::models::{CartItemRequest, CartLine, CartLineView, CartUpdateRequest};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

/// A missing cart row gets its own 4xxx code instead of the generic 404
fn cart_error(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(msg) => AppError::with_message(ErrorCode::CartItemNotFound, msg),
        other => other.into(),
    }
}

/// GET /api/carts - 当前用户的购物车
pub async fn list(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<ApiResponse<Vec<CartLineView>>>> {
    let lines = cart::find_by_user(&state.pool, &current_user.id).await?;
    Ok(Json(ApiResponse::ok(lines)))
}

/// POST /api/carts - 添加购物车行
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<CartItemRequest>,
) -> AppResult<Json<ApiResponse<i64>>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let line = CartLine {
        id: 0,
        user_id: current_user.id.clone(),
        product_id: payload.product_id,
        topping_ids: payload.topping_ids,
        price: payload.price,
        qty: payload.qty,
        created_at: shared::util::now_millis(),
    };

    let id = cart::save(&state.pool, &line).await?;
    Ok(Json(ApiResponse::ok_with_message(
        id,
        "Cart item has been added",
    )))
}

/// PUT /api/carts/:id - 更新购物车行
pub async fn update(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<CartUpdateRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    cart::update(&state.pool, id, &current_user.id, payload.qty, payload.price)
        .await
        .map_err(cart_error)?;
    Ok(Json(ApiResponse::ok(())))
}

/// DELETE /api/carts/:id - 删除购物车行
pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let deleted = cart::delete(&state.pool, id, &current_user.id)
        .await
        .map_err(cart_error)?;
    Ok(Json(ApiResponse::ok(deleted)))
}
