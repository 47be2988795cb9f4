//! Payment webhook handler

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::payment::{self, PaymentNotification, ReconcileOutcome};
use shared::response::Ack;
use shared::{AppResult, ErrorCode};

/// POST /api/notification - 支付网关状态回调
///
/// Always acknowledges once the payload parses; the gateway redelivers on
/// non-2xx and an unmapped status would otherwise be retried forever.
pub async fn notification(
    State(state): State<ServerState>,
    Json(payload): Json<PaymentNotification>,
) -> AppResult<Json<Ack>> {
    let message = match payment::handle_notification(&state.pool, &payload).await? {
        ReconcileOutcome::Applied(_) => "Notification processed",
        ReconcileOutcome::UnknownStatus => ErrorCode::PaymentStatusUnknown.message(),
        ReconcileOutcome::UnknownOrder => "Notification acknowledged, order unknown",
    };
    Ok(Json(Ack::new(message)))
}
