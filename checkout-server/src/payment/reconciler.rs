//! Payment Webhook Reconciler
//!
//! Consumes gateway notifications and applies the mapped status via the
//! store's idempotent point update. The gateway retries on non-2xx, so the
//! reconciler acknowledges everything it can't act on: unmapped statuses
//! and unknown order ids are logged and acked, never errored.

use crate::db::repository::transaction;
use shared::models::TransactionStatus;
use shared::{AppResult, ErrorCode};
use sqlx::SqlitePool;

use super::notification::PaymentNotification;

/// What one notification amounted to. Every variant is acknowledged with
/// 2xx; the distinction only drives logging and the ack body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Mapped status written to the order
    Applied(TransactionStatus),
    /// Gateway status outside the mapped set, dropped
    UnknownStatus,
    /// No order matched the echoed id
    UnknownOrder,
}

/// Apply one payment notification.
///
/// Replays are safe: re-applying the same status is a no-op update. No
/// ordering guard is enforced between statuses; late webhooks re-apply
/// whatever the gateway reported.
pub async fn handle_notification(
    pool: &SqlitePool,
    notification: &PaymentNotification,
) -> AppResult<ReconcileOutcome> {
    let Some(status) = notification.local_status() else {
        tracing::warn!(
            order_id = %notification.order_id,
            transaction_status = %notification.transaction_status,
            fraud_status = ?notification.fraud_status,
            code = %ErrorCode::PaymentStatusUnknown,
            "Unmapped gateway status, notification dropped"
        );
        return Ok(ReconcileOutcome::UnknownStatus);
    };

    let affected = transaction::update_status(pool, &notification.order_id, status).await?;

    if affected == 0 {
        tracing::warn!(
            order_id = %notification.order_id,
            status = %status,
            "Notification for unknown order id"
        );
        return Ok(ReconcileOutcome::UnknownOrder);
    }

    tracing::info!(
        order_id = %notification.order_id,
        status = %status,
        transaction_status = %notification.transaction_status,
        "Order status reconciled"
    );
    Ok(ReconcileOutcome::Applied(status))
}
