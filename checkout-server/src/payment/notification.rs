//! Payment notification payload and status mapping

use serde::{Deserialize, Serialize};
use shared::models::TransactionStatus;

/// Inbound payment-status notification.
///
/// The gateway echoes our transaction id as `order_id`. `fraud_status`
/// only accompanies card payments. Unknown fields are ignored so gateway
/// payload growth cannot break the webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentNotification {
    pub order_id: String,
    pub transaction_status: String,
    #[serde(default)]
    pub fraud_status: Option<String>,
    #[serde(default)]
    pub payment_type: Option<String>,
    #[serde(default)]
    pub status_code: Option<String>,
    #[serde(default)]
    pub gross_amount: Option<String>,
}

/// Map a gateway-reported status pair onto the local order status.
///
/// `None` means the pair is outside the mapped set and no update must be
/// applied.
pub fn map_status(
    transaction_status: &str,
    fraud_status: Option<&str>,
) -> Option<TransactionStatus> {
    match transaction_status {
        "capture" => match fraud_status {
            Some("challenge") => Some(TransactionStatus::Pending),
            Some("accept") => Some(TransactionStatus::Success),
            _ => None,
        },
        "settlement" => Some(TransactionStatus::Success),
        "cancel" | "deny" | "expire" => Some(TransactionStatus::Failure),
        "pending" => Some(TransactionStatus::Pending),
        _ => None,
    }
}

impl PaymentNotification {
    /// The local status this notification resolves to, if any
    pub fn local_status(&self) -> Option<TransactionStatus> {
        map_status(&self.transaction_status, self.fraud_status.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_depends_on_fraud_status() {
        assert_eq!(
            map_status("capture", Some("challenge")),
            Some(TransactionStatus::Pending)
        );
        assert_eq!(
            map_status("capture", Some("accept")),
            Some(TransactionStatus::Success)
        );
        // capture without a fraud verdict is not actionable
        assert_eq!(map_status("capture", None), None);
        assert_eq!(map_status("capture", Some("deny")), None);
    }

    #[test]
    fn test_settlement_is_success() {
        assert_eq!(
            map_status("settlement", None),
            Some(TransactionStatus::Success)
        );
        // fraud status is irrelevant outside capture
        assert_eq!(
            map_status("settlement", Some("challenge")),
            Some(TransactionStatus::Success)
        );
    }

    #[test]
    fn test_terminal_failures() {
        for status in ["cancel", "deny", "expire"] {
            assert_eq!(map_status(status, None), Some(TransactionStatus::Failure));
        }
    }

    #[test]
    fn test_pending_passthrough() {
        assert_eq!(map_status("pending", None), Some(TransactionStatus::Pending));
    }

    #[test]
    fn test_unmapped_statuses_yield_no_update() {
        assert_eq!(map_status("refund", None), None);
        assert_eq!(map_status("authorize", Some("accept")), None);
        assert_eq!(map_status("", None), None);
    }

    #[test]
    fn test_payload_tolerates_unknown_fields() {
        let raw = r#"{
            "order_id": "ORDER-abc",
            "transaction_status": "settlement",
            "transaction_time": "2024-05-01 10:00:00",
            "signature_key": "ffff",
            "currency": "IDR"
        }"#;
        let n: PaymentNotification = serde_json::from_str(raw).unwrap();
        assert_eq!(n.order_id, "ORDER-abc");
        assert_eq!(n.local_status(), Some(TransactionStatus::Success));
    }
}
