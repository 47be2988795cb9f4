//! Small shared helpers

use rand::Rng;
use rand::distributions::Alphanumeric;

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Length of the random suffix in a transaction id.
pub const ORDER_ID_SUFFIX_LEN: usize = 20;

/// Prefix carried by every transaction id (the payment gateway's order reference).
pub const ORDER_ID_PREFIX: &str = "ORDER-";

/// Generate a client-visible transaction id: `"ORDER-"` + 20 random
/// alphanumeric characters.
///
/// The suffix is not cryptographic; uniqueness rests on the keyspace
/// (62^20) being far larger than any realistic order volume.
pub fn order_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ORDER_ID_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{ORDER_ID_PREFIX}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_shape() {
        let id = order_id();
        assert!(id.starts_with(ORDER_ID_PREFIX));
        assert_eq!(id.len(), ORDER_ID_PREFIX.len() + ORDER_ID_SUFFIX_LEN);
        assert!(
            id[ORDER_ID_PREFIX.len()..]
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        );
    }

    #[test]
    fn test_order_ids_differ() {
        assert_ne!(order_id(), order_id());
    }
}
