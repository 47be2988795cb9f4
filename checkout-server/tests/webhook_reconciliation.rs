//! Payment webhook reconciliation against an in-memory database.

mod common;

use checkout_server::db::repository::transaction;
use checkout_server::payment::{self, PaymentNotification, ReconcileOutcome};
use shared::models::TransactionStatus;
use sqlx::SqlitePool;

use common::{checkout_request, order_line, seed_product, service, test_pool, StubResolver};

fn notification(order_id: &str, status: &str, fraud: Option<&str>) -> PaymentNotification {
    PaymentNotification {
        order_id: order_id.to_string(),
        transaction_status: status.to_string(),
        fraud_status: fraud.map(str::to_string),
        payment_type: Some("gopay".to_string()),
        status_code: Some("200".to_string()),
        gross_amount: Some("500.00".to_string()),
    }
}

async fn seed_order(pool: &SqlitePool) -> String {
    let product_id = seed_product(pool, "Cold Brew", "asset-cold", 500).await;
    let svc = service(pool, StubResolver::ok());
    svc.create_order(
        "user-1",
        checkout_request(500, 0, vec![order_line(product_id, 1, 500, vec![])]),
    )
    .await
    .unwrap()
    .id
}

async fn stored_status(pool: &SqlitePool, id: &str) -> TransactionStatus {
    transaction::find_by_id(pool, id).await.unwrap().status
}

#[tokio::test]
async fn test_mapped_statuses_update_the_order() {
    let cases = [
        ("capture", Some("challenge"), TransactionStatus::Pending),
        ("capture", Some("accept"), TransactionStatus::Success),
        ("settlement", None, TransactionStatus::Success),
        ("cancel", None, TransactionStatus::Failure),
        ("deny", None, TransactionStatus::Failure),
        ("expire", None, TransactionStatus::Failure),
        ("pending", None, TransactionStatus::Pending),
    ];

    for (status, fraud, expected) in cases {
        let pool = test_pool().await;
        let id = seed_order(&pool).await;

        let outcome = payment::handle_notification(&pool, &notification(&id, status, fraud))
            .await
            .unwrap();
        assert_eq!(outcome, ReconcileOutcome::Applied(expected), "{status}/{fraud:?}");
        assert_eq!(stored_status(&pool, &id).await, expected, "{status}/{fraud:?}");
    }
}

#[tokio::test]
async fn test_unmapped_status_leaves_order_untouched() {
    let pool = test_pool().await;
    let id = seed_order(&pool).await;
    payment::handle_notification(&pool, &notification(&id, "settlement", None))
        .await
        .unwrap();

    // refund is outside the mapped set; the call acks without writing
    let outcome = payment::handle_notification(&pool, &notification(&id, "refund", None))
        .await
        .unwrap();
    assert_eq!(outcome, ReconcileOutcome::UnknownStatus);
    assert_eq!(stored_status(&pool, &id).await, TransactionStatus::Success);

    // capture without an actionable fraud verdict is equally a no-op
    let outcome = payment::handle_notification(&pool, &notification(&id, "capture", Some("deny")))
        .await
        .unwrap();
    assert_eq!(outcome, ReconcileOutcome::UnknownStatus);
    assert_eq!(stored_status(&pool, &id).await, TransactionStatus::Success);
}

#[tokio::test]
async fn test_unknown_order_id_is_acknowledged() {
    let pool = test_pool().await;
    // no matching row; still Ok so the gateway stops redelivering
    let outcome =
        payment::handle_notification(&pool, &notification("ORDER-missing", "settlement", None))
            .await
            .unwrap();
    assert_eq!(outcome, ReconcileOutcome::UnknownOrder);
}

#[tokio::test]
async fn test_redelivery_is_idempotent() {
    let pool = test_pool().await;
    let id = seed_order(&pool).await;
    let n = notification(&id, "settlement", None);

    let first = payment::handle_notification(&pool, &n).await.unwrap();
    let second = payment::handle_notification(&pool, &n).await.unwrap();
    assert_eq!(first, ReconcileOutcome::Applied(TransactionStatus::Success));
    assert_eq!(second, first);
    assert_eq!(stored_status(&pool, &id).await, TransactionStatus::Success);
}
