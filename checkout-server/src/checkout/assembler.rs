//! Order Assembler
//!
//! Pure mapping from a checkout request to the `(Transaction, lines)`
//! aggregate. No I/O, no partial failure: referential integrity against
//! the catalog is the caller's concern.

use shared::models::{CheckoutRequest, OrderDraft, Transaction, TransactionDraft,
    TransactionStatus};

/// Transaction-id generation, injected so the assembler stays deterministic
/// under test.
pub trait OrderIdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Production id source: `"ORDER-"` + 20 random alphanumeric characters
pub struct RandomOrderIds;

impl OrderIdSource for RandomOrderIds {
    fn next_id(&self) -> String {
        shared::util::order_id()
    }
}

/// Build the persistence-ready aggregate for one checkout.
///
/// New transactions always start as `pending`; the reconciler moves them
/// from there.
pub fn assemble(
    request: &CheckoutRequest,
    user_id: &str,
    ids: &dyn OrderIdSource,
) -> TransactionDraft {
    let orders = request
        .orders
        .iter()
        .map(|line| OrderDraft {
            product_id: line.product_id,
            topping_ids: line.topping_ids.clone(),
            price: line.price,
            qty: line.qty,
        })
        .collect();

    TransactionDraft {
        transaction: Transaction {
            id: ids.next_id(),
            user_id: user_id.to_string(),
            name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            address: request.address.clone(),
            city: request.city.clone(),
            postal_code: request.postal_code,
            total: request.total,
            service_fee: request.service_fee,
            status: TransactionStatus::Pending,
            created_at: shared::util::now_millis(),
            orders: Vec::new(),
        },
        orders,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OrderRequest;

    struct FixedIds(&'static str);

    impl OrderIdSource for FixedIds {
        fn next_id(&self) -> String {
            self.0.to_string()
        }
    }

    fn request() -> CheckoutRequest {
        CheckoutRequest {
            name: "Ayu".into(),
            email: "ayu@example.com".into(),
            phone: "0812000111".into(),
            address: "Jl. Melati 5".into(),
            city: "Bandung".into(),
            postal_code: 40115,
            total: 1000,
            service_fee: 50,
            orders: vec![
                OrderRequest {
                    product_id: 1,
                    qty: 2,
                    price: 500,
                    topping_ids: vec![7, 9],
                },
                OrderRequest {
                    product_id: 3,
                    qty: 1,
                    price: 250,
                    topping_ids: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_assemble_maps_header_fields() {
        let draft = assemble(&request(), "user-1", &FixedIds("ORDER-test"));
        let t = &draft.transaction;
        assert_eq!(t.id, "ORDER-test");
        assert_eq!(t.user_id, "user-1");
        assert_eq!(t.email, "ayu@example.com");
        assert_eq!(t.total, 1000);
        assert_eq!(t.service_fee, 50);
        assert_eq!(t.status, TransactionStatus::Pending);
        assert!(t.orders.is_empty());
    }

    #[test]
    fn test_assemble_maps_every_line() {
        let draft = assemble(&request(), "user-1", &FixedIds("ORDER-test"));
        assert_eq!(draft.orders.len(), 2);
        assert_eq!(
            draft.orders[0],
            OrderDraft {
                product_id: 1,
                topping_ids: vec![7, 9],
                price: 500,
                qty: 2,
            }
        );
        assert_eq!(draft.orders[1].topping_ids, Vec::<i64>::new());
    }

    #[test]
    fn test_random_ids_have_gateway_prefix() {
        let id = RandomOrderIds.next_id();
        assert!(id.starts_with("ORDER-"));
        assert_eq!(id.len(), 26);
    }
}
