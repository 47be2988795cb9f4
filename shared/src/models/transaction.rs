//! Transaction Model (订单头 + 订单行)
//!
//! A `Transaction` is one checkout: an immutable header plus its order
//! lines. Only `status` changes after creation, driven by the payment
//! gateway reconciler.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Local order status, mapped from payment gateway notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum TransactionStatus {
    Pending,
    Success,
    Failure,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction header with its order lines (the fully joined read view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(skip_serializing)]
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: i64,
    pub total: i64,
    pub service_fee: i64,
    pub status: TransactionStatus,
    pub created_at: i64,
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// One order line: price/qty snapshot plus denormalized product info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(skip_serializing)]
    pub transaction_id: String,
    pub product_id: i64,
    /// Product name snapshot, resolved at read time
    pub name: String,
    /// Stored asset id; becomes a fetchable URL after enrichment
    pub image: String,
    pub price: i64,
    pub qty: i64,
    #[serde(default)]
    pub topping_ids: Vec<i64>,
    #[serde(default)]
    pub toppings: Vec<OrderTopping>,
}

/// Denormalized topping name, resolved at read time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTopping {
    pub id: i64,
    pub name: String,
}

/// An order line before the atomic commit assigned it to a header.
///
/// Never leaves the store layer with a dangling transaction reference;
/// the header id is attached inside the commit itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub product_id: i64,
    pub topping_ids: Vec<i64>,
    pub price: i64,
    pub qty: i64,
}

/// Persistence-ready aggregate produced by the assembler
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub transaction: Transaction,
    pub orders: Vec<OrderDraft>,
}

/// One order line of a checkout request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderRequest {
    pub product_id: i64,
    #[validate(range(min = 1))]
    pub qty: i64,
    #[validate(range(min = 0))]
    pub price: i64,
    #[serde(default, rename = "topping_id")]
    pub topping_ids: Vec<i64>,
}

/// Checkout request payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckoutRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    pub city: String,
    pub postal_code: i64,
    #[validate(range(min = 0))]
    pub total: i64,
    #[validate(range(min = 0))]
    pub service_fee: i64,
    #[validate(length(min = 1), nested)]
    pub orders: Vec<OrderRequest>,
}

/// Status override payload (admin / reconciler)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: TransactionStatus,
}

/// Checkout response: the committed transaction with resolved image URLs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: i64,
    pub total: i64,
    pub service_fee: i64,
    pub status: TransactionStatus,
    pub orders: Vec<OrderView>,
}

/// One enriched order line in a response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderView {
    pub id: i64,
    pub name: String,
    /// Publicly fetchable URL
    pub image: String,
    pub price: i64,
    pub qty: i64,
    pub toppings: Vec<OrderTopping>,
}
