//! Cart Model
//!
//! A cart line is a user-scoped, pre-checkout selection. Checkout consumes
//! matching cart rows inside the same storage transaction that creates the
//! order.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Cart line as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub id: i64,
    #[serde(skip_serializing)]
    pub user_id: String,
    pub product_id: i64,
    #[serde(default)]
    pub topping_ids: Vec<i64>,
    pub price: i64,
    pub qty: i64,
    pub created_at: i64,
}

/// Add-to-cart payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CartItemRequest {
    pub product_id: i64,
    #[validate(range(min = 1))]
    pub qty: i64,
    #[validate(range(min = 0))]
    pub price: i64,
    #[serde(default, rename = "topping_id")]
    pub topping_ids: Vec<i64>,
}

/// Cart line update payload (partial)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartUpdateRequest {
    pub qty: Option<i64>,
    pub price: Option<i64>,
}

/// Product snapshot shown on a cart line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartProduct {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: i64,
}

/// Topping shown on a cart line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartTopping {
    pub id: i64,
    pub name: String,
}

/// Cart line with denormalized product and topping info (read view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineView {
    pub id: i64,
    pub price: i64,
    pub qty: i64,
    pub product: CartProduct,
    pub toppings: Vec<CartTopping>,
}
