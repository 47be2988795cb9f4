//! Shared test fixtures: in-memory database, stub image resolver, seeds.

#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use checkout_server::CheckoutService;
use checkout_server::db::DbService;
use checkout_server::db::repository::{cart, catalog};
use checkout_server::imaging::{ImageError, ImageResolver};
use shared::models::{CartLine, CheckoutRequest, OrderRequest};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Fresh in-memory database with migrations applied.
///
/// Single connection: every `sqlite::memory:` connection is its own
/// database, so the pool must not open a second one.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .pragma("foreign_keys", "ON");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    DbService::migrate(&pool).await.unwrap();
    pool
}

/// Image resolver that answers from a fixed URL scheme, with optional
/// failure injection.
pub struct StubResolver {
    /// Fail every resolution as service-unavailable
    pub unavailable: bool,
    /// Fail only this asset id as service-unavailable
    pub fail_asset: Option<String>,
}

impl StubResolver {
    pub fn ok() -> Self {
        Self {
            unavailable: false,
            fail_asset: None,
        }
    }

    pub fn failing_for(asset: impl Into<String>) -> Self {
        Self {
            unavailable: false,
            fail_asset: Some(asset.into()),
        }
    }

    pub fn down() -> Self {
        Self {
            unavailable: true,
            fail_asset: None,
        }
    }
}

#[async_trait]
impl ImageResolver for StubResolver {
    async fn resolve(&self, asset_id: &str) -> Result<String, ImageError> {
        if self.unavailable || self.fail_asset.as_deref() == Some(asset_id) {
            return Err(ImageError::Unavailable);
        }
        Ok(format!("https://img.example.test/{asset_id}"))
    }
}

/// Checkout service over the given pool and resolver
pub fn service(pool: &SqlitePool, resolver: StubResolver) -> CheckoutService {
    CheckoutService::new(pool.clone(), Arc::new(resolver), Duration::from_secs(3))
}

/// Seed one product and return its id
pub async fn seed_product(pool: &SqlitePool, name: &str, asset: &str, price: i64) -> i64 {
    catalog::create_product(pool, name, asset, price).await.unwrap()
}

/// Seed one topping and return its id
pub async fn seed_topping(pool: &SqlitePool, name: &str, price: i64) -> i64 {
    catalog::create_topping(pool, name, price).await.unwrap()
}

/// Put one line into a user's cart
pub async fn seed_cart_line(
    pool: &SqlitePool,
    user_id: &str,
    product_id: i64,
    price: i64,
    qty: i64,
) -> i64 {
    cart::save(
        pool,
        &CartLine {
            id: 0,
            user_id: user_id.to_string(),
            product_id,
            topping_ids: Vec::new(),
            price,
            qty,
            created_at: shared::util::now_millis(),
        },
    )
    .await
    .unwrap()
}

/// A minimal valid checkout request over the given lines
pub fn checkout_request(
    total: i64,
    service_fee: i64,
    orders: Vec<OrderRequest>,
) -> CheckoutRequest {
    CheckoutRequest {
        name: "Ayu".into(),
        email: "ayu@example.com".into(),
        phone: "0812000111".into(),
        address: "Jl. Melati 5".into(),
        city: "Bandung".into(),
        postal_code: 40115,
        total,
        service_fee,
        orders,
    }
}

pub fn order_line(product_id: i64, qty: i64, price: i64, topping_ids: Vec<i64>) -> OrderRequest {
    OrderRequest {
        product_id,
        qty,
        price,
        topping_ids,
    }
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
