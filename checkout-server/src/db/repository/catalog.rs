//! Catalog lookups
//!
//! Catalog management lives in a separate service; this module only covers
//! the reads the cart/order views need, plus insert helpers used when
//! seeding a fresh database.

use super::RepoResult;
use sqlx::{Row, SqlitePool};

/// Product row
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: i64,
}

/// Topping row
#[derive(Debug, Clone)]
pub struct ToppingRecord {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

pub async fn find_product(pool: &SqlitePool, id: i64) -> RepoResult<Option<ProductRecord>> {
    let row = sqlx::query("SELECT id, name, image, price FROM products WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(|row| {
        Ok(ProductRecord {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            image: row.try_get("image")?,
            price: row.try_get("price")?,
        })
    })
    .transpose()
}

/// Toppings for a set of ids, in id order
pub async fn find_toppings(pool: &SqlitePool, ids: &[i64]) -> RepoResult<Vec<ToppingRecord>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql =
        format!("SELECT id, name, price FROM toppings WHERE id IN ({placeholders}) ORDER BY id");
    let mut query = sqlx::query(&sql);
    for id in ids {
        query = query.bind(id);
    }

    let rows = query.fetch_all(pool).await?;
    let mut toppings = Vec::with_capacity(rows.len());
    for row in rows {
        toppings.push(ToppingRecord {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            price: row.try_get("price")?,
        });
    }
    Ok(toppings)
}

/// Insert a product (seed/test helper)
pub async fn create_product(
    pool: &SqlitePool,
    name: &str,
    image: &str,
    price: i64,
) -> RepoResult<i64> {
    let result = sqlx::query(
        "INSERT INTO products (name, image, price, created_at) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(name)
    .bind(image)
    .bind(price)
    .bind(shared::util::now_millis())
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Insert a topping (seed/test helper)
pub async fn create_topping(pool: &SqlitePool, name: &str, price: i64) -> RepoResult<i64> {
    let result = sqlx::query("INSERT INTO toppings (name, price) VALUES (?1, ?2)")
        .bind(name)
        .bind(price)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}
