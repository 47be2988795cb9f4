//! Cart Repository
//!
//! User-scoped cart lines. Rows are consumed by the checkout commit in
//! [`super::transaction`]; everything here is single-row work.

use super::{RepoError, RepoResult, catalog, encode_topping_ids, parse_topping_ids};
use shared::models::{CartLine, CartLineView, CartProduct, CartTopping};
use sqlx::{Row, SqlitePool};

/// One user's cart with denormalized product and topping info, newest first
pub async fn find_by_user(pool: &SqlitePool, user_id: &str) -> RepoResult<Vec<CartLineView>> {
    let rows = sqlx::query(
        "SELECT c.id, c.product_id, c.topping_ids, c.price, c.qty, \
         p.name, p.image, p.price AS product_price \
         FROM carts c JOIN products p ON c.product_id = p.id \
         WHERE c.user_id = ?1 ORDER BY c.id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let mut views = Vec::with_capacity(rows.len());
    for row in rows {
        let raw_toppings: String = row.try_get("topping_ids")?;
        let topping_ids = parse_topping_ids(&raw_toppings);
        let toppings = catalog::find_toppings(pool, &topping_ids)
            .await?
            .into_iter()
            .map(|t| CartTopping {
                id: t.id,
                name: t.name,
            })
            .collect();

        views.push(CartLineView {
            id: row.try_get("id")?,
            price: row.try_get("price")?,
            qty: row.try_get("qty")?,
            product: CartProduct {
                id: row.try_get("product_id")?,
                name: row.try_get("name")?,
                image: row.try_get("image")?,
                price: row.try_get("product_price")?,
            },
            toppings,
        });
    }
    Ok(views)
}

/// Insert a cart line
pub async fn save(pool: &SqlitePool, line: &CartLine) -> RepoResult<i64> {
    let result = sqlx::query(
        "INSERT INTO carts (user_id, product_id, topping_ids, price, qty, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(&line.user_id)
    .bind(line.product_id)
    .bind(encode_topping_ids(&line.topping_ids))
    .bind(line.price)
    .bind(line.qty)
    .bind(line.created_at)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Partial update of a user's own cart line
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    user_id: &str,
    qty: Option<i64>,
    price: Option<i64>,
) -> RepoResult<()> {
    let result = sqlx::query(
        "UPDATE carts SET qty = COALESCE(?1, qty), price = COALESCE(?2, price) \
         WHERE id = ?3 AND user_id = ?4",
    )
    .bind(qty)
    .bind(price)
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Cart line {id} not found")));
    }
    Ok(())
}

/// Delete a user's own cart line
pub async fn delete(pool: &SqlitePool, id: i64, user_id: &str) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM carts WHERE id = ?1 AND user_id = ?2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
