//! Transaction Repository
//!
//! Owns the checkout durability guarantee: header insert, line inserts and
//! cart-row deletion happen inside one storage transaction, so a partial
//! checkout can never be observed. Reads return the fully joined view
//! (header + lines + denormalized product/topping names).

use super::{RepoError, RepoResult, encode_topping_ids, parse_topping_ids};
use shared::models::{Order, OrderTopping, Transaction, TransactionDraft, TransactionStatus};
use sqlx::{Row, SqlitePool};
use std::collections::HashMap;

type SqliteTx<'a> = sqlx::Transaction<'a, sqlx::Sqlite>;

const HEADER_SELECT: &str = "SELECT id, user_id, name, email, phone, address, city, postal_code, \
     total, service_fee, status, created_at FROM transactions";

/// Atomically persist a checkout: transaction header, its order lines, and
/// the deletion of the matching cart rows. All-or-nothing.
///
/// On failure every prior step is rolled back and the original error is
/// returned. A failed rollback is surfaced as [`RepoError::RollbackFailed`]
/// instead, since the persisted state is then uncertain.
pub async fn checkout(pool: &SqlitePool, draft: &TransactionDraft) -> RepoResult<String> {
    let mut tx = pool.begin().await?;

    match run_checkout(&mut tx, draft).await {
        Ok(()) => {
            tx.commit().await?;
            Ok(draft.transaction.id.clone())
        }
        Err(err) => {
            if let Err(rb_err) = tx.rollback().await {
                tracing::error!(
                    transaction_id = %draft.transaction.id,
                    original_error = %err,
                    rollback_error = %rb_err,
                    "Checkout rollback failed; persisted state uncertain"
                );
                return Err(RepoError::RollbackFailed(rb_err.to_string()));
            }
            tracing::warn!(
                transaction_id = %draft.transaction.id,
                error = %err,
                "Checkout rolled back"
            );
            Err(err)
        }
    }
}

/// The ordered steps of the commit. The header must exist before lines can
/// reference its id; cart rows are deleted last.
async fn run_checkout(tx: &mut SqliteTx<'_>, draft: &TransactionDraft) -> RepoResult<()> {
    let t = &draft.transaction;

    sqlx::query(
        "INSERT INTO transactions (id, user_id, name, email, phone, address, city, postal_code, \
         total, service_fee, status, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
    )
    .bind(&t.id)
    .bind(&t.user_id)
    .bind(&t.name)
    .bind(&t.email)
    .bind(&t.phone)
    .bind(&t.address)
    .bind(&t.city)
    .bind(t.postal_code)
    .bind(t.total)
    .bind(t.service_fee)
    .bind(t.status)
    .bind(t.created_at)
    .execute(&mut **tx)
    .await?;

    for line in &draft.orders {
        sqlx::query(
            "INSERT INTO orders (transaction_id, product_id, topping_ids, price, qty) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&t.id)
        .bind(line.product_id)
        .bind(encode_topping_ids(&line.topping_ids))
        .bind(line.price)
        .bind(line.qty)
        .execute(&mut **tx)
        .await?;
    }

    for line in &draft.orders {
        sqlx::query("DELETE FROM carts WHERE product_id = ?1 AND user_id = ?2")
            .bind(line.product_id)
            .bind(&t.user_id)
            .execute(&mut **tx)
            .await?;
    }

    Ok(())
}

/// Idempotent single-row status update. Returns the affected-row count;
/// an unknown id is not an error at this layer.
pub async fn update_status(
    pool: &SqlitePool,
    id: &str,
    status: TransactionStatus,
) -> RepoResult<u64> {
    let result = sqlx::query("UPDATE transactions SET status = ?1 WHERE id = ?2")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Fully joined read of one transaction
pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Transaction> {
    let sql = format!("{HEADER_SELECT} WHERE id = ?1");
    let row = sqlx::query(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Transaction {id} not found")))?;

    let mut transaction = header_from_row(&row)?;
    transaction.orders = load_orders(pool, id).await?;
    Ok(transaction)
}

/// All transactions, newest first (admin view)
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Transaction>> {
    let sql = format!("{HEADER_SELECT} ORDER BY created_at DESC");
    let rows = sqlx::query(&sql).fetch_all(pool).await?;
    collect_with_orders(pool, rows).await
}

/// One user's transactions, newest first
pub async fn find_by_user(pool: &SqlitePool, user_id: &str) -> RepoResult<Vec<Transaction>> {
    let sql = format!("{HEADER_SELECT} WHERE user_id = ?1 ORDER BY created_at DESC");
    let rows = sqlx::query(&sql).bind(user_id).fetch_all(pool).await?;
    collect_with_orders(pool, rows).await
}

async fn collect_with_orders(
    pool: &SqlitePool,
    rows: Vec<sqlx::sqlite::SqliteRow>,
) -> RepoResult<Vec<Transaction>> {
    let mut transactions = Vec::with_capacity(rows.len());
    for row in rows {
        let mut transaction = header_from_row(&row)?;
        transaction.orders = load_orders(pool, &transaction.id).await?;
        transactions.push(transaction);
    }
    Ok(transactions)
}

fn header_from_row(row: &sqlx::sqlite::SqliteRow) -> RepoResult<Transaction> {
    Ok(Transaction {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        address: row.try_get("address")?,
        city: row.try_get("city")?,
        postal_code: row.try_get("postal_code")?,
        total: row.try_get("total")?,
        service_fee: row.try_get("service_fee")?,
        status: row.try_get("status")?,
        created_at: row.try_get("created_at")?,
        orders: Vec::new(),
    })
}

/// Order lines with product name/image snapshot and resolved topping names
async fn load_orders(pool: &SqlitePool, transaction_id: &str) -> RepoResult<Vec<Order>> {
    let rows = sqlx::query(
        "SELECT o.id, o.transaction_id, o.product_id, o.topping_ids, o.price, o.qty, \
         p.name, p.image \
         FROM orders o JOIN products p ON o.product_id = p.id \
         WHERE o.transaction_id = ?1 ORDER BY o.id",
    )
    .bind(transaction_id)
    .fetch_all(pool)
    .await?;

    let mut orders = Vec::with_capacity(rows.len());
    for row in rows {
        let raw_toppings: String = row.try_get("topping_ids")?;
        orders.push(Order {
            id: row.try_get("id")?,
            transaction_id: row.try_get("transaction_id")?,
            product_id: row.try_get("product_id")?,
            name: row.try_get("name")?,
            image: row.try_get("image")?,
            price: row.try_get("price")?,
            qty: row.try_get("qty")?,
            topping_ids: parse_topping_ids(&raw_toppings),
            toppings: Vec::new(),
        });
    }

    let names = load_topping_names(
        pool,
        orders.iter().flat_map(|o| o.topping_ids.iter().copied()),
    )
    .await?;

    for order in &mut orders {
        order.toppings = order
            .topping_ids
            .iter()
            .filter_map(|id| {
                names.get(id).map(|name| OrderTopping {
                    id: *id,
                    name: name.clone(),
                })
            })
            .collect();
    }

    Ok(orders)
}

async fn load_topping_names(
    pool: &SqlitePool,
    ids: impl Iterator<Item = i64>,
) -> RepoResult<HashMap<i64, String>> {
    let mut unique: Vec<i64> = ids.collect();
    unique.sort_unstable();
    unique.dedup();

    if unique.is_empty() {
        return Ok(HashMap::new());
    }

    let placeholders = vec!["?"; unique.len()].join(", ");
    let sql = format!("SELECT id, name FROM toppings WHERE id IN ({placeholders})");
    let mut query = sqlx::query(&sql);
    for id in &unique {
        query = query.bind(id);
    }

    let rows = query.fetch_all(pool).await?;
    let mut names = HashMap::with_capacity(rows.len());
    for row in rows {
        names.insert(row.try_get("id")?, row.try_get::<String, _>("name")?);
    }
    Ok(names)
}
