//! Checkout orchestration
//!
//! Drives one checkout end to end: assemble, atomic commit, joined re-read,
//! concurrent image enrichment. The two phases are deliberately decoupled:
//! once the commit succeeds the order is durable, and an enrichment failure
//! only affects the synchronous response payload.

use crate::checkout::assembler::{self, OrderIdSource, RandomOrderIds};
use crate::db::repository::{RepoError, transaction};
use crate::imaging::{ImageError, ImageResolver};
use futures::future::try_join_all;
use shared::models::{CheckoutRequest, OrderView, Transaction, TransactionStatus, TransactionView};
use shared::{AppError, AppResult, ErrorCode};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

/// Request-scoped coordinator for the checkout lifecycle. Holds no state
/// between calls beyond the shared pool and clients.
#[derive(Clone)]
pub struct CheckoutService {
    pool: SqlitePool,
    images: Arc<dyn ImageResolver>,
    ids: Arc<dyn OrderIdSource>,
    /// Bound on the whole enrichment phase, separate from storage timeouts
    image_timeout: Duration,
}

impl CheckoutService {
    pub fn new(pool: SqlitePool, images: Arc<dyn ImageResolver>, image_timeout: Duration) -> Self {
        Self {
            pool,
            images,
            ids: Arc::new(RandomOrderIds),
            image_timeout,
        }
    }

    /// Replace the transaction-id source (tests)
    pub fn with_id_source(mut self, ids: Arc<dyn OrderIdSource>) -> Self {
        self.ids = ids;
        self
    }

    /// Create an order: assemble, commit atomically, then build the
    /// enriched response. A commit failure aborts before enrichment; an
    /// enrichment failure never touches the committed rows.
    pub async fn create_order(
        &self,
        user_id: &str,
        request: CheckoutRequest,
    ) -> AppResult<TransactionView> {
        let draft = assembler::assemble(&request, user_id, self.ids.as_ref());
        let id = transaction::checkout(&self.pool, &draft).await?;

        tracing::info!(
            transaction_id = %id,
            user_id = %user_id,
            lines = draft.orders.len(),
            total = draft.transaction.total,
            "Checkout committed"
        );

        self.read_view(&id).await
    }

    /// Joined re-read plus enrichment (no writes)
    pub async fn get_order(&self, id: &str) -> AppResult<TransactionView> {
        self.read_view(id).await
    }

    /// All orders, enriched (admin view)
    pub async fn list_orders(&self) -> AppResult<Vec<TransactionView>> {
        let transactions = transaction::find_all(&self.pool).await?;
        self.enrich_all(transactions).await
    }

    /// One user's orders, enriched
    pub async fn list_user_orders(&self, user_id: &str) -> AppResult<Vec<TransactionView>> {
        let transactions = transaction::find_by_user(&self.pool, user_id).await?;
        self.enrich_all(transactions).await
    }

    /// Point update of the order status; unknown ids are a 404 here
    /// (the webhook reconciler uses the repository directly and acks instead).
    pub async fn update_status(&self, id: &str, status: TransactionStatus) -> AppResult<()> {
        let affected = transaction::update_status(&self.pool, id, status).await?;
        if affected == 0 {
            return Err(AppError::order_not_found(id));
        }
        tracing::info!(transaction_id = %id, status = %status, "Order status updated");
        Ok(())
    }

    async fn read_view(&self, id: &str) -> AppResult<TransactionView> {
        let transaction = transaction::find_by_id(&self.pool, id)
            .await
            .map_err(|err| match err {
                RepoError::NotFound(_) => AppError::order_not_found(id),
                other => other.into(),
            })?;
        self.enrich(transaction).await
    }

    async fn enrich_all(
        &self,
        transactions: Vec<Transaction>,
    ) -> AppResult<Vec<TransactionView>> {
        let mut views = Vec::with_capacity(transactions.len());
        for transaction in transactions {
            views.push(self.enrich(transaction).await?);
        }
        Ok(views)
    }

    /// Fork-join enrichment over the order lines. `try_join_all` drops the
    /// remaining in-flight resolutions on the first error, and the whole
    /// phase runs under one timeout. All-or-nothing: a partially enriched
    /// view is never returned.
    async fn enrich(&self, transaction: Transaction) -> AppResult<TransactionView> {
        let resolutions = transaction
            .orders
            .iter()
            .map(|order| self.images.resolve(&order.image));

        let urls = match tokio::time::timeout(self.image_timeout, try_join_all(resolutions)).await
        {
            Err(_) => {
                tracing::warn!(
                    transaction_id = %transaction.id,
                    timeout_ms = self.image_timeout.as_millis() as u64,
                    "Image enrichment timed out"
                );
                return Err(AppError::image_unavailable());
            }
            Ok(Err(ImageError::Unavailable)) => {
                tracing::warn!(transaction_id = %transaction.id, "Image service unavailable");
                return Err(AppError::image_unavailable());
            }
            Ok(Err(ImageError::NotFound(asset))) => {
                return Err(AppError::with_message(
                    ErrorCode::ImageNotFound,
                    format!("Image asset {asset} not found"),
                ));
            }
            Ok(Ok(urls)) => urls,
        };

        let orders = transaction
            .orders
            .iter()
            .zip(urls)
            .map(|(order, url)| OrderView {
                id: order.id,
                name: order.name.clone(),
                image: url,
                price: order.price,
                qty: order.qty,
                toppings: order.toppings.clone(),
            })
            .collect();

        Ok(TransactionView {
            id: transaction.id,
            name: transaction.name,
            email: transaction.email,
            phone: transaction.phone,
            address: transaction.address,
            city: transaction.city,
            postal_code: transaction.postal_code,
            total: transaction.total,
            service_fee: transaction.service_fee,
            status: transaction.status,
            orders,
        })
    }
}
