//! Server state

use std::sync::Arc;
use std::time::Duration;

use shared::AppError;
use sqlx::SqlitePool;

use crate::checkout::CheckoutService;
use crate::core::Config;
use crate::db::DbService;
use crate::imaging::{HttpImageResolver, ImageResolver};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc/连接池实现浅拷贝，每个请求克隆的成本极低。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | pool | SQLite 连接池（唯一共享可变资源） |
/// | checkout | 结算编排服务 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// 结算编排服务
    pub checkout: CheckoutService,
}

impl ServerState {
    /// 初始化状态：打开数据库、执行迁移、构造图片客户端与结算服务
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        let images: Arc<dyn ImageResolver> = Arc::new(HttpImageResolver::new(
            config.image_service_url.clone(),
            Duration::from_millis(config.image_timeout_ms),
        )?);
        Ok(Self::with_pool(config.clone(), db.pool, images))
    }

    /// Build state over an existing pool and resolver (tests)
    pub fn with_pool(
        config: Config,
        pool: SqlitePool,
        images: Arc<dyn ImageResolver>,
    ) -> Self {
        let checkout = CheckoutService::new(
            pool.clone(),
            images,
            Duration::from_millis(config.image_timeout_ms),
        );
        Self {
            config,
            pool,
            checkout,
        }
    }
}
