//! Checkout Server - 在线点单结算后端
//!
//! # 架构概述
//!
//! - **数据库** (`db`): SQLite (sqlx) 存储层，唯一持有原子提交的边界
//! - **结算域** (`checkout`): 订单组装 + 请求级编排
//! - **支付** (`payment`): 支付网关回调对账
//! - **图片** (`imaging`): 资源 id → 可访问 URL 的解析客户端
//! - **HTTP API** (`api`): RESTful 接口
//!
//! # 模块结构
//!
//! ```text
//! checkout-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # 网关注入身份的提取器
//! ├── db/            # 数据库层（连接池、迁移、仓储）
//! ├── checkout/      # 订单组装与编排
//! ├── payment/       # 支付回调对账
//! ├── imaging/       # 图片解析客户端
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志等工具
//! ```

pub mod api;
pub mod auth;
pub mod checkout;
pub mod core;
pub mod db;
pub mod imaging;
pub mod payment;
pub mod utils;

// Re-export 公共类型
pub use checkout::CheckoutService;
pub use core::{Config, Server, ServerState};
pub use imaging::{HttpImageResolver, ImageError, ImageResolver};
pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};
pub use utils::logger::init_logger;
