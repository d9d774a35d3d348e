//! Catalog Server - 商品与分类目录服务
//!
//! REST service over two related entities, products and categories, with
//! paginated and multi-criteria sorted product listings.
//!
//! # 模块结构
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # 配置、状态、错误、HTTP 服务器
//! ├── db/            # SQLite 连接池、迁移、repository
//! ├── paging/        # 分页请求构建、查询执行、响应组装
//! ├── services/      # 创建分类/商品
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod paging;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use api::{build_app, build_router};
pub use core::{Config, Server, ServerError, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
