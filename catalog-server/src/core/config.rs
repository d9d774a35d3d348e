/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_URL | sqlite:catalog.db | SQLite 数据库 |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | - | tracing filter (RUST_LOG 优先) |
/// | LOG_JSON | false | JSON 日志输出 |
/// | LOG_DIR | - | 日志目录 (存在时按天滚动写文件) |
/// | DB_MAX_CONNECTIONS | 5 | 连接池大小 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=sqlite:/data/catalog.db HTTP_PORT=9000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: Option<String>,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub db_max_connections: u32,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:catalog.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").ok(),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok(),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }

    /// 测试用配置: 内存数据库, 随机端口
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            http_port: 0,
            environment: "test".into(),
            log_level: None,
            log_json: false,
            log_dir: None,
            db_max_connections: 1,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
