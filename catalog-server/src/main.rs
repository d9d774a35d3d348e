use catalog_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载 .env 和配置
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. 初始化日志 (production 默认 JSON)
    init_logger_with_file(
        config.log_level.as_deref(),
        config.log_json || config.is_production(),
        config.log_dir.as_deref(),
    );

    tracing::info!("Catalog server starting");

    // 3. 打开数据库并迁移
    let state = ServerState::initialize(&config).await?;

    // 4. 启动 HTTP 服务器
    let server = Server::new(state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
