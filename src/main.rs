use anyhow::Result;
use homework_status_bot::app::App;
use homework_status_bot::config::Config;
use homework_status_bot::logger;

#[tokio::main]
async fn main() -> Result<()> {
    // 先加载 .env，再初始化日志
    dotenvy::dotenv().ok();
    logger::init();

    // 加载配置，缺少令牌直接报错退出
    let config = Config::from_env()?;

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
