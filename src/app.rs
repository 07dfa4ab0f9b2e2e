use anyhow::Result;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::clients::{MessageSink, PracticumClient, StatusSource, TelegramClient};
use crate::config::Config;
use crate::error::{FetchError, NotifyError};
use crate::services::status_formatter::format_homework_status;

/// 启动通知
pub const MSG_STARTED: &str = "Bot started";

/// 应用主结构
pub struct App {
    config: Config,
    fetcher: PracticumClient,
    notifier: TelegramClient,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let fetcher = PracticumClient::new(&config)?;
        let notifier = TelegramClient::new(&config);

        Ok(Self {
            config,
            fetcher,
            notifier,
        })
    }

    /// 运行轮询主循环
    ///
    /// 循环永不因迭代内的故障退出，只响应外部终止信号。
    /// 正常轮次间隔 `poll_interval`，失败轮次只等 `error_backoff`。
    pub async fn run(self) -> Result<()> {
        // 启动通知尽力而为，发不出去也照常进入轮询
        if let Err(err) = self.notifier.send(MSG_STARTED).await {
            warn!("⚠️ 启动通知发送失败: {}", err);
        }

        // 游标从当前时刻开始，进程重启即重置
        let mut cursor = chrono::Utc::now().timestamp();

        loop {
            let ok = poll_once(&self.fetcher, &self.notifier, &mut cursor).await;
            let delay = if ok {
                self.config.poll_interval()
            } else {
                self.config.error_backoff()
            };

            // 等待阶段可被终止信号打断，收到信号立刻干净退出
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("收到终止信号，退出轮询");
                    return Ok(());
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }
}

/// 一次迭代里可能出现的两类故障
#[derive(Debug, Error)]
enum IterationError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// 执行一次轮询迭代
///
/// 拉取游标之后的状态变化，有变化时只通知列表里的第一条
/// （最新的提交，后面的忽略），然后把游标推进到服务端时间戳。
///
/// # 返回
/// 迭代是否成功；失败时游标保持不变，调用方缩短下一次等待
pub async fn poll_once<S, N>(source: &S, sink: &N, cursor: &mut i64) -> bool
where
    S: StatusSource,
    N: MessageSink,
{
    match poll_iteration(source, sink, cursor).await {
        Ok(notified) => {
            if notified {
                info!("✓ 本轮有状态变化，已发送通知");
            }
            true
        }
        Err(err) => {
            error!("❌ 本轮轮询失败: {}", err);
            // 故障同样报给聊天；这条报告自身失败时只记日志，不再上抛
            let diagnostic = format!("Bot encountered an error: {}", err);
            if let Err(send_err) = sink.send(&diagnostic).await {
                warn!("⚠️ 故障通知发送失败: {}", send_err);
            }
            false
        }
    }
}

/// 单次迭代的主干：拉取 → 格式化 → 通知 → 推进游标
async fn poll_iteration<S, N>(
    source: &S,
    sink: &N,
    cursor: &mut i64,
) -> std::result::Result<bool, IterationError>
where
    S: StatusSource,
    N: MessageSink,
{
    let response = source.fetch(*cursor).await?;

    let notified = match response.homeworks.first() {
        Some(homework) => {
            sink.send(&format_homework_status(homework)).await?;
            true
        }
        None => false,
    };

    // 游标只在成功迭代的末尾推进，服务端没给时间戳就原地不动
    if let Some(current_date) = response.current_date {
        *cursor = current_date;
    }

    Ok(notified)
}

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 作业审核状态通知模式");
    info!("📊 轮询间隔: {} 秒", config.poll_interval_secs);
    info!("{}", "=".repeat(60));
}
