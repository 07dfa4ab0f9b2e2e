//! 外部接口客户端
//!
//! 两个客户端各自只暴露一个能力：查询作业状态、发送消息。
//! 能力抽成 trait，轮询循环对具体实现保持泛型，测试里用内存
//! 实现替换真实客户端。

pub mod practicum;
pub mod telegram;

pub use practicum::PracticumClient;
pub use telegram::TelegramClient;

use crate::error::{FetchError, NotifyError};
use crate::models::StatusResponse;

/// 作业状态来源
#[allow(async_fn_in_trait)]
pub trait StatusSource {
    /// 拉取 `from_date` 之后发生变化的作业状态
    async fn fetch(&self, from_date: i64) -> Result<StatusResponse, FetchError>;
}

/// 消息发送端
#[allow(async_fn_in_trait)]
pub trait MessageSink {
    /// 把一条文本消息发送到固定的聊天
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}
