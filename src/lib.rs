//! # Homework Status Bot
//!
//! 一个轮询作业审核接口并通过 Telegram 推送状态变化的通知程序
//!
//! ## 架构设计
//!
//! 整个程序就是一条轮询循环，按职责拆成四块：
//!
//! - `clients/` - 外部接口客户端（Practicum 状态查询、Telegram 消息发送）
//! - `services/` - 纯函数的状态格式化
//! - `app` - 轮询循环编排：拉取 → 格式化 → 通知 → 推进游标
//! - `config` / `error` / `logger` - 配置、错误分类与日志
//!
//! 循环的失败策略是"永远重试"：任何一轮的故障都只缩短下一次等待，
//! 不会让进程退出；进程只响应外部终止信号。

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;

// 重新导出常用类型
pub use app::{poll_once, App};
pub use clients::{MessageSink, PracticumClient, StatusSource, TelegramClient};
pub use config::Config;
pub use error::{ConfigError, FetchError, NotifyError};
pub use models::{Homework, ReviewStatus, StatusResponse};
pub use services::status_formatter::format_homework_status;
