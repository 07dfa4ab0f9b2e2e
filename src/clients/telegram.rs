//! Telegram 机器人客户端
//!
//! 只封装一个能力：把文本消息发到固定的聊天

use reqwest::Client;
use serde_json::json;
use tracing::info;

use crate::clients::MessageSink;
use crate::config::Config;
use crate::error::NotifyError;

/// Telegram 消息客户端
pub struct TelegramClient {
    http: Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramClient {
    /// 创建新的 Telegram 客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            bot_token: config.telegram_token.clone(),
            chat_id: config.chat_id.clone(),
        }
    }

    fn send_message_url(&self) -> String {
        format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token)
    }
}

impl MessageSink for TelegramClient {
    /// 发送消息
    ///
    /// # 参数
    /// - `text`: 消息正文
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let response = self
            .http
            .post(self.send_message_url())
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Api(status.as_u16()));
        }

        info!("✓ 已向 Telegram 聊天发送消息");
        Ok(())
    }
}
