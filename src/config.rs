use std::time::Duration;

use crate::error::ConfigError;

/// 作业状态接口默认地址
pub const DEFAULT_API_URL: &str = "https://praktikum.yandex.ru/api/user_api/homework_statuses/";

/// 默认轮询间隔（秒）
const DEFAULT_POLL_INTERVAL_SECS: u64 = 300;
/// 出错后的默认重试间隔（秒）
const DEFAULT_ERROR_BACKOFF_SECS: u64 = 5;
/// 单次请求的默认超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 1;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// Practicum 接口令牌
    pub practicum_token: String,
    /// Telegram 机器人令牌
    pub telegram_token: String,
    /// 接收通知的聊天 ID
    pub chat_id: String,
    /// 作业状态接口地址
    pub api_url: String,
    /// 轮询间隔（秒）
    pub poll_interval_secs: u64,
    /// 出错后的重试间隔（秒）
    pub error_backoff_secs: u64,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 三个令牌变量缺一不可，缺失时直接返回配置错误；
    /// 其余字段都有默认值，可通过环境变量覆盖。
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            practicum_token: require_env("PRAKTIKUM_TOKEN")?,
            telegram_token: require_env("TELEGRAM_TOKEN")?,
            chat_id: require_env("TELEGRAM_CHAT_ID")?,
            api_url: std::env::var("HOMEWORK_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            poll_interval_secs: parse_env("POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS)?,
            error_backoff_secs: parse_env("ERROR_BACKOFF_SECS", DEFAULT_ERROR_BACKOFF_SECS)?,
            request_timeout_secs: parse_env(
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
        })
    }

    /// 轮询间隔
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// 出错后的重试间隔
    pub fn error_backoff(&self) -> Duration {
        Duration::from_secs(self.error_backoff_secs)
    }

    /// 单次请求超时
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// 读取必填的环境变量
fn require_env(var_name: &str) -> Result<String, ConfigError> {
    std::env::var(var_name).map_err(|_| ConfigError::EnvVarNotFound {
        var_name: var_name.to_string(),
    })
}

/// 读取可选的数值环境变量，未设置时使用默认值
fn parse_env(var_name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(var_name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: "u64".to_string(),
            }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_missing() {
        let result = require_env("HOMEWORK_BOT_TEST_MISSING_VAR");
        assert!(matches!(
            result,
            Err(ConfigError::EnvVarNotFound { .. })
        ));
    }

    #[test]
    fn test_parse_env_default() {
        let value = parse_env("HOMEWORK_BOT_TEST_UNSET_NUM", 300).unwrap();
        assert_eq!(value, 300);
    }

    #[test]
    fn test_parse_env_override() {
        std::env::set_var("HOMEWORK_BOT_TEST_NUM", "42");
        let value = parse_env("HOMEWORK_BOT_TEST_NUM", 300).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_invalid() {
        std::env::set_var("HOMEWORK_BOT_TEST_BAD_NUM", "abc");
        let result = parse_env("HOMEWORK_BOT_TEST_BAD_NUM", 300);
        assert!(matches!(
            result,
            Err(ConfigError::EnvVarParseFailed { .. })
        ));
    }
}
