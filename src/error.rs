use thiserror::Error;

/// 配置错误
///
/// 只在启动阶段出现，出现即终止进程
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量不存在
    #[error("环境变量 {var_name} 不存在")]
    EnvVarNotFound { var_name: String },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

/// 作业状态查询错误
///
/// 客户端不做内部重试，重试节奏由轮询循环决定
#[derive(Debug, Error)]
pub enum FetchError {
    /// 请求超时
    #[error("状态接口请求超时")]
    Timeout,
    /// 连接失败
    #[error("无法连接到状态接口: {0}")]
    ConnectionFailure(#[source] reqwest::Error),
    /// 接口返回了非 2xx 状态码
    #[error("状态接口返回异常状态码: {0}")]
    HttpStatus(u16),
    /// 响应体不是预期的 JSON 结构
    #[error("状态接口响应解析失败: {0}")]
    Malformed(#[from] serde_json::Error),
    /// 其他请求错误
    #[error("状态接口请求失败: {0}")]
    Other(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::ConnectionFailure(err)
        } else if let Some(status) = err.status() {
            FetchError::HttpStatus(status.as_u16())
        } else {
            FetchError::Other(err)
        }
    }
}

/// 消息发送错误
#[derive(Debug, Error)]
pub enum NotifyError {
    /// 请求 Telegram 接口失败
    #[error("Telegram 请求失败: {0}")]
    Request(#[from] reqwest::Error),
    /// Telegram 接口返回了非 2xx 状态码
    #[error("Telegram 接口返回异常状态码: {0}")]
    Api(u16),
}
