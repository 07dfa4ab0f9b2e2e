//! Practicum 作业状态客户端
//!
//! 封装对作业审核接口的认证查询

use reqwest::Client;
use tracing::{debug, error};

use crate::clients::StatusSource;
use crate::config::Config;
use crate::error::FetchError;
use crate::models::StatusResponse;

/// 作业状态客户端
pub struct PracticumClient {
    http: Client,
    api_url: String,
    token: String,
}

impl PracticumClient {
    /// 创建新的状态客户端
    ///
    /// 超时在客户端级别配置，保证轮询循环不会被挂起的连接卡死
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(config.request_timeout()).build()?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            token: config.practicum_token.clone(),
        })
    }

    async fn fetch_inner(&self, from_date: i64) -> Result<StatusResponse, FetchError> {
        let response = self
            .http
            .get(&self.api_url)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("作业状态响应: {}", body);
        parse_response(&body)
    }
}

impl StatusSource for PracticumClient {
    /// 查询作业状态
    ///
    /// # 参数
    /// - `from_date`: 起始时间戳，只返回这之后发生的状态变化
    ///
    /// # 返回
    /// 返回解析后的响应；失败时返回分类后的 [`FetchError`]
    async fn fetch(&self, from_date: i64) -> Result<StatusResponse, FetchError> {
        match self.fetch_inner(from_date).await {
            Ok(response) => Ok(response),
            Err(err) => {
                error!("❌ 作业状态查询失败: {}", err);
                Err(err)
            }
        }
    }
}

/// 解析接口响应体
///
/// 顶层字段都可能缺失：没有 `homeworks` 视为空列表，
/// 没有 `current_date` 视为本次不更新游标
pub fn parse_response(body: &str) -> Result<StatusResponse, FetchError> {
    Ok(serde_json::from_str(body)?)
}
