//! 作业审核数据模型
//!
//! 接口返回的任何顶层字段都可能缺失，模型层把缺失当作正常情况，
//! 不在这里产生错误

use serde::Deserialize;

/// 审核通过的评语
pub const VERDICT_APPROVED: &str =
    "The reviewer liked everything, you can move on to the next lesson.";

/// 审核未通过的评语
pub const VERDICT_REJECTED: &str = "Unfortunately, some issues were found in your work.";

/// 单条作业记录
#[derive(Debug, Clone, Deserialize)]
pub struct Homework {
    /// 作业名称，接口可能不返回
    pub homework_name: Option<String>,
    /// 审核状态的原始字符串，接口可能不返回
    pub status: Option<String>,
}

/// 一次轮询返回的完整响应
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    /// 状态发生变化的作业列表，最新的提交排在最前
    #[serde(default)]
    pub homeworks: Vec<Homework>,
    /// 服务端时间戳，作为下一次轮询的游标
    pub current_date: Option<i64>,
}

/// 作业审核状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    /// 排队等待审核
    Pending,
    /// 已被带走审核
    Reviewing,
    /// 审核通过
    Approved,
    /// 审核未通过
    Rejected,
    /// 服务端返回了未知取值
    Unknown,
}

impl ReviewStatus {
    /// 解析接口返回的状态字符串
    pub fn from_api(raw: &str) -> Self {
        match raw {
            "pending" => ReviewStatus::Pending,
            "reviewing" => ReviewStatus::Reviewing,
            "approved" => ReviewStatus::Approved,
            "rejected" => ReviewStatus::Rejected,
            _ => ReviewStatus::Unknown,
        }
    }

    /// 状态对应的评语文本
    ///
    /// Reviewing 使用单独的消息模板，没有评语；其余状态一律落在
    /// 通过或未通过两种评语之一，与服务端的宽松语义保持一致。
    pub fn verdict(self) -> Option<&'static str> {
        match self {
            ReviewStatus::Reviewing => None,
            ReviewStatus::Rejected => Some(VERDICT_REJECTED),
            ReviewStatus::Pending | ReviewStatus::Approved | ReviewStatus::Unknown => {
                Some(VERDICT_APPROVED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_api_known_statuses() {
        assert_eq!(ReviewStatus::from_api("pending"), ReviewStatus::Pending);
        assert_eq!(ReviewStatus::from_api("reviewing"), ReviewStatus::Reviewing);
        assert_eq!(ReviewStatus::from_api("approved"), ReviewStatus::Approved);
        assert_eq!(ReviewStatus::from_api("rejected"), ReviewStatus::Rejected);
    }

    #[test]
    fn test_from_api_unknown_status() {
        assert_eq!(ReviewStatus::from_api("whatever"), ReviewStatus::Unknown);
    }

    #[test]
    fn test_verdict_mapping() {
        assert_eq!(ReviewStatus::Reviewing.verdict(), None);
        assert_eq!(ReviewStatus::Rejected.verdict(), Some(VERDICT_REJECTED));
        assert_eq!(ReviewStatus::Approved.verdict(), Some(VERDICT_APPROVED));
        // 未知状态沿用宽松语义，按通过处理
        assert_eq!(ReviewStatus::Unknown.verdict(), Some(VERDICT_APPROVED));
        assert_eq!(ReviewStatus::Pending.verdict(), Some(VERDICT_APPROVED));
    }

    #[test]
    fn test_deserialize_full_response() {
        let response: StatusResponse = serde_json::from_str(
            r#"{"homeworks":[{"homework_name":"hw1","status":"approved"}],"current_date":2000}"#,
        )
        .unwrap();

        assert_eq!(response.homeworks.len(), 1);
        assert_eq!(response.homeworks[0].homework_name.as_deref(), Some("hw1"));
        assert_eq!(response.homeworks[0].status.as_deref(), Some("approved"));
        assert_eq!(response.current_date, Some(2000));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        // 顶层字段全部缺失视为"没有变化、游标不动"
        let response: StatusResponse = serde_json::from_str("{}").unwrap();
        assert!(response.homeworks.is_empty());
        assert_eq!(response.current_date, None);
    }

    #[test]
    fn test_deserialize_record_missing_fields() {
        let response: StatusResponse =
            serde_json::from_str(r#"{"homeworks":[{}],"current_date":1}"#).unwrap();
        assert_eq!(response.homeworks[0].homework_name, None);
        assert_eq!(response.homeworks[0].status, None);
    }
}
