//! 作业状态格式化
//!
//! 纯函数：把一条作业记录转换成要发送的消息文本。
//! 对任何输入都不会失败，字段缺失时退化为固定的兜底消息。

use crate::models::{Homework, ReviewStatus};

/// 记录缺少字段时的兜底消息
pub const MSG_DATA_ERROR: &str = "Error getting homework data";

/// 把一条作业记录格式化为通知消息
///
/// # 参数
/// - `homework`: 接口返回的单条作业记录
///
/// # 返回
/// 返回可直接发送的消息文本
pub fn format_homework_status(homework: &Homework) -> String {
    let (name, status) = match (&homework.homework_name, &homework.status) {
        (Some(name), Some(status)) => (name, status),
        _ => return MSG_DATA_ERROR.to_string(),
    };

    match ReviewStatus::from_api(status).verdict() {
        None => format!("Work {} has been taken for review", name),
        Some(verdict) => format!("Your work \"{}\" has been reviewed!\n\n{}", name, verdict),
    }
}
