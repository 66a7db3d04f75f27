//! 提交记录与题目元数据
//!
//! 远程响应在 `clients` 层完成校验后，才会被转换成这里的强类型记录

use serde::{Deserialize, Serialize};
use std::fmt;

/// 提交状态
///
/// 只有 `Accepted` 会被后续流程保留，其余状态原样保存展示文本
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    Accepted,
    Other(String),
}

impl SubmissionStatus {
    /// 从判题服务返回的展示文本解析状态
    pub fn from_display(display: &str) -> Self {
        match display {
            "Accepted" => SubmissionStatus::Accepted,
            other => SubmissionStatus::Other(other.to_string()),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionStatus::Accepted)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Accepted => write!(f, "Accepted"),
            SubmissionStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

/// 一次提交
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// 题目标识（同一道题的所有提交都相同）
    pub title_slug: String,
    /// 题目标题
    pub title: String,
    pub status: SubmissionStatus,
    /// 提交时间（Unix 秒），用于比较新旧
    pub timestamp: i64,
}

impl Submission {
    pub fn new(
        title_slug: impl Into<String>,
        title: impl Into<String>,
        status: SubmissionStatus,
        timestamp: i64,
    ) -> Self {
        Self {
            title_slug: title_slug.into(),
            title: title.into(),
            status,
            timestamp,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status.is_accepted()
    }
}

/// 题目标签
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// 题目元数据（目前只关心标签）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub title_slug: String,
    pub topic_tags: Vec<Tag>,
}
