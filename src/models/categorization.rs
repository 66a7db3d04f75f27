//! 标签 → 题目列表 的分组结果

use crate::models::Submission;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

const PROBLEM_URL_PREFIX: &str = "https://leetcode.com/problems/";

/// 题目的标准链接
pub fn problem_link(slug: &str) -> String {
    format!("{}{}/", PROBLEM_URL_PREFIX, slug)
}

/// 某个标签下的一道题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedEntry {
    pub title: String,
    pub link: String,
    pub title_slug: String,
}

impl CategorizedEntry {
    pub fn from_submission(submission: &Submission) -> Self {
        Self {
            title: submission.title.clone(),
            link: problem_link(&submission.title_slug),
            title_slug: submission.title_slug.clone(),
        }
    }
}

/// 标签分组
///
/// 同一道题可以出现在多个标签下；桶内顺序为追加顺序，排序交给报告生成
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categorization {
    buckets: HashMap<String, Vec<CategorizedEntry>>,
}

impl Categorization {
    pub fn new() -> Self {
        Self::default()
    }

    /// 向标签桶追加一条记录，桶不存在时创建
    pub fn push(&mut self, tag: impl Into<String>, entry: CategorizedEntry) {
        self.buckets.entry(tag.into()).or_default().push(entry);
    }

    pub fn get(&self, tag: &str) -> Option<&[CategorizedEntry]> {
        self.buckets.get(tag).map(Vec::as_slice)
    }

    /// 标签名（无序）
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CategorizedEntry])> {
        self.buckets
            .iter()
            .map(|(tag, entries)| (tag.as_str(), entries.as_slice()))
    }

    pub fn tag_count(&self) -> usize {
        self.buckets.len()
    }

    /// 所有桶内记录总数（同一题在多个标签下会重复计数）
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// 去重后的题目数
    pub fn problem_count(&self) -> usize {
        self.buckets
            .values()
            .flatten()
            .map(|e| e.title_slug.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl From<HashMap<String, Vec<CategorizedEntry>>> for Categorization {
    fn from(buckets: HashMap<String, Vec<CategorizedEntry>>) -> Self {
        Self { buckets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubmissionStatus;

    #[test]
    fn test_problem_link_template() {
        assert_eq!(
            problem_link("two-sum"),
            "https://leetcode.com/problems/two-sum/"
        );
    }

    #[test]
    fn test_entry_from_submission() {
        let sub = Submission::new("two-sum", "Two Sum", SubmissionStatus::Accepted, 1);
        let entry = CategorizedEntry::from_submission(&sub);
        assert_eq!(entry.title, "Two Sum");
        assert_eq!(entry.title_slug, "two-sum");
        assert_eq!(entry.link, "https://leetcode.com/problems/two-sum/");
    }

    #[test]
    fn test_counts_with_shared_problem() {
        let sub = Submission::new("two-sum", "Two Sum", SubmissionStatus::Accepted, 1);
        let entry = CategorizedEntry::from_submission(&sub);

        let mut cat = Categorization::new();
        cat.push("Array", entry.clone());
        cat.push("Hash Table", entry);

        assert_eq!(cat.tag_count(), 2);
        assert_eq!(cat.entry_count(), 2);
        assert_eq!(cat.problem_count(), 1);
        assert_eq!(cat.get("Array").unwrap().len(), 1);
        assert!(cat.get("Math").is_none());
    }
}
