//! 按题目去重的有序表
//!
//! 以 slug 为键，保留时间戳最大的那次提交；迭代顺序为每个 slug 首次出现的顺序

use crate::models::Submission;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct LatestSubmissions {
    entries: Vec<Submission>,
    index: HashMap<String, usize>,
}

impl LatestSubmissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入，或在更新时替换
    ///
    /// 只有已有记录的时间戳严格小于新记录时才替换，时间戳相同保留先出现的那条。
    /// 替换不改变该 slug 的位置。返回是否写入了新记录。
    pub fn insert_if_newer(&mut self, submission: Submission) -> bool {
        match self.index.get(&submission.title_slug) {
            Some(&pos) => {
                if self.entries[pos].timestamp < submission.timestamp {
                    self.entries[pos] = submission;
                    true
                } else {
                    false
                }
            }
            None => {
                self.index
                    .insert(submission.title_slug.clone(), self.entries.len());
                self.entries.push(submission);
                true
            }
        }
    }

    pub fn get(&self, slug: &str) -> Option<&Submission> {
        self.index.get(slug).map(|&pos| &self.entries[pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Submission> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Submission> {
        self.entries
    }
}

impl FromIterator<Submission> for LatestSubmissions {
    fn from_iter<I: IntoIterator<Item = Submission>>(iter: I) -> Self {
        let mut table = LatestSubmissions::new();
        for submission in iter {
            table.insert_if_newer(submission);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubmissionStatus;

    fn accepted(slug: &str, title: &str, ts: i64) -> Submission {
        Submission::new(slug, title, SubmissionStatus::Accepted, ts)
    }

    #[test]
    fn test_newer_replaces_older() {
        let mut table = LatestSubmissions::new();
        assert!(table.insert_if_newer(accepted("two-sum", "old", 10)));
        assert!(table.insert_if_newer(accepted("two-sum", "new", 20)));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("two-sum").unwrap().title, "new");
    }

    #[test]
    fn test_older_does_not_replace() {
        let mut table = LatestSubmissions::new();
        table.insert_if_newer(accepted("two-sum", "new", 20));
        assert!(!table.insert_if_newer(accepted("two-sum", "old", 10)));
        assert_eq!(table.get("two-sum").unwrap().timestamp, 20);
    }

    #[test]
    fn test_equal_timestamp_keeps_first_seen() {
        let mut table = LatestSubmissions::new();
        table.insert_if_newer(accepted("two-sum", "first", 10));
        assert!(!table.insert_if_newer(accepted("two-sum", "second", 10)));
        assert_eq!(table.get("two-sum").unwrap().title, "first");
    }

    #[test]
    fn test_order_is_first_insertion_even_after_replace() {
        let table: LatestSubmissions = vec![
            accepted("b", "b", 1),
            accepted("a", "a", 1),
            accepted("b", "b2", 9),
            accepted("c", "c", 1),
        ]
        .into_iter()
        .collect();

        let slugs: Vec<&str> = table.iter().map(|s| s.title_slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a", "c"]);
        assert_eq!(table.get("b").unwrap().title, "b2");
    }
}
