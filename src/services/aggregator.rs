//! 提交记录汇总服务 - 业务能力层
//!
//! 负责分页拉取全部提交记录，过滤出通过的提交，并按题目去重

use crate::clients::JudgeClient;
use crate::error::FetchError;
use crate::models::{LatestSubmissions, Submission};
use tracing::{debug, info};

/// 默认每页数量
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// 提交记录汇总服务
///
/// 职责：
/// - 从 offset 0 开始顺序翻页，遇到空页停止
/// - 只保留 Accepted 的提交
/// - 同一道题保留时间戳最大的一次
pub struct SubmissionAggregator<'a, C: JudgeClient + ?Sized> {
    client: &'a C,
    page_size: usize,
}

impl<'a, C: JudgeClient + ?Sized> SubmissionAggregator<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// 拉取所有提交记录（未过滤）
    pub async fn fetch_all_submissions(&self) -> Result<Vec<Submission>, FetchError> {
        let mut all = Vec::new();
        let mut offset = 0;

        loop {
            let page = self.client.list_submissions(self.page_size, offset).await?;
            if page.is_empty() {
                break;
            }

            debug!("offset {} 拉取到 {} 条提交", offset, page.len());
            offset += self.page_size;
            all.extend(page);
        }

        info!("✓ 共拉取 {} 条提交记录", all.len());
        Ok(all)
    }

    /// 拉取通过的提交，并按题目去重
    ///
    /// 输出顺序为每道题第一次出现的顺序
    pub async fn fetch_accepted_submissions(&self) -> Result<Vec<Submission>, FetchError> {
        let all = self.fetch_all_submissions().await?;
        let unique = latest_accepted(all);

        info!("✓ 去重后共 {} 道通过的题目", unique.len());
        Ok(unique.into_vec())
    }
}

/// 过滤出通过的提交并去重
pub fn latest_accepted(submissions: impl IntoIterator<Item = Submission>) -> LatestSubmissions {
    submissions
        .into_iter()
        .filter(Submission::is_accepted)
        .collect()
}
