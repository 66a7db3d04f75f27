//! 标签分类服务 - 业务能力层
//!
//! 每道题查询一次标签，再把题目放进对应的标签桶

use crate::clients::JudgeClient;
use crate::error::CategorizationError;
use crate::models::{CategorizedEntry, Categorization, Submission};
use tracing::{debug, info};

/// 标签分类服务
///
/// 职责：
/// - 按输入顺序逐题查询标签（严格串行）
/// - 一道题有 N 个标签就进入 N 个桶，不做跨标签去重
/// - 任意一次查询失败即终止，不输出部分结果
pub struct TagCategorizer<'a, C: JudgeClient + ?Sized> {
    client: &'a C,
}

impl<'a, C: JudgeClient + ?Sized> TagCategorizer<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    pub async fn categorize_by_tags(
        &self,
        submissions: &[Submission],
    ) -> Result<Categorization, CategorizationError> {
        let total = submissions.len();
        let mut categorization = Categorization::new();

        for (index, submission) in submissions.iter().enumerate() {
            let slug = &submission.title_slug;
            info!("[{}/{}] 🏷️ 查询标签: {}", index + 1, total, slug);

            let tags = self
                .client
                .problem_tags(slug)
                .await
                .map_err(|source| CategorizationError {
                    slug: slug.clone(),
                    source,
                })?;

            if tags.is_empty() {
                debug!("{} 没有任何标签，不会出现在报告中", slug);
            }

            let entry = CategorizedEntry::from_submission(submission);
            for tag in tags {
                categorization.push(tag.name, entry.clone());
            }
        }

        info!(
            "✓ 分类完成: {} 个标签, {} 道题",
            categorization.tag_count(),
            categorization.problem_count()
        );
        Ok(categorization)
    }
}
