//! 判题服务客户端接口
//!
//! 流程层只依赖这个 trait，便于替换成内存实现做测试

use crate::error::FetchError;
use crate::models::{Submission, Tag};
use async_trait::async_trait;

#[async_trait]
pub trait JudgeClient: Send + Sync {
    /// 拉取一页提交记录，页为空表示已经到底
    async fn list_submissions(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Submission>, FetchError>;

    /// 查询题目的标签
    async fn problem_tags(&self, slug: &str) -> Result<Vec<Tag>, FetchError>;
}
