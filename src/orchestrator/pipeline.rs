//! 报告流水线 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责把各个能力按顺序串起来：
//!
//! 1. **汇总**：分页拉取提交，过滤并去重
//! 2. **分类**：逐题查询标签，构建标签分组
//! 3. **生成**：渲染 Markdown（可选附带本地题解链接）
//! 4. **写入**：覆盖写入输出文件
//!
//! 每个阶段都消费上一阶段的完整输出；任一阶段失败都会立即终止并返回错误，
//! 不会把空结果传给下一阶段。

use crate::clients::{JudgeClient, LeetCodeClient};
use crate::config::Config;
use crate::error::AppResult;
use crate::services::{
    ReportGenerator, ReportSummary, ReportWriter, SolutionLocator, SubmissionAggregator,
    TagCategorizer,
};
use crate::utils::logging::{log_stage, log_startup, print_final_stats};
use tracing::{error, info};

const TOTAL_STAGES: usize = 4;

/// 应用主结构
pub struct App<C: JudgeClient = LeetCodeClient> {
    config: Config,
    client: C,
}

impl App<LeetCodeClient> {
    /// 初始化应用：校验配置并创建 LeetCode 客户端
    pub fn initialize(config: Config) -> AppResult<Self> {
        config.validate()?;
        let client = LeetCodeClient::new(&config)?;
        Ok(Self { config, client })
    }
}

impl<C: JudgeClient> App<C> {
    /// 使用自定义客户端创建应用
    pub fn with_client(config: Config, client: C) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 运行完整流程并写出报告
    pub async fn run(&self) -> AppResult<ReportSummary> {
        log_startup(&self.config);

        let (document, summary) = self.build_report().await?;

        log_stage(4, TOTAL_STAGES, "写入报告");
        let writer = ReportWriter::new(&self.config.output_file);
        writer
            .write(&document)
            .await
            .inspect_err(|e| error!("❌ 写入报告失败: {}", e))?;

        print_final_stats(&summary, writer.path());
        Ok(summary)
    }

    /// 执行汇总、分类、生成三个阶段，返回报告文本和统计
    pub async fn build_report(&self) -> AppResult<(String, ReportSummary)> {
        log_stage(1, TOTAL_STAGES, "拉取通过的提交");
        let submissions = SubmissionAggregator::new(&self.client)
            .with_page_size(self.config.page_size)
            .fetch_accepted_submissions()
            .await
            .inspect_err(|e| error!("❌ 拉取提交失败: {}", e))?;

        log_stage(2, TOTAL_STAGES, "按标签分类");
        let categorized = TagCategorizer::new(&self.client)
            .categorize_by_tags(&submissions)
            .await
            .inspect_err(|e| error!("❌ 标签分类失败: {}", e))?;

        log_stage(3, TOTAL_STAGES, "生成 Markdown");
        let locator = self.solution_locator();
        let mut generator = ReportGenerator::new(&self.config.report_title);
        if let Some(locator) = &locator {
            let link_base = self.config.link_base().unwrap_or_default();
            generator = generator.with_solution_links(locator, link_base);
        }
        let document = generator.generate_markdown(&categorized);
        let summary = ReportSummary::of(&categorized);
        info!("✓ 报告共 {} 个标签", summary.tags);

        Ok((document, summary))
    }

    fn solution_locator(&self) -> Option<SolutionLocator> {
        if !self.config.add_solution_links {
            return None;
        }
        self.config.solutions_dir.as_ref().map(|dir| {
            SolutionLocator::new(dir)
                .with_policies(self.config.solution_match, self.config.solution_pick)
        })
    }
}
