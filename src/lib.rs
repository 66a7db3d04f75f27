//! # LeetCode Tag Report
//!
//! 拉取用户在 LeetCode 上通过的题目，按标签分组，生成 Markdown 报告，
//! 可选地为每道题附上本地题解目录的链接
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 与判题服务通信，只负责传输与响应校验
//! - `JudgeClient` - 流程依赖的接口；`LeetCodeClient` 为 GraphQL 实现
//!
//! ### ② 业务能力层（Services）
//! - `SubmissionAggregator` - 分页拉取、过滤通过的提交、按题目去重
//! - `TagCategorizer` - 逐题查询标签，构建 标签 → 题目 分组
//! - `SolutionLocator` - 根据 slug 查找本地题解目录
//! - `ReportGenerator` / `ReportWriter` - 渲染并写出报告
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator::App` - 串联各阶段，任一阶段失败立即终止
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use clients::{JudgeClient, LeetCodeClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{CategorizedEntry, Categorization, Submission, SubmissionStatus, Tag};
pub use orchestrator::App;
