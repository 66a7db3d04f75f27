//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! pipeline::App (汇总 → 分类 → 生成 → 写入)
//!     ↓
//! services (能力层：aggregator / categorizer / locator / generator / writer)
//!     ↓
//! clients (判题服务客户端：JudgeClient)
//! ```
//!
//! 编排层只做调度和日志，不做具体业务判断

pub mod pipeline;

pub use pipeline::App;
