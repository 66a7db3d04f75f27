//! 日志工具模块
//!
//! 提供日志初始化和固定格式输出的辅助函数

use crate::config::Config;
use crate::services::ReportSummary;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则默认 info，详细模式下为 debug。重复调用不会报错
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始生成按标签分类的题解报告");
    info!("🌐 服务地址: {}", config.base_url);
    info!("📄 输出文件: {}", config.output_file.display());
    if config.add_solution_links {
        if let Some(dir) = &config.solutions_dir {
            info!(
                "📁 题解目录: {} (匹配: {:?}, 选择: {:?})",
                dir.display(),
                config.solution_match,
                config.solution_pick
            );
        }
    }
    info!("{}", "=".repeat(60));
}

/// 记录阶段开始
pub fn log_stage(step: usize, total: usize, name: &str) {
    info!("\n{}", "─".repeat(60));
    info!("📦 [{}/{}] {}", step, total, name);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(summary: &ReportSummary, output_path: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 报告生成完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("🏷️ 标签: {}", summary.tags);
    info!("✅ 题目: {} (表格行数 {})", summary.problems, summary.entries);
    info!("{}", "=".repeat(60));
    info!("\n报告已保存至: {}", output_path.display());
}
