//! 报告写入服务 - 业务能力层
//!
//! 只负责"把报告写到磁盘"，每次都完整覆盖

use crate::error::ReportError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

pub struct ReportWriter {
    output_path: PathBuf,
}

impl ReportWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.output_path
    }

    /// 写入报告，父目录不存在时自动创建
    pub async fn write(&self, document: &str) -> Result<(), ReportError> {
        let failed = |source| ReportError::WriteFailed {
            path: self.output_path.display().to_string(),
            source,
        };

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(failed)?;
            }
        }

        debug!(
            "写入报告: {} ({} 字节)",
            self.output_path.display(),
            document.len()
        );
        fs::write(&self.output_path, document).await.map_err(failed)
    }
}
