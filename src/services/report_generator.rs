//! 报告生成服务 - 业务能力层
//!
//! 把标签分组渲染成 Markdown。输出只取决于输入分组、是否启用题解链接以及题解目录的当前状态

use crate::models::{CategorizedEntry, Categorization};
use crate::services::SolutionLocator;
use std::fmt::Write as _;

const NOT_AVAILABLE: &str = "N/A";

/// 报告统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub tags: usize,
    pub entries: usize,
    pub problems: usize,
}

impl ReportSummary {
    pub fn of(categorized: &Categorization) -> Self {
        Self {
            tags: categorized.tag_count(),
            entries: categorized.entry_count(),
            problems: categorized.problem_count(),
        }
    }
}

/// 报告生成器
pub struct ReportGenerator<'a> {
    title: String,
    solutions: Option<SolutionLinks<'a>>,
}

struct SolutionLinks<'a> {
    locator: &'a SolutionLocator,
    link_base: String,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            solutions: None,
        }
    }

    /// 启用题解列，每行都会单独查找一次题解目录
    pub fn with_solution_links(
        mut self,
        locator: &'a SolutionLocator,
        link_base: impl Into<String>,
    ) -> Self {
        self.solutions = Some(SolutionLinks {
            locator,
            link_base: link_base.into(),
        });
        self
    }

    /// 生成 Markdown 文本
    ///
    /// 标签按名称升序；每个标签内按 slug 升序（不是按标题）
    pub fn generate_markdown(&self, categorized: &Categorization) -> String {
        let mut doc = String::new();
        let _ = writeln!(doc, "# {}", self.title);

        let mut sections: Vec<(&str, &[CategorizedEntry])> = categorized.iter().collect();
        sections.sort_by(|a, b| a.0.cmp(b.0));

        for (tag, entries) in sections {
            let mut rows: Vec<&CategorizedEntry> = entries.iter().collect();
            rows.sort_by(|a, b| a.title_slug.cmp(&b.title_slug));

            let _ = writeln!(doc);
            let _ = writeln!(doc, "### {}", tag);
            let _ = writeln!(doc);
            self.write_table(&mut doc, &rows);
        }

        doc
    }

    fn write_table(&self, doc: &mut String, rows: &[&CategorizedEntry]) {
        match &self.solutions {
            Some(_) => {
                let _ = writeln!(doc, "| Problem | Solution |");
                let _ = writeln!(doc, "| --- | --- |");
            }
            None => {
                let _ = writeln!(doc, "| Problem |");
                let _ = writeln!(doc, "| --- |");
            }
        }

        for entry in rows {
            let problem = format!("[{}]({})", escape_cell(&entry.title), entry.link);
            match &self.solutions {
                Some(links) => {
                    let solution = links.cell(&entry.title_slug);
                    let _ = writeln!(doc, "| {} | {} |", problem, solution);
                }
                None => {
                    let _ = writeln!(doc, "| {} |", problem);
                }
            }
        }
    }
}

impl SolutionLinks<'_> {
    fn cell(&self, slug: &str) -> String {
        match self.locator.find_solution_directory(slug) {
            Some(dir) => format!("[{}]({})", escape_cell(&dir), self.href(&dir)),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    fn href(&self, dir: &str) -> String {
        let base = self.link_base.trim_end_matches('/');
        if base.is_empty() {
            dir.to_string()
        } else {
            format!("{}/{}", base, dir)
        }
    }
}

/// 转义表格单元格中的竖线
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
