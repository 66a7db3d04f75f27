//! 程序配置
//!
//! 优先级：环境变量 > 配置文件（`LEETCODE_REPORT_CONFIG` 指定的 TOML） > 默认值

use crate::error::ConfigError;
use crate::services::solution_locator::{PickPolicy, SlugMatch};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 指定 TOML 配置文件路径的环境变量
pub const CONFIG_FILE_ENV: &str = "LEETCODE_REPORT_CONFIG";

const DEFAULT_OUTPUT_FILE: &str = "OUTPUT.md";
const DEFAULT_OUTPUT_FILE_WITH_SOLUTIONS: &str = "SOLUTIONS.md";

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// LEETCODE_SESSION cookie
    pub session: String,
    /// csrftoken cookie（可选）
    pub csrf_token: Option<String>,
    /// 判题服务地址
    pub base_url: String,
    /// 输出文件
    pub output_file: PathBuf,
    /// 是否在报告中附带本地题解链接
    pub add_solution_links: bool,
    /// 本地题解根目录
    pub solutions_dir: Option<PathBuf>,
    /// 题解链接前缀，默认与题解目录相同
    pub solution_link_base: Option<String>,
    pub solution_match: SlugMatch,
    pub solution_pick: PickPolicy,
    /// 报告标题
    pub report_title: String,
    /// 每页拉取的提交数量
    pub page_size: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session: String::new(),
            csrf_token: None,
            base_url: "https://leetcode.com".to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            add_solution_links: false,
            solutions_dir: None,
            solution_link_base: None,
            solution_match: SlugMatch::Anchored,
            solution_pick: PickPolicy::Newest,
            report_title: "LeetCode Solutions by Tag".to_string(),
            page_size: 100,
            verbose_logging: false,
        }
    }
}

/// 配置文件中的字段，全部可选
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    session: Option<String>,
    csrf_token: Option<String>,
    base_url: Option<String>,
    output_file: Option<String>,
    add_solution_links: Option<bool>,
    solutions_dir: Option<String>,
    solution_link_base: Option<String>,
    solution_match: Option<String>,
    solution_pick: Option<String>,
    report_title: Option<String>,
    page_size: Option<usize>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// 从环境变量（以及可选的配置文件）加载配置
    ///
    /// 只做解析，不做校验；校验见 [`Config::validate`]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 使用自定义的变量查找函数加载配置
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let file = match lookup(CONFIG_FILE_ENV) {
            Some(path) => load_file(Path::new(&path))?,
            None => FileConfig::default(),
        };

        let default = Self::default();

        let add_solution_links = match lookup("ADD_SOLUTION_LINKS") {
            Some(v) => parse_bool("ADD_SOLUTION_LINKS", &v)?,
            None => file.add_solution_links.unwrap_or(default.add_solution_links),
        };

        let output_file = lookup("OUTPUT_FILE")
            .or(file.output_file)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                if add_solution_links {
                    PathBuf::from(DEFAULT_OUTPUT_FILE_WITH_SOLUTIONS)
                } else {
                    default.output_file.clone()
                }
            });

        let solution_match = match lookup("SOLUTION_MATCH").or(file.solution_match) {
            Some(v) => v.parse().map_err(|_| invalid("SOLUTION_MATCH", &v, "anchored|substring"))?,
            None => default.solution_match,
        };

        let solution_pick = match lookup("SOLUTION_PICK").or(file.solution_pick) {
            Some(v) => v.parse().map_err(|_| invalid("SOLUTION_PICK", &v, "newest|oldest"))?,
            None => default.solution_pick,
        };

        let page_size = match lookup("PAGE_SIZE") {
            Some(v) => v.trim().parse().map_err(|_| invalid("PAGE_SIZE", &v, "usize"))?,
            None => file.page_size.unwrap_or(default.page_size),
        };

        let verbose_logging = match lookup("VERBOSE_LOGGING") {
            Some(v) => parse_bool("VERBOSE_LOGGING", &v)?,
            None => file.verbose_logging.unwrap_or(default.verbose_logging),
        };

        Ok(Self {
            session: lookup("LEETCODE_SESSION")
                .or(file.session)
                .unwrap_or(default.session),
            csrf_token: lookup("LEETCODE_CSRF_TOKEN").or(file.csrf_token),
            base_url: lookup("LEETCODE_BASE_URL")
                .or(file.base_url)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(default.base_url),
            output_file,
            add_solution_links,
            solutions_dir: lookup("SOLUTIONS_DIR")
                .or(file.solutions_dir)
                .map(PathBuf::from),
            solution_link_base: lookup("SOLUTION_LINK_BASE").or(file.solution_link_base),
            solution_match,
            solution_pick,
            report_title: lookup("REPORT_TITLE")
                .or(file.report_title)
                .unwrap_or(default.report_title),
            page_size,
            verbose_logging,
        })
    }

    /// 校验配置，必须在任何远程调用之前执行
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.trim().is_empty() {
            return Err(ConfigError::MissingSession);
        }

        if self.page_size == 0 {
            return Err(invalid("PAGE_SIZE", "0", "正整数"));
        }

        if self.add_solution_links {
            let dir = self
                .solutions_dir
                .as_ref()
                .ok_or(ConfigError::MissingSolutionsDir)?;
            if !dir.is_dir() {
                return Err(ConfigError::SolutionsDirNotFound {
                    path: dir.display().to_string(),
                });
            }
        }

        Ok(())
    }

    /// 报告中题解链接的前缀
    pub fn link_base(&self) -> Option<String> {
        self.solution_link_base.clone().or_else(|| {
            self.solutions_dir
                .as_ref()
                .map(|dir| dir.to_string_lossy().to_string())
        })
    }
}

fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::FileParse {
        path: path.display().to_string(),
        source,
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value, "bool")),
    }
}

fn invalid(key: &str, value: &str, expected: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}
