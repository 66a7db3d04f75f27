//! 本地题解定位服务 - 业务能力层
//!
//! 只负责"根据 slug 找到本地题解目录"，不缓存，每次调用都重新扫描

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// 目录名与 slug 的匹配方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugMatch {
    /// `^\d*-?<slug>$`：可选数字前缀 + 可选连字符 + 完整 slug
    Anchored,
    /// `\d*-?<slug>`：在目录名任意位置出现即可
    Substring,
}

impl SlugMatch {
    /// 构造该 slug 对应的正则
    pub fn pattern(self, slug: &str) -> Result<Regex, regex::Error> {
        let escaped = regex::escape(slug);
        match self {
            SlugMatch::Anchored => Regex::new(&format!(r"^\d*-?{}$", escaped)),
            SlugMatch::Substring => Regex::new(&format!(r"\d*-?{}", escaped)),
        }
    }
}

impl FromStr for SlugMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anchored" => Ok(SlugMatch::Anchored),
            "substring" => Ok(SlugMatch::Substring),
            other => Err(format!("未知的匹配方式: {}", other)),
        }
    }
}

/// 多个目录匹配时选哪一个
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickPolicy {
    /// 变更时间最晚
    Newest,
    /// 变更时间最早
    Oldest,
}

impl FromStr for PickPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(PickPolicy::Newest),
            "oldest" => Ok(PickPolicy::Oldest),
            other => Err(format!("未知的选择策略: {}", other)),
        }
    }
}

/// 候选目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub changed: SystemTime,
}

/// 从候选目录中选出一个
///
/// 先按名称排序，时间相同时保留名称靠前的那个
pub fn pick(mut candidates: Vec<Candidate>, policy: PickPolicy) -> Option<String> {
    candidates.sort_by(|a, b| a.name.cmp(&b.name));
    candidates
        .into_iter()
        .reduce(|best, c| {
            let better = match policy {
                PickPolicy::Newest => c.changed > best.changed,
                PickPolicy::Oldest => c.changed < best.changed,
            };
            if better {
                c
            } else {
                best
            }
        })
        .map(|c| c.name)
}

/// 本地题解定位器
#[derive(Debug, Clone)]
pub struct SolutionLocator {
    root: PathBuf,
    slug_match: SlugMatch,
    pick_policy: PickPolicy,
}

impl SolutionLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            slug_match: SlugMatch::Anchored,
            pick_policy: PickPolicy::Newest,
        }
    }

    pub fn with_policies(mut self, slug_match: SlugMatch, pick_policy: PickPolicy) -> Self {
        self.slug_match = slug_match;
        self.pick_policy = pick_policy;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 查找 slug 对应的题解目录名
    ///
    /// 只扫描根目录的直接子目录。读取失败时记录警告并视为未找到
    pub fn find_solution_directory(&self, slug: &str) -> Option<String> {
        let pattern = match self.slug_match.pattern(slug) {
            Ok(p) => p,
            Err(e) => {
                warn!("无法为 {} 构建匹配规则: {}", slug, e);
                return None;
            }
        };

        let candidates = match self.candidates(&pattern) {
            Ok(c) => c,
            Err(e) => {
                warn!("无法读取题解目录 {}: {}", self.root.display(), e);
                return None;
            }
        };

        debug!("{} 匹配到 {} 个目录", slug, candidates.len());
        pick(candidates, self.pick_policy)
    }

    fn candidates(&self, pattern: &Regex) -> std::io::Result<Vec<Candidate>> {
        let mut candidates = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if !pattern.is_match(&name) {
                continue;
            }

            // 跟随符号链接，只保留目录
            let metadata = match fs::metadata(entry.path()) {
                Ok(m) if m.is_dir() => m,
                _ => continue,
            };

            candidates.push(Candidate {
                name,
                changed: change_time(&metadata),
            });
        }

        Ok(candidates)
    }
}

#[cfg(unix)]
fn change_time(metadata: &fs::Metadata) -> SystemTime {
    use std::os::unix::fs::MetadataExt;
    use std::time::Duration;

    let secs = metadata.ctime();
    let nanos = metadata.ctime_nsec().clamp(0, 999_999_999) as u32;
    if secs >= 0 {
        UNIX_EPOCH + Duration::new(secs as u64, nanos)
    } else {
        UNIX_EPOCH - Duration::from_secs(secs.unsigned_abs()) + Duration::from_nanos(nanos as u64)
    }
}

#[cfg(not(unix))]
fn change_time(metadata: &fs::Metadata) -> SystemTime {
    metadata.modified().unwrap_or(UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn candidate(name: &str, secs: u64) -> Candidate {
        Candidate {
            name: name.to_string(),
            changed: UNIX_EPOCH + Duration::from_secs(secs),
        }
    }

    #[test]
    fn test_anchored_pattern() {
        let p = SlugMatch::Anchored.pattern("4sum").unwrap();
        assert!(p.is_match("18-4sum"));
        assert!(p.is_match("4sum"));
        assert!(p.is_match("184sum"));
        assert!(!p.is_match("4sum-ii"));
        assert!(!p.is_match("454-4sum-ii"));
        assert!(!p.is_match("my-4sum"));
    }

    #[test]
    fn test_substring_pattern() {
        let p = SlugMatch::Substring.pattern("4sum").unwrap();
        assert!(p.is_match("18-4sum"));
        assert!(p.is_match("4sum-ii"));
        assert!(p.is_match("454-4sum-ii"));
        assert!(!p.is_match("3sum"));
    }

    #[test]
    fn test_pattern_escapes_slug() {
        // slug 中的正则元字符按字面处理
        let p = SlugMatch::Anchored.pattern("a.b").unwrap();
        assert!(p.is_match("1-a.b"));
        assert!(!p.is_match("1-axb"));
    }

    #[test]
    fn test_parse_policies() {
        assert_eq!("Anchored".parse::<SlugMatch>(), Ok(SlugMatch::Anchored));
        assert_eq!(" substring ".parse::<SlugMatch>(), Ok(SlugMatch::Substring));
        assert!("fuzzy".parse::<SlugMatch>().is_err());
        assert_eq!("NEWEST".parse::<PickPolicy>(), Ok(PickPolicy::Newest));
        assert_eq!("oldest".parse::<PickPolicy>(), Ok(PickPolicy::Oldest));
        assert!("latest".parse::<PickPolicy>().is_err());
    }

    #[test]
    fn test_pick_newest_and_oldest() {
        let candidates = vec![candidate("b", 20), candidate("a", 10), candidate("c", 30)];
        assert_eq!(
            pick(candidates.clone(), PickPolicy::Newest),
            Some("c".to_string())
        );
        assert_eq!(pick(candidates, PickPolicy::Oldest), Some("a".to_string()));
        assert_eq!(pick(Vec::new(), PickPolicy::Newest), None);
    }

    #[test]
    fn test_pick_tie_keeps_first_name() {
        let candidates = vec![candidate("z-two-sum", 5), candidate("1-two-sum", 5)];
        assert_eq!(
            pick(candidates.clone(), PickPolicy::Newest),
            Some("1-two-sum".to_string())
        );
        assert_eq!(
            pick(candidates, PickPolicy::Oldest),
            Some("1-two-sum".to_string())
        );
    }

    #[test]
    fn test_locator_anchored_vs_substring() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("18-4sum")).unwrap();
        fs::create_dir(root.path().join("4sum-ii")).unwrap();

        let anchored = SolutionLocator::new(root.path());
        assert_eq!(
            anchored.find_solution_directory("4sum"),
            Some("18-4sum".to_string())
        );

        // 子串匹配时两个目录都是候选，按名称排序后时间相同则选名称靠前的
        let substring = SolutionLocator::new(root.path())
            .with_policies(SlugMatch::Substring, PickPolicy::Newest);
        let found = substring.find_solution_directory("4sum").unwrap();
        assert!(found == "18-4sum" || found == "4sum-ii");

        let pattern = SlugMatch::Substring.pattern("4sum").unwrap();
        let names: Vec<String> = substring
            .candidates(&pattern)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_locator_ignores_files_and_nested_dirs() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("1-two-sum"), "not a dir").unwrap();
        fs::create_dir_all(root.path().join("easy").join("1-two-sum")).unwrap();

        let locator = SolutionLocator::new(root.path());
        assert_eq!(locator.find_solution_directory("two-sum"), None);
    }

    #[test]
    fn test_locator_picks_by_change_time() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("two-sum")).unwrap();
        std::thread::sleep(Duration::from_millis(50));
        fs::create_dir(root.path().join("1-two-sum")).unwrap();

        let newest = SolutionLocator::new(root.path());
        assert_eq!(
            newest.find_solution_directory("two-sum"),
            Some("1-two-sum".to_string())
        );

        let oldest =
            SolutionLocator::new(root.path()).with_policies(SlugMatch::Anchored, PickPolicy::Oldest);
        assert_eq!(
            oldest.find_solution_directory("two-sum"),
            Some("two-sum".to_string())
        );
    }

    #[test]
    fn test_missing_root_is_absence() {
        let locator = SolutionLocator::new("/definitely/not/a/solutions/root");
        assert_eq!(locator.find_solution_directory("two-sum"), None);
    }
}
