use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误（在任何远程调用之前触发）
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 拉取提交记录失败
    #[error("拉取提交记录失败: {0}")]
    Fetch(#[from] FetchError),
    /// 标签分类失败
    #[error("标签分类失败: {0}")]
    Categorization(#[from] CategorizationError),
    /// 报告写入失败
    #[error("报告写入失败: {0}")]
    Report(#[from] ReportError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 缺少会话凭证
    #[error("缺少 LEETCODE_SESSION，无法访问提交记录")]
    MissingSession,
    /// 启用了题解链接但没有配置题解目录
    #[error("已启用 ADD_SOLUTION_LINKS，但未设置 SOLUTIONS_DIR")]
    MissingSolutionsDir,
    /// 题解目录不存在或不是目录
    #[error("题解目录不存在或不是目录: {path}")]
    SolutionsDirNotFound { path: String },
    /// 配置值无法解析
    #[error("配置项 {key} 解析失败: 值 '{value}' 无法转换为 {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
    /// 配置文件读取失败
    #[error("无法读取配置文件 {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 配置文件解析失败
    #[error("无法解析配置文件 {path}: {source}")]
    FileParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 远程判题服务调用错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 网络请求失败
    #[error("请求 {operation} 失败: {source}")]
    Request {
        operation: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务端返回非 2xx 状态码
    #[error("请求 {operation} 返回状态码 {status}")]
    Status { operation: String, status: u16 },
    /// GraphQL 返回了 errors 字段
    #[error("请求 {operation} 返回 GraphQL 错误: {}", .messages.join("; "))]
    GraphQl {
        operation: String,
        messages: Vec<String>,
    },
    /// 响应结构不符合预期
    #[error("请求 {operation} 的响应无法解析: {reason}")]
    Decode { operation: String, reason: String },
    /// 题目不存在
    #[error("题目不存在: {slug}")]
    ProblemNotFound { slug: String },
}

impl FetchError {
    pub fn decode(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        FetchError::Decode {
            operation: operation.into(),
            reason: reason.into(),
        }
    }
}

/// 标签分类错误（单个题目标签查询失败即终止整个分类）
#[derive(Debug, Error)]
#[error("查询题目 {slug} 的标签失败: {source}")]
pub struct CategorizationError {
    pub slug: String,
    #[source]
    pub source: FetchError,
}

/// 报告写入错误
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("写入报告文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
