//! LeetCode GraphQL 客户端
//!
//! 封装所有与判题服务 API 相关的调用逻辑。只负责传输和响应校验，
//! 不处理分页、去重等业务规则

use crate::clients::JudgeClient;
use crate::config::Config;
use crate::error::FetchError;
use crate::models::{Problem, Submission, SubmissionStatus, Tag};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, COOKIE, REFERER};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use tracing::debug;

const SUBMISSION_LIST_QUERY: &str = r#"
query submissionList($offset: Int!, $limit: Int!) {
    submissionList(offset: $offset, limit: $limit) {
        hasNext
        submissions {
            title
            titleSlug
            statusDisplay
            timestamp
        }
    }
}
"#;

const QUESTION_TAGS_QUERY: &str = r#"
query questionTags($titleSlug: String!) {
    question(titleSlug: $titleSlug) {
        titleSlug
        topicTags {
            name
            slug
        }
    }
}
"#;

/// LeetCode 客户端
pub struct LeetCodeClient {
    http: Client,
    graphql_url: String,
}

impl LeetCodeClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut cookie = format!("LEETCODE_SESSION={}", config.session);
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(csrf) = &config.csrf_token {
            cookie.push_str(&format!("; csrftoken={}", csrf));
            headers.insert("x-csrftoken", header_value("x-csrftoken", csrf)?);
        }
        headers.insert(COOKIE, header_value("cookie", &cookie)?);
        headers.insert(REFERER, header_value("referer", &config.base_url)?);

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| FetchError::Request {
                operation: "client".to_string(),
                source,
            })?;

        Ok(Self {
            http,
            graphql_url: format!("{}/graphql", config.base_url),
        })
    }

    /// 查询题目元数据
    pub async fn problem(&self, slug: &str) -> Result<Problem, FetchError> {
        let body = self
            .post(
                "question",
                json!({
                    "operationName": "questionTags",
                    "query": QUESTION_TAGS_QUERY,
                    "variables": { "titleSlug": slug }
                }),
            )
            .await?;
        parse_problem(slug, &body)
    }

    /// 发送 GraphQL 请求并返回原始响应文本
    async fn post(&self, operation: &str, payload: JsonValue) -> Result<String, FetchError> {
        debug!("GraphQL 请求 {}: {}", operation, payload["variables"]);

        let request_failed = |source| FetchError::Request {
            operation: operation.to_string(),
            source,
        };

        let response = self
            .http
            .post(&self.graphql_url)
            .json(&payload)
            .send()
            .await
            .map_err(request_failed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                operation: operation.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(request_failed)
    }
}

#[async_trait]
impl JudgeClient for LeetCodeClient {
    async fn list_submissions(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Submission>, FetchError> {
        let body = self
            .post(
                "submissionList",
                json!({
                    "operationName": "submissionList",
                    "query": SUBMISSION_LIST_QUERY,
                    "variables": { "offset": offset, "limit": limit }
                }),
            )
            .await?;
        parse_submission_page(&body)
    }

    async fn problem_tags(&self, slug: &str) -> Result<Vec<Tag>, FetchError> {
        Ok(self.problem(slug).await?.topic_tags)
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, FetchError> {
    HeaderValue::from_str(value)
        .map_err(|e| FetchError::decode("client", format!("请求头 {} 含非法字符: {}", name, e)))
}

// ========== 响应结构 ==========

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorBody>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionListData {
    submission_list: Option<SubmissionListBody>,
}

#[derive(Debug, Deserialize)]
struct SubmissionListBody {
    #[serde(default)]
    submissions: Vec<RawSubmission>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSubmission {
    title: Option<String>,
    title_slug: Option<String>,
    status_display: Option<String>,
    timestamp: Option<RawTimestamp>,
}

/// 时间戳可能是数字，也可能是数字字符串
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Int(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct QuestionData {
    question: Option<RawQuestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    #[serde(default)]
    topic_tags: Option<Vec<RawTag>>,
}

#[derive(Debug, Deserialize)]
struct RawTag {
    name: Option<String>,
}

impl RawSubmission {
    fn into_submission(self) -> Result<Submission, FetchError> {
        const OP: &str = "submissionList";

        let title_slug = self
            .title_slug
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| FetchError::decode(OP, "提交记录缺少 titleSlug"))?;
        let title = self
            .title
            .ok_or_else(|| FetchError::decode(OP, format!("{} 缺少 title", title_slug)))?;
        let status = self
            .status_display
            .ok_or_else(|| FetchError::decode(OP, format!("{} 缺少 statusDisplay", title_slug)))?;
        let timestamp = match self.timestamp {
            Some(RawTimestamp::Int(ts)) => ts,
            Some(RawTimestamp::Text(text)) => text.trim().parse().map_err(|_| {
                FetchError::decode(OP, format!("{} 的 timestamp 无法解析: {}", title_slug, text))
            })?,
            None => {
                return Err(FetchError::decode(
                    OP,
                    format!("{} 缺少 timestamp", title_slug),
                ))
            }
        };

        Ok(Submission::new(
            title_slug,
            title,
            SubmissionStatus::from_display(&status),
            timestamp,
        ))
    }
}

/// 解析 GraphQL 外层结构：有 errors 直接报错，data 为空视为格式错误
fn parse_envelope<T: DeserializeOwned>(operation: &str, body: &str) -> Result<T, FetchError> {
    let envelope: GraphQlResponse<T> = serde_json::from_str(body)
        .map_err(|e| FetchError::decode(operation, e.to_string()))?;

    if !envelope.errors.is_empty() {
        return Err(FetchError::GraphQl {
            operation: operation.to_string(),
            messages: envelope.errors.into_iter().map(|e| e.message).collect(),
        });
    }

    envelope
        .data
        .ok_or_else(|| FetchError::decode(operation, "响应缺少 data"))
}

/// 解析一页提交记录
pub fn parse_submission_page(body: &str) -> Result<Vec<Submission>, FetchError> {
    let data: SubmissionListData = parse_envelope("submissionList", body)?;
    let list = data
        .submission_list
        .ok_or_else(|| FetchError::decode("submissionList", "响应缺少 submissionList"))?;

    list.submissions
        .into_iter()
        .map(RawSubmission::into_submission)
        .collect()
}

/// 解析题目标签
pub fn parse_problem(slug: &str, body: &str) -> Result<Problem, FetchError> {
    let data: QuestionData = parse_envelope("question", body)?;
    let question = data.question.ok_or_else(|| FetchError::ProblemNotFound {
        slug: slug.to_string(),
    })?;

    let topic_tags = question
        .topic_tags
        .unwrap_or_default()
        .into_iter()
        .map(|t| {
            t.name
                .filter(|n| !n.is_empty())
                .map(Tag::new)
                .ok_or_else(|| FetchError::decode("question", format!("{} 的标签缺少 name", slug)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Problem {
        title_slug: slug.to_string(),
        topic_tags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submission_page() {
        let body = r#"{
            "data": {
                "submissionList": {
                    "hasNext": true,
                    "submissions": [
                        {"title": "Two Sum", "titleSlug": "two-sum", "statusDisplay": "Accepted", "timestamp": "1690000000"},
                        {"title": "Add Two Numbers", "titleSlug": "add-two-numbers", "statusDisplay": "Wrong Answer", "timestamp": 1690000100}
                    ]
                }
            }
        }"#;

        let page = parse_submission_page(body).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].title_slug, "two-sum");
        assert_eq!(page[0].timestamp, 1_690_000_000);
        assert!(page[0].is_accepted());
        assert_eq!(page[1].timestamp, 1_690_000_100);
        assert_eq!(
            page[1].status,
            SubmissionStatus::Other("Wrong Answer".to_string())
        );
    }

    #[test]
    fn test_parse_empty_page() {
        let body = r#"{"data": {"submissionList": {"hasNext": false, "submissions": []}}}"#;
        assert!(parse_submission_page(body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_slug() {
        let body = r#"{"data": {"submissionList": {"submissions": [
            {"title": "Two Sum", "statusDisplay": "Accepted", "timestamp": "1"}
        ]}}}"#;
        assert!(matches!(
            parse_submission_page(body),
            Err(FetchError::Decode { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_timestamp() {
        let body = r#"{"data": {"submissionList": {"submissions": [
            {"title": "Two Sum", "titleSlug": "two-sum", "statusDisplay": "Accepted", "timestamp": "yesterday"}
        ]}}}"#;
        let err = parse_submission_page(body).unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_parse_graphql_errors() {
        let body = r#"{"data": null, "errors": [{"message": "User is not logged in"}]}"#;
        match parse_submission_page(body) {
            Err(FetchError::GraphQl { messages, .. }) => {
                assert_eq!(messages, vec!["User is not logged in".to_string()]);
            }
            other => panic!("意外结果: {:?}", other),
        }
    }

    #[test]
    fn test_parse_null_submission_list() {
        let body = r#"{"data": {"submissionList": null}}"#;
        assert!(matches!(
            parse_submission_page(body),
            Err(FetchError::Decode { .. })
        ));
        assert!(matches!(
            parse_submission_page("not json"),
            Err(FetchError::Decode { .. })
        ));
    }

    #[test]
    fn test_parse_problem_tags() {
        let body = r#"{"data": {"question": {"titleSlug": "two-sum", "topicTags": [
            {"name": "Array", "slug": "array"},
            {"name": "Hash Table", "slug": "hash-table"}
        ]}}}"#;
        let problem = parse_problem("two-sum", body).unwrap();
        assert_eq!(problem.title_slug, "two-sum");
        assert_eq!(
            problem.topic_tags,
            vec![Tag::new("Array"), Tag::new("Hash Table")]
        );
    }

    #[test]
    fn test_parse_problem_without_tags() {
        let body = r#"{"data": {"question": {"titleSlug": "x", "topicTags": []}}}"#;
        assert!(parse_problem("x", body).unwrap().topic_tags.is_empty());
    }

    #[test]
    fn test_parse_missing_problem() {
        let body = r#"{"data": {"question": null}}"#;
        assert!(matches!(
            parse_problem("nope", body),
            Err(FetchError::ProblemNotFound { ref slug }) if slug == "nope"
        ));
    }

    #[test]
    fn test_client_builds_from_config() {
        let config = Config {
            session: "abc".to_string(),
            csrf_token: Some("token".to_string()),
            ..Config::default()
        };
        let client = LeetCodeClient::new(&config).unwrap();
        assert_eq!(client.graphql_url, "https://leetcode.com/graphql");
    }

    /// 需要真实的 LEETCODE_SESSION：cargo test -- --ignored
    #[tokio::test]
    #[ignore]
    async fn test_live_problem_tags() {
        let config = Config::from_env().expect("配置加载失败");
        let client = LeetCodeClient::new(&config).expect("客户端创建失败");
        let tags = client.problem_tags("two-sum").await.expect("查询失败");
        assert!(tags.iter().any(|t| t.name == "Array"));
    }
}
