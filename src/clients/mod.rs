pub mod judge_client;
pub mod leetcode_client;

pub use judge_client::JudgeClient;
pub use leetcode_client::LeetCodeClient;
