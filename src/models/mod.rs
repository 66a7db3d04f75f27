pub mod categorization;
pub mod latest;
pub mod submission;

pub use categorization::{problem_link, CategorizedEntry, Categorization};
pub use latest::LatestSubmissions;
pub use submission::{Problem, Submission, SubmissionStatus, Tag};
