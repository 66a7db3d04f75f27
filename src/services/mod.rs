pub mod aggregator;
pub mod categorizer;
pub mod report_generator;
pub mod report_writer;
pub mod solution_locator;

pub use aggregator::SubmissionAggregator;
pub use categorizer::TagCategorizer;
pub use report_generator::{ReportGenerator, ReportSummary};
pub use report_writer::ReportWriter;
pub use solution_locator::{PickPolicy, SlugMatch, SolutionLocator};
