pub mod error;
pub mod models;
pub mod timestamp;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use error_location::ErrorLocation;
pub use models::question::Question;
pub use models::question_type::QuestionType;
pub use models::response_aggregate::{ResponseAggregate, completion_rate};
pub use models::survey::{Survey, copy_title};
pub use models::survey_category::SurveyCategory;
pub use models::survey_frequency::SurveyFrequency;
pub use models::survey_stats::SurveyStats;
pub use models::survey_status::SurveyStatus;
pub use models::survey_summary::SurveySummary;
