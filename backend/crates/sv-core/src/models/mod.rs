pub mod question;
pub mod question_type;
pub mod response_aggregate;
pub mod survey;
pub mod survey_category;
pub mod survey_frequency;
pub mod survey_stats;
pub mod survey_status;
pub mod survey_summary;
