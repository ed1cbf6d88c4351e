pub mod list_surveys_query;
pub mod survey_dto;
pub mod survey_list_response;
pub mod survey_response;
pub mod survey_summary_dto;
pub mod surveys;
