pub mod add_question_request;
pub mod create_survey_request;
pub mod record_invitations_request;
pub mod reorder_questions_request;
pub mod update_question_request;
pub mod update_survey_request;
