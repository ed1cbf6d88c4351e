mod error;
mod input_validator;
mod requests;
mod survey_workflow;


pub use error::{Result, WorkflowError};
pub use input_validator::InputValidator;
pub use requests::add_question_request::AddQuestionRequest;
pub use requests::create_survey_request::CreateSurveyRequest;
pub use requests::record_invitations_request::RecordInvitationsRequest;
pub use requests::reorder_questions_request::ReorderQuestionsRequest;
pub use requests::update_question_request::UpdateQuestionRequest;
pub use requests::update_survey_request::UpdateSurveyRequest;
pub use survey_workflow::SurveyWorkflow;
