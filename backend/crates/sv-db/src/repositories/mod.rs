pub mod question_repository;
pub mod survey_repository;

mod row;
