pub mod question_dto;
pub mod question_list_response;
pub mod question_response;
pub mod questions;
