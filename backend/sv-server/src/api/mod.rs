pub mod dashboard;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod participation;
pub mod questions;
pub mod surveys;
