pub mod dashboard;
pub mod dashboard_dto;
pub mod dashboard_response;
