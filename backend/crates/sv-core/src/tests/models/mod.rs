mod question;
mod response_aggregate;
mod survey;
mod survey_status;
mod vocabularies;
