use crate::SurveyStatus;

use std::str::FromStr;

#[test]
fn test_survey_status_as_str() {
    assert_eq!(SurveyStatus::Draft.as_str(), "draft");
    assert_eq!(SurveyStatus::Published.as_str(), "published");
    assert_eq!(SurveyStatus::Archived.as_str(), "archived");
}

#[test]
fn test_survey_status_from_str() {
    assert_eq!(
        SurveyStatus::from_str("draft").unwrap(),
        SurveyStatus::Draft
    );
    assert_eq!(
        SurveyStatus::from_str("published").unwrap(),
        SurveyStatus::Published
    );
    assert_eq!(
        SurveyStatus::from_str("archived").unwrap(),
        SurveyStatus::Archived
    );
    assert!(SurveyStatus::from_str("closed").is_err());
    assert!(SurveyStatus::from_str("Draft").is_err());
}

#[test]
fn test_survey_status_default_is_draft() {
    assert_eq!(SurveyStatus::default(), SurveyStatus::Draft);
}

#[test]
fn test_only_published_accepts_responses() {
    assert!(!SurveyStatus::Draft.accepts_responses());
    assert!(SurveyStatus::Published.accepts_responses());
    assert!(!SurveyStatus::Archived.accepts_responses());
}

#[test]
fn test_archived_is_read_only() {
    assert!(SurveyStatus::Draft.allows_content_changes());
    assert!(SurveyStatus::Published.allows_content_changes());
    assert!(!SurveyStatus::Archived.allows_content_changes());
    assert!(!SurveyStatus::Archived.accepts_invitations());
}
