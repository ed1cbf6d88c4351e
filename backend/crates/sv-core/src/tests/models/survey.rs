use crate::models::survey::COPY_SUFFIX;
use crate::{
    Question, QuestionType, ResponseAggregate, Survey, SurveyCategory,
    SurveyFrequency, SurveyStatus, copy_title,
};

use chrono::Duration;
use uuid::Uuid;

fn q3_engagement(user_id: Uuid) -> Survey {
    Survey::new(
        "Q3 Engagement".to_string(),
        None,
        SurveyCategory::Engagement,
        SurveyFrequency::Quarterly,
        user_id,
    )
}

#[test]
fn test_survey_new_is_empty_draft() {
    let user_id = Uuid::new_v4();
    let survey = q3_engagement(user_id);

    assert_eq!(survey.title, "Q3 Engagement");
    assert_eq!(survey.status, SurveyStatus::Draft);
    assert_eq!(survey.category, SurveyCategory::Engagement);
    assert_eq!(survey.frequency, SurveyFrequency::Quarterly);
    assert!(survey.questions.is_empty());
    assert_eq!(survey.aggregate.responses(), 0);
    assert_eq!(survey.version, 1);
    assert_eq!(survey.created_by, user_id);
    assert_eq!(survey.updated_at, survey.created_at);
}

#[test]
fn test_touch_bumps_version_and_audit_fields() {
    let creator = Uuid::new_v4();
    let editor = Uuid::new_v4();
    let mut survey = q3_engagement(creator);
    let later = survey.created_at + Duration::seconds(30);

    survey.touch(editor, later);

    assert_eq!(survey.version, 2);
    assert_eq!(survey.updated_at, later);
    assert_eq!(survey.updated_by, editor);
    assert_eq!(survey.created_by, creator);
}

#[test]
fn test_touch_never_moves_updated_at_before_created_at() {
    let user_id = Uuid::new_v4();
    let mut survey = q3_engagement(user_id);
    let skewed = survey.created_at - Duration::seconds(30);

    survey.touch(user_id, skewed);

    assert!(survey.updated_at >= survey.created_at);
}

#[test]
fn test_duplicate_resets_status_and_aggregate() {
    let user_id = Uuid::new_v4();
    let mut survey = q3_engagement(user_id);
    survey.status = SurveyStatus::Published;
    survey.aggregate = ResponseAggregate::new(45, 120).unwrap();
    survey.questions = vec![
        Question::new(survey.id, QuestionType::Likert, "One".into(), true, 0),
        Question::new(survey.id, QuestionType::Text, "Two".into(), false, 1),
    ];
    let duplicator = Uuid::new_v4();

    let copy = survey.duplicate(copy_title(&survey.title, 200), duplicator);

    assert_ne!(copy.id, survey.id);
    assert_eq!(copy.title, "Q3 Engagement (Copy)");
    assert_eq!(copy.status, SurveyStatus::Draft);
    assert_eq!(copy.aggregate.responses(), 0);
    assert_eq!(copy.aggregate.total_invited(), 0);
    assert_eq!(copy.created_by, duplicator);
    assert_eq!(copy.questions.len(), 2);
    for (copied, original) in copy.questions.iter().zip(&survey.questions) {
        assert_ne!(copied.id, original.id);
        assert_eq!(copied.survey_id, copy.id);
        assert!(copied.same_content(original));
    }
}

#[test]
fn test_copy_title_truncates_to_fit() {
    let title = "x".repeat(20);

    let copied = copy_title(&title, 20);

    assert_eq!(copied.chars().count(), 20);
    assert!(copied.ends_with(COPY_SUFFIX));
}

#[test]
fn test_copy_title_with_tiny_limit_drops_suffix() {
    assert_eq!(copy_title("Pulse", 3), "Pul");
}
