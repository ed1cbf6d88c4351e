use crate::{Question, QuestionType};

use uuid::Uuid;

#[test]
fn test_question_label_is_one_based() {
    let question = Question::new(
        Uuid::new_v4(),
        QuestionType::Likert,
        "How satisfied are you with your current role?".to_string(),
        true,
        0,
    );

    assert_eq!(question.label(), "Q1");
}

#[test]
fn test_copy_to_keeps_content_with_new_identity() {
    let original = Question::new(
        Uuid::new_v4(),
        QuestionType::Text,
        "What aspects of your job do you find most fulfilling?".to_string(),
        false,
        2,
    );
    let target_survey = Uuid::new_v4();

    let copy = original.copy_to(target_survey);

    assert_ne!(copy.id, original.id);
    assert_eq!(copy.survey_id, target_survey);
    assert!(copy.same_content(&original));
}

#[test]
fn test_same_content_detects_text_change() {
    let survey_id = Uuid::new_v4();
    let a = Question::new(survey_id, QuestionType::Rating, "A".to_string(), true, 0);
    let mut b = a.clone();
    b.text = "B".to_string();

    assert!(!a.same_content(&b));
}
