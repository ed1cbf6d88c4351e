use crate::{QuestionType, SurveyCategory, SurveyFrequency};

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_every_category_when_round_tripped_through_str_then_unchanged() {
    for category in SurveyCategory::ALL {
        let parsed = SurveyCategory::from_str(category.as_str()).unwrap();
        assert_that!(parsed, eq(category));
    }
}

#[test]
fn given_every_frequency_when_round_tripped_through_str_then_unchanged() {
    for frequency in SurveyFrequency::ALL {
        let parsed = SurveyFrequency::from_str(frequency.as_str()).unwrap();
        assert_that!(parsed, eq(frequency));
    }
}

#[test]
fn given_unknown_values_when_parsed_then_errors() {
    assert_that!(SurveyCategory::from_str("marketing"), err(anything()));
    assert_that!(SurveyFrequency::from_str("daily"), err(anything()));
    assert_that!(QuestionType::from_str("essay"), err(anything()));
}

#[test]
fn given_form_defaults_when_defaulted_then_engagement_and_quarterly() {
    assert_that!(SurveyCategory::default(), eq(SurveyCategory::Engagement));
    assert_that!(SurveyFrequency::default(), eq(SurveyFrequency::Quarterly));
}

#[test]
fn given_snake_case_question_types_when_parsed_then_match() {
    assert_that!(
        QuestionType::from_str("multiple_choice").unwrap(),
        eq(QuestionType::MultipleChoice)
    );
    assert_that!(
        QuestionType::from_str("yes_no").unwrap(),
        eq(QuestionType::YesNo)
    );
    assert_that!(QuestionType::Likert.to_string(), eq("likert"));
}
