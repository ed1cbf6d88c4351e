mod common;

use common::{create_test_pool, create_test_question, create_test_survey, create_test_survey_at};

use sv_core::{ResponseAggregate, SurveyStatus};
use sv_db::{QuestionRepository, SurveyRepository};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_survey_when_created_then_can_be_found_by_id() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let survey = create_test_survey(Uuid::new_v4());

    // When: Creating the survey
    SurveyRepository::create(&pool, &survey).await.unwrap();

    // Then: Finding by ID returns an identical survey
    let found = SurveyRepository::find_by_id(&pool, survey.id).await.unwrap();

    assert_eq!(found, Some(survey));
}

#[tokio::test]
async fn given_empty_database_when_finding_nonexistent_id_then_returns_none() {
    // Given: An empty database
    let pool = create_test_pool().await;

    // When: Finding a survey that doesn't exist
    let found = SurveyRepository::find_by_id(&pool, Uuid::new_v4())
        .await
        .unwrap();

    // Then: Returns None
    assert_that!(found, none());
}

#[tokio::test]
async fn given_surveys_when_listing_summaries_then_newest_first() {
    // Given: Three surveys created at different times
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    for (title, offset) in [("Oldest", 0), ("Newest", 20), ("Middle", 10)] {
        let survey = create_test_survey_at(user_id, title, offset);
        SurveyRepository::create(&pool, &survey).await.unwrap();
    }

    // When: Listing without a filter
    let summaries = SurveyRepository::find_summaries(&pool, None).await.unwrap();

    // Then: Creation time descending
    let titles: Vec<&str> = summaries.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
}

#[tokio::test]
async fn given_mixed_statuses_when_filtering_by_status_then_only_matching_returned() {
    // Given: One draft and one published survey
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    let draft = create_test_survey(user_id);
    let mut published = create_test_survey(user_id);
    published.status = SurveyStatus::Published;
    SurveyRepository::create(&pool, &draft).await.unwrap();
    SurveyRepository::create(&pool, &published).await.unwrap();

    // When: Filtering by published
    let summaries = SurveyRepository::find_summaries(&pool, Some(SurveyStatus::Published))
        .await
        .unwrap();

    // Then: Only the published survey is listed
    assert_that!(summaries, len(eq(1)));
    assert_that!(summaries[0].id, eq(published.id));
}

#[tokio::test]
async fn given_existing_survey_when_updated_then_changes_are_persisted() {
    // Given: A stored survey
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    let mut survey = create_test_survey(user_id);
    SurveyRepository::create(&pool, &survey).await.unwrap();

    // When: Changing title, status and counts
    let editor = Uuid::new_v4();
    survey.title = "Q4 Engagement".to_string();
    survey.description = None;
    survey.status = SurveyStatus::Published;
    survey.aggregate = ResponseAggregate::new(45, 120).unwrap();
    survey.touch(editor, sv_core::timestamp::now());
    let affected = SurveyRepository::update(&pool, &survey).await.unwrap();

    // Then: One row written and the stored survey matches
    assert_that!(affected, eq(1));
    let found = SurveyRepository::find_by_id(&pool, survey.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(found.title, eq("Q4 Engagement"));
    assert_that!(found.description, none());
    assert_that!(found.version, eq(2));
    assert_that!(found.updated_by, eq(editor));
    assert_that!(found.completion_rate(), eq(37.5));
}

#[tokio::test]
async fn given_missing_survey_when_updated_then_no_rows_affected() {
    // Given: A survey that was never stored
    let pool = create_test_pool().await;
    let survey = create_test_survey(Uuid::new_v4());

    // When: Updating it
    let affected = SurveyRepository::update(&pool, &survey).await.unwrap();

    // Then: Nothing is written
    assert_that!(affected, eq(0));
}

#[tokio::test]
async fn given_survey_with_questions_when_deleted_then_questions_are_cascaded() {
    // Given: A survey with two questions
    let pool = create_test_pool().await;
    let survey = create_test_survey(Uuid::new_v4());
    SurveyRepository::create(&pool, &survey).await.unwrap();
    for position in 0..2 {
        let question = create_test_question(survey.id, position);
        QuestionRepository::create(&pool, &question).await.unwrap();
    }

    // When: Deleting the survey
    let affected = SurveyRepository::delete(&pool, survey.id).await.unwrap();

    // Then: Survey and questions are gone
    assert_that!(affected, eq(1));
    let found = SurveyRepository::find_by_id(&pool, survey.id).await.unwrap();
    assert_that!(found, none());
    let questions = QuestionRepository::find_by_survey(&pool, survey.id)
        .await
        .unwrap();
    assert_that!(questions, is_empty());
}

#[tokio::test]
async fn given_responses_exceeding_invitations_when_stored_then_rejected_by_constraint() {
    // Given: A survey row forced into an impossible aggregate
    let pool = create_test_pool().await;
    let survey = create_test_survey(Uuid::new_v4());
    SurveyRepository::create(&pool, &survey).await.unwrap();

    // When: Writing responses > total_invited directly
    let result = sqlx::query("UPDATE surveys SET responses = 5, total_invited = 2 WHERE id = ?")
        .bind(survey.id.to_string())
        .execute(&pool)
        .await;

    // Then: The CHECK constraint rejects it
    assert_that!(result, err(anything()));
}

#[tokio::test]
async fn given_empty_database_when_getting_stats_then_all_zero() {
    // Given: An empty database
    let pool = create_test_pool().await;

    // When: Computing stats
    let stats = SurveyRepository::stats(&pool).await.unwrap();

    // Then: Everything is zero and the rate is defined
    assert_that!(stats.total, eq(0));
    assert_that!(stats.responses, eq(0));
    assert_that!(stats.completion_rate(), eq(0.0));
}

#[tokio::test]
async fn given_surveys_in_each_status_when_getting_stats_then_counts_are_grouped() {
    // Given: Two drafts, one published with responses, one archived
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();

    for _ in 0..2 {
        SurveyRepository::create(&pool, &create_test_survey(user_id))
            .await
            .unwrap();
    }
    let mut published = create_test_survey(user_id);
    published.status = SurveyStatus::Published;
    published.aggregate = ResponseAggregate::new(45, 120).unwrap();
    SurveyRepository::create(&pool, &published).await.unwrap();

    let mut archived = create_test_survey(user_id);
    archived.status = SurveyStatus::Archived;
    archived.aggregate = ResponseAggregate::new(5, 10).unwrap();
    SurveyRepository::create(&pool, &archived).await.unwrap();

    // When: Computing stats
    let stats = SurveyRepository::stats(&pool).await.unwrap();

    // Then: Counts and sums match
    assert_that!(stats.total, eq(4));
    assert_that!(stats.draft, eq(2));
    assert_that!(stats.published, eq(1));
    assert_that!(stats.archived, eq(1));
    assert_that!(stats.responses, eq(50));
    assert_that!(stats.total_invited, eq(130));
}
