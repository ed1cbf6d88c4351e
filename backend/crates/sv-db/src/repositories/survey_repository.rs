//! Survey repository.
//!
//! Stores the survey row only; questions live in `QuestionRepository` and
//! are loaded separately. Every method takes an executor so callers can run
//! it against the pool or inside a transaction.

use crate::repositories::row::{enum_column, timestamp_column, uuid_column};
use crate::{DbError, Result as DbErrorResult};

use sv_core::{ErrorLocation, ResponseAggregate, Survey, SurveyStats, SurveyStatus, SurveySummary};

use std::panic::Location;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const SURVEY_COLUMNS: &str = r#"
    id, title, description, status, category, frequency,
    responses, total_invited, version,
    created_at, updated_at, created_by, updated_by
"#;

pub struct SurveyRepository;

impl SurveyRepository {
    pub async fn create<'e, E>(executor: E, survey: &Survey) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO surveys (
                    id, title, description, status, category, frequency,
                    responses, total_invited, version,
                    created_at, updated_at, created_by, updated_by
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(survey.id.to_string())
        .bind(survey.title.as_str())
        .bind(survey.description.as_deref())
        .bind(survey.status.as_str())
        .bind(survey.category.as_str())
        .bind(survey.frequency.as_str())
        .bind(survey.aggregate.responses())
        .bind(survey.aggregate.total_invited())
        .bind(survey.version)
        .bind(survey.created_at.timestamp_millis())
        .bind(survey.updated_at.timestamp_millis())
        .bind(survey.created_by.to_string())
        .bind(survey.updated_by.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Load a survey without its questions
    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Survey>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {} FROM surveys WHERE id = ?", SURVEY_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.map(|r| map_survey(&r)).transpose()
    }

    /// List summaries newest first, optionally restricted to one status
    pub async fn find_summaries<'e, E>(
        executor: E,
        status: Option<SurveyStatus>,
    ) -> DbErrorResult<Vec<SurveySummary>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, title, description, status, created_at, responses
                FROM surveys
                WHERE ?1 IS NULL OR status = ?1
                ORDER BY created_at DESC, id
            "#,
        )
        .bind(status.map(|s| s.as_str()))
        .fetch_all(executor)
        .await?;

        rows.iter()
            .map(|r| -> DbErrorResult<SurveySummary> {
                Ok(SurveySummary {
                    id: uuid_column(r, "id")?,
                    title: r.try_get("title")?,
                    description: r.try_get("description")?,
                    status: enum_column(r, "status")?,
                    created_at: timestamp_column(r, "created_at")?,
                    responses: r.try_get("responses")?,
                })
            })
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Overwrite every mutable column. Last writer wins.
    ///
    /// Returns the number of rows written (0 when the survey is gone).
    pub async fn update<'e, E>(executor: E, survey: &Survey) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE surveys
                SET title = ?, description = ?, status = ?, category = ?, frequency = ?,
                    responses = ?, total_invited = ?, version = ?,
                    updated_at = ?, updated_by = ?
                WHERE id = ?
            "#,
        )
        .bind(survey.title.as_str())
        .bind(survey.description.as_deref())
        .bind(survey.status.as_str())
        .bind(survey.category.as_str())
        .bind(survey.frequency.as_str())
        .bind(survey.aggregate.responses())
        .bind(survey.aggregate.total_invited())
        .bind(survey.version)
        .bind(survey.updated_at.timestamp_millis())
        .bind(survey.updated_by.to_string())
        .bind(survey.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// Hard delete. Questions are removed by the foreign key cascade.
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM surveys WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Counts per status plus summed response counts
    pub async fn stats<'e, E>(executor: E) -> DbErrorResult<SurveyStats>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT
                    COUNT(*) AS total,
                    COALESCE(SUM(CASE WHEN status = 'draft' THEN 1 ELSE 0 END), 0) AS draft,
                    COALESCE(SUM(CASE WHEN status = 'published' THEN 1 ELSE 0 END), 0) AS published,
                    COALESCE(SUM(CASE WHEN status = 'archived' THEN 1 ELSE 0 END), 0) AS archived,
                    COALESCE(SUM(responses), 0) AS responses,
                    COALESCE(SUM(total_invited), 0) AS total_invited
                FROM surveys
            "#,
        )
        .fetch_one(executor)
        .await?;

        Ok(SurveyStats {
            total: row.try_get("total")?,
            draft: row.try_get("draft")?,
            published: row.try_get("published")?,
            archived: row.try_get("archived")?,
            responses: row.try_get("responses")?,
            total_invited: row.try_get("total_invited")?,
        })
    }
}

fn map_survey(r: &SqliteRow) -> DbErrorResult<Survey> {
    let responses: i64 = r.try_get("responses")?;
    let total_invited: i64 = r.try_get("total_invited")?;
    let aggregate =
        ResponseAggregate::new(responses, total_invited).map_err(|e| DbError::Corrupt {
            message: format!("Invalid response counts in survey row: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Survey {
        id: uuid_column(r, "id")?,
        title: r.try_get("title")?,
        description: r.try_get("description")?,
        status: enum_column(r, "status")?,
        category: enum_column(r, "category")?,
        frequency: enum_column(r, "frequency")?,
        aggregate,
        questions: Vec::new(),
        version: r.try_get("version")?,
        created_at: timestamp_column(r, "created_at")?,
        updated_at: timestamp_column(r, "updated_at")?,
        created_by: uuid_column(r, "created_by")?,
        updated_by: uuid_column(r, "updated_by")?,
    })
}
