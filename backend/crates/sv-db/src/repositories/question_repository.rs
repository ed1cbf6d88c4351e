//! Question repository. Questions are always read in `position` order.

use crate::Result as DbErrorResult;
use crate::repositories::row::{enum_column, timestamp_column, uuid_column};

use sv_core::Question;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct QuestionRepository;

impl QuestionRepository {
    pub async fn create<'e, E>(executor: E, question: &Question) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO questions (
                    id, survey_id, question_type, text, required, position,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(question.id.to_string())
        .bind(question.survey_id.to_string())
        .bind(question.question_type.as_str())
        .bind(question.text.as_str())
        .bind(question.required)
        .bind(question.position)
        .bind(question.created_at.timestamp_millis())
        .bind(question.updated_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_survey<'e, E>(executor: E, survey_id: Uuid) -> DbErrorResult<Vec<Question>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, survey_id, question_type, text, required, position,
                    created_at, updated_at
                FROM questions
                WHERE survey_id = ?
                ORDER BY position, created_at
            "#,
        )
        .bind(survey_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter()
            .map(map_question)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Writes type, text, required flag, position and `updated_at`
    pub async fn update<'e, E>(executor: E, question: &Question) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE questions
                SET question_type = ?, text = ?, required = ?, position = ?, updated_at = ?
                WHERE id = ? AND survey_id = ?
            "#,
        )
        .bind(question.question_type.as_str())
        .bind(question.text.as_str())
        .bind(question.required)
        .bind(question.position)
        .bind(question.updated_at.timestamp_millis())
        .bind(question.id.to_string())
        .bind(question.survey_id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete<'e, E>(executor: E, survey_id: Uuid, question_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM questions WHERE id = ? AND survey_id = ?")
            .bind(question_id.to_string())
            .bind(survey_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_by_survey<'e, E>(executor: E, survey_id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM questions WHERE survey_id = ?")
            .bind(survey_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}

fn map_question(r: &SqliteRow) -> DbErrorResult<Question> {
    Ok(Question {
        id: uuid_column(r, "id")?,
        survey_id: uuid_column(r, "survey_id")?,
        question_type: enum_column(r, "question_type")?,
        text: r.try_get("text")?,
        required: r.try_get("required")?,
        position: r.try_get("position")?,
        created_at: timestamp_column(r, "created_at")?,
        updated_at: timestamp_column(r, "updated_at")?,
    })
}
