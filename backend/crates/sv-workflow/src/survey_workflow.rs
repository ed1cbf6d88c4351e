//! Survey workflow operations for a single tenant.
//!
//! Every mutation validates its input first, then loads the survey inside an
//! immediate transaction, checks the lifecycle status, writes, and bumps the survey's
//! `version`/`updated_at`/`updated_by` before committing. Reads never open a
//! transaction.

use crate::{
    AddQuestionRequest, CreateSurveyRequest, InputValidator, ReorderQuestionsRequest,
    Result as WorkflowResult, UpdateQuestionRequest, UpdateSurveyRequest, WorkflowError,
};

use sv_config::ValidationConfig;
use sv_core::{
    ErrorLocation, Question, Survey, SurveyStats, SurveyStatus, SurveySummary, copy_title,
    timestamp,
};
use sv_db::{QuestionRepository, SurveyRepository};

use std::collections::HashSet;
use std::panic::Location;

use log::{debug, info};
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use uuid::Uuid;

pub struct SurveyWorkflow {
    pool: SqlitePool,
    validation: ValidationConfig,
}

impl SurveyWorkflow {
    pub fn new(pool: SqlitePool, validation: ValidationConfig) -> Self {
        Self { pool, validation }
    }

    /// Mutations take the tenant's write lock up front. A deferred
    /// transaction that reads and then writes fails with SQLITE_BUSY under
    /// WAL when another writer commits first, instead of waiting.
    async fn begin_write(&self) -> WorkflowResult<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin_with("BEGIN IMMEDIATE").await?)
    }

    // =========================================================================
    // Surveys
    // =========================================================================

    /// Summaries of every survey, newest first
    pub async fn list_surveys(&self, status: Option<&str>) -> WorkflowResult<Vec<SurveySummary>> {
        let status = status.map(InputValidator::status).transpose()?;
        Ok(SurveyRepository::find_summaries(&self.pool, status).await?)
    }

    /// Full survey with its ordered questions
    pub async fn get_survey(&self, id: Uuid) -> WorkflowResult<Survey> {
        let mut conn = self.pool.acquire().await?;
        load_survey(&mut conn, id).await
    }

    pub async fn create_survey(
        &self,
        req: CreateSurveyRequest,
        user_id: Uuid,
    ) -> WorkflowResult<Survey> {
        let title = InputValidator::title(&req.title, &self.validation)?;
        let description =
            InputValidator::description(req.description.as_deref(), &self.validation)?;
        let category = InputValidator::category(req.category.as_deref())?;
        let frequency = InputValidator::frequency(req.frequency.as_deref())?;

        let survey = Survey::new(title, description, category, frequency, user_id);
        SurveyRepository::create(&self.pool, &survey).await?;

        info!("Created survey {} '{}'", survey.id, survey.title);
        Ok(survey)
    }

    /// Apply a partial update. A request that changes nothing returns the
    /// survey as stored, without bumping its version.
    pub async fn update_survey(
        &self,
        id: Uuid,
        req: UpdateSurveyRequest,
        user_id: Uuid,
    ) -> WorkflowResult<Survey> {
        let title = req
            .title
            .as_deref()
            .map(|t| InputValidator::title(t, &self.validation))
            .transpose()?;
        let description = match req.description.as_deref() {
            Some(d) => Some(InputValidator::description(Some(d), &self.validation)?),
            None => None,
        };
        let category = req
            .category
            .as_deref()
            .map(|c| InputValidator::category(Some(c)))
            .transpose()?;
        let frequency = req
            .frequency
            .as_deref()
            .map(|f| InputValidator::frequency(Some(f)))
            .transpose()?;

        let mut tx = self.begin_write().await?;
        let mut survey = load_survey(&mut tx, id).await?;

        check_version(&survey, req.expected_version)?;
        ensure_editable(&survey)?;

        let before = survey.clone();
        if let Some(title) = title {
            survey.title = title;
        }
        if let Some(description) = description {
            survey.description = description;
        }
        if let Some(category) = category {
            survey.category = category;
        }
        if let Some(frequency) = frequency {
            survey.frequency = frequency;
        }

        if survey == before {
            debug!("Update of survey {} changed nothing", id);
            return Ok(survey);
        }

        survey.touch(user_id, timestamp::now());
        SurveyRepository::update(&mut *tx, &survey).await?;
        tx.commit().await?;

        info!("Updated survey {} (version {})", survey.id, survey.version);
        Ok(survey)
    }

    /// Archive a survey. Archiving an archived survey succeeds without changes.
    pub async fn archive_survey(&self, id: Uuid, user_id: Uuid) -> WorkflowResult<Survey> {
        let mut tx = self.begin_write().await?;
        let mut survey = load_survey(&mut tx, id).await?;

        if survey.is_archived() {
            debug!("Survey {} already archived", id);
            return Ok(survey);
        }

        survey.status = SurveyStatus::Archived;
        survey.touch(user_id, timestamp::now());
        SurveyRepository::update(&mut *tx, &survey).await?;
        tx.commit().await?;

        info!("Archived survey {}", survey.id);
        Ok(survey)
    }

    /// Move a draft to published. Idempotent on published surveys.
    pub async fn publish_survey(&self, id: Uuid, user_id: Uuid) -> WorkflowResult<Survey> {
        let mut tx = self.begin_write().await?;
        let mut survey = load_survey(&mut tx, id).await?;

        match survey.status {
            SurveyStatus::Published => {
                debug!("Survey {} already published", id);
                return Ok(survey);
            }
            SurveyStatus::Archived => {
                return Err(WorkflowError::invalid_state(format!(
                    "Survey {} is archived and cannot be published",
                    id
                )));
            }
            SurveyStatus::Draft => {}
        }

        survey.status = SurveyStatus::Published;
        survey.touch(user_id, timestamp::now());
        SurveyRepository::update(&mut *tx, &survey).await?;
        tx.commit().await?;

        info!("Published survey {}", survey.id);
        Ok(survey)
    }

    /// Hard delete of the survey and all of its questions
    pub async fn delete_survey(&self, id: Uuid) -> WorkflowResult<()> {
        let mut tx = self.begin_write().await?;

        let questions = QuestionRepository::delete_by_survey(&mut *tx, id).await?;
        let deleted = SurveyRepository::delete(&mut *tx, id).await?;
        if deleted == 0 {
            return Err(survey_not_found(id));
        }

        tx.commit().await?;

        info!("Deleted survey {} with {} questions", id, questions);
        Ok(())
    }

    /// Copy a survey into a new draft owned by `user_id`
    pub async fn duplicate_survey(&self, id: Uuid, user_id: Uuid) -> WorkflowResult<Survey> {
        let mut tx = self.begin_write().await?;
        let source = load_survey(&mut tx, id).await?;

        let title = copy_title(&source.title, self.validation.max_title_length);
        let copy = source.duplicate(title, user_id);

        SurveyRepository::create(&mut *tx, &copy).await?;
        for question in &copy.questions {
            QuestionRepository::create(&mut *tx, question).await?;
        }
        tx.commit().await?;

        info!("Duplicated survey {} as {}", source.id, copy.id);
        Ok(copy)
    }

    // =========================================================================
    // Questions
    // =========================================================================

    pub async fn list_questions(&self, survey_id: Uuid) -> WorkflowResult<Vec<Question>> {
        let mut conn = self.pool.acquire().await?;
        Ok(load_survey(&mut conn, survey_id).await?.questions)
    }

    /// Append a question, or insert it at `position` shifting later ones down
    pub async fn add_question(
        &self,
        survey_id: Uuid,
        req: AddQuestionRequest,
        user_id: Uuid,
    ) -> WorkflowResult<Question> {
        let question_type = InputValidator::question_type(&req.question_type)?;
        let text = InputValidator::question_text(&req.text, &self.validation)?;

        let mut tx = self.begin_write().await?;
        let mut survey = load_survey(&mut tx, survey_id).await?;
        ensure_editable(&survey)?;

        if survey.questions.len() >= self.validation.max_questions_per_survey {
            return Err(WorkflowError::validation(
                format!(
                    "A survey cannot have more than {} questions",
                    self.validation.max_questions_per_survey
                ),
                "questions",
            ));
        }

        let count = survey.questions.len() as i32;
        let position = match req.position {
            None => count,
            Some(p) if (0..=count).contains(&p) => p,
            Some(p) => {
                return Err(WorkflowError::validation(
                    format!("position must be between 0 and {}, got {}", count, p),
                    "position",
                ));
            }
        };

        let now = timestamp::now();
        for existing in survey
            .questions
            .iter_mut()
            .filter(|q| q.position >= position)
        {
            existing.position += 1;
            existing.updated_at = now;
            QuestionRepository::update(&mut *tx, existing).await?;
        }

        let question = Question::new(
            survey_id,
            question_type,
            text,
            req.required.unwrap_or(true),
            position,
        );
        QuestionRepository::create(&mut *tx, &question).await?;

        survey.touch(user_id, now);
        SurveyRepository::update(&mut *tx, &survey).await?;
        tx.commit().await?;

        info!(
            "Added question {} to survey {} at {}",
            question.id,
            survey_id,
            question.label()
        );
        Ok(question)
    }

    pub async fn update_question(
        &self,
        survey_id: Uuid,
        question_id: Uuid,
        req: UpdateQuestionRequest,
        user_id: Uuid,
    ) -> WorkflowResult<Question> {
        let question_type = req
            .question_type
            .as_deref()
            .map(InputValidator::question_type)
            .transpose()?;
        let text = req
            .text
            .as_deref()
            .map(|t| InputValidator::question_text(t, &self.validation))
            .transpose()?;

        let mut tx = self.begin_write().await?;
        let mut survey = load_survey(&mut tx, survey_id).await?;
        ensure_editable(&survey)?;

        let mut question = find_question(&survey, question_id)?.clone();
        let before = question.clone();
        if let Some(question_type) = question_type {
            question.question_type = question_type;
        }
        if let Some(text) = text {
            question.text = text;
        }
        if let Some(required) = req.required {
            question.required = required;
        }

        if question.same_content(&before) {
            debug!("Update of question {} changed nothing", question_id);
            return Ok(question);
        }

        let now = timestamp::now();
        question.updated_at = now;
        QuestionRepository::update(&mut *tx, &question).await?;

        survey.touch(user_id, now);
        SurveyRepository::update(&mut *tx, &survey).await?;
        tx.commit().await?;

        info!("Updated question {} of survey {}", question_id, survey_id);
        Ok(question)
    }

    /// Remove a question and close the gap it leaves in the ordering
    pub async fn remove_question(
        &self,
        survey_id: Uuid,
        question_id: Uuid,
        user_id: Uuid,
    ) -> WorkflowResult<()> {
        let mut tx = self.begin_write().await?;
        let mut survey = load_survey(&mut tx, survey_id).await?;
        ensure_editable(&survey)?;

        let index = survey
            .questions
            .iter()
            .position(|q| q.id == question_id)
            .ok_or_else(|| question_not_found(survey_id, question_id))?;

        QuestionRepository::delete(&mut *tx, survey_id, question_id).await?;
        survey.questions.remove(index);

        let now = timestamp::now();
        for (position, question) in (0..).zip(survey.questions.iter_mut()) {
            if question.position != position {
                question.position = position;
                question.updated_at = now;
                QuestionRepository::update(&mut *tx, question).await?;
            }
        }

        survey.touch(user_id, now);
        SurveyRepository::update(&mut *tx, &survey).await?;
        tx.commit().await?;

        info!("Removed question {} from survey {}", question_id, survey_id);
        Ok(())
    }

    /// Reorder questions. `question_ids` must name every question of the
    /// survey exactly once.
    pub async fn reorder_questions(
        &self,
        survey_id: Uuid,
        req: ReorderQuestionsRequest,
        user_id: Uuid,
    ) -> WorkflowResult<Vec<Question>> {
        let order = req
            .question_ids
            .iter()
            .map(|id| InputValidator::uuid(id, "question_ids"))
            .collect::<WorkflowResult<Vec<_>>>()?;

        let mut tx = self.begin_write().await?;
        let mut survey = load_survey(&mut tx, survey_id).await?;
        ensure_editable(&survey)?;

        let existing: HashSet<Uuid> = survey.questions.iter().map(|q| q.id).collect();
        let requested: HashSet<Uuid> = order.iter().copied().collect();
        if order.len() != survey.questions.len()
            || requested.len() != order.len()
            || requested != existing
        {
            return Err(WorkflowError::validation(
                "question_ids must list every question of the survey exactly once",
                "question_ids",
            ));
        }

        let now = timestamp::now();
        let mut changed = false;
        for question in survey.questions.iter_mut() {
            let Some(index) = order.iter().position(|id| *id == question.id) else {
                continue;
            };
            let position = index as i32;
            if question.position != position {
                question.position = position;
                question.updated_at = now;
                QuestionRepository::update(&mut *tx, question).await?;
                changed = true;
            }
        }
        survey.questions.sort_by_key(|q| q.position);

        if !changed {
            debug!("Reorder of survey {} kept the same order", survey_id);
            return Ok(survey.questions);
        }

        survey.touch(user_id, now);
        SurveyRepository::update(&mut *tx, &survey).await?;
        tx.commit().await?;

        info!("Reordered {} questions of survey {}", order.len(), survey_id);
        Ok(survey.questions)
    }

    // =========================================================================
    // Participation
    // =========================================================================

    /// Add `count` invited participants
    pub async fn record_invitations(
        &self,
        id: Uuid,
        count: i64,
        user_id: Uuid,
    ) -> WorkflowResult<Survey> {
        let count = InputValidator::invitation_count(count, &self.validation)?;

        let mut tx = self.begin_write().await?;
        let mut survey = load_survey(&mut tx, id).await?;

        if !survey.status.accepts_invitations() {
            return Err(WorkflowError::invalid_state(format!(
                "Survey {} is {} and accepts no invitations",
                id, survey.status
            )));
        }

        survey.aggregate = survey.aggregate.with_invitations(count)?;
        survey.touch(user_id, timestamp::now());
        SurveyRepository::update(&mut *tx, &survey).await?;
        tx.commit().await?;

        info!(
            "Recorded {} invitations for survey {} ({} total)",
            count,
            id,
            survey.aggregate.total_invited()
        );
        Ok(survey)
    }

    /// Count one completed response
    pub async fn record_response(&self, id: Uuid, user_id: Uuid) -> WorkflowResult<Survey> {
        let mut tx = self.begin_write().await?;
        let mut survey = load_survey(&mut tx, id).await?;

        if !survey.status.accepts_responses() {
            return Err(WorkflowError::invalid_state(format!(
                "Survey {} is {}; only published surveys accept responses",
                id, survey.status
            )));
        }

        survey.aggregate = survey.aggregate.with_response()?;
        survey.touch(user_id, timestamp::now());
        SurveyRepository::update(&mut *tx, &survey).await?;
        tx.commit().await?;

        info!(
            "Recorded response for survey {} ({}/{})",
            id,
            survey.aggregate.responses(),
            survey.aggregate.total_invited()
        );
        Ok(survey)
    }

    /// Tenant-wide counts for the dashboard
    pub async fn dashboard(&self) -> WorkflowResult<SurveyStats> {
        Ok(SurveyRepository::stats(&self.pool).await?)
    }
}

async fn load_survey(conn: &mut SqliteConnection, id: Uuid) -> WorkflowResult<Survey> {
    let mut survey = SurveyRepository::find_by_id(&mut *conn, id)
        .await?
        .ok_or_else(|| survey_not_found(id))?;
    survey.questions = QuestionRepository::find_by_survey(&mut *conn, id).await?;
    Ok(survey)
}

fn find_question(survey: &Survey, question_id: Uuid) -> WorkflowResult<&Question> {
    survey
        .questions
        .iter()
        .find(|q| q.id == question_id)
        .ok_or_else(|| question_not_found(survey.id, question_id))
}

#[track_caller]
fn check_version(survey: &Survey, expected_version: Option<i32>) -> WorkflowResult<()> {
    match expected_version {
        Some(expected) if expected != survey.version => Err(WorkflowError::Conflict {
            current_version: survey.version,
            location: ErrorLocation::from(Location::caller()),
        }),
        _ => Ok(()),
    }
}

#[track_caller]
fn ensure_editable(survey: &Survey) -> WorkflowResult<()> {
    if survey.status.allows_content_changes() {
        return Ok(());
    }

    Err(WorkflowError::invalid_state(format!(
        "Survey {} is {} and cannot be edited",
        survey.id, survey.status
    )))
}

fn survey_not_found(id: Uuid) -> WorkflowError {
    WorkflowError::not_found(format!("Survey {} not found", id))
}

fn question_not_found(survey_id: Uuid, question_id: Uuid) -> WorkflowError {
    WorkflowError::not_found(format!(
        "Question {} not found in survey {}",
        question_id, survey_id
    ))
}
