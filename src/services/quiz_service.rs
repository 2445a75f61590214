use std::{collections::HashSet, sync::Arc};

use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{axis::total_question_count, AxisDefinition, LikertScale, QuizSession, QuizState},
        dto::response::{AnswerOutcome, AxesOverview, CurrentQuestion, QuizResults},
    },
    repositories::{SessionHandle, SessionRepository},
    services::{
        completion_service::CompletionService,
        question_generator::{is_api_error_placeholder, is_generation_placeholder, QuestionGenerator},
        scoring_service::ScoringService,
        summary_generator::SummaryGenerator,
    },
};

pub struct QuizService {
    axes: Vec<AxisDefinition>,
    scale: LikertScale,
    repository: Arc<dyn SessionRepository>,
    question_generator: QuestionGenerator,
    summary_generator: SummaryGenerator,
    strict_question_count: bool,
}

impl QuizService {
    pub fn new(
        axes: Vec<AxisDefinition>,
        repository: Arc<dyn SessionRepository>,
        completion: Arc<dyn CompletionService>,
    ) -> AppResult<Self> {
        validate_axes(&axes)?;
        let scale = LikertScale::default();

        Ok(Self {
            question_generator: QuestionGenerator::new(Arc::clone(&completion), scale.clone()),
            summary_generator: SummaryGenerator::new(completion, scale.clone()),
            axes,
            scale,
            repository,
            strict_question_count: false,
        })
    }

    /// Treat padded placeholder questions as a fatal generation failure.
    pub fn with_strict_question_count(mut self, strict: bool) -> Self {
        self.strict_question_count = strict;
        self
    }

    pub fn axes(&self) -> &[AxisDefinition] {
        &self.axes
    }

    pub fn total_questions(&self) -> usize {
        total_question_count(&self.axes)
    }

    pub fn axes_overview(&self) -> AxesOverview {
        AxesOverview {
            axes: self.axes.iter().map(Into::into).collect(),
            likert_scale: self.likert_labels(),
            total_questions: self.total_questions(),
        }
    }

    pub async fn start_quiz(&self) -> AppResult<String> {
        self.repository.purge_expired().await?;

        let mut session = QuizSession::new(&Uuid::new_v4().to_string());
        session.start();
        let id = session.id.clone();
        self.repository.create(session).await?;

        log::info!("Quiz started, session {} initialized", id);
        Ok(id)
    }

    pub async fn restart_quiz(&self, session_id: &str) -> AppResult<()> {
        let handle = self.session(session_id).await?;
        handle.lock().await.start();
        log::info!("Quiz restarted for session {}", session_id);
        Ok(())
    }

    pub async fn end_session(&self, session_id: &str) -> AppResult<()> {
        let Some(handle) = self.repository.find_by_id(session_id).await? else {
            return Ok(());
        };
        let age = Utc::now() - handle.lock().await.created_at;
        if self.repository.delete(session_id).await? {
            log::info!(
                "Session {} cleared after {} minutes",
                session_id,
                age.num_minutes()
            );
        }
        Ok(())
    }

    /// Current question, generating the axis' questions on first access.
    /// Generation failures invalidate the session.
    pub async fn current_question(&self, session_id: &str) -> AppResult<CurrentQuestion> {
        let handle = self.session(session_id).await?;
        let mut session = handle.lock().await;
        session.touch();

        let (axis, question_index) = session.current_position(&self.axes)?;

        if !session.has_questions_for(&axis.name) {
            log::info!("Generating questions for axis {} on the fly", axis.name);
            let generated = self.question_generator.generate_questions(axis).await;

            if let Err(e) = self.check_generated(axis, &generated) {
                drop(session);
                self.repository.delete(session_id).await?;
                return Err(e);
            }
            session.store_questions(&axis.name, generated);
        }

        let question_text = session
            .question_at(&axis.name, question_index)
            .map(str::to_string);
        let Some(question_text) = question_text else {
            drop(session);
            self.repository.delete(session_id).await?;
            return Err(AppError::FatalSession(format!(
                "question {} of axis '{}' is missing",
                question_index + 1,
                axis.name
            )));
        };

        Ok(CurrentQuestion {
            axis_name: axis.name.clone(),
            question_text,
            likert_scale: self.likert_labels(),
            current_question_number: session.progress_number(&self.axes).unwrap_or_default(),
            total_questions: self.total_questions(),
        })
    }

    pub async fn submit_answer(
        &self,
        session_id: &str,
        answer: Option<&str>,
    ) -> AppResult<AnswerOutcome> {
        let handle = self.session(session_id).await?;
        let mut session = handle.lock().await;

        let state = session.submit_answer(answer, &self.axes, &self.scale)?;
        if state == QuizState::Complete {
            log::info!("Quiz finished for session {}", session_id);
        }

        Ok(AnswerOutcome {
            complete: state == QuizState::Complete,
            state,
            next_question_number: session.progress_number(&self.axes),
            total_questions: self.total_questions(),
        })
    }

    pub async fn results(&self, session_id: &str) -> AppResult<QuizResults> {
        let handle = self.session(session_id).await?;
        let mut session = handle.lock().await;
        session.touch();

        if !session.has_answers() {
            return Err(AppError::BadRequest(
                "No answers recorded yet; start the quiz again".to_string(),
            ));
        }

        let summary = self
            .summary_generator
            .generate_summary(&session.answers, &session.questions, &self.axes)
            .await;
        let axes = ScoringService::score_axes(&session.answers, &self.axes, &self.scale);

        Ok(QuizResults { axes, summary })
    }

    pub async fn state(&self, session_id: &str) -> AppResult<QuizState> {
        let handle = self.session(session_id).await?;
        let session = handle.lock().await;
        Ok(session.state(&self.axes))
    }

    async fn session(&self, session_id: &str) -> AppResult<SessionHandle> {
        self.repository.find_by_id(session_id).await?.ok_or_else(|| {
            AppError::SessionNotStarted(format!("no active quiz session '{}'", session_id))
        })
    }

    fn check_generated(&self, axis: &AxisDefinition, generated: &[String]) -> AppResult<()> {
        if generated.len() != axis.question_count() {
            log::error!(
                "Expected {} questions for {}, generated {}",
                axis.question_count(),
                axis.name,
                generated.len()
            );
            return Err(AppError::FatalSession(format!(
                "critical error while generating questions for axis '{}'",
                axis.name
            )));
        }
        if generated.iter().any(|q| is_api_error_placeholder(q)) {
            return Err(AppError::FatalSession(format!(
                "completion service error while generating questions for axis '{}'",
                axis.name
            )));
        }
        if self.strict_question_count && generated.iter().any(|q| is_generation_placeholder(q)) {
            return Err(AppError::FatalSession(format!(
                "incomplete question list generated for axis '{}'",
                axis.name
            )));
        }
        Ok(())
    }

    fn likert_labels(&self) -> Vec<String> {
        self.scale.labels().iter().map(|l| l.to_string()).collect()
    }
}

fn validate_axes(axes: &[AxisDefinition]) -> AppResult<()> {
    if axes.is_empty() {
        return Err(AppError::InternalError(
            "at least one axis must be configured".to_string(),
        ));
    }
    let mut names = HashSet::new();
    for axis in axes {
        if axis.question_count() == 0 {
            return Err(AppError::InternalError(format!(
                "axis '{}' has no questions",
                axis.name
            )));
        }
        if !names.insert(axis.name.as_str()) {
            return Err(AppError::InternalError(format!(
                "axis '{}' is configured twice",
                axis.name
            )));
        }
    }
    Ok(())
}
