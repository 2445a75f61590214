use std::sync::Arc;

use chrono::Duration;

use crate::{
    config::Config,
    constants::axes::AXES,
    errors::AppResult,
    models::domain::AxisDefinition,
    repositories::{InMemorySessionRepository, SessionRepository},
    services::{
        completion_service::{CompletionService, OpenAiCompletionService},
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub session_repository: Arc<dyn SessionRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let completion = Arc::new(OpenAiCompletionService::new(&config));
        log::info!("Using completion model {}", completion.model());
        Self::with_completion_service(config, AXES.clone(), completion)
    }

    pub fn with_completion_service(
        config: Config,
        axes: Vec<AxisDefinition>,
        completion: Arc<dyn CompletionService>,
    ) -> AppResult<Self> {
        let session_repository: Arc<dyn SessionRepository> = Arc::new(
            InMemorySessionRepository::new(Duration::minutes(config.session_ttl_minutes)),
        );
        let quiz_service = Arc::new(
            QuizService::new(axes, Arc::clone(&session_repository), completion)?
                .with_strict_question_count(config.strict_question_count),
        );

        Ok(Self {
            quiz_service,
            session_repository,
            config: Arc::new(config),
        })
    }
}
