pub mod quiz_handler;

use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

pub use quiz_handler::{
    axes_overview, current_question, end_session, quiz_results, restart_quiz, start_quiz,
    submit_answer,
};

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let active_sessions = match state.session_repository.count().await {
        Ok(count) => count,
        Err(e) => {
            log::error!("Failed to count active sessions: {}", e);
            0
        }
    };

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "active_sessions": active_sessions
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(axes_overview)
        .service(start_quiz)
        .service(restart_quiz)
        .service(current_question)
        .service(submit_answer)
        .service(quiz_results)
        .service(end_session);
}
