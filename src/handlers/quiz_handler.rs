use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::SubmitAnswerRequest, response::StartQuizResponse},
};

#[get("/api/quiz/axes")]
pub async fn axes_overview(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.quiz_service.axes_overview())
}

#[post("/api/quiz/sessions")]
pub async fn start_quiz(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session_id = state.quiz_service.start_quiz().await?;
    Ok(HttpResponse::Created().json(StartQuizResponse {
        session_id,
        total_questions: state.quiz_service.total_questions(),
    }))
}

#[post("/api/quiz/sessions/{id}/restart")]
pub async fn restart_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.restart_quiz(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/api/quiz/sessions/{id}/question")]
pub async fn current_question(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let question = state.quiz_service.current_question(&id).await?;
    Ok(HttpResponse::Ok().json(question))
}

#[post("/api/quiz/sessions/{id}/answers")]
pub async fn submit_answer(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let outcome = state
        .quiz_service
        .submit_answer(&id, request.answer.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(outcome))
}

#[get("/api/quiz/sessions/{id}/results")]
pub async fn quiz_results(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let results = state.quiz_service.results(&id).await?;
    Ok(HttpResponse::Ok().json(results))
}

#[delete("/api/quiz/sessions/{id}")]
pub async fn end_session(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.end_session(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::{
        config::Config,
        handlers::configure,
        models::domain::LikertScale,
        services::completion_service::MockCompletionService,
        test_utils::{
            fixtures::two_axes,
            test_helpers::{assert_error_status, assert_success_status},
        },
    };

    use super::*;

    fn state_with(mock: MockCompletionService) -> AppState {
        AppState::with_completion_service(Config::test_config(), two_axes(), Arc::new(mock))
            .unwrap()
    }

    fn scripted_mock() -> MockCompletionService {
        let mut mock = MockCompletionService::new();
        mock.expect_complete().returning(|prompt| {
            if prompt.contains("Odpowiedzi:") {
                Ok("Twoje odpowiedzi pokazują wyraźne przywiązanie do wolności rynkowej.".to_string())
            } else {
                Ok("Statement one\nStatement two".to_string())
            }
        });
        mock
    }

    #[actix_web::test]
    async fn test_health_check() {
        let state = state_with(MockCompletionService::new());
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_axes_overview() {
        let state = state_with(MockCompletionService::new());
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = test::TestRequest::get().uri("/api/quiz/axes").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["total_questions"], 3);
        assert_eq!(body["axes"][1]["name"], "Order");
    }

    #[actix_web::test]
    async fn test_full_quiz_flow() {
        let scale = LikertScale::default();
        let state = state_with(scripted_mock());
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = test::TestRequest::post().uri("/api/quiz/sessions").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let started: Value = test::read_body_json(resp).await;
        let id = started["session_id"].as_str().unwrap().to_string();

        let answers = [scale.max_label(), scale.max_label(), scale.min_label()];
        for (n, answer) in answers.iter().enumerate() {
            let req = test::TestRequest::get()
                .uri(&format!("/api/quiz/sessions/{}/question", id))
                .to_request();
            let question: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(question["current_question_number"], n + 1);

            let req = test::TestRequest::post()
                .uri(&format!("/api/quiz/sessions/{}/answers", id))
                .set_json(json!({ "answer": answer }))
                .to_request();
            let outcome: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(outcome["complete"], n == answers.len() - 1);
        }

        let req = test::TestRequest::get()
            .uri(&format!("/api/quiz/sessions/{}/results", id))
            .to_request();
        let results: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(results["axes"][0]["value_percent"], 100.0);
        assert_eq!(results["axes"][1]["value_percent"], 0.0);
        assert!(results["summary"]
            .as_str()
            .unwrap()
            .starts_with("Twoje odpowiedzi"));
    }

    #[actix_web::test]
    async fn test_empty_answer_is_rejected() {
        let state = state_with(MockCompletionService::new());
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = test::TestRequest::post().uri("/api/quiz/sessions").to_request();
        let started: Value = test::call_and_read_body_json(&app, req).await;
        let id = started["session_id"].as_str().unwrap().to_string();

        for body in [json!({}), json!({ "answer": "" }), json!({ "answer": "maybe" })] {
            let req = test::TestRequest::post()
                .uri(&format!("/api/quiz/sessions/{}/answers", id))
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[actix_web::test]
    async fn test_unknown_session_signals_restart() {
        let state = state_with(MockCompletionService::new());
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = test::TestRequest::get()
            .uri("/api/quiz/sessions/does-not-exist/question")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_status(resp.status());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "SESSION_NOT_STARTED");
        assert_eq!(body["restart"], true);
    }

    #[actix_web::test]
    async fn test_end_session() {
        let state = state_with(MockCompletionService::new());
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = test::TestRequest::post().uri("/api/quiz/sessions").to_request();
        let started: Value = test::call_and_read_body_json(&app, req).await;
        let id = started["session_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/quiz/sessions/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_success_status(resp.status());

        let req = test::TestRequest::get()
            .uri(&format!("/api/quiz/sessions/{}/results", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
