use actix_web::{get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{CreateAttemptRequest, SubmitAnswersRequest},
        response::SubmitAnswersResponse,
    },
};

#[post("/api/quizzes/{quiz_id}/attempts")]
pub async fn create_attempt(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    request: web::Json<CreateAttemptRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let attempt = state
        .quiz_attempt_service
        .create_attempt(&quiz_id, &request.student_id)
        .await?;
    Ok(HttpResponse::Created().json(attempt))
}

#[get("/api/quiz-attempts/{attempt_id}")]
pub async fn get_attempt(
    state: web::Data<AppState>,
    attempt_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let attempt = state.quiz_attempt_service.get_attempt(&attempt_id).await?;
    Ok(HttpResponse::Ok().json(attempt))
}

#[put("/api/quiz-attempts/{attempt_id}/answers")]
pub async fn submit_answers(
    state: web::Data<AppState>,
    attempt_id: web::Path<String>,
    request: web::Json<SubmitAnswersRequest>,
) -> Result<HttpResponse, AppError> {
    let attempt_id = attempt_id.into_inner();
    let score = state
        .quiz_attempt_service
        .submit_answers(&attempt_id, request.into_inner().answers)
        .await?;
    Ok(HttpResponse::Ok().json(SubmitAnswersResponse { attempt_id, score }))
}
