use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::CreateQuizRequest, response::AverageScoreResponse},
};

#[post("/api/courses/{course_id}/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .create_quiz(&course_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[get("/api/quizzes/{quiz_id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&quiz_id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[get("/api/quizzes/{quiz_id}/average-score")]
pub async fn get_quiz_average_score(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let average = state.score_service.average_score(&quiz_id).await?;
    Ok(HttpResponse::Ok().json(AverageScoreResponse::from(average)))
}

#[get("/api/students/{student_id}/courses/{course_id}/quiz-attempts")]
pub async fn get_student_course_attempts(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (student_id, course_id) = path.into_inner();
    let attempts = state
        .score_service
        .attempts_for_student_in_course(&student_id, &course_id)
        .await?;
    Ok(HttpResponse::Ok().json(attempts))
}

#[get("/api/students/{student_id}/courses/{course_id}/average-score")]
pub async fn get_student_course_average_score(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (student_id, course_id) = path.into_inner();
    let average = state
        .score_service
        .average_score_for_student_in_course(&student_id, &course_id)
        .await?;
    Ok(HttpResponse::Ok().json(AverageScoreResponse::from(average)))
}
