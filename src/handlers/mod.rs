pub mod attempt_handler;
pub mod quiz_handler;

use actix_web::{get, web, HttpResponse};

pub use attempt_handler::{create_attempt, get_attempt, submit_answers};
pub use quiz_handler::{
    create_quiz, get_quiz, get_quiz_average_score, get_student_course_attempts,
    get_student_course_average_score,
};

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Registers every route on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(create_quiz)
        .service(get_quiz)
        .service(get_quiz_average_score)
        .service(create_attempt)
        .service(get_attempt)
        .service(submit_answers)
        .service(get_student_course_attempts)
        .service(get_student_course_average_score);
}
