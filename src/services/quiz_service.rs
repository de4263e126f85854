use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Quiz, dto::request::CreateQuizRequest},
    repositories::{CourseRepository, QuizRepository},
};

pub struct QuizService {
    quiz_repository: Arc<dyn QuizRepository>,
    course_repository: Arc<dyn CourseRepository>,
}

impl QuizService {
    pub fn new(
        quiz_repository: Arc<dyn QuizRepository>,
        course_repository: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            quiz_repository,
            course_repository,
        }
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        let quiz = self
            .quiz_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz '{}' not found", id)))?;

        Ok(quiz)
    }

    pub async fn create_quiz(&self, course_id: &str, request: CreateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;

        let course = self
            .course_repository
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course '{}' not found", course_id)))?;

        let quiz = Quiz::new(
            &course.id,
            &request.title,
            request.num_mcq,
            request.num_true_false,
            request.num_short_answer,
        );
        let quiz = self.quiz_repository.create(quiz).await?;

        log::info!("Created quiz '{}' in course '{}'", quiz.id, course.id);
        Ok(quiz)
    }
}
