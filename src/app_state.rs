use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        CourseRepository, MongoCourseRepository, MongoQuestionRepository,
        MongoQuizAttemptRepository, MongoQuizRepository, MongoStudentRepository,
        QuestionRepository, QuizAttemptRepository, QuizRepository, StudentRepository,
    },
    services::{
        quiz_attempt_service::QuizAttemptService, quiz_service::QuizService,
        score_service::ScoreService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub quiz_attempt_service: Arc<QuizAttemptService>,
    pub score_service: Arc<ScoreService>,
    pub config: Arc<Config>,
}

/// The collaborator stores the services are built on.
pub struct Repositories {
    pub quizzes: Arc<dyn QuizRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub students: Arc<dyn StudentRepository>,
    pub questions: Arc<dyn QuestionRepository>,
    pub attempts: Arc<dyn QuizAttemptRepository>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = MongoQuizRepository::new(&db);
        quiz_repository.ensure_indexes().await?;
        let question_repository = MongoQuestionRepository::new(&db);
        question_repository.ensure_indexes().await?;
        let attempt_repository = MongoQuizAttemptRepository::new(&db);
        attempt_repository.ensure_indexes().await?;

        let repositories = Repositories {
            quizzes: Arc::new(quiz_repository),
            courses: Arc::new(MongoCourseRepository::new(&db)),
            students: Arc::new(MongoStudentRepository::new(&db)),
            questions: Arc::new(question_repository),
            attempts: Arc::new(attempt_repository),
        };

        Ok(Self::from_repositories(config, repositories))
    }

    pub fn from_repositories(config: Config, repositories: Repositories) -> Self {
        let quiz_service = Arc::new(QuizService::new(
            repositories.quizzes.clone(),
            repositories.courses,
        ));
        let quiz_attempt_service = Arc::new(QuizAttemptService::new(
            repositories.quizzes,
            repositories.students,
            repositories.questions,
            repositories.attempts.clone(),
        ));
        let score_service = Arc::new(ScoreService::new(repositories.attempts));

        Self {
            quiz_service,
            quiz_attempt_service,
            score_service,
            config: Arc::new(config),
        }
    }
}
