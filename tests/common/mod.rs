#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use lms_quiz_engine::{
    app_state::Repositories,
    errors::{AppError, AppResult},
    models::domain::{Course, Question, Quiz, QuizAttempt, Student},
    repositories::{
        CourseRepository, QuestionRepository, QuizAttemptRepository, QuizRepository,
        StudentRepository,
    },
};

#[derive(Default)]
pub struct InMemoryQuizRepository {
    quizzes: RwLock<HashMap<String, Quiz>>,
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        Ok(self.quizzes.read().await.get(id).cloned())
    }

    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.contains_key(&quiz.id) {
            return Err(AppError::DatabaseError(format!(
                "Quiz with id '{}' already exists",
                quiz.id
            )));
        }
        quizzes.insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }
}

#[derive(Default)]
pub struct InMemoryCourseRepository {
    courses: RwLock<HashMap<String, Course>>,
}

impl InMemoryCourseRepository {
    pub async fn insert(&self, course: Course) {
        self.courses.write().await.insert(course.id.clone(), course);
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        Ok(self.courses.read().await.get(id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<HashMap<String, Student>>,
}

impl InMemoryStudentRepository {
    pub async fn insert(&self, student: Student) {
        self.students.write().await.insert(student.id.clone(), student);
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Student>> {
        Ok(self.students.read().await.get(id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryQuestionRepository {
    questions: RwLock<Vec<Question>>,
}

impl InMemoryQuestionRepository {
    pub async fn insert_all(&self, questions: Vec<Question>) {
        self.questions.write().await.extend(questions);
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        Ok(questions
            .iter()
            .filter(|q| q.course_id == course_id)
            .cloned()
            .collect())
    }
}

/// Keeps attempts in insertion order, which is the order queries return.
#[derive(Default)]
pub struct InMemoryQuizAttemptRepository {
    attempts: RwLock<Vec<QuizAttempt>>,
}

impl InMemoryQuizAttemptRepository {
    pub async fn len(&self) -> usize {
        self.attempts.read().await.len()
    }
}

#[async_trait]
impl QuizAttemptRepository for InMemoryQuizAttemptRepository {
    async fn create(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        let mut attempts = self.attempts.write().await;
        if attempts.iter().any(|a| a.id == attempt.id) {
            return Err(AppError::DatabaseError(format!(
                "Attempt with id '{}' already exists",
                attempt.id
            )));
        }
        attempts.push(attempt.clone());
        Ok(attempt)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizAttempt>> {
        let attempts = self.attempts.read().await;
        Ok(attempts.iter().find(|a| a.id == id).cloned())
    }

    async fn update(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        let mut attempts = self.attempts.write().await;
        let slot = attempts
            .iter_mut()
            .find(|a| a.id == attempt.id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz attempt '{}' not found", attempt.id)))?;
        *slot = attempt.clone();
        Ok(attempt)
    }

    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizAttempt>> {
        let attempts = self.attempts.read().await;
        Ok(attempts
            .iter()
            .filter(|a| a.quiz_id == quiz_id)
            .cloned()
            .collect())
    }

    async fn find_by_student_and_course(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> AppResult<Vec<QuizAttempt>> {
        let attempts = self.attempts.read().await;
        Ok(attempts
            .iter()
            .filter(|a| a.student_id == student_id && a.course_id == course_id)
            .cloned()
            .collect())
    }
}

/// Handles on every in-memory store, kept so tests can seed and inspect them.
#[derive(Clone, Default)]
pub struct InMemoryStores {
    pub quizzes: Arc<InMemoryQuizRepository>,
    pub courses: Arc<InMemoryCourseRepository>,
    pub students: Arc<InMemoryStudentRepository>,
    pub questions: Arc<InMemoryQuestionRepository>,
    pub attempts: Arc<InMemoryQuizAttemptRepository>,
}

impl InMemoryStores {
    pub fn repositories(&self) -> Repositories {
        Repositories {
            quizzes: self.quizzes.clone(),
            courses: self.courses.clone(),
            students: self.students.clone(),
            questions: self.questions.clone(),
            attempts: self.attempts.clone(),
        }
    }

    /// Seeds `course-1` with `student-1` and a pool of the given shape.
    pub async fn seeded(mcq: usize, true_false: usize, short_answer: usize) -> Self {
        let stores = Self::default();
        stores
            .courses
            .insert(Course {
                id: "course-1".to_string(),
                title: "Geography".to_string(),
            })
            .await;
        stores.students.insert(student("student-1")).await;
        stores
            .questions
            .insert_all(question_pool("course-1", mcq, true_false, short_answer))
            .await;
        stores
    }

    pub async fn add_quiz(&self, id: &str, mcq: u32, true_false: u32, short_answer: u32) -> Quiz {
        let mut quiz = Quiz::new("course-1", "Quiz", mcq, true_false, short_answer);
        quiz.id = id.to_string();
        self.quizzes.create(quiz).await.expect("quiz id is unique")
    }
}

pub fn student(id: &str) -> Student {
    Student {
        id: id.to_string(),
        first_name: "Test".to_string(),
        last_name: "Student".to_string(),
        email: format!("{}@example.com", id),
    }
}

pub fn question(id: &str, course_id: &str, question_type: &str, correct_answer: &str) -> Question {
    Question {
        id: id.to_string(),
        course_id: course_id.to_string(),
        text: format!("Question {}", id),
        question_type: question_type.to_string(),
        correct_answer: correct_answer.to_string(),
    }
}

pub fn question_pool(
    course_id: &str,
    mcq: usize,
    true_false: usize,
    short_answer: usize,
) -> Vec<Question> {
    let mut pool = Vec::new();
    pool.extend((0..mcq).map(|i| question(&format!("mcq-{}", i), course_id, "MCQ", "A")));
    pool.extend(
        (0..true_false).map(|i| question(&format!("tf-{}", i), course_id, "TRUE_FALSE", "True")),
    );
    pool.extend((0..short_answer).map(|i| {
        question(
            &format!("sa-{}", i),
            course_id,
            "SHORT_ANSWER",
            &format!("answer {}", i),
        )
    }));
    pool
}
