pub mod course;
pub mod question;
pub mod quiz;
pub mod quiz_attempt;
pub mod student;
pub use course::Course;
pub use question::{Question, QuestionType};
pub use quiz::Quiz;
pub use quiz_attempt::QuizAttempt;
pub use student::Student;
