#[cfg(test)]
pub mod fixtures {
    use chrono::Utc;

    use crate::models::domain::{Question, Quiz, QuizAttempt, Student};

    /// Creates a bank question in `course-1`
    pub fn question(id: &str, question_type: &str, correct_answer: &str) -> Question {
        Question {
            id: id.to_string(),
            course_id: "course-1".to_string(),
            text: format!("Question {}", id),
            question_type: question_type.to_string(),
            correct_answer: correct_answer.to_string(),
        }
    }

    /// Creates a pool with the given number of MCQ, TRUE_FALSE and SHORT_ANSWER entries
    pub fn question_pool(mcq: usize, true_false: usize, short_answer: usize) -> Vec<Question> {
        let mut pool = Vec::new();
        pool.extend((0..mcq).map(|i| question(&format!("mcq-{}", i), "MCQ", "A")));
        pool.extend((0..true_false).map(|i| question(&format!("tf-{}", i), "TRUE_FALSE", "True")));
        pool.extend(
            (0..short_answer).map(|i| question(&format!("sa-{}", i), "SHORT_ANSWER", "answer")),
        );
        pool
    }

    pub fn quiz(id: &str, course_id: &str, mcq: u32, true_false: u32, short_answer: u32) -> Quiz {
        let mut quiz = Quiz::new(course_id, "Test Quiz", mcq, true_false, short_answer);
        quiz.id = id.to_string();
        quiz
    }

    pub fn student(id: &str) -> Student {
        Student {
            id: id.to_string(),
            first_name: "Test".to_string(),
            last_name: "Student".to_string(),
            email: format!("{}@example.com", id),
        }
    }

    /// Creates an ungraded attempt over the given questions
    pub fn attempt_with(id: &str, questions: Vec<Question>) -> QuizAttempt {
        let mut attempt = QuizAttempt::new(&quiz("quiz-1", "course-1", 0, 0, 0), "student-1", questions);
        attempt.id = id.to_string();
        attempt
    }

    /// Creates a graded attempt with no questions
    pub fn scored_attempt(
        id: &str,
        quiz_id: &str,
        student_id: &str,
        course_id: &str,
        score: u32,
    ) -> QuizAttempt {
        let mut attempt = QuizAttempt::new(&quiz(quiz_id, course_id, 0, 0, 0), student_id, vec![]);
        attempt.id = id.to_string();
        attempt.score = score;
        attempt.submitted_at = Some(Utc::now());
        attempt
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::QuestionType;

    #[test]
    fn test_question_pool_sizes() {
        let pool = question_pool(3, 2, 1);

        assert_eq!(pool.len(), 6);
        assert_eq!(pool.iter().filter(|q| q.is_of_type(QuestionType::Mcq)).count(), 3);
        assert_eq!(pool.iter().filter(|q| q.is_of_type(QuestionType::TrueFalse)).count(), 2);
        assert_eq!(pool.iter().filter(|q| q.is_of_type(QuestionType::ShortAnswer)).count(), 1);
    }

    #[test]
    fn test_scored_attempt_fixture() {
        let attempt = scored_attempt("a-1", "quiz-9", "s-1", "course-2", 4);

        assert_eq!(attempt.quiz_id, "quiz-9");
        assert_eq!(attempt.course_id, "course-2");
        assert_eq!(attempt.score, 4);
    }
}
