pub mod grader;
pub mod quiz_attempt_service;
pub mod quiz_service;
pub mod sampler;
pub mod score_service;
