pub mod completion_service;
pub mod question_generator;
pub mod quiz_service;
pub mod scoring_service;
pub mod summary_generator;
