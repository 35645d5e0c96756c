pub mod ai_service;
pub mod auth_service;
pub mod grading_service;
pub mod interview_service;
pub mod interview_store;
pub mod progress_service;
pub mod question_bank;
pub mod quiz_service;
pub mod resume_service;
pub mod user_store;
