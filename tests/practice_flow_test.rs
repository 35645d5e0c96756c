use skillprep_backend::error::Error;
use skillprep_backend::models::interview::InterviewRole;
use skillprep_backend::services::{
    grading_service::{GradingService, GOOD_FEEDBACK},
    question_bank::{daily_bank, legacy_questions},
    quiz_service::QuizService,
    resume_service::ResumeService,
};
use skillprep_backend::utils::token::TokenKeys;
use tokio_test::{assert_err, assert_ok};
use uuid::Uuid;

#[test]
fn notes_become_one_question_per_sentence() {
    let notes = "Ownership moves values. Borrowing lends them? Lifetimes bound borrows!";
    let mcqs = assert_ok!(QuizService::generate_mcqs(notes));

    assert_eq!(mcqs.len(), 3);
    for (idx, mcq) in mcqs.iter().enumerate() {
        assert!(mcq.question.starts_with(&format!("Q{}. ", idx + 1)));
        assert_eq!(mcq.answer, mcq.options[0]);
    }
    assert_eq!(mcqs[1].options, ["Borrowing", "lends", "them", "Process"]);
}

#[test]
fn empty_notes_are_a_bad_request() {
    let err = assert_err!(QuizService::generate_mcqs("\n\t  "));
    assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[test]
fn all_long_answers_get_positive_feedback() {
    let answers = vec![
        Some("A closure captures its environment.".to_string()),
        Some("Traits describe shared behaviour.".to_string()),
    ];
    let eval = GradingService::evaluate_answers(&answers);
    assert_eq!((eval.score, eval.total), (4, 4));
    assert_eq!(eval.feedback, GOOD_FEEDBACK);
}

#[test]
fn question_banks_cover_every_role() {
    for role in ["frontend", "backend", "fullstack", "dsa"] {
        let role: InterviewRole = role.parse().unwrap();
        assert!(!daily_bank(role).is_empty());
    }
    assert_eq!(legacy_questions("developer").len(), 10);
    assert_eq!(legacy_questions("chef").len(), 5);
}

#[test]
fn tokens_carry_the_user_id() {
    let keys = TokenKeys::new("integration-secret", 24);
    let user_id = Uuid::new_v4();
    let token = assert_ok!(keys.issue(user_id));
    let claims = assert_ok!(keys.verify(&token));
    assert_eq!(claims.sub, user_id.to_string());
    assert!(matches!(keys.verify("not.a.jwt"), Err(Error::Unauthorized(_))));
}

#[tokio::test]
async fn resume_upload_must_be_pdf() {
    let err = ResumeService::extract_text(bytes::Bytes::from_static(b"\x89PNG\r\n"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)));
}
