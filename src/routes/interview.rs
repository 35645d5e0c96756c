use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    routes::extract::AppJson,
    dto::interview_dto::{EvaluateRequest, GenerateInterviewRequest},
    error::{Error, Result},
    models::interview::InterviewRole,
    services::grading_service::GradingService,
    utils::time::today,
    AppState,
};

#[axum::debug_handler]
pub async fn generate(
    State(state): State<AppState>,
    AppJson(payload): AppJson<GenerateInterviewRequest>,
) -> Result<impl IntoResponse> {
    let role: InterviewRole = payload
        .role
        .as_deref()
        .and_then(|r| r.parse().ok())
        .ok_or_else(|| Error::BadRequest("Invalid role".to_string()))?;

    let questions = state
        .interview_service
        .questions_for_day(role, today())
        .await?;
    Ok(Json(questions))
}

#[axum::debug_handler]
pub async fn evaluate(AppJson(payload): AppJson<EvaluateRequest>) -> Result<impl IntoResponse> {
    let answers = payload
        .answers
        .ok_or_else(|| Error::BadRequest("Answers required".to_string()))?;

    let evaluation = GradingService::evaluate_answers(&EvaluateRequest::text_answers(&answers));
    Ok(Json(evaluation))
}
