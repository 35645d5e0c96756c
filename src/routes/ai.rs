use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::IntoResponse,
    Extension, Json,
};
use bytes::Bytes;

use crate::{
    dto::ai_dto::{
        GenerateMcqsRequest, InterviewChatRequest, InterviewQuestionsRequest,
        InterviewReviewRequest, MessageResponse, ReplyResponse, ResumeTextResponse,
        SaveScoreRequest,
    },
    error::{Error, Result},
    middleware::auth::Claims,
    routes::extract::AppJson,
    services::{
        question_bank::legacy_questions, quiz_service::QuizService,
        resume_service::ResumeService,
    },
    AppState,
};

const DEFAULT_REVIEW_ROLE: &str = "software engineering";

#[axum::debug_handler]
pub async fn generate_mcqs(
    AppJson(payload): AppJson<GenerateMcqsRequest>,
) -> Result<impl IntoResponse> {
    let notes = payload
        .notes
        .filter(|n| !n.is_empty())
        .ok_or_else(|| Error::BadRequest("Notes required".to_string()))?;

    let mcqs = QuizService::generate_mcqs(&notes)?;
    Ok(Json(mcqs))
}

#[axum::debug_handler]
pub async fn save_score(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    AppJson(payload): AppJson<SaveScoreRequest>,
) -> Result<impl IntoResponse> {
    let (Some(score), Some(total)) = (payload.score, payload.total) else {
        return Err(Error::BadRequest("Score data missing".to_string()));
    };

    state
        .progress_service
        .save_score(claims.user_id()?, score, total)
        .await?;

    Ok(Json(MessageResponse {
        message: "Score saved successfully".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let profile = state.progress_service.profile(claims.user_id()?).await?;
    Ok(Json(profile))
}

#[axum::debug_handler]
pub async fn interview_chat(
    State(state): State<AppState>,
    AppJson(payload): AppJson<InterviewChatRequest>,
) -> Result<impl IntoResponse> {
    state.ai_service.ensure_configured()?;

    let role = payload.role.filter(|r| !r.trim().is_empty());
    let (Some(role), Some(history)) = (role, payload.history) else {
        return Err(Error::BadRequest("Role and history required".to_string()));
    };

    let reply = state
        .ai_service
        .interview_reply(&role, &history, payload.resume_text.as_deref())
        .await?;
    Ok(Json(ReplyResponse { reply }))
}

#[axum::debug_handler]
pub async fn interview_review(
    State(state): State<AppState>,
    AppJson(payload): AppJson<InterviewReviewRequest>,
) -> Result<impl IntoResponse> {
    state.ai_service.ensure_configured()?;

    let history = payload
        .history
        .filter(|h| !h.is_empty())
        .ok_or_else(|| Error::BadRequest("No history to review".to_string()))?;
    let role = payload
        .role
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_REVIEW_ROLE.to_string());

    let review = state.ai_service.interview_review(&role, &history).await?;
    Ok(Json(review))
}

#[axum::debug_handler]
pub async fn upload_resume(
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse> {
    let mut multipart = multipart?;
    let mut upload: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await? {
        let is_resume = field.name() == Some("resume");
        if !is_resume && (upload.is_some() || field.file_name().is_none()) {
            continue;
        }
        let data = field.bytes().await?;
        upload = Some(data);
        if is_resume {
            break;
        }
    }

    let data = upload.ok_or_else(|| Error::BadRequest("No file uploaded".to_string()))?;
    let text = ResumeService::extract_text(data).await?;
    Ok(Json(ResumeTextResponse { text }))
}

#[axum::debug_handler]
pub async fn interview_questions(
    AppJson(payload): AppJson<InterviewQuestionsRequest>,
) -> Result<impl IntoResponse> {
    let role = payload
        .role
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| Error::BadRequest("Role required".to_string()))?;

    Ok(Json(legacy_questions(&role)))
}
