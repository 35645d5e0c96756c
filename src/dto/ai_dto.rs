use serde::{Deserialize, Serialize};

use crate::models::chat::ChatTurn;

#[derive(Debug, Deserialize)]
pub struct GenerateMcqsRequest {
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveScoreRequest {
    pub score: Option<i32>,
    pub total: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewChatRequest {
    pub role: Option<String>,
    pub history: Option<Vec<ChatTurn>>,
    pub resume_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InterviewReviewRequest {
    pub role: Option<String>,
    pub history: Option<Vec<ChatTurn>>,
}

#[derive(Debug, Deserialize)]
pub struct InterviewQuestionsRequest {
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReplyResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResumeTextResponse {
    pub text: String,
}
