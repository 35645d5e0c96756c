use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::chat::{ChatTurn, InterviewReview};

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const MODEL: &str = "gpt-3.5-turbo";

const CHAT_MAX_TOKENS: u32 = 150;
const CHAT_TEMPERATURE: f32 = 0.7;
const REVIEW_MAX_TOKENS: u32 = 800;
const REVIEW_TEMPERATURE: f32 = 0.3;
const MAX_RESUME_CHARS: usize = 4000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system", content: content.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub json_response: bool,
}

/// A chat-completion backend: takes the full message list, returns the reply text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, request: ChatRequest) -> Result<String>;
}

#[derive(Clone)]
pub struct OpenAiChatModel {
    client: Client,
    api_key: String,
}

impl OpenAiChatModel {
    pub fn new(api_key: String, client: Client) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn complete(&self, request: ChatRequest) -> Result<String> {
        #[derive(Serialize)]
        struct ResponseFormat {
            #[serde(rename = "type")]
            r#type: &'static str,
        }
        #[derive(Serialize)]
        struct Req<'a> {
            model: &'a str,
            messages: &'a [ChatMessage],
            max_tokens: u32,
            temperature: f32,
            #[serde(skip_serializing_if = "Option::is_none")]
            response_format: Option<ResponseFormat>,
        }
        #[derive(Deserialize)]
        struct RespChoiceMsg {
            content: Option<String>,
        }
        #[derive(Deserialize)]
        struct RespChoice {
            message: RespChoiceMsg,
        }
        #[derive(Deserialize)]
        struct Resp {
            choices: Vec<RespChoice>,
        }

        let req = Req {
            model: MODEL,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            response_format: request
                .json_response
                .then_some(ResponseFormat { r#type: "json_object" }),
        };

        let res = self
            .client
            .post(OPENAI_CHAT_URL)
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!("OpenAI API Error {}: {}", status, text)));
        }

        let body: Resp = res.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| Error::Upstream("OpenAI returned no content".to_string()))
    }
}

#[derive(Clone)]
pub struct AIService {
    model: Option<Arc<dyn ChatModel>>,
}

impl AIService {
    pub fn new(model: Option<Arc<dyn ChatModel>>) -> Self {
        Self { model }
    }

    pub fn with_model(model: impl ChatModel + 'static) -> Self {
        Self::new(Some(Arc::new(model)))
    }

    pub fn from_api_key(api_key: Option<String>, client: Client) -> Self {
        match api_key {
            Some(key) => Self::with_model(OpenAiChatModel::new(key, client)),
            None => Self::new(None),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.model.is_some()
    }

    fn model(&self) -> Result<&Arc<dyn ChatModel>> {
        self.model.as_ref().ok_or_else(|| {
            tracing::error!("OPENAI_API_KEY is not set");
            Error::Internal("OpenAI API key is missing on server".to_string())
        })
    }

    /// Fails before any validation when no LLM backend is configured.
    pub fn ensure_configured(&self) -> Result<()> {
        self.model().map(|_| ())
    }

    pub async fn interview_reply(
        &self,
        role: &str,
        history: &[ChatTurn],
        resume_text: Option<&str>,
    ) -> Result<String> {
        let model = self.model()?;
        let request = ChatRequest {
            messages: interview_messages(role, history, resume_text),
            max_tokens: CHAT_MAX_TOKENS,
            temperature: CHAT_TEMPERATURE,
            json_response: false,
        };

        let reply = model.complete(request).await.map_err(|e| {
            tracing::error!(error = ?e, role, "interview chat completion failed");
            Error::Upstream("Failed to generate response".to_string())
        })?;
        Ok(reply.trim().to_string())
    }

    pub async fn interview_review(&self, role: &str, history: &[ChatTurn]) -> Result<InterviewReview> {
        let model = self.model()?;
        let request = ChatRequest {
            messages: vec![ChatMessage::system(review_prompt(role, history))],
            max_tokens: REVIEW_MAX_TOKENS,
            temperature: REVIEW_TEMPERATURE,
            json_response: true,
        };

        let failed = |detail: String| {
            tracing::error!(role, "interview review failed: {}", detail);
            Error::Upstream("Failed to generate review".to_string())
        };

        let raw = model
            .complete(request)
            .await
            .map_err(|e| failed(e.to_string()))?;
        parse_review(&raw).map_err(|e| failed(e.to_string()))
    }
}

fn interview_messages(role: &str, history: &[ChatTurn], resume_text: Option<&str>) -> Vec<ChatMessage> {
    let mut system = format!(
        "You are a strict and professional technical interviewer for a {role} position.
Your goal is to assess the candidate's skills.

- Ask ONE question at a time.
- Keep responses concise (under 2 sentences) so they can be spoken easily by TTS.
- If the user answers correctly, ask a follow-up or move to the next topic.
- If the user is wrong, gently correct them and move on.
- Do not give long explanations unless asked.
- Act like a human interviewer, not a robot."
    );

    if let Some(resume) = resume_text.map(str::trim).filter(|r| !r.is_empty()) {
        let excerpt: String = resume.chars().take(MAX_RESUME_CHARS).collect();
        system.push_str(
            "\n\nThe candidate shared their resume. Ground some questions in the projects and skills it lists.\n\nResume:\n",
        );
        system.push_str(&excerpt);
    }

    std::iter::once(ChatMessage::system(system))
        .chain(history.iter().map(|turn| ChatMessage {
            role: if turn.is_user() { "user" } else { "assistant" },
            content: turn.text.clone(),
        }))
        .collect()
}

fn review_prompt(role: &str, history: &[ChatTurn]) -> String {
    let transcript = history
        .iter()
        .map(|m| format!("{}: {}", m.sender.to_uppercase(), m.text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are an expert technical interviewer. Review the following interview transcript for a {role} position and provide a constructive summary.

Transcript:
{transcript}

Provide your response in JSON format (strictly JSON) with the following structure:
{{
  "mistakes": ["List specific technical or communication mistakes"],
  "improvements": ["List actionable advice for improvement"],
  "overallScore": 85,
  "summary": "Short overall feedback summary"
}}"#
    )
}

fn parse_review(raw: &str) -> std::result::Result<InterviewReview, serde_json::Error> {
    let mut review: InterviewReview = serde_json::from_str(strip_json_fences(raw))?;
    review.overall_score = review.overall_score.clamp(0, 100);
    Ok(review)
}

/// Strips ```json ... ``` or ``` ... ``` fences some models wrap JSON in.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(rest) => rest.trim().strip_suffix("```").unwrap_or(rest).trim(),
        None => text,
    }
}
