use serde::Deserialize;
use serde_json::Value as JsonValue;

#[derive(Debug, Deserialize)]
pub struct GenerateInterviewRequest {
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub answers: Option<Vec<JsonValue>>,
}

impl EvaluateRequest {
    /// Non-string entries (null, numbers) are treated as unanswered.
    pub fn text_answers(answers: &[JsonValue]) -> Vec<Option<String>> {
        answers
            .iter()
            .map(|a| a.as_str().map(str::to_string))
            .collect()
    }
}
