use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub sender: String,
    pub text: String,
}

impl ChatTurn {
    pub fn is_user(&self) -> bool {
        self.sender == "user"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewReview {
    #[serde(default)]
    pub mistakes: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    pub overall_score: i64,
    #[serde(default)]
    pub summary: String,
}
