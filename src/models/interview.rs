use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Theory,
    Coding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterviewRole {
    Frontend,
    Backend,
    Fullstack,
    Dsa,
}

impl InterviewRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewRole::Frontend => "frontend",
            InterviewRole::Backend => "backend",
            InterviewRole::Fullstack => "fullstack",
            InterviewRole::Dsa => "dsa",
        }
    }
}

impl fmt::Display for InterviewRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewRole {
    type Err = String;

    // Case-sensitive: the client sends the bank keys verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(InterviewRole::Frontend),
            "backend" => Ok(InterviewRole::Backend),
            "fullstack" => Ok(InterviewRole::Fullstack),
            "dsa" => Ok(InterviewRole::Dsa),
            other => Err(format!("unknown interview role: {}", other)),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct InterviewRecord {
    pub id: Uuid,
    pub role: String,
    pub interview_date: NaiveDate,
    pub questions: Json<Vec<InterviewQuestion>>,
    pub created_at: DateTime<Utc>,
}
