use crate::models::interview::{InterviewQuestion, InterviewRole, QuestionKind};

pub struct BankEntry {
    pub kind: QuestionKind,
    pub question: &'static str,
}

impl From<&BankEntry> for InterviewQuestion {
    fn from(entry: &BankEntry) -> Self {
        InterviewQuestion {
            kind: entry.kind,
            question: entry.question.to_string(),
        }
    }
}

const fn theory(question: &'static str) -> BankEntry {
    BankEntry {
        kind: QuestionKind::Theory,
        question,
    }
}

const fn coding(question: &'static str) -> BankEntry {
    BankEntry {
        kind: QuestionKind::Coding,
        question,
    }
}

static FRONTEND: [BankEntry; 5] = [
    theory("Explain Virtual DOM in React."),
    coding("Write a JS function to reverse a string."),
    coding("Create React counter using useState."),
    theory("What is useEffect?"),
    coding("Remove duplicates from array in JS."),
];

static BACKEND: [BankEntry; 5] = [
    theory("Explain REST API."),
    coding("Create login API using Node + JWT."),
    coding("Write MongoDB query to find user by email."),
    theory("Difference SQL vs NoSQL?"),
    coding("Create Express middleware example."),
];

static FULLSTACK: [BankEntry; 4] = [
    coding("Build login system using Node + React."),
    coding("Fetch API data using useEffect."),
    theory("Explain MERN architecture."),
    coding("Create protected route in React."),
];

static DSA: [BankEntry; 4] = [
    coding("Implement Binary Search."),
    coding("Reverse Linked List."),
    coding("Find factorial using recursion."),
    theory("Explain Big-O notation."),
];

/// Full question bank the daily interview sets are drawn from.
pub fn daily_bank(role: InterviewRole) -> &'static [BankEntry] {
    match role {
        InterviewRole::Frontend => &FRONTEND,
        InterviewRole::Backend => &BACKEND,
        InterviewRole::Fullstack => &FULLSTACK,
        InterviewRole::Dsa => &DSA,
    }
}

static BASE_QUESTIONS: [&str; 5] = [
    "Tell me about yourself.",
    "What are your strengths and weaknesses?",
    "Why do you want this role?",
    "Explain a challenging project you worked on.",
    "How do you handle deadlines?",
];

static TRACK_QUESTIONS: [(&str, [&str; 5]); 2] = [
    (
        "developer",
        [
            "Explain OOP concepts.",
            "What is REST API?",
            "Difference between SQL and NoSQL?",
            "Explain async programming.",
            "What is React lifecycle?",
        ],
    ),
    (
        "ai",
        [
            "What is machine learning?",
            "Explain overfitting vs underfitting.",
            "What is gradient descent?",
            "Difference between CNN and RNN?",
            "What is feature engineering?",
        ],
    ),
];

/// Static interview list: the base set followed by the track set for `role`
/// (matched case-insensitively), if there is one.
pub fn legacy_questions(role: &str) -> Vec<&'static str> {
    let role = role.trim().to_lowercase();
    let track = TRACK_QUESTIONS
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, questions)| questions.as_slice())
        .unwrap_or_default();

    BASE_QUESTIONS.iter().chain(track).copied().collect()
}
