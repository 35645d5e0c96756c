use crate::error::{Error, Result};
use crate::models::quiz::Mcq;

const PLACEHOLDERS: [&str; 4] = ["Concept", "Data", "System", "Process"];
const PREVIEW_CHARS: usize = 45;

pub struct QuizService;

impl QuizService {
    /// Turns free-text notes into one multiple-choice question per sentence.
    ///
    /// Options are the first four words of the sentence (padded with fixed
    /// placeholders) and the answer is always the first option.
    pub fn generate_mcqs(notes: &str) -> Result<Vec<Mcq>> {
        let sentences: Vec<&str> = notes
            .split(['.', '?', '!'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if sentences.is_empty() {
            return Err(Error::BadRequest("Not enough content".to_string()));
        }

        Ok(sentences
            .iter()
            .enumerate()
            .map(|(idx, sentence)| build_mcq(idx + 1, sentence))
            .collect())
    }
}

fn build_mcq(number: usize, sentence: &str) -> Mcq {
    let mut words = sentence.split_whitespace();
    let options: [String; 4] = PLACEHOLDERS.map(|fallback| {
        words.next().unwrap_or(fallback).to_string()
    });
    let preview: String = sentence.chars().take(PREVIEW_CHARS).collect();

    Mcq {
        question: format!("Q{}. Which keyword relates to: \"{}...\"", number, preview),
        answer: options[0].clone(),
        options,
    }
}
