use serde::{Deserialize, Serialize};

pub const POINTS_PER_ANSWER: i32 = 2;
pub const MIN_ANSWER_CHARS: usize = 15;

pub const GOOD_FEEDBACK: &str = "Good performance 👍";
pub const RETRY_FEEDBACK: &str = "Try explaining more clearly and improve logic.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: i32,
    pub total: i32,
    pub feedback: String,
}

pub struct GradingService;

impl GradingService {
    /// Length-only grading: an answer longer than [`MIN_ANSWER_CHARS`] earns
    /// [`POINTS_PER_ANSWER`]; missing answers still count toward the total.
    pub fn evaluate_answers(answers: &[Option<String>]) -> Evaluation {
        let score = answers
            .iter()
            .filter(|a| {
                a.as_deref()
                    .is_some_and(|text| text.chars().count() > MIN_ANSWER_CHARS)
            })
            .count() as i32
            * POINTS_PER_ANSWER;
        let total = answers.len() as i32 * POINTS_PER_ANSWER;

        // score >= 70% of total, kept in integers
        let feedback = if score * 10 >= total * 7 {
            GOOD_FEEDBACK
        } else {
            RETRY_FEEDBACK
        };

        Evaluation {
            score,
            total,
            feedback: feedback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(items: &[&str]) -> Vec<Option<String>> {
        items.iter().map(|s| Some(s.to_string())).collect()
    }

    #[test]
    fn short_and_long_answer() {
        let eval = GradingService::evaluate_answers(&answers(&[
            "short",
            "this one is definitely long enough",
        ]));
        assert_eq!(eval.score, 2);
        assert_eq!(eval.total, 4);
        assert_eq!(eval.feedback, RETRY_FEEDBACK);
    }

    #[test]
    fn exactly_fifteen_chars_earns_nothing() {
        let eval = GradingService::evaluate_answers(&answers(&["123456789012345"]));
        assert_eq!(eval.score, 0);
        let eval = GradingService::evaluate_answers(&answers(&["1234567890123456"]));
        assert_eq!(eval.score, 2);
    }

    #[test]
    fn seventy_percent_threshold_is_inclusive() {
        let long = "a sufficiently long answer";
        let mut items = vec![long; 7];
        items.extend(["no"; 3]);
        let eval = GradingService::evaluate_answers(&answers(&items));
        assert_eq!((eval.score, eval.total), (14, 20));
        assert_eq!(eval.feedback, GOOD_FEEDBACK);
    }

    #[test]
    fn null_answers_count_toward_total() {
        let eval = GradingService::evaluate_answers(&[None, Some("x".repeat(20))]);
        assert_eq!((eval.score, eval.total), (2, 4));
    }

    #[test]
    fn no_answers_is_trivially_good() {
        let eval = GradingService::evaluate_answers(&[]);
        assert_eq!((eval.score, eval.total), (0, 0));
        assert_eq!(eval.feedback, GOOD_FEEDBACK);
    }
}
