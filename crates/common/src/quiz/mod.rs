//! Quiz engine
//!
//! Provides:
//! - Random question generation (multiple choice and fill-in-the-blank)
//! - Answer verification against the stored hadith
//! - Correct-answer reveal for display after an attempt
//!
//! The engine is stateless between issuing a question and checking it.
//! Everything needed to verify (hadith id, blank positions) travels back
//! with the client's submission.

mod generator;
mod reveal;
mod service;
mod verifier;

pub use generator::{blank_out, generate, Blanks};
pub use reveal::{reveal, CorrectAnswer};
pub use service::QuizService;
pub use verifier::{check, Answer};

use crate::db::models::{Companion, Source};
use crate::errors::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Token substituted for each blanked word
pub const BLANK_PLACEHOLDER: &str = "____";

/// Texts with fewer words than this are never blanked
pub const MIN_WORDS_FOR_BLANKS: usize = 6;

/// Inclusive range for the number of blanks per question
pub const MIN_BLANKS: usize = 2;
pub const MAX_BLANKS: usize = 4;

/// Kind of quiz question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Pick the companions and sources of a hadith
    MultipleChoice,
    /// Restore redacted words of a hadith
    FillBlanks,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 2] = [QuestionKind::MultipleChoice, QuestionKind::FillBlanks];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::FillBlanks => "fill_blanks",
        }
    }

    /// Parse a comma-separated list of kinds, dropping anything unrecognized.
    ///
    /// Returns an empty list when nothing usable was given, which callers
    /// treat as "every kind allowed".
    pub fn parse_list(raw: Option<&str>) -> Vec<QuestionKind> {
        let mut kinds = Vec::new();
        for part in raw.unwrap_or_default().split(',') {
            if let Ok(kind) = part.trim().parse::<QuestionKind>() {
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
            }
        }
        kinds
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "multiple_choice" => Ok(QuestionKind::MultipleChoice),
            "fill_blanks" => Ok(QuestionKind::FillBlanks),
            other => Err(AppError::InvalidQuestionKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// A generated question, as sent to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    /// Id of the hadith the question was built from
    pub id: i32,
    pub text: String,
    #[serde(flatten)]
    pub body: QuestionBody,
}

/// Kind-specific part of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionBody {
    /// Full vocabularies offered as the distractor pool
    MultipleChoice {
        companions: Vec<Companion>,
        sources: Vec<Source>,
    },
    FillBlanks {
        blank_text: String,
        blank_words: Vec<String>,
        blank_indices: Vec<usize>,
    },
}

impl QuizQuestion {
    pub fn kind(&self) -> QuestionKind {
        match self.body {
            QuestionBody::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            QuestionBody::FillBlanks { .. } => QuestionKind::FillBlanks,
        }
    }
}

/// Parse a comma-separated list of positions, skipping non-numeric entries
pub fn parse_positions(raw: &str) -> Vec<usize> {
    raw.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

/// Words of `text` at `positions`, in the order the positions are given
pub fn words_at<'a>(text: &'a str, positions: &[usize]) -> Result<Vec<&'a str>> {
    let words: Vec<&str> = text.split_whitespace().collect();

    positions
        .iter()
        .map(|&pos| {
            words.get(pos).copied().ok_or_else(|| AppError::Validation {
                message: format!(
                    "Blank position {} is out of range for a text of {} words",
                    pos,
                    words.len()
                ),
                field: Some("blank_indices".to_string()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_list_filters_and_dedups() {
        let kinds = QuestionKind::parse_list(Some(" fill_blanks,essay,fill_blanks , multiple_choice"));
        assert_eq!(kinds, vec![QuestionKind::FillBlanks, QuestionKind::MultipleChoice]);
    }

    #[test]
    fn test_parse_list_empty_when_nothing_recognized() {
        assert!(QuestionKind::parse_list(None).is_empty());
        assert!(QuestionKind::parse_list(Some("")).is_empty());
        assert!(QuestionKind::parse_list(Some("true_false")).is_empty());
    }

    #[test]
    fn test_unknown_kind_is_typed_error() {
        let err = "matching".parse::<QuestionKind>().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidQuestionKind);
    }

    #[test]
    fn test_parse_positions_skips_garbage() {
        assert_eq!(parse_positions("2, 5,x,,8,-1"), vec![2, 5, 8]);
        assert!(parse_positions("").is_empty());
    }

    #[test]
    fn test_words_at_keeps_given_order() {
        let words = words_at("a b  c\td e", &[3, 0, 3]).unwrap();
        assert_eq!(words, vec!["d", "a", "d"]);
    }

    #[test]
    fn test_words_at_rejects_out_of_range() {
        let err = words_at("only three words", &[1, 3]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[test]
    fn test_question_wire_shape() {
        let question = QuizQuestion {
            id: 3,
            text: "one two three four five six".into(),
            body: QuestionBody::FillBlanks {
                blank_text: "one ____ three ____ five six".into(),
                blank_words: vec!["two".into(), "four".into()],
                blank_indices: vec![1, 3],
            },
        };

        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "fill_blanks");
        assert_eq!(json["id"], 3);
        assert_eq!(json["blank_indices"], serde_json::json!([1, 3]));
        assert!(json.get("companions").is_none());
        assert_eq!(question.kind(), QuestionKind::FillBlanks);
    }
}
