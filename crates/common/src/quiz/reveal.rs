//! Correct-answer reveal

use super::{words_at, QuestionKind};
use crate::db::models::{Companion, Source};
use crate::errors::Result;
use crate::store::ResolvedHadith;
use serde::Serialize;

/// Ground truth shown after a quiz attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorrectAnswer {
    pub correct_companions: Vec<Companion>,
    pub correct_sources: Vec<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_words: Option<Vec<String>>,
    pub full_text: String,
}

/// Reconstruct the answer to a question about `truth`.
///
/// Words are only included for fill-in-the-blank questions with at least one
/// position, in the order the positions are given.
pub fn reveal(
    truth: ResolvedHadith,
    kind: Option<QuestionKind>,
    positions: &[usize],
) -> Result<CorrectAnswer> {
    let correct_words = match kind {
        Some(QuestionKind::FillBlanks) if !positions.is_empty() => Some(
            words_at(&truth.text, positions)?
                .into_iter()
                .map(str::to_string)
                .collect(),
        ),
        _ => None,
    };

    Ok(CorrectAnswer {
        correct_companions: truth.companions,
        correct_sources: truth.sources,
        correct_words,
        full_text: truth.text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::parse_positions;

    fn truth() -> ResolvedHadith {
        ResolvedHadith {
            id: 5,
            text: "The strong man is not the one who wrestles well".into(),
            companions: vec![Companion { id: 1, name: "Abu Hurairah".into() }],
            sources: vec![Source { id: 4, name: "Sahih al-Bukhari".into() }],
        }
    }

    #[test]
    fn test_reveal_fill_blanks_words() {
        let answer = reveal(truth(), Some(QuestionKind::FillBlanks), &parse_positions("1,x,6")).unwrap();
        assert_eq!(answer.correct_words, Some(vec!["strong".to_string(), "one".to_string()]));
        assert_eq!(answer.full_text, truth().text);
        assert_eq!(answer.correct_companions, truth().companions);
    }

    #[test]
    fn test_reveal_multiple_choice_has_no_words() {
        let answer = reveal(truth(), Some(QuestionKind::MultipleChoice), &[1, 2]).unwrap();
        assert!(answer.correct_words.is_none());
        assert_eq!(answer.correct_sources, truth().sources);

        let json = serde_json::to_value(&answer).unwrap();
        assert!(json.get("correct_words").is_none());
    }

    #[test]
    fn test_reveal_without_positions() {
        let answer = reveal(truth(), Some(QuestionKind::FillBlanks), &[]).unwrap();
        assert!(answer.correct_words.is_none());
    }

    #[test]
    fn test_reveal_is_repeatable() {
        let a = reveal(truth(), Some(QuestionKind::FillBlanks), &[2, 7]).unwrap();
        let b = reveal(truth(), Some(QuestionKind::FillBlanks), &[2, 7]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_reveal_out_of_range() {
        assert!(reveal(truth(), Some(QuestionKind::FillBlanks), &[40]).is_err());
    }
}
