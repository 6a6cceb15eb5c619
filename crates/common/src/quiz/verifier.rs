//! Answer verification

use super::{words_at, QuestionKind};
use crate::errors::Result;
use crate::store::ResolvedHadith;
use std::collections::BTreeSet;

/// A submitted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    MultipleChoice {
        companion_ids: Vec<i32>,
        source_ids: Vec<i32>,
    },
    FillBlanks {
        filled_words: Vec<String>,
        /// Positions the client was shown, echoed back unchanged
        blank_indices: Vec<usize>,
    },
}

impl Answer {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Answer::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            Answer::FillBlanks { .. } => QuestionKind::FillBlanks,
        }
    }
}

/// Judge `answer` against the stored hadith.
///
/// Multiple choice compares id sets, so order and repeats do not matter and
/// there is no partial credit. Fill-in-the-blank compares word by word,
/// ignoring case and surrounding whitespace of the submitted words. The echoed
/// positions are trusted, but a position past the end of the text is rejected.
pub fn check(answer: &Answer, truth: &ResolvedHadith) -> Result<bool> {
    match answer {
        Answer::MultipleChoice { companion_ids, source_ids } => {
            let companions_match = same_set(companion_ids, truth.companion_ids());
            let sources_match = same_set(source_ids, truth.source_ids());
            Ok(companions_match && sources_match)
        }
        Answer::FillBlanks { filled_words, blank_indices } => {
            if blank_indices.is_empty() {
                return Ok(false);
            }

            let expected = words_at(&truth.text, blank_indices)?;
            if expected.len() != filled_words.len() {
                return Ok(false);
            }

            Ok(expected
                .iter()
                .zip(filled_words)
                .all(|(want, got)| got.trim().to_lowercase() == want.to_lowercase()))
        }
    }
}

fn same_set(submitted: &[i32], actual: impl Iterator<Item = i32>) -> bool {
    submitted.iter().copied().collect::<BTreeSet<_>>() == actual.collect::<BTreeSet<_>>()
}
