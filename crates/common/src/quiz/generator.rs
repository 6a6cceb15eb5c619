//! Random question generation

use super::{
    QuestionBody, QuestionKind, QuizQuestion, MAX_BLANKS, MIN_BLANKS, MIN_WORDS_FOR_BLANKS,
};
use crate::db::models::{Companion, Source};
use crate::errors::{AppError, Result};
use crate::store::ResolvedHadith;
use rand::seq::SliceRandom;
use rand::Rng;

/// A text with some of its words redacted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blanks {
    /// Text with each blanked word replaced by the placeholder
    pub text: String,
    /// Removed words, in ascending position order
    pub words: Vec<String>,
    /// Zero-based word positions, ascending
    pub positions: Vec<usize>,
}

/// Pick random interior words of `text` to redact.
///
/// Returns `None` when the text is too short to blank. The first and last
/// words are never chosen.
pub fn blank_out<R: Rng + ?Sized>(text: &str, placeholder: &str, rng: &mut R) -> Option<Blanks> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() < MIN_WORDS_FOR_BLANKS {
        return None;
    }

    let count = rng
        .gen_range(MIN_BLANKS..=MAX_BLANKS)
        .min(words.len() - 2);

    let mut candidates: Vec<usize> = (1..words.len() - 1).collect();
    candidates.shuffle(rng);

    let mut positions = candidates[..count].to_vec();
    positions.sort_unstable();

    Some(render(&words, positions, placeholder))
}

fn render(words: &[&str], positions: Vec<usize>, placeholder: &str) -> Blanks {
    let mut blanked = Vec::with_capacity(positions.len());
    let mut out = Vec::with_capacity(words.len());

    for (i, &word) in words.iter().enumerate() {
        if positions.binary_search(&i).is_ok() {
            blanked.push(word.to_string());
            out.push(placeholder);
        } else {
            out.push(word);
        }
    }

    Blanks {
        text: out.join(" "),
        words: blanked,
        positions,
    }
}

/// Build one random question from the corpus.
///
/// An empty `allowed` list means every kind is allowed. A hadith too short
/// to blank is asked as multiple choice instead.
pub fn generate<R: Rng + ?Sized>(
    hadiths: &[ResolvedHadith],
    companions: &[Companion],
    sources: &[Source],
    allowed: &[QuestionKind],
    placeholder: &str,
    rng: &mut R,
) -> Result<QuizQuestion> {
    let hadith = hadiths.choose(rng).ok_or(AppError::NoContentAvailable)?;

    let kinds: Vec<QuestionKind> = QuestionKind::ALL
        .into_iter()
        .filter(|k| allowed.is_empty() || allowed.contains(k))
        .collect();
    let kind = kinds
        .choose(rng)
        .copied()
        .unwrap_or(QuestionKind::MultipleChoice);

    let multiple_choice = || QuestionBody::MultipleChoice {
        companions: companions.to_vec(),
        sources: sources.to_vec(),
    };

    let body = match kind {
        QuestionKind::MultipleChoice => multiple_choice(),
        QuestionKind::FillBlanks => match blank_out(&hadith.text, placeholder, rng) {
            Some(blanks) => QuestionBody::FillBlanks {
                blank_text: blanks.text,
                blank_words: blanks.words,
                blank_indices: blanks.positions,
            },
            None => {
                tracing::debug!(
                    hadith_id = hadith.id,
                    "Hadith too short to blank, asking multiple choice"
                );
                multiple_choice()
            }
        },
    };

    Ok(QuizQuestion {
        id: hadith.id,
        text: hadith.text.clone(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::BLANK_PLACEHOLDER;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const SAYING: &str = "The Prophet said kindness is a form of charity and mercy";

    fn hadith(id: i32, text: &str) -> ResolvedHadith {
        ResolvedHadith {
            id,
            text: text.to_string(),
            companions: vec![],
            sources: vec![],
        }
    }

    fn vocab() -> (Vec<Companion>, Vec<Source>) {
        (
            vec![
                Companion { id: 1, name: "Abu Hurairah".into() },
                Companion { id: 2, name: "Anas ibn Malik".into() },
            ],
            vec![Source { id: 1, name: "Sahih Muslim".into() }],
        )
    }

    #[test]
    fn test_render_fixed_positions() {
        let words: Vec<&str> = SAYING.split_whitespace().collect();
        let blanks = render(&words, vec![2, 5, 8], BLANK_PLACEHOLDER);

        assert_eq!(blanks.text, "The Prophet ____ kindness is ____ form of ____ and mercy");
        assert_eq!(blanks.words, vec!["said", "a", "charity"]);
        assert_eq!(blanks.positions, vec![2, 5, 8]);
    }

    #[test]
    fn test_blank_out_respects_bounds() {
        let words: Vec<&str> = SAYING.split_whitespace().collect();

        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let blanks = blank_out(SAYING, BLANK_PLACEHOLDER, &mut rng).unwrap();

            assert!((MIN_BLANKS..=MAX_BLANKS).contains(&blanks.positions.len()));
            assert!(blanks.positions.windows(2).all(|w| w[0] < w[1]));
            assert!(!blanks.positions.contains(&0));
            assert!(!blanks.positions.contains(&(words.len() - 1)));

            for (word, &pos) in blanks.words.iter().zip(&blanks.positions) {
                assert_eq!(word.as_str(), words[pos]);
            }

            let redacted: Vec<&str> = blanks.text.split(' ').collect();
            assert_eq!(redacted.len(), words.len());
            for (i, token) in redacted.iter().enumerate() {
                if blanks.positions.contains(&i) {
                    assert_eq!(*token, BLANK_PLACEHOLDER);
                } else {
                    assert_eq!(*token, words[i]);
                }
            }
        }
    }

    #[test]
    fn test_blank_out_six_words_never_exceeds_interior() {
        let text = "one two three four five six";
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let blanks = blank_out(text, BLANK_PLACEHOLDER, &mut rng).unwrap();
            assert!(blanks.positions.len() <= 4);
            assert!(blanks.positions.iter().all(|p| (1..=4).contains(p)));
        }
    }

    #[test]
    fn test_blank_out_covers_every_count() {
        let mut counts = HashSet::new();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            counts.insert(blank_out(SAYING, "_", &mut rng).unwrap().positions.len());
        }
        assert_eq!(counts, HashSet::from([2, 3, 4]));
    }

    #[test]
    fn test_five_words_yield_no_blanks() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(blank_out("Religion is sincere advice indeed", BLANK_PLACEHOLDER, &mut rng).is_none());
    }

    #[test]
    fn test_generate_empty_corpus() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate(&[], &[], &[], &[], BLANK_PLACEHOLDER, &mut rng).unwrap_err();
        assert!(matches!(err, AppError::NoContentAvailable));
    }

    #[test]
    fn test_generate_multiple_choice_carries_full_vocabulary() {
        let (companions, sources) = vocab();
        let hadiths = vec![hadith(10, SAYING)];
        let mut rng = StdRng::seed_from_u64(3);

        let question = generate(
            &hadiths,
            &companions,
            &sources,
            &[QuestionKind::MultipleChoice],
            BLANK_PLACEHOLDER,
            &mut rng,
        )
        .unwrap();

        assert_eq!(question.id, 10);
        assert_eq!(question.text, SAYING);
        assert_eq!(
            question.body,
            QuestionBody::MultipleChoice { companions, sources }
        );
    }

    #[test]
    fn test_generate_fill_blanks_only() {
        let hadiths = vec![hadith(1, SAYING), hadith(2, "Whoever believes in Allah and the Last Day should speak good")];

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let question = generate(&hadiths, &[], &[], &[QuestionKind::FillBlanks], "___", &mut rng).unwrap();
            assert_eq!(question.kind(), QuestionKind::FillBlanks);
        }
    }

    #[test]
    fn test_short_hadith_falls_back_to_multiple_choice() {
        let (companions, sources) = vocab();
        let hadiths = vec![hadith(4, "Do not be angry")];
        let mut rng = StdRng::seed_from_u64(9);

        let question = generate(
            &hadiths,
            &companions,
            &sources,
            &[QuestionKind::FillBlanks],
            BLANK_PLACEHOLDER,
            &mut rng,
        )
        .unwrap();

        assert_eq!(question.kind(), QuestionKind::MultipleChoice);
    }

    #[test]
    fn test_generate_reaches_every_hadith_and_kind() {
        let hadiths = vec![hadith(1, SAYING), hadith(2, SAYING), hadith(3, SAYING)];
        let mut ids = HashSet::new();
        let mut kinds = HashSet::new();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let question = generate(&hadiths, &[], &[], &[], BLANK_PLACEHOLDER, &mut rng).unwrap();
            ids.insert(question.id);
            kinds.insert(question.kind());
        }

        assert_eq!(ids, HashSet::from([1, 2, 3]));
        assert_eq!(kinds.len(), 2);
    }

    #[test]
    fn test_same_seed_same_question() {
        let hadiths = vec![hadith(1, SAYING), hadith(2, SAYING)];
        let a = generate(&hadiths, &[], &[], &[], "_", &mut StdRng::seed_from_u64(5)).unwrap();
        let b = generate(&hadiths, &[], &[], &[], "_", &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }
}
