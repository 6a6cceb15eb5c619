//! Quiz service: the engine wired to a store and a random source

use super::{check, generate, reveal, Answer, CorrectAnswer, QuestionKind, QuizQuestion};
use crate::config::QuizConfig;
use crate::errors::{AppError, Result};
use crate::metrics;
use crate::store::HadithStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Issues questions and judges answers.
///
/// Holds no per-question state. The random generator is the only shared
/// mutable piece and is never locked across an await point.
pub struct QuizService {
    store: Arc<dyn HadithStore>,
    rng: Mutex<StdRng>,
    placeholder: String,
}

impl QuizService {
    pub fn new(store: Arc<dyn HadithStore>, config: &QuizConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            store,
            rng: Mutex::new(rng),
            placeholder: config.blank_placeholder.clone(),
        }
    }

    /// Build a random question from the whole corpus
    pub async fn random_question(&self, allowed: &[QuestionKind]) -> Result<QuizQuestion> {
        let hadiths = self.store.list_hadiths().await?;
        let companions = self.store.list_companions().await?;
        let sources = self.store.list_sources().await?;

        let question = {
            let mut rng = self.rng.lock().map_err(|_| AppError::Internal {
                message: "Quiz random generator lock poisoned".to_string(),
            })?;
            generate(&hadiths, &companions, &sources, allowed, &self.placeholder, &mut *rng)?
        };

        metrics::record_quiz_generated(question.kind().as_str());

        info!(
            hadith_id = question.id,
            kind = %question.kind(),
            corpus_size = hadiths.len(),
            "Quiz question issued"
        );

        Ok(question)
    }

    /// Judge an answer about hadith `hadith_id`
    pub async fn check_answer(&self, hadith_id: i32, answer: &Answer) -> Result<bool> {
        let truth = self
            .store
            .find_hadith(hadith_id)
            .await?
            .ok_or(AppError::HadithNotFound { id: hadith_id })?;

        let is_correct = check(answer, &truth)?;

        metrics::record_answer_checked(answer.kind().as_str(), is_correct);

        info!(
            hadith_id,
            kind = %answer.kind(),
            is_correct,
            "Quiz answer checked"
        );

        Ok(is_correct)
    }

    /// Reveal the stored answer for hadith `hadith_id`
    pub async fn reveal_answer(
        &self,
        hadith_id: i32,
        kind: Option<QuestionKind>,
        positions: &[usize],
    ) -> Result<CorrectAnswer> {
        let truth = self
            .store
            .find_hadith(hadith_id)
            .await?
            .ok_or(AppError::HadithNotFound { id: hadith_id })?;

        reveal(truth, kind, positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::memory_repo;
    use crate::errors::ErrorCode;
    use crate::quiz::QuestionBody;
    use crate::store::NewHadith;

    const SAYING: &str = "None of you truly believes until he loves for his brother what he loves for himself";

    async fn seeded_service(seed: u64) -> (QuizService, i32) {
        let repo = memory_repo().await;
        let anas = repo.create_companion("Anas ibn Malik".into()).await.unwrap();
        let bukhari = repo.create_source("Sahih al-Bukhari".into()).await.unwrap();
        let hadith = repo
            .create_hadith(NewHadith {
                text: SAYING.into(),
                companion_ids: vec![anas.id],
                source_ids: vec![bukhari.id],
            })
            .await
            .unwrap();

        let config = QuizConfig {
            rng_seed: Some(seed),
            ..QuizConfig::default()
        };
        (QuizService::new(Arc::new(repo), &config), hadith.id)
    }

    #[tokio::test]
    async fn test_empty_corpus_has_no_content() {
        let service = QuizService::new(Arc::new(memory_repo().await), &QuizConfig::default());
        let err = service.random_question(&[]).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NoContentAvailable);
    }

    #[tokio::test]
    async fn test_issued_blanks_check_correct() {
        let (service, id) = seeded_service(21).await;

        let question = service.random_question(&[QuestionKind::FillBlanks]).await.unwrap();
        assert_eq!(question.id, id);

        let QuestionBody::FillBlanks { blank_words, blank_indices, .. } = question.body else {
            panic!("expected a fill-in-the-blank question");
        };

        let shouted = blank_words.iter().map(|w| format!("  {} ", w.to_uppercase())).collect();
        let answer = Answer::FillBlanks {
            filled_words: shouted,
            blank_indices: blank_indices.clone(),
        };
        assert!(service.check_answer(id, &answer).await.unwrap());

        let revealed = service
            .reveal_answer(id, Some(QuestionKind::FillBlanks), &blank_indices)
            .await
            .unwrap();
        assert_eq!(revealed.correct_words, Some(blank_words));
    }

    #[tokio::test]
    async fn test_multiple_choice_round() {
        let (service, id) = seeded_service(4).await;

        let question = service.random_question(&[QuestionKind::MultipleChoice]).await.unwrap();
        let QuestionBody::MultipleChoice { companions, sources } = question.body else {
            panic!("expected a multiple choice question");
        };

        let answer = Answer::MultipleChoice {
            companion_ids: companions.iter().map(|c| c.id).collect(),
            source_ids: sources.iter().map(|s| s.id).collect(),
        };
        assert!(service.check_answer(id, &answer).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_seed_same_question() {
        let (a, _) = seeded_service(99).await;
        let (b, _) = seeded_service(99).await;

        assert_eq!(
            a.random_question(&[]).await.unwrap(),
            b.random_question(&[]).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_unknown_hadith_not_found() {
        let (service, id) = seeded_service(1).await;
        let answer = Answer::MultipleChoice {
            companion_ids: vec![],
            source_ids: vec![],
        };

        let err = service.check_answer(id + 100, &answer).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::HadithNotFound);

        let err = service.reveal_answer(id + 100, None, &[]).await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }
}
