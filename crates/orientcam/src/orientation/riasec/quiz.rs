//! Scoring for the RIASEC questionnaire.
//!
//! The question texts live outside this crate; the scoring key only carries
//! which dimension each question probes and whether its Likert answer is
//! reverse-scored. Five questions per dimension, answers 1-5, dimension
//! score = sum / max * 100.

use super::{Dimension, RiasecScores};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Number of questions in the standard instrument.
pub const QUESTION_COUNT: usize = 30;

/// Inclusive bounds of the Likert answer scale.
pub const ANSWER_MIN: u8 = 1;
pub const ANSWER_MAX: u8 = 5;

/// One submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub question_number: u16,
    pub answer: u8,
}

/// Scoring metadata for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizEntry {
    pub dimension: Dimension,
    pub reverse_scored: bool,
}

/// Maps question numbers to the dimension they probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizKey {
    entries: BTreeMap<u16, QuizEntry>,
}

impl QuizKey {
    pub fn new(entries: BTreeMap<u16, QuizEntry>) -> Self {
        Self { entries }
    }

    /// The standard 30-question key: questions rotate through the hexagon so
    /// each dimension is probed five times.
    pub fn standard() -> Self {
        let mut entries = BTreeMap::new();
        for number in 1..=QUESTION_COUNT as u16 {
            let dimension = Dimension::ordered()[(number as usize - 1) % 6];
            entries.insert(
                number,
                QuizEntry {
                    dimension,
                    reverse_scored: false,
                },
            );
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, question_number: u16) -> Option<QuizEntry> {
        self.entries.get(&question_number).copied()
    }
}

/// Rejection reasons for a quiz submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("expected {expected} answers, found {found}")]
    AnswerCount { expected: usize, found: usize },
    #[error("question {0} was answered more than once")]
    DuplicateAnswer(u16),
    #[error("question {0} is not part of the instrument")]
    UnknownQuestion(u16),
    #[error("answer {answer} for question {question} is outside the 1-5 scale")]
    AnswerOutOfRange { question: u16, answer: u8 },
}

/// Score a complete submission against a key.
///
/// Reverse-scored questions contribute `6 - answer` so that agreement and
/// disagreement weigh symmetrically.
pub fn score_answers(answers: &[QuizAnswer], key: &QuizKey) -> Result<RiasecScores, QuizError> {
    if answers.len() != key.len() {
        return Err(QuizError::AnswerCount {
            expected: key.len(),
            found: answers.len(),
        });
    }

    let mut sums: BTreeMap<Dimension, u32> = BTreeMap::new();
    let mut counts: BTreeMap<Dimension, u32> = BTreeMap::new();
    let mut seen: BTreeSet<u16> = BTreeSet::new();

    for answer in answers {
        if !seen.insert(answer.question_number) {
            return Err(QuizError::DuplicateAnswer(answer.question_number));
        }

        let entry = key
            .entry(answer.question_number)
            .ok_or(QuizError::UnknownQuestion(answer.question_number))?;

        if !(ANSWER_MIN..=ANSWER_MAX).contains(&answer.answer) {
            return Err(QuizError::AnswerOutOfRange {
                question: answer.question_number,
                answer: answer.answer,
            });
        }

        let value = if entry.reverse_scored {
            (ANSWER_MAX + ANSWER_MIN - answer.answer) as u32
        } else {
            answer.answer as u32
        };

        *sums.entry(entry.dimension).or_default() += value;
        *counts.entry(entry.dimension).or_default() += 1;
    }

    let percentage = |dimension: Dimension| -> u8 {
        let count = counts.get(&dimension).copied().unwrap_or(0);
        if count == 0 {
            return 0;
        }
        let sum = sums.get(&dimension).copied().unwrap_or(0);
        let max = count * ANSWER_MAX as u32;
        ((sum * 100 + max / 2) / max) as u8
    };

    Ok(RiasecScores {
        realistic: percentage(Dimension::Realistic),
        investigative: percentage(Dimension::Investigative),
        artistic: percentage(Dimension::Artistic),
        social: percentage(Dimension::Social),
        enterprising: percentage(Dimension::Enterprising),
        conventional: percentage(Dimension::Conventional),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_answers(answer: u8) -> Vec<QuizAnswer> {
        (1..=QUESTION_COUNT as u16)
            .map(|question_number| QuizAnswer {
                question_number,
                answer,
            })
            .collect()
    }

    #[test]
    fn uniform_agreement_scores_every_dimension_at_full() {
        let scores = score_answers(&uniform_answers(5), &QuizKey::standard()).expect("scores");
        for (_, value) in scores.entries() {
            assert_eq!(value, 100);
        }
    }

    #[test]
    fn uniform_disagreement_scores_every_dimension_at_twenty() {
        let scores = score_answers(&uniform_answers(1), &QuizKey::standard()).expect("scores");
        for (_, value) in scores.entries() {
            assert_eq!(value, 20);
        }
    }

    #[test]
    fn reverse_scored_questions_flip_the_scale() {
        let mut entries = BTreeMap::new();
        entries.insert(
            1,
            QuizEntry {
                dimension: Dimension::Realistic,
                reverse_scored: true,
            },
        );
        let key = QuizKey::new(entries);

        let scores = score_answers(
            &[QuizAnswer {
                question_number: 1,
                answer: 5,
            }],
            &key,
        )
        .expect("scores");

        assert_eq!(scores.realistic, 20);
    }

    #[test]
    fn rejects_wrong_answer_count() {
        let answers = uniform_answers(3);
        match score_answers(&answers[..10], &QuizKey::standard()) {
            Err(QuizError::AnswerCount {
                expected: 30,
                found: 10,
            }) => {}
            other => panic!("expected answer count error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_answers() {
        let mut answers = uniform_answers(3);
        answers[1].question_number = 1;
        match score_answers(&answers, &QuizKey::standard()) {
            Err(QuizError::DuplicateAnswer(1)) => {}
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_questions() {
        let mut answers = uniform_answers(3);
        answers[29].question_number = 99;
        match score_answers(&answers, &QuizKey::standard()) {
            Err(QuizError::UnknownQuestion(99)) => {}
            other => panic!("expected unknown question error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_scale_answers() {
        let mut answers = uniform_answers(3);
        answers[0].answer = 6;
        match score_answers(&answers, &QuizKey::standard()) {
            Err(QuizError::AnswerOutOfRange {
                question: 1,
                answer: 6,
            }) => {}
            other => panic!("expected out of range error, got {other:?}"),
        }
    }
}
