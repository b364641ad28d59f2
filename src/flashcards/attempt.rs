//! Quiz attempts over a snapshot of flashcards

use chrono::{DateTime, Utc};

use super::models::Flashcard;

/// Where the quiz currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPhase {
    /// No attempt has been started
    Idle,
    /// Cards remain to be answered
    InProgress,
    /// Every card has been answered, waiting to be submitted
    Complete,
}

/// A response given to one card during an attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptAnswer {
    pub card: Flashcard,
    pub response: String,
    pub correct: bool,
}

/// Final tally of an attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptSummary {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Progress through one quiz session.
///
/// The cards are copied when the attempt starts, so editing the collection
/// afterwards does not change the cards being quizzed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    cards: Vec<Flashcard>,
    answers: Vec<AttemptAnswer>,
    started_at: DateTime<Utc>,
}

impl Attempt {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            answers: Vec::new(),
            started_at: Utc::now(),
        }
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn answers(&self) -> &[AttemptAnswer] {
        &self.answers
    }

    /// Zero-based position of the next card to answer
    pub fn position(&self) -> usize {
        self.answers.len()
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    pub fn score(&self) -> usize {
        self.answers.iter().filter(|a| a.correct).count()
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.cards.get(self.position())
    }

    pub fn is_complete(&self) -> bool {
        self.position() >= self.total()
    }

    pub fn phase(&self) -> AttemptPhase {
        if self.is_complete() {
            AttemptPhase::Complete
        } else {
            AttemptPhase::InProgress
        }
    }

    /// Grade `response` against the current card and move to the next one.
    /// Returns `None` once every card has been answered.
    pub fn answer(&mut self, response: &str) -> Option<&AttemptAnswer> {
        let card = self.current_card()?.clone();
        let correct = card.answer().accepts(response);
        self.answers.push(AttemptAnswer {
            card,
            response: response.trim().to_string(),
            correct,
        });
        self.answers.last()
    }

    pub fn summary(&self) -> AttemptSummary {
        AttemptSummary {
            correct: self.score(),
            answered: self.answers.len(),
            total: self.total(),
            started_at: self.started_at,
            finished_at: Utc::now(),
        }
    }
}
