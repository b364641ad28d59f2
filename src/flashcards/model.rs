//! In-memory state of a flashcard session
//!
//! The model owns the book, the active filter and the filtered view derived
//! from it, plus the quiz mode and attempt. Every mutating operation
//! recomputes the filtered view before returning, so reads are always current.

use thiserror::Error;

use super::attempt::{Attempt, AttemptAnswer, AttemptPhase, AttemptSummary};
use super::book::FlashcardBook;
use super::models::{Flashcard, Index};
use super::predicate::FlashcardPredicate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("This flashcard already exists in the collection")]
    DuplicateEntry,

    #[error("The flashcard does not exist in the collection")]
    NotFound,

    #[error("{0}")]
    InvalidMode(&'static str),

    #[error("There are no flashcards to attempt")]
    EmptyAttempt,
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    book: FlashcardBook,
    filter: FlashcardPredicate,
    /// Positions in `book` matching `filter`, ascending
    filtered: Vec<usize>,
    quiz_mode: bool,
    attempt: Option<Attempt>,
}

impl Model {
    pub fn new(book: FlashcardBook) -> Self {
        let mut model = Self {
            book,
            ..Self::default()
        };
        model.refresh_filtered();
        model
    }

    fn refresh_filtered(&mut self) {
        self.filtered = self
            .book
            .flashcards()
            .iter()
            .enumerate()
            .filter(|(_, card)| self.filter.test(card))
            .map(|(i, _)| i)
            .collect();
        log::debug!(
            "Filtered view refreshed: {} of {} flashcards",
            self.filtered.len(),
            self.book.len()
        );
    }

    // ==================== Collection ====================

    pub fn book(&self) -> &FlashcardBook {
        &self.book
    }

    /// Replace the whole collection, e.g. after loading from storage.
    /// The active filter is kept and any attempt is discarded.
    pub fn set_book(&mut self, book: FlashcardBook) {
        self.book = book;
        self.attempt = None;
        self.refresh_filtered();
    }

    pub fn full_list(&self) -> &[Flashcard] {
        self.book.flashcards()
    }

    pub fn has_flashcard(&self, card: &Flashcard) -> bool {
        self.book.contains(card)
    }

    pub fn add(&mut self, card: Flashcard) -> Result<()> {
        self.book.add(card)?;
        self.refresh_filtered();
        Ok(())
    }

    pub fn delete(&mut self, card: &Flashcard) -> Result<()> {
        self.book.remove(card)?;
        self.refresh_filtered();
        Ok(())
    }

    pub fn replace(&mut self, old: &Flashcard, new: Flashcard) -> Result<()> {
        self.book.replace(old, new)?;
        self.refresh_filtered();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.book.clear();
        self.refresh_filtered();
    }

    // ==================== Filtered view ====================

    pub fn filter(&self) -> &FlashcardPredicate {
        &self.filter
    }

    pub fn update_filter(&mut self, predicate: FlashcardPredicate) {
        log::debug!("Updating filter to {:?}", predicate);
        self.filter = predicate;
        self.refresh_filtered();
    }

    pub fn filtered_list(&self) -> Vec<&Flashcard> {
        let cards = self.book.flashcards();
        self.filtered.iter().map(|&i| &cards[i]).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Card at a position in the filtered view
    pub fn filtered_card(&self, index: Index) -> Option<&Flashcard> {
        self.filtered
            .get(index.zero_based())
            .map(|&i| &self.book.flashcards()[i])
    }

    // ==================== Quiz ====================

    pub fn is_quiz_mode(&self) -> bool {
        self.quiz_mode
    }

    pub fn flip_quiz_mode(&mut self) {
        self.quiz_mode = !self.quiz_mode;
        if !self.quiz_mode {
            self.attempt = None;
        }
        log::info!("Quiz mode {}", if self.quiz_mode { "on" } else { "off" });
    }

    pub fn attempt(&self) -> Option<&Attempt> {
        self.attempt.as_ref()
    }

    pub fn attempt_phase(&self) -> AttemptPhase {
        self.attempt
            .as_ref()
            .map_or(AttemptPhase::Idle, Attempt::phase)
    }

    /// Begin an attempt over the cards currently in the filtered view.
    /// An attempt that is still in progress is left as it is.
    pub fn start_attempt(&mut self) -> Result<()> {
        if !self.quiz_mode {
            return Err(ModelError::InvalidMode(
                "Attempts can only be started in quiz mode",
            ));
        }
        if self.attempt_phase() == AttemptPhase::InProgress {
            return Ok(());
        }
        if self.filtered.is_empty() {
            return Err(ModelError::EmptyAttempt);
        }

        let cards: Vec<Flashcard> = self.filtered_list().into_iter().cloned().collect();
        log::info!("Starting attempt over {} flashcards", cards.len());
        self.attempt = Some(Attempt::new(cards));
        Ok(())
    }

    /// Grade a response to the current card of the running attempt
    pub fn answer_current(&mut self, response: &str) -> Result<AttemptAnswer> {
        self.attempt
            .as_mut()
            .and_then(|attempt| attempt.answer(response).cloned())
            .ok_or(ModelError::InvalidMode("There is no flashcard waiting for an answer"))
    }

    /// Finish the attempt and return its tally
    pub fn end_attempt(&mut self) -> Result<AttemptSummary> {
        let attempt = self
            .attempt
            .take()
            .ok_or(ModelError::InvalidMode("No attempt has been started"))?;
        let summary = attempt.summary();
        log::info!(
            "Attempt ended: {}/{} correct ({} answered)",
            summary.correct,
            summary.total,
            summary.answered
        );
        Ok(summary)
    }
}
