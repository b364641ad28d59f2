//! Flashcard collection for Flashbook
//!
//! This module provides:
//! - The flashcard value type and its validated fields
//! - Predicates for filtering the displayed list
//! - The book (authoritative card list) and the session model
//! - Quiz attempts
//! - JSON storage of the book

pub mod attempt;
pub mod book;
pub mod model;
pub mod models;
pub mod predicate;
pub mod storage;

#[cfg(test)]
pub(crate) mod testutil;

pub use attempt::{Attempt, AttemptAnswer, AttemptPhase, AttemptSummary};
pub use book::FlashcardBook;
pub use model::{Model, ModelError};
pub use models::*;
pub use predicate::FlashcardPredicate;
pub use storage::{FlashcardStorage, FlashcardStorageError};
