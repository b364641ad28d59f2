//! The authoritative, duplicate-free list of flashcards

use serde::{Deserialize, Serialize};

use super::model::ModelError;
use super::models::Flashcard;

/// Ordered flashcards in insertion order. No two entries are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardBook {
    flashcards: Vec<Flashcard>,
}

impl FlashcardBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from loaded cards, rejecting duplicates.
    pub fn from_cards(cards: impl IntoIterator<Item = Flashcard>) -> Result<Self, ModelError> {
        let mut book = Self::new();
        for card in cards {
            book.add(card)?;
        }
        Ok(book)
    }

    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }

    pub fn contains(&self, card: &Flashcard) -> bool {
        self.flashcards.contains(card)
    }

    fn position(&self, card: &Flashcard) -> Result<usize, ModelError> {
        self.flashcards
            .iter()
            .position(|c| c == card)
            .ok_or(ModelError::NotFound)
    }

    pub fn add(&mut self, card: Flashcard) -> Result<(), ModelError> {
        if self.contains(&card) {
            return Err(ModelError::DuplicateEntry);
        }
        self.flashcards.push(card);
        Ok(())
    }

    pub fn remove(&mut self, card: &Flashcard) -> Result<Flashcard, ModelError> {
        let pos = self.position(card)?;
        Ok(self.flashcards.remove(pos))
    }

    /// Replace `old` with `new` at the same position
    pub fn replace(&mut self, old: &Flashcard, new: Flashcard) -> Result<(), ModelError> {
        let pos = self.position(old)?;
        if old != &new && self.contains(&new) {
            return Err(ModelError::DuplicateEntry);
        }
        self.flashcards[pos] = new;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.flashcards.clear();
    }
}

impl<'de> Deserialize<'de> for FlashcardBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            flashcards: Vec<Flashcard>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::from_cards(raw.flashcards).map_err(serde::de::Error::custom)
    }
}
