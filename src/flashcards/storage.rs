//! Storage operations for flashcards
//!
//! The whole book lives in a single JSON file:
//! ```text
//! ~/.local/share/flashbook/
//! └── flashbook.json   # { "flashcards": [ ... ] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::book::FlashcardBook;

#[derive(Error, Debug)]
pub enum FlashcardStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, FlashcardStorageError>;

/// Reads and writes the flashcard book
pub struct FlashcardStorage {
    path: PathBuf,
}

impl FlashcardStorage {
    pub const DEFAULT_FILE_NAME: &'static str = "flashbook.json";

    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default data directory (e.g., ~/.local/share/flashbook)
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("flashbook"))
            .ok_or(FlashcardStorageError::DataDirNotFound)
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::default_data_dir()?.join(Self::DEFAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the book. A missing file is an empty book.
    pub fn load(&self) -> Result<FlashcardBook> {
        if !self.path.exists() {
            log::info!("No data file at {:?}, starting with an empty book", self.path);
            return Ok(FlashcardBook::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let book: FlashcardBook = serde_json::from_str(&content)?;
        log::info!("Loaded {} flashcards from {:?}", book.len(), self.path);
        Ok(book)
    }

    /// Write the book, creating parent directories as needed
    pub fn save(&self, book: &FlashcardBook) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(book)?)?;
        log::debug!("Saved {} flashcards to {:?}", book.len(), self.path);
        Ok(())
    }
}
