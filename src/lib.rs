//! Flashbook: a flashcard collection with filtered browsing and quiz attempts.
//!
//! The library holds the model and the commands that act on it. Turning user
//! input into commands and showing the results is left to the front end
//! (see the `flashbook-cli` binary).

pub mod commands;
pub mod config;
pub mod flashcards;

pub use commands::{Command, CommandError, CommandOutcome};
pub use config::Config;
pub use flashcards::{FlashcardBook, FlashcardStorage, Model};
