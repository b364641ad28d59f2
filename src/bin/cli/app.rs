use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use flashbook_lib::{Config, FlashcardStorage, Model};

use crate::parser;

/// Result of one line of user input
#[derive(Debug)]
pub enum Feedback {
    Success(flashbook_lib::CommandOutcome),
    Failure(String),
}

/// Shared application state for CLI commands
pub struct App {
    pub config: Config,
    pub storage: FlashcardStorage,
    pub model: Model,
}

impl App {
    /// Load the config and the flashcard book.
    /// `data_file` overrides the location from the config.
    pub fn new(config_path: Option<&Path>, data_file: Option<PathBuf>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => match Config::default_path() {
                Some(path) => Config::load(&path).context("Failed to load config")?,
                None => Config::default(),
            },
        };

        let data_file = match data_file.or_else(|| config.data_file.clone()) {
            Some(path) => path,
            None => FlashcardStorage::default_path().context("Failed to get data directory")?,
        };

        let storage = FlashcardStorage::new(data_file);
        let book = storage.load().with_context(|| {
            format!("Failed to load flashcards from {}", storage.path().display())
        })?;

        Ok(Self {
            config,
            storage,
            model: Model::new(book),
        })
    }

    /// Parse and execute one line, saving the book if the command changed it.
    /// Bad input, rejected commands and failed saves are all reported as
    /// `Feedback::Failure`, so an interactive session keeps running.
    pub fn execute_line(&mut self, line: &str) -> Feedback {
        let command = match parser::parse_command(line) {
            Ok(command) => command,
            Err(err) => return Feedback::Failure(err.to_string()),
        };

        match command.execute(&mut self.model) {
            Ok(outcome) if outcome.mutated => match self.save() {
                Ok(()) => Feedback::Success(outcome),
                Err(err) => {
                    log::warn!("{:#}", err);
                    Feedback::Failure(format!(
                        "{}\nChanges were not saved: {:#}",
                        outcome.feedback_to_user, err
                    ))
                }
            },
            Ok(outcome) => Feedback::Success(outcome),
            Err(err) => {
                log::debug!("Command failed: {}", err);
                Feedback::Failure(err.to_string())
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.storage.save(self.model.book()).with_context(|| {
            format!("Failed to save flashcards to {}", self.storage.path().display())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_app() -> (App, TempDir) {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        let app = App::new(Some(&config_path), Some(temp.path().join("book.json"))).unwrap();
        (app, temp)
    }

    #[test]
    fn test_mutating_command_is_saved() {
        let (mut app, temp) = create_test_app();
        let feedback = app.execute_line("add q/Capital of Peru? a/Lima t/geo");
        assert!(matches!(feedback, Feedback::Success(_)));

        let reopened = App::new(
            Some(&temp.path().join("config.toml")),
            Some(temp.path().join("book.json")),
        )
        .unwrap();
        assert_eq!(reopened.model.full_list().len(), 1);
        assert_eq!(reopened.model.full_list()[0].answer().as_str(), "Lima");
    }

    #[test]
    fn test_find_does_not_write_file() {
        let (mut app, temp) = create_test_app();
        app.execute_line("find q/anything");
        assert!(!temp.path().join("book.json").exists());
    }

    #[test]
    fn test_failures_are_feedback() {
        let (mut app, _temp) = create_test_app();

        let unknown = app.execute_line("frobnicate");
        assert!(
            matches!(unknown, Feedback::Failure(message) if message.starts_with("Unknown command"))
        );

        let wrong_mode = app.execute_line("submit");
        assert!(matches!(wrong_mode, Feedback::Failure(_)));
    }

    #[test]
    fn test_data_file_from_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        let data_path = temp.path().join("from-config.json");
        std::fs::write(
            &config_path,
            format!("data_file = {:?}\n", data_path.to_string_lossy()),
        )
        .unwrap();

        let mut app = App::new(Some(&config_path), None).unwrap();
        assert_eq!(app.storage.path(), data_path.as_path());
        app.execute_line("add q/Q a/A");
        assert!(data_path.exists());
    }

    #[test]
    fn test_failed_save_is_feedback() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let mut app = App::new(
            Some(&temp.path().join("config.toml")),
            Some(blocker.join("book.json")),
        )
        .unwrap();

        let feedback = app.execute_line("add q/Q a/A");
        assert!(matches!(
            &feedback,
            Feedback::Failure(message)
                if message.starts_with("New flashcard added")
                    && message.contains("Changes were not saved")
        ));
        assert_eq!(app.model.full_list().len(), 1);

        // the session keeps accepting commands
        let listed = app.execute_line("list");
        assert!(matches!(listed, Feedback::Success(_)));
        assert!(app.save().is_err());
    }
}
