//! Commands that act on the flashcard model
//!
//! The front end turns user input into a [`Command`] and calls
//! [`Command::execute`]. Each command is legal in browse mode, quiz mode or
//! both; running it in the wrong mode fails without touching the model.

mod attempt;
mod flashcard;
mod search;

use thiserror::Error;

use crate::flashcards::{FieldError, Model, ModelError};

pub use attempt::AnswerCommand;
pub use flashcard::{AddCommand, DeleteCommand, EditCommand, EditFlashcardDescriptor};
pub use search::FindCommand;

pub const HELP_MESSAGE: &str = "\
Browse mode:
  add q/QUESTION a/ANSWER [p/PRIORITY] [t/TAG]...   add a flashcard
  delete INDEX                                       delete the flashcard at INDEX
  edit INDEX [q/..] [a/..] [p/..] [t/..]...          edit flashcard INDEX (empty t/ clears tags)
  find [q/KEYWORD]... [t/KEYWORD]... [p/KEYWORD]...  show flashcards matching every keyword
  list                                               show all flashcards
  clear                                              delete every flashcard
Quiz mode:
  answer TEXT                                        answer the current flashcard
  submit                                             finish the attempt and show the score
Anywhere:
  start                                              start an attempt over the listed flashcards
  quiz                                               switch between browse and quiz mode
  help                                               show this message
  exit                                               leave the application";

/// A command rejected before or during execution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("This flashcard already exists in the collection")]
    DuplicateEntry,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidMode(String),

    #[error("{0}")]
    Validation(String),
}

impl From<ModelError> for CommandError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::DuplicateEntry => Self::DuplicateEntry,
            ModelError::NotFound => Self::NotFound(err.to_string()),
            ModelError::InvalidMode(message) => Self::InvalidMode(message.to_string()),
            ModelError::EmptyAttempt => Self::Validation(err.to_string()),
        }
    }
}

impl From<FieldError> for CommandError {
    fn from(err: FieldError) -> Self {
        Self::Validation(err.to_string())
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

/// What a successful command reports back to the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub feedback_to_user: String,
    pub show_help: bool,
    pub exit: bool,
    /// The flashcard book changed and should be saved
    pub mutated: bool,
}

impl CommandOutcome {
    pub fn message(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            show_help: false,
            exit: false,
            mutated: false,
        }
    }

    pub fn mutation(feedback_to_user: impl Into<String>) -> Self {
        Self {
            mutated: true,
            ..Self::message(feedback_to_user)
        }
    }
}

/// Modes in which a command may run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeRequirement {
    Browse,
    Quiz,
    Any,
}

impl ModeRequirement {
    pub fn permits(self, quiz_mode: bool) -> bool {
        match self {
            Self::Browse => !quiz_mode,
            Self::Quiz => quiz_mode,
            Self::Any => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Delete(DeleteCommand),
    Edit(EditCommand),
    Find(FindCommand),
    List,
    Clear,
    StartAttempt,
    Answer(AnswerCommand),
    SubmitAttempt,
    Quiz,
    Help,
    Exit,
}

impl Command {
    /// The word that invokes this command
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Delete(_) => "delete",
            Self::Edit(_) => "edit",
            Self::Find(_) => "find",
            Self::List => "list",
            Self::Clear => "clear",
            Self::StartAttempt => "start",
            Self::Answer(_) => "answer",
            Self::SubmitAttempt => "submit",
            Self::Quiz => "quiz",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    pub fn legal_modes(&self) -> ModeRequirement {
        match self {
            Self::Add(_)
            | Self::Delete(_)
            | Self::Edit(_)
            | Self::Find(_)
            | Self::List
            | Self::Clear => ModeRequirement::Browse,
            Self::Answer(_) | Self::SubmitAttempt => ModeRequirement::Quiz,
            Self::StartAttempt | Self::Quiz | Self::Help | Self::Exit => ModeRequirement::Any,
        }
    }

    pub fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        let quiz_mode = model.is_quiz_mode();
        if !self.legal_modes().permits(quiz_mode) {
            log::debug!("Rejected `{}` in {} mode", self.word(), mode_name(quiz_mode));
            return Err(CommandError::InvalidMode(if quiz_mode {
                format!(
                    "`{}` is not available in quiz mode. Use `quiz` to return to browse mode.",
                    self.word()
                )
            } else {
                format!(
                    "`{}` is only available in quiz mode. Use `start` to begin an attempt.",
                    self.word()
                )
            }));
        }

        log::debug!("Executing `{}`", self.word());
        match self {
            Self::Add(command) => command.execute(model),
            Self::Delete(command) => command.execute(model),
            Self::Edit(command) => command.execute(model),
            Self::Find(command) => command.execute(model),
            Self::List => search::list(model),
            Self::Clear => flashcard::clear(model),
            Self::StartAttempt => attempt::start(model),
            Self::Answer(command) => command.execute(model),
            Self::SubmitAttempt => attempt::submit(model),
            Self::Quiz => attempt::flip_mode(model),
            Self::Help => Ok(CommandOutcome {
                show_help: true,
                ..CommandOutcome::message(HELP_MESSAGE)
            }),
            Self::Exit => Ok(CommandOutcome {
                exit: true,
                ..CommandOutcome::message("Exiting Flashbook as requested ...")
            }),
        }
    }
}

fn mode_name(quiz_mode: bool) -> &'static str {
    if quiz_mode {
        "quiz"
    } else {
        "browse"
    }
}

/// Helpers shared by the command tests
#[cfg(test)]
pub(crate) mod test_helpers {
    use super::*;

    /// Run `command` and check the message and the resulting model
    pub fn assert_command_success(
        command: Command,
        model: &mut Model,
        expected_message: &str,
        expected_model: &Model,
    ) {
        let outcome = command.execute(model).unwrap();
        assert_eq!(outcome.feedback_to_user, expected_message);
        assert_eq!(model, expected_model);
    }

    /// Run `command`, check it fails with `expected`, and that the model is untouched
    pub fn assert_command_failure(command: Command, model: &mut Model, expected: CommandError) {
        let before = model.clone();
        assert_eq!(command.execute(model), Err(expected));
        assert_eq!(model, &before);
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::assert_command_failure;
    use super::*;
    use crate::flashcards::testutil::{hoon, typical_book};
    use crate::flashcards::{FlashcardPredicate, Index};

    fn browse_only_commands() -> Vec<Command> {
        vec![
            Command::Add(AddCommand::new(hoon())),
            Command::Delete(DeleteCommand::new(Index::from_zero_based(0))),
            Command::Find(FindCommand::new(vec![FlashcardPredicate::name("Alice")])),
            Command::List,
            Command::Clear,
        ]
    }

    #[test]
    fn test_browse_commands_rejected_in_quiz_mode() {
        let mut model = Model::new(typical_book());
        model.flip_quiz_mode();
        model.start_attempt().unwrap();

        for command in browse_only_commands() {
            let expected = CommandError::InvalidMode(format!(
                "`{}` is not available in quiz mode. Use `quiz` to return to browse mode.",
                command.word()
            ));
            assert_command_failure(command, &mut model, expected);
        }
    }

    #[test]
    fn test_quiz_commands_rejected_in_browse_mode() {
        let mut model = Model::new(typical_book());
        for command in [Command::Answer(AnswerCommand::new("x")), Command::SubmitAttempt] {
            let word = command.word();
            assert_command_failure(
                command,
                &mut model,
                CommandError::InvalidMode(format!(
                    "`{}` is only available in quiz mode. Use `start` to begin an attempt.",
                    word
                )),
            );
        }
    }

    #[test]
    fn test_help_and_exit_work_in_both_modes() {
        let mut model = Model::new(typical_book());
        for _ in 0..2 {
            let help = Command::Help.execute(&mut model).unwrap();
            assert!(help.show_help && !help.exit);
            assert_eq!(help.feedback_to_user, HELP_MESSAGE);

            let exit = Command::Exit.execute(&mut model).unwrap();
            assert!(exit.exit && !exit.mutated);

            model.flip_quiz_mode();
        }
    }

    #[test]
    fn test_model_errors_map_to_command_errors() {
        assert_eq!(CommandError::from(ModelError::DuplicateEntry), CommandError::DuplicateEntry);
        assert!(matches!(CommandError::from(ModelError::NotFound), CommandError::NotFound(_)));
        assert_eq!(
            CommandError::from(ModelError::InvalidMode("nope")),
            CommandError::InvalidMode("nope".to_string())
        );
        assert_eq!(
            CommandError::from(ModelError::EmptyAttempt),
            CommandError::Validation("There are no flashcards to attempt".to_string())
        );
        assert_eq!(
            CommandError::from(FieldError::BlankAnswer),
            CommandError::Validation("Answers should not be blank".to_string())
        );
    }
}
