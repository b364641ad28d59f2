//! Quiz mode commands

use crate::flashcards::{AttemptPhase, Model};

use super::{CommandError, CommandOutcome, CommandResult};

pub const MESSAGE_ATTEMPT_IN_PROGRESS: &str =
    "An attempt is already in progress. Use `submit` to finish it first.";

fn question_prompt(model: &Model) -> Option<String> {
    let attempt = model.attempt()?;
    let card = attempt.current_card()?;
    Some(format!(
        "Question {}/{}: {}",
        attempt.position() + 1,
        attempt.total(),
        card.question()
    ))
}

/// Enters quiz mode if needed and starts an attempt over the listed cards
pub(super) fn start(model: &mut Model) -> CommandResult<CommandOutcome> {
    if model.attempt_phase() == AttemptPhase::InProgress {
        return Err(CommandError::InvalidMode(MESSAGE_ATTEMPT_IN_PROGRESS.to_string()));
    }

    let entered_quiz = !model.is_quiz_mode();
    if entered_quiz {
        model.flip_quiz_mode();
    }
    if let Err(err) = model.start_attempt() {
        if entered_quiz {
            model.flip_quiz_mode();
        }
        return Err(err.into());
    }

    let total = model.attempt().map_or(0, |a| a.total());
    let mut message = format!("Attempt started with {} flashcards.", total);
    if let Some(prompt) = question_prompt(model) {
        message.push('\n');
        message.push_str(&prompt);
    }
    Ok(CommandOutcome::message(message))
}

/// Submits a response to the current card of the running attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerCommand {
    response: String,
}

impl AnswerCommand {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }

    pub(super) fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        let graded = model.answer_current(&self.response)?;

        let mut message = if graded.correct {
            "Correct!".to_string()
        } else {
            format!("Wrong. The answer is: {}", graded.card.answer())
        };
        message.push('\n');
        match question_prompt(model) {
            Some(prompt) => message.push_str(&prompt),
            None => message.push_str("All flashcards answered. Use `submit` to see your score."),
        }
        Ok(CommandOutcome::message(message))
    }
}

/// Ends the attempt and reports the score
pub(super) fn submit(model: &mut Model) -> CommandResult<CommandOutcome> {
    let summary = model.end_attempt()?;
    let mut message = format!(
        "Attempt submitted: {}/{} correct.",
        summary.correct, summary.total
    );
    let unanswered = summary.total - summary.answered;
    if unanswered > 0 {
        message.push_str(&format!(" {} left unanswered.", unanswered));
    }
    Ok(CommandOutcome::message(message))
}

pub(super) fn flip_mode(model: &mut Model) -> CommandResult<CommandOutcome> {
    model.flip_quiz_mode();
    let message = if model.is_quiz_mode() {
        "Entered quiz mode. Use `start` to begin an attempt."
    } else {
        "Returned to browse mode."
    };
    Ok(CommandOutcome::message(message))
}
