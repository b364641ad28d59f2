//! Commands that change which flashcards are listed

use crate::flashcards::{FlashcardPredicate, Model};

use super::{CommandOutcome, CommandResult};

pub const MESSAGE_LISTED_ALL: &str = "Listed all flashcards";

pub fn listed_overview(count: usize) -> String {
    format!("{} flashcards listed!", count)
}

/// Shows the flashcards matching every one of its predicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicates: Vec<FlashcardPredicate>,
}

impl FindCommand {
    pub fn new(predicates: Vec<FlashcardPredicate>) -> Self {
        Self { predicates }
    }

    pub fn predicates(&self) -> &[FlashcardPredicate] {
        &self.predicates
    }

    pub(super) fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        model.update_filter(FlashcardPredicate::all_of(self.predicates.clone()));
        let count = model.filtered_len();
        log::info!("Find matched {} flashcards", count);
        Ok(CommandOutcome::message(listed_overview(count)))
    }
}

pub(super) fn list(model: &mut Model) -> CommandResult<CommandOutcome> {
    model.update_filter(FlashcardPredicate::ShowAll);
    Ok(CommandOutcome::message(MESSAGE_LISTED_ALL))
}
