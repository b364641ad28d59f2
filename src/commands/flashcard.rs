//! Commands that add, edit and remove flashcards

use std::collections::BTreeSet;

use crate::flashcards::{Answer, Flashcard, Index, Model, Priority, Question, Tag};

use super::{CommandError, CommandOutcome, CommandResult};

pub const MESSAGE_INVALID_INDEX: &str = "The flashcard index provided is invalid";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

fn card_at(model: &Model, index: Index) -> CommandResult<Flashcard> {
    model
        .filtered_card(index)
        .cloned()
        .ok_or_else(|| CommandError::NotFound(MESSAGE_INVALID_INDEX.to_string()))
}

// ==================== Add ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    to_add: Flashcard,
}

impl AddCommand {
    pub fn new(to_add: Flashcard) -> Self {
        Self { to_add }
    }

    pub(super) fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        model.add(self.to_add.clone())?;
        log::info!("Added flashcard: {}", self.to_add.question());
        Ok(CommandOutcome::mutation(format!(
            "New flashcard added: {}",
            self.to_add
        )))
    }
}

// ==================== Delete ====================

/// Deletes the card at a position in the displayed list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    target: Index,
}

impl DeleteCommand {
    pub fn new(target: Index) -> Self {
        Self { target }
    }

    pub(super) fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        let card = card_at(model, self.target)?;
        model.delete(&card)?;
        log::info!("Deleted flashcard: {}", card.question());
        Ok(CommandOutcome::mutation(format!("Deleted Flashcard: {}", card)))
    }
}

// ==================== Edit ====================

/// Fields to change on a flashcard. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditFlashcardDescriptor {
    pub question: Option<Question>,
    pub answer: Option<Answer>,
    pub tags: Option<BTreeSet<Tag>>,
    pub priority: Option<Priority>,
}

impl EditFlashcardDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.question.is_some()
            || self.answer.is_some()
            || self.tags.is_some()
            || self.priority.is_some()
    }

    /// The edited copy of `card`
    pub fn apply(&self, card: &Flashcard) -> Flashcard {
        Flashcard::new(
            self.question.clone().unwrap_or_else(|| card.question().clone()),
            self.answer.clone().unwrap_or_else(|| card.answer().clone()),
            self.tags.clone().unwrap_or_else(|| card.tags().clone()),
            self.priority.unwrap_or(card.priority()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    target: Index,
    descriptor: EditFlashcardDescriptor,
}

impl EditCommand {
    pub fn new(target: Index, descriptor: EditFlashcardDescriptor) -> Self {
        Self { target, descriptor }
    }

    pub(super) fn execute(&self, model: &mut Model) -> CommandResult<CommandOutcome> {
        if !self.descriptor.is_any_field_edited() {
            return Err(CommandError::Validation(MESSAGE_NOT_EDITED.to_string()));
        }

        let original = card_at(model, self.target)?;
        let edited = self.descriptor.apply(&original);
        model.replace(&original, edited.clone())?;
        log::info!("Edited flashcard: {}", edited.question());
        Ok(CommandOutcome::mutation(format!("Edited Flashcard: {}", edited)))
    }
}

// ==================== Clear ====================

pub(super) fn clear(model: &mut Model) -> CommandResult<CommandOutcome> {
    let removed = model.full_list().len();
    model.clear();
    log::info!("Cleared {} flashcards", removed);
    Ok(CommandOutcome::mutation("Flashcard book has been cleared!"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_helpers::{assert_command_failure, assert_command_success};
    use crate::commands::Command;
    use crate::flashcards::testutil::{
        alice, benson, carl, elle, hoon, typical_book, FlashcardBuilder,
    };
    use crate::flashcards::{FlashcardPredicate, ModelError};

    fn index(one_based: usize) -> Index {
        Index::from_one_based(one_based).unwrap()
    }

    #[test]
    fn test_add_success() {
        let mut model = Model::new(typical_book());
        let mut expected = model.clone();
        expected.add(hoon()).unwrap();

        assert_command_success(
            Command::Add(AddCommand::new(hoon())),
            &mut model,
            &format!("New flashcard added: {}", hoon()),
            &expected,
        );
    }

    #[test]
    fn test_add_duplicate() {
        let mut model = Model::new(typical_book());
        assert_command_failure(
            Command::Add(AddCommand::new(alice())),
            &mut model,
            CommandError::DuplicateEntry,
        );
    }

    #[test]
    fn test_add_reports_mutation() {
        let mut model = Model::default();
        let outcome = Command::Add(AddCommand::new(hoon())).execute(&mut model).unwrap();
        assert!(outcome.mutated);
    }

    #[test]
    fn test_delete_unfiltered_list() {
        let mut model = Model::new(typical_book());
        let mut expected = model.clone();
        expected.delete(&benson()).unwrap();

        assert_command_success(
            Command::Delete(DeleteCommand::new(index(2))),
            &mut model,
            &format!("Deleted Flashcard: {}", benson()),
            &expected,
        );
    }

    #[test]
    fn test_delete_uses_filtered_index() {
        let mut model = Model::new(typical_book());
        model.update_filter(FlashcardPredicate::priority("medium"));
        let mut expected = model.clone();
        expected.delete(&elle()).unwrap();

        assert_command_success(
            Command::Delete(DeleteCommand::new(index(2))),
            &mut model,
            &format!("Deleted Flashcard: {}", elle()),
            &expected,
        );
        assert_eq!(model.filtered_list(), vec![&carl()]);
    }

    #[test]
    fn test_delete_index_out_of_range() {
        let mut model = Model::new(typical_book());
        model.update_filter(FlashcardPredicate::name("Alice"));
        assert_command_failure(
            Command::Delete(DeleteCommand::new(index(2))),
            &mut model,
            CommandError::NotFound(MESSAGE_INVALID_INDEX.to_string()),
        );
    }

    #[test]
    fn test_edit_all_fields() {
        let mut model = Model::new(typical_book());
        let descriptor = EditFlashcardDescriptor {
            question: Some(Question::new("Who is Alice Liddell?").unwrap()),
            answer: Some(Answer::new("A character").unwrap()),
            tags: Some([Tag::new("books").unwrap()].into_iter().collect()),
            priority: Some(Priority::High),
        };
        let edited = descriptor.apply(&alice());

        let mut expected = model.clone();
        expected.replace(&alice(), edited.clone()).unwrap();

        assert_command_success(
            Command::Edit(EditCommand::new(index(1), descriptor)),
            &mut model,
            &format!("Edited Flashcard: {}", edited),
            &expected,
        );
        assert_eq!(model.full_list()[0], edited);
    }

    #[test]
    fn test_edit_some_fields_keeps_the_rest() {
        let descriptor = EditFlashcardDescriptor {
            priority: Some(Priority::Medium),
            ..Default::default()
        };
        let edited = descriptor.apply(&benson());
        assert_eq!(edited, FlashcardBuilder::from(benson()).priority("medium").build());
    }

    #[test]
    fn test_edit_clears_tags() {
        let descriptor = EditFlashcardDescriptor {
            tags: Some(BTreeSet::new()),
            ..Default::default()
        };
        assert!(descriptor.apply(&benson()).tags().is_empty());
    }

    #[test]
    fn test_edit_without_fields() {
        let mut model = Model::new(typical_book());
        assert_command_failure(
            Command::Edit(EditCommand::new(index(1), EditFlashcardDescriptor::default())),
            &mut model,
            CommandError::Validation(MESSAGE_NOT_EDITED.to_string()),
        );
    }

    #[test]
    fn test_edit_onto_existing_card() {
        let mut model = Model::new(typical_book());
        let descriptor = EditFlashcardDescriptor {
            question: Some(benson().question().clone()),
            answer: Some(benson().answer().clone()),
            tags: Some(benson().tags().clone()),
            ..Default::default()
        };
        assert_command_failure(
            Command::Edit(EditCommand::new(index(1), descriptor)),
            &mut model,
            CommandError::from(ModelError::DuplicateEntry),
        );
    }

    #[test]
    fn test_edit_invalid_index() {
        let mut model = Model::new(typical_book());
        let descriptor = EditFlashcardDescriptor {
            priority: Some(Priority::High),
            ..Default::default()
        };
        assert_command_failure(
            Command::Edit(EditCommand::new(index(6), descriptor)),
            &mut model,
            CommandError::NotFound(MESSAGE_INVALID_INDEX.to_string()),
        );
    }

    #[test]
    fn test_clear() {
        let mut model = Model::new(typical_book());
        let outcome = Command::Clear.execute(&mut model).unwrap();
        assert_eq!(outcome.feedback_to_user, "Flashcard book has been cleared!");
        assert!(outcome.mutated);
        assert!(model.full_list().is_empty());
    }

    #[test]
    fn test_equality() {
        assert_eq!(AddCommand::new(alice()), AddCommand::new(alice()));
        assert_ne!(AddCommand::new(alice()), AddCommand::new(benson()));
        assert_eq!(DeleteCommand::new(index(1)), DeleteCommand::new(index(1)));
        assert_ne!(DeleteCommand::new(index(1)), DeleteCommand::new(index(2)));
    }
}
