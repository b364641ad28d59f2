//! Filters over flashcards
//!
//! Keyword predicates match when the keyword, trimmed and lowercased, is a
//! substring of the lowercased field. A blank keyword never matches.

use super::models::Flashcard;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlashcardPredicate {
    /// Matches every card
    #[default]
    ShowAll,
    /// Keyword appears in the question
    NameContains(String),
    /// Keyword appears in at least one tag
    TagContains(String),
    /// Keyword appears in the priority name
    PriorityContains(String),
    /// Every sub-predicate matches. An empty list matches every card.
    ContainsAll(Vec<FlashcardPredicate>),
}

impl FlashcardPredicate {
    pub fn name(keyword: &str) -> Self {
        Self::NameContains(keyword.to_string())
    }

    pub fn tag(keyword: &str) -> Self {
        Self::TagContains(keyword.to_string())
    }

    pub fn priority(keyword: &str) -> Self {
        Self::PriorityContains(keyword.to_string())
    }

    /// Combine a list of predicates the way `find` does: a single predicate is
    /// used as is, several are wrapped in `ContainsAll`, none shows everything.
    pub fn all_of(mut predicates: Vec<FlashcardPredicate>) -> Self {
        match predicates.len() {
            0 => Self::ShowAll,
            1 => predicates.remove(0),
            _ => Self::ContainsAll(predicates),
        }
    }

    pub fn test(&self, card: &Flashcard) -> bool {
        match self {
            Self::ShowAll => true,
            Self::NameContains(keyword) => contains_keyword(card.question().as_str(), keyword),
            Self::TagContains(keyword) => card
                .tags()
                .iter()
                .any(|tag| contains_keyword(tag.as_str(), keyword)),
            Self::PriorityContains(keyword) => {
                contains_keyword(card.priority().as_str(), keyword)
            }
            Self::ContainsAll(predicates) => predicates.iter().all(|p| p.test(card)),
        }
    }
}

fn contains_keyword(text: &str, keyword: &str) -> bool {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return false;
    }
    text.to_lowercase().contains(&keyword)
}
