//! Typical flashcards shared by the unit tests

use super::book::FlashcardBook;
use super::models::{Answer, Flashcard, Priority, Question, Tag};

pub struct FlashcardBuilder {
    question: String,
    answer: String,
    tags: Vec<String>,
    priority: String,
}

impl FlashcardBuilder {
    pub fn new() -> Self {
        Self {
            question: "What is the default question?".to_string(),
            answer: "The default answer".to_string(),
            tags: Vec::new(),
            priority: "low".to_string(),
        }
    }

    pub fn question(mut self, question: &str) -> Self {
        self.question = question.to_string();
        self
    }

    pub fn answer(mut self, answer: &str) -> Self {
        self.answer = answer.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn priority(mut self, priority: &str) -> Self {
        self.priority = priority.to_string();
        self
    }

    pub fn build(self) -> Flashcard {
        Flashcard::new(
            Question::new(&self.question).unwrap(),
            Answer::new(&self.answer).unwrap(),
            self.tags.iter().map(|t| Tag::new(t).unwrap()),
            self.priority.parse::<Priority>().unwrap(),
        )
    }
}

impl From<Flashcard> for FlashcardBuilder {
    fn from(card: Flashcard) -> Self {
        Self {
            question: card.question().to_string(),
            answer: card.answer().to_string(),
            tags: card.tags().iter().map(|t| t.to_string()).collect(),
            priority: card.priority().to_string(),
        }
    }
}

pub fn alice() -> Flashcard {
    FlashcardBuilder::new()
        .question("Who is Alice Pauline?")
        .answer("A friend")
        .tags(&["friends"])
        .priority("low")
        .build()
}

pub fn benson() -> Flashcard {
    FlashcardBuilder::new()
        .question("Who is Benson Meier?")
        .answer("A colleague")
        .tags(&["owesMoney", "friends"])
        .priority("low")
        .build()
}

pub fn carl() -> Flashcard {
    FlashcardBuilder::new()
        .question("What is the capital of France?")
        .answer("Paris")
        .tags(&["geography"])
        .priority("medium")
        .build()
}

pub fn daniel() -> Flashcard {
    FlashcardBuilder::new()
        .question("What is 2 + 2?")
        .answer("4")
        .tags(&["math"])
        .priority("high")
        .build()
}

pub fn elle() -> Flashcard {
    FlashcardBuilder::new()
        .question("What does CPU stand for?")
        .answer("Central Processing Unit")
        .tags(&["cs", "acronyms"])
        .priority("medium")
        .build()
}

/// Not part of the typical book
pub fn hoon() -> Flashcard {
    FlashcardBuilder::new()
        .question("What is the boiling point of water?")
        .answer("100 degrees Celsius")
        .tags(&["science"])
        .priority("high")
        .build()
}

pub fn typical_cards() -> Vec<Flashcard> {
    vec![alice(), benson(), carl(), daniel(), elle()]
}

pub fn typical_book() -> FlashcardBook {
    let mut book = FlashcardBook::new();
    for card in typical_cards() {
        book.add(card).unwrap();
    }
    book
}
