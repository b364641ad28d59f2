use flashbook_lib::flashcards::{Flashcard, Priority};
use flashbook_lib::Model;

use crate::app::Feedback;

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";
    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
    pub const CYAN: &'static str = "\x1b[36m";
}

fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => Color::GREEN,
        Priority::Medium => Color::YELLOW,
        Priority::High => Color::RED,
    }
}

/// Render one numbered card
pub fn render_card(
    number: usize,
    card: &Flashcard,
    reveal_answer: bool,
    use_color: bool,
) -> Vec<String> {
    let mut header = format!(
        "{:>3}. {} {}",
        number,
        paint(card.question().as_str(), Color::BOLD, use_color),
        paint(
            &format!("[{}]", card.priority()),
            priority_color(card.priority()),
            use_color
        ),
    );
    for tag in card.tags() {
        header.push(' ');
        header.push_str(&paint(&format!("#{}", tag), Color::CYAN, use_color));
    }

    let mut lines = vec![header];
    if reveal_answer {
        let answer = format!("Answer: {}", card.answer());
        let wrapped = wrap_lines(&answer, "     ", 80);
        lines.extend(wrapped.iter().map(|line| paint(line, Color::DIM, use_color)));
    }
    lines
}

/// Render the filtered view, numbered the way `delete` and `edit` expect
pub fn render_card_list(cards: &[&Flashcard], reveal_answers: bool, use_color: bool) -> String {
    if cards.is_empty() {
        return "No flashcards to show.".to_string();
    }

    let mut lines = Vec::new();
    for (i, card) in cards.iter().enumerate() {
        lines.extend(render_card(i + 1, card, reveal_answers, use_color));
    }
    lines.join("\n")
}

pub fn render_feedback(feedback: &Feedback, use_color: bool) -> String {
    match feedback {
        Feedback::Success(outcome) => outcome.feedback_to_user.clone(),
        Feedback::Failure(message) => paint(message, Color::RED, use_color),
    }
}

/// Prompt showing the current mode and attempt progress
pub fn prompt(model: &Model) -> String {
    match model.attempt() {
        Some(attempt) if !attempt.is_complete() => {
            format!("quiz {}/{}> ", attempt.position() + 1, attempt.total())
        }
        Some(_) => "quiz done> ".to_string(),
        None if model.is_quiz_mode() => "quiz> ".to_string(),
        None => "> ".to_string(),
    }
}

/// Word-wrap `text` to `max_width` columns, indenting every line with `indent`.
/// Width is counted in chars so accented answers wrap at the same column.
fn wrap_lines(text: &str, indent: &str, max_width: usize) -> Vec<String> {
    let width = max_width.saturating_sub(indent.chars().count()).max(1);
    let mut wrapped = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if current_width > 0 && current_width + 1 + word_width > width {
                wrapped.push(format!("{}{}", indent, current));
                current.clear();
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
        wrapped.push(format!("{}{}", indent, current));
    }

    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashbook_lib::flashcards::{Answer, FlashcardBook, Question, Tag};
    use flashbook_lib::CommandOutcome;

    fn card() -> Flashcard {
        Flashcard::new(
            Question::new("Capital of Peru?").unwrap(),
            Answer::new("Lima").unwrap(),
            [Tag::new("geo").unwrap()],
            Priority::High,
        )
    }

    #[test]
    fn test_render_card_plain() {
        let lines = render_card(1, &card(), true, false);
        assert_eq!(lines, vec!["  1. Capital of Peru? [high] #geo", "     Answer: Lima"]);
    }

    #[test]
    fn test_render_card_hides_answer() {
        let lines = render_card(12, &card(), false, false);
        assert_eq!(lines, vec![" 12. Capital of Peru? [high] #geo"]);
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_card_list(&[], true, false), "No flashcards to show.");
    }

    #[test]
    fn test_failure_is_red_with_color() {
        let feedback = Feedback::Failure("nope".to_string());
        assert_eq!(render_feedback(&feedback, true), "\x1b[31mnope\x1b[0m");
        assert_eq!(render_feedback(&feedback, false), "nope");

        let success = Feedback::Success(CommandOutcome::message("ok"));
        assert_eq!(render_feedback(&success, true), "ok");
    }

    #[test]
    fn test_prompt_follows_mode() {
        let mut model = Model::new(FlashcardBook::from_cards([card()]).unwrap());
        assert_eq!(prompt(&model), "> ");
        model.flip_quiz_mode();
        assert_eq!(prompt(&model), "quiz> ");
        model.start_attempt().unwrap();
        assert_eq!(prompt(&model), "quiz 1/1> ");
        model.answer_current("Lima").unwrap();
        assert_eq!(prompt(&model), "quiz done> ");
    }

    #[test]
    fn test_wrap_lines() {
        let lines = wrap_lines("one two three four", "  ", 12);
        assert_eq!(lines, vec!["  one two", "  three four"]);
    }

    #[test]
    fn test_wrap_lines_counts_chars() {
        // "crème brûlée" is 12 chars but 14 bytes
        let lines = wrap_lines("crème brûlée au café", "", 12);
        assert_eq!(lines, vec!["crème brûlée", "au café"]);
    }
}
