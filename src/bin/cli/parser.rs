//! Turns a typed command line into a [`Command`]
//!
//! Arguments are introduced by prefixes (`q/`, `a/`, `t/`, `p/`) that must
//! start the input or follow whitespace. Text before the first prefix is the
//! preamble (an index for `delete` and `edit`).

use std::collections::BTreeSet;

use thiserror::Error;

use flashbook_lib::commands::{
    AddCommand, AnswerCommand, DeleteCommand, EditCommand, EditFlashcardDescriptor, FindCommand,
};
use flashbook_lib::flashcards::{
    Answer, FieldError, Flashcard, FlashcardPredicate, Index, Priority, Question, Tag,
};
use flashbook_lib::Command;

const PREFIX_QUESTION: &str = "q/";
const PREFIX_ANSWER: &str = "a/";
const PREFIX_TAG: &str = "t/";
const PREFIX_PRIORITY: &str = "p/";
const PREFIXES: [&str; 4] = [PREFIX_QUESTION, PREFIX_ANSWER, PREFIX_TAG, PREFIX_PRIORITY];

const USAGE_ADD: &str = "add q/QUESTION a/ANSWER [p/PRIORITY] [t/TAG]...";
const USAGE_DELETE: &str = "delete INDEX (a positive number)";
const USAGE_EDIT: &str = "edit INDEX [q/QUESTION] [a/ANSWER] [p/PRIORITY] [t/TAG]...";
const USAGE_FIND: &str = "find [q/KEYWORD]... [t/KEYWORD]... [p/KEYWORD]...";
const USAGE_ANSWER: &str = "answer TEXT";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0}. Type `help` to see the available commands.")]
    UnknownCommand(String),

    #[error("Invalid command format! Usage: {0}")]
    InvalidFormat(&'static str),

    #[error(transparent)]
    Field(#[from] FieldError),
}

type Result<T> = std::result::Result<T, ParseError>;

/// Prefixed arguments in the order they were typed
struct Arguments {
    preamble: String,
    values: Vec<(&'static str, String)>,
}

impl Arguments {
    fn tokenize(args: &str) -> Self {
        let mut starts: Vec<(usize, &'static str)> = Vec::new();
        let mut after_space = true;
        for (i, c) in args.char_indices() {
            if after_space {
                if let Some(prefix) = PREFIXES.iter().copied().find(|p| args[i..].starts_with(p)) {
                    starts.push((i, prefix));
                }
            }
            after_space = c.is_whitespace();
        }

        let preamble_end = starts.first().map_or(args.len(), |(i, _)| *i);
        let values = starts
            .iter()
            .enumerate()
            .map(|(n, (start, prefix))| {
                let end = starts.get(n + 1).map_or(args.len(), |(next, _)| *next);
                (*prefix, args[start + prefix.len()..end].trim().to_string())
            })
            .collect();

        Self {
            preamble: args[..preamble_end].trim().to_string(),
            values,
        }
    }

    fn all(&self, prefix: &'static str) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .filter(move |(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    /// The last value given for `prefix`
    fn last(&self, prefix: &'static str) -> Option<&str> {
        self.all(prefix).last()
    }

    fn has(&self, prefix: &'static str) -> bool {
        self.all(prefix).next().is_some()
    }
}

pub fn parse_command(input: &str) -> Result<Command> {
    let input = input.trim();
    let (word, args) = match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (input, ""),
    };

    match word {
        "add" => parse_add(args),
        "delete" => parse_index(args, USAGE_DELETE).map(|i| Command::Delete(DeleteCommand::new(i))),
        "edit" => parse_edit(args),
        "find" => parse_find(args),
        "list" => Ok(Command::List),
        "clear" => Ok(Command::Clear),
        "start" => Ok(Command::StartAttempt),
        "answer" => parse_answer(args),
        "submit" => Ok(Command::SubmitAttempt),
        "quiz" => Ok(Command::Quiz),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand(word.to_string())),
    }
}

fn parse_tags<'a>(values: impl Iterator<Item = &'a str>) -> Result<BTreeSet<Tag>> {
    values
        .filter(|v| !v.is_empty())
        .map(|v| Tag::new(v).map_err(ParseError::from))
        .collect()
}

fn parse_add(args: &str) -> Result<Command> {
    let arguments = Arguments::tokenize(args);
    let (Some(question), Some(answer)) = (
        arguments.last(PREFIX_QUESTION),
        arguments.last(PREFIX_ANSWER),
    ) else {
        return Err(ParseError::InvalidFormat(USAGE_ADD));
    };
    if !arguments.preamble.is_empty() {
        return Err(ParseError::InvalidFormat(USAGE_ADD));
    }

    let priority = match arguments.last(PREFIX_PRIORITY) {
        Some(p) => p.parse::<Priority>()?,
        None => Priority::default(),
    };
    let card = Flashcard::new(
        Question::new(question)?,
        Answer::new(answer)?,
        parse_tags(arguments.all(PREFIX_TAG))?,
        priority,
    );
    Ok(Command::Add(AddCommand::new(card)))
}

fn parse_index(preamble: &str, usage: &'static str) -> Result<Index> {
    preamble
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidFormat(usage))
}

fn parse_edit(args: &str) -> Result<Command> {
    let arguments = Arguments::tokenize(args);
    let index = parse_index(&arguments.preamble, USAGE_EDIT)?;

    let mut descriptor = EditFlashcardDescriptor::default();
    if let Some(question) = arguments.last(PREFIX_QUESTION) {
        descriptor.question = Some(Question::new(question)?);
    }
    if let Some(answer) = arguments.last(PREFIX_ANSWER) {
        descriptor.answer = Some(Answer::new(answer)?);
    }
    if let Some(priority) = arguments.last(PREFIX_PRIORITY) {
        descriptor.priority = Some(priority.parse()?);
    }
    if arguments.has(PREFIX_TAG) {
        descriptor.tags = Some(parse_tags(arguments.all(PREFIX_TAG))?);
    }
    Ok(Command::Edit(EditCommand::new(index, descriptor)))
}

fn parse_find(args: &str) -> Result<Command> {
    let arguments = Arguments::tokenize(args);
    if !arguments.preamble.is_empty() || arguments.has(PREFIX_ANSWER) {
        return Err(ParseError::InvalidFormat(USAGE_FIND));
    }

    let predicates = arguments
        .values
        .iter()
        .map(|(prefix, keyword)| match *prefix {
            PREFIX_TAG => FlashcardPredicate::tag(keyword),
            PREFIX_PRIORITY => FlashcardPredicate::priority(keyword),
            _ => FlashcardPredicate::name(keyword),
        })
        .collect();
    Ok(Command::Find(FindCommand::new(predicates)))
}

fn parse_answer(args: &str) -> Result<Command> {
    if args.trim().is_empty() {
        return Err(ParseError::InvalidFormat(USAGE_ANSWER));
    }
    Ok(Command::Answer(AnswerCommand::new(args.trim())))
}
