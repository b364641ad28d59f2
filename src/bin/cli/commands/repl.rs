use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::app::{App, Feedback};
use crate::render::terminal as renderer;

/// Interactive prompt: one command per line until `exit` or end of input
pub fn run(app: &mut App, use_color: bool) -> Result<()> {
    log::info!("Starting interactive prompt with {} flashcards", app.model.full_list().len());
    println!("Welcome to Flashbook! Type `help` to see the available commands.");
    print_listing(app, use_color);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", renderer::prompt(&app.model));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let feedback = app.execute_line(&line);
        println!("{}", renderer::render_feedback(&feedback, use_color));

        if let Feedback::Success(outcome) = &feedback {
            if outcome.exit {
                break;
            }
            if !outcome.show_help && !app.model.is_quiz_mode() {
                print_listing(app, use_color);
            }
        }
    }

    app.save()
}

fn print_listing(app: &App, use_color: bool) {
    let cards = app.model.filtered_list();
    println!(
        "{}",
        renderer::render_card_list(&cards, app.config.reveal_answers, use_color)
    );
}
