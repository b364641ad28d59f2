use anyhow::Result;

use crate::app::App;
use crate::render::terminal as renderer;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let cards = app.model.full_list();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(cards)?);
        }
        OutputFormat::Plain => {
            let cards: Vec<_> = cards.iter().collect();
            println!(
                "{}",
                renderer::render_card_list(&cards, app.config.reveal_answers, use_color)
            );
            if !cards.is_empty() {
                println!("\n{} flashcards total", cards.len());
            }
        }
    }

    Ok(())
}
