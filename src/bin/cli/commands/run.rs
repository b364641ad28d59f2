use crate::app::{App, Feedback};
use crate::render::terminal as renderer;

/// Execute one command line. Returns whether the command succeeded.
pub fn run(app: &mut App, line: &str, use_color: bool) -> bool {
    let feedback = app.execute_line(line);
    let rendered = renderer::render_feedback(&feedback, use_color);
    match feedback {
        Feedback::Success(_) => {
            println!("{}", rendered);
            true
        }
        Feedback::Failure(_) => {
            eprintln!("{}", rendered);
            false
        }
    }
}
