pub mod exec;
pub mod repl;

use meetbook_core::{CommandResult, LogicManager, ViewState};
use owo_colors::OwoColorize;

use crate::render::{render_events, render_persons, render_usage};

/// Print a command's feedback, then whatever it asked the front end to show.
pub fn print_result(logic: &LogicManager, result: &CommandResult) {
    println!("{}", result.feedback);

    if result.show_help {
        for line in render_usage() {
            println!("{}", line);
        }
    }
    if !result.exit {
        print_view(logic);
    }
}

/// Print the list the current view shows.
pub fn print_view(logic: &LogicManager) {
    let (title, lines) = match logic.view() {
        ViewState::Persons => ("Persons", render_persons(logic.model())),
        ViewState::Events => ("Events", render_events(logic.model())),
    };

    println!("\n{}", title.bold());
    if lines.is_empty() {
        println!("   {}", "(none)".dimmed());
    }
    for line in lines {
        println!("   {}", line);
    }
}
