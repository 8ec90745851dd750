//! Colored terminal rendering for meetbook types.

use meetbook_core::commands::usages;
use meetbook_core::reminder::Reminder;
use meetbook_core::{Event, Model, Person};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Person {
    fn render(&self) -> String {
        let tags: String = self
            .tags
            .iter()
            .map(|t| format!(" #{}", t))
            .collect();

        format!(
            "{}{}\n      {}  {}  {}",
            self.name.bold(),
            tags.cyan(),
            self.phone,
            self.email,
            self.address.dimmed()
        )
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let mut line = format!(
            "{} {} @ {}  {}",
            self.name.bold(),
            format!("[{}]", self.label).cyan(),
            self.venue,
            format!("{} → {}", self.start, self.end).dimmed()
        );
        if !self.description.as_str().is_empty() {
            line.push_str(&format!("\n      {}", self.description.italic()));
        }
        line
    }
}

impl Render for Reminder {
    fn render(&self) -> String {
        format!("{} {}", "⏰".yellow(), self.message)
    }
}

/// Displayed persons, numbered the way commands address them.
pub fn render_persons(model: &Model) -> Vec<String> {
    model
        .filtered_persons()
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {}", i + 1, p.render()))
        .collect()
}

/// Displayed events with their participants; the selected event is marked.
pub fn render_events(model: &Model) -> Vec<String> {
    let selected = model.selected_event().map(|e| e.id);
    let book = model.address_book();

    model
        .filtered_events()
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let marker = if Some(event.id) == selected {
                "▶".green().to_string()
            } else {
                " ".to_string()
            };
            let participants: Vec<&str> = event
                .participants
                .iter()
                .filter_map(|id| book.person(*id))
                .map(|p| p.name.as_str())
                .collect();

            let mut line = format!("{}{}. {}", marker, i + 1, event.render());
            if !participants.is_empty() {
                line.push_str(&format!("\n      with {}", participants.join(", ")));
            }
            line
        })
        .collect()
}

pub fn render_usage() -> Vec<String> {
    usages()
        .into_iter()
        .map(|usage| {
            let (word, rest) = usage.split_once(':').unwrap_or((usage, ""));
            format!("{}:{}\n", word.green().bold(), rest)
        })
        .collect()
}
