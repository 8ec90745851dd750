use anyhow::Result;
use dialoguer::Input;
use meetbook_core::LogicManager;
use owo_colors::OwoColorize;

use super::{print_result, print_view};
use crate::render::Render;

pub fn run(mut logic: LogicManager) -> Result<()> {
    print_view(&logic);

    let reminders = logic.reminders();
    if !reminders.is_empty() {
        println!("\n{}", "Coming up".bold());
        for reminder in &reminders {
            println!("   {}", reminder.render());
        }
    }

    loop {
        println!();
        let line: String = Input::new()
            .with_prompt(logic.view().to_string())
            .allow_empty(true)
            .interact_text()?;
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                print_result(&logic, &result);
                if result.exit {
                    return Ok(());
                }
            }
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}
