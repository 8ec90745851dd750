use anyhow::{Context, Result};
use meetbook_core::LogicManager;

use super::print_result;

pub fn run(mut logic: LogicManager, line: &str) -> Result<()> {
    let result = logic
        .execute(line)
        .with_context(|| format!("Could not run `{}`", line))?;

    print_result(&logic, &result);
    Ok(())
}
