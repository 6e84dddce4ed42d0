// src/commands/date.rs
use async_trait::async_trait;
use chrono::Local;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct DateCommand;

#[async_trait]
impl Command for DateCommand {
    fn name(&self) -> &'static str {
        "date"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        // Locale-style timestamp, e.g. "8/26/2026, 10:30:15 AM"
        let now = Local::now();
        CommandResult::success(now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::seeded_ctx;

    #[tokio::test]
    async fn test_date_format_shape() {
        let result = DateCommand.execute(seeded_ctx(vec![])).await;
        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.contains(", "));
        assert!(result.stdout.ends_with('M'));
        assert_eq!(result.stdout.matches('/').count(), 2);
    }
}
