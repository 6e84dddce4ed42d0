// src/commands/creator.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct CreatorCommand;

#[async_trait]
impl Command for CreatorCommand {
    fn name(&self) -> &'static str {
        "creator"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::success("Arda Aktan".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::seeded_ctx;

    #[tokio::test]
    async fn test_creator() {
        let result = CreatorCommand.execute(seeded_ctx(vec![])).await;
        assert_eq!(result.stdout, "Arda Aktan");
    }
}
