// src/commands/whoami.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub const USERNAME: &str = "web-sim-user";

pub struct WhoamiCommand;

#[async_trait]
impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::success(USERNAME.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::seeded_ctx;

    #[tokio::test]
    async fn test_whoami() {
        let result = WhoamiCommand.execute(seeded_ctx(vec![])).await;
        assert_eq!(result.stdout, "web-sim-user");
    }
}
