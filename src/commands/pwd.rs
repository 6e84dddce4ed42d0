// src/commands/pwd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct PwdCommand;

#[async_trait]
impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        CommandResult::success(ctx.cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::seeded_ctx;

    #[tokio::test]
    async fn test_pwd_prints_cursor() {
        let result = PwdCommand.execute(seeded_ctx(vec![])).await;
        assert_eq!(result.stdout, "/home/user");
        assert_eq!(result.exit_code, 0);
    }
}
