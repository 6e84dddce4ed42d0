// src/commands/echo.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct EchoCommand;

#[async_trait]
impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        CommandResult::success(ctx.args.join(" "))
    }
}
