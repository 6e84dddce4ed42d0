// src/commands/touch.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct TouchCommand;

#[async_trait]
impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let Some(name) = ctx.args.first() else {
            return CommandResult::error("touch: missing file operand".to_string());
        };

        // The whole argument is the filename; touch never walks paths.
        match ctx.fs.create_file(&ctx.cwd, name, "").await {
            Ok(()) => CommandResult::success(format!("File '{}' created (simulated).", name)),
            Err(e) => CommandResult::error(format!("touch: {}", e)),
        }
    }
}
