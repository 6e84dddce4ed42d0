// src/commands/rm.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct RmCommand;

#[async_trait]
impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let Some(name) = ctx.args.first() else {
            return CommandResult::error("rm: missing operand".to_string());
        };

        match ctx.fs.remove(&ctx.cwd, name).await {
            Ok(()) => CommandResult::success(format!("Removed '{}' (simulated).", name)),
            Err(FsError::NoSuchFileOrDirectory(_)) => CommandResult::error(format!(
                "rm: cannot remove '{}': No such file or directory",
                name
            )),
            Err(FsError::NotEmpty(_)) => CommandResult::error(format!(
                "rm: cannot remove '{}': Directory not empty (use -r for simulation)",
                name
            )),
            Err(e) => CommandResult::error(format!("rm: {}", e)),
        }
    }
}
