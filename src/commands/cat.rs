// src/commands/cat.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let Some(file) = ctx.args.first() else {
            return CommandResult::error("cat: missing file operand".to_string());
        };

        match ctx.fs.read_file(&ctx.cwd, file).await {
            Ok(content) => CommandResult::success(content),
            Err(_) => CommandResult::error(format!(
                "cat: {}: No such file or file is a directory in simulation.",
                file
            )),
        }
    }
}
