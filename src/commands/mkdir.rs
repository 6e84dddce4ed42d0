// src/commands/mkdir.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct MkdirCommand;

#[async_trait]
impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let Some(name) = ctx.args.first() else {
            return CommandResult::error("mkdir: missing operand".to_string());
        };

        match ctx.fs.create_dir(&ctx.cwd, name).await {
            Ok(()) => CommandResult::success(format!("Directory '{}' created (simulated).", name)),
            Err(FsError::AlreadyExists(_)) => CommandResult::error(format!(
                "mkdir: cannot create directory '{}': File exists",
                name
            )),
            Err(e) => CommandResult::error(format!("mkdir: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::seeded_ctx;

    #[tokio::test]
    async fn test_mkdir_creates_directory() {
        let ctx = seeded_ctx(vec!["yeni_klasor"]);
        let fs = ctx.fs.clone();
        let result = MkdirCommand.execute(ctx).await;
        assert_eq!(result.stdout, "Directory 'yeni_klasor' created (simulated).");
        assert!(fs.is_directory("/home/user/yeni_klasor").await);
    }

    #[tokio::test]
    async fn test_mkdir_missing_operand() {
        let result = MkdirCommand.execute(seeded_ctx(vec![])).await;
        assert_eq!(result.stderr, "mkdir: missing operand");
    }

    #[tokio::test]
    async fn test_mkdir_already_exists() {
        let result = MkdirCommand.execute(seeded_ctx(vec!["projeler"])).await;
        assert_eq!(
            result.stderr,
            "mkdir: cannot create directory 'projeler': File exists"
        );
        assert_eq!(result.exit_code, 1);
    }
}
