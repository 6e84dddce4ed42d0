// src/commands/ls.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct LsCommand;

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        match ctx.fs.list(&ctx.cwd).await {
            Ok(entries) => {
                // Directories carry a trailing separator so the renderer can
                // tell the two entry classes apart.
                let line = entries
                    .iter()
                    .map(|e| {
                        if e.is_directory {
                            format!("{}/", e.name)
                        } else {
                            e.name.clone()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("    ");
                CommandResult::success(line)
            }
            Err(e) => CommandResult::error(format!("ls: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::seeded_ctx;

    #[tokio::test]
    async fn test_ls_insertion_order_with_dir_tags() {
        let result = LsCommand.execute(seeded_ctx(vec![])).await;
        assert_eq!(
            result.stdout,
            "README.txt    projeler/    belgeler/    eski_isim.txt"
        );
    }

    #[tokio::test]
    async fn test_ls_reflects_new_entries_at_end() {
        let ctx = seeded_ctx(vec![]);
        ctx.fs.create_file(&ctx.cwd, "yeni.txt", "").await.unwrap();
        let result = LsCommand.execute(ctx).await;
        assert!(result.stdout.ends_with("yeni.txt"));
    }
}
