// src/commands/help_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

const HELP_TEXT: &str = "UPDATED COMMAND LIST\n\n\
\thelp - Shows this list.\n\
\techo [text] - Return text.\n\
\tpwd - Shows current directory.\n\
\tls - List contents.\n\
\tcd [dir] - Directory change simulation.\n\
\tcat [file] - Shows file content.\n\
\ttouch [file] - Create file.\n\
\tmkdir [dir] - Create directory.\n\
\trm [item] - Remove file or empty directory.\n\
\tmv [src] [tgt] - Rename/move.\n\
\tcp [src] [tgt] - Copy file's content.\n\
\twhoami - Shows username.\n\
\tdate - Shows current clock and date.\n\
\tcreator - Shows the creator.\n\
\tsudo/apt-get - Simulated package manager.\n\
\tclear - Clears the screen.";

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::success(HELP_TEXT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::seeded_ctx;

    #[tokio::test]
    async fn test_help_lists_every_command() {
        let result = HelpCommand.execute(seeded_ctx(vec![])).await;
        assert_eq!(result.exit_code, 0);
        for name in ["help", "echo", "pwd", "ls", "cd", "cat", "touch", "mkdir", "rm", "mv", "cp", "whoami", "date", "creator", "sudo/apt-get", "clear"] {
            assert!(result.stdout.contains(name), "help is missing {}", name);
        }
    }
}
