//! Shell Session
//!
//! Ties together the filesystem, command registry, history and completion
//! into one session object. Every entry point takes the session by
//! reference, so a fresh `Shell` is an isolated fixture.

use std::sync::Arc;

use crate::apt;
use crate::commands::{default_registry, CommandContext, CommandRegistry};
use crate::complete::{self, Completion};
use crate::fs::MemFs;
use crate::history::History;

/// Initial cursor, and the default `cd` target.
pub const HOME: &str = "/home/user";

/// Rendered outcome of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Normal output block (possibly empty).
    Text(String),
    /// Single-line error, rendered distinguishably from normal output.
    Error(String),
    /// Reset signal for the renderer; produces no text of its own.
    Clear,
    /// Canned lines the renderer plays back one by one.
    Transcript(&'static [&'static str]),
}

/// One interactive session: filesystem, cursor, history, command set.
pub struct Shell {
    fs: Arc<MemFs>,
    cwd: String,
    history: History,
    registry: CommandRegistry,
}

impl Shell {
    /// Start a session over the fixed seed tree with the cursor at home.
    pub fn new() -> Self {
        Self {
            fs: Arc::new(MemFs::seeded()),
            cwd: HOME.to_string(),
            history: History::new(),
            registry: default_registry(),
        }
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn prompt(&self) -> String {
        format!("user@web-sim:{}$ ", self.cwd)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Execute one raw input line against the session.
    pub async fn execute(&mut self, line: &str) -> Output {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Output::Text(String::new());
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<String> = parts.map(String::from).collect();

        // A pure renderer signal; deliberately kept out of history.
        if cmd == "clear" {
            return Output::Clear;
        }

        self.history.push(trimmed);

        if cmd == "sudo" || cmd == "apt-get" {
            return self.package_manager(cmd, &args);
        }

        if cmd == "cd" {
            return self.change_directory(args.first().map(String::as_str)).await;
        }

        match self.registry.get(cmd) {
            Some(command) => {
                let ctx = CommandContext {
                    args,
                    cwd: self.cwd.clone(),
                    fs: self.fs.clone(),
                };
                let result = command.execute(ctx).await;
                if result.exit_code == 0 {
                    Output::Text(result.stdout)
                } else {
                    Output::Error(result.stderr)
                }
            }
            None => Output::Error(format!("bash: {}: command not found", cmd)),
        }
    }

    async fn change_directory(&mut self, target: Option<&str>) -> Output {
        let target = target.unwrap_or(HOME);
        match self.fs.change_directory(&self.cwd, target).await {
            Ok(new_cwd) => {
                self.cwd = new_cwd;
                Output::Text(String::new())
            }
            Err(_) => Output::Error(format!(
                "bash: cd: {}: No such file or directory in simulation.",
                target
            )),
        }
    }

    /// `sudo` strips itself and re-dispatches; only `apt-get` is honored,
    /// anything else is refused without privilege elevation.
    fn package_manager(&self, cmd: &str, args: &[String]) -> Output {
        let tokens: Vec<&str> = if cmd == "sudo" {
            args.iter().map(String::as_str).collect()
        } else {
            std::iter::once(cmd)
                .chain(args.iter().map(String::as_str))
                .collect()
        };

        match tokens.first() {
            Some(&"apt-get") => match tokens.get(1) {
                Some(action) => match apt::transcript(action) {
                    Some(lines) => Output::Transcript(lines),
                    None => Output::Error(format!("apt-get: unrecognized command '{}'", action)),
                },
                None => Output::Error(
                    "apt-get: Try 'apt-get update/upgrade' for more information.".to_string(),
                ),
            },
            Some(token) => Output::Error(format!("sudo: {}: command not found", token)),
            None => Output::Error("sudo: : command not found".to_string()),
        }
    }

    /// Keyboard entry point: recall the previous history line.
    pub fn history_recall_previous(&mut self) -> Option<&str> {
        self.history.previous()
    }

    /// Keyboard entry point: recall the next history line, or an empty
    /// line when stepping past the newest entry.
    pub fn history_recall_next(&mut self) -> Option<&str> {
        self.history.next()
    }

    /// Keyboard entry point: tab completion over the partial line.
    pub async fn completion_request(&self, partial: &str) -> Completion {
        complete::complete_line(&self.fs, &self.cwd, partial).await
    }

    /// Raw candidate list for the partial line, in source order.
    pub async fn completions(&self, partial: &str) -> Vec<String> {
        complete::completions(&self.fs, &self.cwd, partial).await
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Output {
        Output::Text(s.to_string())
    }

    #[tokio::test]
    async fn test_new_session_starts_at_home() {
        let shell = Shell::new();
        assert_eq!(shell.cwd(), "/home/user");
        assert_eq!(shell.prompt(), "user@web-sim:/home/user$ ");
    }

    #[tokio::test]
    async fn test_blank_line_is_echo_only() {
        let mut shell = Shell::new();
        assert_eq!(shell.execute("   ").await, text(""));
        assert!(shell.history().is_empty());
    }

    #[tokio::test]
    async fn test_pwd_and_echo() {
        let mut shell = Shell::new();
        assert_eq!(shell.execute("pwd").await, text("/home/user"));
        assert_eq!(shell.execute("echo hi there").await, text("hi there"));
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let mut shell = Shell::new();
        assert_eq!(
            shell.execute("fly").await,
            Output::Error("bash: fly: command not found".to_string())
        );
        // Failed commands still land in history.
        assert_eq!(shell.history().len(), 1);
    }

    #[tokio::test]
    async fn test_cd_updates_cursor_and_prompt() {
        let mut shell = Shell::new();
        shell.execute("cd projeler").await;
        assert_eq!(shell.cwd(), "/home/user/projeler");
        shell.execute("cd ..").await;
        assert_eq!(shell.cwd(), "/home/user");
    }

    #[tokio::test]
    async fn test_cd_default_target_is_home() {
        let mut shell = Shell::new();
        shell.execute("cd /").await;
        assert_eq!(shell.cwd(), "/");
        shell.execute("cd").await;
        assert_eq!(shell.cwd(), "/home/user");
    }

    #[tokio::test]
    async fn test_cd_failure_leaves_cursor_unchanged() {
        let mut shell = Shell::new();
        let out = shell.execute("cd README.txt").await;
        assert_eq!(
            out,
            Output::Error(
                "bash: cd: README.txt: No such file or directory in simulation.".to_string()
            )
        );
        assert_eq!(shell.cwd(), "/home/user");

        shell.execute("cd hic_yok").await;
        assert_eq!(shell.cwd(), "/home/user");
    }

    #[tokio::test]
    async fn test_touch_mv_cat_chain() {
        let mut shell = Shell::new();
        shell.execute("touch a").await;
        shell.execute("mv a b").await;
        assert_eq!(shell.execute("cat b").await, text(""));
        let out = shell.execute("cat a").await;
        assert!(matches!(out, Output::Error(_)));
    }

    #[tokio::test]
    async fn test_mkdir_rm_round_trip_via_commands() {
        let mut shell = Shell::new();
        let before = shell.execute("ls").await;
        shell.execute("mkdir gecici").await;
        shell.execute("rm gecici").await;
        assert_eq!(shell.execute("ls").await, before);
    }

    #[tokio::test]
    async fn test_clear_is_signal_and_skips_history() {
        let mut shell = Shell::new();
        shell.execute("pwd").await;
        assert_eq!(shell.execute("clear").await, Output::Clear);
        assert_eq!(shell.history().len(), 1);
    }

    #[tokio::test]
    async fn test_apt_get_transcripts() {
        let mut shell = Shell::new();
        assert_eq!(
            shell.execute("apt-get update").await,
            Output::Transcript(apt::APT_UPDATE)
        );
        assert_eq!(
            shell.execute("sudo apt-get upgrade").await,
            Output::Transcript(apt::APT_UPGRADE)
        );
    }

    #[tokio::test]
    async fn test_apt_get_bad_usage() {
        let mut shell = Shell::new();
        assert_eq!(
            shell.execute("apt-get").await,
            Output::Error("apt-get: Try 'apt-get update/upgrade' for more information.".to_string())
        );
        assert_eq!(
            shell.execute("apt-get install vim").await,
            Output::Error("apt-get: unrecognized command 'install'".to_string())
        );
    }

    #[tokio::test]
    async fn test_sudo_only_honors_apt_get() {
        let mut shell = Shell::new();
        assert_eq!(
            shell.execute("sudo rm -rf /").await,
            Output::Error("sudo: rm: command not found".to_string())
        );
    }

    #[tokio::test]
    async fn test_history_recall_through_shell() {
        let mut shell = Shell::new();
        shell.execute("pwd").await;
        shell.execute("ls").await;
        shell.execute("whoami").await;
        assert_eq!(shell.history_recall_previous(), Some("whoami"));
        assert_eq!(shell.history_recall_previous(), Some("ls"));
        assert_eq!(shell.history_recall_previous(), Some("pwd"));
        assert_eq!(shell.history_recall_next(), Some("ls"));
    }

    #[tokio::test]
    async fn test_completion_request_in_session_directory() {
        let mut shell = Shell::new();
        assert_eq!(shell.completions("cat pr").await, vec!["projeler"]);
        shell.execute("cd belgeler").await;
        assert_eq!(shell.completions("cat no").await, vec!["notlar.txt"]);
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_tree_usable() {
        let mut shell = Shell::new();
        shell.execute("cp projeler kopya").await;
        let out = shell.execute("ls").await;
        assert_eq!(
            out,
            text("README.txt    projeler/    belgeler/    eski_isim.txt")
        );
    }
}
