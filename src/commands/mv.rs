// src/commands/mv.rs
//
// `mv` and `cp` share one code path; the only difference is whether the
// source entry survives. The destination is a directory to move into when
// the target names one (sibling or resolvable path), otherwise a rename
// within the current directory.
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

async fn move_or_copy(ctx: CommandContext, is_move: bool) -> CommandResult {
    let verb = if is_move { "mv" } else { "cp" };
    if ctx.args.len() != 2 {
        return CommandResult::error(format!(
            "{}: missing file operand. Usage: {} [source] [target]",
            verb, verb
        ));
    }

    let source = &ctx.args[0];
    let target = &ctx.args[1];

    match ctx.fs.move_or_copy(&ctx.cwd, source, target, is_move).await {
        Ok(()) => CommandResult::success(format!(
            "{} '{}' to '{}'.",
            if is_move { "Moved" } else { "Copied" },
            source,
            target
        )),
        Err(FsError::NoSuchFileOrDirectory(_)) => CommandResult::error(format!(
            "{}: cannot stat '{}': No such file or directory",
            verb, source
        )),
        Err(FsError::UnsupportedOperation(_)) if !is_move => CommandResult::error(format!(
            "cp: -r not supported for directory copy simulation: {}",
            source
        )),
        Err(FsError::UnsupportedOperation(_)) => CommandResult::error(format!(
            "mv: cannot move '{}' to a subdirectory of itself",
            source
        )),
        Err(e) => CommandResult::error(format!("{}: {}", verb, e)),
    }
}

pub struct MvCommand;

#[async_trait]
impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        move_or_copy(ctx, true).await
    }
}

pub struct CpCommand;

#[async_trait]
impl Command for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        move_or_copy(ctx, false).await
    }
}
