// src/commands/mod.rs
pub mod cat;
pub mod creator;
pub mod date;
pub mod echo;
pub mod help_cmd;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod pwd;
pub mod registry;
pub mod rm;
pub mod touch;
pub mod types;
pub mod whoami;

pub use registry::{default_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult};
