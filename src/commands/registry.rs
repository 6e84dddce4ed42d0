// src/commands/registry.rs
use std::collections::HashMap;

use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::creator::CreatorCommand;
use super::date::DateCommand;
use super::echo::EchoCommand;
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::mv::{CpCommand, MvCommand};
use super::pwd::PwdCommand;
use super::rm::RmCommand;
use super::touch::TouchCommand;
use super::whoami::WhoamiCommand;

/// Registry holding every dispatchable command. `cd`, `clear`, `sudo` and
/// `apt-get` stay shell builtins because they touch session state or the
/// output surface.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(MvCommand));
    registry.register(Box::new(CpCommand));
    registry.register(Box::new(WhoamiCommand));
    registry.register(Box::new(DateCommand));
    registry.register(Box::new(CreatorCommand));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contents() {
        let registry = default_registry();
        for name in ["help", "pwd", "echo", "ls", "cat", "touch", "mkdir", "rm", "mv", "cp", "whoami", "date", "creator"] {
            assert!(registry.contains(name), "missing command: {}", name);
        }
        assert!(!registry.contains("cd"));
        assert!(!registry.contains("apt-get"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = default_registry();
        assert!(registry.get("ls").is_some());
        assert!(registry.get("LS").is_none());
    }
}
