//! Command registry populated once at startup.

use crate::builtin;
use crate::command::Command;
use crate::error::RegistryError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Registry of commands keyed by lower-case name, with alias lookup.
///
/// Iteration follows registration order.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
    by_name: HashMap<String, usize>,
    by_alias: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in command.
    pub fn with_builtins() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register_all(builtin::all())?;
        Ok(registry)
    }

    /// Registers a command. Nothing is inserted when the name or any alias
    /// collides with an existing name or alias.
    pub fn register(&mut self, command: Arc<dyn Command>) -> Result<(), RegistryError> {
        let name = command.name().trim().to_lowercase();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.is_taken(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        let mut aliases: Vec<String> = Vec::with_capacity(command.aliases().len());
        for alias in command.aliases() {
            let alias = alias.trim().to_lowercase();
            if alias.is_empty() {
                continue;
            }
            if alias == name || self.is_taken(&alias) || aliases.contains(&alias) {
                return Err(RegistryError::DuplicateAlias { alias, command: name });
            }
            aliases.push(alias);
        }

        let index = self.commands.len();
        debug!("Registering command '{}' (aliases: {:?})", name, aliases);
        for alias in aliases {
            self.by_alias.insert(alias, index);
        }
        self.by_name.insert(name, index);
        self.commands.push(command);
        Ok(())
    }

    /// Registers several commands, stopping at the first failure.
    pub fn register_all<I>(&mut self, commands: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = Arc<dyn Command>>,
    {
        commands.into_iter().try_for_each(|command| self.register(command))
    }

    /// Looks a command up by its exact name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&index| &self.commands[index])
    }

    /// Looks a command up by name, then by alias.
    pub fn resolve(&self, token: &str) -> Option<&Arc<dyn Command>> {
        let key = token.to_lowercase();
        self.by_name
            .get(&key)
            .or_else(|| self.by_alias.get(&key))
            .map(|&index| &self.commands[index])
    }

    /// Iterates over commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.iter()
    }

    /// Command names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|command| command.name()).collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn is_taken(&self, key: &str) -> bool {
        self.by_name.contains_key(key) || self.by_alias.contains_key(key)
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}
