//! Input commands and the key bindings that produce them.
//!
//! Keys are plain names as typed on a line of input (`","`, `"."`,
//! `"space"`, `"click"`). Bindings can be overridden from the config file
//! with a map of key name to command name.

use std::collections::HashMap;
use std::fmt;

/// Direction of a solar-system scale change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleDirection {
    Increase,
    Decrease,
}

/// Everything the user can ask the animation to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputCommand {
    /// Pause or resume.
    Toggle,
    /// Grow or shrink the solar-system overlay.
    AdjustScale(ScaleDirection),
}

impl InputCommand {
    /// All commands, in the order they are listed to the user.
    pub const ALL: [InputCommand; 3] = [
        InputCommand::Toggle,
        InputCommand::AdjustScale(ScaleDirection::Increase),
        InputCommand::AdjustScale(ScaleDirection::Decrease),
    ];

    /// Name used in config files.
    pub const fn name(self) -> &'static str {
        match self {
            InputCommand::Toggle => "toggle",
            InputCommand::AdjustScale(ScaleDirection::Increase) => "scale_up",
            InputCommand::AdjustScale(ScaleDirection::Decrease) => "scale_down",
        }
    }

    /// Parse a config-file command name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for InputCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Invalid keybinding override.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("unknown command '{command}' bound to key '{key}'")]
    UnknownCommand { key: String, command: String },

    #[error("empty key name bound to '{0}'")]
    EmptyKey(String),
}

/// Maps key names to commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: HashMap<String, InputCommand>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = [
            (",", InputCommand::AdjustScale(ScaleDirection::Increase)),
            (".", InputCommand::AdjustScale(ScaleDirection::Decrease)),
            ("space", InputCommand::Toggle),
            ("click", InputCommand::Toggle),
            ("p", InputCommand::Toggle),
        ]
        .into_iter()
        .map(|(key, command)| (key.to_string(), command))
        .collect();
        Self { bindings }
    }
}

impl KeyBindings {
    /// Defaults with `overrides` (key name -> command name) layered on top.
    pub fn from_overrides(overrides: &HashMap<String, String>) -> Result<Self, BindingError> {
        let mut bindings = Self::default();
        for (key, command_name) in overrides {
            let key = normalize_key(key);
            if key.is_empty() {
                return Err(BindingError::EmptyKey(command_name.clone()));
            }
            let command = InputCommand::from_name(command_name.trim()).ok_or_else(|| {
                BindingError::UnknownCommand {
                    key: key.clone(),
                    command: command_name.clone(),
                }
            })?;
            bindings.bind(key, command);
        }
        Ok(bindings)
    }

    /// Bind `key` to `command`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: impl Into<String>, command: InputCommand) {
        self.bindings.insert(key.into(), command);
    }

    /// Command bound to the raw input `key`, if any.
    pub fn resolve(&self, key: &str) -> Option<InputCommand> {
        self.bindings.get(&normalize_key(key)).copied()
    }

    /// Keys bound to `command`, sorted.
    pub fn keys_for(&self, command: InputCommand) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .bindings
            .iter()
            .filter(|(_, c)| **c == command)
            .map(|(k, _)| k.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }
}

/// A bare space typed on a line means the space key.
fn normalize_key(key: &str) -> String {
    if !key.is_empty() && key.trim().is_empty() {
        return "space".to_string();
    }
    key.trim().to_lowercase()
}
