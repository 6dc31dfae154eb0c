use std::collections::HashSet;

use serde::{Serialize, Serializer};
use strum_macros::Display;
use thiserror::Error;

pub mod debordo;

/// Type of a slash command option, as enumerated by the Discord API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionKind {
    Integer,
    Boolean,
}

impl OptionKind {
    /// Code used for this kind in the `type` field of an option
    pub fn code(self) -> u8 {
        match self {
            OptionKind::Integer => 4,
            OptionKind::Boolean => 5,
        }
    }
}

impl Serialize for OptionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// One argument of a slash command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub required: bool,
}

/// The JSON body sent to Discord to create a slash command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
    pub options: Vec<OptionDescriptor>,
}

/// Returned when a command descriptor would be refused by Discord
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("Option '{0}' is declared more than once")]
    DuplicateOption(String),
    #[error("Required option '{0}' comes after an optional one")]
    RequiredAfterOptional(String),
}

impl CommandDescriptor {
    pub fn new(name: &str, description: &str) -> Self {
        CommandDescriptor {
            name: name.to_string(),
            description: description.to_string(),
            options: vec![],
        }
    }

    /// Append an option, options are presented to the user in insertion order
    pub fn option(
        mut self,
        name: &str,
        description: &str,
        kind: OptionKind,
        required: bool,
    ) -> Self {
        self.options.push(OptionDescriptor {
            name: name.to_string(),
            description: description.to_string(),
            kind,
            required,
        });
        self
    }

    /// Check that option names are unique and that required options come first
    pub fn validate(&self) -> Result<(), DescriptorError> {
        let mut names = HashSet::new();
        let mut optional_seen = false;
        for option in &self.options {
            if !names.insert(option.name.as_str()) {
                return Err(DescriptorError::DuplicateOption(option.name.clone()));
            }
            if option.required && optional_seen {
                return Err(DescriptorError::RequiredAfterOptional(option.name.clone()));
            }
            optional_seen |= !option.required;
        }
        Ok(())
    }
}
