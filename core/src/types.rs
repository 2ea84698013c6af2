//! Descriptor types for the executable being scaffolded.
//!
//! An [`Executable`] aggregates its [`Command`]s and [`Flag`]s by value. All
//! three types serialize with [`serde`] and tolerate missing fields, so a
//! loader can hand over whatever the user wrote and let
//! [`Executable::fix`] derive the rest.

use serde::{Deserialize, Serialize};

use crate::{FlagType, FlagValue};

/// Initial version given to a new [`Executable`].
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Initial description given to a new [`Executable`].
pub const DEFAULT_DESCRIPTION: &str = "";

/// Description of one CLI flag.
///
/// Only [`long_name`](Self::long_name) and [`type_string`](Self::type_string)
/// need to be supplied; [`fix`](Self::fix) derives the other names and the
/// default value.
///
/// # Examples
///
/// ```
/// use cli_skeleton_core::{Flag, FlagValue};
///
/// let mut flag = Flag::new("ignore-case", "b").with_description("Match case-insensitively");
/// flag.fix().unwrap();
///
/// assert_eq!(flag.name, "ignore-case");
/// assert_eq!(flag.short_name, "i");
/// assert_eq!(flag.variable_name, "ignoreCase");
/// assert_eq!(flag.type_string, "bool");
/// assert_eq!(flag.default, Some(FlagValue::Bool(false)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flag {
    /// Display name; defaults to the long name.
    pub name: String,
    /// Single-character short form, without the dash.
    pub short_name: String,
    /// Long form in kebab-case, without the dashes (e.g. "ignore-case").
    pub long_name: String,
    /// Identifier used for the flag in generated code (e.g. "ignoreCase").
    pub variable_name: String,
    /// Type token; canonical `bool`, `int` or `string` after normalization.
    #[serde(rename = "type")]
    pub type_string: String,
    /// Default value; the type's zero value unless set to something else.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<FlagValue>,
    /// Help text.
    pub description: String,
}

impl Flag {
    /// Creates a flag from its long name and a type token.
    pub fn new(long_name: &str, type_string: &str) -> Self {
        Self {
            long_name: long_name.to_string(),
            type_string: type_string.to_string(),
            ..Default::default()
        }
    }

    /// Sets the default value.
    pub fn with_default(mut self, value: FlagValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    /// Returns the resolved type, or `None` while the type token is unknown.
    pub fn flag_type(&self) -> Option<FlagType> {
        FlagType::resolve(&self.type_string).ok()
    }
}

/// Description of one subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Command {
    /// Subcommand name (e.g. "add").
    pub name: String,
    /// One-line summary shown in command listings.
    pub synopsis: String,
    /// Long help text.
    pub help: String,
}

impl Command {
    /// Creates a command with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Sets the one-line synopsis.
    pub fn with_synopsis(mut self, synopsis: &str) -> Self {
        self.synopsis = synopsis.to_string();
        self
    }
}

/// Root description of the executable to scaffold.
///
/// # Examples
///
/// ```
/// use cli_skeleton_core::*;
///
/// let mut exe = Executable::new("todo", "tcnksm");
/// exe.commands.push(Command::new("add").with_synopsis("Add a new task"));
/// exe.flags.push(Flag::new("debug", "bool"));
///
/// exe.fix().unwrap();
/// assert!(exe.validate().is_empty());
/// assert_eq!(exe.version, DEFAULT_VERSION);
/// assert_eq!(exe.flags[0].short_name, "d");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Executable {
    /// Executable name.
    pub name: String,
    /// Owner of the executable (user or organization).
    pub owner: String,
    /// Host of the version control system (e.g. "github.com").
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vcs_host: String,
    /// Subcommands.
    pub commands: Vec<Command>,
    /// Global flags.
    pub flags: Vec<Flag>,
    /// Initial version.
    pub version: String,
    /// Description of the executable.
    pub description: String,
    /// Name of the CLI framework the renderer should target.
    #[serde(rename = "framework")]
    pub framework_str: String,
}

impl Default for Executable {
    fn default() -> Self {
        Self {
            name: String::new(),
            owner: String::new(),
            vcs_host: String::new(),
            commands: Vec::new(),
            flags: Vec::new(),
            version: DEFAULT_VERSION.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            framework_str: String::new(),
        }
    }
}

impl Executable {
    /// Creates an executable with the given name and owner and default
    /// version and description.
    pub fn new(name: &str, owner: &str) -> Self {
        Self {
            name: name.to_string(),
            owner: owner.to_string(),
            ..Default::default()
        }
    }

    /// Finds a command by name.
    pub fn find_command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Finds a flag by its long name.
    pub fn find_flag(&self, long_name: &str) -> Option<&Flag> {
        self.flags.iter().find(|f| f.long_name == long_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executable_defaults() {
        let exe = Executable::default();
        assert_eq!(exe.version, "0.1.0");
        assert_eq!(exe.description, "");
        assert!(exe.commands.is_empty());
        assert!(exe.flags.is_empty());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let exe: Executable = serde_json::from_str(
            r#"{
                "name": "todo",
                "owner": "tcnksm",
                "framework": "urfave_cli",
                "flags": [{ "long_name": "debug", "type": "b" }]
            }"#,
        )
        .unwrap();

        assert_eq!(exe.version, DEFAULT_VERSION);
        assert_eq!(exe.framework_str, "urfave_cli");
        assert_eq!(exe.flags[0].type_string, "b");
        assert_eq!(exe.flags[0].default, None);
    }

    #[test]
    fn test_flag_default_deserializes_untagged() {
        let flag: Flag =
            serde_json::from_str(r#"{ "long_name": "port", "type": "int", "default": 8080 }"#)
                .unwrap();
        assert_eq!(flag.default, Some(FlagValue::Int(8080)));
        assert_eq!(flag.flag_type(), Some(FlagType::Int));
    }

    #[test]
    fn test_find_helpers() {
        let mut exe = Executable::new("todo", "me");
        exe.commands.push(Command::new("add"));
        exe.flags.push(Flag::new("debug", "bool"));

        assert!(exe.find_command("add").is_some());
        assert!(exe.find_command("list").is_none());
        assert!(exe.find_flag("debug").is_some());
        assert!(exe.find_flag("d").is_none());
    }
}
