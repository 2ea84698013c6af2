//! Guarded overwrite of individual executable fields.
//!
//! A default-filling step that only knows field names can write into an
//! [`Executable`] through [`Executable::overwrite`]. The set of fields and the
//! kinds of value accepted are closed: text, a command list, or a flag list.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{Command, Executable, Flag};

/// Overwrite failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverwriteError {
    /// The field name is not one of [`ExecutableField`].
    #[error("unknown executable field: {0}")]
    UnknownField(String),
    /// The value kind is never accepted.
    #[error("unexpected value: {0}")]
    UnexpectedValue(String),
    /// The value kind is accepted, but not by this field.
    #[error("field `{field}` cannot hold a {kind} value")]
    Mismatch {
        /// Target field.
        field: ExecutableField,
        /// Kind of the rejected value.
        kind: &'static str,
    },
}

/// Writable fields of an [`Executable`].
///
/// # Examples
///
/// ```
/// use cli_skeleton_core::ExecutableField;
///
/// let field: ExecutableField = "VCSHost".parse().unwrap();
/// assert_eq!(field, ExecutableField::VcsHost);
/// assert_eq!("framework".parse::<ExecutableField>().unwrap(), ExecutableField::FrameworkStr);
/// assert!("Secret".parse::<ExecutableField>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutableField {
    /// [`Executable::name`].
    Name,
    /// [`Executable::owner`].
    Owner,
    /// [`Executable::vcs_host`].
    VcsHost,
    /// [`Executable::version`].
    Version,
    /// [`Executable::description`].
    Description,
    /// [`Executable::framework_str`].
    FrameworkStr,
    /// [`Executable::commands`].
    Commands,
    /// [`Executable::flags`].
    Flags,
}

impl ExecutableField {
    /// Every field, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::Owner,
        Self::VcsHost,
        Self::Version,
        Self::Description,
        Self::FrameworkStr,
        Self::Commands,
        Self::Flags,
    ];

    /// Returns the descriptor key name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Owner => "Owner",
            Self::VcsHost => "VCSHost",
            Self::Version => "Version",
            Self::Description => "Description",
            Self::FrameworkStr => "FrameworkStr",
            Self::Commands => "Commands",
            Self::Flags => "Flags",
        }
    }
}

impl fmt::Display for ExecutableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutableField {
    type Err = OverwriteError;

    /// Accepts key names case-insensitively, with or without underscores, so
    /// `VCSHost`, `vcs_host` and `vcshost` all name the same field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        if key == "framework" {
            return Ok(Self::FrameworkStr);
        }
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().to_lowercase() == key)
            .ok_or_else(|| OverwriteError::UnknownField(s.to_string()))
    }
}

/// Value handed to [`Executable::overwrite`].
///
/// `Int` and `Bool` exist because default-filling steps produce them; the
/// overwrite rejects both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text for a string field.
    Text(String),
    /// Replacement command list.
    Commands(Vec<Command>),
    /// Replacement flag list.
    Flags(Vec<Flag>),
    /// Integer scalar.
    Int(i64),
    /// Boolean scalar.
    Bool(bool),
}

impl FieldValue {
    fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Commands(_) => "command list",
            Self::Flags(_) => "flag list",
            Self::Int(_) => "integer",
            Self::Bool(_) => "boolean",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<Command>> for FieldValue {
    fn from(commands: Vec<Command>) -> Self {
        Self::Commands(commands)
    }
}

impl From<Vec<Flag>> for FieldValue {
    fn from(flags: Vec<Flag>) -> Self {
        Self::Flags(flags)
    }
}

impl Executable {
    /// Replaces one field with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`OverwriteError::UnexpectedValue`] for integer and boolean
    /// values, and [`OverwriteError::Mismatch`] when the value kind does not
    /// fit the field. The executable is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use cli_skeleton_core::*;
    ///
    /// let mut exe = Executable::new("todo", "");
    /// exe.overwrite(ExecutableField::Owner, "tcnksm".into()).unwrap();
    /// exe.overwrite(ExecutableField::Flags, vec![Flag::new("debug", "b")].into()).unwrap();
    /// assert_eq!(exe.owner, "tcnksm");
    /// assert_eq!(exe.flags.len(), 1);
    ///
    /// let err = exe.overwrite(ExecutableField::Version, FieldValue::Int(2)).unwrap_err();
    /// assert_eq!(err.to_string(), "unexpected value: Int(2)");
    /// ```
    pub fn overwrite(
        &mut self,
        field: ExecutableField,
        value: FieldValue,
    ) -> Result<(), OverwriteError> {
        if matches!(value, FieldValue::Int(_) | FieldValue::Bool(_)) {
            return Err(OverwriteError::UnexpectedValue(format!("{value:?}")));
        }

        match (field, value) {
            (ExecutableField::Commands, FieldValue::Commands(commands)) => {
                self.commands = commands;
            }
            (ExecutableField::Flags, FieldValue::Flags(flags)) => {
                self.flags = flags;
            }
            (field, FieldValue::Text(text)) => match self.text_slot(field) {
                Some(slot) => *slot = text,
                None => {
                    return Err(OverwriteError::Mismatch { field, kind: "text" });
                }
            },
            (field, value) => {
                return Err(OverwriteError::Mismatch {
                    field,
                    kind: value.kind(),
                });
            }
        }
        Ok(())
    }

    /// Overwrites a field named by its key.
    ///
    /// # Errors
    ///
    /// Returns [`OverwriteError::UnknownField`] for unknown keys, otherwise
    /// whatever [`overwrite`](Self::overwrite) returns.
    pub fn overwrite_named(&mut self, key: &str, value: FieldValue) -> Result<(), OverwriteError> {
        let field = key.parse()?;
        self.overwrite(field, value)
    }

    fn text_slot(&mut self, field: ExecutableField) -> Option<&mut String> {
        match field {
            ExecutableField::Name => Some(&mut self.name),
            ExecutableField::Owner => Some(&mut self.owner),
            ExecutableField::VcsHost => Some(&mut self.vcs_host),
            ExecutableField::Version => Some(&mut self.version),
            ExecutableField::Description => Some(&mut self.description),
            ExecutableField::FrameworkStr => Some(&mut self.framework_str),
            ExecutableField::Commands | ExecutableField::Flags => None,
        }
    }
}
