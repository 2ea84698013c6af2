//! Executable validation.
//!
//! Checks that an [`Executable`] carries every field a renderer needs. Unlike
//! normalization, validation never stops early: every defect is reported so
//! the user can fix them all in one pass.
//!
//! # Examples
//!
//! ```
//! use cli_skeleton_core::*;
//!
//! let exe = Executable::new("todo", "me");
//! assert!(validate_executable(&exe).is_empty());
//!
//! let mut bad = Executable::new("", "");
//! bad.flags.push(Flag::new("", "bool"));
//! let errors = validate_executable(&bad);
//! assert_eq!(errors.len(), 3);
//! assert_eq!(errors[0].to_string(), "`Name` cannot be blank");
//! ```

use thiserror::Error;

use crate::{Command, Executable, Flag};

/// Executable validation errors.
///
/// Command and flag variants carry the zero-based position of the offending
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Executable name is blank.
    #[error("`Name` cannot be blank")]
    BlankName,
    /// Executable owner is blank.
    #[error("`Owner` cannot be blank")]
    BlankOwner,
    /// A command has a blank name.
    #[error("`Command.Name` cannot be blank (command #{index})")]
    BlankCommandName {
        /// Position in [`Executable::commands`].
        index: usize,
    },
    /// A flag has a blank long name.
    #[error("`Flag.LongName` cannot be blank (flag #{index})")]
    BlankFlagLongName {
        /// Position in [`Executable::flags`].
        index: usize,
    },
    /// A flag has a blank type.
    #[error("`Flag.TypeString` cannot be blank. Select from bool|int|string (flag #{index})")]
    BlankFlagTypeString {
        /// Position in [`Executable::flags`].
        index: usize,
    },
}

/// Validates an executable description.
///
/// Reports an empty name or owner, every command without a name, and every
/// flag without a long name or type. An executable with no commands and no
/// flags is valid, as are a blank version, description and framework.
pub fn validate_executable(exe: &Executable) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if is_blank(&exe.name) {
        errors.push(ValidationError::BlankName);
    }
    if is_blank(&exe.owner) {
        errors.push(ValidationError::BlankOwner);
    }

    errors.extend(validate_commands(&exe.commands));
    errors.extend(validate_flags(&exe.flags));

    errors
}

impl Executable {
    /// Validates this executable. See [`validate_executable`].
    pub fn validate(&self) -> Vec<ValidationError> {
        validate_executable(self)
    }
}

fn validate_commands(commands: &[Command]) -> Vec<ValidationError> {
    commands
        .iter()
        .enumerate()
        .filter(|(_, c)| is_blank(&c.name))
        .map(|(index, _)| ValidationError::BlankCommandName { index })
        .collect()
}

fn validate_flags(flags: &[Flag]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, flag) in flags.iter().enumerate() {
        if is_blank(&flag.long_name) {
            errors.push(ValidationError::BlankFlagLongName { index });
        }
        if is_blank(&flag.type_string) {
            errors.push(ValidationError::BlankFlagTypeString { index });
        }
    }

    errors
}

fn is_blank(s: &str) -> bool {
    s.is_empty()
}
