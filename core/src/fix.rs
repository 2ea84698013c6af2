//! Normalization of user-supplied descriptors.
//!
//! [`Executable::fix`] cascades into every [`Command`] and then every [`Flag`],
//! deriving the fields the user left out. It stops at the first failure:
//! without a resolved type there is nothing sound to derive for the rest of
//! the flag, and the run should be aborted rather than partially rendered.
//!
//! # Examples
//!
//! ```
//! use cli_skeleton_core::*;
//!
//! let mut exe = Executable::new("todo", "me");
//! exe.flags.push(Flag::new("debug", "b"));
//! exe.flags.push(Flag::new("level", "float"));
//!
//! let err = exe.fix().unwrap_err();
//! assert_eq!(err, FixError::UnrecognizedType("float".into()));
//! assert_eq!(exe.flags[0].type_string, "bool");
//! ```

use thiserror::Error;
use tracing::debug;

use crate::{Command, Executable, Flag, FlagType};

/// Normalization failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixError {
    /// The flag type token matches none of the known aliases.
    #[error("unrecognized flag type `{0}`, select from bool|int|string")]
    UnrecognizedType(String),
}

impl Flag {
    /// Fills in every derivable field.
    ///
    /// Resolves the type token, then fills the default value, name, short
    /// name and variable name where they are empty. Running it again on a
    /// normalized flag changes nothing.
    ///
    /// An explicit zero default (`false`, `0`, `""`) cannot be told apart from
    /// an omitted one; both end up as the resolved type's zero value. A
    /// non-zero default is kept as supplied even when its variant differs
    /// from the resolved type (`int` with `"abc"` stays `"abc"`); neither
    /// `fix` nor validation reports the mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`FixError::UnrecognizedType`] if the type token cannot be
    /// resolved. The flag is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use cli_skeleton_core::{Flag, FlagValue};
    ///
    /// let mut flag = Flag::new("token", "s").with_default(FlagValue::String("ABCD1124".into()));
    /// flag.fix().unwrap();
    /// assert_eq!(flag.type_string, "string");
    /// assert_eq!(flag.default, Some(FlagValue::String("ABCD1124".into())));
    /// ```
    pub fn fix(&mut self) -> Result<(), FixError> {
        let ty = FlagType::resolve(&self.type_string)?;
        self.type_string = ty.as_str().to_string();

        if self.default.as_ref().is_none_or(|v| v.is_zero()) {
            self.default = Some(ty.zero_value());
        }

        if self.name.is_empty() {
            self.name = self.long_name.clone();
        }

        if self.short_name.is_empty() {
            self.short_name = short_name_of(&self.long_name);
        }

        if self.variable_name.is_empty() {
            self.variable_name = variable_name_of(&self.long_name);
        }

        debug!(
            long_name = %self.long_name,
            short_name = %self.short_name,
            variable_name = %self.variable_name,
            ty = %ty,
            default = %self.default.as_ref().map(ToString::to_string).unwrap_or_default(),
            "Normalized flag"
        );
        Ok(())
    }
}

impl Command {
    /// Normalizes the command.
    ///
    /// Nothing is derived for commands yet; a blank name is reported by
    /// validation instead.
    ///
    /// # Errors
    ///
    /// Currently never fails.
    pub fn fix(&mut self) -> Result<(), FixError> {
        Ok(())
    }
}

impl Executable {
    /// Normalizes every command, then every flag, in order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a command or flag. Entries after the
    /// failing one are not normalized.
    pub fn fix(&mut self) -> Result<(), FixError> {
        for command in &mut self.commands {
            command.fix()?;
        }
        for flag in &mut self.flags {
            flag.fix()?;
        }
        debug!(
            name = %self.name,
            commands = self.commands.len(),
            flags = self.flags.len(),
            "Normalized executable"
        );
        Ok(())
    }
}

/// First character of the long name, lowercased.
fn short_name_of(long_name: &str) -> String {
    long_name
        .chars()
        .next()
        .and_then(|c| c.to_lowercase().next())
        .map(String::from)
        .unwrap_or_default()
}

/// camelCase identifier from a kebab-case long name.
fn variable_name_of(long_name: &str) -> String {
    let mut segments = long_name.split('-');
    let mut out = segments.next().unwrap_or_default().to_lowercase();
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
