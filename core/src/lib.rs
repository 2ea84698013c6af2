//! Normalization and validation of CLI executable descriptions.
//!
//! This crate sits between whatever loads a user's description of a CLI
//! program and the renderer that scaffolds its source files:
//!
//! - [`Executable`] — root description (name, owner, version, framework),
//!   owning its [`Command`]s and [`Flag`]s.
//! - [`FlagType`] — the three canonical flag types and the loose,
//!   case-insensitive aliases that resolve to them.
//! - [`Executable::fix`] — derives missing fields (short names, camelCase
//!   variable names, canonical types, zero defaults). Stops at the first
//!   [`FixError`].
//! - [`validate_executable`] — reports every missing required field as a
//!   [`ValidationError`].
//! - [`Executable::overwrite`] — sets one named field from a closed set of
//!   value kinds.
//!
//! # Example
//!
//! ```
//! use cli_skeleton_core::*;
//!
//! let mut exe = Executable::new("todo", "tcnksm");
//! exe.commands.push(Command::new("add"));
//! exe.flags.push(Flag::new("ignore-case", "B"));
//! exe.flags.push(
//!     Flag::new("token", "str").with_default(FlagValue::String("ABCD1124".into())),
//! );
//!
//! exe.fix().unwrap();
//! assert!(exe.validate().is_empty());
//!
//! let flag = exe.find_flag("ignore-case").unwrap();
//! assert_eq!(flag.short_name, "i");
//! assert_eq!(flag.variable_name, "ignoreCase");
//! assert_eq!(flag.default, Some(FlagValue::Bool(false)));
//! ```

mod fix;
mod flag_type;
mod overwrite;
mod types;
mod validate;

pub use fix::FixError;
pub use flag_type::{FlagType, FlagValue, TYPE_ALIASES};
pub use overwrite::{ExecutableField, FieldValue, OverwriteError};
pub use types::*;
pub use validate::{ValidationError, validate_executable};
