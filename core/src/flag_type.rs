//! Flag type resolution.
//!
//! Users describe flag types loosely (`"s"`, `"Int"`, `"b"`). This module maps
//! those tokens onto one of three canonical [`FlagType`] tags and supplies the
//! zero value each tag defaults to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FixError;

/// Accepted type tokens, lowercased, and the type each resolves to.
///
/// Lookups lowercase the input first, so `"Int"` and `"INT"` match `"int"`.
pub const TYPE_ALIASES: &[(&str, FlagType)] = &[
    ("bool", FlagType::Bool),
    ("b", FlagType::Bool),
    ("int", FlagType::Int),
    ("i", FlagType::Int),
    ("string", FlagType::String),
    ("str", FlagType::String),
    ("s", FlagType::String),
];

/// Canonical flag value type.
///
/// # Examples
///
/// ```
/// use cli_skeleton_core::{FlagType, FlagValue};
///
/// let ty = FlagType::resolve("Str").unwrap();
/// assert_eq!(ty, FlagType::String);
/// assert_eq!(ty.as_str(), "string");
/// assert_eq!(ty.zero_value(), FlagValue::String(String::new()));
///
/// assert!(FlagType::resolve("float").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagType {
    /// Boolean switch.
    Bool,
    /// Signed integer.
    Int,
    /// Free text.
    String,
}

impl FlagType {
    /// Resolves a loose, case-insensitive type token.
    ///
    /// # Errors
    ///
    /// Returns [`FixError::UnrecognizedType`] when the token is not in
    /// [`TYPE_ALIASES`].
    pub fn resolve(token: &str) -> Result<Self, FixError> {
        let lowered = token.to_lowercase();
        TYPE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == lowered)
            .map(|(_, ty)| *ty)
            .ok_or_else(|| FixError::UnrecognizedType(token.to_string()))
    }

    /// Returns the canonical tag (`"bool"`, `"int"` or `"string"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::String => "string",
        }
    }

    /// Returns the value a flag of this type defaults to.
    pub fn zero_value(self) -> FlagValue {
        match self {
            Self::Bool => FlagValue::Bool(false),
            Self::Int => FlagValue::Int(0),
            Self::String => FlagValue::String(String::new()),
        }
    }
}

impl fmt::Display for FlagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlagType {
    type Err = FixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

/// Default value carried by a flag.
///
/// Serialized untagged, so descriptions write plain `true`, `8080` or
/// `"text"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    /// Boolean default.
    Bool(bool),
    /// Integer default.
    Int(i64),
    /// Text default.
    String(String),
}

impl FlagValue {
    /// Returns the type this value belongs to.
    pub fn flag_type(&self) -> FlagType {
        match self {
            Self::Bool(_) => FlagType::Bool,
            Self::Int(_) => FlagType::Int,
            Self::String(_) => FlagType::String,
        }
    }

    /// Returns `true` for `false`, `0` and `""`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cli_skeleton_core::FlagValue;
    ///
    /// assert!(FlagValue::Int(0).is_zero());
    /// assert!(!FlagValue::String("ABCD1124".into()).is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Bool(b) => !b,
            Self::Int(n) => *n == 0,
            Self::String(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
        }
    }
}
