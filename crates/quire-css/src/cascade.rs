//! Outcomes of a cascaded property lookup.

use thiserror::Error;

/// The result of looking up one property on one node.
///
/// Callers must handle all three branches: a resolved value, an explicit
/// instruction to take the parent's value, or no cascade data at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cascaded<T> {
    /// The cascade produced a value for this node.
    Value(T),
    /// The cascaded value is `inherit`: defer to the parent.
    Inherit,
    /// Nothing in the cascade applies; use the built-in default.
    NoStyles,
}

impl<T> Cascaded<T> {
    /// The resolved value, if there is one.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Inherit | Self::NoStyles => None,
        }
    }

    /// Map the resolved value, preserving `Inherit` and `NoStyles`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Cascaded<U> {
        match self {
            Self::Value(v) => Cascaded::Value(f(v)),
            Self::Inherit => Cascaded::Inherit,
            Self::NoStyles => Cascaded::NoStyles,
        }
    }
}

/// A declaration as it came out of the cascade, before value parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declared {
    /// A specified value, kept as source text.
    Value(String),
    /// The `inherit` keyword.
    Inherit,
}

impl Declared {
    /// Classify raw declaration text, recognising the `inherit` keyword.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.eq_ignore_ascii_case("inherit") {
            Self::Inherit
        } else {
            Self::Value(text.to_string())
        }
    }
}

/// A cascade failure that is not `inherit` or "no styles".
///
/// The renderer treats these as configuration errors: geometry computed
/// from a malformed cascade would be silently wrong, so the whole render
/// is aborted instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A property held a value that could not be interpreted.
    #[error("invalid value for '{property}': {value:?}")]
    InvalidValue {
        /// The property name, e.g. `font-size`.
        property: String,
        /// The offending source text.
        value: String,
    },
}
