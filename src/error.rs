//! Error types for mask construction and field input.
//!
//! Neither error is fatal to a form. A rejected edit simply leaves the field
//! untouched; the error only says why.

use crate::field::FieldKind;
use std::fmt;

/// Errors returned when building a [`MaskTemplate`](crate::mask::MaskTemplate)
/// from a runtime string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// The mask pattern was empty.
    Empty,

    /// The mask pattern has no slot (`#`) characters, so it can never
    /// display any input.
    NoSlots {
        /// Length of the pattern in characters.
        length: usize,
    },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "mask pattern is empty"),
            Self::NoSlots { length } => {
                write!(
                    f,
                    "mask pattern has no '#' slots ({} literal characters only)",
                    length
                )
            }
        }
    }
}

impl std::error::Error for MaskError {}

/// Reasons a field refuses a candidate value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The candidate is longer than the field currently allows.
    TooLong {
        /// The field that rejected the edit.
        field: FieldKind,
        /// Length of the candidate in characters, before filtering.
        length: usize,
        /// The maximum length in effect for this candidate.
        maximum: usize,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong {
                field,
                length,
                maximum,
            } => {
                write!(
                    f,
                    "{} too long: got {} characters, maximum is {}",
                    field, length, maximum
                )
            }
        }
    }
}

impl std::error::Error for InputError {}
