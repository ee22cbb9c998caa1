//! Closed sets of string values (brand, status, category, ...)
//!
//! Each choice has a stored value (`"hp"`) and a human-readable label
//! ("Hewlett-Packard"). Use the [`choice_enum!`](crate::choice_enum) macro to
//! declare one.

use thiserror::Error;

/// A closed set of values with labels
pub trait Choice: Copy + Eq + Sized + 'static {
    /// Name of the field this choice describes, used in error messages
    const FIELD: &'static str;

    /// Every member, in declaration order
    fn all() -> &'static [Self];

    /// The stored value
    fn as_str(&self) -> &'static str;

    /// The display label
    fn label(&self) -> &'static str;

    /// Membership check against the stored values
    fn parse_choice(value: &str) -> Result<Self, ChoiceError> {
        Self::all()
            .iter()
            .copied()
            .find(|choice| choice.as_str() == value)
            .ok_or_else(|| ChoiceError {
                field: Self::FIELD,
                value: value.to_string(),
            })
    }

    /// Comma-separated list of stored values, for messages
    fn expected() -> String {
        Self::all()
            .iter()
            .map(Choice::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A string is not a member of a choice set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {field}")]
pub struct ChoiceError {
    pub field: &'static str,
    pub value: String,
}
