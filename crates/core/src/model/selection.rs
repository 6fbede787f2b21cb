use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A 1-based answer choice, as shown next to each option.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection(usize);

impl Selection {
    /// Creates a selection from a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns `ParseSelectionError::Zero` if `position` is zero.
    pub fn new(position: usize) -> Result<Self, ParseSelectionError> {
        if position == 0 {
            return Err(ParseSelectionError::Zero);
        }
        Ok(Self(position))
    }

    /// Returns the 1-based position as entered by the user.
    #[must_use]
    pub fn position(&self) -> usize {
        self.0
    }

    /// Returns the 0-based index into an option list.
    #[must_use]
    pub fn index(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selection({})", self.0)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Selection {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<usize>()
            .map_err(|_| ParseSelectionError::NotANumber)?;
        Selection::new(value)
    }
}

/// Errors raised while turning raw input into a selection.
///
/// Whether the position fits a particular question's option list is not a
/// parsing concern; grading treats an out-of-range selection as invalid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseSelectionError {
    #[error("selection is not a whole number")]
    NotANumber,

    #[error("selection positions start at 1")]
    Zero,
}
