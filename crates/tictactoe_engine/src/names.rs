//! Display names bound to a match.

use crate::{Mark, NameError};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The two player names, each non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerNames {
    x: String,
    o: String,
}

impl PlayerNames {
    /// Validates and trims both names.
    #[instrument(skip_all)]
    pub fn new(x: &str, o: &str) -> Result<Self, NameError> {
        let x = x.trim();
        if x.is_empty() {
            return Err(NameError::Blank(Mark::X));
        }
        let o = o.trim();
        if o.is_empty() {
            return Err(NameError::Blank(Mark::O));
        }
        Ok(Self {
            x: x.to_string(),
            o: o.to_string(),
        })
    }

    /// Name playing X.
    pub fn x(&self) -> &str {
        &self.x
    }

    /// Name playing O.
    pub fn o(&self) -> &str {
        &self.o
    }

    /// Name playing `mark`.
    pub fn of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_trimmed() {
        let names = PlayerNames::new("  Alice ", "\tBob\n").unwrap();
        assert_eq!(names.x(), "Alice");
        assert_eq!(names.of(Mark::O), "Bob");
    }

    #[test]
    fn test_blank_names_rejected() {
        assert_eq!(PlayerNames::new("", "Bob"), Err(NameError::Blank(Mark::X)));
        assert_eq!(PlayerNames::new("Alice", "   "), Err(NameError::Blank(Mark::O)));
        assert_eq!(PlayerNames::new(" ", " "), Err(NameError::Blank(Mark::X)));
    }
}
