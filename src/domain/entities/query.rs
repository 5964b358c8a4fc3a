//! Character query entity built from raw command input.

use crate::error::AppError;

/// A validated character name.
///
/// The only check is that the trimmed input is non-empty; everything else
/// (spaces, apostrophes, non-ASCII letters) is passed to the stats provider
/// as-is and percent-encoded by the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterQuery {
    name: String,
}

impl CharacterQuery {
    /// Builds a query from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the input is empty or whitespace-only.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(AppError::validation("Please enter a valid character name."));
        }

        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_trims_input() {
        let query = CharacterQuery::parse("  Gandalf the Grey \n").unwrap();
        assert_eq!(query.name(), "Gandalf the Grey");
    }

    #[test]
    fn test_query_rejects_blank_input() {
        for raw in ["", "   ", "\t\n", "\u{3000}"] {
            let result = CharacterQuery::parse(raw);
            assert!(
                matches!(result, Err(AppError::Validation { .. })),
                "input {raw:?} should be rejected"
            );
        }
    }
}
