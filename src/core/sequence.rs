use serde::{Deserialize, Serialize};

use crate::core::types::SequenceId;
use crate::matching::MatchError;
use crate::utils::validation::find_invalid_base;

/// A named nucleotide sequence from a reference collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSequence {
    /// Identifier (FASTA record name)
    pub id: SequenceId,

    /// Free-text description (rest of the FASTA definition line, may be empty)
    #[serde(default)]
    pub description: String,

    /// Raw sequence content
    pub sequence: String,
}

impl ReferenceSequence {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        sequence: impl Into<String>,
    ) -> Self {
        Self {
            id: SequenceId::new(id),
            description: description.into(),
            sequence: sequence.into(),
        }
    }

    /// Sequence length in bases
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Prepare raw user input for use as a query.
///
/// Whitespace (including line breaks from pasted sequences) is removed and the
/// result uppercased before validation.
///
/// # Errors
///
/// Returns `MatchError::EmptyQuery` if nothing is left after stripping whitespace,
/// or `MatchError::InvalidSequence` if a character other than A, C, G, T is present.
pub fn normalize_query(raw: &str) -> Result<String, MatchError> {
    let query: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if query.is_empty() {
        return Err(MatchError::EmptyQuery);
    }

    if let Some((position, character)) = find_invalid_base(&query) {
        return Err(MatchError::InvalidSequence {
            position,
            character,
        });
    }

    Ok(query)
}
