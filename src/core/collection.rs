use std::collections::HashMap;
use thiserror::Error;

use crate::core::sequence::ReferenceSequence;
use crate::core::types::SequenceId;
use crate::utils::validation::check_reference_limit;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Duplicate sequence identifier: {0}")]
    DuplicateId(SequenceId),

    #[error("{0}")]
    TooManyReferences(String),
}

/// Reference sequences in insertion order, with an identifier index.
///
/// Insertion order is significant: it breaks ties between equally scored
/// references when results are ranked.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCollection {
    /// All references, in the order they were added
    references: Vec<ReferenceSequence>,

    /// Index: sequence ID -> index in references vec
    id_to_index: HashMap<SequenceId, usize>,
}

impl ReferenceCollection {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from sequences, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::DuplicateId` if two sequences share an identifier.
    pub fn from_sequences(
        sequences: impl IntoIterator<Item = ReferenceSequence>,
    ) -> Result<Self, CollectionError> {
        let mut collection = Self::new();
        for sequence in sequences {
            collection.add(sequence)?;
        }
        Ok(collection)
    }

    /// Append a reference to the collection.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::DuplicateId` if the identifier is already present,
    /// or `CollectionError::TooManyReferences` if the size limit is reached.
    pub fn add(&mut self, reference: ReferenceSequence) -> Result<(), CollectionError> {
        if let Some(msg) = check_reference_limit(self.references.len()) {
            return Err(CollectionError::TooManyReferences(msg));
        }
        if self.id_to_index.contains_key(&reference.id) {
            return Err(CollectionError::DuplicateId(reference.id));
        }

        self.id_to_index
            .insert(reference.id.clone(), self.references.len());
        self.references.push(reference);
        Ok(())
    }

    /// Get a reference by ID
    #[must_use]
    pub fn get(&self, id: &SequenceId) -> Option<&ReferenceSequence> {
        self.id_to_index.get(id).map(|&idx| &self.references[idx])
    }

    /// Get a reference by its insertion index
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&ReferenceSequence> {
        self.references.get(index)
    }

    /// All references in insertion order
    #[must_use]
    pub fn references(&self) -> &[ReferenceSequence] {
        &self.references
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceSequence> {
        self.references.iter()
    }

    /// Number of references in collection
    #[must_use]
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Check if collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReferenceCollection {
    type Item = &'a ReferenceSequence;
    type IntoIter = std::slice::Iter<'a, ReferenceSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.references.iter()
    }
}
