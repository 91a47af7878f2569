use serde::Serialize;

use crate::FoodEnquete;

/// Error type for storage failures.
///
/// The submission flow does not try to recover from these; they are passed
/// to the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Storage unavailable: {0}")]
    Unavailable(#[from] anyhow::Error),
}

impl RepositoryError {
    /// Create a storage error from any error type.
    pub fn unavailable(err: impl Into<anyhow::Error>) -> Self {
        Self::Unavailable(err.into())
    }
}

/// An answer that has been stored, together with its assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredEnquete {
    pub id: u64,
    #[serde(flatten)]
    pub enquete: FoodEnquete,
}

/// Storage for accepted answers.
///
/// Ids are sequential and start at 1. Saving the same email address twice
/// stores two records.
pub trait EnqueteRepository {
    /// The id the next successful `save` will assign.
    fn next_id(&self) -> u64;

    /// Store an answer and return its id.
    fn save(&mut self, enquete: FoodEnquete) -> Result<u64, RepositoryError>;

    fn find(&self, id: u64) -> Option<StoredEnquete>;

    /// Number of stored answers.
    fn count(&self) -> usize;
}

/// Keeps answers in memory, in insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    records: Vec<StoredEnquete>,
    next_id: u64,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// All stored answers, oldest first.
    pub fn all(&self) -> &[StoredEnquete] {
        &self.records
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EnqueteRepository for InMemoryRepository {
    fn next_id(&self) -> u64 {
        self.next_id
    }

    fn save(&mut self, enquete: FoodEnquete) -> Result<u64, RepositoryError> {
        let id = self.next_id;
        self.records.push(StoredEnquete { id, enquete });
        self.next_id += 1;
        Ok(id)
    }

    fn find(&self, id: u64) -> Option<StoredEnquete> {
        self.records.iter().find(|record| record.id == id).cloned()
    }

    fn count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one() {
        let mut repo = InMemoryRepository::new();
        assert_eq!(repo.next_id(), 1);

        let first = repo.save(FoodEnquete::default()).unwrap();
        let second = repo.save(FoodEnquete::default()).unwrap();

        assert_eq!((first, second), (1, 2));
        assert_eq!(repo.next_id(), 3);
        assert_eq!(repo.count(), 2);
    }

    #[test]
    fn find_by_id() {
        let mut repo = InMemoryRepository::new();
        let enquete = FoodEnquete {
            name: "Hanako Yamada".into(),
            ..Default::default()
        };
        let id = repo.save(enquete.clone()).unwrap();

        let found = repo.find(id).unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.enquete, enquete);
        assert!(repo.find(id + 1).is_none());
        assert!(repo.find(0).is_none());
    }

    #[test]
    fn storage_error_message() {
        let err = RepositoryError::unavailable(anyhow::anyhow!("disk full"));
        assert_eq!(err.to_string(), "Storage unavailable: disk full");
    }
}
