//! Identity minting for pages and elements.

use crc32fast::Hasher;
use uuid::Uuid;

/// Source of fresh identities.
///
/// Implementations never return the same id twice. Callers that must also
/// avoid ids already present in a loaded project check membership
/// themselves.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs, used by the interactive editor.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `<seed>-<n>` ids.
///
/// The seed is the CRC32 of a name so that two generators created for the
/// same name yield the same sequence.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    seed: String,
    count: u32,
}

impl SequentialIds {
    pub fn new(name: &str) -> Self {
        let mut hasher = Hasher::new();
        hasher.update(name.as_bytes());
        Self::from_seed(format!("{:x}", hasher.finalize()))
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new("/workbook.json");

        let id1 = ids.next_id();
        let id2 = ids.next_id();

        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id1.starts_with(ids.seed()));
    }

    #[test]
    fn test_same_name_same_seed() {
        assert_eq!(
            SequentialIds::new("a.json").seed(),
            SequentialIds::new("a.json").seed()
        );
        assert_ne!(
            SequentialIds::new("a.json").seed(),
            SequentialIds::new("b.json").seed()
        );
    }

    #[test]
    fn test_uuid_ids_are_distinct() {
        let mut ids = UuidIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
