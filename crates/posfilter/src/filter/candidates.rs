// Bounded, case-insensitively deduplicated candidate list

use std::collections::HashSet;

/// Replacement candidates in discovery order.
///
/// Holds at most `capacity` entries, and never two entries that are equal
/// as written or after lower-casing both.
#[derive(Debug, Clone)]
pub struct CandidateList {
    items: Vec<String>,
    folded: HashSet<String>,
    capacity: usize,
}

impl CandidateList {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            folded: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns `true` if `word` or a case variant of it is already listed.
    pub fn contains(&self, word: &str) -> bool {
        self.items.iter().any(|w| w == word) || self.folded.contains(&word.to_lowercase())
    }

    /// Append a candidate. Duplicates and pushes onto a full list are
    /// ignored.
    pub fn push(&mut self, word: &str) {
        if self.is_full() || self.contains(word) {
            return;
        }
        self.folded.insert(word.to_lowercase());
        self.items.push(word.to_string());
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}
