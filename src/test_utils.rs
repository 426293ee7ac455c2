//! Test utilities for ticket-label
//!
//! This module provides common test fixtures to reduce duplication in
//! test code across the codebase.

#![cfg(test)]

use tempfile::TempDir;

use crate::core::Ticket;
use crate::storage::FileStorage;

/// Test fixture holding storage rooted at a temporary data directory.
pub struct TestStore {
    pub temp_dir: TempDir,
    pub storage: FileStorage,
}

impl TestStore {
    /// Creates an empty store in a fresh temporary directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = FileStorage::new(temp_dir.path());

        Self { temp_dir, storage }
    }

    /// Creates a store pre-populated with the given tickets.
    pub fn with_tickets(tickets: &[Ticket]) -> Self {
        let store = Self::new();
        store
            .storage
            .save_tickets(tickets)
            .expect("Failed to save tickets");
        store
    }
}

/// Creates a test ticket with placeholder content.
pub fn sample_ticket(id: u64, title: &str) -> Ticket {
    Ticket::new(id, title, format!("Content for {title}"), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_empty() {
        let store = TestStore::new();
        assert!(store.storage.load_tickets().is_empty());
    }

    #[test]
    fn test_store_with_tickets() {
        let store = TestStore::with_tickets(&[sample_ticket(1001, "a"), sample_ticket(1002, "b")]);
        assert_eq!(store.storage.load_tickets().len(), 2);
    }
}
