use std::collections::HashMap;

use crate::core::Ticket;
use crate::error::Result;

/// Repository trait for ticket collection storage
///
/// This trait defines the interface for loading and rewriting the ticket
/// collection, allowing for different storage implementations.
pub trait TicketRepository: Send + Sync {
    /// Loads the full ticket collection, empty when nothing is stored
    fn load_all(&self) -> Vec<Ticket>;

    /// Rewrites the full ticket collection
    fn save_all(&self, tickets: &[Ticket]) -> Result<()>;
}

/// Repository trait for the label list and label colors
pub trait LabelRepository: Send + Sync {
    /// Loads the ordered label list
    fn load_labels(&self) -> Vec<String>;

    /// Rewrites the label list (defaults are re-added by the implementation)
    fn save_labels(&self, labels: &[String]) -> Result<()>;

    /// Loads the label→color mapping with defaults merged in
    fn load_colors(&self) -> HashMap<String, String>;

    /// Rewrites the label→color mapping
    fn save_colors(&self, colors: &HashMap<String, String>) -> Result<()>;
}

/// Combined repository trait
pub trait Repository: TicketRepository + LabelRepository {}

/// Implementation of Repository for types that implement both traits
impl<T> Repository for T where T: TicketRepository + LabelRepository {}

use super::file::FileStorage;

impl TicketRepository for FileStorage {
    fn load_all(&self) -> Vec<Ticket> {
        self.load_tickets()
    }

    fn save_all(&self, tickets: &[Ticket]) -> Result<()> {
        self.save_tickets(tickets)
    }
}

impl LabelRepository for FileStorage {
    fn load_labels(&self) -> Vec<String> {
        self.load_labels()
    }

    fn save_labels(&self, labels: &[String]) -> Result<()> {
        self.save_labels(labels)
    }

    fn load_colors(&self) -> HashMap<String, String> {
        self.load_label_colors()
    }

    fn save_colors(&self, colors: &HashMap<String, String>) -> Result<()> {
        self.save_label_colors(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::label;
    use tempfile::TempDir;

    fn repo() -> (TempDir, FileStorage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        (temp_dir, storage)
    }

    fn sample(id: u64) -> Ticket {
        Ticket::new(id, format!("ticket {id}"), "content", None)
    }

    #[test]
    fn test_ticket_repository_save_and_load() {
        let (_dir, storage) = repo();
        let tickets = vec![sample(1001), sample(1002)];

        TicketRepository::save_all(&storage, &tickets).expect("Failed to save tickets");

        let loaded = TicketRepository::load_all(&storage);
        assert_eq!(loaded, tickets);
    }

    #[test]
    fn test_label_repository_defaults_survive_save() {
        let (_dir, storage) = repo();

        LabelRepository::save_labels(&storage, &[]).expect("Failed to save labels");

        let labels = LabelRepository::load_labels(&storage);
        assert_eq!(labels, label::default_labels());
    }

    #[test]
    fn test_label_repository_colors_round_trip() {
        let (_dir, storage) = repo();
        let mut colors = LabelRepository::load_colors(&storage);
        colors.insert("自定义".to_string(), "#abcdef".to_string());

        LabelRepository::save_colors(&storage, &colors).expect("Failed to save colors");

        let loaded = LabelRepository::load_colors(&storage);
        assert_eq!(loaded["自定义"], "#abcdef");
        assert_eq!(loaded["训练"], "#1677ff");
    }

    #[test]
    fn test_combined_repository_bound() {
        fn takes_repository(_repo: &impl Repository) {}
        let (_dir, storage) = repo();
        takes_repository(&storage);
    }
}
