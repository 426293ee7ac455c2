//! ticket-label - a small file-backed ticket labeling service
//!
//! Tickets (id, title, content, optional label) live in a flat CSV file;
//! the label list and label colors live in JSON files next to it. An HTTP
//! API lists, creates, and labels tickets, manages labels, and bulk-imports
//! CSV uploads. A fixed set of default labels (with display colors) is
//! always present and cannot be removed or recolored.
//!
//! # Known limitation
//!
//! Every operation is a full load→mutate→save cycle over the shared files,
//! with no locking. Two concurrent writers can compute the same next ticket
//! id, and the later whole-file rewrite silently discards the earlier one.
//! The service is intended for single-user, low-concurrency use.
//!
//! # Example
//!
//! ```rust,ignore
//! use ticket_label::core::TicketDraft;
//! use ticket_label::ops;
//! use ticket_label::storage::FileStorage;
//!
//! let storage = FileStorage::new("data");
//! let ticket = ops::create_ticket(&storage, TicketDraft {
//!     title: "login fails".to_string(),
//!     content: "stack trace attached".to_string(),
//!     label: Some("故障".to_string()),
//! })?;
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::indexing_slicing)]

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod import;
pub mod ops;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, TicketLabelError};
