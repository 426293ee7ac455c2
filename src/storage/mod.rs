//! File-backed persistence.
//!
//! Storage is deliberately simple: flat files, whole-file rewrites, no
//! locking. The repository traits are the seam between operations and the
//! concrete [`FileStorage`].

mod file;
mod repository;

pub use file::{FileStorage, LABEL_COLORS_FILE, LABELS_FILE, TICKETS_FILE};
pub use repository::{LabelRepository, Repository, TicketRepository};

pub(crate) use file::decode_text;
