//! Bulk CSV import.
//!
//! Rows are validated one by one against the accumulating in-memory ticket
//! set, so later rows see ids and labels introduced by earlier rows. Nothing
//! is written unless at least one row survives validation.

use serde::Deserialize;
use tracing::debug;

use crate::core::{Ticket, label, next_ticket_id};
use crate::error::{Result, TicketLabelError};
use crate::storage::{LabelRepository, TicketRepository, decode_text};

/// Summary of a completed import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    /// Rows appended to the store.
    pub added: usize,
    /// Rows dropped for an empty title or content.
    pub skipped: usize,
}

/// One uploaded row, addressed by header name. Everything is optional:
/// absent columns and short rows behave like empty fields.
#[derive(Debug, Default, Deserialize)]
struct ImportRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    label: Option<String>,
}

/// Imports tickets from a CSV blob (`id,title,content,label` header; the id
/// and label columns are optional).
///
/// Candidate ids are honored only when they are plain digit strings that do
/// not collide with an existing or already-imported ticket; collisions are
/// silently reassigned to the next free id. Unknown labels are registered
/// and the label list is saved once, before the tickets, at commit time.
///
/// Fails with [`TicketLabelError::NothingImported`] when no row survives
/// validation; in that case nothing is written.
pub fn import_csv<S>(storage: &S, data: &[u8]) -> Result<ImportReport>
where
    S: TicketRepository + LabelRepository,
{
    let text = decode_text(data);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut tickets = storage.load_all();
    let mut labels = storage.load_labels();
    let mut added = 0usize;
    let mut skipped = 0usize;

    for row in reader.deserialize::<ImportRow>() {
        let Ok(row) = row else {
            skipped += 1;
            debug!("skipping unreadable csv row");
            continue;
        };

        let title = row.title.as_deref().map_or("", str::trim);
        let content = row.content.as_deref().map_or("", str::trim);
        if title.is_empty() || content.is_empty() {
            skipped += 1;
            debug!("skipping row with empty title or content");
            continue;
        }

        let id = resolve_id(row.id.as_deref(), &tickets);
        let ticket_label = label::normalize(row.label.as_deref());
        if let Some(name) = ticket_label.as_deref() {
            label::register(&mut labels, name);
        }

        tickets.push(Ticket::new(id, title, content, ticket_label));
        added += 1;
    }

    if added == 0 {
        return Err(TicketLabelError::NothingImported);
    }

    storage.save_labels(&labels)?;
    storage.save_all(&tickets)?;
    Ok(ImportReport { added, skipped })
}

/// Picks the row's candidate id when it is a digit string free of
/// collisions, otherwise falls back to the next free id.
fn resolve_id(candidate: Option<&str>, tickets: &[Ticket]) -> u64 {
    let parsed = candidate
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
        .and_then(|s| s.parse::<u64>().ok());

    match parsed {
        Some(id) if !tickets.iter().any(|t| t.id == id) => id,
        Some(id) => {
            let fresh = next_ticket_id(tickets);
            debug!(candidate = id, assigned = fresh, "import id collision, reassigned");
            fresh
        },
        None => next_ticket_id(tickets),
    }
}
