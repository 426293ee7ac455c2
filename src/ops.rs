//! Load→mutate→save operations over the repository traits.
//!
//! Each operation reads the affected files fresh, mutates in memory, and
//! rewrites them whole. There is no locking: two concurrent creations can
//! compute the same next id and the later save overwrites the earlier one.
//! This is a known limitation of the flat-file design, acceptable for the
//! intended single-user usage.

use crate::core::{Ticket, TicketDraft, label, next_ticket_id};
use crate::error::{Result, TicketLabelError};
use crate::storage::{LabelRepository, TicketRepository};

/// Outcome of a standalone label creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCreation {
    pub name: String,
    /// `false` when the label already existed (a successful no-op).
    pub created: bool,
}

/// Validates a draft, assigns the next id, and appends the ticket.
///
/// A new label is registered (and the label list persisted) before the
/// ticket file is rewritten; label colors are not touched.
pub fn create_ticket<S>(storage: &S, draft: TicketDraft) -> Result<Ticket>
where
    S: TicketRepository + LabelRepository,
{
    let draft = draft.normalized()?;
    let mut tickets = storage.load_all();
    let ticket = Ticket::new(next_ticket_id(&tickets), draft.title, draft.content, draft.label);

    if let Some(name) = ticket.label.as_deref() {
        register_label(storage, name)?;
    }

    tickets.push(ticket.clone());
    storage.save_all(&tickets)?;
    Ok(ticket)
}

/// Overwrites the label of the ticket with `id`.
///
/// An empty or whitespace-only label clears the field. Unknown ids fail
/// with [`TicketLabelError::TicketNotFound`] and leave the store untouched.
pub fn update_ticket_label<S>(storage: &S, id: u64, new_label: Option<&str>) -> Result<Ticket>
where
    S: TicketRepository + LabelRepository,
{
    let new_label = label::normalize(new_label);
    let mut tickets = storage.load_all();
    let Some(index) = tickets.iter().position(|t| t.id == id) else {
        return Err(TicketLabelError::TicketNotFound { id });
    };

    if let Some(name) = new_label.as_deref() {
        register_label(storage, name)?;
    }

    tickets[index].label = new_label;
    storage.save_all(&tickets)?;
    Ok(tickets[index].clone())
}

/// Creates a label by name. Creating an existing label is a successful
/// no-op, reported through [`LabelCreation::created`].
pub fn create_label<S: LabelRepository>(storage: &S, name: &str) -> Result<LabelCreation> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TicketLabelError::EmptyField { field: "name" });
    }

    let mut labels = storage.load_labels();
    if !label::register(&mut labels, name) {
        return Ok(LabelCreation {
            name: name.to_string(),
            created: false,
        });
    }

    storage.save_labels(&labels)?;
    Ok(LabelCreation {
        name: name.to_string(),
        created: true,
    })
}

/// The id the next created ticket would get, computed from current state.
pub fn preview_next_id<S: TicketRepository>(storage: &S) -> u64 {
    next_ticket_id(&storage.load_all())
}

/// Appends `name` to the stored label list if it is unknown.
fn register_label<S: LabelRepository>(storage: &S, name: &str) -> Result<()> {
    let mut labels = storage.load_labels();
    if label::register(&mut labels, name) {
        storage.save_labels(&labels)?;
    }
    Ok(())
}
