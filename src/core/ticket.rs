//! Ticket record and id assignment.

use serde::{Deserialize, Serialize};

use crate::core::label;
use crate::error::{Result, TicketLabelError};

/// Id handed to the first ticket of an empty store.
pub const FIRST_TICKET_ID: u64 = 1001;

/// A support ticket as persisted in the ticket file.
///
/// `label` is `None` for unlabeled tickets; it serializes as JSON `null`
/// and as an empty CSV field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub label: Option<String>,
}

impl Ticket {
    /// Creates a ticket with the given fields.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        content: impl Into<String>,
        label: Option<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            label,
        }
    }
}

/// Incoming ticket payload before validation.
///
/// All fields default so that missing JSON keys behave like empty input
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl TicketDraft {
    /// Trims all fields and rejects drafts with an empty title or content.
    ///
    /// A whitespace-only label is normalized to `None`.
    pub fn normalized(self) -> Result<Self> {
        let title = self.title.trim().to_string();
        let content = self.content.trim().to_string();
        if title.is_empty() {
            return Err(TicketLabelError::EmptyField { field: "title" });
        }
        if content.is_empty() {
            return Err(TicketLabelError::EmptyField { field: "content" });
        }
        Ok(Self {
            title,
            content,
            label: label::normalize(self.label.as_deref()),
        })
    }
}

/// Next free ticket id: [`FIRST_TICKET_ID`] for an empty store, else max + 1.
///
/// Two callers racing through a load→save cycle can both observe the same
/// value; see the crate-level notes on concurrency.
pub fn next_ticket_id(tickets: &[Ticket]) -> u64 {
    tickets
        .iter()
        .map(|t| t.id)
        .max()
        .map_or(FIRST_TICKET_ID, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_for_empty_store() {
        assert_eq!(next_ticket_id(&[]), FIRST_TICKET_ID);
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        let tickets = vec![
            Ticket::new(1001, "a", "b", None),
            Ticket::new(2000, "c", "d", None),
            Ticket::new(1005, "e", "f", None),
        ];
        assert_eq!(next_ticket_id(&tickets), 2001);
    }

    #[test]
    fn test_draft_trims_fields() {
        let draft = TicketDraft {
            title: "  login fails  ".to_string(),
            content: " stack trace attached ".to_string(),
            label: Some("  故障 ".to_string()),
        };
        let draft = draft.normalized().unwrap();
        assert_eq!(draft.title, "login fails");
        assert_eq!(draft.content, "stack trace attached");
        assert_eq!(draft.label.as_deref(), Some("故障"));
    }

    #[test]
    fn test_draft_rejects_blank_title() {
        let draft = TicketDraft {
            title: "   ".to_string(),
            content: "body".to_string(),
            label: None,
        };
        assert!(matches!(
            draft.normalized(),
            Err(TicketLabelError::EmptyField { field: "title" })
        ));
    }

    #[test]
    fn test_draft_clears_whitespace_label() {
        let draft = TicketDraft {
            title: "t".to_string(),
            content: "c".to_string(),
            label: Some("   ".to_string()),
        };
        assert_eq!(draft.normalized().unwrap().label, None);
    }
}
