//! Core domain types: tickets, labels, and their invariants.

pub mod label;
pub mod ticket;

pub use ticket::{FIRST_TICKET_ID, Ticket, TicketDraft, next_ticket_id};
