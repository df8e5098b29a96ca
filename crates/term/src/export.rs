//! JSON export of books.
//!
//! One [`BookDocument`] per book; blank cells are `null`. Documents are
//! written one per line so several books can be streamed and read back.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::validate_book;
use crate::types::{Book, Cell, Ticket, TICKETS_PER_BOOK, TICKET_COLUMNS, TICKET_ROWS};

/// Rows of one ticket as plain arrays.
pub type TicketRows = [[Cell; TICKET_COLUMNS]; TICKET_ROWS];

/// Serialisable form of a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDocument {
    /// Generator seed, when the book came from a seeded run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Position of the book in its generator's sequence.
    #[serde(default)]
    pub index: u64,
    pub tickets: Vec<TicketRows>,
}

impl BookDocument {
    pub fn from_book(book: &Book, seed: Option<u64>, index: u64) -> Self {
        Self {
            seed,
            index,
            tickets: book.iter().map(|t| *t.rows()).collect(),
        }
    }

    /// Rebuild the book, rejecting documents that break any book invariant.
    pub fn into_book(self) -> Result<Book> {
        let count = self.tickets.len();
        let tickets: [TicketRows; TICKETS_PER_BOOK] = match self.tickets.try_into() {
            Ok(tickets) => tickets,
            Err(_) => bail!("expected {TICKETS_PER_BOOK} tickets, found {count}"),
        };
        let book = Book::from_tickets(tickets.map(Ticket::from_rows));
        validate_book(&book).context("document is not a valid book")?;
        Ok(book)
    }
}

/// Serialise one book as a single JSON line (no trailing newline).
pub fn to_json_line(book: &Book, seed: Option<u64>, index: u64) -> Result<String> {
    let doc = BookDocument::from_book(book, seed, index);
    Ok(serde_json::to_string(&doc)?)
}

/// Parse one JSON document back into a validated book.
pub fn from_json(json: &str) -> Result<Book> {
    let doc: BookDocument = serde_json::from_str(json).context("malformed book document")?;
    doc.into_book()
}
