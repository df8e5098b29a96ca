//! Invariant checks for finished tickets and books
//!
//! The generator only ever produces valid books; these checks exist for
//! callers that load a book from elsewhere (e.g. a JSON export) and for tests.

use thiserror::Error;

use crate::partition::COLUMN_RANGES;
use crate::types::{
    Book, Ticket, HIGHEST_NUMBER, LOWEST_NUMBER, MAX_PER_COLUMN, NUMBERS_PER_ROW,
    NUMBERS_PER_TICKET, TICKET_ROWS,
};

/// The first rule a ticket or book breaks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("ticket {ticket} has {count} numbers, expected 15")]
    FilledCount { ticket: usize, count: usize },

    #[error("ticket {ticket} row {row} has {count} numbers, expected 5")]
    RowCount { ticket: usize, row: usize, count: usize },

    #[error("ticket {ticket} column {col} has {count} numbers, expected 1 to 3")]
    ColumnCount { ticket: usize, col: usize, count: usize },

    #[error("ticket {ticket} has {number} in column {col}, outside its range")]
    OutOfRange { ticket: usize, col: usize, number: u8 },

    #[error("ticket {ticket} column {col} is not strictly ascending")]
    NotAscending { ticket: usize, col: usize },

    #[error("number {number} appears more than once in the book")]
    Duplicate { number: u8 },

    #[error("number {number} is missing from the book")]
    Missing { number: u8 },
}

/// Check one ticket; `index` is only used in the error
pub fn validate_ticket(ticket: &Ticket, index: usize) -> Result<(), InvariantViolation> {
    let count = ticket.filled_count();
    if count != NUMBERS_PER_TICKET {
        return Err(InvariantViolation::FilledCount { ticket: index, count });
    }

    for row in 0..TICKET_ROWS {
        let count = ticket.row_count(row);
        if count != NUMBERS_PER_ROW {
            return Err(InvariantViolation::RowCount { ticket: index, row, count });
        }
    }

    for (col, range) in COLUMN_RANGES.iter().enumerate() {
        let count = ticket.column_count(col);
        if !(1..=MAX_PER_COLUMN).contains(&count) {
            return Err(InvariantViolation::ColumnCount { ticket: index, col, count });
        }
        if let Some(number) = ticket.column(col).find(|&n| !range.contains(n)) {
            return Err(InvariantViolation::OutOfRange { ticket: index, col, number });
        }
        let mut prev = None;
        for number in ticket.column(col) {
            if prev.is_some_and(|p| p >= number) {
                return Err(InvariantViolation::NotAscending { ticket: index, col });
            }
            prev = Some(number);
        }
    }

    Ok(())
}

/// Check every ticket, then that the book uses 1..=90 exactly once
pub fn validate_book(book: &Book) -> Result<(), InvariantViolation> {
    for (index, ticket) in book.iter().enumerate() {
        validate_ticket(ticket, index)?;
    }

    let mut seen = [false; HIGHEST_NUMBER as usize + 1];
    for number in book.numbers() {
        let slot = &mut seen[number as usize];
        if *slot {
            return Err(InvariantViolation::Duplicate { number });
        }
        *slot = true;
    }
    if let Some(number) = (LOWEST_NUMBER..=HIGHEST_NUMBER).find(|&n| !seen[n as usize]) {
        return Err(InvariantViolation::Missing { number });
    }

    Ok(())
}
