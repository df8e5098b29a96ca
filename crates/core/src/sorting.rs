//! Column sorting - makes every column ascend top to bottom
//!
//! Placement decides which cells are filled; sorting only reorders the values
//! within those cells.

use arrayvec::ArrayVec;

use crate::types::{Ticket, MAX_PER_COLUMN, TICKET_COLUMNS, TICKET_ROWS};

/// Sort the filled values of every column in place
pub fn sort_columns(ticket: &mut Ticket) {
    for col in 0..TICKET_COLUMNS {
        let mut values: ArrayVec<u8, MAX_PER_COLUMN> = ticket.column(col).collect();
        values.sort_unstable();

        let mut values = values.into_iter();
        for row in 0..TICKET_ROWS {
            if ticket.is_blank(row, col) {
                continue;
            }
            ticket.set(row, col, values.next());
        }
    }
}
