//! Plain-text rendering of tickets and books.
//!
//! Each ticket is three lines; cells are right-aligned to two characters and
//! separated by `" | "`, blanks are two spaces. Tickets are separated by a
//! blank line.

use std::fmt::{self, Write};

use crate::types::{Book, Cell, Ticket};

/// Separator between cells of a row.
pub const CELL_SEPARATOR: &str = " | ";

/// Text of a blank cell.
pub const BLANK_CELL: &str = "  ";

/// Render one ticket (no trailing newline).
pub fn render_ticket(ticket: &Ticket) -> String {
    let mut out = String::with_capacity(128);
    // Writing into a String cannot fail.
    let _ = write_ticket(&mut out, ticket);
    out
}

/// Render a whole book, ending with a newline.
pub fn render_book(book: &Book) -> String {
    let mut out = String::with_capacity(1024);
    let _ = write_book(&mut out, book);
    out
}

pub fn write_ticket(out: &mut impl Write, ticket: &Ticket) -> fmt::Result {
    for (r, row) in ticket.rows().iter().enumerate() {
        if r > 0 {
            out.write_char('\n')?;
        }
        for (c, &cell) in row.iter().enumerate() {
            if c > 0 {
                out.write_str(CELL_SEPARATOR)?;
            }
            write_cell(out, cell)?;
        }
    }
    Ok(())
}

pub fn write_book(out: &mut impl Write, book: &Book) -> fmt::Result {
    for (i, ticket) in book.iter().enumerate() {
        if i > 0 {
            out.write_str("\n\n")?;
        }
        write_ticket(out, ticket)?;
    }
    out.write_char('\n')
}

fn write_cell(out: &mut impl Write, cell: Cell) -> fmt::Result {
    match cell {
        Some(n) => write!(out, "{n:>2}"),
        None => out.write_str(BLANK_CELL),
    }
}
