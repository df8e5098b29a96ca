//! ANSI-styled rendering of books via crossterm.
//!
//! Same layout as [`crate::text`], with numbers in bold, blank cells dimmed
//! and separators in a muted color. Commands are queued into a byte buffer
//! so callers decide where (and whether) to flush.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::text::{BLANK_CELL, CELL_SEPARATOR};
use crate::types::{Book, Cell, Ticket};

const NUMBER_COLOR: Color = Color::White;
const SEPARATOR_COLOR: Color = Color::DarkGrey;
const HEADER_COLOR: Color = Color::Cyan;

/// Encode a book into `out`, ending with a newline.
pub fn encode_book_into(book: &Book, out: &mut Vec<u8>) -> Result<()> {
    for (i, ticket) in book.iter().enumerate() {
        if i > 0 {
            out.queue(Print("\n\n"))?;
        }
        encode_ticket_into(ticket, out)?;
    }
    out.queue(Print('\n'))?;
    Ok(())
}

/// Encode one ticket into `out` (no trailing newline).
pub fn encode_ticket_into(ticket: &Ticket, out: &mut Vec<u8>) -> Result<()> {
    for (r, row) in ticket.rows().iter().enumerate() {
        if r > 0 {
            out.queue(Print('\n'))?;
        }
        for (c, &cell) in row.iter().enumerate() {
            if c > 0 {
                out.queue(SetForegroundColor(SEPARATOR_COLOR))?;
                out.queue(Print(CELL_SEPARATOR))?;
            }
            encode_cell_into(cell, out)?;
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a one-line heading such as `Book 2 (seed 42)`.
pub fn encode_heading_into(heading: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(SetForegroundColor(HEADER_COLOR))?;
    out.queue(SetAttribute(Attribute::Bold))?;
    out.queue(Print(heading))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(ResetColor)?;
    out.queue(Print('\n'))?;
    Ok(())
}

/// Encode a book and write it to stdout in one go.
pub fn print_book(book: &Book) -> Result<()> {
    let mut buf = Vec::with_capacity(8 * 1024);
    encode_book_into(book, &mut buf)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&buf)?;
    stdout.flush()?;
    Ok(())
}

fn encode_cell_into(cell: Cell, out: &mut Vec<u8>) -> Result<()> {
    match cell {
        Some(n) => {
            out.queue(SetForegroundColor(NUMBER_COLOR))?;
            out.queue(SetAttribute(Attribute::Bold))?;
            out.queue(Print(format!("{n:>2}")))?;
            out.queue(SetAttribute(Attribute::NormalIntensity))?;
        }
        None => {
            out.queue(SetAttribute(Attribute::Dim))?;
            out.queue(Print(BLANK_CELL))?;
            out.queue(SetAttribute(Attribute::NormalIntensity))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate_book;
    use crate::text::render_book;

    /// Drop CSI escape sequences, keeping only printed text.
    fn strip_ansi(bytes: &[u8]) -> String {
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        let mut out = String::new();
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == '\x1b' && chars.peek() == Some(&'[') {
                chars.next();
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
            out.push(ch);
        }
        out
    }

    #[test]
    fn styled_text_matches_plain_layout() {
        let book = generate_book(9);
        let mut buf = Vec::new();
        encode_book_into(&book, &mut buf).unwrap();

        assert_eq!(strip_ansi(&buf), render_book(&book));
    }

    #[test]
    fn styled_output_contains_escape_codes() {
        let book = generate_book(10);
        let mut buf = Vec::new();
        encode_book_into(&book, &mut buf).unwrap();
        assert!(buf.contains(&0x1b));
    }

    #[test]
    fn heading_is_printed_verbatim() {
        let mut buf = Vec::new();
        encode_heading_into("Book 1 (seed 7)", &mut buf).unwrap();
        assert_eq!(strip_ansi(&buf), "Book 1 (seed 7)\n");
    }
}
