//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (generation, validation, rendering, export).
//!
//! # Ticket Dimensions
//!
//! A Tambola ticket is a 3x9 grid:
//!
//! - **Rows**: 3 (indexed 0-2, top to bottom)
//! - **Columns**: 9 (indexed 0-8, left to right)
//! - **Numbers per row**: exactly 5
//! - **Numbers per ticket**: exactly 15
//!
//! # Column Ranges
//!
//! | Column | Numbers | Size |
//! |--------|---------|------|
//! | 0 | 1-9 | 9 |
//! | 1-7 | 10-19 .. 70-79 | 10 |
//! | 8 | 80-90 | 11 |
//!
//! A book is six tickets that together use every number 1-90 exactly once.
//!
//! # Examples
//!
//! ```
//! use tambola_types::{NumberRange, Ticket, TICKET_COLUMNS, TICKET_ROWS};
//!
//! let range = NumberRange::new(1, 10, 20);
//! assert!(range.contains(10));
//! assert!(!range.contains(20));
//! assert_eq!(range.len(), 10);
//!
//! let mut ticket = Ticket::new();
//! assert!(ticket.set(0, 1, Some(12)));
//! assert_eq!(ticket.get(0, 1), Some(Some(12)));
//! assert_eq!(ticket.filled_count(), 1);
//!
//! assert_eq!(TICKET_ROWS, 3);
//! assert_eq!(TICKET_COLUMNS, 9);
//! ```

/// Rows per ticket
pub const TICKET_ROWS: usize = 3;

/// Columns per ticket
pub const TICKET_COLUMNS: usize = 9;

/// Tickets per book
pub const TICKETS_PER_BOOK: usize = 6;

/// Filled cells in every row of a finished ticket
pub const NUMBERS_PER_ROW: usize = 5;

/// Filled cells in a finished ticket
pub const NUMBERS_PER_TICKET: usize = NUMBERS_PER_ROW * TICKET_ROWS;

/// A column can never hold more numbers than there are rows
pub const MAX_PER_COLUMN: usize = TICKET_ROWS;

/// Smallest number called in a game
pub const LOWEST_NUMBER: u8 = 1;

/// Largest number called in a game
pub const HIGHEST_NUMBER: u8 = 90;

/// How many numbers belong to each column, left to right
pub const COLUMN_SIZES: [u8; TICKET_COLUMNS] = [9, 10, 10, 10, 10, 10, 10, 10, 11];

/// Largest column size (the last column)
pub const MAX_COLUMN_SIZE: usize = 11;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_sizes_cover_every_number() {
        let total: u32 = COLUMN_SIZES.iter().map(|&s| s as u32).sum();
        assert_eq!(total, (HIGHEST_NUMBER - LOWEST_NUMBER + 1) as u32);
        assert_eq!(total as usize, NUMBERS_PER_TICKET * TICKETS_PER_BOOK);
        assert_eq!(
            COLUMN_SIZES.iter().copied().max(),
            Some(MAX_COLUMN_SIZE as u8)
        );
    }
}

/// A single grid cell: `None` is a blank, `Some(n)` holds the number `n`
pub type Cell = Option<u8>;

/// Half-open interval of numbers owned by one ticket column
///
/// `start` is inclusive, `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberRange {
    column: u8,
    start: u8,
    end: u8,
}

impl NumberRange {
    /// Create a range for `column` covering `start..end`
    pub const fn new(column: u8, start: u8, end: u8) -> Self {
        Self { column, start, end }
    }

    /// Column index (0-8) this range belongs to
    pub fn column(&self) -> usize {
        self.column as usize
    }

    /// First number in the range
    pub fn start(&self) -> u8 {
        self.start
    }

    /// One past the last number in the range
    pub fn end(&self) -> u8 {
        self.end
    }

    /// Number of values in the range
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether `number` belongs to this column
    pub fn contains(&self, number: u8) -> bool {
        (self.start..self.end).contains(&number)
    }

    /// Iterate the numbers in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> {
        self.start..self.end
    }
}

/// One Tambola ticket - 3 rows x 9 columns of optional numbers
///
/// Cells are addressed as `(row, col)`. Generation fills the grid through
/// [`Ticket::set`]; once a ticket is part of a [`Book`] it is only read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ticket {
    cells: [[Cell; TICKET_COLUMNS]; TICKET_ROWS],
}

impl Ticket {
    /// Create an empty ticket
    pub fn new() -> Self {
        Self {
            cells: [[None; TICKET_COLUMNS]; TICKET_ROWS],
        }
    }

    /// Build a ticket from explicit rows
    ///
    /// No invariants are checked; see the validator in the core crate.
    pub fn from_rows(cells: [[Cell; TICKET_COLUMNS]; TICKET_ROWS]) -> Self {
        Self { cells }
    }

    /// Get cell at `(row, col)`
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set cell at `(row, col)`
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Check if `(row, col)` is within bounds and blank
    pub fn is_blank(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> &[Cell; TICKET_COLUMNS] {
        &self.cells[row]
    }

    /// Borrow all rows, top to bottom
    pub fn rows(&self) -> &[[Cell; TICKET_COLUMNS]; TICKET_ROWS] {
        &self.cells
    }

    /// Filled values of one column, top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().filter_map(move |r| r[col])
    }

    /// Filled cells in a row
    pub fn row_count(&self, row: usize) -> usize {
        self.cells[row].iter().filter(|c| c.is_some()).count()
    }

    /// Filled cells in a column
    pub fn column_count(&self, col: usize) -> usize {
        self.column(col).count()
    }

    /// Filled cells on the whole ticket
    pub fn filled_count(&self) -> usize {
        (0..TICKET_ROWS).map(|r| self.row_count(r)).sum()
    }

    /// All filled values in row-major order
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().flat_map(|r| r.iter().filter_map(|c| *c))
    }
}

/// A book of six tickets jointly covering 1-90 exactly once
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    tickets: [Ticket; TICKETS_PER_BOOK],
}

impl Book {
    /// Wrap six finished tickets
    ///
    /// The generator in the core crate is the normal way to obtain a book;
    /// this constructor exists for import paths (e.g. JSON) and fixtures.
    pub fn from_tickets(tickets: [Ticket; TICKETS_PER_BOOK]) -> Self {
        Self { tickets }
    }

    pub fn tickets(&self) -> &[Ticket; TICKETS_PER_BOOK] {
        &self.tickets
    }

    /// Get ticket `index`, or None if out of bounds
    pub fn ticket(&self, index: usize) -> Option<&Ticket> {
        self.tickets.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ticket> {
        self.tickets.iter()
    }

    /// Every filled value across all tickets
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.tickets.iter().flat_map(|t| t.numbers())
    }

    pub fn into_tickets(self) -> [Ticket; TICKETS_PER_BOOK] {
        self.tickets
    }
}

impl<'a> IntoIterator for &'a Book {
    type Item = &'a Ticket;
    type IntoIter = std::slice::Iter<'a, Ticket>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
