//! Core generation module - pure, deterministic, and testable
//!
//! This crate builds Tambola books: six 3x9 tickets that together use every
//! number from 1 to 90 exactly once. It has **no dependencies** on rendering
//! or I/O.
//!
//! # Module Structure
//!
//! - [`partition`]: the nine fixed column ranges
//! - [`allocation`]: distributes each column's numbers over the six tickets
//! - [`placement`]: lays each ticket's numbers out into rows of five
//! - [`sorting`]: orders every column top to bottom
//! - [`generator`]: runs the phases with a single seeded random source
//! - [`validate`]: checks the ticket and book invariants
//! - [`rng`]: the seeded random source
//!
//! # Ticket Rules
//!
//! - 15 numbers per ticket, 5 per row
//! - 1 to 3 numbers per column, ascending top to bottom
//! - column `c` only holds numbers from its range (1-9, 10-19, ..., 80-90)
//!
//! # Example
//!
//! ```
//! use tambola_core::{validate_book, BookGenerator};
//!
//! let mut generator = BookGenerator::new(12345);
//! let book = generator.generate();
//!
//! assert_eq!(book.tickets().len(), 6);
//! assert!(validate_book(&book).is_ok());
//!
//! // Same seed, same book
//! assert_eq!(BookGenerator::new(12345).generate(), book);
//! ```

pub mod allocation;
pub mod generator;
pub mod partition;
pub mod placement;
pub mod rng;
pub mod sorting;
pub mod validate;

pub use tambola_types as types;

// Re-export commonly used types for convenience
pub use allocation::{allocate, AllocationState, ColumnBucket};
pub use generator::{generate_book, BookGenerator};
pub use partition::{column_of, COLUMN_RANGES};
pub use placement::{place_ticket, place_tickets};
pub use rng::{entropy_seed, SimpleRng};
pub use sorting::sort_columns;
pub use validate::{validate_book, validate_ticket, InvariantViolation};
