//! Book generation - runs allocation, placement and sorting in order
//!
//! A [`BookGenerator`] owns the only random source of a run. Every call to
//! [`BookGenerator::generate`] continues the same random stream, so a
//! generator seeded once yields a reproducible sequence of books.

use crate::allocation::allocate;
use crate::placement::place_tickets;
use crate::rng::{entropy_seed, SimpleRng};
use crate::sorting::sort_columns;
use crate::types::Book;
use crate::validate::validate_book;

/// Produces complete, valid books
#[derive(Debug, Clone)]
pub struct BookGenerator {
    seed: u64,
    rng: SimpleRng,
    generated: u64,
}

impl BookGenerator {
    /// Create a generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
            generated: 0,
        }
    }

    /// Create a generator with a seed that differs between runs
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    /// The seed this generator started from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of books produced so far
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Generate the next book
    pub fn generate(&mut self) -> Book {
        tracing::debug!(
            seed = self.seed,
            index = self.generated,
            rng_state = self.rng.state(),
            "generating book"
        );

        let mut state = allocate(&mut self.rng);
        let mut tickets = place_tickets(&mut state, &mut self.rng);
        for ticket in tickets.iter_mut() {
            sort_columns(ticket);
        }
        let book = Book::from_tickets(tickets);

        debug_assert_eq!(validate_book(&book), Ok(()));
        self.generated += 1;
        book
    }
}

impl Default for BookGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Iterator for BookGenerator {
    type Item = Book;

    fn next(&mut self) -> Option<Book> {
        Some(self.generate())
    }
}

/// Generate a single book from `seed`
pub fn generate_book(seed: u64) -> Book {
    BookGenerator::new(seed).generate()
}
