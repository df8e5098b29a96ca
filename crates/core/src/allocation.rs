//! Column allocation - decides which numbers each ticket gets, per column
//!
//! The allocator moves every number of every column pool into one of six
//! per-ticket buckets. When it finishes:
//!
//! - every pool is empty
//! - every ticket holds exactly 15 numbers
//! - every (ticket, column) bucket holds 1 to 3 numbers
//!
//! It works in stages over a single [`AllocationState`]:
//!
//! 1. **Seeding**: each ticket draws one random number from every column.
//! 2. **Overflow**: the last column has 11 numbers, so one extra goes to a
//!    random ticket.
//! 3. **Distribution**: four passes over the columns that still have numbers.
//!    Each pass hands at most one number per column to the first ticket, in a
//!    freshly shuffled order, that is under the pass ceiling for that column
//!    and under 15 overall. The ceiling is 2 for three passes and 3 for the
//!    last one.
//! 4. **Settle**: the greedy passes occasionally strand a number (every ticket
//!    with room is already at the ceiling for that column). Settling places it
//!    directly if any ticket can still take it, otherwise it shifts one number
//!    from a full ticket to a short one within another column and gives the
//!    stranded number to the full ticket.
//!
//! No stage ever removes the last number from a bucket, so the one-per-column
//! floor established by seeding survives to the end.

use arrayvec::ArrayVec;

use crate::partition::COLUMN_RANGES;
use crate::rng::SimpleRng;
use crate::types::{
    MAX_COLUMN_SIZE, MAX_PER_COLUMN, NUMBERS_PER_TICKET, TICKETS_PER_BOOK, TICKET_COLUMNS,
};

/// Numbers allocated to one (ticket, column) pair, waiting for row placement
pub type ColumnBucket = ArrayVec<u8, MAX_PER_COLUMN>;

/// Numbers of one column not yet given to any ticket
pub type ColumnPool = ArrayVec<u8, MAX_COLUMN_SIZE>;

/// Per-column count ceilings for the distribution passes, in pass order
pub const PASS_CEILINGS: [usize; 4] = [2, 2, 2, 3];

/// Working state shared by the allocation and placement phases
#[derive(Debug, Clone)]
pub struct AllocationState {
    pools: [ColumnPool; TICKET_COLUMNS],
    buckets: [[ColumnBucket; TICKET_COLUMNS]; TICKETS_PER_BOOK],
    totals: [usize; TICKETS_PER_BOOK],
}

impl AllocationState {
    /// Fresh state: every pool holds its full column range, every bucket is empty
    pub fn new() -> Self {
        Self {
            pools: std::array::from_fn(|col| COLUMN_RANGES[col].iter().collect()),
            buckets: std::array::from_fn(|_| std::array::from_fn(|_| ColumnBucket::new())),
            totals: [0; TICKETS_PER_BOOK],
        }
    }

    /// Numbers still unallocated in column `col`, ascending
    pub fn pool(&self, col: usize) -> &[u8] {
        &self.pools[col]
    }

    /// Total numbers still unallocated across all columns
    pub fn remaining(&self) -> usize {
        self.pools.iter().map(|p| p.len()).sum()
    }

    pub fn bucket(&self, ticket: usize, col: usize) -> &[u8] {
        &self.buckets[ticket][col]
    }

    /// Bucket sizes of one ticket, left to right
    pub fn bucket_sizes(&self, ticket: usize) -> [usize; TICKET_COLUMNS] {
        std::array::from_fn(|col| self.buckets[ticket][col].len())
    }

    /// Numbers allocated to `ticket` so far
    pub fn total(&self, ticket: usize) -> usize {
        self.totals[ticket]
    }

    /// Hand one ticket's buckets to the row placer
    pub fn ticket_buckets_mut(&mut self, ticket: usize) -> &mut [ColumnBucket; TICKET_COLUMNS] {
        &mut self.buckets[ticket]
    }

    /// True once the placer has drained every bucket
    pub fn is_drained(&self) -> bool {
        self.buckets.iter().flatten().all(|b| b.is_empty())
    }

    fn assign(&mut self, ticket: usize, col: usize, number: u8) {
        self.buckets[ticket][col].push(number);
        self.totals[ticket] += 1;
    }

    fn can_accept(&self, ticket: usize, col: usize, ceiling: usize) -> bool {
        self.buckets[ticket][col].len() < ceiling && self.totals[ticket] < NUMBERS_PER_TICKET
    }

    /// Find `(short, donor, via)`: `donor` can take one more number in `col`
    /// if it gives one of its `via` numbers to `short`.
    fn find_transfer(&self, col: usize) -> Option<(usize, usize, usize)> {
        for short in (0..TICKETS_PER_BOOK).filter(|&t| self.totals[t] < NUMBERS_PER_TICKET) {
            for donor in 0..TICKETS_PER_BOOK {
                if donor == short || self.buckets[donor][col].len() >= MAX_PER_COLUMN {
                    continue;
                }
                let via = (0..TICKET_COLUMNS).find(|&via| {
                    via != col
                        && self.buckets[donor][via].len() >= 2
                        && self.buckets[short][via].len() < MAX_PER_COLUMN
                });
                if let Some(via) = via {
                    return Some((short, donor, via));
                }
            }
        }
        None
    }

    fn transfer(&mut self, from: usize, to: usize, col: usize) {
        if let Some(number) = self.buckets[from][col].pop() {
            self.totals[from] -= 1;
            self.assign(to, col, number);
        }
    }
}

impl Default for AllocationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Run every allocation stage and return the filled state
pub fn allocate(rng: &mut SimpleRng) -> AllocationState {
    let mut state = AllocationState::new();
    seed_columns(&mut state, rng);
    assign_overflow(&mut state, rng);
    distribute(&mut state, rng);
    settle(&mut state);

    assert_eq!(state.remaining(), 0, "allocation left numbers in a pool");
    for ticket in 0..TICKETS_PER_BOOK {
        assert_eq!(
            state.total(ticket),
            NUMBERS_PER_TICKET,
            "ticket {ticket} allocated the wrong number of values"
        );
        for size in state.bucket_sizes(ticket) {
            assert!(
                (1..=MAX_PER_COLUMN).contains(&size),
                "ticket {ticket} has a column with {size} values"
            );
        }
    }
    state
}

/// Give every ticket one uniformly random number from every column
pub fn seed_columns(state: &mut AllocationState, rng: &mut SimpleRng) {
    for col in 0..TICKET_COLUMNS {
        for ticket in 0..TICKETS_PER_BOOK {
            let pool = &mut state.pools[col];
            let index = rng.next_index(pool.len());
            let number = pool.remove(index);
            state.assign(ticket, col, number);
        }
    }
}

/// The last column is one number longer than the others: give that number to
/// a random ticket
pub fn assign_overflow(state: &mut AllocationState, rng: &mut SimpleRng) {
    let last = TICKET_COLUMNS - 1;
    if let Some(number) = state.pools[last].pop() {
        let ticket = rng.next_index(TICKETS_PER_BOOK);
        state.assign(ticket, last, number);
    }
}

/// The capped distribution passes
pub fn distribute(state: &mut AllocationState, rng: &mut SimpleRng) {
    for ceiling in PASS_CEILINGS {
        for col in 0..TICKET_COLUMNS {
            if state.pools[col].is_empty() {
                continue;
            }
            for ticket in rng.shuffled_indices::<TICKETS_PER_BOOK>() {
                if state.can_accept(ticket, col, ceiling) {
                    if let Some(number) = state.pools[col].pop() {
                        state.assign(ticket, col, number);
                    }
                    break;
                }
            }
        }
    }
    tracing::trace!(remaining = state.remaining(), "distribution passes done");
}

/// Place whatever the distribution passes left behind
pub fn settle(state: &mut AllocationState) {
    for col in 0..TICKET_COLUMNS {
        while let Some(number) = state.pools[col].pop() {
            if let Some(ticket) =
                (0..TICKETS_PER_BOOK).find(|&t| state.can_accept(t, col, MAX_PER_COLUMN))
            {
                state.assign(ticket, col, number);
                continue;
            }

            let Some((short, donor, via)) = state.find_transfer(col) else {
                panic!("no ticket can take {number} in column {col}");
            };
            tracing::debug!(number, col, short, donor, via, "settling stranded number");
            state.transfer(donor, short, via);
            state.assign(donor, col, number);
        }
    }
}
