//! Row placement - turns a ticket's column buckets into a 3x9 grid
//!
//! Rows are filled top to bottom. A bucket still holding `k` numbers must put
//! one of them in each of the next `k` rows, so for row `r` the placer first
//! serves buckets holding `3 - r` numbers, then `2 - r`, and so on down to 1,
//! stopping as soon as the row has five numbers. Columns of equal urgency are
//! visited in a fresh random order for every (row, size) step.

use crate::allocation::{AllocationState, ColumnBucket};
use crate::rng::SimpleRng;
use crate::types::{Ticket, NUMBERS_PER_ROW, TICKETS_PER_BOOK, TICKET_COLUMNS, TICKET_ROWS};

/// Drain every ticket's buckets into grids, in ticket order
pub fn place_tickets(state: &mut AllocationState, rng: &mut SimpleRng) -> [Ticket; TICKETS_PER_BOOK] {
    let tickets = std::array::from_fn(|ticket| place_ticket(state.ticket_buckets_mut(ticket), rng));
    assert!(state.is_drained(), "row placement left numbers in a bucket");
    tickets
}

/// Drain one ticket's nine buckets into a grid with five numbers per row
///
/// Each bucket must hold 1-3 numbers and the sizes must add up to 15.
pub fn place_ticket(buckets: &mut [ColumnBucket; TICKET_COLUMNS], rng: &mut SimpleRng) -> Ticket {
    let mut ticket = Ticket::new();

    for row in 0..TICKET_ROWS {
        'row: for size in (1..=TICKET_ROWS - row).rev() {
            for col in rng.shuffled_indices::<TICKET_COLUMNS>() {
                if !ticket.is_blank(row, col) || buckets[col].len() != size {
                    continue;
                }
                if let Some(number) = buckets[col].pop() {
                    ticket.set(row, col, Some(number));
                }
                if ticket.row_count(row) == NUMBERS_PER_ROW {
                    break 'row;
                }
            }
        }
        assert_eq!(
            ticket.row_count(row),
            NUMBERS_PER_ROW,
            "row {row} could not be filled"
        );
    }

    assert!(
        buckets.iter().all(|b| b.is_empty()),
        "ticket has numbers left over after placement"
    );
    ticket
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::allocate;

    fn buckets_with_sizes(sizes: [usize; TICKET_COLUMNS]) -> [ColumnBucket; TICKET_COLUMNS] {
        std::array::from_fn(|col| {
            (0..sizes[col])
                .map(|i| (col * 10 + i + 1) as u8)
                .collect()
        })
    }

    #[test]
    fn fills_five_per_row() {
        let mut rng = SimpleRng::new(21);
        let mut buckets = buckets_with_sizes([1, 2, 1, 3, 1, 2, 1, 3, 1]);
        let ticket = place_ticket(&mut buckets, &mut rng);

        for row in 0..TICKET_ROWS {
            assert_eq!(ticket.row_count(row), NUMBERS_PER_ROW);
        }
        assert!(buckets.iter().all(|b| b.is_empty()));
    }

    #[test]
    fn column_counts_match_bucket_sizes() {
        let sizes = [2, 2, 2, 2, 2, 2, 1, 1, 1];
        let mut rng = SimpleRng::new(22);
        let mut buckets = buckets_with_sizes(sizes);
        let ticket = place_ticket(&mut buckets, &mut rng);

        for col in 0..TICKET_COLUMNS {
            assert_eq!(ticket.column_count(col), sizes[col]);
        }
    }

    #[test]
    fn full_columns_take_every_row() {
        // Three columns of three force the rest to single entries
        let sizes = [3, 3, 3, 1, 1, 1, 1, 1, 1];
        for seed in 0..20 {
            let mut rng = SimpleRng::new(seed);
            let mut buckets = buckets_with_sizes(sizes);
            let ticket = place_ticket(&mut buckets, &mut rng);
            for col in 0..3 {
                assert_eq!(ticket.column_count(col), 3);
            }
            for row in 0..TICKET_ROWS {
                assert_eq!(ticket.row_count(row), NUMBERS_PER_ROW);
            }
        }
    }

    #[test]
    fn places_allocated_state() {
        let mut rng = SimpleRng::new(23);
        let mut state = allocate(&mut rng);
        let expected: Vec<[usize; TICKET_COLUMNS]> =
            (0..TICKETS_PER_BOOK).map(|t| state.bucket_sizes(t)).collect();

        let tickets = place_tickets(&mut state, &mut rng);

        assert!(state.is_drained());
        for (ticket, sizes) in tickets.iter().zip(expected) {
            for col in 0..TICKET_COLUMNS {
                assert_eq!(ticket.column_count(col), sizes[col]);
            }
        }
    }

    #[test]
    #[should_panic]
    fn rejects_buckets_that_cannot_fill_rows() {
        // Only 9 numbers: row 1 can never reach five
        let mut rng = SimpleRng::new(24);
        let mut buckets = buckets_with_sizes([1; TICKET_COLUMNS]);
        place_ticket(&mut buckets, &mut rng);
    }
}
