//! Column partitioning - splits 1..=90 into the nine ticket columns
//!
//! Column `c` receives `COLUMN_SIZES[c]` consecutive numbers, starting right
//! after the previous column. The result is contiguous, disjoint and ordered.

use crate::types::{NumberRange, COLUMN_SIZES, LOWEST_NUMBER, TICKET_COLUMNS};

/// The fixed column ranges: 1..10, 10..20, ..., 70..80, 80..91
pub const COLUMN_RANGES: [NumberRange; TICKET_COLUMNS] = partition_columns(&COLUMN_SIZES);

/// Lay `sizes` out back to back starting at [`LOWEST_NUMBER`]
pub const fn partition_columns(sizes: &[u8; TICKET_COLUMNS]) -> [NumberRange; TICKET_COLUMNS] {
    let mut ranges = [NumberRange::new(0, 0, 0); TICKET_COLUMNS];
    let mut start = LOWEST_NUMBER;
    let mut col = 0;
    while col < TICKET_COLUMNS {
        let end = start + sizes[col];
        ranges[col] = NumberRange::new(col as u8, start, end);
        start = end;
        col += 1;
    }
    ranges
}

/// Column index that owns `number`, if it is in 1..=90
pub fn column_of(number: u8) -> Option<usize> {
    COLUMN_RANGES.iter().position(|r| r.contains(number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HIGHEST_NUMBER;

    #[test]
    fn ranges_match_the_ticket_layout() {
        let bounds: Vec<(u8, u8)> = COLUMN_RANGES.iter().map(|r| (r.start(), r.end())).collect();
        assert_eq!(
            bounds,
            vec![
                (1, 10),
                (10, 20),
                (20, 30),
                (30, 40),
                (40, 50),
                (50, 60),
                (60, 70),
                (70, 80),
                (80, 91),
            ]
        );
    }

    #[test]
    fn ranges_are_contiguous_and_cover_everything() {
        assert_eq!(COLUMN_RANGES[0].start(), LOWEST_NUMBER);
        assert_eq!(COLUMN_RANGES[TICKET_COLUMNS - 1].end(), HIGHEST_NUMBER + 1);
        for pair in COLUMN_RANGES.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
        for (col, range) in COLUMN_RANGES.iter().enumerate() {
            assert_eq!(range.column(), col);
            assert_eq!(range.len(), COLUMN_SIZES[col] as usize);
        }
    }

    #[test]
    fn column_of_finds_owner() {
        assert_eq!(column_of(1), Some(0));
        assert_eq!(column_of(9), Some(0));
        assert_eq!(column_of(10), Some(1));
        assert_eq!(column_of(79), Some(7));
        assert_eq!(column_of(80), Some(8));
        assert_eq!(column_of(90), Some(8));
        assert_eq!(column_of(0), None);
        assert_eq!(column_of(91), None);
    }

    #[test]
    fn custom_sizes_partition_in_order() {
        let ranges = partition_columns(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(ranges[0], NumberRange::new(0, 1, 2));
        assert_eq!(ranges[8], NumberRange::new(8, 37, 46));
    }
}
