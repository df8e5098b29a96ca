//! Book tests - invariants every generated book must satisfy

use tambola::core::{validate_book, BookGenerator, COLUMN_RANGES};
use tambola::types::{
    Book, HIGHEST_NUMBER, LOWEST_NUMBER, NUMBERS_PER_ROW, NUMBERS_PER_TICKET, TICKETS_PER_BOOK,
    TICKET_COLUMNS, TICKET_ROWS,
};

fn book(seed: u64) -> Book {
    BookGenerator::new(seed).generate()
}

#[test]
fn test_book_has_six_tickets() {
    assert_eq!(book(1).tickets().len(), TICKETS_PER_BOOK);
}

#[test]
fn test_book_uses_every_number_once() {
    let book = book(2);
    let mut numbers: Vec<u8> = book.numbers().collect();
    numbers.sort_unstable();
    let expected: Vec<u8> = (LOWEST_NUMBER..=HIGHEST_NUMBER).collect();
    assert_eq!(numbers, expected);
}

#[test]
fn test_ticket_counts() {
    let book = book(3);
    for (i, ticket) in book.iter().enumerate() {
        assert_eq!(ticket.filled_count(), NUMBERS_PER_TICKET, "ticket {i}");
        for row in 0..TICKET_ROWS {
            assert_eq!(ticket.row_count(row), NUMBERS_PER_ROW, "ticket {i} row {row}");
        }
        for col in 0..TICKET_COLUMNS {
            let count = ticket.column_count(col);
            assert!((1..=3).contains(&count), "ticket {i} col {col} has {count}");
        }
    }
}

#[test]
fn test_columns_ascend_within_range() {
    let book = book(4);
    for ticket in &book {
        for (col, range) in COLUMN_RANGES.iter().enumerate() {
            let values: Vec<u8> = ticket.column(col).collect();
            assert!(values.iter().all(|&n| range.contains(n)), "{values:?} in col {col}");
            assert!(values.windows(2).all(|w| w[0] < w[1]), "{values:?} not ascending");
        }
    }
}

#[test]
fn test_column_range_coverage() {
    let book = book(5);
    for (col, range) in COLUMN_RANGES.iter().enumerate() {
        let mut values: Vec<u8> = book.iter().flat_map(|t| t.column(col)).collect();
        values.sort_unstable();
        assert_eq!(values, range.iter().collect::<Vec<_>>(), "col {col}");
    }
}

#[test]
fn test_column_counts_sum_to_range_size() {
    // Column 0 (9 numbers) and column 8 (11 numbers) are the edge cases
    for seed in 0..50 {
        let book = book(seed);
        for (col, range) in COLUMN_RANGES.iter().enumerate() {
            let total: usize = book.iter().map(|t| t.column_count(col)).sum();
            assert_eq!(total, range.len(), "seed {seed} col {col}");
        }
    }
}

#[test]
fn test_same_seed_same_book() {
    for seed in [0, 1, 42, u64::MAX] {
        assert_eq!(book(seed), book(seed));
    }
}

#[test]
fn test_validator_accepts_generated_books() {
    let mut generator = BookGenerator::new(6);
    for _ in 0..20 {
        let book = generator.generate();
        assert!(validate_book(&book).is_ok());
    }
}
