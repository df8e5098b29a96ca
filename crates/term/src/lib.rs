//! Terminal output module.
//!
//! Consumers of a finished [`Book`](crate::types::Book). Nothing here
//! influences generation:
//!
//! - [`text`]: plain-text layout (`" 3 |    | 21 | ..."`)
//! - [`styled`]: the same layout with ANSI styling via crossterm
//! - [`export`]: line-delimited JSON documents via serde

pub mod export;
pub mod styled;
pub mod text;

pub use tambola_core as core;
pub use tambola_types as types;

pub use export::{from_json, to_json_line, BookDocument};
pub use styled::{encode_book_into, encode_heading_into, encode_ticket_into, print_book};
pub use text::{render_book, render_ticket, write_book, write_ticket};
