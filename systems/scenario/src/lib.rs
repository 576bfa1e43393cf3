#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Text format for Bug's Life scenes.
//!
//! [`parse`] reads a scene line by line, validating every record as it goes,
//! and [`write`] emits a scene in the same grammar. Comments start with `#`
//! and run to the end of the line.

mod parser;
mod writer;

pub use parser::parse;
pub use writer::write;
