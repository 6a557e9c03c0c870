//! Extract FAQ categories and numbered question/answer entries from a
//! hierarchically-headed markdown document.
//!
//! Three-stage pipeline: markdown → flat block sequence → category
//! boundaries → categories with entries. Level-2 headings start categories
//! (except the reserved "Table of Contents" heading), level-3 headings are
//! question entries whose text starts with a `<number>. ` prefix, and the
//! answer is the first paragraph after the question.
//!
//! The extractor is pure and synchronous: no I/O, no shared state, fresh
//! output per call.

pub mod blocks;
pub mod error;
pub mod extract;
pub mod outline;

pub use blocks::{tokenize, Block};
pub use error::ExtractError;
pub use extract::{extract, extract_from_blocks, Category, Entry, Extraction, Faq};
