//! Data models for the bookshelf.
//!
//! - [`Book`]: a single catalog entry
//! - [`catalog`]: the fixed list of books every query resolves against

mod book;

pub use book::{Book, catalog};
