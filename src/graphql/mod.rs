//! GraphQL schema and resolvers for the bookshelf.
//!
//! ## Usage
//!
//! ```bash
//! # Execute a query from the CLI
//! bookshelf query '{ books { id title author } }'
//!
//! # Print the schema definition
//! bookshelf schema
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `books`
//! - No mutations, no subscriptions

mod schema;
mod types;

pub use schema::{BookshelfSchema, QueryRoot, build_schema};
pub use types::Book;
