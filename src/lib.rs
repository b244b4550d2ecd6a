//! # Bookshelf - a GraphQL schema over a fixed book catalog
//!
//! Bookshelf defines a `Book` type and a single read-only `books` query that
//! always resolves to the same three records. The `bookshelf` binary runs
//! queries against the schema in-process and exports its SDL.
//!
//! ## Quick Start
//!
//! ```bash
//! # List the catalog
//! bookshelf list
//!
//! # Run a query
//! bookshelf query '{ books { id title } }'
//!
//! # Export the schema
//! bookshelf schema --output schema.graphql
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema and resolvers
//! - [`model`]: The `Book` record and the catalog
//! - [`logging`]: Tracing subscriber setup

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.bookshelf.toml` files and upward discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema exposing the `books` query.
pub mod graphql;

pub mod logging;

/// Data models for the bookshelf.
pub mod model;
