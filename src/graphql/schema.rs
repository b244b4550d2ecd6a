use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema, extensions::Tracing};

use crate::config::SchemaSettings;
use crate::model;

use super::types::Book;

pub type BookshelfSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(settings: &SchemaSettings) -> BookshelfSchema {
    let mut builder =
        Schema::build(QueryRoot, EmptyMutation, EmptySubscription).extension(Tracing);

    if let Some(depth) = settings.limit_depth {
        builder = builder.limit_depth(depth);
    }
    if let Some(complexity) = settings.limit_complexity {
        builder = builder.limit_complexity(complexity);
    }

    builder.finish()
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// List all known books
    async fn books(&self) -> Vec<Book> {
        let books: Vec<Book> = model::catalog().into_iter().map(Book::from).collect();
        tracing::debug!(count = books.len(), "Resolved books");
        books
    }
}
