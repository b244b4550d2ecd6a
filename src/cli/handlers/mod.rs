mod list;
mod query;
mod schema;

pub use list::handle_list;
pub use query::handle_query;
pub use schema::handle_schema;

use crate::config::BookshelfConfig;
use crate::graphql::{BookshelfSchema, build_schema};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub schema: BookshelfSchema,
}

impl CommandContext {
    pub fn new(config: &BookshelfConfig) -> Self {
        Self {
            schema: build_schema(&config.schema),
        }
    }
}
