use crate::error::BookshelfError;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

use super::CommandContext;

pub fn handle_query(
    ctx: &CommandContext,
    query: Option<String>,
    file: Option<PathBuf>,
    variables: Option<String>,
) -> Result<()> {
    let document = resolve_document(query, file, std::io::stdin())?;

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Failed to parse --variables as JSON")?
    } else {
        async_graphql::Variables::default()
    };

    tracing::debug!(document = %document, "Executing query");
    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(ctx.schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);

    if !response.errors.is_empty() {
        return Err(BookshelfError::Query(response.errors.len()).into());
    }
    Ok(())
}

/// Picks the query document from the positional argument, stdin (`-`) or a file.
fn resolve_document(
    query: Option<String>,
    file: Option<PathBuf>,
    mut stdin: impl Read,
) -> Result<String> {
    if let Some(q) = query {
        if q == "-" {
            let mut content = String::new();
            stdin.read_to_string(&mut content)?;
            return Ok(content.trim().to_string());
        }
        return Ok(q);
    }
    if let Some(path) = file {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read query from {}", path.display()))?;
        return Ok(content.trim().to_string());
    }
    Err(BookshelfError::MissingQuery.into())
}
