use crate::graphql::build_schema;
use crate::storage::Catalog;
use anyhow::{Context, Result};

/// Parse optional `--variables` JSON into GraphQL variables.
pub fn parse_variables(variables: Option<&str>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(v).context("Invalid --variables JSON"),
        None => Ok(async_graphql::Variables::default()),
    }
}

/// Execute a document against `catalog` and print the response as JSON.
///
/// GraphQL errors are part of the printed payload and do not fail the command.
pub fn execute_and_print(catalog: Catalog, query: &str, variables: Option<&str>) -> Result<()> {
    let vars = parse_variables(variables)?;
    let schema = build_schema(catalog);

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "GraphQL response carries errors");
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
