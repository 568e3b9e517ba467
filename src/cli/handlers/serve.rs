use crate::graphql::{GRAPHQL_PATH, build_schema, run_server};
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or(ctx.config.server.host);
    let port = port.unwrap_or(ctx.config.server.port);
    let schema = build_schema(ctx.catalog);

    println!(
        "{} GraphQL server on http://{}:{}{}",
        "Starting".green(),
        host,
        port,
        GRAPHQL_PATH
    );
    println!("GraphiQL console: http://{}:{}{}", host, port, GRAPHQL_PATH);

    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, (host.as_str(), port)))
        .with_context(|| format!("Failed to serve on {}:{}", host, port))?;
    Ok(())
}
