use anyhow::Result;

use super::CommandContext;
use super::utils::execute_and_print;

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    execute_and_print(ctx.catalog, &query, variables.as_deref())
}
