mod mutate;
mod query;
mod serve;
mod utils;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use serve::handle_serve;

use crate::config::BookshelfConfig;
use crate::storage::Catalog;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
    pub catalog: Catalog,
}

impl CommandContext {
    /// Every invocation starts from the seed records; nothing is persisted.
    pub fn new(config: BookshelfConfig) -> Self {
        Self {
            config,
            catalog: Catalog::seeded(),
        }
    }
}
