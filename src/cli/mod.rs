//! Command-line interface: clap definitions and one handler per subcommand.

pub mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
