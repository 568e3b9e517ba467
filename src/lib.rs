//! # Bookshelf - an in-memory GraphQL catalog
//!
//! Bookshelf serves a small GraphQL API over two related collections,
//! authors and books, held in process memory. Every process starts from the
//! same seed records; mutations only append.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve /graphql (with the GraphiQL console) on 127.0.0.1:2000
//! bookshelf serve
//!
//! # Run a query without a server
//! bookshelf query '{ books { id name author { name } } }'
//!
//! # Add an author
//! bookshelf mutate 'addAuthor(name: "Robert Jordan") { id }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP transport
//! - [`model`]: Data models (Author, Book)
//! - [`storage`]: The in-memory catalog and its seed data

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles optional `.bookshelf.toml` files and upward discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP transport.
///
/// Provides the async-graphql schema and the axum router serving it.
pub mod graphql;

/// Data models for the catalog.
pub mod model;

/// In-memory storage layer.
///
/// Holds authors and books behind a lock-guarded, cloneable handle.
pub mod storage;

pub mod logging;
