//! GraphQL schema, resolvers and HTTP transport.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server (GraphiQL console at http://localhost:2000/graphql)
//! bookshelf serve
//!
//! # Execute a query against a freshly seeded catalog
//! bookshelf query '{ author(id: 2) { name books { name } } }'
//!
//! # Execute a mutation
//! bookshelf mutate 'addBook(name: "New Spring", authorId: 99) { id authorId }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `books`, `authors`, `book`, `author`
//! - **Mutations**: `addBook`, `addAuthor`
//!
//! Relational fields (`Book.author`, `Author.books`) are resolved on demand
//! by scanning the catalog; nothing is cached between or within requests.

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server, serve};
pub use types::*;
