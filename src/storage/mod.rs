//! In-memory storage layer.
//!
//! Authors and books live in two ordered collections behind a single
//! [`Catalog`] handle. Records are only ever appended; nothing is persisted,
//! so every process starts from the [`seed`] set.
//!
//! ## Components
//!
//! - [`Catalog`]: shared, lock-guarded store with lookup and append
//! - [`seed`]: the fixed records present at startup

mod catalog;
pub mod seed;

pub use catalog::Catalog;
