//! Story corpus repositories for Nocturne.
//!
//! The pipeline consumes the [`nocturne_interface::CorpusRepository`]
//! boundary; this crate supplies the reference implementation, an
//! in-process store behind a read-write lock. A database-backed
//! implementation slots in behind the same trait.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod json;
mod memory;

pub use json::JsonCorpus;
pub use memory::InMemoryCorpus;
