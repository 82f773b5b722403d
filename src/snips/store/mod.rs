//! # Storage Layer
//!
//! The [`SnippetStore`] trait abstracts where snippets live so the
//! command layer can be tested without a filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store. Walks the snippets root for
//!   files with the configured extension, parses each one, backfills
//!   missing ids (rewriting the file through a backup-first protocol),
//!   then applies the caller's filter.
//! - [`memory::MemoryStore`]: in-memory store for command tests. Same
//!   backfill semantics, no persistence.
//!
//! A `find` call takes `&mut self` because looking at a file can heal
//! it: any snippet without an id gets one, and the file is rewritten in
//! place before filtering.

use crate::error::Result;
use crate::filter::Filter;
use crate::model::Snippet;

pub mod fs;
pub mod memory;

/// Abstract interface for locating snippets.
pub trait SnippetStore {
    /// Parse every snippet in the store, backfill missing ids, and
    /// return the snippets the filter accepts, in store order.
    fn find(&mut self, filter: &Filter) -> Result<Vec<Snippet>>;
}
