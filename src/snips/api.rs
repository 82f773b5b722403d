//! # API Facade
//!
//! The single entry point for snips operations, a thin layer over the
//! command modules. It dispatches, wires in the last-search sidecar,
//! and returns structured results; presentation stays in the CLI.
//!
//! `SnipsApi<S: SnippetStore>` is generic over the storage backend:
//! `FileStore` in production, `MemoryStore` in tests.

use std::path::Path;

use crate::commands::{self, CmdResult, SnipsPaths};
use crate::error::Result;
use crate::index;
use crate::store::SnippetStore;

pub struct SnipsApi<S: SnippetStore> {
    store: S,
    paths: SnipsPaths,
}

impl<S: SnippetStore> SnipsApi<S> {
    pub fn new(store: S, paths: SnipsPaths) -> Self {
        Self { store, paths }
    }

    /// Runs a filtered search and records the result ordinals in the
    /// last-search file. Only searches update it; `last` and `export`
    /// leave it alone.
    pub fn get_snippets(&mut self, query: &commands::get::SnippetQuery) -> Result<CmdResult> {
        let result = commands::get::run(&mut self.store, query)?;
        index::write_last_search(&self.paths.state, &result.snippets)?;
        Ok(result)
    }

    pub fn last_snippet(&mut self, nr: usize) -> Result<CmdResult> {
        commands::last::run(&mut self.store, &self.paths.state, nr)
    }

    pub fn export_snippet(
        &mut self,
        query: &commands::get::SnippetQuery,
        out: &Path,
    ) -> Result<CmdResult> {
        commands::export::run(&mut self.store, query, out)
    }

    pub fn paths(&self) -> &SnipsPaths {
        &self.paths
    }
}

pub use commands::get::SnippetQuery;
pub use commands::{CmdMessage, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Snippet;
    use crate::store::memory::MemoryStore;

    fn api_with(snippets: Vec<Snippet>) -> (tempfile::TempDir, SnipsApi<MemoryStore>) {
        let dir = tempfile::tempdir().unwrap();
        let paths = SnipsPaths {
            root: dir.path().to_path_buf(),
            state: dir.path().to_path_buf(),
        };
        let api = SnipsApi::new(MemoryStore::with_snippets(snippets), paths);
        (dir, api)
    }

    fn snippet_with_id(id: &str) -> Snippet {
        let mut snip = Snippet::new();
        snip.set_var("id", id);
        snip
    }

    #[test]
    fn test_get_then_last_roundtrip() {
        let (_dir, mut api) = api_with(vec![snippet_with_id("alpha"), snippet_with_id("beta")]);

        let found = api.get_snippets(&SnippetQuery::default()).unwrap();
        assert_eq!(found.snippets.len(), 2);

        let second = api.last_snippet(2).unwrap();
        assert_eq!(second.snippets[0].id(), Some("beta"));
    }

    #[test]
    fn test_last_without_search_errors() {
        let (_dir, mut api) = api_with(vec![snippet_with_id("alpha")]);
        assert!(api.last_snippet(1).is_err());
    }
}
