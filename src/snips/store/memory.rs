use super::SnippetStore;
use crate::error::Result;
use crate::filter::Filter;
use crate::ident::assign_missing_ids;
use crate::model::Snippet;

/// In-memory store for testing the command layer without a filesystem.
/// Backfill mutates the held snippets just like `FileStore` rewrites a
/// file, but nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snippets: Vec<Snippet>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snippets(snippets: Vec<Snippet>) -> Self {
        Self { snippets }
    }

    pub fn push(&mut self, snippet: Snippet) {
        self.snippets.push(snippet);
    }
}

impl SnippetStore for MemoryStore {
    fn find(&mut self, filter: &Filter) -> Result<Vec<Snippet>> {
        assign_missing_ids(&mut self.snippets);
        Ok(self
            .snippets
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_backfills_and_filters() {
        let mut go = Snippet::new();
        go.set_var("language", "go");
        let mut py = Snippet::new();
        py.set_var("language", "python");

        let mut store = MemoryStore::with_snippets(vec![go, py]);

        let found = store.find(&Filter::Language("go".to_string())).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].id().is_some_and(|id| !id.is_empty()));
    }
}
