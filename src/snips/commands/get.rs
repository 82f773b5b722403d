use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::Filter;
use crate::store::SnippetStore;

/// The user-facing selection: an id lookup, or a conjunction of
/// language and tag constraints.
#[derive(Debug, Clone, Default)]
pub struct SnippetQuery {
    pub id: Option<String>,
    pub language: Option<String>,
    pub tags: Vec<String>,
}

impl SnippetQuery {
    /// An id lookup overrides the other constraints; otherwise language
    /// and tags are ANDed on top of the wildcard default.
    pub fn to_filter(&self) -> Filter {
        if let Some(id) = &self.id {
            return Filter::All(vec![Filter::Wildcard, Filter::Id(id.clone())]);
        }

        let mut filters = vec![Filter::Wildcard];
        if let Some(lang) = &self.language {
            filters.push(Filter::Language(lang.clone()));
        }
        if !self.tags.is_empty() {
            filters.push(Filter::Tags(self.tags.clone()));
        }
        Filter::All(filters)
    }
}

pub fn run<S: SnippetStore>(store: &mut S, query: &SnippetQuery) -> Result<CmdResult> {
    let snippets = store.find(&query.to_filter())?;
    Ok(CmdResult::default().with_snippets(snippets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Snippet;
    use crate::store::memory::MemoryStore;

    fn snippet(vars: &[(&str, &str)]) -> Snippet {
        let mut snip = Snippet::new();
        for (key, value) in vars {
            snip.set_var(*key, *value);
        }
        snip
    }

    fn demo_store() -> MemoryStore {
        MemoryStore::with_snippets(vec![
            snippet(&[("id", "go-hello"), ("language", "go"), ("tags", "hello,cli")]),
            snippet(&[("id", "py-hello"), ("language", "python"), ("tags", "hello")]),
        ])
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let mut store = demo_store();
        let result = run(&mut store, &SnippetQuery::default()).unwrap();
        assert_eq!(result.snippets.len(), 2);
    }

    #[test]
    fn test_language_and_tags_are_anded() {
        let mut store = demo_store();
        let query = SnippetQuery {
            language: Some("go".to_string()),
            tags: vec!["hello".to_string()],
            ..Default::default()
        };
        let result = run(&mut store, &query).unwrap();
        assert_eq!(result.snippets.len(), 1);
        assert_eq!(result.snippets[0].id(), Some("go-hello"));

        let query = SnippetQuery {
            language: Some("python".to_string()),
            tags: vec!["cli".to_string()],
            ..Default::default()
        };
        let result = run(&mut store, &query).unwrap();
        assert!(result.snippets.is_empty());
    }

    #[test]
    fn test_id_overrides_other_constraints() {
        let mut store = demo_store();
        let query = SnippetQuery {
            id: Some("py-hello".to_string()),
            language: Some("go".to_string()),
            ..Default::default()
        };
        let result = run(&mut store, &query).unwrap();
        assert_eq!(result.snippets.len(), 1);
        assert_eq!(result.snippets[0].id(), Some("py-hello"));
    }
}
