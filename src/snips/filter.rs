use crate::model::Snippet;

/// A composable accept/reject test over a [`Snippet`].
///
/// Filters are pure: evaluation never fails, and a snippet with missing
/// or ill-formed variables simply does not match. Conjunction is
/// expressed with [`Filter::All`], which short-circuits on the first
/// rejection.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Accepts every snippet.
    Wildcard,
    /// Accepts a snippet whose `id` is non-empty and equals the given id.
    Id(String),
    /// Accepts a snippet whose `language` is non-empty and equals the
    /// given language. An empty language is a pass-through default.
    Language(String),
    /// Accepts a snippet carrying *all* of the given tags. Comparison is
    /// exact and case-sensitive; an empty tag list accepts everything.
    Tags(Vec<String>),
    /// Accepts a snippet every inner filter accepts. Empty accepts
    /// everything.
    All(Vec<Filter>),
}

impl Filter {
    pub fn matches(&self, snippet: &Snippet) -> bool {
        match self {
            Filter::Wildcard => true,
            Filter::Id(id) => snippet.id().is_some_and(|v| !v.is_empty() && v == id),
            Filter::Language(lang) => {
                lang.is_empty()
                    || snippet
                        .language()
                        .is_some_and(|v| !v.is_empty() && v == lang)
            }
            Filter::Tags(requested) => {
                let tags = snippet.tags();
                requested.iter().all(|t| tags.contains(&t.as_str()))
            }
            Filter::All(filters) => filters.iter().all(|f| f.matches(snippet)),
        }
    }
}
