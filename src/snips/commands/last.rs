use std::path::Path;

use crate::commands::CmdResult;
use crate::error::{Result, SnipsError};
use crate::filter::Filter;
use crate::index;
use crate::store::SnippetStore;

/// Re-fetches result number `nr` (1-based) from the last search.
pub fn run<S: SnippetStore>(store: &mut S, state_dir: &Path, nr: usize) -> Result<CmdResult> {
    let id = index::lookup_ordinal(state_dir, nr)?;
    let snippets = store.find(&Filter::Id(id.clone()))?;
    let snippet = snippets.into_iter().next().ok_or_else(|| {
        SnipsError::NoMatch(format!(
            "last search result {} points at id {} which no longer exists",
            nr, id
        ))
    })?;
    Ok(CmdResult::default().with_snippets(vec![snippet]))
}
