use std::fs;
use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipsError};
use crate::store::SnippetStore;

use super::get::SnippetQuery;

/// Writes the body of the single snippet matching `query` to `out`.
/// The front matter is not written; the file receives the source
/// verbatim. Anything other than exactly one match writes nothing.
pub fn run<S: SnippetStore>(store: &mut S, query: &SnippetQuery, out: &Path) -> Result<CmdResult> {
    let mut snippets = store.find(&query.to_filter())?;

    let snippet = match snippets.len() {
        0 => {
            return Err(SnipsError::NoMatch(
                "nothing to export for this selection".to_string(),
            ))
        }
        1 => snippets.remove(0),
        n => return Err(SnipsError::AmbiguousTarget(n)),
    };

    fs::write(out, snippet.source.as_bytes()).map_err(SnipsError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported snippet {} to {}",
        snippet.id().unwrap_or_default(),
        out.display()
    )));
    Ok(result.with_snippets(vec![snippet]))
}
