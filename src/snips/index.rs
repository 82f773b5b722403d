use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SnipsError};
use crate::model::Snippet;

const LAST_SEARCH_FILENAME: &str = "last";

/// Persists the result set of a search as `<nr>: <id>` lines, 1-based,
/// so a later `last <nr>` can re-fetch a result by its printed number.
/// The file is replaced wholesale on every search.
pub fn write_last_search(state_dir: &Path, snippets: &[Snippet]) -> Result<()> {
    let path = state_dir.join(LAST_SEARCH_FILENAME);
    debug!("writing {} entries to {}", snippets.len(), path.display());

    let mut contents = String::new();
    for (i, snip) in snippets.iter().enumerate() {
        let _ = writeln!(contents, "{}: {}", i + 1, snip.id().unwrap_or_default());
    }
    fs::write(&path, contents).map_err(SnipsError::Io)
}

/// Resolves a 1-based ordinal from the last-search file back to the id
/// it was written with.
pub fn lookup_ordinal(state_dir: &Path, nr: usize) -> Result<String> {
    let path = state_dir.join(LAST_SEARCH_FILENAME);
    if !path.exists() {
        return Err(SnipsError::NoMatch(
            "no previous search results to look up".to_string(),
        ));
    }

    let contents = fs::read_to_string(&path).map_err(SnipsError::Io)?;
    for line in contents.lines() {
        if let Some((ordinal, id)) = line.split_once(':') {
            if ordinal.trim().parse::<usize>() == Ok(nr) {
                return Ok(id.trim().to_string());
            }
        }
    }

    Err(SnipsError::NoMatch(format!(
        "the last search had no result number {}",
        nr
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet_with_id(id: &str) -> Snippet {
        let mut snip = Snippet::new();
        snip.set_var("id", id);
        snip
    }

    #[test]
    fn test_write_then_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let snippets = vec![snippet_with_id("alpha"), snippet_with_id("beta")];

        write_last_search(dir.path(), &snippets).unwrap();

        assert_eq!(lookup_ordinal(dir.path(), 1).unwrap(), "alpha");
        assert_eq!(lookup_ordinal(dir.path(), 2).unwrap(), "beta");
        assert!(matches!(
            lookup_ordinal(dir.path(), 3),
            Err(SnipsError::NoMatch(_))
        ));
    }

    #[test]
    fn test_each_search_replaces_the_file() {
        let dir = tempfile::tempdir().unwrap();

        write_last_search(dir.path(), &[snippet_with_id("old")]).unwrap();
        write_last_search(dir.path(), &[snippet_with_id("new")]).unwrap();

        assert_eq!(lookup_ordinal(dir.path(), 1).unwrap(), "new");
        let contents = fs::read_to_string(dir.path().join(LAST_SEARCH_FILENAME)).unwrap();
        assert_eq!(contents, "1: new\n");
    }

    #[test]
    fn test_lookup_without_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            lookup_ordinal(dir.path(), 1),
            Err(SnipsError::NoMatch(_))
        ));
    }
}
