use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::SnippetStore;
use crate::error::{Result, SnipsError};
use crate::filter::Filter;
use crate::ident::assign_missing_ids;
use crate::model::Snippet;
use crate::parse::Parser;

pub struct FileStore {
    root: PathBuf,
    file_ext: String,
    exclude: Vec<String>,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: ".snipe".to_string(),
            exclude: Vec::new(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    /// File names (not paths) to skip during discovery.
    pub fn with_excluded(mut self, names: Vec<String>) -> Self {
        self.exclude = names;
        self
    }

    /// Walks the root for snippet files, depth-first, sorted by file
    /// name so result order (and last-search ordinals) is stable.
    fn snippet_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                SnipsError::Store(format!("could not walk {}: {}", self.root.display(), e))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if self.exclude.iter().any(|x| x == name.as_ref()) {
                debug!("skipping excluded file {}", entry.path().display());
                continue;
            }
            if name.ends_with(&self.file_ext) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn load_file(&self, path: &Path) -> Result<Vec<Snippet>> {
        let file = File::open(path).map_err(SnipsError::Io)?;
        Parser::new().parse(BufReader::new(file), &Filter::Wildcard, path)
    }

    /// Replaces a snippet file with the canonical form of `snippets`.
    ///
    /// Order matters: the backup copy must be complete and durable
    /// before the original is deleted, so a failure at any later step
    /// leaves a recoverable `.bk` sibling.
    fn rewrite(&self, path: &Path, snippets: &[Snippet]) -> Result<()> {
        let mut backup_name = OsString::from(path.as_os_str());
        backup_name.push(".bk");
        let backup_path = PathBuf::from(backup_name);

        debug!("backing up {} to {}", path.display(), backup_path.display());
        let mut original = File::open(path).map_err(SnipsError::Io)?;
        let mut backup = File::create(&backup_path).map_err(SnipsError::Io)?;
        std::io::copy(&mut original, &mut backup).map_err(SnipsError::Io)?;
        backup.sync_all().map_err(SnipsError::Io)?;
        drop(backup);
        drop(original);

        fs::remove_file(path).map_err(SnipsError::Io)?;

        let mut new_file = File::create(path).map_err(SnipsError::Io)?;
        for snip in snippets {
            new_file
                .write_all(snip.to_string().as_bytes())
                .map_err(SnipsError::Io)?;
        }
        new_file.sync_all().map_err(SnipsError::Io)?;
        Ok(())
    }
}

impl SnippetStore for FileStore {
    fn find(&mut self, filter: &Filter) -> Result<Vec<Snippet>> {
        let mut results = Vec::new();
        for path in self.snippet_files()? {
            let mut snippets = self.load_file(&path)?;
            if assign_missing_ids(&mut snippets) {
                debug!("assigned ids in {}, rewriting", path.display());
                self.rewrite(&path, &snippets)?;
            }
            results.extend(snippets.into_iter().filter(|s| filter.matches(s)));
            debug!("{} snippets matched so far", results.len());
        }
        Ok(results)
    }
}
