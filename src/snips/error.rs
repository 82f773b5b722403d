use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipsError {
    #[error("IO error: {0}")]
    Io(std::io::Error),

    /// A front-matter line with no `:` separator. Rewriting a file we
    /// could not fully parse would risk destroying it, so this aborts
    /// the run.
    #[error("{}:{line}: front matter line has no ':' separator: {text:?}", path.display())]
    MalformedMetadata {
        path: PathBuf,
        line: usize,
        text: String,
    },

    #[error("{0} snippets matched; refusing to write more than one to a file")]
    AmbiguousTarget(usize),

    #[error("no snippet matched: {0}")]
    NoMatch(String),

    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SnipsError>;
