use std::io::BufRead;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SnipsError};
use crate::filter::Filter;
use crate::model::Snippet;

/// A line whose trimmed content starts with `---` is a structural
/// delimiter, never data.
fn is_delimiter(trimmed: &str) -> bool {
    trimmed.starts_with("---")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Discarding lines until the first delimiter.
    AwaitingBlock,
    /// Inside a front-matter block, collecting `key: value` lines.
    InMetadata,
    /// Past the closing front-matter delimiter, accumulating the body.
    InBody,
}

/// Line-oriented scanner turning a stream into the snippets a filter
/// accepts, in stream order.
///
/// Construct a fresh parser per stream; it owns its state and body
/// accumulator, so nothing leaks from one file into the next.
pub struct Parser {
    state: State,
    body: String,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            state: State::AwaitingBlock,
            body: String::new(),
        }
    }

    /// Scans `reader` and returns every snippet `filter` accepts.
    ///
    /// Delimiters strictly alternate open/close: the delimiter closing a
    /// body doubles as the opener of the next block's front matter. A
    /// stream ending mid-body still yields its final snippet; `origin`
    /// is only used for error context.
    pub fn parse<R: BufRead>(
        mut self,
        reader: R,
        filter: &Filter,
        origin: &Path,
    ) -> Result<Vec<Snippet>> {
        let mut snippets = Vec::new();
        let mut snip = Snippet::new();
        let mut line_no = 0usize;

        for line in reader.lines() {
            let untrimmed = line.map_err(SnipsError::Io)?;
            line_no += 1;
            let trimmed = untrimmed.trim();

            match self.state {
                State::AwaitingBlock => {
                    if is_delimiter(trimmed) {
                        debug!("found front matter, parsing attributes");
                        self.state = State::InMetadata;
                    }
                }
                State::InMetadata => {
                    if is_delimiter(trimmed) {
                        debug!("end of front matter, parsing source");
                        self.state = State::InBody;
                        self.body.clear();
                    } else {
                        let (key, value) = trimmed.split_once(':').ok_or_else(|| {
                            SnipsError::MalformedMetadata {
                                path: PathBuf::from(origin),
                                line: line_no,
                                text: trimmed.to_string(),
                            }
                        })?;
                        snip.set_var(key.trim(), value.trim());
                    }
                }
                State::InBody => {
                    if is_delimiter(trimmed) {
                        debug!("found next snippet");
                        self.state = State::InMetadata;
                        snip.source = std::mem::take(&mut self.body);
                        if filter.matches(&snip) {
                            snippets.push(snip);
                        }
                        snip = Snippet::new();
                    } else {
                        // Body keeps the original, untrimmed line.
                        self.body.push_str(&untrimmed);
                        self.body.push('\n');
                    }
                }
            }
        }

        // End of stream closes the snippet under construction exactly
        // like a delimiter would, even if no body was ever started.
        snip.source = std::mem::take(&mut self.body);
        if filter.matches(&snip) {
            snippets.push(snip);
        }

        Ok(snippets)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
