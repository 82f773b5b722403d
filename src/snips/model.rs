use std::collections::HashMap;
use std::fmt;

/// One parsed snippet: front-matter variables plus the verbatim source
/// body between the closing front-matter delimiter and the next opening
/// delimiter.
///
/// A `Snippet` is built up by the parser through [`Snippet::set_var`]
/// calls and a single body assignment; once handed to a filter or a
/// caller it is treated as a value and only read. The sole later
/// mutation is the id backfill pass adding an `id` variable before a
/// file is rewritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snippet {
    vars: HashMap<String, String>,
    pub source: String,
}

impl Snippet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.var("id")
    }

    pub fn language(&self) -> Option<&str> {
        self.var("language")
    }

    pub fn description(&self) -> Option<&str> {
        self.var("description")
    }

    /// The comma-separated `tags` variable, split. No per-tag trimming;
    /// tag comparison is exact.
    pub fn tags(&self) -> Vec<&str> {
        match self.var("tags") {
            Some(raw) if !raw.is_empty() => raw.split(',').collect(),
            _ => Vec::new(),
        }
    }

    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Canonical on-disk form: a delimiter line, one `key: value` line per
/// variable (map order, unspecified), a delimiter line, then the body.
/// The body keeps its own trailing newline; one is added only if it is
/// missing, so reserializing a parsed snippet does not grow it.
impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---")?;
        for (key, value) in &self.vars {
            writeln!(f, "{}: {}", key, value)?;
        }
        writeln!(f, "---")?;
        f.write_str(&self.source)?;
        if !self.source.ends_with('\n') {
            writeln!(f)?;
        }
        Ok(())
    }
}
