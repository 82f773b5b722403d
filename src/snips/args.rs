use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "snips", version = get_version())]
#[command(about = "Find code snippets in front-matter delimited files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// The selection flags shared by `get` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Only snippets in this language
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Only snippets carrying all of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// The snippet with exactly this id (overrides --lang and --tags)
    #[arg(long)]
    pub id: Option<String>,

    /// File name to skip during discovery
    #[arg(short = 'x', long)]
    pub exclude: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find snippets
    #[command(alias = "g")]
    Get {
        #[command(flatten)]
        query: QueryArgs,

        /// Print each snippet's description
        #[arg(long)]
        desc: bool,
    },

    /// Re-fetch a result from the last search by its number
    #[command(alias = "l")]
    Last {
        /// 1-based result number from the previous get
        nr: usize,
    },

    /// Write a single matching snippet's body to a file
    #[command(alias = "x")]
    Export {
        /// Destination file
        out: PathBuf,

        #[command(flatten)]
        query: QueryArgs,
    },
}
