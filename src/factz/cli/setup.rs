use clap::{Parser, Subcommand};
use factz::model::SearchMode;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

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
#[command(name = "factz", bin_name = "factz", version = get_version())]
#[command(about = "Browse, search and collect short facts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Fact file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Extra fact file to show alongside the main one (read only, repeatable)
    #[arg(long, global = true, value_name = "PATH")]
    pub merge: Vec<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a random fact (default)
    #[command(alias = "n")]
    Next,

    /// Show a random fact matching a search term
    #[command(alias = "s")]
    Search {
        /// Text to look for (case-insensitive)
        term: Vec<String>,

        /// Field to search: author, text, type or all
        #[arg(short, long)]
        mode: Option<SearchMode>,
    },

    /// Add a new fact to the fact file
    #[command(alias = "a")]
    Add {
        #[arg(long)]
        author: Option<String>,

        #[arg(long = "type", value_name = "TYPE")]
        fact_type: Option<String>,

        #[arg(long)]
        text: Option<String>,
    },

    /// List every fact in file order
    #[command(alias = "ls")]
    List,

    /// Create an empty fact file if there is none
    Init,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file or search-mode)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Logs go to stderr. `RUST_LOG` takes precedence over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["factz"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.file.is_none());
    }

    #[test]
    fn search_collects_words_and_mode() {
        let cli = Cli::try_parse_from(["factz", "search", "radium", "glows", "--mode", "text"])
            .unwrap();
        match cli.command {
            Some(Commands::Search { term, mode }) => {
                assert_eq!(term, vec!["radium", "glows"]);
                assert_eq!(mode, Some(SearchMode::Text));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn bad_search_mode_is_rejected() {
        assert!(Cli::try_parse_from(["factz", "search", "x", "--mode", "title"]).is_err());
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "factz", "add", "--author", "A", "--type", "T", "--text", "X", "--file", "f.xml",
            "--merge", "a.xml", "--merge", "b.xml",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("f.xml")));
        assert_eq!(cli.merge.len(), 2);
        assert!(matches!(
            cli.command,
            Some(Commands::Add { fact_type: Some(ref t), .. }) if t == "T"
        ));
    }
}
