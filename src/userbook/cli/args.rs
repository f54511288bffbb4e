use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, with git hash and commit date for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("USERBOOK_GIT_HASH");
    const COMMIT_DATE: &str = env!("USERBOOK_COMMIT_DATE");
    const IS_RELEASE: &str = env!("USERBOOK_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "userbook", bin_name = "userbook", version = get_version())]
#[command(about = "Manage a list of users stored in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the per-user data directory instead of the current directory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Backing JSON file (overrides the configured data file)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data file with two sample users
    Create {
        /// Overwrite an existing file without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Add a user
    #[command(alias = "a")]
    Add {
        name: String,
        age: String,
        email: String,
    },

    /// List all users
    #[command(alias = "ls")]
    List,

    /// Search users by name or email (case-insensitive substring)
    #[command(alias = "s")]
    Search { term: String },

    /// Remove a user by name
    #[command(alias = "rm")]
    Remove {
        name: String,

        /// Confirm a single match without asking
        #[arg(short, long)]
        yes: bool,

        /// Pick among several users with the same name (1-based, 0 cancels)
        #[arg(long, value_name = "N")]
        pick: Option<String>,
    },

    /// Print the path of the data file
    Path,

    /// Get or set configuration (keys: data-file, indent)
    Config {
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Start the interactive menu (the default)
    Shell,
}
