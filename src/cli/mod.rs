pub mod commands;
pub mod context;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Manage SSH keys used as single-repository Git deploy keys.
#[derive(Parser, Debug)]
#[command(name = "gdkm", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON file where the SSH keys are stored [default: keyring.json]
    #[arg(long, global = true, env = "GDKM_KEYRING", value_name = "FILE")]
    pub keyring: Option<PathBuf>,

    /// Path to alternative config file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new key pair and print its public key
    Generate {
        /// Unique name of the key pair
        id: String,
        /// SSH address of the repository, e.g. git@github.com:user/repo.git
        repository_url: String,
    },

    /// Print one field of a key pair, or every id when called without arguments
    Get {
        /// Key pair to read
        #[arg(requires = "field")]
        id: Option<String>,
        /// PublicKey, PrivateKey or RepositoryURL
        field: Option<String>,
    },

    /// Clone the repository associated with a key pair
    Clone {
        /// Key pair to clone with
        id: String,
        /// Target directory, must be empty or absent [default: <id>]
        destination: Option<PathBuf>,
        /// Keep a copy of the key in the clone's .git/ and use it for later fetches
        #[arg(long)]
        keep_key: bool,
    },
}

impl Commands {
    /// Command name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Generate { .. } => "generate",
            Commands::Get { .. } => "get",
            Commands::Clone { .. } => "clone",
        }
    }
}
