// CLI module for argument parsing and configuration

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Dirsweep - find directories by name and delete them interactively
///
/// Scans a directory tree for folders matching a name or glob pattern,
/// lets you pick which ones to remove, and deletes them concurrently.
#[derive(Parser, Debug, Clone)]
#[command(name = "dirsweep")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory name to search for (e.g. node_modules)
    ///
    /// If not specified, an interactive prompt asks for it.
    pub target: Option<String>,

    /// Root directory to scan
    ///
    /// If not specified, defaults to the current directory.
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Treat the target as a shell-style glob pattern (*, ?, [...])
    #[arg(short = 'g', long = "glob", action = ArgAction::SetTrue)]
    pub glob: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Validate the arguments and return any errors
    pub fn validate(&self) -> Result<(), String> {
        if !self.directory.exists() {
            return Err(format!(
                "Directory does not exist: {}",
                self.directory.display()
            ));
        }

        if !self.directory.is_dir() {
            return Err(format!(
                "Path is not a directory: {}",
                self.directory.display()
            ));
        }

        // A malformed glob should fail here, before any scanning starts.
        if self.glob {
            if let Some(ref target) = self.target {
                if let Err(e) = glob::Pattern::new(target) {
                    return Err(format!("Invalid glob pattern '{}': {}", target, e));
                }
            }
        }

        Ok(())
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub target: Option<String>,
    pub directory: PathBuf,
    pub use_glob: bool,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        AppConfig {
            target: args.target,
            directory: args.directory,
            use_glob: args.glob,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            target: None,
            directory: PathBuf::from("."),
            use_glob: false,
        }
    }
}
