//! Dirsweep - find directories by name and delete them interactively
//!
//! This crate provides the core functionality for the dirsweep application:
//! scanning a tree for matching folders, previewing their contents, and
//! deleting a selection concurrently.

pub mod cli;
pub mod config;
pub mod delete;
pub mod error;
pub mod preview;
pub mod scan;
pub mod session;
pub mod tui;

// Re-export primary types for convenience
pub use config::UserConfig;
pub use delete::{spawn_deletions, DeleteEvent, DeleteSession, DeleteSummary};
pub use error::{Result, SweepError};
pub use preview::PreviewTree;
pub use scan::{scan, MatchResult, NamePattern};
pub use session::{Outcome, SelectorSession};
