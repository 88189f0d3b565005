//! Directory scanning: walk a tree and collect directories whose *name*
//! matches a target, pruning matched and denylisted subtrees.

use crate::error::{Result, SweepError};
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory names that are never matched and never descended into.
pub const SKIP_DIRS: &[&str] = &[".git", ".idea", ".vscode"];

/// A directory found by the scan. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub path: PathBuf,
}

/// How a directory name is tested against the target.
#[derive(Debug, Clone)]
pub enum NamePattern {
    /// Exact string equality.
    Exact(String),
    /// Shell-style glob (`*`, `?`, character classes).
    Glob(Pattern),
}

impl NamePattern {
    /// Compiles the target string. A malformed glob is rejected here, before
    /// any scanning starts.
    pub fn new(pattern: &str, use_glob: bool) -> Result<Self> {
        if use_glob {
            let compiled = Pattern::new(pattern).map_err(|source| SweepError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;
            Ok(NamePattern::Glob(compiled))
        } else {
            Ok(NamePattern::Exact(pattern.to_string()))
        }
    }

    /// Tests a single directory name. Matching is by name, never full path.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NamePattern::Exact(target) => name == target,
            NamePattern::Glob(compiled) => compiled.matches(name),
        }
    }
}

/// Walks the tree rooted at `root` depth-first and returns every directory
/// whose name matches `pattern`, in traversal order.
///
/// A matched directory is recorded and *not* descended into, so nested
/// matches inside an already-matched directory are not reported. Entries in
/// [`SKIP_DIRS`] are pruned outright. Unreadable entries below the root are
/// skipped; only an unreadable root is an error.
pub fn scan(root: &Path, pattern: &NamePattern) -> Result<Vec<MatchResult>> {
    // Probe the root up front so a bad root fails loudly instead of being
    // swallowed by the per-entry skip below.
    fs::read_dir(root).map_err(|source| SweepError::Scan {
        path: root.to_path_buf(),
        source,
    })?;

    let mut results = Vec::new();
    let mut walker = WalkDir::new(root).into_iter();

    while let Some(entry) = walker.next() {
        // Permission errors and broken symlinks below the root are skipped.
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();

        if SKIP_DIRS.contains(&name.as_str()) {
            walker.skip_current_dir();
            continue;
        }

        if pattern.matches(&name) {
            results.push(MatchResult {
                path: entry.into_path(),
            });
            walker.skip_current_dir();
        }
    }

    Ok(results)
}
