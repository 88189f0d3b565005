//! Bounded preview trees for inspecting a match before deletion.
//!
//! Nodes live in a single arena (`Vec<PreviewNode>`) and reference their
//! children by index, so expand/collapse never chases live pointers and a
//! rebuilt tree cannot leave anything dangling. The cursor in the UI indexes
//! into the flattened view, not the arena.

use std::fs;
use std::path::{Path, PathBuf};

/// Levels below the root materialized at build time.
pub const MAX_PREVIEW_DEPTH: usize = 3;
/// Total node budget for one tree, root included.
pub const MAX_PREVIEW_ITEMS: usize = 300;

/// Directory levels that start out expanded so the first view is useful.
const AUTO_EXPAND_LEVELS: usize = 2;

#[derive(Debug)]
pub struct PreviewNode {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub expanded: bool,
    pub depth: usize,
    /// Arena indices of this node's children, in display order.
    pub children: Vec<usize>,
    /// True once the single lazy directory read has happened. Children are
    /// populated exactly once and cached; an empty or unreadable directory is
    /// not re-probed on later toggles.
    loaded: bool,
}

#[derive(Debug)]
pub struct PreviewTree {
    nodes: Vec<PreviewNode>,
}

impl PreviewTree {
    /// Builds a snapshot of `root_path`, bounded by [`MAX_PREVIEW_DEPTH`] and
    /// [`MAX_PREVIEW_ITEMS`]. Returns the tree and whether either budget cut
    /// the walk short. Truncation is a display concern, not an error; so are
    /// unreadable entries, which are simply omitted.
    pub fn build(root_path: &Path) -> (Self, bool) {
        let name = root_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root_path.display().to_string());

        let mut tree = PreviewTree {
            nodes: vec![PreviewNode {
                name,
                path: root_path.to_path_buf(),
                is_dir: true,
                expanded: true,
                depth: 0,
                children: Vec::new(),
                loaded: false,
            }],
        };

        let mut count = 1;
        let mut truncated = false;
        tree.fill(0, 0, &mut count, &mut truncated);
        (tree, truncated)
    }

    pub fn node(&self, index: usize) -> &PreviewNode {
        &self.nodes[index]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Expands or collapses the directory at `index`. The first expansion
    /// performs the one lazy directory read; later toggles only flip
    /// visibility. Non-directories are a no-op.
    pub fn toggle_expand(&mut self, index: usize) {
        if !self.nodes[index].is_dir {
            return;
        }
        if !self.nodes[index].loaded {
            self.load_children(index);
        }
        self.nodes[index].expanded = !self.nodes[index].expanded;
    }

    pub fn collapse(&mut self, index: usize) {
        self.nodes[index].expanded = false;
    }

    /// Depth-first, children-after-parent ordering of the visible nodes:
    /// a node's children are included only while it is expanded.
    pub fn flatten(&self) -> Vec<usize> {
        let mut out = Vec::new();
        self.flatten_into(0, &mut out);
        out
    }

    fn flatten_into(&self, index: usize, out: &mut Vec<usize>) {
        out.push(index);
        let node = &self.nodes[index];
        if node.is_dir && node.expanded {
            for &child in &node.children {
                self.flatten_into(child, out);
            }
        }
    }

    fn fill(&mut self, index: usize, depth: usize, count: &mut usize, truncated: &mut bool) {
        if depth >= MAX_PREVIEW_DEPTH || *count >= MAX_PREVIEW_ITEMS {
            *truncated = true;
            return;
        }

        let path = self.nodes[index].path.clone();
        self.nodes[index].loaded = true;
        let entries = match read_sorted(&path) {
            Ok(entries) => entries,
            Err(_) => return,
        };

        for entry in entries {
            if *count >= MAX_PREVIEW_ITEMS {
                *truncated = true;
                return;
            }

            let child_index = self.nodes.len();
            let child_is_dir = entry.is_dir;
            self.nodes.push(PreviewNode {
                name: entry.name,
                path: entry.path,
                is_dir: entry.is_dir,
                expanded: false,
                depth: depth + 1,
                children: Vec::new(),
                loaded: false,
            });
            self.nodes[index].children.push(child_index);
            *count += 1;

            if child_is_dir && depth < AUTO_EXPAND_LEVELS - 1 {
                self.nodes[child_index].expanded = true;
                self.fill(child_index, depth + 1, count, truncated);
            }
        }
    }

    fn load_children(&mut self, index: usize) {
        let path = self.nodes[index].path.clone();
        let depth = self.nodes[index].depth;
        // Marked loaded even when the read fails, so a broken directory is
        // not re-probed on every toggle.
        self.nodes[index].loaded = true;

        let entries = match read_sorted(&path) {
            Ok(entries) => entries,
            Err(_) => return,
        };

        for entry in entries {
            let child_index = self.nodes.len();
            self.nodes.push(PreviewNode {
                name: entry.name,
                path: entry.path,
                is_dir: entry.is_dir,
                expanded: false,
                depth: depth + 1,
                children: Vec::new(),
                loaded: false,
            });
            self.nodes[index].children.push(child_index);
        }
    }
}

struct SortedEntry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// One directory level, directories first, then lexicographic by name.
/// Individual entries that cannot be read are skipped.
fn read_sorted(path: &Path) -> std::io::Result<Vec<SortedEntry>> {
    let mut entries = Vec::new();

    for entry_result in fs::read_dir(path)? {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        let is_dir = match entry.file_type() {
            Ok(file_type) => file_type.is_dir(),
            Err(_) => continue,
        };
        entries.push(SortedEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
            is_dir,
        });
    }

    entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
    Ok(entries)
}
