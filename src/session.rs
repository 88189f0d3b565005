//! Selection session: the state machine behind the interactive picker.
//!
//! All transitions are methods taking pure action enums from [`crate::tui::input`];
//! rendering never mutates the session. The session ends by setting `outcome`,
//! which the driving loop in `main.rs` observes.

use crate::preview::PreviewTree;
use crate::scan::MatchResult;
use crate::tui::input::{ListAction, PreviewAction};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Preview,
}

#[derive(Debug)]
pub struct SelectableItem {
    pub result: MatchResult,
    pub selected: bool,
}

/// One open preview. Dropped wholesale when the user leaves preview mode, so
/// re-entering always rebuilds a fresh snapshot.
#[derive(Debug)]
pub struct PreviewPane {
    pub tree: PreviewTree,
    /// Visible nodes in display order; the cursor indexes into this.
    pub flat: Vec<usize>,
    pub cursor: usize,
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    Confirmed(Vec<PathBuf>),
}

#[derive(Debug)]
pub struct SelectorSession {
    pub items: Vec<SelectableItem>,
    pub mode: Mode,
    pub cursor: usize,
    pub preview: Option<PreviewPane>,
    /// Set after a lone `g`; the next `g` jumps to the top, anything else
    /// clears the chord.
    pub pending_g: bool,
    pub outcome: Option<Outcome>,
}

impl SelectorSession {
    /// Callers must not construct a session over an empty result set; the
    /// empty case is reported before any UI starts.
    pub fn new(results: Vec<MatchResult>) -> Self {
        debug_assert!(!results.is_empty());
        SelectorSession {
            items: results
                .into_iter()
                .map(|result| SelectableItem {
                    result,
                    selected: false,
                })
                .collect(),
            mode: Mode::List,
            cursor: 0,
            preview: None,
            pending_g: false,
            outcome: None,
        }
    }

    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.selected).count()
    }

    pub fn apply_list(&mut self, action: ListAction) {
        // Any action other than a second `g` breaks the chord.
        let chord_pending = std::mem::take(&mut self.pending_g);

        match action {
            ListAction::PrefixG => {
                if chord_pending {
                    self.cursor = 0;
                } else {
                    self.pending_g = true;
                }
            }
            ListAction::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            ListAction::MoveDown => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
            }
            ListAction::Top => self.cursor = 0,
            ListAction::Bottom => self.cursor = self.items.len() - 1,
            ListAction::Toggle => self.toggle_and_advance(),
            ListAction::SelectAll => self.set_all(true),
            ListAction::DeselectAll => self.set_all(false),
            ListAction::Invert => {
                for item in &mut self.items {
                    item.selected = !item.selected;
                }
            }
            ListAction::Preview => self.enter_preview(),
            ListAction::Confirm => self.confirm(),
            ListAction::Quit => self.outcome = Some(Outcome::Quit),
            ListAction::None => {}
        }
    }

    pub fn apply_preview(&mut self, action: PreviewAction) {
        let Some(pane) = self.preview.as_mut() else {
            return;
        };

        match action {
            PreviewAction::MoveUp => pane.cursor = pane.cursor.saturating_sub(1),
            PreviewAction::MoveDown => {
                if pane.cursor + 1 < pane.flat.len() {
                    pane.cursor += 1;
                }
            }
            PreviewAction::ToggleExpand => {
                let index = pane.flat[pane.cursor];
                pane.tree.toggle_expand(index);
                pane.flat = pane.tree.flatten();
                // Collapsing can shrink the view above the cursor.
                pane.cursor = pane.cursor.min(pane.flat.len() - 1);
            }
            PreviewAction::CollapseOrBack => self.collapse_or_back(),
            PreviewAction::NextFolder => self.shift_preview(1),
            PreviewAction::PrevFolder => self.shift_preview(-1),
            PreviewAction::Exit => self.exit_preview(),
            PreviewAction::None => {}
        }
    }

    fn toggle_and_advance(&mut self) {
        let item = &mut self.items[self.cursor];
        item.selected = !item.selected;
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    fn set_all(&mut self, selected: bool) {
        for item in &mut self.items {
            item.selected = selected;
        }
    }

    fn confirm(&mut self) {
        let paths: Vec<PathBuf> = self
            .items
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.result.path.clone())
            .collect();
        // Confirming nothing is a no-op; the list stays up.
        if !paths.is_empty() {
            self.outcome = Some(Outcome::Confirmed(paths));
        }
    }

    fn enter_preview(&mut self) {
        let path = self.items[self.cursor].result.path.clone();
        let (tree, truncated) = PreviewTree::build(&path);
        let flat = tree.flatten();
        self.preview = Some(PreviewPane {
            tree,
            flat,
            cursor: 0,
            truncated,
        });
        self.mode = Mode::Preview;
    }

    fn exit_preview(&mut self) {
        self.preview = None;
        self.mode = Mode::List;
    }

    /// `h`: collapse the expanded directory under the cursor, otherwise jump
    /// to the nearest visible ancestor. On a root with nothing left to
    /// collapse it leaves preview mode.
    fn collapse_or_back(&mut self) {
        let Some(pane) = self.preview.as_mut() else {
            return;
        };

        let index = pane.flat[pane.cursor];
        let node = pane.tree.node(index);
        let depth = node.depth;
        let collapsible = node.is_dir && node.expanded;

        // Collapsing wins over leaving: an expanded root folds up first and
        // only a second press exits.
        if collapsible {
            pane.tree.collapse(index);
            pane.flat = pane.tree.flatten();
            // The collapsed node itself stays visible at the same position.
            return;
        }

        if depth == 0 {
            self.exit_preview();
            return;
        }

        for pos in (0..pane.cursor).rev() {
            if pane.tree.node(pane.flat[pos]).depth < depth {
                pane.cursor = pos;
                return;
            }
        }
    }

    /// `n`/`p`: move the list cursor and re-open the preview on the new item.
    fn shift_preview(&mut self, delta: isize) {
        let next = self.cursor as isize + delta;
        if next < 0 || next as usize >= self.items.len() {
            return;
        }
        self.cursor = next as usize;
        self.enter_preview();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fake_results(count: usize) -> Vec<MatchResult> {
        (0..count)
            .map(|i| MatchResult {
                path: PathBuf::from(format!("/virtual/match{}", i)),
            })
            .collect()
    }

    fn session(count: usize) -> SelectorSession {
        SelectorSession::new(fake_results(count))
    }

    mod navigation_tests {
        use super::*;

        #[test]
        fn test_move_down_and_up_clamp_at_edges() {
            let mut s = session(3);

            s.apply_list(ListAction::MoveUp);
            assert_eq!(s.cursor, 0);

            s.apply_list(ListAction::MoveDown);
            s.apply_list(ListAction::MoveDown);
            s.apply_list(ListAction::MoveDown);
            assert_eq!(s.cursor, 2);
        }

        #[test]
        fn test_top_and_bottom() {
            let mut s = session(5);
            s.apply_list(ListAction::Bottom);
            assert_eq!(s.cursor, 4);
            s.apply_list(ListAction::Top);
            assert_eq!(s.cursor, 0);
        }

        #[test]
        fn test_gg_chord_goes_to_top() {
            let mut s = session(5);
            s.apply_list(ListAction::Bottom);

            s.apply_list(ListAction::PrefixG);
            assert!(s.pending_g);
            assert_eq!(s.cursor, 4);

            s.apply_list(ListAction::PrefixG);
            assert!(!s.pending_g);
            assert_eq!(s.cursor, 0);
        }

        #[test]
        fn test_other_key_breaks_the_chord() {
            let mut s = session(5);
            s.apply_list(ListAction::Bottom);

            s.apply_list(ListAction::PrefixG);
            s.apply_list(ListAction::MoveUp);
            assert!(!s.pending_g);
            assert_eq!(s.cursor, 3);

            // A later lone g must start a fresh chord, not complete the old one.
            s.apply_list(ListAction::PrefixG);
            assert_eq!(s.cursor, 3);
        }

        #[test]
        fn test_unmapped_key_breaks_the_chord() {
            let mut s = session(5);
            s.apply_list(ListAction::Bottom);

            s.apply_list(ListAction::PrefixG);
            s.apply_list(ListAction::None);
            assert!(!s.pending_g);

            s.apply_list(ListAction::PrefixG);
            assert!(s.pending_g);
            assert_eq!(s.cursor, 4);
        }
    }

    mod selection_tests {
        use super::*;

        fn selected(s: &SelectorSession) -> Vec<bool> {
            s.items.iter().map(|i| i.selected).collect()
        }

        #[test]
        fn test_toggle_selects_and_advances() {
            let mut s = session(3);
            s.apply_list(ListAction::Toggle);

            assert_eq!(selected(&s), vec![true, false, false]);
            assert_eq!(s.cursor, 1);
        }

        #[test]
        fn test_toggle_on_last_item_does_not_advance() {
            let mut s = session(2);
            s.apply_list(ListAction::Bottom);
            s.apply_list(ListAction::Toggle);

            assert_eq!(selected(&s), vec![false, true]);
            assert_eq!(s.cursor, 1);
        }

        #[test]
        fn test_toggle_twice_deselects() {
            let mut s = session(1);
            s.apply_list(ListAction::Toggle);
            s.apply_list(ListAction::Toggle);
            assert_eq!(selected(&s), vec![false]);
        }

        #[test]
        fn test_select_all_is_idempotent() {
            let mut s = session(3);
            s.apply_list(ListAction::SelectAll);
            s.apply_list(ListAction::SelectAll);
            assert_eq!(selected(&s), vec![true, true, true]);
            assert_eq!(s.selected_count(), 3);
        }

        #[test]
        fn test_deselect_all_clears_everything() {
            let mut s = session(3);
            s.apply_list(ListAction::SelectAll);
            s.apply_list(ListAction::DeselectAll);
            assert_eq!(s.selected_count(), 0);
        }

        #[test]
        fn test_invert_twice_restores() {
            let mut s = session(3);
            s.apply_list(ListAction::Toggle);
            let before = selected(&s);

            s.apply_list(ListAction::Invert);
            assert_eq!(selected(&s), vec![false, true, true]);
            s.apply_list(ListAction::Invert);
            assert_eq!(selected(&s), before);
        }
    }

    mod confirm_tests {
        use super::*;

        #[test]
        fn test_confirm_with_nothing_selected_is_a_noop() {
            let mut s = session(3);
            s.apply_list(ListAction::Confirm);

            assert!(s.outcome.is_none());
            assert_eq!(s.mode, Mode::List);
        }

        #[test]
        fn test_confirm_yields_selected_paths_in_list_order() {
            let mut s = session(3);
            s.apply_list(ListAction::Bottom);
            s.apply_list(ListAction::Toggle);
            s.apply_list(ListAction::Top);
            s.apply_list(ListAction::Toggle);
            s.apply_list(ListAction::Confirm);

            assert_eq!(
                s.outcome,
                Some(Outcome::Confirmed(vec![
                    PathBuf::from("/virtual/match0"),
                    PathBuf::from("/virtual/match2"),
                ]))
            );
        }

        #[test]
        fn test_quit_sets_outcome() {
            let mut s = session(1);
            s.apply_list(ListAction::Quit);
            assert_eq!(s.outcome, Some(Outcome::Quit));
        }
    }

    mod preview_tests {
        use super::*;

        /// Session over real directories so previews have content.
        fn session_over(temp: &TempDir, names: &[&str]) -> SelectorSession {
            let results = names
                .iter()
                .map(|name| {
                    let path = temp.path().join(name);
                    fs::create_dir_all(&path).unwrap();
                    MatchResult { path }
                })
                .collect();
            SelectorSession::new(results)
        }

        #[test]
        fn test_enter_and_exit_preview() {
            let temp = TempDir::new().unwrap();
            let mut s = session_over(&temp, &["alpha"]);

            s.apply_list(ListAction::Preview);
            assert_eq!(s.mode, Mode::Preview);
            assert!(s.preview.is_some());

            s.apply_preview(PreviewAction::Exit);
            assert_eq!(s.mode, Mode::List);
            assert!(s.preview.is_none());
        }

        #[test]
        fn test_toggle_expand_grows_and_shrinks_the_view() {
            let temp = TempDir::new().unwrap();
            let mut s = session_over(&temp, &["alpha"]);
            fs::create_dir_all(temp.path().join("alpha/a/b/deep")).unwrap();

            s.apply_list(ListAction::Preview);
            let pane = s.preview.as_ref().unwrap();
            let visible = pane.flat.len();

            // Cursor onto `b`, which holds the collapsed `deep`.
            s.apply_preview(PreviewAction::MoveDown);
            s.apply_preview(PreviewAction::MoveDown);
            s.apply_preview(PreviewAction::ToggleExpand);
            assert_eq!(s.preview.as_ref().unwrap().flat.len(), visible + 1);

            s.apply_preview(PreviewAction::ToggleExpand);
            assert_eq!(s.preview.as_ref().unwrap().flat.len(), visible);
        }

        #[test]
        fn test_collapse_or_back_collapses_expanded_directory() {
            let temp = TempDir::new().unwrap();
            let mut s = session_over(&temp, &["alpha"]);
            fs::create_dir_all(temp.path().join("alpha/a/b")).unwrap();

            s.apply_list(ListAction::Preview);
            s.apply_preview(PreviewAction::MoveDown);

            // `a` was auto-expanded at build time.
            s.apply_preview(PreviewAction::CollapseOrBack);
            let pane = s.preview.as_ref().unwrap();
            assert_eq!(pane.flat.len(), 2);
            assert_eq!(pane.cursor, 1);
        }

        #[test]
        fn test_collapse_or_back_jumps_to_parent_from_leaf() {
            let temp = TempDir::new().unwrap();
            let mut s = session_over(&temp, &["alpha"]);
            fs::write(temp.path().join("alpha/file"), b"x").unwrap();

            s.apply_list(ListAction::Preview);
            s.apply_preview(PreviewAction::MoveDown);
            assert_eq!(s.preview.as_ref().unwrap().cursor, 1);

            s.apply_preview(PreviewAction::CollapseOrBack);
            assert_eq!(s.preview.as_ref().unwrap().cursor, 0);
            assert_eq!(s.mode, Mode::Preview);
        }

        #[test]
        fn test_collapse_or_back_on_root_collapses_then_exits() {
            let temp = TempDir::new().unwrap();
            let mut s = session_over(&temp, &["alpha"]);

            s.apply_list(ListAction::Preview);

            // The root starts expanded, so the first press folds it up.
            s.apply_preview(PreviewAction::CollapseOrBack);
            assert_eq!(s.mode, Mode::Preview);

            s.apply_preview(PreviewAction::CollapseOrBack);
            assert_eq!(s.mode, Mode::List);
            assert!(s.preview.is_none());
        }

        #[test]
        fn test_collapse_or_back_collapses_expanded_root_with_children() {
            let temp = TempDir::new().unwrap();
            let mut s = session_over(&temp, &["alpha"]);
            fs::create_dir(temp.path().join("alpha/child")).unwrap();

            s.apply_list(ListAction::Preview);
            assert_eq!(s.preview.as_ref().unwrap().flat.len(), 2);

            s.apply_preview(PreviewAction::CollapseOrBack);
            assert_eq!(s.mode, Mode::Preview);
            let pane = s.preview.as_ref().unwrap();
            assert_eq!(pane.flat.len(), 1);
            assert_eq!(pane.cursor, 0);

            s.apply_preview(PreviewAction::CollapseOrBack);
            assert_eq!(s.mode, Mode::List);
            assert!(s.preview.is_none());
        }

        #[test]
        fn test_next_and_prev_folder_follow_the_list() {
            let temp = TempDir::new().unwrap();
            let mut s = session_over(&temp, &["alpha", "beta"]);

            s.apply_list(ListAction::Preview);
            s.apply_preview(PreviewAction::NextFolder);
            assert_eq!(s.cursor, 1);
            assert_eq!(s.mode, Mode::Preview);

            // Clamped at the end of the list.
            s.apply_preview(PreviewAction::NextFolder);
            assert_eq!(s.cursor, 1);

            s.apply_preview(PreviewAction::PrevFolder);
            assert_eq!(s.cursor, 0);
        }

        #[test]
        fn test_preview_cursor_clamps_at_edges() {
            let temp = TempDir::new().unwrap();
            let mut s = session_over(&temp, &["alpha"]);
            fs::write(temp.path().join("alpha/one"), b"x").unwrap();

            s.apply_list(ListAction::Preview);
            s.apply_preview(PreviewAction::MoveUp);
            assert_eq!(s.preview.as_ref().unwrap().cursor, 0);

            s.apply_preview(PreviewAction::MoveDown);
            s.apply_preview(PreviewAction::MoveDown);
            assert_eq!(s.preview.as_ref().unwrap().cursor, 1);
        }
    }
}
