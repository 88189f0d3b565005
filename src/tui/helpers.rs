//! Small pure helpers shared by the render functions

use std::path::Path;
use std::time::Duration;

/// Minimum number of visible rows, even in tiny terminals.
const MIN_VISIBLE_ROWS: usize = 10;

/// Computes the `[start, end)` window of a list that keeps `cursor` visible.
///
/// The window only scrolls when the cursor would leave it, so short lists and
/// cursors near the top render from index 0.
pub fn scroll_window(cursor: usize, len: usize, area_height: usize) -> (usize, usize) {
    let visible = area_height.max(MIN_VISIBLE_ROWS);
    let start = if cursor >= visible {
        cursor + 1 - visible
    } else {
        0
    };
    let end = (start + visible).min(len);
    (start, end)
}

/// Formats an elapsed duration the way the final summary prints it.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", elapsed.as_millis())
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{}m{:02}s", elapsed.as_secs() / 60, elapsed.as_secs() % 60)
    }
}

/// Path relative to the scan root where possible, absolute otherwise.
pub fn display_path(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    mod scroll_window_tests {
        use super::*;

        #[test]
        fn test_short_list_shows_everything() {
            assert_eq!(scroll_window(0, 3, 20), (0, 3));
            assert_eq!(scroll_window(2, 3, 20), (0, 3));
        }

        #[test]
        fn test_cursor_near_top_does_not_scroll() {
            assert_eq!(scroll_window(0, 100, 20), (0, 20));
            assert_eq!(scroll_window(19, 100, 20), (0, 20));
        }

        #[test]
        fn test_cursor_past_window_scrolls_just_enough() {
            assert_eq!(scroll_window(20, 100, 20), (1, 21));
            assert_eq!(scroll_window(99, 100, 20), (80, 100));
        }

        #[test]
        fn test_tiny_area_is_clamped_to_minimum() {
            assert_eq!(scroll_window(0, 100, 3), (0, 10));
            assert_eq!(scroll_window(10, 100, 3), (1, 11));
        }

        #[test]
        fn test_empty_list() {
            assert_eq!(scroll_window(0, 0, 20), (0, 0));
        }
    }

    mod format_elapsed_tests {
        use super::*;

        #[test]
        fn test_sub_second() {
            assert_eq!(format_elapsed(Duration::from_millis(250)), "250ms");
        }

        #[test]
        fn test_seconds() {
            assert_eq!(format_elapsed(Duration::from_millis(2500)), "2.5s");
        }

        #[test]
        fn test_minutes() {
            assert_eq!(format_elapsed(Duration::from_secs(75)), "1m15s");
        }
    }

    mod display_path_tests {
        use super::*;

        #[test]
        fn test_path_under_root_is_relative() {
            let root = PathBuf::from("/home/me/projects");
            let path = root.join("app/node_modules");
            assert_eq!(display_path(&path, &root), "app/node_modules");
        }

        #[test]
        fn test_path_outside_root_stays_absolute() {
            let root = PathBuf::from("/home/me/projects");
            let path = PathBuf::from("/var/cache");
            assert_eq!(display_path(&path, &root), "/var/cache");
        }

        #[test]
        fn test_root_itself_is_shown_in_full() {
            let root = PathBuf::from("/home/me/node_modules");
            assert_eq!(display_path(&root, &root), "/home/me/node_modules");
        }
    }
}
