use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions available while browsing the match list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    /// Move the cursor up one row
    MoveUp,
    /// Move the cursor down one row
    MoveDown,
    /// Jump to the first row
    Top,
    /// Jump to the last row
    Bottom,
    /// First half of the `gg` chord
    PrefixG,
    /// Toggle selection on the cursor row and advance
    Toggle,
    /// Select every row
    SelectAll,
    /// Clear every selection
    DeselectAll,
    /// Invert all selections
    Invert,
    /// Open the preview for the cursor row
    Preview,
    /// Confirm deletion of the selected rows
    Confirm,
    /// Quit without deleting
    Quit,
    /// No action
    None,
}

/// Actions available inside the folder preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewAction {
    MoveUp,
    MoveDown,
    /// Expand or collapse the directory under the cursor
    ToggleExpand,
    /// Collapse the current directory, or step back to its parent
    CollapseOrBack,
    /// Preview the next folder in the match list
    NextFolder,
    /// Preview the previous folder in the match list
    PrevFolder,
    /// Return to the match list
    Exit,
    /// No action
    None,
}

/// Actions for the target-name prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    Insert(char),
    Backspace,
    Submit,
    Cancel,
    None,
}

/// Maps keyboard events to list actions
pub fn handle_list_key(key: KeyEvent) -> ListAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => ListAction::Quit,
            KeyCode::Char('p') => ListAction::MoveUp,
            KeyCode::Char('n') => ListAction::MoveDown,
            _ => ListAction::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => ListAction::Quit,

        KeyCode::Up | KeyCode::Char('k') => ListAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => ListAction::MoveDown,

        KeyCode::Char('g') => ListAction::PrefixG,
        KeyCode::Home => ListAction::Top,
        KeyCode::Char('G') | KeyCode::End => ListAction::Bottom,

        KeyCode::Char(' ') => ListAction::Toggle,
        KeyCode::Char('a') => ListAction::SelectAll,
        KeyCode::Char('A') => ListAction::DeselectAll,
        KeyCode::Char('i') => ListAction::Invert,

        KeyCode::Char('v') | KeyCode::Char('l') | KeyCode::Tab => ListAction::Preview,
        KeyCode::Enter => ListAction::Confirm,

        _ => ListAction::None,
    }
}

/// Maps keyboard events to preview actions
pub fn handle_preview_key(key: KeyEvent) -> PreviewAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => PreviewAction::Exit,
            _ => PreviewAction::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => PreviewAction::Exit,

        KeyCode::Up | KeyCode::Char('k') => PreviewAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => PreviewAction::MoveDown,

        KeyCode::Enter | KeyCode::Char('l') => PreviewAction::ToggleExpand,
        KeyCode::Char('h') => PreviewAction::CollapseOrBack,

        KeyCode::Char('n') => PreviewAction::NextFolder,
        KeyCode::Char('p') => PreviewAction::PrevFolder,

        _ => PreviewAction::None,
    }
}

/// Maps keyboard events to prompt actions
pub fn handle_prompt_key(key: KeyEvent) -> PromptAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => PromptAction::Cancel,
            _ => PromptAction::None,
        };
    }

    match key.code {
        KeyCode::Enter => PromptAction::Submit,
        KeyCode::Esc => PromptAction::Cancel,
        KeyCode::Backspace => PromptAction::Backspace,
        KeyCode::Char(c) => PromptAction::Insert(c),
        _ => PromptAction::None,
    }
}
