use dirsweep::cli::{AppConfig, Args};
use dirsweep::config::UserConfig;
use dirsweep::delete::{spawn_deletions, DeleteSession, DeleteSummary};
use dirsweep::scan::{scan, NamePattern};
use dirsweep::session::{Mode, Outcome, SelectorSession};
use dirsweep::tui::{
    format_elapsed, handle_list_key, handle_preview_key, handle_prompt_key, render_delete,
    render_prompt, render_selector, PromptOutcome, PromptState,
};
use dirsweep::Result;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{io, process};
use tokio::sync::mpsc;
use tokio::time::timeout;

fn main() {
    // Parse command line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Convert to config
    let config: AppConfig = args.into();

    if let Err(e) = run_app(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// What the interactive phase concluded, reported after terminal restore
enum RunReport {
    Cancelled,
    NoMatches { target: String },
    Swept(DeleteSummary),
}

/// Runs the TUI application with configuration
fn run_app(config: &AppConfig) -> Result<()> {
    // Load user configuration
    let mut user_config = UserConfig::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load user config: {}", e);
        UserConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let remembered_target = user_config.last_target.clone();
    let result = run_interactive(&mut terminal, config, &mut user_config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save outside the alternate screen so a failure warning is readable
    if user_config.last_target != remembered_target {
        if let Err(e) = user_config.save() {
            eprintln!("Warning: Failed to save user config: {}", e);
        }
    }

    // Report after the terminal is back to normal
    match result? {
        RunReport::Cancelled => {}
        RunReport::NoMatches { target } => {
            println!(
                "No folders matching '{}' found under {}",
                target,
                config.directory.display()
            );
        }
        RunReport::Swept(summary) => {
            let total = summary.deleted + summary.errors.len();
            println!(
                "Deleted {}/{} folder(s) in {}",
                summary.deleted,
                total,
                format_elapsed(summary.elapsed)
            );
            for (path, error) in &summary.errors {
                eprintln!("  ✗ {}: {}", path.display(), error);
            }
        }
    }

    Ok(())
}

/// Prompt (if needed), scan, select, delete. Runs entirely inside the
/// alternate screen; anything user-visible is returned as a [`RunReport`].
fn run_interactive<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &AppConfig,
    user_config: &mut UserConfig,
) -> Result<RunReport> {
    let target = match config.target.clone() {
        Some(target) => target,
        None => match run_prompt(terminal, user_config.suggested_target())? {
            Some(target) => target,
            None => return Ok(RunReport::Cancelled),
        },
    };

    // A prompt-supplied glob has not been through Args::validate.
    let pattern = NamePattern::new(&target, config.use_glob)?;

    // Remembered as the next run's prompt placeholder; written to disk by
    // the caller once the terminal is restored.
    user_config.last_target = Some(target.clone());

    let results = scan(&config.directory, &pattern)?;
    if results.is_empty() {
        return Ok(RunReport::NoMatches { target });
    }

    let mut session = SelectorSession::new(results);
    match run_selector(terminal, &mut session, &config.directory)? {
        Outcome::Quit => Ok(RunReport::Cancelled),
        Outcome::Confirmed(paths) => {
            let summary = run_delete(terminal, &paths, &config.directory)?;
            Ok(RunReport::Swept(summary))
        }
    }
}

/// Collects the target name interactively. `None` means the user cancelled.
fn run_prompt<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    placeholder: &str,
) -> Result<Option<String>> {
    let mut prompt = PromptState::new(placeholder);

    loop {
        terminal.draw(|frame| render_prompt(frame, &prompt))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match prompt.apply(handle_prompt_key(key)) {
                    Some(PromptOutcome::Submitted(target)) => return Ok(Some(target)),
                    Some(PromptOutcome::Cancelled) => return Ok(None),
                    None => {}
                }
            }
        }
    }
}

/// Selection loop: list and preview share one session
fn run_selector<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    session: &mut SelectorSession,
    root: &Path,
) -> Result<Outcome> {
    loop {
        terminal.draw(|frame| render_selector(frame, session, root))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match session.mode {
                    Mode::List => session.apply_list(handle_list_key(key)),
                    Mode::Preview => session.apply_preview(handle_preview_key(key)),
                }
            }
        }

        if let Some(outcome) = session.outcome.take() {
            return Ok(outcome);
        }
    }
}

/// Deletion loop: the coordinator re-renders after every worker event and
/// advances the spinner on receive timeouts.
fn run_delete<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    paths: &[PathBuf],
    root: &Path,
) -> Result<DeleteSummary> {
    let runtime = tokio::runtime::Runtime::new()?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = DeleteSession::new(paths);
    // Spawning needs the runtime context.
    runtime.block_on(async { spawn_deletions(paths, &tx) });
    drop(tx);

    while !session.is_complete() {
        terminal.draw(|frame| render_delete(frame, &session, root))?;

        match runtime.block_on(async { timeout(Duration::from_millis(100), rx.recv()).await }) {
            Ok(Some(event)) => session.apply_event(event),
            // All senders are gone; every terminal event has been drained.
            Ok(None) => break,
            Err(_) => session.tick(),
        }
    }

    // Leave the final statuses on screen for one frame before restoring.
    terminal.draw(|frame| render_delete(frame, &session, root))?;

    Ok(session.summary())
}
