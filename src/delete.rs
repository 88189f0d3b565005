//! Concurrent deletion: one tokio task per selected path, reporting back to
//! the single coordinator loop over an unbounded channel.
//!
//! Every task sends `Started` once it is scheduled and exactly one terminal
//! `Finished`. Failures never abort sibling tasks; they surface as per-path
//! errors in the summary. There is no cancellation or retry.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Deleting,
    Done,
    Error,
}

impl TaskStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Done | TaskStatus::Error)
    }
}

#[derive(Debug)]
pub struct DeletionTask {
    pub path: PathBuf,
    pub status: TaskStatus,
    pub error: Option<String>,
}

/// Progress messages from the worker tasks. `Finished` carries the task's
/// terminal result with the OS error flattened to its display string.
#[derive(Debug)]
pub enum DeleteEvent {
    Started(usize),
    Finished(usize, Result<(), String>),
}

#[derive(Debug)]
pub struct DeleteSummary {
    pub deleted: usize,
    pub errors: Vec<(PathBuf, String)>,
    pub elapsed: Duration,
}

/// Status table driven by [`DeleteEvent`]s. Owned by the render loop; the
/// worker tasks only ever talk to it through the channel.
#[derive(Debug)]
pub struct DeleteSession {
    pub tasks: Vec<DeletionTask>,
    started_at: Instant,
    last_terminal_at: Option<Instant>,
    terminal_count: usize,
    spinner: usize,
}

impl DeleteSession {
    pub fn new(paths: &[PathBuf]) -> Self {
        DeleteSession {
            tasks: paths
                .iter()
                .map(|path| DeletionTask {
                    path: path.clone(),
                    status: TaskStatus::Pending,
                    error: None,
                })
                .collect(),
            started_at: Instant::now(),
            last_terminal_at: None,
            terminal_count: 0,
            spinner: 0,
        }
    }

    pub fn apply_event(&mut self, event: DeleteEvent) {
        match event {
            DeleteEvent::Started(index) => {
                let task = &mut self.tasks[index];
                if !task.status.is_terminal() {
                    task.status = TaskStatus::Deleting;
                }
            }
            DeleteEvent::Finished(index, result) => {
                let task = &mut self.tasks[index];
                if task.status.is_terminal() {
                    return;
                }
                match result {
                    Ok(()) => task.status = TaskStatus::Done,
                    Err(message) => {
                        task.status = TaskStatus::Error;
                        task.error = Some(message);
                    }
                }
                self.terminal_count += 1;
                self.last_terminal_at = Some(Instant::now());
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.terminal_count == self.tasks.len()
    }

    /// Advances the in-flight spinner by one frame.
    pub fn tick(&mut self) {
        self.spinner = (self.spinner + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner]
    }

    /// Elapsed runs from session start to the last terminal report, so a slow
    /// final render does not inflate it.
    pub fn summary(&self) -> DeleteSummary {
        let deleted = self
            .tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Done)
            .count();
        let errors = self
            .tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Error)
            .map(|task| {
                (
                    task.path.clone(),
                    task.error.clone().unwrap_or_else(|| "unknown error".into()),
                )
            })
            .collect();
        let end = self.last_terminal_at.unwrap_or(self.started_at);
        DeleteSummary {
            deleted,
            errors,
            elapsed: end.duration_since(self.started_at),
        }
    }
}

/// Spawns one deletion task per path. `fs::remove_dir_all` blocks, so it runs
/// on the blocking pool while the coordinator keeps rendering.
pub fn spawn_deletions(paths: &[PathBuf], tx: &UnboundedSender<DeleteEvent>) {
    for (index, path) in paths.iter().enumerate() {
        let tx = tx.clone();
        let path = path.clone();
        tokio::spawn(async move {
            // Send failures mean the coordinator is gone; nothing to do.
            let _ = tx.send(DeleteEvent::Started(index));

            let outcome = match tokio::task::spawn_blocking(move || fs::remove_dir_all(&path)).await
            {
                Ok(Ok(())) => Ok(()),
                Ok(Err(err)) => Err(err.to_string()),
                Err(join_err) => Err(join_err.to_string()),
            };

            let _ = tx.send(DeleteEvent::Finished(index, outcome));
        });
    }
}
