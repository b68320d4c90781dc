//! List screen controller.
//!
//! # Responsibility
//! - Mirror the store into an ordered row cache on every appearance.
//! - Expose explicit row handlers (render/select/delete/add) for a list-view
//!   front end.
//!
//! # Invariants
//! - `Idle -> Loaded` fires on *every* `on_appear`, with a full refetch and
//!   an unconditional cache rebuild; nothing survives across appearances.
//! - The cache and the rendered row count stay in lock-step: `row_count`
//!   changes only through `on_appear` and a successful `delete_row`.
//! - `delete_row` mutates the store first; the cache is touched only after
//!   the store write succeeded, so a failed write leaves both consistent.

use crate::model::memo::Memo;
use crate::repo::memo_repo::{MemoRepository, RepoError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Visibility state of the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Screen not visible; the row cache is meaningless.
    Idle,
    /// Screen visible with a freshly loaded row cache.
    Loaded,
}

/// One rendered row: memo text plus the formatted record date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub text: String,
    pub recorded_at: String,
}

/// Navigation request handed to the hosting front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Push the detail screen in edit mode for this record.
    Detail(Memo),
    /// Push the detail screen in create mode, no record passed.
    Compose,
}

pub type ScreenResult<T> = Result<T, ScreenError>;

/// List screen failure taxonomy.
#[derive(Debug)]
pub enum ScreenError {
    /// Row action against an index the cache does not contain. Guarded as a
    /// defensive invariant check; single-threaded execution should make it
    /// unreachable.
    RowOutOfRange { index: usize, rows: usize },
    /// Storage failure surfaced to the user; never aborts the process.
    Repo(RepoError),
}

impl Display for ScreenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RowOutOfRange { index, rows } => {
                write!(f, "row index {index} out of range for {rows} rows")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ScreenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RowOutOfRange { .. } => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ScreenError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Headless controller for the memo list screen.
pub struct ListScreen<R: MemoRepository> {
    repo: R,
    state: ScreenState,
    rows: Vec<Memo>,
}

impl<R: MemoRepository> ListScreen<R> {
    /// Creates an idle controller; no rows are loaded until `on_appear`.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            state: ScreenState::Idle,
            rows: Vec::new(),
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// Screen-became-visible handler.
    ///
    /// Refetches the full record set and rebuilds the cache unconditionally,
    /// on the first and every later appearance.
    pub fn on_appear(&mut self) -> ScreenResult<()> {
        let memos = self.repo.list_memos()?;
        info!(
            "event=memo_list module=screen status=ok rows={}",
            memos.len()
        );
        self.rows = memos;
        self.state = ScreenState::Loaded;
        Ok(())
    }

    /// Number of rows the front end must render.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Renders row `i`: memo text plus the formatted record date.
    pub fn render_row(&self, index: usize) -> ScreenResult<RowView> {
        let memo = self.row(index)?;
        Ok(RowView {
            text: memo.text.clone(),
            recorded_at: memo
                .recorded_at()
                .format("%Y-%m-%d %H:%M")
                .to_string(),
        })
    }

    /// Row-tapped handler: navigate to the detail screen in edit mode.
    ///
    /// Visual deselection of the row is the front end's concern.
    pub fn select_row(&self, index: usize) -> ScreenResult<Navigation> {
        let memo = self.row(index)?;
        Ok(Navigation::Detail(memo.clone()))
    }

    /// Swipe-to-delete handler.
    ///
    /// Deletes from the store first, then drops the cached row. When the
    /// store write fails the cache is left untouched and the error is
    /// surfaced to the caller.
    pub fn delete_row(&mut self, index: usize) -> ScreenResult<()> {
        let id = self.row(index)?.id;

        if let Err(err) = self.repo.delete_memo(id) {
            warn!("event=memo_delete module=screen status=error id={id} error={err}");
            return Err(err.into());
        }

        self.rows.remove(index);
        info!(
            "event=memo_delete module=screen status=ok id={id} rows={}",
            self.rows.len()
        );
        Ok(())
    }

    /// Add-button handler: navigate to the detail screen in create mode.
    pub fn add_tapped(&self) -> Navigation {
        Navigation::Compose
    }

    fn row(&self, index: usize) -> ScreenResult<&Memo> {
        self.rows.get(index).ok_or(ScreenError::RowOutOfRange {
            index,
            rows: self.rows.len(),
        })
    }
}
