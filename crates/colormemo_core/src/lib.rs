//! Core domain logic for ColorMemo.
//! This crate is the single source of truth for memo and theme invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod screen;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::memo::{Memo, MemoId};
pub use model::theme::{ChromeStyle, Rgb, ThemeColor, ALL_THEMES, BLACK, WHITE};
pub use repo::memo_repo::{MemoRepository, RepoError, RepoResult, SqliteMemoRepository};
pub use repo::settings_repo::{SettingsRepository, SqliteSettingsRepository};
pub use screen::list::{ListScreen, Navigation, RowView, ScreenError, ScreenState};
pub use screen::theme_picker::{NavigationChrome, PickerChoice, PickerState, ThemePickerFlow};
pub use service::memo_service::MemoService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
