//! Settings repository: persisted theme selection.
//!
//! # Responsibility
//! - Own the process-wide "current theme" durable state.
//!
//! # Invariants
//! - The stored value is always a catalog name accepted by
//!   `ThemeColor::from_name`; anything else is rejected as invalid data.
//! - Only the theme picker flow writes this setting.

use crate::model::theme::ThemeColor;
use crate::repo::memo_repo::{table_exists, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

const THEME_KEY: &str = "theme_color";

/// Repository interface for durable settings.
pub trait SettingsRepository {
    /// Loads the persisted theme choice, if any was ever saved.
    fn load_theme(&self) -> RepoResult<Option<ThemeColor>>;
    /// Persists the theme choice, replacing any previous value.
    fn save_theme(&self, theme: ThemeColor) -> RepoResult<()>;
}

/// SQLite-backed settings repository over the `settings` table.
pub struct SqliteSettingsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSettingsRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        if !table_exists(conn, "settings")? {
            return Err(RepoError::MissingRequiredTable("settings"));
        }
        Ok(Self { conn })
    }
}

impl SettingsRepository for SqliteSettingsRepository<'_> {
    fn load_theme(&self) -> RepoResult<Option<ThemeColor>> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1;",
                [THEME_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match stored {
            None => Ok(None),
            Some(name) => ThemeColor::from_name(&name).map(Some).ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "unknown theme name `{name}` in settings.{THEME_KEY}"
                ))
            }),
        }
    }

    fn save_theme(&self, theme: ThemeColor) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![THEME_KEY, theme.name()],
        )?;
        Ok(())
    }
}
