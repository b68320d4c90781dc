//! Memo repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `memos` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `delete_memo` removes exactly one row inside an immediate transaction;
//!   zero matched rows is reported as `NotFound`, never silently ignored.
//! - `list_memos` applies no sort key: rows come back in store-default
//!   (rowid) order, and callers must not rely on anything stronger than
//!   "contains exactly the persisted set".
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::db::migrations::latest_version;
use crate::model::memo::{Memo, MemoId};
use rusqlite::{params, Connection, Row, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const MEMO_SELECT_SQL: &str = "SELECT uuid, content, record_date FROM memos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for memo persistence and query operations.
///
/// `Db` covers both failed writes and unavailable storage; the readiness
/// variants reject connections that skipped migration.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(MemoId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "memo not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted memo data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for memo CRUD operations.
///
/// `delete_memo` takes `&mut self` because implementations run it inside a
/// write transaction.
pub trait MemoRepository {
    /// Persists one new memo and returns its stable id.
    fn create_memo(&self, memo: &Memo) -> RepoResult<MemoId>;
    /// Replaces the content of an existing memo. `record_date` is untouched.
    fn update_memo_text(&self, id: MemoId, text: &str) -> RepoResult<()>;
    /// Gets one memo by id.
    fn get_memo(&self, id: MemoId) -> RepoResult<Option<Memo>>;
    /// Returns every persisted memo in store-default order.
    fn list_memos(&self) -> RepoResult<Vec<Memo>>;
    /// Hard-deletes exactly one memo inside a scoped write transaction.
    fn delete_memo(&mut self, id: MemoId) -> RepoResult<()>;
}

/// SQLite-backed memo repository.
pub struct SqliteMemoRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteMemoRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl MemoRepository for SqliteMemoRepository<'_> {
    fn create_memo(&self, memo: &Memo) -> RepoResult<MemoId> {
        self.conn.execute(
            "INSERT INTO memos (uuid, content, record_date) VALUES (?1, ?2, ?3);",
            params![memo.id.to_string(), memo.text.as_str(), memo.record_date],
        )?;

        Ok(memo.id)
    }

    fn update_memo_text(&self, id: MemoId, text: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE memos SET content = ?2 WHERE uuid = ?1;",
            params![id.to_string(), text],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn get_memo(&self, id: MemoId) -> RepoResult<Option<Memo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMO_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_memo_row(row)?));
        }

        Ok(None)
    }

    fn list_memos(&self) -> RepoResult<Vec<Memo>> {
        // Store-default order: no ORDER BY on purpose, see module invariants.
        let mut stmt = self.conn.prepare(&format!("{MEMO_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut memos = Vec::new();

        while let Some(row) = rows.next()? {
            memos.push(parse_memo_row(row)?);
        }

        Ok(memos)
    }

    fn delete_memo(&mut self, id: MemoId) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let changed = tx.execute("DELETE FROM memos WHERE uuid = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        tx.commit()?;
        Ok(())
    }
}

fn parse_memo_row(row: &Row<'_>) -> RepoResult<Memo> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in memos.uuid"))
    })?;

    Ok(Memo {
        id,
        text: row.get("content")?,
        record_date: row.get("record_date")?,
    })
}

pub(crate) fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "memos")? {
        return Err(RepoError::MissingRequiredTable("memos"));
    }

    for column in ["uuid", "content", "record_date"] {
        if !table_has_column(conn, "memos", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "memos",
                column,
            });
        }
    }

    Ok(())
}

pub(crate) fn table_exists(conn: &Connection, table: &'static str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(
    conn: &Connection,
    table: &'static str,
    column: &'static str,
) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
