//! Memo use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for memo creation and editing.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - `save_memo` carries the detail-screen edit contract: content only,
//!   the creation timestamp is never refreshed.

use crate::model::memo::{Memo, MemoId};
use crate::repo::memo_repo::{MemoRepository, RepoResult};
use log::info;

/// Use-case service wrapper for memo operations.
pub struct MemoService<R: MemoRepository> {
    repo: R,
}

impl<R: MemoRepository> MemoService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and persists a new memo from raw text.
    ///
    /// # Contract
    /// - Generates the stable id and creation timestamp.
    /// - Returns the persisted memo so callers can navigate to it directly.
    pub fn create_memo(&self, text: impl Into<String>) -> RepoResult<Memo> {
        let memo = Memo::new(text);
        self.repo.create_memo(&memo)?;
        info!("event=memo_create module=service status=ok id={}", memo.id);
        Ok(memo)
    }

    /// Persists an edit coming back from the detail screen.
    pub fn save_memo(&self, id: MemoId, text: &str) -> RepoResult<()> {
        self.repo.update_memo_text(id, text)?;
        info!("event=memo_save module=service status=ok id={id}");
        Ok(())
    }

    /// Gets one memo by stable id.
    pub fn get_memo(&self, id: MemoId) -> RepoResult<Option<Memo>> {
        self.repo.get_memo(id)
    }

    /// Lists every persisted memo in store-default order.
    pub fn list_memos(&self) -> RepoResult<Vec<Memo>> {
        self.repo.list_memos()
    }

    /// Deletes one memo by stable id.
    pub fn delete_memo(&mut self, id: MemoId) -> RepoResult<()> {
        self.repo.delete_memo(id)?;
        info!("event=memo_delete module=service status=ok id={id}");
        Ok(())
    }
}
