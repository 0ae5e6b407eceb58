//! The optimistic-concurrency saver.
//!
//! One generic state machine over five small entity adapters. A save
//! fetches the current remote copy, compares version stamps, and either
//! writes straight through or walks the user through a conflict:
//!
//! ```text
//! save ──► capability off ──────────────► write remote ──► Saved
//!      └─► fetch remote (errors → unknown)
//!            ├─ same version ───────────► write remote ──► Saved
//!            └─ conflict ──► prompt
//!                  ├─ Save anyway ──────► write remote ──► Saved
//!                  ├─ Discard ──────────► restage remote ► DiscardedLocalChanges
//!                  └─ Cancel/dismiss ───► Err(Cancelled)
//! ```
//!
//! Fetch failures during the conflict probe are downgraded to
//! "remote unknown" — never to "no conflict". An unknown remote is
//! always a conflict, reported as deleted.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;

use atelier_api::ApiError;
use atelier_core::elapsed;
use atelier_core::model::VersionTag;

use crate::error::SyncError;
use crate::stage::StagingCache;

/// How a completed save ended. Cancellation is not an outcome — it is
/// the [`SyncError::Cancelled`] failure, so callers keep the document
/// dirty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Local content now lives on the server.
    Saved,
    /// The remote copy was restaged over the local edit; nothing was
    /// written remotely.
    DiscardedLocalChanges,
}

/// The user's answer to a version conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    SaveAnyway,
    Discard,
    Cancel,
}

/// Presented with the conflict message, collects a decision. Dismissal
/// must map to [`ConflictChoice::Cancel`].
#[async_trait]
pub trait ConflictPrompt: Send + Sync {
    async fn resolve(&self, message: &str) -> ConflictChoice;
}

/// The five per-kind capabilities the shared algorithm needs. Adapters
/// stay small: fetch, write, compare, describe, restage.
#[async_trait]
pub trait EntityAdapter: Send + Sync {
    type Entity: Send + Sync;

    /// False for kinds the server cannot cheaply describe (plugin files
    /// on old servers). Decided once at adapter construction; when
    /// false, saves skip the conflict check entirely and accept the
    /// risk of silent overwrite.
    fn can_fetch_remote(&self) -> bool {
        true
    }

    /// Fetch the current remote copy of the same identity.
    async fn fetch_remote(&self, local: &Self::Entity) -> Result<Self::Entity, ApiError>;

    /// Persist the local copy remotely.
    async fn write_remote(&self, local: &Self::Entity) -> Result<(), ApiError>;

    /// Exact version-stamp equality. Never true against a missing stamp.
    fn same_version(&self, local: &Self::Entity, remote: &Self::Entity) -> bool;

    /// Human-readable conflict description; `None` means the remote copy
    /// is unknown or deleted.
    fn conflict_message(&self, remote: Option<&Self::Entity>, now_ms: i64) -> String;

    /// Re-materialize the remote snapshot into the staging cache,
    /// overwriting the local edit.
    async fn restage(
        &self,
        remote: &Self::Entity,
        cache: &StagingCache,
    ) -> Result<PathBuf, SyncError>;
}

/// The shared save algorithm, parameterized by one adapter.
pub struct RemoteSaver<A: EntityAdapter> {
    adapter: A,
}

impl<A: EntityAdapter> RemoteSaver<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    pub async fn save(
        &self,
        local: &A::Entity,
        cache: &StagingCache,
        prompt: &dyn ConflictPrompt,
    ) -> Result<SaveOutcome, SyncError> {
        if !self.adapter.can_fetch_remote() {
            self.adapter.write_remote(local).await?;
            return Ok(SaveOutcome::Saved);
        }

        // The probe must never fail the save: the object may have been
        // deleted remotely. Unknown remote is still treated as a
        // conflict below.
        let remote = match self.adapter.fetch_remote(local).await {
            Ok(remote) => Some(remote),
            Err(err) => {
                tracing::warn!(error = %err, "conflict probe failed; treating remote as unknown");
                None
            }
        };

        if let Some(remote) = &remote {
            if self.adapter.same_version(local, remote) {
                self.adapter.write_remote(local).await?;
                return Ok(SaveOutcome::Saved);
            }
        }

        let message = self
            .adapter
            .conflict_message(remote.as_ref(), Utc::now().timestamp_millis());
        match prompt.resolve(&message).await {
            ConflictChoice::SaveAnyway => {
                self.adapter.write_remote(local).await?;
                Ok(SaveOutcome::Saved)
            }
            ConflictChoice::Discard => match &remote {
                Some(remote) => {
                    self.adapter.restage(remote, cache).await?;
                    Ok(SaveOutcome::DiscardedLocalChanges)
                }
                // Nothing to restore from — fail like a cancel and leave
                // the document dirty.
                None => Err(SyncError::Cancelled),
            },
            ConflictChoice::Cancel => Err(SyncError::Cancelled),
        }
    }
}

/// Conflict text for kinds carrying a full version tag.
pub(crate) fn versioned_conflict_message(
    subject: &str,
    tag: &VersionTag,
    now_ms: i64,
) -> String {
    let elapsed = elapsed::rounded(now_ms - tag.last_modified_on);
    format!(
        "This {subject} is being edited by more than one user.\n\
         It has been modified about {elapsed} ago by {}.\n",
        tag.last_modified_by.login
    )
}

/// Conflict text for kinds stamped with a timestamp only (no author).
pub(crate) fn timestamped_conflict_message(
    subject: &str,
    last_modified_ms: i64,
    now_ms: i64,
) -> String {
    let elapsed = elapsed::rounded(now_ms - last_modified_ms);
    format!(
        "This {subject} is being edited by more than one user.\n\
         It has been modified about {elapsed} ago.\n"
    )
}

/// Conflict text when the remote copy is unknown or deleted.
pub(crate) fn deleted_conflict_message(subject: &str) -> String {
    format!("This {subject} has been deleted on the server.\n")
}
