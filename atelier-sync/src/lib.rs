//! # atelier-sync
//!
//! The local side of the editing bridge: a transient staging cache that
//! mirrors remote objects as editable files, a session table remembering
//! which staged path belongs to which remote document, and the
//! optimistic-concurrency saver that pushes edits back without silently
//! overwriting someone else's work.

pub mod adapters;
pub mod error;
pub mod files;
pub mod saver;
pub mod session;
pub mod stage;

pub use error::SyncError;
pub use files::{FileBody, StagedFile};
pub use saver::{ConflictChoice, ConflictPrompt, EntityAdapter, RemoteSaver, SaveOutcome};
pub use stage::StagingCache;
