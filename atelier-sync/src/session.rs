//! Session table — which staged path belongs to which remote document.
//!
//! Persists a `SessionFile` JSON document at `~/.atelier/session.json`.
//! Lives outside the staging root on purpose: the staging tree itself
//! stays a pure transient cache with no index file, safe to delete
//! whenever no document is open. Writes use the same atomic `.tmp` +
//! rename pattern as the config.
//!
//! Each entry keeps the entity as fetched at open/save time — identity
//! plus the version stamp the saver compares against. The kind is
//! decided once, at the boundary that opened the document.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atelier_core::model::{LibraryItem, PluginItem, Recipe, WebApp, WikiArticleInfo};

use crate::error::{io_err, SyncError};

/// An open document, tagged by object kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpenDocument {
    Recipe {
        recipe: Recipe,
    },
    WebApp {
        webapp: WebApp,
        /// Which of the webapp's staged files this path holds.
        file: String,
    },
    WikiArticle {
        article: WikiArticleInfo,
    },
    PluginFile {
        plugin_id: String,
        item: PluginItem,
    },
    LibraryFile {
        project_key: String,
        item: LibraryItem,
    },
}

/// Staged absolute path (stringified) → open document.
pub type DocumentTable = HashMap<String, OpenDocument>;

/// On-disk session payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionFile {
    pub opened_at: DateTime<Utc>,
    #[serde(default)]
    pub documents: DocumentTable,
    /// Partition pinned per recipe (`<project>/<recipe>` keys), reused
    /// by later runs instead of prompting again.
    #[serde(default)]
    pub pinned_partitions: HashMap<String, String>,
    /// Last submitted job id per recipe, for abort.
    #[serde(default)]
    pub jobs: HashMap<String, String>,
}

impl SessionFile {
    pub fn empty() -> Self {
        Self {
            opened_at: Utc::now(),
            documents: HashMap::new(),
            pinned_partitions: HashMap::new(),
            jobs: HashMap::new(),
        }
    }

    pub fn document_at(&self, path: &Path) -> Result<&OpenDocument, SyncError> {
        self.documents
            .get(&path.to_string_lossy().to_string())
            .ok_or_else(|| SyncError::NotOpen {
                path: path.to_path_buf(),
            })
    }

    pub fn record(&mut self, path: &Path, document: OpenDocument) {
        self.documents
            .insert(path.to_string_lossy().to_string(), document);
    }

    pub fn forget(&mut self, path: &Path) {
        self.documents.remove(&path.to_string_lossy().to_string());
    }
}

/// Key for the per-recipe maps.
pub fn recipe_key(project_key: &str, recipe_name: &str) -> String {
    format!("{project_key}/{recipe_name}")
}

/// `<home>/.atelier/session.json` — pure, no I/O.
pub fn session_path_at(home: &Path) -> PathBuf {
    home.join(".atelier").join("session.json")
}

/// Load the session table. Returns an empty table if the file does not
/// yet exist.
pub fn load_at(home: &Path) -> Result<SessionFile, SyncError> {
    let path = session_path_at(home);
    if !path.exists() {
        return Ok(SessionFile::empty());
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save the session table atomically (`.tmp` + rename).
pub fn save_at(home: &Path, session: &SessionFile) -> Result<(), SyncError> {
    let path = session_path_at(home);
    let Some(dir) = path.parent() else {
        return Err(io_err(path, std::io::Error::other("invalid session path")));
    };
    std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;

    let json = serde_json::to_string_pretty(session)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &json).map_err(|e| io_err(&tmp, e))?;
    std::fs::rename(&tmp, &path).map_err(|e| io_err(&path, e))?;
    Ok(())
}

/// Delete the session file, tolerating absence. Runs at teardown
/// alongside the cache purge.
pub fn clear_at(home: &Path) -> Result<(), SyncError> {
    let path = session_path_at(home);
    match std::fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(io_err(&path, err)),
    }
}
