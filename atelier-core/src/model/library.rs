//! Project library files — shared code living under a project.
//!
//! Like plugin items, library items are stamped with `last_modified`
//! only.

use serde::{Deserialize, Serialize};

/// A file or folder in a project's library, identified by its path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryItem {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub mime_type: String,
    /// File content; empty for folders and for listings fetched without
    /// data.
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub has_data: bool,
    /// Epoch milliseconds.
    #[serde(default)]
    pub last_modified: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<LibraryItem>>,
}

impl LibraryItem {
    pub fn is_folder(&self) -> bool {
        self.children.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_entries_parse_without_data() {
        let item: LibraryItem = serde_json::from_str(
            r#"{"name": "util.py", "path": "python/util.py", "lastModified": 1234}"#,
        )
        .unwrap();
        assert_eq!(item.data, "");
        assert!(!item.has_data);
        assert!(!item.is_folder());
    }
}
