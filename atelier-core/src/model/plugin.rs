//! Plugins and their file trees.
//!
//! Plugin items carry only a `last_modified` timestamp — no version
//! counter and no author attribution, so conflict detection for them is
//! weaker than for the versioned object kinds.

use serde::{Deserialize, Serialize};

/// An installed plugin. Only dev plugins are editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    pub id: String,
    #[serde(default)]
    pub meta: PluginMeta,
    #[serde(default)]
    pub is_dev: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PluginMeta {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// A file or folder inside a plugin, identified by its path string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginItem {
    pub name: String,
    pub path: String,
    /// Epoch milliseconds.
    #[serde(default)]
    pub last_modified: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PluginItem>>,
}

impl PluginItem {
    pub fn is_folder(&self) -> bool {
        self.children.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_items_carry_children() {
        let item: PluginItem = serde_json::from_str(
            r#"{
                "name": "python-lib",
                "path": "python-lib",
                "lastModified": 1000,
                "children": [
                    {"name": "helpers.py", "path": "python-lib/helpers.py", "lastModified": 900}
                ]
            }"#,
        )
        .unwrap();
        assert!(item.is_folder());
        assert!(!item.children.unwrap()[0].is_folder());
    }
}
