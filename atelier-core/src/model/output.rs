//! Buildable outputs — datasets and managed folders — and their
//! partitioning metadata.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildableKind {
    Dataset,
    ManagedFolder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PartitionScheme {
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
}

/// The slice of a dataset/folder definition the output resolver needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct PartitionedElement {
    #[serde(default)]
    pub partitioning: Option<PartitionScheme>,
}

/// A resolved buildable output of a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildableRef {
    pub reference: String,
    pub kind: BuildableKind,
    pub partitioning: Option<PartitionScheme>,
}

impl BuildableRef {
    pub fn is_partitioned(&self) -> bool {
        self.partitioning
            .as_ref()
            .is_some_and(|scheme| !scheme.dimensions.is_empty())
    }

    /// Dimension names, in declaration order.
    pub fn dimension_names(&self) -> Vec<&str> {
        self.partitioning
            .as_ref()
            .map(|scheme| {
                scheme
                    .dimensions
                    .iter()
                    .map(|dim| dim.name.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }
}
