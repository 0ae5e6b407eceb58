//! Wire types for remote studio objects.
//!
//! Every struct here mirrors the JSON shape the studio's public API
//! sends; fields are camelCase on the wire. Identity fields (project
//! key, name, id, path) never change across a save — only the attached
//! version stamp moves.

pub mod job;
pub mod library;
pub mod output;
pub mod plugin;
pub mod recipe;
pub mod version;
pub mod webapp;
pub mod wiki;

pub use job::{ActivityState, BuildOutput, BuildRequest, Job, JobBaseStatus, JobFailure, JobRef};
pub use library::LibraryItem;
pub use output::{BuildableKind, BuildableRef, Dimension, PartitionScheme, PartitionedElement};
pub use plugin::{Plugin, PluginItem, PluginMeta};
pub use recipe::{language_extension, OutputRef, Recipe, RecipeAndPayload};
pub use version::{Modifier, VersionTag};
pub use webapp::{WebApp, WebAppFile, WebAppKind, WebAppParams};
pub use wiki::{Wiki, WikiArticle, WikiArticleInfo, WikiTaxonomy};
