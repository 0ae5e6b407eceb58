//! Entity adapters — one small struct per object kind, plugged into the
//! shared [`RemoteSaver`](crate::saver::RemoteSaver) algorithm.

use std::path::PathBuf;

use async_trait::async_trait;

use atelier_api::{libraries, plugins, recipes, webapps, wiki, ApiError, Client};
use atelier_core::model::{LibraryItem, PluginItem, RecipeAndPayload, WebApp, WikiArticle};

use crate::error::SyncError;
use crate::files::{FileBody, StagedFile};
use crate::saver::{
    deleted_conflict_message, timestamped_conflict_message, versioned_conflict_message,
    EntityAdapter,
};
use crate::stage::StagingCache;

pub struct RecipeAdapter {
    client: Client,
}

impl RecipeAdapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EntityAdapter for RecipeAdapter {
    type Entity = RecipeAndPayload;

    async fn fetch_remote(&self, local: &RecipeAndPayload) -> Result<RecipeAndPayload, ApiError> {
        recipes::fetch(&self.client, &local.recipe.project_key, &local.recipe.name).await
    }

    async fn write_remote(&self, local: &RecipeAndPayload) -> Result<(), ApiError> {
        recipes::save(&self.client, local).await
    }

    fn same_version(&self, local: &RecipeAndPayload, remote: &RecipeAndPayload) -> bool {
        local.recipe.version_tag == remote.recipe.version_tag
    }

    fn conflict_message(&self, remote: Option<&RecipeAndPayload>, now_ms: i64) -> String {
        match remote {
            Some(remote) => {
                versioned_conflict_message("recipe", &remote.recipe.version_tag, now_ms)
            }
            None => deleted_conflict_message("recipe"),
        }
    }

    async fn restage(
        &self,
        remote: &RecipeAndPayload,
        cache: &StagingCache,
    ) -> Result<PathBuf, SyncError> {
        cache.materialize(&StagedFile::from_recipe(remote))
    }
}

pub struct WebAppAdapter {
    client: Client,
}

impl WebAppAdapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EntityAdapter for WebAppAdapter {
    type Entity = WebApp;

    async fn fetch_remote(&self, local: &WebApp) -> Result<WebApp, ApiError> {
        webapps::fetch(&self.client, &local.project_key, &local.id).await
    }

    async fn write_remote(&self, local: &WebApp) -> Result<(), ApiError> {
        webapps::save(&self.client, local).await
    }

    fn same_version(&self, local: &WebApp, remote: &WebApp) -> bool {
        local.version_tag == remote.version_tag
    }

    fn conflict_message(&self, remote: Option<&WebApp>, now_ms: i64) -> String {
        match remote {
            Some(remote) => versioned_conflict_message("webapp", &remote.version_tag, now_ms),
            None => deleted_conflict_message("webapp"),
        }
    }

    /// A webapp stages as several files; discard rewrites all of them.
    async fn restage(&self, remote: &WebApp, cache: &StagingCache) -> Result<PathBuf, SyncError> {
        let mut last = PathBuf::new();
        for file in StagedFile::from_webapp(remote) {
            last = cache.materialize(&file)?;
        }
        Ok(last)
    }
}

pub struct WikiAdapter {
    client: Client,
}

impl WikiAdapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EntityAdapter for WikiAdapter {
    type Entity = WikiArticle;

    async fn fetch_remote(&self, local: &WikiArticle) -> Result<WikiArticle, ApiError> {
        wiki::fetch_article(&self.client, &local.article.project_key, &local.article.id).await
    }

    async fn write_remote(&self, local: &WikiArticle) -> Result<(), ApiError> {
        wiki::save_article(&self.client, local).await
    }

    fn same_version(&self, local: &WikiArticle, remote: &WikiArticle) -> bool {
        local.article.version_tag == remote.article.version_tag
    }

    fn conflict_message(&self, remote: Option<&WikiArticle>, now_ms: i64) -> String {
        match remote {
            Some(remote) => {
                versioned_conflict_message("wiki article", &remote.article.version_tag, now_ms)
            }
            None => deleted_conflict_message("wiki article"),
        }
    }

    async fn restage(
        &self,
        remote: &WikiArticle,
        cache: &StagingCache,
    ) -> Result<PathBuf, SyncError> {
        cache.materialize(&StagedFile::from_wiki_article(remote))
    }
}

/// Plugin files carry the edited text out-of-band: the entity is the
/// item metadata, the text comes from the editor buffer.
pub struct PluginFileAdapter {
    client: Client,
    plugin_id: String,
    edited_text: String,
    fetch_supported: bool,
}

impl PluginFileAdapter {
    /// `fetch_supported` comes from the server version gate
    /// (`supports_safe_save`); old servers get the blind-write path.
    pub fn new(
        client: Client,
        plugin_id: impl Into<String>,
        edited_text: impl Into<String>,
        fetch_supported: bool,
    ) -> Self {
        Self {
            client,
            plugin_id: plugin_id.into(),
            edited_text: edited_text.into(),
            fetch_supported,
        }
    }
}

#[async_trait]
impl EntityAdapter for PluginFileAdapter {
    type Entity = PluginItem;

    fn can_fetch_remote(&self) -> bool {
        self.fetch_supported
    }

    async fn fetch_remote(&self, local: &PluginItem) -> Result<PluginItem, ApiError> {
        plugins::item_details(&self.client, &self.plugin_id, &local.path).await
    }

    async fn write_remote(&self, local: &PluginItem) -> Result<(), ApiError> {
        plugins::save_file(
            &self.client,
            &self.plugin_id,
            &local.path,
            self.edited_text.clone(),
        )
        .await
    }

    fn same_version(&self, local: &PluginItem, remote: &PluginItem) -> bool {
        local.last_modified == remote.last_modified
    }

    fn conflict_message(&self, remote: Option<&PluginItem>, now_ms: i64) -> String {
        match remote {
            Some(remote) => timestamped_conflict_message("content", remote.last_modified, now_ms),
            None => deleted_conflict_message("content"),
        }
    }

    async fn restage(
        &self,
        remote: &PluginItem,
        cache: &StagingCache,
    ) -> Result<PathBuf, SyncError> {
        let content = plugins::file_content(&self.client, &self.plugin_id, &remote.path).await?;
        cache.materialize(&StagedFile::from_plugin(
            &self.plugin_id,
            &remote.path,
            FileBody::Bytes(content.bytes),
        ))
    }
}

/// Library files: same out-of-band text as plugin files, but the fetched
/// item already carries its data, so discard needs no second fetch.
pub struct LibraryFileAdapter {
    client: Client,
    project_key: String,
    edited_text: String,
}

impl LibraryFileAdapter {
    pub fn new(
        client: Client,
        project_key: impl Into<String>,
        edited_text: impl Into<String>,
    ) -> Self {
        Self {
            client,
            project_key: project_key.into(),
            edited_text: edited_text.into(),
        }
    }
}

#[async_trait]
impl EntityAdapter for LibraryFileAdapter {
    type Entity = LibraryItem;

    async fn fetch_remote(&self, local: &LibraryItem) -> Result<LibraryItem, ApiError> {
        libraries::file(&self.client, &self.project_key, &local.path).await
    }

    async fn write_remote(&self, local: &LibraryItem) -> Result<(), ApiError> {
        libraries::save_file(
            &self.client,
            &self.project_key,
            &local.path,
            self.edited_text.clone(),
        )
        .await
    }

    fn same_version(&self, local: &LibraryItem, remote: &LibraryItem) -> bool {
        local.last_modified == remote.last_modified
    }

    fn conflict_message(&self, remote: Option<&LibraryItem>, now_ms: i64) -> String {
        match remote {
            Some(remote) => timestamped_conflict_message("content", remote.last_modified, now_ms),
            None => deleted_conflict_message("content"),
        }
    }

    async fn restage(
        &self,
        remote: &LibraryItem,
        cache: &StagingCache,
    ) -> Result<PathBuf, SyncError> {
        cache.materialize(&StagedFile::from_library(
            &self.project_key,
            &remote.path,
            FileBody::Text(remote.data.clone()),
        ))
    }
}
