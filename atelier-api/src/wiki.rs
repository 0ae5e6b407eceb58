//! Wiki endpoints.

use serde_json::json;

use atelier_core::model::{Wiki, WikiArticle};

use crate::{ApiError, Client};

pub async fn fetch_wiki(client: &Client, project_key: &str) -> Result<Wiki, ApiError> {
    client
        .get_json(&format!("/projects/{project_key}/wiki/"))
        .await
}

pub async fn fetch_article(
    client: &Client,
    project_key: &str,
    article_id: &str,
) -> Result<WikiArticle, ApiError> {
    client
        .get_json(&format!("/projects/{project_key}/wiki/{article_id}"))
        .await
}

pub async fn save_article(client: &Client, article: &WikiArticle) -> Result<(), ApiError> {
    let endpoint = format!(
        "/projects/{}/wiki/{}",
        article.article.project_key, article.article.id
    );
    client.put_json(&endpoint, article).await
}

/// Create an article, optionally under a parent in the taxonomy.
pub async fn create_article(
    client: &Client,
    project_key: &str,
    name: &str,
    parent_id: Option<&str>,
) -> Result<WikiArticle, ApiError> {
    let mut body = json!({ "projectKey": project_key, "name": name });
    if let Some(parent) = parent_id {
        body["parent"] = json!(parent);
    }
    client
        .post_json(&format!("/projects/{project_key}/wiki/"), &body)
        .await
}

pub async fn delete_article(
    client: &Client,
    project_key: &str,
    article_id: &str,
) -> Result<(), ApiError> {
    client
        .delete(&format!("/projects/{project_key}/wiki/{article_id}"))
        .await
}
