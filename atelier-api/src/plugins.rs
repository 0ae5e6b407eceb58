//! Plugin endpoints.
//!
//! Plugin file contents travel as raw bytes, not JSON — images included.

use serde_json::json;

use atelier_core::model::PluginItem;

use crate::{ApiError, Client};

/// Raw file content plus the server-reported content type.
#[derive(Debug, Clone)]
pub struct FileContent {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl FileContent {
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|t| t.starts_with("image"))
    }

    /// Content as UTF-8 text, lossily.
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Fetch metadata (notably `last_modified`) for one item.
pub async fn item_details(
    client: &Client,
    plugin_id: &str,
    path: &str,
) -> Result<PluginItem, ApiError> {
    client
        .get_json(&format!("/plugins/{plugin_id}/details/{path}"))
        .await
}

/// The plugin's full content tree.
pub async fn contents(client: &Client, plugin_id: &str) -> Result<Vec<PluginItem>, ApiError> {
    client.get_json(&format!("/plugins/{plugin_id}/contents")).await
}

pub async fn file_content(
    client: &Client,
    plugin_id: &str,
    path: &str,
) -> Result<FileContent, ApiError> {
    let (bytes, content_type) = client
        .get_bytes(&format!("/plugins/{plugin_id}/contents/{path}"))
        .await?;
    Ok(FileContent {
        bytes,
        content_type,
    })
}

pub async fn save_file(
    client: &Client,
    plugin_id: &str,
    path: &str,
    content: String,
) -> Result<(), ApiError> {
    client
        .post_text(&format!("/plugins/{plugin_id}/contents/{path}"), content)
        .await
}

pub async fn add_folder(client: &Client, plugin_id: &str, path: &str) -> Result<(), ApiError> {
    client
        .post_empty(&format!("/plugins/{plugin_id}/folders/{path}"))
        .await
}

pub async fn rename(
    client: &Client,
    plugin_id: &str,
    path: &str,
    new_name: &str,
) -> Result<(), ApiError> {
    let body = json!({ "oldPath": path, "newName": new_name });
    client
        .post_json_unit(&format!("/plugins/{plugin_id}/contents-actions/rename"), &body)
        .await
}

pub async fn relocate(
    client: &Client,
    plugin_id: &str,
    path: &str,
    new_path: &str,
) -> Result<(), ApiError> {
    let body = json!({ "oldPath": path, "newPath": new_path });
    client
        .post_json_unit(&format!("/plugins/{plugin_id}/contents-actions/move"), &body)
        .await
}

pub async fn remove(client: &Client, plugin_id: &str, path: &str) -> Result<(), ApiError> {
    client
        .delete(&format!("/plugins/{plugin_id}/contents/{path}"))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, method, path as url_path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn file_content_carries_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(url_path("/plugins/geo-tools/contents/resource/icon.png"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(vec![0x89, 0x50, 0x4e, 0x47])
                    .insert_header("content-type", "image/png"),
            )
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "key");
        let content = file_content(&client, "geo-tools", "resource/icon.png")
            .await
            .unwrap();
        assert!(content.is_image());
        assert_eq!(content.bytes.len(), 4);
    }

    #[tokio::test]
    async fn save_posts_raw_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(url_path("/plugins/geo-tools/contents/python-lib/helpers.py"))
            .and(body_string("def helper(): pass\n"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "key");
        save_file(
            &client,
            "geo-tools",
            "python-lib/helpers.py",
            "def helper(): pass\n".to_string(),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn rename_and_move_use_content_actions() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(url_path("/plugins/geo-tools/contents-actions/rename"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(url_path("/plugins/geo-tools/contents-actions/move"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "key");
        rename(&client, "geo-tools", "old.py", "new.py").await.unwrap();
        relocate(&client, "geo-tools", "new.py", "lib/new.py")
            .await
            .unwrap();
    }
}
