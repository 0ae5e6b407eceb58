//! Project library endpoints.

use serde_json::json;

use atelier_core::model::LibraryItem;

use crate::{ApiError, Client};

/// The project library's full content tree.
pub async fn contents(client: &Client, project_key: &str) -> Result<Vec<LibraryItem>, ApiError> {
    client
        .get_json(&format!("/projects/{project_key}/libraries/contents"))
        .await
}

/// Fetch one file item, data included.
pub async fn file(
    client: &Client,
    project_key: &str,
    path: &str,
) -> Result<LibraryItem, ApiError> {
    client
        .get_json(&format!("/projects/{project_key}/libraries/contents/{path}"))
        .await
}

pub async fn save_file(
    client: &Client,
    project_key: &str,
    path: &str,
    content: String,
) -> Result<(), ApiError> {
    client
        .post_text(
            &format!("/projects/{project_key}/libraries/contents/{path}"),
            content,
        )
        .await
}

pub async fn add_folder(client: &Client, project_key: &str, path: &str) -> Result<(), ApiError> {
    client
        .post_empty(&format!("/projects/{project_key}/libraries/folders/{path}"))
        .await
}

pub async fn rename(
    client: &Client,
    project_key: &str,
    path: &str,
    new_name: &str,
) -> Result<(), ApiError> {
    let body = json!({ "oldPath": path, "newName": new_name });
    client
        .post_json_unit(
            &format!("/projects/{project_key}/libraries/contents-actions/rename"),
            &body,
        )
        .await
}

pub async fn relocate(
    client: &Client,
    project_key: &str,
    path: &str,
    new_path: &str,
) -> Result<(), ApiError> {
    let body = json!({ "oldPath": path, "newPath": new_path });
    client
        .post_json_unit(
            &format!("/projects/{project_key}/libraries/contents-actions/move"),
            &body,
        )
        .await
}

pub async fn remove(client: &Client, project_key: &str, path: &str) -> Result<(), ApiError> {
    client
        .delete(&format!("/projects/{project_key}/libraries/contents/{path}"))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path as url_path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn file_fetch_parses_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(url_path("/projects/SALES/libraries/contents/python/util.py"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "util.py",
                "path": "python/util.py",
                "mimeType": "text/x-python",
                "data": "def util(): pass\n",
                "hasData": true,
                "lastModified": 1234
            })))
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "key");
        let item = file(&client, "SALES", "python/util.py").await.unwrap();
        assert!(item.has_data);
        assert_eq!(item.data, "def util(): pass\n");
        assert_eq!(item.last_modified, 1234);
    }

    #[tokio::test]
    async fn save_posts_raw_text_and_content_actions_work() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(url_path("/projects/SALES/libraries/contents/python/util.py"))
            .and(wiremock::matchers::body_string("def util(): return 1\n"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(url_path("/projects/SALES/libraries/contents-actions/rename"))
            .and(wiremock::matchers::body_json(
                json!({"oldPath": "python/util.py", "newName": "helpers.py"}),
            ))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(url_path("/projects/SALES/libraries/folders/python/vendored"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(url_path("/projects/SALES/libraries/contents/python/old.py"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "key");
        save_file(
            &client,
            "SALES",
            "python/util.py",
            "def util(): return 1\n".to_string(),
        )
        .await
        .unwrap();
        rename(&client, "SALES", "python/util.py", "helpers.py")
            .await
            .unwrap();
        add_folder(&client, "SALES", "python/vendored").await.unwrap();
        remove(&client, "SALES", "python/old.py").await.unwrap();
    }
}
