//! Webapp endpoints.

use serde::Deserialize;

use atelier_core::model::{WebApp, WebAppKind};

use crate::{ApiError, Client};

/// Listing entry — the full params come from [`fetch`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebAppSummary {
    pub project_key: String,
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WebAppKind,
}

pub async fn list(client: &Client, project_key: &str) -> Result<Vec<WebAppSummary>, ApiError> {
    client
        .get_json(&format!("/projects/{project_key}/webapps/"))
        .await
}

pub async fn fetch(client: &Client, project_key: &str, id: &str) -> Result<WebApp, ApiError> {
    client
        .get_json(&format!("/projects/{project_key}/webapps/{id}/"))
        .await
}

pub async fn save(client: &Client, webapp: &WebApp) -> Result<(), ApiError> {
    let endpoint = format!("/projects/{}/webapps/{}/", webapp.project_key, webapp.id);
    client.put_json(&endpoint, webapp).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn webapp_json() -> serde_json::Value {
        json!({
            "projectKey": "SALES",
            "id": "wa1",
            "name": "dashboard",
            "type": "SHINY",
            "params": {"ui": "ui <- fluidPage()", "server": "server <- {}"},
            "versionTag": {
                "versionNumber": 4,
                "lastModifiedBy": {"login": "dana"},
                "lastModifiedOn": 4000
            }
        })
    }

    #[tokio::test]
    async fn fetch_selects_the_shiny_params_variant() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/SALES/webapps/wa1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(webapp_json()))
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "key");
        let webapp = fetch(&client, "SALES", "wa1").await.unwrap();
        assert_eq!(webapp.kind, WebAppKind::Shiny);
        assert!(matches!(
            webapp.params,
            atelier_core::model::WebAppParams::Shiny { .. }
        ));
    }

    #[tokio::test]
    async fn save_round_trips_the_wire_shape() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/projects/SALES/webapps/wa1/"))
            .and(body_json(webapp_json()))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "key");
        let webapp: WebApp = serde_json::from_value(webapp_json()).unwrap();
        save(&client, &webapp).await.unwrap();
    }
}
