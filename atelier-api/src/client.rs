//! HTTP client for the studio's public API.
//!
//! Authentication is HTTP Basic with the API key as the user name and an
//! empty password. Non-2xx responses are mapped to
//! [`ApiError::Http`] with the message extracted from the JSON error
//! body when the server provides one.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use atelier_core::config::InstanceConfig;

use crate::error::ApiError;

/// A configured connection to one studio instance.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl Client {
    /// Build a client from instance configuration. The public API root
    /// (`/public/api`) is appended to the configured URL.
    pub fn from_config(config: &InstanceConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if config.no_verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build()?;
        Ok(Self {
            base_url: format!("{}/public/api", config.url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            http,
        })
    }

    /// Build a client against a verbatim base URL (no API root appended).
    /// Tests point this at a local mock server.
    pub fn for_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http: reqwest::Client::new(),
        }
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint);
        self.http
            .request(method, url)
            .basic_auth(&self.api_key, Some(""))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or(body);
        tracing::debug!(status = status.as_u16(), %message, "studio answered non-2xx");
        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::GET, endpoint)).await?;
        Ok(response.json().await?)
    }

    /// GET returning the parsed body plus one named response header.
    pub async fn get_json_with_header<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        header: &str,
    ) -> Result<(T, Option<String>), ApiError> {
        let response = self.send(self.request(Method::GET, endpoint)).await?;
        let value = response
            .headers()
            .get(header)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Ok((response.json().await?, value))
    }

    pub async fn get_text(&self, endpoint: &str) -> Result<String, ApiError> {
        let response = self.send(self.request(Method::GET, endpoint)).await?;
        Ok(response.text().await?)
    }

    /// GET returning raw bytes and the response content type.
    pub async fn get_bytes(
        &self,
        endpoint: &str,
    ) -> Result<(Vec<u8>, Option<String>), ApiError> {
        let response = self.send(self.request(Method::GET, endpoint)).await?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Ok((response.bytes().await?.to_vec(), content_type))
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.request(Method::POST, endpoint).json(body))
            .await?;
        Ok(response.json().await?)
    }

    /// POST with a JSON body, discarding the response.
    pub async fn post_json_unit<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, endpoint).json(body))
            .await?;
        Ok(())
    }

    /// POST raw text (plugin/library file contents are not JSON).
    pub async fn post_text(&self, endpoint: &str, content: String) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, endpoint).body(content))
            .await?;
        Ok(())
    }

    /// POST with no body.
    pub async fn post_empty(&self, endpoint: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, endpoint)).await?;
        Ok(())
    }

    pub async fn put_json<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<(), ApiError> {
        self.send(self.request(Method::PUT, endpoint).json(body))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, endpoint)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn non_2xx_maps_to_http_error_with_json_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/SALES/recipes/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"message": "No such recipe"})),
            )
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "key");
        let err = client
            .get_json::<serde_json::Value>("/projects/SALES/recipes/missing")
            .await
            .unwrap_err();
        match err {
            ApiError::Http { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "No such recipe");
            }
            other => panic!("expected http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_is_passed_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/boom"))
            .respond_with(ResponseTemplate::new(500).set_body_string("stack trace"))
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "key");
        let err = client.get_json::<serde_json::Value>("/boom").await.unwrap_err();
        match err {
            ApiError::Http { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "stack trace");
            }
            other => panic!("expected http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn requests_carry_basic_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "secret");
        client.get_json::<serde_json::Value>("/ping").await.unwrap();
    }

    #[tokio::test]
    async fn not_found_predicate() {
        let not_found = ApiError::Http {
            status: 404,
            message: String::new(),
        };
        let forbidden = ApiError::Http {
            status: 403,
            message: String::new(),
        };
        assert!(not_found.is_not_found());
        assert!(!forbidden.is_not_found());
    }

    #[test]
    fn config_url_is_normalised_to_the_api_root() {
        let config = InstanceConfig {
            url: "https://studio.local:11200/".to_string(),
            api_key: "k".to_string(),
            no_verify_tls: false,
        };
        let client = Client::from_config(&config).unwrap();
        assert_eq!(client.base_url, "https://studio.local:11200/public/api");
    }
}
