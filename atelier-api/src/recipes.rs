//! Recipe endpoints.

use atelier_core::model::{language_extension, Recipe, RecipeAndPayload};

use crate::{ApiError, Client};

/// List the project's code recipes — recipes whose language kind has a
/// known file extension. Visual recipes are filtered out.
pub async fn list_code_recipes(
    client: &Client,
    project_key: &str,
) -> Result<Vec<Recipe>, ApiError> {
    let recipes: Vec<Recipe> = client
        .get_json(&format!("/projects/{project_key}/recipes/"))
        .await?;
    Ok(recipes
        .into_iter()
        .filter(|recipe| language_extension(&recipe.kind).is_some())
        .collect())
}

/// Fetch a recipe with its source payload.
pub async fn fetch(
    client: &Client,
    project_key: &str,
    name: &str,
) -> Result<RecipeAndPayload, ApiError> {
    client
        .get_json(&format!("/projects/{project_key}/recipes/{name}"))
        .await
}

/// Persist a recipe and its payload.
pub async fn save(client: &Client, rnp: &RecipeAndPayload) -> Result<(), ApiError> {
    let endpoint = format!(
        "/projects/{}/recipes/{}",
        rnp.recipe.project_key, rnp.recipe.name
    );
    client.put_json(&endpoint, rnp).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn recipe_json(name: &str, kind: &str) -> serde_json::Value {
        json!({
            "type": kind,
            "name": name,
            "projectKey": "SALES",
            "versionTag": {
                "versionNumber": 1,
                "lastModifiedBy": {"login": "alice"},
                "lastModifiedOn": 1000
            }
        })
    }

    #[tokio::test]
    async fn listing_keeps_only_code_recipes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/SALES/recipes/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                recipe_json("clean", "python"),
                recipe_json("join_orders", "join"),
                recipe_json("agg", "sql_query"),
            ])))
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "key");
        let recipes = list_code_recipes(&client, "SALES").await.unwrap();
        let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["clean", "agg"]);
    }

    #[tokio::test]
    async fn fetch_normalises_missing_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/SALES/recipes/clean"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"recipe": recipe_json("clean", "python")})),
            )
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "key");
        let rnp = fetch(&client, "SALES", "clean").await.unwrap();
        assert_eq!(rnp.payload, "");
    }

    #[tokio::test]
    async fn save_puts_the_full_object() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/projects/SALES/recipes/clean"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::for_base_url(server.uri(), "key");
        let rnp: RecipeAndPayload = serde_json::from_value(json!({
            "recipe": recipe_json("clean", "python"),
            "payload": "print('hi')"
        }))
        .unwrap();
        save(&client, &rnp).await.unwrap();
    }
}
