//! Code recipes and their source payload.

use serde::{Deserialize, Serialize};

use super::version::VersionTag;

/// A recipe definition as listed by the studio. Keyed by
/// `(project_key, name)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Source language kind (`"python"`, `"sql_query"`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub project_key: String,
    #[serde(default)]
    pub outputs: RecipeOutputs,
    pub version_tag: VersionTag,
    #[serde(default)]
    pub successors: Vec<String>,
    #[serde(default)]
    pub predecessors: Vec<String>,
}

/// Declared outputs of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecipeOutputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<OutputRoleItems>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputRoleItems {
    #[serde(default)]
    pub items: Vec<OutputRef>,
}

/// A reference to a dataset or managed folder produced by a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRef {
    #[serde(rename = "ref")]
    pub reference: String,
}

/// A recipe together with its textual source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeAndPayload {
    pub recipe: Recipe,
    /// The studio omits the payload for empty recipes; normalised to `""`
    /// at the API boundary.
    #[serde(default)]
    pub payload: String,
}

/// File extension for a recipe source language, or `None` for kinds that
/// are not editable code recipes (visual recipes, joins, ...).
pub fn language_extension(kind: &str) -> Option<&'static str> {
    match kind {
        "python" => Some("py"),
        "r" => Some("r"),
        "shell" => Some("sh"),
        "sql_query" => Some("sql"),
        "sparkr" => Some("r"),
        "pyspark" => Some("py"),
        "spark_sql_query" => Some("sql"),
        "spark_scala" => Some("scala"),
        "hive" => Some("hive"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("python", Some("py"))]
    #[case("pyspark", Some("py"))]
    #[case("sql_query", Some("sql"))]
    #[case("spark_scala", Some("scala"))]
    #[case("sync", None)]
    #[case("grouping", None)]
    fn extension_table(#[case] kind: &str, #[case] expected: Option<&str>) {
        assert_eq!(language_extension(kind), expected);
    }

    #[test]
    fn recipe_parses_with_outputs_absent() {
        let recipe: Recipe = serde_json::from_str(
            r#"{
                "type": "python",
                "name": "compute_orders",
                "projectKey": "SALES",
                "versionTag": {
                    "versionNumber": 1,
                    "lastModifiedBy": {"login": "alice"},
                    "lastModifiedOn": 1000
                }
            }"#,
        )
        .unwrap();
        assert!(recipe.outputs.main.is_none());
        assert!(recipe.successors.is_empty());
    }

    #[test]
    fn payload_defaults_to_empty() {
        let rnp: RecipeAndPayload = serde_json::from_str(
            r#"{
                "recipe": {
                    "type": "sql_query",
                    "name": "agg",
                    "projectKey": "SALES",
                    "outputs": {"main": {"items": [{"ref": "orders_agg"}]}},
                    "versionTag": {
                        "versionNumber": 2,
                        "lastModifiedBy": {"login": "bob"},
                        "lastModifiedOn": 2000
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(rnp.payload, "");
        let main = rnp.recipe.outputs.main.unwrap();
        assert_eq!(main.items[0].reference, "orders_agg");
    }
}
