//! Project wikis: taxonomy tree plus markdown articles.

use serde::{Deserialize, Serialize};

use super::version::VersionTag;

/// A project's wiki root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wiki {
    pub project_key: String,
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub home_article_id: String,
    #[serde(default)]
    pub taxonomy: Vec<WikiTaxonomy>,
}

/// Article placement in the wiki tree. Parent/children is a relation,
/// not ownership — deleting a parent does not delete its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiTaxonomy {
    pub id: String,
    #[serde(default)]
    pub children: Vec<WikiTaxonomy>,
}

/// Article metadata, versioned like recipes and webapps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WikiArticleInfo {
    pub project_key: String,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub layout: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub version_tag: VersionTag,
}

/// An article with its markdown payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiArticle {
    pub article: WikiArticleInfo,
    #[serde(default)]
    pub payload: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_nests_recursively() {
        let wiki: Wiki = serde_json::from_str(
            r#"{
                "projectKey": "SALES",
                "name": "Sales wiki",
                "id": "w1",
                "homeArticleId": "a1",
                "taxonomy": [
                    {"id": "a1", "children": [{"id": "a2", "children": []}]},
                    {"id": "a3"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(wiki.taxonomy.len(), 2);
        assert_eq!(wiki.taxonomy[0].children[0].id, "a2");
        assert!(wiki.taxonomy[1].children.is_empty());
    }

    #[test]
    fn article_payload_defaults_to_empty() {
        let article: WikiArticle = serde_json::from_str(
            r#"{
                "article": {
                    "projectKey": "SALES",
                    "id": "a1",
                    "name": "Getting started",
                    "layout": "ARTICLE",
                    "tags": [],
                    "versionTag": {
                        "versionNumber": 1,
                        "lastModifiedBy": {"login": "alice"},
                        "lastModifiedOn": 1000
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(article.payload, "");
    }
}
