//! Version stamps.

use serde::{Deserialize, Serialize};

/// The user recorded on a version stamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub login: String,
}

/// Freshness marker carried by recipes, webapps and wiki articles.
///
/// Two stamps denote the same version only when every field matches;
/// the server bumps `version_number` monotonically on each write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionTag {
    pub version_number: i64,
    pub last_modified_by: Modifier,
    /// Epoch milliseconds.
    pub last_modified_on: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(version: i64, login: &str, at: i64) -> VersionTag {
        VersionTag {
            version_number: version,
            last_modified_by: Modifier {
                login: login.to_string(),
            },
            last_modified_on: at,
        }
    }

    #[test]
    fn equality_requires_every_field() {
        let base = tag(3, "alice", 1_650_000_000_000);
        assert_eq!(base, tag(3, "alice", 1_650_000_000_000));
        assert_ne!(base, tag(4, "alice", 1_650_000_000_000));
        assert_ne!(base, tag(3, "bob", 1_650_000_000_000));
        assert_ne!(base, tag(3, "alice", 1_650_000_099_000));
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let parsed: VersionTag = serde_json::from_str(
            r#"{"versionNumber":7,"lastModifiedBy":{"login":"carol"},"lastModifiedOn":1000}"#,
        )
        .unwrap();
        assert_eq!(parsed, tag(7, "carol", 1000));

        let rendered = serde_json::to_string(&parsed).unwrap();
        assert!(rendered.contains("versionNumber"));
        assert!(rendered.contains("lastModifiedOn"));
    }
}
