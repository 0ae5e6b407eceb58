//! Output resolution — which of a recipe's outputs a build should target.

use atelier_core::model::{BuildableKind, BuildableRef, PartitionedElement, Recipe};

use crate::{ApiError, Client};

/// Pick the output a build request should name.
///
/// Walks the declared main outputs, resolving each ref's partitioning
/// metadata. The first partitioned ref settles the choice — all
/// partitioned outputs of one recipe share the same dimensions, so one
/// is enough. When none is partitioned the first declared output wins.
/// A recipe with no outputs resolves to `None`.
pub async fn buildable_for(
    client: &Client,
    recipe: &Recipe,
) -> Result<Option<BuildableRef>, ApiError> {
    let Some(main) = &recipe.outputs.main else {
        return Ok(None);
    };

    let mut first: Option<BuildableRef> = None;
    for item in &main.items {
        let candidate = resolve_ref(client, &recipe.project_key, &item.reference).await?;
        if candidate.is_partitioned() {
            return Ok(Some(candidate));
        }
        if first.is_none() {
            first = Some(candidate);
        }
    }
    Ok(first)
}

/// Resolve one output ref. Refs do not say whether they are datasets or
/// managed folders; a 404 from the dataset endpoint means the ref is a
/// folder, anything else propagates.
async fn resolve_ref(
    client: &Client,
    project_key: &str,
    reference: &str,
) -> Result<BuildableRef, ApiError> {
    let dataset = client
        .get_json::<PartitionedElement>(&format!("/projects/{project_key}/datasets/{reference}"))
        .await;
    match dataset {
        Ok(element) => Ok(BuildableRef {
            reference: reference.to_string(),
            kind: BuildableKind::Dataset,
            partitioning: element.partitioning,
        }),
        Err(err) if err.is_not_found() => {
            let element: PartitionedElement = client
                .get_json(&format!("/projects/{project_key}/managedfolders/{reference}"))
                .await?;
            Ok(BuildableRef {
                reference: reference.to_string(),
                kind: BuildableKind::ManagedFolder,
                partitioning: element.partitioning,
            })
        }
        Err(err) => Err(err),
    }
}
