//! Build jobs: status wire types and the build request body.

use serde::{Deserialize, Serialize};

use super::output::BuildableKind;

/// Remote activity state of a job.
///
/// Anything outside the four active states is terminal, including
/// states this client does not know about yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityState {
    NotStarted,
    Waiting,
    Running,
    Done,
    Failed,
    Aborted,
    Skipped,
    ComputingDeps,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ActivityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ActivityState::NotStarted => "NOT_STARTED",
            ActivityState::Waiting => "WAITING",
            ActivityState::Running => "RUNNING",
            ActivityState::Done => "DONE",
            ActivityState::Failed => "FAILED",
            ActivityState::Aborted => "ABORTED",
            ActivityState::Skipped => "SKIPPED",
            ActivityState::ComputingDeps => "COMPUTING_DEPS",
            ActivityState::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

impl ActivityState {
    /// True while the job can still make progress; polling continues
    /// only for these.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ActivityState::NotStarted
                | ActivityState::Waiting
                | ActivityState::Running
                | ActivityState::ComputingDeps
        )
    }
}

/// A job as returned by the status endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub base_status: JobBaseStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobBaseStatus {
    pub def: JobRef,
    pub state: ActivityState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unexpected_failure: Option<JobFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRef {
    pub id: String,
}

/// Structured error attached to failed jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFailure {
    #[serde(default)]
    pub error_type: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub detailed_message: String,
    #[serde(default, rename = "stackTraceStr")]
    pub stack_trace: String,
}

impl Job {
    pub fn id(&self) -> &str {
        &self.base_status.def.id
    }

    pub fn state(&self) -> ActivityState {
        self.base_status.state
    }
}

/// Body POSTed to start a build.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub outputs: Vec<BuildOutput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildOutput {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BuildableKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
}

impl BuildRequest {
    /// A non-recursive forced build of a single output.
    pub fn forced_build(
        reference: &str,
        kind: BuildableKind,
        partition: Option<String>,
    ) -> Self {
        Self {
            kind: "NON_RECURSIVE_FORCED_BUILD".to_string(),
            outputs: vec![BuildOutput {
                id: reference.to_string(),
                kind,
                partition,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ActivityState::NotStarted, true)]
    #[case(ActivityState::Waiting, true)]
    #[case(ActivityState::Running, true)]
    #[case(ActivityState::ComputingDeps, true)]
    #[case(ActivityState::Done, false)]
    #[case(ActivityState::Failed, false)]
    #[case(ActivityState::Aborted, false)]
    #[case(ActivityState::Skipped, false)]
    #[case(ActivityState::Unknown, false)]
    fn active_set(#[case] state: ActivityState, #[case] active: bool) {
        assert_eq!(state.is_active(), active);
    }

    #[test]
    fn unknown_states_parse_as_terminal() {
        let state: ActivityState = serde_json::from_str(r#""SOME_FUTURE_STATE""#).unwrap();
        assert_eq!(state, ActivityState::Unknown);
        assert!(!state.is_active());
    }

    #[test]
    fn job_parses_with_failure_details() {
        let job: Job = serde_json::from_str(
            r#"{
                "baseStatus": {
                    "def": {"id": "build_orders_2024"},
                    "state": "FAILED",
                    "unexpectedFailure": {
                        "errorType": "ProcessDied",
                        "message": "python process died",
                        "detailedMessage": "exit code 137",
                        "stackTraceStr": "Traceback..."
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(job.id(), "build_orders_2024");
        assert_eq!(job.state(), ActivityState::Failed);
        let failure = job.base_status.unexpected_failure.unwrap();
        assert_eq!(failure.error_type, "ProcessDied");
        assert_eq!(failure.stack_trace, "Traceback...");
    }

    #[test]
    fn forced_build_body_shape() {
        let request = BuildRequest::forced_build(
            "orders",
            BuildableKind::Dataset,
            Some("FR|2024-01".to_string()),
        );
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["type"], "NON_RECURSIVE_FORCED_BUILD");
        assert_eq!(body["outputs"][0]["id"], "orders");
        assert_eq!(body["outputs"][0]["type"], "DATASET");
        assert_eq!(body["outputs"][0]["partition"], "FR|2024-01");

        let no_partition =
            BuildRequest::forced_build("orders", BuildableKind::Dataset, None);
        let body = serde_json::to_value(&no_partition).unwrap();
        assert!(body["outputs"][0].get("partition").is_none());
    }
}
