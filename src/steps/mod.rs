// file: src/steps/mod.rs
// version: 1.0.0
// guid: a443f184-d394-4189-925e-3f8f397badbd

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of an installation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Step has been created but not started
    Pending,

    /// Step is in progress
    Running,

    /// Step finished successfully
    Completed,

    /// Step finished with an error
    Failed,
}

/// One named, timed phase of the installation workflow.
///
/// The status is an exclusive state machine: `Pending` to `Running` via
/// [`ProgressStep::start`], then exactly one of [`ProgressStep::complete`]
/// or [`ProgressStep::fail`]. A second finishing call is rejected and
/// leaves the step untouched.
#[derive(Debug, Clone)]
pub struct ProgressStep {
    name: String,
    description: String,
    status: StepStatus,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    error: Option<String>,
}

impl ProgressStep {
    /// Create a new pending step
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            status: StepStatus::Pending,
            started_at: None,
            completed_at: None,
            error: None,
        }
    }

    /// Transition Pending -> Running, recording the start time.
    /// Returns false if the step was already started.
    pub fn start(&mut self) -> bool {
        if self.status != StepStatus::Pending {
            return false;
        }
        self.status = StepStatus::Running;
        self.started_at = Some(Utc::now());
        true
    }

    /// Transition Running -> Completed, recording the completion time.
    /// Returns false if the step is not running.
    pub fn complete(&mut self) -> bool {
        if self.status != StepStatus::Running {
            return false;
        }
        self.status = StepStatus::Completed;
        self.completed_at = Some(Utc::now());
        true
    }

    /// Transition Running -> Failed, recording the error message. The
    /// completion time stays unset. Returns false if the step is not
    /// running.
    pub fn fail(&mut self, error: impl Into<String>) -> bool {
        if self.status != StepStatus::Running {
            return false;
        }
        self.status = StepStatus::Failed;
        self.error = Some(error.into());
        true
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> StepStatus {
        self.status
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Elapsed seconds between start and completion, when both exist
    pub fn duration_secs(&self) -> Option<f64> {
        match (self.started_at, self.completed_at) {
            (Some(started), Some(completed)) => {
                Some((completed - started).num_milliseconds() as f64 / 1000.0)
            }
            _ => None,
        }
    }
}
