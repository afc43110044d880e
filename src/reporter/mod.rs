// file: src/reporter/mod.rs
// version: 1.0.0
// guid: 92111321-a044-4a30-8e30-7f3b30fa8d12

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::time::Instant;

use crate::error::Result;
use crate::steps::{ProgressStep, StepStatus};

/// Severity of a console message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Success,
}

impl LogLevel {
    /// Bracketed tag shown before the message
    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Info => "[INFO]",
            LogLevel::Warn => "[WARN]",
            LogLevel::Error => "[ERROR]",
            LogLevel::Success => "[OK]",
        }
    }

    fn colored_tag(self) -> colored::ColoredString {
        match self {
            LogLevel::Debug => self.tag().bright_black(),
            LogLevel::Info => self.tag().bright_cyan(),
            LogLevel::Warn => self.tag().bright_yellow(),
            LogLevel::Error => self.tag().bright_red(),
            LogLevel::Success => self.tag().bright_green(),
        }
    }
}

/// Console progress reporting for the installation workflow.
///
/// Tracks named steps with timing, prints leveled status lines, and can
/// render a final summary or a JSON snapshot for other tools to consume.
pub struct ProgressReporter {
    /// Expected number of steps for the `(n/total)` prefix; 0 means unknown
    total_steps: usize,

    /// 1-based index of the most recently started step
    current_step: usize,

    /// Every recorded step, in start order
    steps: Vec<ProgressStep>,

    /// Whether level tags get wrapped in ANSI color codes
    use_color: bool,

    /// Monotonic clock for the total elapsed time
    start_time: Instant,
}

impl ProgressReporter {
    /// Create a reporter that colors output when stdout is a terminal
    pub fn new(total_steps: usize) -> Self {
        Self::with_color(total_steps, std::io::stdout().is_terminal())
    }

    /// Create a reporter with an explicit color setting
    pub fn with_color(total_steps: usize, use_color: bool) -> Self {
        Self {
            total_steps,
            current_step: 0,
            steps: Vec::new(),
            use_color,
            start_time: Instant::now(),
        }
    }

    /// Steps recorded so far, in start order
    pub fn steps(&self) -> &[ProgressStep] {
        &self.steps
    }

    /// Seconds elapsed since the reporter was created
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Render one console line without printing it
    pub fn format_line(&self, level: LogLevel, message: &str) -> String {
        if self.use_color {
            format!("{} {}", level.colored_tag(), message)
        } else {
            format!("{} {}", level.tag(), message)
        }
    }

    /// Print a message at the given level
    pub fn log(&self, level: LogLevel, message: &str) {
        println!("{}", self.format_line(level, message));
    }

    /// Print a debug message
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        self.log(LogLevel::Success, message);
    }

    /// Start a new step and announce it. Returns the step's index for the
    /// matching `complete_step` or `fail_step` call.
    pub fn start_step(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> usize {
        let mut step = ProgressStep::new(name, description);
        step.start();
        self.steps.push(step);

        let index = self.steps.len() - 1;
        self.current_step = index + 1;

        let progress = if self.total_steps > 0 {
            format!("({}/{})", self.current_step, self.total_steps)
        } else {
            format!("({})", self.current_step)
        };
        let line = format!("{} {}", progress, self.steps[index].description());
        self.info(&line);

        index
    }

    /// Mark a step as completed and announce it. The announcement uses the
    /// caller's message when given, otherwise the step name with its
    /// measured duration. Returns false when the index is out of range or
    /// the step was not running.
    pub fn complete_step(&mut self, step_index: usize, success_message: Option<&str>) -> bool {
        let line = match self.steps.get_mut(step_index) {
            Some(step) => {
                if !step.complete() {
                    return false;
                }
                match (success_message, step.duration_secs()) {
                    (Some(message), _) => message.to_string(),
                    (None, Some(duration)) => {
                        format!("{} completed in {:.1}s", step.name(), duration)
                    }
                    (None, None) => format!("{} completed", step.name()),
                }
            }
            None => return false,
        };
        self.success(&line);
        true
    }

    /// Mark a step as failed and announce the error. Returns false when the
    /// index is out of range or the step was not running.
    pub fn fail_step(&mut self, step_index: usize, error_message: &str) -> bool {
        let line = match self.steps.get_mut(step_index) {
            Some(step) => {
                if !step.fail(error_message) {
                    return false;
                }
                format!("{} failed: {}", step.name(), error_message)
            }
            None => return false,
        };
        self.error(&line);
        true
    }

    /// Render the final summary block as a string
    pub fn render_summary(&self) -> String {
        let completed = self
            .steps
            .iter()
            .filter(|step| step.status() == StepStatus::Completed)
            .count();
        let failed = self.steps.iter().filter(|step| step.error().is_some()).count();

        let rule = "=".repeat(50);
        let mut lines = vec![
            String::new(),
            rule.clone(),
            "INSTALLATION SUMMARY".to_string(),
            rule.clone(),
            format!("Total time: {:.1}s", self.elapsed_secs()),
            format!("Steps completed: {}/{}", completed, self.steps.len()),
        ];

        if failed > 0 {
            lines.push(format!("Steps failed: {}", failed));
            lines.push(String::new());
            lines.push("Failed steps:".to_string());
            for (i, step) in self.steps.iter().enumerate() {
                if let Some(error) = step.error() {
                    lines.push(format!("  {}. {}: {}", i + 1, step.name(), error));
                }
            }
        } else {
            lines.push("All steps completed successfully!".to_string());
        }

        lines.push(rule);
        lines.join("\n")
    }

    /// Print the final summary block
    pub fn show_summary(&self) {
        println!("{}", self.render_summary());
    }

    /// Capture the current status for integration with other tools
    pub fn status_snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            total_steps: self.steps.len(),
            completed_steps: self
                .steps
                .iter()
                .filter(|step| step.status() == StepStatus::Completed)
                .count(),
            failed_steps: self.steps.iter().filter(|step| step.error().is_some()).count(),
            current_step: self.current_step,
            total_time: self.elapsed_secs(),
            steps: self.steps.iter().map(StepSnapshot::from_step).collect(),
        }
    }

    /// Current status as pretty-printed JSON
    pub fn status_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.status_snapshot())?)
    }
}

/// Machine-readable view of the reporter state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Number of steps recorded so far
    pub total_steps: usize,

    /// Steps that finished successfully
    pub completed_steps: usize,

    /// Steps that recorded an error
    pub failed_steps: usize,

    /// 1-based index of the most recently started step
    pub current_step: usize,

    /// Seconds since the reporter was created
    pub total_time: f64,

    /// Per-step details in start order
    pub steps: Vec<StepSnapshot>,
}

/// Recorded state of one step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepSnapshot {
    /// Step name
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Current state of the step
    pub status: StepStatus,

    /// Start time as Unix epoch seconds
    pub started: Option<f64>,

    /// Completion time as Unix epoch seconds
    pub completed: Option<f64>,

    /// Error message for failed steps
    pub error: Option<String>,

    /// Elapsed seconds between start and completion
    pub duration: Option<f64>,
}

impl StepSnapshot {
    fn from_step(step: &ProgressStep) -> Self {
        Self {
            name: step.name().to_string(),
            description: step.description().to_string(),
            status: step.status(),
            started: step.started_at().map(epoch_secs),
            completed: step.completed_at().map(epoch_secs),
            error: step.error().map(str::to_string),
            duration: step.duration_secs(),
        }
    }
}

fn epoch_secs(timestamp: DateTime<Utc>) -> f64 {
    timestamp.timestamp_millis() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_reporter(total: usize) -> ProgressReporter {
        ProgressReporter::with_color(total, false)
    }

    #[test]
    fn test_format_line_tags() {
        let reporter = plain_reporter(0);
        assert_eq!(reporter.format_line(LogLevel::Debug, "x"), "[DEBUG] x");
        assert_eq!(reporter.format_line(LogLevel::Info, "x"), "[INFO] x");
        assert_eq!(reporter.format_line(LogLevel::Warn, "x"), "[WARN] x");
        assert_eq!(reporter.format_line(LogLevel::Error, "x"), "[ERROR] x");
        assert_eq!(reporter.format_line(LogLevel::Success, "done"), "[OK] done");
    }

    #[test]
    fn test_start_step_returns_sequential_indices() {
        let mut reporter = plain_reporter(3);
        let first = reporter.start_step("partition", "Partitioning disk");
        let second = reporter.start_step("pools", "Creating ZFS pools");
        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(reporter.steps().len(), 2);
        assert_eq!(reporter.steps()[0].status(), StepStatus::Running);
        assert_eq!(reporter.steps()[1].status(), StepStatus::Running);
    }

    #[test]
    fn test_complete_step_single_use() {
        let mut reporter = plain_reporter(0);
        let idx = reporter.start_step("pools", "Creating ZFS pools");
        assert!(reporter.complete_step(idx, None));
        assert_eq!(reporter.steps()[idx].status(), StepStatus::Completed);

        // Already completed, further transitions must be rejected
        assert!(!reporter.complete_step(idx, None));
        assert!(!reporter.fail_step(idx, "too late"));
    }

    #[test]
    fn test_fail_step_records_error() {
        let mut reporter = plain_reporter(0);
        let idx = reporter.start_step("debootstrap", "Running debootstrap");
        assert!(reporter.fail_step(idx, "mirror unreachable"));
        assert_eq!(reporter.steps()[idx].status(), StepStatus::Failed);
        assert_eq!(reporter.steps()[idx].error(), Some("mirror unreachable"));
        assert!(reporter.steps()[idx].completed_at().is_none());
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut reporter = plain_reporter(0);
        assert!(!reporter.complete_step(0, None));
        assert!(!reporter.fail_step(5, "no such step"));
    }

    #[test]
    fn test_summary_lists_failed_steps() {
        let mut reporter = plain_reporter(2);
        let first = reporter.start_step("partition", "Partitioning disk");
        reporter.complete_step(first, None);
        let second = reporter.start_step("pools", "Creating ZFS pools");
        reporter.fail_step(second, "pool exists");

        let summary = reporter.render_summary();
        assert!(summary.contains("INSTALLATION SUMMARY"));
        assert!(summary.contains("Steps completed: 1/2"));
        assert!(summary.contains("Steps failed: 1"));
        assert!(summary.contains("  2. pools: pool exists"));
        assert!(!summary.contains("All steps completed successfully!"));
    }

    #[test]
    fn test_summary_all_completed() {
        let mut reporter = plain_reporter(1);
        let idx = reporter.start_step("teardown", "Cleaning up");
        reporter.complete_step(idx, Some("runtime mountpoints set"));

        let summary = reporter.render_summary();
        assert!(summary.starts_with('\n'));
        assert!(summary.contains(&"=".repeat(50)));
        assert!(summary.contains("Steps completed: 1/1"));
        assert!(summary.contains("All steps completed successfully!"));
    }

    #[test]
    fn test_status_snapshot_counts() {
        let mut reporter = plain_reporter(3);
        let first = reporter.start_step("prereqs", "Installing prerequisites");
        reporter.complete_step(first, None);
        let second = reporter.start_step("partition", "Partitioning disk");
        reporter.fail_step(second, "device busy");
        reporter.start_step("pools", "Creating ZFS pools");

        let snapshot = reporter.status_snapshot();
        assert_eq!(snapshot.total_steps, 3);
        assert_eq!(snapshot.completed_steps, 1);
        assert_eq!(snapshot.failed_steps, 1);
        assert_eq!(snapshot.current_step, 3);
        assert!(snapshot.total_time >= 0.0);
        assert_eq!(snapshot.steps[1].error.as_deref(), Some("device busy"));
        assert!(snapshot.steps[1].completed.is_none());
        assert!(snapshot.steps[2].started.is_some());
    }

    #[test]
    fn test_status_json_shape() {
        let mut reporter = plain_reporter(1);
        let idx = reporter.start_step("chroot", "Configuring system");
        reporter.complete_step(idx, None);

        let json = reporter.status_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_steps"], 1);
        assert_eq!(value["completed_steps"], 1);
        assert_eq!(value["failed_steps"], 0);
        assert_eq!(value["current_step"], 1);
        assert_eq!(value["steps"][0]["name"], "chroot");
        assert_eq!(value["steps"][0]["status"], "completed");
        assert!(value["steps"][0]["duration"].as_f64().unwrap() >= 0.0);
    }
}
