//! The external firmware build tool.
//!
//! The driver only ever asks for two things per project: a clean, and a build
//! for one target. Whatever the tool does with that is opaque to us.

mod sapphiremake;

pub use sapphiremake::Sapphiremake;

use serde::Serialize;
use std::fmt;

/// Outcome of one tool invocation. Recorded, never used to stop a phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ToolStatus {
    Success,
    /// Exited unsuccessfully. `code` is `None` when killed by a signal.
    Failed { code: Option<i32> },
    /// The process could not be started at all (e.g. not on PATH).
    NotRun { reason: String },
}

impl ToolStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ToolStatus::Success)
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolStatus::Success => write!(f, "ok"),
            ToolStatus::Failed { code: Some(code) } => write!(f, "exit status {code}"),
            ToolStatus::Failed { code: None } => write!(f, "terminated by signal"),
            ToolStatus::NotRun { reason } => write!(f, "not run: {reason}"),
        }
    }
}

pub trait BuildTool {
    /// Ask the tool to clean `project`'s outputs.
    fn request_clean(&mut self, project: &str) -> ToolStatus;

    /// Ask the tool to build `project` for `target`.
    fn request_build(&mut self, project: &str, target: &str) -> ToolStatus;
}

impl<T: BuildTool + ?Sized> BuildTool for &mut T {
    fn request_clean(&mut self, project: &str) -> ToolStatus {
        (**self).request_clean(project)
    }

    fn request_build(&mut self, project: &str, target: &str) -> ToolStatus {
        (**self).request_build(project, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        assert_eq!(ToolStatus::Success.to_string(), "ok");
        assert_eq!(
            ToolStatus::Failed { code: Some(2) }.to_string(),
            "exit status 2"
        );
        assert_eq!(
            ToolStatus::NotRun {
                reason: "No such file or directory".into()
            }
            .to_string(),
            "not run: No such file or directory"
        );
    }

    #[test]
    fn status_json_shape() {
        let json = serde_json::to_value(ToolStatus::Failed { code: Some(1) }).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "failed", "code": 1 }));
    }
}
