use crate::tool::ToolStatus;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub project: String,
    #[serde(flatten)]
    pub status: ToolStatus,
}

#[derive(Debug, Default, Serialize)]
pub struct CleanReport {
    pub removed: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
    /// Artifacts that could not be removed but were let through by
    /// `RemovalPolicy::IgnoreAll`.
    pub skipped: Vec<PathBuf>,
    pub invocations: Vec<Invocation>,
}

#[derive(Debug, Default, Serialize)]
pub struct BuildReport {
    pub target: String,
    pub invocations: Vec<Invocation>,
}

pub(crate) fn failures(invocations: &[Invocation]) -> impl Iterator<Item = &Invocation> {
    invocations.iter().filter(|i| !i.status.is_success())
}

impl CleanReport {
    pub fn failed(&self) -> usize {
        failures(&self.invocations).count()
    }
}

impl BuildReport {
    pub fn failed(&self) -> usize {
        failures(&self.invocations).count()
    }
}

/// Both phases of one run, as written by `--json`.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean: Option<CleanReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildReport>,
}

impl RunReport {
    pub fn failed(&self) -> usize {
        self.clean.as_ref().map_or(0, CleanReport::failed)
            + self.build.as_ref().map_or(0, BuildReport::failed)
    }
}
