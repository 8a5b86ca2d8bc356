//! Sequential clean-then-build driver for the firmware projects.
//!
//! Every project is visited in list order, one blocking tool invocation at a
//! time. A failed invocation is recorded and iteration moves on; nothing here
//! short-circuits on a tool result.

mod artifacts;
mod report;

pub use report::{BuildReport, CleanReport, Invocation, RunReport};

use crate::config::BuildConfig;
use crate::error::XtaskError;
use crate::tool::BuildTool;
use artifacts::Removal;
use std::path::PathBuf;

pub struct Driver<T> {
    config: BuildConfig,
    workdir: PathBuf,
    tool: T,
}

impl<T: BuildTool> Driver<T> {
    /// `workdir` is where the artifact files live; normally `"."`.
    pub fn new(config: BuildConfig, workdir: impl Into<PathBuf>, tool: T) -> Self {
        Self {
            config,
            workdir: workdir.into(),
            tool,
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Delete the known build outputs, then ask the tool to clean each project.
    ///
    /// Missing outputs are fine, so running this twice in a row ends in the same
    /// state as running it once. Other removal errors abort before any project
    /// is cleaned unless the config opts into `RemovalPolicy::IgnoreAll`.
    pub fn clean(&mut self) -> Result<CleanReport, XtaskError> {
        log::info!(target: "step", "Clean ({} projects)", self.config.projects.len());
        let mut report = CleanReport::default();

        for artifact in &self.config.artifacts {
            match artifacts::remove(&self.workdir, artifact, self.config.removal_policy)? {
                Removal::Removed => {
                    log::info!("Removed {}", artifact.display());
                    report.removed.push(artifact.clone());
                }
                Removal::Missing => {
                    log::debug!("{} already absent", artifact.display());
                    report.missing.push(artifact.clone());
                }
                Removal::Skipped(e) => {
                    log::warn!("Could not remove {}: {e}", artifact.display());
                    report.skipped.push(artifact.clone());
                }
            }
        }

        for project in &self.config.projects {
            let status = self.tool.request_clean(project);
            if !status.is_success() {
                log::warn!("clean {project}: {status}");
            }
            report.invocations.push(Invocation {
                project: project.clone(),
                status,
            });
        }

        Ok(report)
    }

    /// Ask the tool to build each project for the configured target.
    pub fn build(&mut self) -> BuildReport {
        let target = self.config.target.as_str();
        log::info!(
            target: "step",
            "Build ({} projects, target {target})",
            self.config.projects.len()
        );
        let mut report = BuildReport {
            target: target.to_string(),
            invocations: Vec::with_capacity(self.config.projects.len()),
        };

        for project in &self.config.projects {
            let status = self.tool.request_build(project, target);
            if status.is_success() {
                log::info!(target: "ok", "{project}");
            } else {
                log::warn!("build {project}: {status}");
            }
            report.invocations.push(Invocation {
                project: project.clone(),
                status,
            });
        }

        report
    }
}
