use crate::config::BuildConfig;
use crate::driver::{Driver, RunReport};
use crate::error::XtaskError;
use crate::tool::{BuildTool, Sapphiremake};
use anyhow::{bail, Context, Result};

/// Which phases a run includes. A full run is always clean first, then build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phases {
    pub clean: bool,
    pub build: bool,
}

impl Phases {
    pub const ALL: Phases = Phases {
        clean: true,
        build: true,
    };
    pub const CLEAN: Phases = Phases {
        clean: true,
        build: false,
    };
    pub const BUILD: Phases = Phases {
        clean: false,
        build: true,
    };
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RunOptions {
    pub strict: bool,
    pub json: bool,
}

pub fn run(phases: Phases, config: BuildConfig, opts: RunOptions) -> Result<()> {
    let report = crate::util::workdir::with_restored_cwd(|cwd| {
        let tool = Sapphiremake::new(config.tool.clone());
        let mut driver = Driver::new(config, cwd, tool);
        let config = driver.config();
        log::info!("Working directory: {}", cwd.display());
        log::info!(
            "Tool: {}, target: {}, projects: {}",
            config.tool,
            config.target,
            config.projects.join(" ")
        );
        execute(phases, &mut driver)
    })
    .context("Firmware run aborted")?;

    let total = report.clean.as_ref().map_or(0, |c| c.invocations.len())
        + report.build.as_ref().map_or(0, |b| b.invocations.len());
    let failed = report.failed();
    if failed == 0 {
        log::info!("Done: {total} invocations");
    } else {
        log::warn!("Done: {failed} of {total} invocations did not succeed");
    }

    if opts.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Serializing run report")?
        );
    }

    if opts.strict && failed > 0 {
        bail!("{failed} sapphiremake invocation(s) failed (--strict)");
    }
    Ok(())
}

/// Run the selected phases in order. A clean that cannot remove an artifact
/// stops the run before anything is built.
pub(crate) fn execute<T: BuildTool>(
    phases: Phases,
    driver: &mut Driver<T>,
) -> Result<RunReport, XtaskError> {
    let mut report = RunReport::default();
    if phases.clean {
        report.clean = Some(driver.clean()?);
    }
    if phases.build {
        report.build = Some(driver.build());
    }
    Ok(report)
}
