use super::{BuildTool, ToolStatus};
use std::process::Command;

/// Runs the real `sapphiremake` binary, one blocking child per request.
///
/// stdout/stderr are inherited so the tool's own output is what the user sees.
pub struct Sapphiremake {
    program: String,
}

impl Sapphiremake {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `sapphiremake -p <project> -c`
    pub fn clean_command(&self, project: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-p", project, "-c"]);
        cmd
    }

    /// `sapphiremake -p <project> -t <target>`
    pub fn build_command(&self, project: &str, target: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-p", project, "-t", target]);
        cmd
    }
}

fn run(mut cmd: Command) -> ToolStatus {
    log::debug!("$ {}", display_command(&cmd));
    match cmd.status() {
        Ok(status) if status.success() => ToolStatus::Success,
        Ok(status) => ToolStatus::Failed {
            code: status.code(),
        },
        Err(e) => ToolStatus::NotRun {
            reason: e.to_string(),
        },
    }
}

fn display_command(cmd: &Command) -> String {
    let mut line = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

impl BuildTool for Sapphiremake {
    fn request_clean(&mut self, project: &str) -> ToolStatus {
        run(self.clean_command(project))
    }

    fn request_build(&mut self, project: &str, target: &str) -> ToolStatus {
        run(self.build_command(project, target))
    }
}
