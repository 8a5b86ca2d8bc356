use crate::cli::{Cli, Cmd};
use crate::tasks::firmware::{Phases, RunOptions};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let target = cli.target.as_deref();
    let phases = match cli.cmd.unwrap_or(Cmd::All) {
        Cmd::Doctor => return crate::tasks::tooling::doctor::run(&cli.config, target),
        Cmd::All => Phases::ALL,
        Cmd::Clean => Phases::CLEAN,
        Cmd::Build => Phases::BUILD,
    };

    let config = crate::tasks::load_config(&cli.config, target)?;
    crate::tasks::firmware::run(
        phases,
        config,
        RunOptions {
            strict: cli.strict,
            json: cli.json,
        },
    )
}
