use crate::error::XtaskError;
use std::env;
use std::path::{Path, PathBuf};

/// Run `f` and put the process working directory back where it was afterwards,
/// whether or not `f` succeeded.
///
/// Nothing in the driver changes directory today; this keeps it that way for
/// whatever runs after us in the same process.
pub fn with_restored_cwd<R, E>(f: impl FnOnce(&Path) -> Result<R, E>) -> anyhow::Result<R>
where
    E: Into<anyhow::Error>,
{
    let cwd = env::current_dir().map_err(|source| XtaskError::WorkingDir {
        path: PathBuf::from("."),
        source,
    })?;
    log::trace!("cwd: {}", cwd.display());

    let result = f(&cwd).map_err(Into::into);

    env::set_current_dir(&cwd).map_err(|source| XtaskError::WorkingDir {
        path: cwd.clone(),
        source,
    })?;
    result
}
