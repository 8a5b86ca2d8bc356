use crate::config::RemovalPolicy;
use crate::error::XtaskError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub(crate) enum Removal {
    Removed,
    Missing,
    /// Failed for a reason other than absence, and the policy said to carry on.
    Skipped(io::Error),
}

pub(crate) fn remove(
    workdir: &Path,
    artifact: &Path,
    policy: RemovalPolicy,
) -> Result<Removal, XtaskError> {
    let path = workdir.join(artifact);
    match fs::remove_file(&path) {
        Ok(()) => Ok(Removal::Removed),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Removal::Missing),
        Err(e) => match policy {
            RemovalPolicy::IgnoreAll => Ok(Removal::Skipped(e)),
            RemovalPolicy::IgnoreMissing => Err(XtaskError::RemoveArtifact {
                path: PathBuf::from(artifact),
                source: e,
            }),
        },
    }
}
