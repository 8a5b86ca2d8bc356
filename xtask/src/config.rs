//! Build configuration (`sapphire-build.toml`).
//!
//! Looked up in the working directory; it overrides the project list, artifact
//! set, target and build tool. Every field is optional, and a missing file means
//! the stock Chromatron firmware layout.

use crate::error::XtaskError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

pub const CONFIG_FILE: &str = "sapphire-build.toml";

const DEFAULT_TOOL: &str = "sapphiremake";
const DEFAULT_TARGET: &str = "chromatron";

const DEFAULT_PROJECTS: [&str; 7] = [
    "sapphire",
    "xmega128a4u",
    "lib_dns",
    "lib_sntp",
    "lib_chromatron",
    "chromatron",
    "chromatron_recovery",
];

const DEFAULT_ARTIFACTS: [&str; 3] = ["firmware.bin", "manifest.txt", "chromatron_main_fw.zip"];

/// Which errors are swallowed when deleting build outputs during a clean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemovalPolicy {
    /// Only a missing file is ignored. Anything else aborts the clean.
    #[default]
    IgnoreMissing,

    /// Every OS error is ignored. This is how the old build script behaved and
    /// it hides permission problems, so it has to be asked for explicitly.
    IgnoreAll,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    #[serde(default = "default_tool")]
    pub tool: String,

    #[serde(default = "default_target")]
    pub target: String,

    #[serde(default = "default_projects")]
    pub projects: Vec<String>,

    #[serde(default = "default_artifacts")]
    pub artifacts: Vec<PathBuf>,

    #[serde(default)]
    pub removal_policy: RemovalPolicy,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            tool: default_tool(),
            target: default_target(),
            projects: default_projects(),
            artifacts: default_artifacts(),
            removal_policy: RemovalPolicy::default(),
        }
    }
}

fn default_tool() -> String {
    DEFAULT_TOOL.to_string()
}
fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}
fn default_projects() -> Vec<String> {
    DEFAULT_PROJECTS.iter().map(ToString::to_string).collect()
}
fn default_artifacts() -> Vec<PathBuf> {
    DEFAULT_ARTIFACTS.iter().map(PathBuf::from).collect()
}

impl BuildConfig {
    /// Load config from `path` (or use defaults if the file doesn't exist).
    pub fn load(path: &Path) -> Result<Self, XtaskError> {
        if !path.exists() {
            log::debug!("{} not found, using built-in project list", path.display());
            return Ok(BuildConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|source| XtaskError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| XtaskError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        log::debug!("Loaded {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn validate(&self) -> Result<(), XtaskError> {
        if self.tool.trim().is_empty() {
            return Err(XtaskError::InvalidConfig("tool must not be empty".into()));
        }
        if self.target.trim().is_empty() {
            return Err(XtaskError::InvalidConfig("target must not be empty".into()));
        }
        if let Some(i) = self.projects.iter().position(|p| p.trim().is_empty()) {
            return Err(XtaskError::InvalidConfig(format!(
                "project #{} has an empty name",
                i + 1
            )));
        }
        for artifact in &self.artifacts {
            let local = artifact
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
            let names_file = matches!(artifact.components().next_back(), Some(Component::Normal(_)));
            if !local || !names_file {
                return Err(XtaskError::InvalidConfig(format!(
                    "artifact {} must be a relative path inside the working directory",
                    artifact.display()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BuildConfig::default();
        assert_eq!(config.tool, "sapphiremake");
        assert_eq!(config.target, "chromatron");
        assert_eq!(config.projects.len(), 7);
        assert_eq!(config.projects[0], "sapphire");
        assert_eq!(config.projects[6], "chromatron_recovery");
        assert_eq!(
            config.artifacts,
            vec![
                PathBuf::from("firmware.bin"),
                PathBuf::from("manifest.txt"),
                PathBuf::from("chromatron_main_fw.zip"),
            ]
        );
        assert_eq!(config.removal_policy, RemovalPolicy::IgnoreMissing);
        config.validate().unwrap();
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BuildConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, BuildConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "projects = [\"sapphire\", \"xmega128a4u\"]\nremoval_policy = \"ignore-all\"\n",
        )
        .unwrap();

        let config = BuildConfig::load(&path).unwrap();
        assert_eq!(config.projects, vec!["sapphire", "xmega128a4u"]);
        assert_eq!(config.removal_policy, RemovalPolicy::IgnoreAll);
        assert_eq!(config.target, "chromatron");
        assert_eq!(config.artifacts.len(), 3);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "taget = \"chromatron\"\n").unwrap();

        let err = BuildConfig::load(&path).unwrap_err();
        assert!(matches!(err, XtaskError::ParseConfig { .. }));
    }

    #[test]
    fn test_empty_project_is_rejected() {
        let config = BuildConfig {
            projects: vec!["sapphire".into(), " ".into()],
            ..BuildConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid config: project #2 has an empty name");
    }

    #[test]
    fn test_artifact_outside_workdir_is_rejected() {
        for bad in ["../firmware.bin", "/tmp/firmware.bin", "", "."] {
            let config = BuildConfig {
                artifacts: vec![PathBuf::from(bad)],
                ..BuildConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(XtaskError::InvalidConfig(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_nested_relative_artifact_is_allowed() {
        let config = BuildConfig {
            artifacts: vec![PathBuf::from("./out/firmware.bin")],
            ..BuildConfig::default()
        };
        config.validate().unwrap();
    }
}
