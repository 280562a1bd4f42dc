use crate::error::{Result, SpecError};
use crate::paths;
use crate::types::{Warning, WarningKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// SpecConfig
// ---------------------------------------------------------------------------

/// Project-level settings read from `.spec/config.yaml`.
///
/// Every field has a default, so a project without the file behaves exactly
/// like one with an empty file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecConfig {
    #[serde(default = "default_specs_dir")]
    pub specs_dir: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_root: Option<PathBuf>,
    #[serde(default = "default_skills_dir")]
    pub skills_dir: PathBuf,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
}

fn default_specs_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_SPECS_DIR)
}

fn default_skills_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_SKILLS_DIR)
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_TEMPLATES_DIR)
}

impl Default for SpecConfig {
    fn default() -> Self {
        Self {
            specs_dir: default_specs_dir(),
            plugin_root: None,
            skills_dir: default_skills_dir(),
            templates_dir: default_templates_dir(),
        }
    }
}

impl SpecConfig {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SpecConfig = serde_yaml::from_str(&data)?;
        Ok(config)
    }

    /// Turn the configured (possibly relative) locations into absolute roots.
    ///
    /// Plugin root precedence: `plugin_root_override` (flag or env), then the
    /// `plugin_root` key, then the anchor derived from the running executable.
    pub fn resolve(&self, root: &Path, plugin_root_override: Option<&Path>) -> Result<SpecPaths> {
        let plugin_root = match (plugin_root_override, &self.plugin_root) {
            (Some(p), _) => p.to_path_buf(),
            (None, Some(p)) => root.join(p),
            (None, None) => executable_plugin_root()?,
        };
        Ok(SpecPaths {
            project_root: root.to_path_buf(),
            specs_root: root.join(&self.specs_dir),
            skills_root: plugin_root.join(&self.skills_dir),
            templates_root: plugin_root.join(&self.templates_dir),
            plugin_root,
        })
    }
}

/// Plugin root anchored on the running binary: `<plugin>/bin/spec` ⇒ `<plugin>`.
pub fn executable_plugin_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = std::fs::canonicalize(&exe).unwrap_or(exe);
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            SpecError::Config(format!(
                "cannot derive plugin root from executable location {}",
                exe.display()
            ))
        })
}

// ---------------------------------------------------------------------------
// SpecPaths
// ---------------------------------------------------------------------------

/// Resolved filesystem roots handed to every component at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecPaths {
    pub project_root: PathBuf,
    pub specs_root: PathBuf,
    pub plugin_root: PathBuf,
    pub skills_root: PathBuf,
    pub templates_root: PathBuf,
}

impl SpecPaths {
    /// Default layout under explicit project and plugin roots.
    pub fn new(project_root: impl Into<PathBuf>, plugin_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let plugin_root = plugin_root.into();
        Self {
            specs_root: project_root.join(paths::DEFAULT_SPECS_DIR),
            skills_root: plugin_root.join(paths::DEFAULT_SKILLS_DIR),
            templates_root: plugin_root.join(paths::DEFAULT_TEMPLATES_DIR),
            project_root,
            plugin_root,
        }
    }

    /// Non-fatal problems with the resolved layout.
    pub fn validate(&self) -> Vec<Warning> {
        let mut warnings = Vec::new();

        if self.specs_root.exists() && !self.specs_root.is_dir() {
            warnings.push(Warning::new(
                WarningKind::SpecRootNotDirectory,
                format!("spec root {} exists but is not a directory", self.specs_root.display()),
            ));
        }

        if !self.skills_root.is_dir() && !self.templates_root.is_dir() {
            warnings.push(Warning::new(
                WarningKind::MissingTemplateRoots,
                format!(
                    "no template search root found: neither {} nor {} exists",
                    self.skills_root.display(),
                    self.templates_root.display()
                ),
            ));
        }

        warnings
    }
}
