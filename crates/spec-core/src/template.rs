//! Two-tier template lookup.
//!
//! A template name resolves to `skills/<name>/template.md` when that file
//! exists, otherwise to the deprecated `templates/<name>.md`. The fallback is
//! reported as a [`Warning`] on the result so callers can surface the
//! migration debt.

use crate::config::SpecPaths;
use crate::error::{Result, SpecError};
use crate::paths;
use crate::types::{Warning, WarningKind};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateSource {
    Skill,
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTemplate {
    pub name: String,
    pub path: PathBuf,
    pub source: TemplateSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<Warning>,
}

impl ResolvedTemplate {
    /// File name the template takes inside a spec directory.
    pub fn target_filename(&self) -> String {
        paths::template_filename(&self.name)
    }
}

#[derive(Debug, Clone)]
pub struct TemplateResolver {
    skills_root: PathBuf,
    templates_root: PathBuf,
}

impl TemplateResolver {
    pub fn new(skills_root: impl Into<PathBuf>, templates_root: impl Into<PathBuf>) -> Self {
        Self {
            skills_root: skills_root.into(),
            templates_root: templates_root.into(),
        }
    }

    pub fn from_paths(paths: &SpecPaths) -> Self {
        Self::new(&paths.skills_root, &paths.templates_root)
    }

    pub fn resolve(&self, name: &str) -> Result<ResolvedTemplate> {
        paths::validate_template_name(name)?;

        let skill = paths::skill_template(&self.skills_root, name);
        if skill.is_file() {
            tracing::debug!(template = %name, path = %skill.display(), "resolved skill template");
            return Ok(ResolvedTemplate {
                name: name.to_string(),
                path: skill,
                source: TemplateSource::Skill,
                warning: None,
            });
        }

        let legacy = paths::legacy_template(&self.templates_root, name);
        if legacy.is_file() {
            let message = deprecation_message(&skill);
            tracing::debug!(template = %name, path = %legacy.display(), "{message}");
            return Ok(ResolvedTemplate {
                name: name.to_string(),
                path: legacy,
                source: TemplateSource::Legacy,
                warning: Some(Warning::new(WarningKind::DeprecatedTemplateLocation, message)),
            });
        }

        Err(SpecError::TemplateNotFound(name.to_string()))
    }
}

fn deprecation_message(expected: &Path) -> String {
    format!(
        "using deprecated template location; template should be at: {}",
        expected.display()
    )
}
