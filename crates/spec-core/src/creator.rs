use crate::allocator::IdAllocator;
use crate::command::SpecCommand;
use crate::config::SpecPaths;
use crate::error::{Result, SpecError};
use crate::io;
use crate::lookup;
use crate::paths;
use crate::slug;
use crate::template::{ResolvedTemplate, TemplateResolver, TemplateSource};
use crate::types::{SpecId, Warning, WarningKind};
use serde::Serialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecAction {
    Created,
    TemplateAttached,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenTemplate {
    pub name: String,
    pub path: PathBuf,
    pub source: TemplateSource,
}

/// What a create or attach call did to the spec root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecOutcome {
    pub action: SpecAction,
    pub id: SpecId,
    pub name: String,
    pub dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<WrittenTemplate>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
}

impl SpecOutcome {
    /// Same outcome with paths shown relative to `base` where possible.
    pub fn relative_to(&self, base: &Path) -> Self {
        let mut out = self.clone();
        out.dir = relative(&self.dir, base);
        if let Some(t) = out.template.as_mut() {
            t.path = relative(&t.path, base);
        }
        out
    }
}

pub(crate) fn relative(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

// ---------------------------------------------------------------------------
// SpecCreator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SpecCreator {
    specs_root: PathBuf,
    allocator: IdAllocator,
    resolver: TemplateResolver,
}

impl SpecCreator {
    pub fn new(specs_root: impl Into<PathBuf>, resolver: TemplateResolver) -> Self {
        let specs_root = specs_root.into();
        Self {
            allocator: IdAllocator::new(&specs_root),
            specs_root,
            resolver,
        }
    }

    pub fn from_paths(paths: &SpecPaths) -> Self {
        Self::new(&paths.specs_root, TemplateResolver::from_paths(paths))
    }

    /// Create a new spec, or attach `template` to an existing one when
    /// `name_or_id` is a bare three-digit id and a template is given.
    pub fn create(&self, name_or_id: &str, template: Option<&str>) -> Result<SpecOutcome> {
        match SpecCommand::classify(name_or_id, template, false) {
            SpecCommand::AttachTemplate { id, template } => self.attach_template(&id, &template),
            _ => self.create_new(name_or_id, template),
        }
    }

    /// Allocate the next id and create `<id>-<slug>` under the spec root.
    ///
    /// A template that cannot be resolved becomes a warning on the outcome;
    /// the directory stays created.
    pub fn create_new(&self, feature_name: &str, template: Option<&str>) -> Result<SpecOutcome> {
        let slug = slug::sanitize_required(feature_name)?;
        let id = self.allocator.next_id()?;
        let dir = self.specs_root.join(paths::spec_dir_name(&id.to_string(), &slug));

        io::ensure_dir(&dir)?;
        tracing::info!(id = %id, dir = %dir.display(), "created spec directory");

        let mut outcome = SpecOutcome {
            action: SpecAction::Created,
            id,
            name: slug,
            dir,
            template: None,
            warnings: Vec::new(),
        };

        if let Some(name) = template {
            match self.resolver.resolve(name) {
                Ok(resolved) => {
                    let written = self.write_template(&outcome.dir, &resolved)?;
                    outcome.warnings.extend(resolved.warning);
                    outcome.template = Some(written);
                }
                Err(e @ (SpecError::TemplateNotFound(_) | SpecError::InvalidTemplateName(_))) => {
                    tracing::debug!(template = %name, error = %e, "spec created without template");
                    outcome
                        .warnings
                        .push(Warning::new(WarningKind::TemplateUnavailable, e.to_string()));
                }
                Err(e) => return Err(e),
            }
        }

        Ok(outcome)
    }

    /// Copy `template` into the existing spec identified by `id`.
    ///
    /// Fails without touching the filesystem when the id has no directory or
    /// the template cannot be resolved.
    pub fn attach_template(&self, id: &str, template: &str) -> Result<SpecOutcome> {
        let entry = lookup::locate(&self.specs_root, id)?;
        let resolved = self.resolver.resolve(template)?;
        tracing::info!(id = %entry.id, dir = %entry.path.display(), "adding template to existing spec");

        let written = self.write_template(&entry.path, &resolved)?;
        Ok(SpecOutcome {
            action: SpecAction::TemplateAttached,
            id: entry.id,
            name: entry.name,
            dir: entry.path,
            template: Some(written),
            warnings: resolved.warning.into_iter().collect(),
        })
    }

    fn write_template(&self, dir: &Path, resolved: &ResolvedTemplate) -> Result<WrittenTemplate> {
        let dest = dir.join(resolved.target_filename());
        io::copy_verbatim(&resolved.path, &dest)?;
        tracing::info!(template = %resolved.name, path = %dest.display(), "generated template");
        Ok(WrittenTemplate {
            name: resolved.name.clone(),
            path: dest,
            source: resolved.source,
        })
    }
}
