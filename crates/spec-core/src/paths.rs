use crate::error::{Result, SpecError};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const SPEC_DIR: &str = ".spec";
pub const CONFIG_FILE: &str = ".spec/config.yaml";

pub const DEFAULT_SPECS_DIR: &str = "docs/specs";
pub const DEFAULT_SKILLS_DIR: &str = "skills";
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

pub const SKILL_TEMPLATE_FILE: &str = "template.md";
pub const TEMPLATE_EXTENSION: &str = "md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn spec_dir(root: &Path) -> PathBuf {
    root.join(SPEC_DIR)
}

/// `<skills_root>/<name>/template.md`
pub fn skill_template(skills_root: &Path, name: &str) -> PathBuf {
    skills_root.join(name).join(SKILL_TEMPLATE_FILE)
}

/// `<templates_root>/<name>.md` (deprecated location)
pub fn legacy_template(templates_root: &Path, name: &str) -> PathBuf {
    templates_root.join(template_filename(name))
}

/// File name a template is written under inside a spec directory.
pub fn template_filename(name: &str) -> String {
    format!("{name}.{TEMPLATE_EXTENSION}")
}

pub fn spec_dir_name(id: &str, slug: &str) -> String {
    format!("{id}-{slug}")
}

// ---------------------------------------------------------------------------
// Spec id patterns
// ---------------------------------------------------------------------------

static ID_RE: OnceLock<Regex> = OnceLock::new();
static DIR_RE: OnceLock<Regex> = OnceLock::new();

fn id_re() -> &'static Regex {
    ID_RE.get_or_init(|| Regex::new(r"^[0-9]{3}$").unwrap())
}

fn dir_re() -> &'static Regex {
    DIR_RE.get_or_init(|| Regex::new(r"^([0-9]{3})-").unwrap())
}

/// True when `s` is exactly a three-digit spec id such as `007`.
pub fn is_spec_id(s: &str) -> bool {
    id_re().is_match(s)
}

/// Numeric prefix of a spec directory name (`"012-auth"` ⇒ `Some(12)`).
///
/// Names without a three-digit prefix followed by a hyphen yield `None`.
pub fn parse_dir_id(name: &str) -> Option<u32> {
    dir_re()
        .captures(name)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Template names are looked up as a single path segment under each search root.
pub fn validate_template_name(name: &str) -> Result<()> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if bad {
        return Err(SpecError::InvalidTemplateName(name.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
