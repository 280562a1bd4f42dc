use crate::error::{Result, SpecError};
use crate::io;
use crate::paths;
use crate::types::SpecId;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A numbered directory found under the spec root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecEntry {
    pub id: SpecId,
    /// Directory name with the `<id>-` prefix removed.
    pub name: String,
    pub dir_name: String,
    pub path: PathBuf,
}

impl SpecEntry {
    fn from_dir_name(specs_root: &Path, dir_name: String) -> Option<Self> {
        let id = SpecId::new(paths::parse_dir_id(&dir_name)?)?;
        let name = dir_name[4..].to_string();
        Some(Self {
            id,
            name,
            path: specs_root.join(&dir_name),
            dir_name,
        })
    }
}

/// Every numbered directory under `specs_root`, ordered by id then name.
///
/// Entries without a `NNN-` prefix are skipped. A missing root is empty.
pub fn list(specs_root: &Path) -> Result<Vec<SpecEntry>> {
    let mut entries: Vec<SpecEntry> = io::subdirectory_names(specs_root)?
        .into_iter()
        .filter_map(|name| SpecEntry::from_dir_name(specs_root, name))
        .collect();
    entries.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.dir_name.cmp(&b.dir_name)));
    Ok(entries)
}

/// Find the directory for `target`, given as `NNN` or as a full `NNN-slug` name.
///
/// More than one directory sharing the same id is an error rather than an
/// arbitrary pick.
pub fn locate(specs_root: &Path, target: &str) -> Result<SpecEntry> {
    if paths::is_spec_id(target) {
        let id: SpecId = target.parse()?;
        let mut matches: Vec<SpecEntry> = list(specs_root)?
            .into_iter()
            .filter(|e| e.id == id)
            .collect();
        return match matches.len() {
            0 => Err(SpecError::SpecNotFound(target.to_string())),
            1 => Ok(matches.remove(0)),
            _ => Err(SpecError::AmbiguousSpec {
                id: target.to_string(),
                candidates: matches.into_iter().map(|e| e.dir_name).collect(),
            }),
        };
    }

    if paths::parse_dir_id(target).is_none() || target.contains(['/', '\\']) {
        return Err(SpecError::InvalidSpecId(target.to_string()));
    }

    if !specs_root.join(target).is_dir() {
        return Err(SpecError::SpecNotFound(target.to_string()));
    }
    SpecEntry::from_dir_name(specs_root, target.to_string())
        .ok_or_else(|| SpecError::InvalidSpecId(target.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn root_with(dirs: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for d in dirs {
            std::fs::create_dir_all(dir.path().join(d)).unwrap();
        }
        dir
    }

    #[test]
    fn list_orders_by_id_and_skips_unnumbered() {
        let dir = root_with(&["010-late", "002-early", "notes", "12-short"]);
        std::fs::write(dir.path().join("003-file.md"), "").unwrap();

        let names: Vec<_> = list(dir.path()).unwrap().into_iter().map(|e| e.dir_name).collect();
        assert_eq!(names, vec!["002-early", "010-late"]);
    }

    #[test]
    fn locate_by_id_strips_prefix() {
        let dir = root_with(&["001-auth-service"]);
        let entry = locate(dir.path(), "001").unwrap();
        assert_eq!(entry.id.to_string(), "001");
        assert_eq!(entry.name, "auth-service");
        assert_eq!(entry.path, dir.path().join("001-auth-service"));
    }

    #[test]
    fn locate_by_full_name() {
        let dir = root_with(&["004-billing", "004-billing-v2"]);
        let entry = locate(dir.path(), "004-billing-v2").unwrap();
        assert_eq!(entry.name, "billing-v2");
    }

    #[test]
    fn locate_unknown_id_is_not_found() {
        let dir = root_with(&["001-auth"]);
        assert!(matches!(locate(dir.path(), "002"), Err(SpecError::SpecNotFound(_))));
        assert!(matches!(
            locate(&dir.path().join("missing"), "001"),
            Err(SpecError::SpecNotFound(_))
        ));
        assert!(matches!(locate(dir.path(), "001-other"), Err(SpecError::SpecNotFound(_))));
    }

    #[test]
    fn locate_rejects_duplicate_ids() {
        let dir = root_with(&["005-b", "005-a"]);
        match locate(dir.path(), "005") {
            Err(SpecError::AmbiguousSpec { candidates, .. }) => {
                assert_eq!(candidates, vec!["005-a", "005-b"]);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }

    #[test]
    fn locate_rejects_malformed_targets() {
        let dir = root_with(&["001-auth"]);
        for target in ["1", "auth", "001-auth/../001-auth", ""] {
            assert!(
                matches!(locate(dir.path(), target), Err(SpecError::InvalidSpecId(_))),
                "expected invalid: {target}"
            );
        }
    }
}
