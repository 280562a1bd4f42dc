use std::path::{Path, PathBuf};

/// Resolve the project root that holds the spec directory tree.
///
/// Priority:
/// 1. `--root` flag / `SPEC_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.spec/`
/// 3. Walk upward from `cwd` looking for `.git/`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    find_upward(&cwd, spec_core::paths::SPEC_DIR)
        .or_else(|| find_upward(&cwd, ".git"))
        .unwrap_or(cwd)
}

fn find_upward(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        let result = resolve_root(Some(dir.path()));
        assert_eq!(result, dir.path());
    }

    #[test]
    fn finds_nearest_marker_above() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".spec")).unwrap();
        let subdir = dir.path().join("src/deep");
        std::fs::create_dir_all(&subdir).unwrap();

        assert_eq!(find_upward(&subdir, ".spec").unwrap(), dir.path());
    }

    #[test]
    fn missing_marker_finds_nothing() {
        let dir = TempDir::new().unwrap();
        let marker = "definitely-not-a-marker-dir";
        assert!(find_upward(dir.path(), marker).is_none());
    }
}
