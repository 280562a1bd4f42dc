//! Structured description of one spec directory.
//!
//! The TOML-like rendering is consumed by scripts, so its layout is fixed:
//! scalar keys, an always-present `[spec]` table, a `[gates]` table only when
//! a gate file exists, then a `files` array with one sorted name per line.

use crate::config::SpecPaths;
use crate::creator::relative;
use crate::error::Result;
use crate::io;
use crate::lookup;
use crate::types::{GateFile, SpecDocument, SpecId};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpecDocuments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prd: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdd: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PathBuf>,
}

impl SpecDocuments {
    fn slot(&mut self, doc: SpecDocument) -> &mut Option<PathBuf> {
        match doc {
            SpecDocument::ProductRequirements => &mut self.prd,
            SpecDocument::SolutionDesign => &mut self.sdd,
            SpecDocument::ImplementationPlan => &mut self.plan,
        }
    }

    /// Present documents in `prd`, `sdd`, `plan` order.
    pub fn entries(&self) -> Vec<(SpecDocument, &Path)> {
        SpecDocument::all()
            .iter()
            .filter_map(|&d| {
                let path = match d {
                    SpecDocument::ProductRequirements => self.prd.as_deref(),
                    SpecDocument::SolutionDesign => self.sdd.as_deref(),
                    SpecDocument::ImplementationPlan => self.plan.as_deref(),
                };
                path.map(|p| (d, p))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GateDocuments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_of_ready: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_of_done: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition_of_done: Option<PathBuf>,
}

impl GateDocuments {
    fn slot(&mut self, gate: GateFile) -> &mut Option<PathBuf> {
        match gate {
            GateFile::DefinitionOfReady => &mut self.definition_of_ready,
            GateFile::DefinitionOfDone => &mut self.definition_of_done,
            GateFile::TaskDefinitionOfDone => &mut self.task_definition_of_done,
        }
    }

    pub fn entries(&self) -> Vec<(GateFile, &Path)> {
        GateFile::all()
            .iter()
            .filter_map(|&g| {
                let path = match g {
                    GateFile::DefinitionOfReady => self.definition_of_ready.as_deref(),
                    GateFile::DefinitionOfDone => self.definition_of_done.as_deref(),
                    GateFile::TaskDefinitionOfDone => self.task_definition_of_done.as_deref(),
                };
                path.map(|p| (g, p))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecReport {
    pub id: SpecId,
    pub name: String,
    pub dir: PathBuf,
    pub spec: SpecDocuments,
    #[serde(skip_serializing_if = "GateDocuments::is_empty")]
    pub gates: GateDocuments,
    pub files: Vec<String>,
}

impl SpecReport {
    fn map_paths(&self, f: impl Fn(&Path) -> PathBuf) -> Self {
        let mut out = self.clone();
        out.dir = f(&self.dir);
        for doc in SpecDocument::all() {
            let slot = out.spec.slot(*doc);
            *slot = slot.as_deref().map(&f);
        }
        for gate in GateFile::all() {
            let slot = out.gates.slot(*gate);
            *slot = slot.as_deref().map(&f);
        }
        out
    }

    /// Same report with paths shown relative to `base` where possible.
    pub fn relative_to(&self, base: &Path) -> Self {
        self.map_paths(|p| relative(p, base))
    }

    pub fn render_toml(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "id = {}", quote(&self.id.to_string()));
        let _ = writeln!(out, "name = {}", quote(&self.name));
        let _ = writeln!(out, "dir = {}", quote(&self.dir.display().to_string()));

        out.push_str("\n[spec]\n");
        for (doc, path) in self.spec.entries() {
            let _ = writeln!(out, "{} = {}", doc.key(), quote(&path.display().to_string()));
        }

        let gates = self.gates.entries();
        if !gates.is_empty() {
            out.push_str("\n[gates]\n");
            for (gate, path) in gates {
                let _ = writeln!(out, "{} = {}", gate.key(), quote(&path.display().to_string()));
            }
        }

        out.push_str("\nfiles = [\n");
        let last = self.files.len().saturating_sub(1);
        for (i, file) in self.files.iter().enumerate() {
            let comma = if i < last { "," } else { "" };
            let _ = writeln!(out, "  {}{comma}", quote(file));
        }
        out.push_str("]\n");
        out
    }
}

/// Render `s` as a double-quoted basic string.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

// ---------------------------------------------------------------------------
// SpecReader
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SpecReader {
    specs_root: PathBuf,
}

impl SpecReader {
    pub fn new(specs_root: impl Into<PathBuf>) -> Self {
        Self {
            specs_root: specs_root.into(),
        }
    }

    pub fn from_paths(paths: &SpecPaths) -> Self {
        Self::new(&paths.specs_root)
    }

    /// Describe the spec directory for `target` (`NNN` or `NNN-slug`).
    pub fn describe(&self, target: &str) -> Result<SpecReport> {
        let entry = lookup::locate(&self.specs_root, target)?;
        tracing::debug!(id = %entry.id, dir = %entry.path.display(), "describing spec");

        let mut spec = SpecDocuments::default();
        for &doc in SpecDocument::all() {
            let path = entry.path.join(doc.filename());
            if path.is_file() {
                *spec.slot(doc) = Some(path);
            }
        }

        let mut gates = GateDocuments::default();
        for &gate in GateFile::all() {
            let path = entry.path.join(gate.filename());
            if path.is_file() {
                *gates.slot(gate) = Some(path);
            }
        }

        let files = io::sorted_file_names(&entry.path)?;

        Ok(SpecReport {
            id: entry.id,
            name: entry.name,
            dir: entry.path,
            spec,
            gates,
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpecError;
    use tempfile::TempDir;

    fn spec_dir(root: &Path, name: &str, files: &[&str]) -> PathBuf {
        let dir = root.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        for f in files {
            std::fs::write(dir.join(f), "").unwrap();
        }
        dir
    }

    #[test]
    fn omits_gates_when_none_present() {
        let root = TempDir::new().unwrap();
        spec_dir(
            root.path(),
            "001-auth",
            &["solution-design.md", "product-requirements.md", "notes.txt"],
        );

        let report = SpecReader::new(root.path()).describe("001").unwrap();
        assert_eq!(report.name, "auth");
        assert!(report.spec.prd.is_some());
        assert!(report.spec.sdd.is_some());
        assert!(report.spec.plan.is_none());
        assert!(report.gates.is_empty());

        let toml = report.relative_to(root.path()).render_toml();
        assert_eq!(
            toml,
            "id = \"001\"\n\
             name = \"auth\"\n\
             dir = \"001-auth\"\n\
             \n\
             [spec]\n\
             prd = \"001-auth/product-requirements.md\"\n\
             sdd = \"001-auth/solution-design.md\"\n\
             \n\
             files = [\n  \"notes.txt\",\n  \"product-requirements.md\",\n  \"solution-design.md\"\n]\n"
        );
    }

    #[test]
    fn lists_present_gates_in_fixed_order() {
        let root = TempDir::new().unwrap();
        spec_dir(
            root.path(),
            "002-billing",
            &["task-definition-of-done.md", "definition-of-ready.md"],
        );

        let report = SpecReader::new(root.path()).describe("002").unwrap();
        let keys: Vec<_> = report.gates.entries().into_iter().map(|(g, _)| g.key()).collect();
        assert_eq!(keys, ["definition_of_ready", "task_definition_of_done"]);

        let toml = report.relative_to(root.path()).render_toml();
        assert!(toml.contains(
            "\n[gates]\ndefinition_of_ready = \"002-billing/definition-of-ready.md\"\n\
             task_definition_of_done = \"002-billing/task-definition-of-done.md\"\n"
        ));
        assert!(!toml.contains("\ndefinition_of_done ="));
    }

    #[test]
    fn file_list_is_sorted_and_excludes_directories() {
        let root = TempDir::new().unwrap();
        let dir = spec_dir(root.path(), "003-x", &["z.md", "a.md", "m.md"]);
        std::fs::create_dir(dir.join("assets")).unwrap();

        let report = SpecReader::new(root.path()).describe("003").unwrap();
        assert_eq!(report.files, ["a.md", "m.md", "z.md"]);
    }

    #[test]
    fn empty_directory_renders_empty_sections() {
        let root = TempDir::new().unwrap();
        spec_dir(root.path(), "004-empty", &[]);

        let toml = SpecReader::new(root.path())
            .describe("004")
            .unwrap()
            .relative_to(root.path())
            .render_toml();
        assert!(toml.ends_with("\n[spec]\n\nfiles = [\n]\n"));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let root = TempDir::new().unwrap();
        spec_dir(root.path(), "001-auth", &[]);
        let err = SpecReader::new(root.path()).describe("009").unwrap_err();
        assert!(matches!(err, SpecError::SpecNotFound(_)));
    }

    #[test]
    fn quotes_special_characters() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(quote("tab\there"), "\"tab\\there\"");
        assert_eq!(quote("\u{1}"), "\"\\u0001\"");
    }

    #[test]
    fn json_omits_absent_sections() {
        let root = TempDir::new().unwrap();
        spec_dir(root.path(), "005-json", &["implementation-plan.md"]);
        let report = SpecReader::new(root.path()).describe("005").unwrap();
        let value = serde_json::to_value(report.relative_to(root.path())).unwrap();

        assert_eq!(value["id"], "005");
        assert_eq!(value["spec"]["plan"], "005-json/implementation-plan.md");
        assert!(value["spec"].get("prd").is_none());
        assert!(value.get("gates").is_none());
        assert_eq!(value["files"], serde_json::json!(["implementation-plan.md"]));
    }
}
