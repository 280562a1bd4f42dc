use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SpecId
// ---------------------------------------------------------------------------

/// Sequential identifier of a spec directory, always rendered as three digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SpecId(u32);

impl SpecId {
    pub const FIRST: SpecId = SpecId(1);
    pub const MAX: SpecId = SpecId(999);

    pub fn new(n: u32) -> Option<Self> {
        (n <= Self::MAX.0).then_some(SpecId(n))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// The id after this one, or `None` once the three-digit space is used up.
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }
}

impl fmt::Display for SpecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

impl std::str::FromStr for SpecId {
    type Err = crate::error::SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !crate::paths::is_spec_id(s) {
            return Err(crate::error::SpecError::InvalidSpecId(s.to_string()));
        }
        s.parse::<u32>()
            .ok()
            .and_then(SpecId::new)
            .ok_or_else(|| crate::error::SpecError::InvalidSpecId(s.to_string()))
    }
}

impl From<SpecId> for String {
    fn from(id: SpecId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for SpecId {
    type Error = crate::error::SpecError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ---------------------------------------------------------------------------
// SpecDocument
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecDocument {
    ProductRequirements,
    SolutionDesign,
    ImplementationPlan,
}

impl SpecDocument {
    pub fn all() -> &'static [SpecDocument] {
        &[
            SpecDocument::ProductRequirements,
            SpecDocument::SolutionDesign,
            SpecDocument::ImplementationPlan,
        ]
    }

    /// Key used in the `[spec]` table of a report.
    pub fn key(self) -> &'static str {
        match self {
            SpecDocument::ProductRequirements => "prd",
            SpecDocument::SolutionDesign => "sdd",
            SpecDocument::ImplementationPlan => "plan",
        }
    }

    pub fn filename(self) -> &'static str {
        match self {
            SpecDocument::ProductRequirements => "product-requirements.md",
            SpecDocument::SolutionDesign => "solution-design.md",
            SpecDocument::ImplementationPlan => "implementation-plan.md",
        }
    }
}

impl fmt::Display for SpecDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// GateFile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateFile {
    DefinitionOfReady,
    DefinitionOfDone,
    TaskDefinitionOfDone,
}

impl GateFile {
    pub fn all() -> &'static [GateFile] {
        &[
            GateFile::DefinitionOfReady,
            GateFile::DefinitionOfDone,
            GateFile::TaskDefinitionOfDone,
        ]
    }

    /// Key used in the `[gates]` table of a report.
    pub fn key(self) -> &'static str {
        match self {
            GateFile::DefinitionOfReady => "definition_of_ready",
            GateFile::DefinitionOfDone => "definition_of_done",
            GateFile::TaskDefinitionOfDone => "task_definition_of_done",
        }
    }

    pub fn filename(self) -> &'static str {
        match self {
            GateFile::DefinitionOfReady => "definition-of-ready.md",
            GateFile::DefinitionOfDone => "definition-of-done.md",
            GateFile::TaskDefinitionOfDone => "task-definition-of-done.md",
        }
    }
}

impl fmt::Display for GateFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Warning
// ---------------------------------------------------------------------------

/// A non-fatal condition surfaced to the user alongside a successful result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    DeprecatedTemplateLocation,
    TemplateUnavailable,
    MissingTemplateRoots,
    SpecRootNotDirectory,
}

impl Warning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
