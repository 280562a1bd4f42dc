use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("spec {0} not found")]
    SpecNotFound(String),

    #[error("spec {id} is ambiguous: matches {}", .candidates.join(", "))]
    AmbiguousSpec { id: String, candidates: Vec<String> },

    #[error("invalid feature name '{0}': must contain at least one letter or digit")]
    InvalidName(String),

    #[error("invalid spec id '{0}': expected three digits or '<id>-<slug>'")]
    InvalidSpecId(String),

    #[error("invalid template name '{0}': must be a single path segment")]
    InvalidTemplateName(String),

    #[error("spec id space exhausted: {0} is the highest allocatable id")]
    IdSpaceExhausted(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl SpecError {
    /// True for the lookup failures a caller reports as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, SpecError::TemplateNotFound(_) | SpecError::SpecNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, SpecError>;
