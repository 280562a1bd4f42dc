use crate::config::SpecPaths;
use crate::creator::{SpecCreator, SpecOutcome};
use crate::error::Result;
use crate::paths;
use crate::report::{SpecReader, SpecReport};

/// One invocation against the spec root, decided once from the raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecCommand {
    Create {
        name: String,
        template: Option<String>,
    },
    AttachTemplate {
        id: String,
        template: String,
    },
    Read {
        target: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Outcome(SpecOutcome),
    Report(SpecReport),
}

impl SpecCommand {
    /// `read` wins; a bare three-digit target with a template attaches;
    /// everything else creates a new spec.
    pub fn classify(target: &str, template: Option<&str>, read: bool) -> Self {
        if read {
            return SpecCommand::Read {
                target: target.to_string(),
            };
        }
        match template {
            Some(t) if paths::is_spec_id(target) => SpecCommand::AttachTemplate {
                id: target.to_string(),
                template: t.to_string(),
            },
            _ => SpecCommand::Create {
                name: target.to_string(),
                template: template.map(str::to_string),
            },
        }
    }

    pub fn execute(&self, paths: &SpecPaths) -> Result<CommandOutput> {
        match self {
            SpecCommand::Create { name, template } => SpecCreator::from_paths(paths)
                .create_new(name, template.as_deref())
                .map(CommandOutput::Outcome),
            SpecCommand::AttachTemplate { id, template } => SpecCreator::from_paths(paths)
                .attach_template(id, template)
                .map(CommandOutput::Outcome),
            SpecCommand::Read { target } => SpecReader::from_paths(paths)
                .describe(target)
                .map(CommandOutput::Report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpecError;
    use tempfile::TempDir;

    #[test]
    fn classify_variants() {
        assert_eq!(
            SpecCommand::classify("001", Some("prd"), true),
            SpecCommand::Read { target: "001".into() }
        );
        assert_eq!(
            SpecCommand::classify("001", Some("prd"), false),
            SpecCommand::AttachTemplate {
                id: "001".into(),
                template: "prd".into()
            }
        );
        assert_eq!(
            SpecCommand::classify("001", None, false),
            SpecCommand::Create {
                name: "001".into(),
                template: None
            }
        );
        assert_eq!(
            SpecCommand::classify("001-auth", Some("prd"), false),
            SpecCommand::Create {
                name: "001-auth".into(),
                template: Some("prd".into())
            }
        );
    }

    #[test]
    fn execute_create_then_read() {
        let dir = TempDir::new().unwrap();
        let paths = SpecPaths::new(dir.path(), dir.path().join("plugin"));

        let created = SpecCommand::classify("Auth Service", None, false)
            .execute(&paths)
            .unwrap();
        let CommandOutput::Outcome(outcome) = created else {
            panic!("expected outcome");
        };
        assert_eq!(outcome.dir, dir.path().join("docs/specs/001-auth-service"));

        let read = SpecCommand::classify("001", None, true).execute(&paths).unwrap();
        let CommandOutput::Report(report) = read else {
            panic!("expected report");
        };
        assert_eq!(report.name, "auth-service");
        assert!(report.files.is_empty());
    }

    #[test]
    fn execute_read_unknown_fails() {
        let dir = TempDir::new().unwrap();
        let paths = SpecPaths::new(dir.path(), dir.path());
        let err = SpecCommand::classify("003", None, true).execute(&paths).unwrap_err();
        assert!(matches!(err, SpecError::SpecNotFound(_)));
    }
}
