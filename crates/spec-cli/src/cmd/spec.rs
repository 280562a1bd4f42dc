use crate::output::{print_json, print_warnings};
use anyhow::Context;
use spec_core::{
    command::{CommandOutput, SpecCommand},
    creator::{SpecAction, SpecOutcome},
    report::SpecReport,
};
use std::path::Path;

pub fn run(
    root: &Path,
    plugin_root: Option<&Path>,
    target: &str,
    add: Option<&str>,
    read: bool,
    json: bool,
) -> anyhow::Result<()> {
    let paths = super::load_paths(root, plugin_root)?;
    let command = SpecCommand::classify(target, add, read);

    let output = command.execute(&paths).with_context(|| match &command {
        SpecCommand::Create { name, .. } => format!("failed to create spec '{name}'"),
        SpecCommand::AttachTemplate { id, template } => {
            format!("failed to add template '{template}' to spec {id}")
        }
        SpecCommand::Read { target } => format!("failed to read spec '{target}'"),
    })?;

    match output {
        CommandOutput::Outcome(outcome) => show_outcome(&outcome.relative_to(root), json),
        CommandOutput::Report(report) => show_report(&report.relative_to(root), json),
    }
}

fn show_outcome(outcome: &SpecOutcome, json: bool) -> anyhow::Result<()> {
    print_warnings(&outcome.warnings);

    if json {
        return print_json(outcome);
    }

    match outcome.action {
        SpecAction::Created => {
            println!("Created spec directory: {}", outcome.dir.display());
            println!("Spec ID: {}", outcome.id);
        }
        SpecAction::TemplateAttached => {
            println!("Adding template to existing spec: {}", outcome.dir.display());
        }
    }

    if let Some(ref t) = outcome.template {
        let file = t
            .path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| t.name.clone());
        println!("Generated template: {file}");
    }

    if outcome.action == SpecAction::Created {
        println!("Specification directory created successfully");
    }
    Ok(())
}

fn show_report(report: &SpecReport, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(report);
    }
    print!("{}", report.render_toml());
    Ok(())
}
