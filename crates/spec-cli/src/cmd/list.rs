use crate::output::{print_json, print_table};
use anyhow::Context;
use spec_core::lookup;
use std::path::Path;

pub fn run(root: &Path, plugin_root: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let paths = super::load_paths(root, plugin_root)?;
    let specs = lookup::list(&paths.specs_root).context("failed to list specs")?;

    if json {
        let summaries: Vec<_> = specs
            .iter()
            .map(|s| {
                serde_json::json!({
                    "id": s.id,
                    "name": s.name,
                    "dir": s.path.strip_prefix(root).unwrap_or(&s.path),
                })
            })
            .collect();
        return print_json(&summaries);
    }

    if specs.is_empty() {
        println!("No specs yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = specs
        .iter()
        .map(|s| vec![s.id.to_string(), s.name.clone()])
        .collect();
    print_table(&["ID", "NAME"], rows);
    Ok(())
}
