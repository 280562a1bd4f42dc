use crate::output::{print_json, print_warnings};
use std::path::Path;

/// `spec config`: show where specs and templates resolve to.
pub fn run(root: &Path, plugin_root: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let paths = super::load_paths(root, plugin_root)?;
    let warnings = paths.validate();

    if json {
        return print_json(&serde_json::json!({
            "paths": paths,
            "warnings": warnings,
        }));
    }

    println!("project root:   {}", paths.project_root.display());
    println!("spec root:      {}", paths.specs_root.display());
    println!("plugin root:    {}", paths.plugin_root.display());
    println!("skills:         {}", paths.skills_root.display());
    println!("templates:      {}", paths.templates_root.display());

    if warnings.is_empty() {
        println!("\nLayout is valid.");
    } else {
        print_warnings(&warnings);
    }
    Ok(())
}
