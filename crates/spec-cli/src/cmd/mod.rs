pub mod config;
pub mod list;
pub mod spec;

use anyhow::Context;
use spec_core::config::{SpecConfig, SpecPaths};
use std::path::Path;

/// Load `.spec/config.yaml` (if any) and resolve it against the project root.
pub fn load_paths(root: &Path, plugin_root: Option<&Path>) -> anyhow::Result<SpecPaths> {
    let config = SpecConfig::load(root).context("failed to load .spec/config.yaml")?;
    config
        .resolve(root, plugin_root)
        .context("failed to resolve spec paths")
}
