mod cmd;
mod output;
mod root;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "spec",
    about = "Create, extend, and inspect numbered specification directories",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .spec/ or .git/)
    #[arg(long, global = true, env = "SPEC_ROOT")]
    root: Option<PathBuf>,

    /// Plugin root holding skills/ and templates/ (default: derived from the binary location)
    #[arg(long, global = true, env = "SPEC_PLUGIN_ROOT")]
    plugin_root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    target: TargetArgs,
}

#[derive(Args)]
struct TargetArgs {
    /// Feature name, or a spec id (NNN) with --add / --read.
    /// Names matching a subcommand (create, list, config) need `spec create <name>`.
    target: Option<String>,

    /// Copy the named template into the spec directory
    #[arg(long, value_name = "TEMPLATE")]
    add: Option<String>,

    /// Print the spec's metadata report
    #[arg(long, conflicts_with = "add")]
    read: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new spec directory
    Create {
        feature_name: String,
        /// Copy the named template into the new directory
        #[arg(long, value_name = "TEMPLATE")]
        add: Option<String>,
    },

    /// List spec directories in id order
    List,

    /// Show resolved paths and layout warnings
    Config,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    let plugin_root = cli.plugin_root.as_deref();

    let result = match cli.command {
        Some(Commands::Create { feature_name, add }) => {
            cmd::spec::run(&root, plugin_root, &feature_name, add.as_deref(), false, cli.json)
        }
        Some(Commands::List) => cmd::list::run(&root, plugin_root, cli.json),
        Some(Commands::Config) => cmd::config::run(&root, plugin_root, cli.json),
        None => match cli.target.target {
            Some(target) => cmd::spec::run(
                &root,
                plugin_root,
                &target,
                cli.target.add.as_deref(),
                cli.target.read,
                cli.json,
            ),
            None => Err(anyhow::anyhow!(
                "feature name or spec id required (see 'spec --help')"
            )),
        },
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
