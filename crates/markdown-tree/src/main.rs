//! Command-line driver: walk a directory and write its markdown outline

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};
use mdtree::{Config, MarkdownTree, Walker};
use std::io::{self, Write};
use std::path::PathBuf;

/// Generate a markdown outline of a directory tree
///
/// Directories become headings (up to six levels) and files become list
/// items. Files directly in the input directory are not listed, and
/// anything inside a `*-example` directory is collapsed into one item.
#[derive(Parser, Debug)]
#[command(name = "markdown-tree")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Input directory path
    #[arg(long, value_name = "DIR")]
    input_dir: PathBuf,

    /// Output file path, or `-` for standard output
    #[arg(long, value_name = "FILE")]
    output_file: PathBuf,

    /// Render each file as a link below --base-url
    #[arg(long)]
    with_link: bool,

    /// Base URL for --with-link
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let config = if self.with_link {
            let Some(base_url) = self.base_url.as_deref() else {
                bail!("missing --base-url for --with-link");
            };
            Config::new().with_link(base_url)
        } else {
            Config::new()
        };

        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    fn writes_to_stdout(&self) -> bool {
        self.output_file.as_os_str() == "-"
    }
}

/// Build the tree and render it to `stdout` or to the output file
fn run<W: Write>(cli: &Cli, stdout: &mut W) -> Result<()> {
    let config = cli.config()?;

    let walker = Walker::new(&cli.input_dir).with_context(|| {
        format!("Failed to open input directory {}", cli.input_dir.display())
    })?;
    let mut tree = MarkdownTree::new(walker.root_name(), config);

    let entries = walker
        .walk()
        .with_context(|| format!("Failed to walk {}", cli.input_dir.display()))?;
    for entry in &entries {
        tree.insert(&entry.path, entry.is_dir);
    }
    debug!("Tree {} holds {} nodes", tree.root(), tree.node_count());

    if cli.writes_to_stdout() {
        tree.write_markdown(stdout).context("Failed to generate markdown")?;
        stdout.flush().context("Failed to flush standard output")?;
    } else {
        tree.generate(&cli.output_file).with_context(|| {
            format!("Failed to generate markdown {}", cli.output_file.display())
        })?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    run(&cli, &mut io::stdout().lock())?;
    info!("done");
    Ok(())
}
