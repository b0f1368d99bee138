pub mod catalog;
pub mod config;
pub mod model;
pub mod search;
pub mod ui;

use anyhow::{Context, Result, bail};
use catalog::Catalog;
use clap::{CommandFactory, Parser, Subcommand};
use config::Config;
use model::types::Sample;
use std::io::Write;
use std::path::PathBuf;

/// Command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "sample-gallery-search",
    version,
    about = "Search and browse a gallery of mapping-SDK sample screens"
)]
pub struct Cli {
    /// Catalog location: a JSON manifest or a sample tree
    /// (defaults to the configured catalog, then the platform data dir)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the gallery by name, description, and tag
    Search {
        /// Query text; matched case-insensitively
        query: String,

        /// Search only within one category
        #[arg(long)]
        category: Option<String>,

        /// Emit the three result buckets as JSON instead of sections
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List samples in catalog order
    List {
        /// Restrict to one category
        #[arg(long)]
        category: Option<String>,
    },
    /// List categories with sample counts
    Categories,
    /// List every distinct tag
    Tags,
    /// Generate shell completions to stdout
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate man page to stdout
    Man,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::load_default()?;

    if cli.no_color || cfg.color == Some(false) {
        console::set_colors_enabled(false);
    } else if cfg.color == Some(true) {
        console::set_colors_enabled(true);
    }

    let mut out = std::io::stdout();
    match cli.command {
        Commands::Search {
            query,
            category,
            json,
        } => {
            let catalog = load_catalog(cli.catalog, &cfg)?;
            // The per-category surface is a pre-filter; the matcher itself
            // only ever sees a plain slice of samples.
            let scoped: Vec<Sample>;
            let scope: &[Sample] = match category.as_deref() {
                None => catalog.samples(),
                Some(cat) => {
                    scoped = catalog.in_category(cat).into_iter().cloned().collect();
                    if scoped.is_empty() {
                        bail!("no such category: {cat:?}");
                    }
                    &scoped
                }
            };
            let result = search::search(scope, &query);
            if json {
                serde_json::to_writer_pretty(&mut out, &result)
                    .context("serializing search result")?;
                writeln!(out)?;
            } else {
                ui::render::render_results(&mut out, &query, &result)?;
            }
            Ok(())
        }
        Commands::List { category } => {
            let catalog = load_catalog(cli.catalog, &cfg)?;
            match category.as_deref() {
                Some(cat) => {
                    let samples = catalog.in_category(cat);
                    if samples.is_empty() {
                        bail!("no such category: {cat:?}");
                    }
                    ui::render::render_list(&mut out, &samples)?;
                }
                None => {
                    let samples: Vec<&Sample> = catalog.samples().iter().collect();
                    ui::render::render_list(&mut out, &samples)?;
                }
            }
            Ok(())
        }
        Commands::Categories => {
            let catalog = load_catalog(cli.catalog, &cfg)?;
            ui::render::render_categories(&mut out, &catalog.categories())?;
            Ok(())
        }
        Commands::Tags => {
            let catalog = load_catalog(cli.catalog, &cfg)?;
            ui::render::render_tags(&mut out, &catalog.tags())?;
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "sgs", &mut std::io::stdout());
            Ok(())
        }
        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            man.render(&mut out)?;
            Ok(())
        }
    }
}

fn load_catalog(cli_override: Option<PathBuf>, cfg: &Config) -> Result<Catalog> {
    let path = cli_override
        .or_else(|| cfg.catalog.clone())
        .unwrap_or_else(default_catalog_dir);
    Catalog::load(&path).with_context(|| format!("loading catalog from {}", path.display()))
}

pub fn default_catalog_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "sample-gallery-search", "sample-gallery-search")
        .map_or_else(
            || PathBuf::from("gallery"),
            |dirs| dirs.data_dir().join("gallery"),
        )
}
