//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use categorytree_core::{HomePolicy, TracingSink, category_tree_with};
use categorytree_fetch::{FetchOptions, fetch_categories, read_categories};
use categorytree_shared::{
    AppConfig, DisplayCategory, HomeConfig, init_config, load_config, validate_home_config,
};
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use url::Url;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// categorytree — turn content API categories into a display tree.
#[derive(Parser)]
#[command(
    name = "categorytree",
    version,
    about = "Build an ordered, home-flagged category tree from a content API.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Fetch categories and print the display tree as JSON.
    Tree {
        /// Categories endpoint (defaults to `[api] url` from the config).
        #[arg(long, conflicts_with = "file")]
        url: Option<String>,

        /// Read the `{ "data": [...] }` payload from a local file instead.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Show every top-level category when there are at most this many.
        #[arg(long)]
        max_show: Option<usize>,

        /// Number of leading categories to show when none is flagged.
        #[arg(long)]
        default_show: Option<usize>,

        /// Print compact JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr; stdout carries the tree.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "categorytree=info",
        1 => "categorytree=debug",
        _ => "categorytree=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Tree {
            url,
            file,
            max_show,
            default_show,
            compact,
        } => cmd_tree(url.as_deref(), file.as_deref(), max_show, default_show, compact).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

// ---------------------------------------------------------------------------
// Tree command
// ---------------------------------------------------------------------------

/// Where the category payload comes from.
#[derive(Debug, PartialEq)]
enum Source {
    Http(Url),
    File(PathBuf),
}

/// Pick the payload source: `--file`, then `--url`, then the configured endpoint.
fn resolve_source(url: Option<&str>, file: Option<&Path>, config: &AppConfig) -> Result<Source> {
    if let Some(path) = file {
        return Ok(Source::File(path.to_path_buf()));
    }

    if let Some(raw) = url {
        let parsed = Url::parse(raw).map_err(|e| eyre!("invalid URL '{raw}': {e}"))?;
        return Ok(Source::Http(parsed));
    }

    config.api.endpoint()?.map(Source::Http).ok_or_else(|| {
        eyre!("no category source: pass --url or --file, or set [api] url in the config")
    })
}

/// Merge `--max-show` / `--default-show` over the `[home]` config section.
fn resolve_home(
    home: &HomeConfig,
    max_show: Option<usize>,
    default_show: Option<usize>,
) -> Result<HomePolicy> {
    let merged = HomeConfig {
        max_categories_to_show: max_show.unwrap_or(home.max_categories_to_show),
        default_categories_to_show: default_show.unwrap_or(home.default_categories_to_show),
    };
    validate_home_config(&merged)?;
    Ok(HomePolicy::from(&merged))
}

async fn cmd_tree(
    url: Option<&str>,
    file: Option<&Path>,
    max_show: Option<usize>,
    default_show: Option<usize>,
    compact: bool,
) -> Result<()> {
    let config = load_config()?;
    let policy = resolve_home(&config.home, max_show, default_show)?;
    let source = resolve_source(url, file, &config)?;

    info!(?source, "building category tree");

    let spinner = fetch_spinner()?;
    let tree: Vec<DisplayCategory> = match &source {
        Source::Http(endpoint) => {
            let opts = FetchOptions {
                timeout_secs: config.api.timeout_secs,
            };
            category_tree_with(|| fetch_categories(endpoint, &opts), &policy, &TracingSink).await
        }
        Source::File(path) => {
            category_tree_with(|| async { read_categories(path) }, &policy, &TracingSink).await
        }
    };
    spinner.finish_and_clear();

    info!(top_level = tree.len(), "category tree ready");

    let json = if compact {
        serde_json::to_string(&tree)?
    } else {
        serde_json::to_string_pretty(&tree)?
    };
    println!("{json}");

    Ok(())
}

/// Spinner on stderr while the fetch is in flight.
fn fetch_spinner() -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")?
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    spinner.set_message("Fetching categories");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    Ok(spinner)
}

// ---------------------------------------------------------------------------
// Config commands
// ---------------------------------------------------------------------------

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
