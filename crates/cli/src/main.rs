mod cmd;
mod logging;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use mdsection_core::config::loader::{ConfigLoader, default_config_path};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mdsection",
    version,
    about = "Find, replace and insert heading-addressed sections in Markdown files"
)]
struct Cli {
    /// Path to config.toml (defaults to ~/.config/mdsection/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print the resolved settings
    Doctor,

    /// List the headings of a Markdown file
    Headings(HeadingsArgs),

    /// Print the line range of a section
    Find(FindArgs),

    /// Replace the content of an existing section
    Replace(ReplaceArgs),

    /// Insert new content after a heading, at the beginning, or at the end
    Add(AddArgs),

    /// Replace a section if it exists, otherwise insert it
    Upsert(UpsertArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::Doctor => "doctor",
            Self::Headings(_) => "headings",
            Self::Find(_) => "find",
            Self::Replace(_) => "replace",
            Self::Add(_) => "add",
            Self::Upsert(_) => "upsert",
            Self::Completions { .. } => "completions",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Quiet,
}

#[derive(Debug, Args)]
pub struct HeadingsArgs {
    /// Markdown file to inspect
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long)]
    pub json: bool,

    /// Shorthand for --output quiet (titles only)
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Markdown file to inspect
    pub file: PathBuf,

    /// Section title (compared after trimming, case-sensitive)
    #[arg(long, short)]
    pub section: String,

    /// Only match headings of this level
    #[arg(long, value_parser = parse_level)]
    pub level: Option<usize>,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ContentArgs {
    /// Content to write
    #[arg(long)]
    pub content: Option<String>,

    /// Read content from a file ("-" for stdin)
    #[arg(long)]
    pub content_file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PlacementArgs {
    /// Insert right after this heading (falls back to the end if it is missing)
    #[arg(long)]
    pub after: Option<String>,

    /// Insert before all existing content
    #[arg(long)]
    pub at_beginning: bool,
}

#[derive(Debug, Args)]
pub struct WriteArgs {
    /// Print the resulting document instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Do not strip trailing whitespace from lines when writing
    #[arg(long)]
    pub keep_trailing_whitespace: bool,
}

#[derive(Debug, Args)]
pub struct ReplaceArgs {
    /// Markdown file to edit
    pub file: PathBuf,

    /// Section title to replace
    #[arg(long, short)]
    pub section: String,

    #[command(flatten)]
    pub content: ContentArgs,

    /// Replace the heading line as well as the body
    #[arg(long)]
    pub replace_heading: bool,

    #[command(flatten)]
    pub write: WriteArgs,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Markdown file to edit
    pub file: PathBuf,

    #[command(flatten)]
    pub content: ContentArgs,

    #[command(flatten)]
    pub placement: PlacementArgs,

    #[command(flatten)]
    pub write: WriteArgs,
}

#[derive(Debug, Args)]
pub struct UpsertArgs {
    /// Markdown file to edit
    pub file: PathBuf,

    /// Section title to replace or insert
    #[arg(long, short)]
    pub section: String,

    #[command(flatten)]
    pub content: ContentArgs,

    /// Replace the heading line as well as the body
    #[arg(long)]
    pub replace_heading: bool,

    #[command(flatten)]
    pub placement: PlacementArgs,

    #[command(flatten)]
    pub write: WriteArgs,
}

fn parse_level(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("heading level starts at 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn main() {
    let cli = Cli::parse();

    let cfg = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("FAIL mdsection {}", cli.command.name());
            eprintln!("{e}");
            if cli.config.is_none() {
                eprintln!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };

    logging::init(&cfg);
    tracing::debug!(command = cli.command.name(), config = ?cfg.source, "starting");

    match cli.command {
        Commands::Doctor => cmd::doctor::run(&cfg),
        Commands::Headings(args) => cmd::headings::run(&args),
        Commands::Find(args) => cmd::find::run(&args),
        Commands::Replace(args) => cmd::edit::replace(&cfg, &args),
        Commands::Add(args) => cmd::edit::add(&cfg, &args),
        Commands::Upsert(args) => cmd::edit::upsert(&cfg, &args),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "mdsection", &mut std::io::stdout());
        }
    }

    logging::shutdown();
}
