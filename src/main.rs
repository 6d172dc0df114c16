//! ip-kpis: metadata quality scoring and KPI reporting for hardware IP
//! repositories.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use ip_kpis::{
    cli,
    config::{self, AppConfig, ConfigPreset},
    model::METADATA_FILE_NAME,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ip-kpis")]
#[command(version)]
#[command(about = "Metadata quality scoring and KPI reporting for hardware IP repositories", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Metadata score below --min-score
    2  Metadata not catalog-ready with --require-ready
    3  Error occurred

EXAMPLES:
    # KPI report for the current project
    ip-kpis analyze --detailed

    # Text report scraped by the pages generator
    ip-kpis analyze -O code_kpis.txt --no-color

    # CI gate on metadata quality
    ip-kpis metadata vyges-metadata.json --min-score 80 --require-ready

    # Comprehensive Markdown report into reports/
    ip-kpis report")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `analyze` subcommand
#[derive(Parser)]
struct AnalyzeArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    /// Include largest files, module sizes and tool mentions
    #[arg(long)]
    detailed: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `metadata` subcommand
#[derive(Parser)]
struct MetadataArgs {
    /// Metadata file to score
    #[arg(default_value = METADATA_FILE_NAME)]
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 below this overall score
    #[arg(long)]
    min_score: Option<f64>,

    /// Exit with code 2 unless the metadata is catalog-ready
    #[arg(long)]
    require_ready: bool,
}

/// Arguments for the `report` subcommand
#[derive(Parser)]
struct ReportArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    /// Directory reports are written into
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Gate analysis report to summarize
    #[arg(long)]
    gate_report: Option<PathBuf>,

    /// Only write code_kpis.json
    #[arg(long)]
    kpis_only: bool,
}

/// Arguments for the `pages` subcommand
#[derive(Parser)]
struct PagesArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    /// Page template
    #[arg(long)]
    template: Option<PathBuf>,

    /// Generated page
    #[arg(short = 'O', long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a project tree and print its KPIs
    Analyze(AnalyzeArgs),

    /// Score a vyges-metadata.json file
    Metadata(MetadataArgs),

    /// Write the comprehensive analysis report
    Report(ReportArgs),

    /// Generate the project landing page from its template
    Pages(PagesArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print config file search paths and the discovered file
    Path,
    /// Write an example .ip-kpis.yaml in the current directory
    Init {
        /// Start from a preset: default, ci, catalog
        #[arg(long)]
        preset: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Analyze(args) => {
            let mut config = effective_config(&cli.config, cli.no_color)?;
            if let Some(format) = args.output {
                config.output.format = format;
            }
            config.analysis.detailed |= args.detailed;
            cli::run_analyze(args.project_root, &config, args.output_file, cli.quiet)
        }

        Commands::Metadata(args) => {
            let mut config = effective_config(&cli.config, cli.no_color)?;
            if let Some(format) = args.output {
                config.output.format = format;
            }
            if args.min_score.is_some() {
                config.scoring.min_score = args.min_score;
            }
            config.scoring.require_ready |= args.require_ready;
            check_config(&config)?;
            cli::run_metadata(args.file, &config, args.output_file, cli.quiet)
        }

        Commands::Report(args) => {
            let mut config = effective_config(&cli.config, cli.no_color)?;
            if let Some(dir) = args.output_dir {
                config.report.output_dir = dir;
            }
            if args.gate_report.is_some() {
                config.report.gate_report = args.gate_report;
            }
            cli::run_report(args.project_root, &config, args.kpis_only, cli.quiet)
        }

        Commands::Pages(args) => {
            let mut config = effective_config(&cli.config, cli.no_color)?;
            if let Some(template) = args.template {
                config.pages.template = template;
            }
            if let Some(output) = args.output {
                config.pages.output = output;
            }
            cli::run_pages(args.project_root, &config, cli.quiet)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "ip-kpis", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                match &loaded_from {
                    Some(path) => eprintln!("# Loaded from: {}", path.display()),
                    None => eprintln!("# No config file found; showing defaults"),
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                if let Ok(cwd) = std::env::current_dir() {
                    eprintln!("  {}", cwd.display());
                }
                eprintln!("  <git work tree root>");
                if let Some(dir) = config::user_config_dir() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init { preset } => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".ip-kpis.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = match preset.as_deref() {
                    None => config::generate_full_example_config(),
                    Some(name) => {
                        let preset = ConfigPreset::from_name(name).with_context(|| {
                            let names: Vec<_> =
                                ConfigPreset::all().iter().map(ConfigPreset::name).collect();
                            format!("Unknown preset '{name}'. Valid options: {}", names.join(", "))
                        })?;
                        config::generate_example_config(&AppConfig::from_preset(preset))
                    }
                };
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

/// Config file settings with the global `--no-color` flag applied
fn effective_config(path: &Option<PathBuf>, no_color: bool) -> Result<AppConfig> {
    let (mut config, _) = config::load_or_default(path.as_deref());
    config.output.no_color |= no_color;
    check_config(&config)?;
    Ok(config)
}

fn check_config(config: &AppConfig) -> Result<()> {
    config::ensure_valid(config)?;
    Ok(())
}
