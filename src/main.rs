use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use enum_gen::asset::EnumAsset;
use enum_gen::config::{Config, DEFAULT_CONFIG_FILE};
use enum_gen::output::{write_enum, AssetDirSink, GenerateAmount, OutputSink};
use enum_gen::{check, scanner, EnumGenerator};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "enum-gen")]
#[command(about = "Generate C# enum declarations from editable enum assets")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Enum assets to process instead of the configured sources
    assets: Vec<PathBuf>,

    /// Validate only, never write generated files
    #[arg(long)]
    check: bool,

    /// How validation results are reported
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    /// One JSON object per asset on stdout
    Json,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Asset files named on the command line, or found through the config sources
fn collect_assets(cli: &Cli, config: &Config) -> Result<Vec<PathBuf>> {
    if !cli.assets.is_empty() {
        for path in &cli.assets {
            if !path.is_file() {
                anyhow::bail!("Enum asset not found: {:?}", path);
            }
        }
        return Ok(cli.assets.clone());
    }

    let project_root = cli.config.parent().unwrap_or_else(|| Path::new("."));
    let files = scanner::collect_sources(project_root, &config.sources)
        .with_context(|| format!("Failed to scan sources from {:?}", cli.config))?;
    Ok(files)
}

/// Returns the number of assets that failed validation
fn run_generation(cli: &Cli, config: &Config) -> Result<usize> {
    let start = Instant::now();
    let text = cli.report == ReportFormat::Text;

    if text {
        println!("Enum Generator v{}", env!("CARGO_PKG_VERSION"));
        println!("{}", "=".repeat(50));
        println!("\n[1/3] Scanning assets...");
    }
    let files = collect_assets(cli, config)?;
    if text {
        println!("  Found {} enum assets", files.len());
    }
    tracing::debug!(count = files.len(), "scanned enum assets");

    if text {
        println!("\n[2/3] Loading assets...");
    }
    let assets: Vec<(PathBuf, EnumAsset)> = files
        .par_iter()
        .map(|path| EnumAsset::load(path).map(|asset| (path.clone(), asset)))
        .collect::<Result<_, _>>()?;

    let specs: Vec<_> = assets
        .into_iter()
        .map(|(path, asset)| {
            tracing::debug!(asset = %path.display(), kind = asset.values.kind(), "loaded");
            let sink = AssetDirSink::with_extension(&path, config.output.extension.as_str());
            (path, sink, asset.into_specification())
        })
        .collect();

    let amount = GenerateAmount::from_overwrites(
        specs.iter().map(|(_, sink, spec)| sink.will_overwrite(spec)),
    );
    tracing::debug!(mode = %amount, "selection state");

    if text {
        println!(
            "\n[3/3] {}...",
            if cli.check { "Validating" } else { amount.label() }
        );
    }
    let generator = EnumGenerator::new();
    let mut invalid = 0;
    let mut written = 0;

    for (path, sink, spec) in &specs {
        let (messages, output) = match check(spec) {
            Ok(validated) => {
                if cli.check {
                    tracing::info!("{} is valid", path.display());
                    (Vec::new(), None)
                } else {
                    let output = write_enum(sink, &generator, &validated)
                        .with_context(|| format!("Failed to generate enum for {:?}", path))?;
                    written += 1;
                    (Vec::new(), Some(output))
                }
            }
            Err(report) => {
                invalid += 1;
                let messages = report.messages();
                for message in &messages {
                    tracing::error!(asset = %path.display(), "{}", message);
                }
                (messages, None)
            }
        };

        if cli.report == ReportFormat::Json {
            let entry = serde_json::json!({
                "path": path.display().to_string(),
                "ok": messages.is_empty(),
                "errors": messages,
                "output": output.map(|p| p.display().to_string()),
            });
            println!("{}", entry);
        }
    }

    if text {
        println!("\n{}", "=".repeat(50));
        println!(
            "Done! {} valid, {} invalid, {} file(s) written in {:?}",
            specs.len() - invalid,
            invalid,
            written,
            start.elapsed()
        );
    }

    Ok(invalid)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = if cli.assets.is_empty() || cli.config.exists() {
        Config::load(&cli.config)
            .with_context(|| format!("Failed to load config from {:?}", cli.config))?
    } else {
        Config::default()
    };

    let invalid = run_generation(&cli, &config)?;
    if invalid > 0 {
        std::process::exit(1);
    }

    Ok(())
}
