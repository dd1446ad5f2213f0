use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use socmed_normalizer::{
    render_documents, render_summary, save_parsed_results, tag_source, write_summary_report,
    Normalizer, NormalizerConfig,
};
use socmed_types::SummaryReport;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "socmed-normalize",
    version,
    about = "Normalize raw social media API responses into canonical documents"
)]
struct Cli {
    /// Config file to use instead of the one in the user config directory
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    log_file_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse one response file and print its documents as JSON
    Parse {
        file: PathBuf,

        /// Platform name; detected from the file name when omitted
        #[arg(long)]
        platform: Option<String>,

        /// Add a source_socmed field to every document
        #[arg(long)]
        tag: bool,
    },
    /// Parse every configured platform, then save documents and the summary report
    Batch {
        #[arg(long, value_name = "DIR")]
        input_dir: Option<PathBuf>,

        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },
    /// Print a summary over response files, detecting each platform from its name
    Summary {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file_path.as_deref());

    let normalizer = Normalizer::default();

    match cli.command {
        Command::Parse {
            file,
            platform,
            tag,
        } => {
            let (config, _) = load_config(cli.config.as_deref())?;
            let (platform, documents) = normalizer
                .parse_file(&file, platform.as_deref())
                .with_context(|| format!("Failed to parse {:?}", file))?;
            info!("Parsed {} {} documents", documents.len(), platform);

            let documents = if tag {
                tag_source(documents).context("Failed to tag documents")?
            } else {
                documents
            };

            println!("{}", render_documents(&documents, config.output.format())?);
        }
        Command::Batch {
            input_dir,
            output_dir,
        } => {
            let (config, config_path) = load_config(cli.config.as_deref())?;
            let plan = config
                .batch_plan(normalizer.registry())
                .with_context(|| format!("Invalid platforms in config at {:?}", config_path))?;

            let input_dir = input_dir.unwrap_or_else(|| config.input.dir.clone());
            let output_dir = output_dir.unwrap_or_else(|| config.output.dir.clone());
            info!("Parsing {} platforms from {:?}", plan.len(), input_dir);

            let results = normalizer.parse_all(&input_dir, &plan);
            let written = save_parsed_results(&results, &output_dir, config.output.format())
                .with_context(|| format!("Failed to save parsed results to {:?}", output_dir))?;

            let report = SummaryReport::from_results(&results);
            let report_path = output_dir.join("summary_report.json");
            write_summary_report(&report, &report_path, config.output.pretty)
                .with_context(|| format!("Failed to write {:?}", report_path))?;

            info!(
                "Wrote {} result files and {:?}",
                written.len(),
                report_path
            );
            print!("{}", render_summary(&report));
        }
        Command::Summary { files } => {
            let results = normalizer.parse_files(&files);
            if results.is_empty() {
                anyhow::bail!("None of the {} files could be parsed", files.len());
            }

            print!("{}", render_summary(&SummaryReport::from_results(&results)));
        }
    }

    Ok(())
}

/// Console logs go to stderr so JSON on stdout stays clean
fn init_tracing(log_file_path: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("socmed-normalize.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn load_config(path: Option<&Path>) -> Result<(NormalizerConfig, PathBuf)> {
    match path {
        Some(path) => {
            let config = NormalizerConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {:?}", path))?;
            Ok((config, path.to_path_buf()))
        }
        None => NormalizerConfig::load().context("Failed to load normalizer config"),
    }
}
