mod batch;
mod error;
mod input;
mod model;
mod parser;
mod preview;
mod render;
mod settings;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use render::RenderOptions;
use settings::{OutputFormat, Settings};

#[derive(Parser, Debug)]
#[command(name = "report_parser", about = "Segment analysis reports and preview CSV files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a report into sections with verdicts and explanations
    Segment {
        /// Report file (reads stdin when omitted or "-")
        path: Option<PathBuf>,
        /// Print the parsed document as JSON
        #[arg(long)]
        json: bool,
        /// Input is an analysis response payload ({"isGood", "reason"})
        #[arg(long)]
        response: bool,
        /// Show every section's explanation
        #[arg(long)]
        expand_all: bool,
        /// Title printed above the sections
        #[arg(long)]
        title: Option<String>,
    },
    /// Preview the first rows of a CSV file
    Preview {
        path: PathBuf,
        /// Print the preview as JSON
        #[arg(long)]
        json: bool,
        /// Line budget including the header (max 8)
        #[arg(short = 'n', long)]
        lines: Option<usize>,
    },
    /// Segment every .md/.txt report in a directory, as JSON lines
    Batch {
        dir: PathBuf,
        /// Write records here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let settings = Settings::load().context("invalid REPORT_* settings")?;
    info!(settings_loaded = ?settings, msg = "Starting report parser");

    match cli.command {
        Commands::Segment {
            path,
            json,
            response,
            expand_all,
            title,
        } => {
            let text = input::read_report(path.as_deref())?;
            let (content, banner) = if response {
                let resp = input::decode_response(&text)?;
                let banner = render::website_banner(&resp);
                (resp.reason, Some(banner))
            } else {
                (text, None)
            };

            let doc = parser::segment(&content);
            info!(
                sections = doc.sections.len(),
                has_summary = doc.overall_assessment.is_some(),
                "Segmented report"
            );

            if json || settings.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                let opts = RenderOptions {
                    title: title.unwrap_or_else(|| settings.title.clone()),
                    expanded: settings.expanded,
                    expand_all,
                };
                if let Some(banner) = banner {
                    print!("{}", banner);
                }
                print!("{}", render::render_report(&content, &doc, &opts));
            }
        }
        Commands::Preview { path, json, lines } => {
            let raw = input::read_file(&path)?;
            let budget = lines.or_else(|| {
                Some(settings.preview_lines).filter(|n| *n != preview::PREVIEW_LINE_LIMIT)
            });
            let table = match budget {
                Some(n) => preview::PreviewParser::with_max_lines(n).parse(&raw),
                None => preview::preview_rows(&raw),
            };
            info!(rows = table.rows.len(), columns = table.headers.len(), "Built preview");

            if json || settings.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                print!("{}", render::render_preview(&table));
            }
        }
        Commands::Batch { dir, output } => {
            let files = input::report_files(&dir)?;
            info!("Segmenting {} reports from {}", files.len(), dir.display());

            let stats = match output {
                Some(out_path) => {
                    let file = File::create(&out_path)
                        .with_context(|| format!("failed to create {}", out_path.display()))?;
                    let mut writer = BufWriter::new(file);
                    batch::run(&files, &mut writer)?
                }
                None => {
                    let stdout = io::stdout();
                    let mut lock = stdout.lock();
                    let stats = batch::run(&files, &mut lock)?;
                    lock.flush()?;
                    stats
                }
            };
            stats.log();
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        info!("Done in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}
