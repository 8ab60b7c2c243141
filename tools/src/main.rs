use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use client::ClientConfig;
use glob::Pattern;
use mirae_tools::{
    decode_stream, format_decode_pretty, format_inspect_pretty, init_tracing, inspect_stream,
    replay_stream, ReplayReport,
};

#[derive(Parser)]
#[command(
    name = "mirae-tools",
    version,
    about = "mirae stream capture inspection, decoding, and replay"
)]
struct Cli {
    /// Client config JSON (limits, frame format, scrollback size).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level regardless of MIRAE_LOG.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the packets in a capture.
    Inspect {
        /// Capture file, or a directory of captures.
        capture_path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected captures.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected captures (after sorting).
        #[arg(long)]
        limit: Option<usize>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Decode every packet in a capture.
    Decode {
        /// Capture file.
        capture_file: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Feed a capture through the client in fixed-size chunks.
    Replay {
        /// Capture file.
        capture_file: PathBuf,
        /// Chunk size in bytes; 0 feeds the whole capture at once.
        #[arg(long, default_value_t = 0)]
        chunk: usize,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = match &cli.config {
        Some(path) => load_config(path).context("load config")?,
        None => ClientConfig::default(),
    };

    match cli.command {
        Command::Inspect {
            capture_path,
            glob,
            sort,
            limit,
            format,
        } => {
            if capture_path.is_dir() {
                let entries = collect_capture_entries(&capture_path, glob.as_deref())?;
                let mut entries = maybe_sort_entries(entries, sort);
                let limit = limit.or(sort.map(|InspectSort::Size| 10));
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                for entry in entries {
                    println!("== {} ({} bytes) ==", entry.path.display(), entry.size);
                    inspect_file(&entry.path, &config, format)?;
                }
            } else {
                inspect_file(&capture_path, &config, format)?;
            }
        }
        Command::Decode {
            capture_file,
            format,
        } => {
            let bytes = read_capture(&capture_file)?;
            let output = decode_stream(&bytes, &config)?;
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&output).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => print!("{}", format_decode_pretty(&output)),
            }
        }
        Command::Replay {
            capture_file,
            chunk,
            format,
        } => {
            let bytes = read_capture(&capture_file)?;
            let report = replay_stream(&bytes, chunk, &config);
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => print_replay_report(&report),
            }
        }
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<ClientConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    ClientConfig::from_json(&contents).context("parse config json")
}

fn read_capture(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read capture {}", path.display()))
}

fn inspect_file(path: &Path, config: &ClientConfig, format: OutputFormat) -> Result<()> {
    let bytes = read_capture(path)?;
    let report = inspect_stream(&bytes, &config.limits);
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialize json")?;
            println!("{json}");
        }
        OutputFormat::Pretty => print!("{}", format_inspect_pretty(&report)),
    }
    Ok(())
}

struct CaptureEntry {
    path: PathBuf,
    size: u64,
}

fn collect_capture_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<CaptureEntry>> {
    let mut entries = Vec::new();
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push(CaptureEntry { path, size });
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

fn maybe_sort_entries(
    mut entries: Vec<CaptureEntry>,
    sort: Option<InspectSort>,
) -> Vec<CaptureEntry> {
    match sort {
        Some(InspectSort::Size) => {
            entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
        }
        None => {}
    }
    entries
}

fn print_replay_report(report: &ReplayReport) {
    print!("{}", report.log);
    if !report.log.is_empty() && !report.log.ends_with('\n') {
        println!();
    }
    println!("---");
    println!(
        "chunks: {} dispatched: {} buffered: {} bytes",
        report.chunks, report.dispatched, report.buffered
    );
    let counts = report.counts;
    println!(
        "text: {} errors: {} catalogs: {} main frames: {} panel frames: {} minimaps: {}",
        counts.text,
        counts.errors,
        counts.catalogs,
        counts.main_frames,
        counts.panel_frames,
        counts.minimaps
    );
    for reason in &report.discards {
        println!("discarded: {reason}");
    }
}
