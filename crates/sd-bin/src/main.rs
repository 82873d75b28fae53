//! Slidedoctor entrypoint: load the measured DOM and IR documents, run one
//! diagnostics pass, and emit the diagnostics JSON. All layout judgement
//! lives in the library crates; this binary only wires files to the engine.

use anyhow::{Context, Result};
use clap::Parser;
use core_config::EngineConfig;
use core_engine::diagnose;
use core_schema::{DomDocument, IrDocument};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "slidedoctor", version, about = "Slide layout diagnostics")]
struct Args {
    /// Path to the measured DOM document (JSON, extractor output).
    pub dom: PathBuf,
    /// Path to the IR document (JSON).
    pub ir: PathBuf,
    /// Optional configuration file path (overrides discovery of `slidedoctor.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Write the diagnostics document here instead of stdout.
    #[arg(long = "output", short = 'o')]
    pub output: Option<PathBuf>,
    /// Pretty-print the diagnostics JSON.
    #[arg(long)]
    pub pretty: bool,
    /// Append logs to this file instead of stderr.
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

fn configure_logging(log_file: Option<&Path>) -> Option<WorkerGuard> {
    match log_file {
        Some(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let name = path.file_name().map(|n| n.to_owned()).unwrap_or_else(|| "slidedoctor.log".into());
            let file_appender = tracing_appender::rolling::never(dir, name);
            let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
            let installed = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_writer(nb_writer)
                .with_ansi(false)
                .try_init()
                .is_ok();
            // If a global subscriber already exists, drop the guard so the
            // writer shuts down.
            installed.then_some(guard)
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_writer(std::io::stderr)
                .try_init();
            None
        }
    }
}

fn load_documents(args: &Args) -> Result<(DomDocument, IrDocument)> {
    let dom_raw = std::fs::read_to_string(&args.dom)
        .with_context(|| format!("reading DOM document {}", args.dom.display()))?;
    let dom = DomDocument::from_json_str(&dom_raw)
        .with_context(|| format!("parsing DOM document {}", args.dom.display()))?;
    let ir_raw = std::fs::read_to_string(&args.ir)
        .with_context(|| format!("reading IR document {}", args.ir.display()))?;
    let ir = IrDocument::from_json_str(&ir_raw)
        .with_context(|| format!("parsing IR document {}", args.ir.display()))?;
    Ok((dom, ir))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging(args.log_file.as_deref());

    let config: EngineConfig = core_config::load_from(args.config.clone())?;
    let (dom, ir) = load_documents(&args)?;
    info!(
        target: "runtime.startup",
        dom = %args.dom.display(),
        ir = %args.ir.display(),
        elements = dom.elements.len(),
        "documents_loaded"
    );

    let diag = diagnose(&dom, &ir, &config);
    let json = if args.pretty {
        diag.to_json_string_pretty()?
    } else {
        diag.to_json_string()?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("writing diagnostics to {}", path.display()))?;
            info!(target: "runtime", output = %path.display(), "diagnostics_written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
