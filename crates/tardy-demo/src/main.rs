// File: crates/tardy-demo/src/main.rs
// Summary: One-shot fetch-and-render: GET the tasks API (or read a JSON file), draw the PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tardy_chart::task::{parse_tasks, points};
use tardy_chart::{theme, RenderOptions, TaskAgeChart};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tardy-demo", about = "Render the task-age bar chart to a PNG")]
struct Args {
    /// Tasks API endpoint to fetch
    #[arg(long, default_value = "http://localhost:12345/api/v1/tasks")]
    url: String,

    /// Read tasks from a local JSON file instead of fetching
    #[arg(long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Output PNG path
    #[arg(long, default_value = "target/out/tardy.png")]
    out: PathBuf,

    /// Theme preset name (dark, light)
    #[arg(long, default_value = "dark")]
    theme: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let body = match &args.file {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => fetch(&args.url)?,
    };

    let tasks = parse_tasks(&body).context("decoding tasks response")?;
    let pts = points(&tasks);
    info!(tasks = tasks.len(), charted = pts.len(), "loaded task data");

    // Render happens exactly once, strictly after the data resolves.
    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&args.theme);
    let chart = TaskAgeChart::new(pts);
    chart
        .render_to_png(&opts, &args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;
    info!(out = %args.out.display(), "wrote chart");

    Ok(())
}

fn fetch(url: &str) -> Result<Vec<u8>> {
    info!(%url, "fetching tasks");
    let resp = reqwest::blocking::get(url)
        .with_context(|| format!("GET {url}"))?
        .error_for_status()
        .context("tasks endpoint returned an error status")?;
    Ok(resp.bytes()?.to_vec())
}
