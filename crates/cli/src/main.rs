use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plr::{fit, PiecewiseLinear, Point, Segment};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod signal;

use provenance::{write_sidecar, Payload};
use signal::{ReplayToken, SignalCfg};

#[derive(Parser)]
#[command(name = "plr")]
#[command(about = "Greedy piecewise-linear segmentation of ordered samples")]
struct Cmd {
    /// Optional run label; propagated to logs and provenance
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Segment points read from a CSV or Parquet table
    Fit {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 0.0005)]
        gamma: f64,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value = "x")]
        x_col: String,
        #[arg(long, default_value = "y")]
        y_col: String,
    },
    /// Segment the sin(x) demo signal
    Demo {
        #[arg(long, default_value_t = 0.0005)]
        gamma: f64,
        #[arg(long, default_value_t = 1000)]
        n: usize,
        #[arg(long, default_value_t = 7.0, allow_negative_numbers = true)]
        x_max: f64,
        /// Uniform noise amplitude added to each sample
        #[arg(long, default_value_t = 0.0)]
        noise: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Written to `--out`.
#[derive(Serialize)]
struct FitOutput<'a> {
    gamma: f64,
    points: usize,
    segments: &'a [Segment],
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Fit {
            input,
            gamma,
            out,
            x_col,
            y_col,
        } => run_fit(&input, gamma, &out, &x_col, &y_col, cmd.tag),
        Action::Demo {
            gamma,
            n,
            x_max,
            noise,
            seed,
            out,
        } => {
            let cfg = SignalCfg { n, x_max, noise };
            run_demo(cfg, seed, gamma, &out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn run_fit(
    input: &Path,
    gamma: f64,
    out: &Path,
    x_col: &str,
    y_col: &str,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input = %input.display(), gamma, tag = ?tag, "fit");
    let points = input::read_points(input, x_col, y_col)?;
    input::check_ordered(&points)?;
    let model = segment(&points, gamma)?;
    write_output(out, gamma, &points, &model)?;
    let params = json!({
        "input": input.to_string_lossy(),
        "gamma": gamma,
        "x_col": x_col,
        "y_col": y_col,
    });
    let payload = Payload::new(params)
        .with_summary(summarize(&points, &model))
        .with_tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

fn run_demo(cfg: SignalCfg, seed: u64, gamma: f64, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(n = cfg.n, x_max = cfg.x_max, noise = cfg.noise, seed, gamma, tag = ?tag, "demo");
    let points = signal::sine(cfg, ReplayToken { seed, index: 0 })?;
    let model = segment(&points, gamma)?;
    write_output(out, gamma, &points, &model)?;
    let params = json!({
        "signal": "sin",
        "n": cfg.n,
        "x_max": cfg.x_max,
        "noise": cfg.noise,
        "seed": seed,
        "gamma": gamma,
    });
    let payload = Payload::new(params)
        .with_summary(summarize(&points, &model))
        .with_tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

fn segment(points: &[Point], gamma: f64) -> Result<PiecewiseLinear> {
    let segments = fit(points.iter().copied(), gamma).context("segmenting points")?;
    let model = PiecewiseLinear::try_new(segments).context("building model")?;
    tracing::info!(
        points = points.len(),
        segments = model.len(),
        ratio = model.compression_ratio(points.len()),
        "segmented"
    );
    Ok(model)
}

fn summarize(points: &[Point], model: &PiecewiseLinear) -> serde_json::Value {
    json!({
        "points": points.len(),
        "segments": model.len(),
        "compression_ratio": model.compression_ratio(points.len()),
        "max_abs_error": model.max_abs_error(points),
    })
}

fn write_output(out: &Path, gamma: f64, points: &[Point], model: &PiecewiseLinear) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let doc = FitOutput {
        gamma,
        points: points.len(),
        segments: model.segments(),
    };
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "plr_version": plr::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
