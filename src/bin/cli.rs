// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyframe Layout CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polyframe_layout::cli::{
    run_job, run_job_file, DimsJob, JobReport, LayoutJob, OutputConfig, OutputFormat, RectJob,
    Reporter,
};
use polyframe_layout::{
    CenterSpec, DimensionSpec, DistributePattern, GridPattern, ResultPos, StretchPattern,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "polyframe-layout")]
#[command(about = "Polyframe Layout - dimension resolution and sketch layout patterns", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (json, table)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Decimal places in table output
    #[arg(long, global = true)]
    precision: Option<usize>,

    /// Configuration file (defaults to ./layout.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve up to three dimensions (`5` is a size, `-2,3` a range)
    Dims {
        #[arg(required = true, allow_hyphen_values = true, num_args = 1..=3)]
        specs: Vec<DimensionSpec>,

        /// true, false, or axis letters such as XZ
        #[arg(long, default_value = "true")]
        center: CenterSpec,
    },

    /// Corners of a rectangle
    Rect {
        #[arg(long, allow_hyphen_values = true)]
        size_x: DimensionSpec,

        #[arg(long, allow_hyphen_values = true)]
        size_y: DimensionSpec,

        #[arg(long, default_value = "true")]
        center: CenterSpec,
    },

    /// Regular grid of points
    Grid {
        #[arg(long)]
        count_x: usize,

        #[arg(long)]
        count_y: usize,

        #[arg(long)]
        spacing_x: Option<f64>,

        #[arg(long)]
        spacing_y: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        size_x: Option<DimensionSpec>,

        #[arg(long, allow_hyphen_values = true)]
        size_y: Option<DimensionSpec>,

        #[arg(long, default_value = "true")]
        center: CenterSpec,
    },

    /// Fixed-size tiles distributed over a rectangle
    Distribute {
        #[arg(long, allow_hyphen_values = true)]
        size_x: DimensionSpec,

        #[arg(long, allow_hyphen_values = true)]
        size_y: DimensionSpec,

        #[arg(long)]
        tile_x: f64,

        #[arg(long)]
        tile_y: f64,

        #[arg(long)]
        count_x: Option<usize>,

        #[arg(long)]
        count_y: Option<usize>,

        #[arg(long, default_value_t = 0.0)]
        min_spacing_x: f64,

        #[arg(long, default_value_t = 0.0)]
        min_spacing_y: f64,

        /// Report tile centers or min corners (center, origin)
        #[arg(long, default_value = "center")]
        result_pos: ResultPos,

        #[arg(long, default_value = "true")]
        center: CenterSpec,
    },

    /// Tiles stretched to exactly fill a rectangle
    Stretch {
        #[arg(long, allow_hyphen_values = true)]
        size_x: DimensionSpec,

        #[arg(long, allow_hyphen_values = true)]
        size_y: DimensionSpec,

        #[arg(long)]
        count_x: Option<usize>,

        #[arg(long)]
        count_y: Option<usize>,

        /// Minimum tile size on x
        #[arg(long)]
        min_x: Option<f64>,

        /// Maximum tile size on x
        #[arg(long)]
        max_x: Option<f64>,

        /// Minimum tile size on y
        #[arg(long)]
        min_y: Option<f64>,

        /// Maximum tile size on y
        #[arg(long)]
        max_y: Option<f64>,

        #[arg(long, default_value_t = 0.0)]
        spacing_x: f64,

        #[arg(long, default_value_t = 0.0)]
        spacing_y: f64,

        #[arg(long, default_value = "true")]
        center: CenterSpec,
    },

    /// Evaluate every job of a TOML or JSON job file
    Run {
        /// Job file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        Reporter::report_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "polyframe_layout=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = OutputConfig::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }

    let reports = match cli.command {
        Commands::Dims { specs, center } => single(LayoutJob::Dims(DimsJob { specs, center }))?,
        Commands::Rect {
            size_x,
            size_y,
            center,
        } => single(LayoutJob::Rect(RectJob {
            size_x,
            size_y,
            center,
        }))?,
        Commands::Grid {
            count_x,
            count_y,
            spacing_x,
            spacing_y,
            size_x,
            size_y,
            center,
        } => single(LayoutJob::Grid(GridPattern {
            count_x,
            count_y,
            spacing_x,
            spacing_y,
            size_x,
            size_y,
            center,
        }))?,
        Commands::Distribute {
            size_x,
            size_y,
            tile_x,
            tile_y,
            count_x,
            count_y,
            min_spacing_x,
            min_spacing_y,
            result_pos,
            center,
        } => single(LayoutJob::Distribute(DistributePattern {
            size_x,
            size_y,
            tile_size_x: tile_x,
            tile_size_y: tile_y,
            count_x,
            count_y,
            center,
            result_pos,
            min_spacing_x,
            min_spacing_y,
        }))?,
        Commands::Stretch {
            size_x,
            size_y,
            count_x,
            count_y,
            min_x,
            max_x,
            min_y,
            max_y,
            spacing_x,
            spacing_y,
            center,
        } => single(LayoutJob::Stretch(StretchPattern {
            size_x,
            size_y,
            count_x,
            count_y,
            min_tile_size_x: min_x,
            max_tile_size_x: max_x,
            min_tile_size_y: min_y,
            max_tile_size_y: max_y,
            spacing_x,
            spacing_y,
            center,
        }))?,
        Commands::Run { file } => run_job_file(&file)?,
    };

    Reporter::new(&config).report_jobs(&reports)
}

fn single(job: LayoutJob) -> Result<Vec<JobReport>> {
    let kind = job.kind();
    let output = run_job(&job).with_context(|| format!("{} failed", kind))?;
    Ok(vec![JobReport {
        name: kind.to_string(),
        kind,
        output,
    }])
}
