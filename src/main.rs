use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use kgroup::point_set::LabelMode;
use kgroup::report::write_groups_file;
use kgroup::timing::{timed, Phase, PhaseTimings};
use kgroup::{PointSet, SpanningForestClustering};

/// kgroup - Partition points into exactly K groups
///
/// Points are joined along the shortest distances first (Kruskal on the complete graph)
/// until K groups remain. Output has one line per group with comma-separated member names.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Point file: one point per line, optional leading label, coordinates separated by
    /// commas or whitespace
    #[clap(value_name = "INPUT")]
    input: PathBuf,

    /// Number of groups to produce (1 <= K <= number of points)
    #[clap(value_name = "K")]
    k: usize,

    /// Output file for the groups
    #[clap(value_name = "OUTPUT")]
    output: PathBuf,

    /// Treat the first field of every record as the point's label, even when numeric
    #[clap(long = "labelled", conflicts_with = "unlabelled")]
    labelled: bool,

    /// Treat every field as a coordinate
    #[clap(long = "unlabelled")]
    unlabelled: bool,

    /// Print per-phase timings to stderr
    #[clap(long = "timings")]
    timings: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[clap(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn label_mode(&self) -> LabelMode {
        if self.labelled {
            LabelMode::Labelled
        } else if self.unlabelled {
            LabelMode::Unlabelled
        } else {
            LabelMode::Auto
        }
    }
}

fn init_logging(args: &Args) {
    let level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage errors exit 1; --help and --version exit 0.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    init_logging(&args);

    let mut timings = PhaseTimings::new();

    let points = timed(&mut timings, Phase::Load, || {
        PointSet::from_path(&args.input, args.label_mode())
    })?;
    info!(
        "read {} points of dimension {} from {}",
        points.len(),
        points.dim(),
        args.input.display()
    );

    // Reject K before any edge work and before the output file is created.
    let clustering = SpanningForestClustering::new(args.k);
    clustering
        .validate(&points)
        .with_context(|| format!("cannot split {} into {} groups", args.input.display(), args.k))?;

    let result = clustering.run(&points, &mut timings)?;

    timed(&mut timings, Phase::Emit, || {
        write_groups_file(&args.output, &result.groups, &points)
    })?;
    info!(
        "wrote {} groups to {}",
        result.groups.len(),
        args.output.display()
    );

    if args.timings {
        eprint!("{}", timings.report());
    }

    Ok(())
}
