use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use plantopo::{
    noding::{
        FastNodingValidator, IntersectionAdder, McIndexNoder, NodedSegmentString, Noder,
        ScaledNoder, SegmentString, SimpleNoder, SimpleSnapRounder,
    },
    valid::NestedRingTesterKind,
    Coord, Geometry, IsValidOp, ValidOptions, ValidationError,
};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plantopo")]
#[command(about = "Checks polygon validity and nodes line work")]
struct Cmd {
    /// Log at debug level (RUST_LOG overrides this).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Check a JSON geometry, or array of geometries, for validity
    Validate {
        file: PathBuf,

        /// Accept rings that touch themselves to enclose a hole
        #[arg(long)]
        self_touching_rings_form_holes: bool,

        #[arg(long, value_enum)]
        nested_ring_tester: Option<TesterArg>,

        /// JSON file of validity options; flags take precedence
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Node a JSON array of coordinate arrays
    Node {
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = NoderArg::McIndex)]
        noder: NoderArg,

        /// Grid cells per unit, for snap rounding
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TesterArg {
    Simple,
    Sweepline,
}

impl From<TesterArg> for NestedRingTesterKind {
    fn from(t: TesterArg) -> Self {
        match t {
            TesterArg::Simple => NestedRingTesterKind::Simple,
            TesterArg::Sweepline => NestedRingTesterKind::Sweepline,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum NoderArg {
    McIndex,
    Simple,
    SnapRound,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Input {
    One(Geometry),
    Many(Vec<Geometry>),
}

#[derive(Serialize)]
struct Report {
    valid: bool,
    error: Option<ValidationError>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let default_level = if cmd.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cmd.action {
        Action::Validate {
            file,
            self_touching_rings_form_holes,
            nested_ring_tester,
            config,
        } => {
            let mut options = match config {
                Some(path) => read_json::<ValidOptions>(&path)?,
                None => ValidOptions::default(),
            };
            if self_touching_rings_form_holes {
                options = options.self_touching_ring_forming_hole_valid(true);
            }
            if let Some(t) = nested_ring_tester {
                options = options.nested_ring_tester(t.into());
            }
            validate(&file, options)
        }
        Action::Node { file, noder, scale } => node(&file, noder, scale),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn validate(file: &Path, options: ValidOptions) -> Result<()> {
    let geoms = match read_json::<Input>(file)? {
        Input::One(g) => vec![g],
        Input::Many(gs) => gs,
    };
    tracing::debug!(geometries = geoms.len(), ?options, "validating");
    for g in &geoms {
        let error = IsValidOp::with_options(g, options).validation_error()?;
        let report = Report {
            valid: error.is_none(),
            error,
        };
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}

fn node(file: &Path, noder: NoderArg, scale: f64) -> Result<()> {
    let lines: Vec<Vec<Coord>> = read_json(file)?;
    let strings: Vec<NodedSegmentString> = lines
        .into_iter()
        .map(|pts| NodedSegmentString::new(pts, ()))
        .collect();

    let mut noder: Box<dyn Noder<()>> = match noder {
        NoderArg::McIndex => Box::new(McIndexNoder::new(IntersectionAdder::default())),
        NoderArg::Simple => Box::new(SimpleNoder::new(IntersectionAdder::default())),
        NoderArg::SnapRound => Box::new(ScaledNoder::new(SimpleSnapRounder::new(1.0), scale)),
    };
    let noded = noder.node(strings);
    if let Err(e) = FastNodingValidator::new().check_valid(&noded) {
        tracing::warn!("output is not fully noded: {e}");
    }

    let out: Vec<&[Coord]> = noded.iter().map(|s| s.coordinates()).collect();
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
