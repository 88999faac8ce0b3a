use std::path::PathBuf;

use clap::Args;
use hermes_simplify::{
    SimplifyParams, distance::Kilometers, io::write_records_to_path, simplify_records,
};
use tracing::info;

use crate::{file_utils::read_records, parsers};

#[derive(Args)]
pub struct SimplifyArgs {
    /// GeoJSON or CSV edge file, or a folder of them
    #[arg(short, long)]
    input: PathBuf,

    /// GeoJSON file receiving the simplified edges
    #[arg(short, long)]
    output: PathBuf,

    /// Remove edges visited fewer times than this
    #[arg(long, env = "HERMES_MIN_VISITS", value_parser = parsers::parse_threshold)]
    min_visits: Option<f64>,

    /// Skip the degree two merge pass
    #[arg(long)]
    no_merge: bool,

    /// Keep dead ends
    #[arg(long)]
    keep_stubs: bool,

    /// Fold edges recorded in both directions into one, summing their visits
    #[arg(long)]
    combine_opposite: bool,

    /// Do not split edges at interior vertices shared with other edges
    #[arg(long)]
    no_noding: bool,

    /// JSON file with the simplification parameters, flags take precedence
    #[arg(long, env = "HERMES_SIMPLIFY_CONFIG")]
    config: Option<PathBuf>,
}

impl SimplifyArgs {
    fn params(&self) -> Result<SimplifyParams, anyhow::Error> {
        let mut params = match &self.config {
            Some(path) => SimplifyParams::from_json_file(path)?,
            None => SimplifyParams::default(),
        };

        if self.min_visits.is_some() {
            params.min_visits = self.min_visits;
        }
        if self.no_merge {
            params.merge_degree_two = false;
        }
        if self.keep_stubs {
            params.remove_stubs = false;
        }
        if self.combine_opposite {
            params.combine_opposite_directions = true;
        }
        if self.no_noding {
            params.node_lines = false;
        }

        Ok(params)
    }
}

pub fn run(args: SimplifyArgs) -> Result<(), anyhow::Error> {
    let params = args.params()?;
    info!("Simplifying {:?} with {:?}", args.input, params);

    let records = read_records(&args.input)?;
    let (simplified, report) = simplify_records(records, &params)?;

    write_records_to_path(&args.output, &simplified)?;

    info!(
        "Simplified {} edges into {} ({} -> {}) in {:?}, written to {:?}",
        report.before.edges,
        report.after.edges,
        report.before.length.convert::<Kilometers>(),
        report.after.length.convert::<Kilometers>(),
        report.elapsed,
        args.output
    );

    Ok(())
}
