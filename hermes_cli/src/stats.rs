use std::path::PathBuf;

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use hermes_simplify::{RoadNetwork, distance::Kilometers};
use serde_json::json;

use crate::file_utils::read_records;

#[derive(Args)]
pub struct StatsArgs {
    /// GeoJSON or CSV edge file, or a folder of them
    #[arg(short, long)]
    input: PathBuf,

    /// Print the statistics as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default)]
struct NetworkStats {
    records: usize,
    nodes: usize,
    edges: usize,
    length_km: f64,
    dead_ends: usize,
    pass_through: usize,
    junctions: usize,
    loops: usize,
    stubs: usize,
    min_visits: u64,
    max_visits: u64,
    mean_visits: f64,
}

impl NetworkStats {
    fn of(network: &RoadNetwork, records: usize) -> Self {
        let mut stats = NetworkStats {
            records,
            nodes: network.node_count(),
            edges: network.edge_count(),
            length_km: network.total_length().convert::<Kilometers>().value(),
            min_visits: u64::MAX,
            ..NetworkStats::default()
        };

        for node in network.node_ids() {
            match network.degree(node) {
                1 => stats.dead_ends += 1,
                2 => stats.pass_through += 1,
                0 => {}
                _ => stats.junctions += 1,
            }
        }

        let mut total_visits = 0;
        for (edge_id, edge) in network.main_edges() {
            if edge.is_loop() {
                stats.loops += 1;
            }
            if network.is_stub(edge_id) {
                stats.stubs += 1;
            }
            stats.min_visits = stats.min_visits.min(edge.visits());
            stats.max_visits = stats.max_visits.max(edge.visits());
            total_visits += edge.visits();
        }

        if stats.edges == 0 {
            stats.min_visits = 0;
        } else {
            stats.mean_visits = total_visits as f64 / stats.edges as f64;
        }

        stats
    }

    fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec!["", "Value"]);

        table.add_row(vec![String::from("Records"), self.records.to_string()]);
        table.add_row(vec![String::from("Nodes"), self.nodes.to_string()]);
        table.add_row(vec![String::from("Edges"), self.edges.to_string()]);
        table.add_row(vec![
            String::from("Length"),
            format!("{:.3} km", self.length_km),
        ]);
        table.add_row(vec![String::from("Dead ends"), self.dead_ends.to_string()]);
        table.add_row(vec![
            String::from("Pass-through nodes"),
            self.pass_through.to_string(),
        ]);
        table.add_row(vec![String::from("Junctions"), self.junctions.to_string()]);
        table.add_row(vec![String::from("Loops"), self.loops.to_string()]);
        table.add_row(vec![String::from("Stubs"), self.stubs.to_string()]);
        table.add_row(vec![
            String::from("Visits"),
            format!(
                "{} / {:.1} / {}",
                self.min_visits, self.mean_visits, self.max_visits
            ),
        ]);

        table
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "records": self.records,
            "nodes": self.nodes,
            "edges": self.edges,
            "length_km": self.length_km,
            "dead_ends": self.dead_ends,
            "pass_through": self.pass_through,
            "junctions": self.junctions,
            "loops": self.loops,
            "stubs": self.stubs,
            "visits": {
                "min": self.min_visits,
                "mean": self.mean_visits,
                "max": self.max_visits,
            },
        })
    }
}

pub fn run(args: StatsArgs) -> Result<(), anyhow::Error> {
    let records = read_records(&args.input)?;
    let record_count = records.len();
    let network = RoadNetwork::from_records(records)?;

    let stats = NetworkStats::of(&network, record_count);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats.to_json())?);
    } else {
        println!("{}", stats.to_table());
    }

    Ok(())
}
