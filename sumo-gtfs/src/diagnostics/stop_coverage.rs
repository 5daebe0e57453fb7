use crate::{
    mapping::StopNodeLookup,
    network::NodeId,
    route::coverage_percent,
    schedule::{distinct_stop_ids, StopId, TripStopSequences},
    table::{self, TableError},
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

const SAMPLE_NODES: usize = 5;

/// row of the unmapped stops table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UnmappedStopRow {
    pub stop_id: String,
}

impl UnmappedStopRow {
    pub const HEADERS: [&'static str; 1] = ["stop_id"];
}

/// share of the stops referenced by a schedule that have a node mapping.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StopCoverage {
    pub schedule_stops: usize,
    pub mapped_stops: usize,
    /// stops both referenced by the schedule and mapped to a node
    pub covered_stops: usize,
    /// schedule stops without a node mapping, in ascending order
    pub unmapped_stops: Vec<StopId>,
    /// nodes matched by more than one stop, with those stops in ascending order.
    /// consecutive stops on the same node collapse into one routing point.
    pub duplicate_nodes: BTreeMap<NodeId, Vec<StopId>>,
}

impl StopCoverage {
    pub fn new(trips: &TripStopSequences, lookup: &StopNodeLookup) -> StopCoverage {
        let schedule_stops: BTreeSet<&StopId> = distinct_stop_ids(trips);
        let unmapped_stops: Vec<StopId> = schedule_stops
            .iter()
            .filter(|stop_id| lookup.get(stop_id).is_none())
            .map(|stop_id| (*stop_id).clone())
            .collect();

        let mut stops_by_node: BTreeMap<NodeId, Vec<StopId>> = BTreeMap::new();
        for (stop_id, node_id) in lookup.iter() {
            stops_by_node
                .entry(node_id.clone())
                .or_default()
                .push(stop_id.clone());
        }
        let duplicate_nodes = stops_by_node
            .into_iter()
            .filter(|(_, stops)| stops.len() > 1)
            .map(|(node_id, mut stops)| {
                stops.sort();
                (node_id, stops)
            })
            .collect();

        StopCoverage {
            schedule_stops: schedule_stops.len(),
            mapped_stops: lookup.len(),
            covered_stops: schedule_stops.len() - unmapped_stops.len(),
            unmapped_stops,
            duplicate_nodes,
        }
    }

    pub fn coverage_percent(&self) -> f64 {
        coverage_percent(self.covered_stops, self.schedule_stops)
    }

    pub fn log(&self) {
        log::info!("distinct stops in schedule: {}", self.schedule_stops);
        log::info!("distinct stops with a node: {}", self.mapped_stops);
        log::info!("schedule stops with a node: {}", self.covered_stops);
        log::info!("stop coverage: {:.2}%", self.coverage_percent());
        if !self.unmapped_stops.is_empty() {
            log::warn!(
                "{} schedule stops have no node, e.g. {}",
                self.unmapped_stops.len(),
                self.unmapped_stops[0]
            );
        }
        log::info!("nodes shared by several stops: {}", self.duplicate_nodes.len());
        for (node_id, stops) in self.duplicate_nodes.iter().take(SAMPLE_NODES) {
            log::warn!(
                "  node {node_id} is matched by {} stops: {}",
                stops.len(),
                stops.iter().join(", ")
            );
        }
    }

    /// writes the schedule stops without a node as a one column `stop_id` table.
    pub fn write_unmapped(&self, filepath: &Path, overwrite: bool) -> Result<bool, TableError> {
        let rows = self.unmapped_stops.iter().map(|s| UnmappedStopRow {
            stop_id: s.to_string(),
        });
        table::write_rows(filepath, &UnmappedStopRow::HEADERS, rows, overwrite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::read_trip_stop_sequences;
    use std::path::PathBuf;

    fn fixture_coverage() -> StopCoverage {
        let test_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join("test");
        let trips =
            read_trip_stop_sequences(&test_dir.join("stop_times.txt"), ":").expect("trips load");
        let lookup =
            StopNodeLookup::from_file(&test_dir.join("stop_nodes.csv"), ":").expect("lookup loads");
        StopCoverage::new(&trips, &lookup)
    }

    #[test]
    fn test_stop_coverage_of_fixtures() {
        let coverage = fixture_coverage();
        assert_eq!(coverage.schedule_stops, 6);
        assert_eq!(coverage.mapped_stops, 7);
        assert_eq!(coverage.covered_stops, 5);
        assert_eq!(coverage.unmapped_stops, vec![StopId::from("SQ")]);
        assert!((coverage.coverage_percent() - 500.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_nodes_of_fixtures() {
        let coverage = fixture_coverage();
        assert_eq!(coverage.duplicate_nodes.len(), 1);
        assert_eq!(
            coverage.duplicate_nodes.get(&NodeId::from("C")),
            Some(&vec![StopId::from("SC"), StopId::from("SG")])
        );
    }

    #[test]
    fn test_write_unmapped_stops() {
        let coverage = fixture_coverage();
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("unmapped_stops.csv");
        assert!(coverage.write_unmapped(&output, false).expect("write succeeds"));
        let contents = std::fs::read_to_string(&output).expect("file exists");
        assert_eq!(contents, "stop_id\nSQ\n");
    }

    #[test]
    fn test_empty_schedule_is_zero_coverage() {
        let coverage = StopCoverage::new(&TripStopSequences::new(), &StopNodeLookup::default());
        assert_eq!(coverage.coverage_percent(), 0.0);
        assert!(coverage.duplicate_nodes.is_empty());
    }
}
