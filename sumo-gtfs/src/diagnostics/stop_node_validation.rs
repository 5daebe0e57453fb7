use crate::{
    mapping::StopNodeRow,
    network::{NodeId, SumoNetwork},
    table::{self, TableError},
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, path::Path};

const SAMPLE_NODES: usize = 5;

/// row of the missing node table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MissingNodeRow {
    pub missing_node_id: String,
}

impl MissingNodeRow {
    pub const HEADERS: [&'static str; 1] = ["missing_node_id"];
}

/// checks that every node referenced by the stop to node table is a junction
/// of the network, internal junctions included.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StopNodeValidation {
    pub total_node_ids: usize,
    pub present_node_ids: usize,
    /// referenced node ids that are not junctions, in ascending order
    pub missing_node_ids: Vec<NodeId>,
}

impl StopNodeValidation {
    pub fn new(rows: &[StopNodeRow], network: &SumoNetwork) -> StopNodeValidation {
        let node_ids: BTreeSet<NodeId> = rows
            .iter()
            .filter_map(|row| row.matched_node_id().map(NodeId::from))
            .collect();
        let junction_ids = network.junction_ids();
        let missing_node_ids: Vec<NodeId> = node_ids
            .iter()
            .filter(|node_id| !junction_ids.contains(node_id))
            .cloned()
            .collect();
        StopNodeValidation {
            total_node_ids: node_ids.len(),
            present_node_ids: node_ids.len() - missing_node_ids.len(),
            missing_node_ids,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.missing_node_ids.is_empty()
    }

    pub fn log(&self) {
        log::info!("distinct node ids in mapping: {}", self.total_node_ids);
        log::info!("node ids present in network: {}", self.present_node_ids);
        log::info!("node ids missing from network: {}", self.missing_node_ids.len());
        for node_id in self.missing_node_ids.iter().take(SAMPLE_NODES) {
            log::warn!("  missing node id {node_id}");
        }
    }

    /// writes the missing node ids as a one column table. nothing is written
    /// when no node id is missing.
    pub fn write_missing(&self, filepath: &Path, overwrite: bool) -> Result<bool, TableError> {
        if self.is_valid() {
            return Ok(false);
        }
        let rows = self.missing_node_ids.iter().map(|n| MissingNodeRow {
            missing_node_id: n.to_string(),
        });
        table::write_rows(filepath, &MissingNodeRow::HEADERS, rows, overwrite)
    }
}
