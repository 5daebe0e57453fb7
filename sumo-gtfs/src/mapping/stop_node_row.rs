use crate::table::{self, TableError};
use serde::{Deserialize, Serialize};
use std::{io::Read, path::Path};

/// one row of the precomputed stop to node matching table. the table is
/// produced by a nearest neighbor matching step and may carry extra columns
/// such as the matching distance, which are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StopNodeRow {
    /// raw GTFS stop id, not yet normalized
    pub stop_id: String,
    /// SUMO junction id. empty when the stop could not be matched.
    pub node_id: Option<String>,
}

impl StopNodeRow {
    pub const REQUIRED_COLUMNS: [&'static str; 2] = ["stop_id", "node_id"];

    /// the matched node id, if present and not blank.
    pub fn matched_node_id(&self) -> Option<&str> {
        self.node_id
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

/// reads every row of a stop to node table (optionally `.gz`).
pub fn read_stop_node_rows(filepath: &Path) -> Result<Vec<StopNodeRow>, TableError> {
    let filename = filepath.to_string_lossy().to_string();
    log::info!("reading stop to node mapping from {filename}");
    let reader = table::open_table(filepath)?;
    stop_node_rows_from_reader(reader, &filename)
}

pub fn stop_node_rows_from_reader<R: Read>(
    reader: R,
    filename: &str,
) -> Result<Vec<StopNodeRow>, TableError> {
    table::deserialize_rows::<StopNodeRow, R>(reader, filename, &StopNodeRow::REQUIRED_COLUMNS)?
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_node_id_is_unmatched() {
        let source = "stop_id,node_id,distance_m\nS1,N1,2.0\nS2,,\nS3,  ,1.0\n";
        let rows = stop_node_rows_from_reader(source.as_bytes(), "stop_nodes.csv")
            .expect("rows should load");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].matched_node_id(), Some("N1"));
        assert_eq!(rows[1].matched_node_id(), None);
        assert_eq!(rows[2].matched_node_id(), None);
    }

    #[test]
    fn test_missing_node_column_fails() {
        let source = "stop_id,distance_m\nS1,2.0\n";
        let result = stop_node_rows_from_reader(source.as_bytes(), "stop_nodes.csv");
        assert!(matches!(
            result,
            Err(TableError::MissingColumn { ref column, .. }) if column == "node_id"
        ));
    }
}
