use crate::{network::EdgeId, schedule::TripId};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// default separator between edge ids in a serialized edge sequence, matching
/// the space separated `edges` attribute of SUMO `<route>` elements.
pub const DEFAULT_EDGE_SEQUENCE_SEPARATOR: &str = " ";

/// the SUMO edges a trip traverses, in travel order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEdgeRecord {
    pub trip_id: TripId,
    pub edge_ids: Vec<EdgeId>,
}

impl RouteEdgeRecord {
    pub fn edge_sequence(&self, separator: &str) -> String {
        self.edge_ids.iter().join(separator)
    }
}

/// row of the route edge table, `trip_id,edge_sequence`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteEdgeRow {
    pub trip_id: String,
    #[serde(default)]
    pub edge_sequence: String,
}

impl RouteEdgeRow {
    pub const HEADERS: [&'static str; 2] = ["trip_id", "edge_sequence"];

    pub fn new(record: &RouteEdgeRecord, separator: &str) -> RouteEdgeRow {
        RouteEdgeRow {
            trip_id: record.trip_id.to_string(),
            edge_sequence: record.edge_sequence(separator),
        }
    }

    /// true when the row carries no edge ids.
    pub fn is_blank(&self) -> bool {
        self.edge_sequence.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_sequence_separator() {
        let record = RouteEdgeRecord {
            trip_id: TripId::from("T1"),
            edge_ids: vec![EdgeId::from("e1"), EdgeId::from("e2"), EdgeId::from("-e7")],
        };
        assert_eq!(record.edge_sequence(DEFAULT_EDGE_SEQUENCE_SEPARATOR), "e1 e2 -e7");
        assert_eq!(record.edge_sequence("|"), "e1|e2|-e7");
        let row = RouteEdgeRow::new(&record, " ");
        assert_eq!(row.trip_id, "T1");
        assert!(!row.is_blank());
    }
}
