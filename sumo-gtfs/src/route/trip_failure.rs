use crate::{network::NodeId, schedule::TripId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// reason a single trip could not be mapped onto the network. these are
/// recorded per trip and never abort a run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TripFailure {
    #[error("insufficient resolvable stops")]
    InsufficientResolvableStops,
    #[error("no path between {0} and {1}")]
    NoPath(NodeId, NodeId),
    #[error("empty edge sequence")]
    EmptyEdgeSequence,
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// row of the failure table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TripFailureRow {
    pub trip_id: String,
    pub reason: String,
}

impl TripFailureRow {
    pub const HEADERS: [&'static str; 2] = ["trip_id", "reason"];

    pub fn new(trip_id: &TripId, failure: &TripFailure) -> TripFailureRow {
        TripFailureRow {
            trip_id: trip_id.to_string(),
            reason: failure.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_strings() {
        let a = NodeId::from("A");
        let d = NodeId::from("D");
        assert_eq!(
            TripFailure::InsufficientResolvableStops.to_string(),
            "insufficient resolvable stops"
        );
        assert_eq!(
            TripFailure::NoPath(a, d).to_string(),
            "no path between A and D"
        );
        let row = TripFailureRow::new(&TripId::from("T9"), &TripFailure::EmptyEdgeSequence);
        assert_eq!(row.trip_id, "T9");
        assert_eq!(row.reason, "empty edge sequence");
    }
}
