use serde::{Deserialize, Serialize};

/// the subset of a GTFS `stop_times.txt` row needed to order the stops of a trip.
/// other columns of the source table are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StopTimeRow {
    pub trip_id: String,
    pub stop_id: String,
    pub stop_sequence: u32,
}

impl StopTimeRow {
    pub const REQUIRED_COLUMNS: [&'static str; 3] = ["trip_id", "stop_id", "stop_sequence"];
}
