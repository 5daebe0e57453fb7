use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// default delimiter separating a GTFS parent stop id from its platform or
/// stop point suffix, e.g. `8503000:0:7`.
pub const DEFAULT_STOP_ID_DELIMITER: &str = ":";

/// a normalized GTFS stop identifier, shared between the schedule and the
/// stop to node lookup.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(pub String);

impl StopId {
    /// normalizes a raw stop id by trimming surrounding whitespace and keeping
    /// the segment before the first `delimiter`. an empty delimiter only trims.
    ///
    /// # Example
    ///
    /// ```
    /// use sumo_gtfs::schedule::StopId;
    /// assert_eq!(StopId::normalized(" 8503000:0:7 ", ":").as_str(), "8503000");
    /// ```
    pub fn normalized(raw: &str, delimiter: &str) -> StopId {
        let trimmed = raw.trim();
        let stop_id = if delimiter.is_empty() {
            trimmed
        } else {
            trimmed.split(delimiter).next().unwrap_or(trimmed)
        };
        StopId(stop_id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StopId {
    fn from(value: &str) -> Self {
        StopId(value.to_string())
    }
}
