use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// GTFS trip identifier. opaque, compared as a string.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(pub String);

impl TripId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TripId {
    fn from(value: &str) -> Self {
        TripId(value.to_string())
    }
}
