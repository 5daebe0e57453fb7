use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// identifier of an edge in a compiled SUMO network. carried as edge
/// metadata in the [`super::RoutingGraph`], not as the edge's identity.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub String);

impl EdgeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(value: &str) -> Self {
        EdgeId(value.to_string())
    }
}
