use std::fmt::Display;

/// value of the `function` attribute of a SUMO `<edge>` element.
/// see [https://sumo.dlr.de/docs/Networks/SUMO_Road_Networks.html#edges_and_lanes].
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeFunction {
    /// no `function` attribute, a regular road or track
    #[default]
    Normal,
    /// generated inside of a junction by netconvert
    Internal,
    Connector,
    Crossing,
    WalkingArea,
    Other(String),
}

impl EdgeFunction {
    pub fn from_attribute(value: Option<&str>) -> EdgeFunction {
        match value {
            None | Some("normal") => EdgeFunction::Normal,
            Some("internal") => EdgeFunction::Internal,
            Some("connector") => EdgeFunction::Connector,
            Some("crossing") => EdgeFunction::Crossing,
            Some("walkingarea") => EdgeFunction::WalkingArea,
            Some(other) => EdgeFunction::Other(other.to_string()),
        }
    }
}

impl Display for EdgeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeFunction::Normal => write!(f, "normal"),
            EdgeFunction::Internal => write!(f, "internal"),
            EdgeFunction::Connector => write!(f, "connector"),
            EdgeFunction::Crossing => write!(f, "crossing"),
            EdgeFunction::WalkingArea => write!(f, "walkingarea"),
            EdgeFunction::Other(other) => write!(f, "{other}"),
        }
    }
}
