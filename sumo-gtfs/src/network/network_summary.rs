use super::SumoNetwork;
use std::{collections::BTreeMap, fmt::Display};

const SAMPLE_EDGES: usize = 5;

/// label used for junctions without a `type` attribute.
pub const UNTYPED_JUNCTION: &str = "(none)";

/// counts describing a SUMO network document, as reported by the
/// `summarize-network` command.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NetworkSummary {
    pub n_junctions: usize,
    /// junction count per junction type, in type order
    pub junction_types: BTreeMap<String, usize>,
    pub n_edges: usize,
    pub n_internal_edges: usize,
    pub n_routable_edges: usize,
    /// the first few routable edges in document order, as `id: from -> to`
    pub sample_edges: Vec<String>,
}

impl NetworkSummary {
    pub fn from_network(network: &SumoNetwork) -> NetworkSummary {
        let mut junction_types: BTreeMap<String, usize> = BTreeMap::new();
        for junction in network.junctions.iter() {
            let key = junction
                .junction_type
                .clone()
                .unwrap_or_else(|| String::from(UNTYPED_JUNCTION));
            *junction_types.entry(key).or_default() += 1;
        }

        let n_routable_edges = network.routable_edges().count();
        let sample_edges = network
            .routable_edges()
            .take(SAMPLE_EDGES)
            .map(|edge| {
                let from = edge.from.as_ref().map(|n| n.as_str()).unwrap_or_default();
                let to = edge.to.as_ref().map(|n| n.as_str()).unwrap_or_default();
                format!("{}: {from} -> {to}", edge.id)
            })
            .collect();

        NetworkSummary {
            n_junctions: network.junctions.len(),
            junction_types,
            n_edges: network.edges.len(),
            n_internal_edges: network.edges.len() - n_routable_edges,
            n_routable_edges,
            sample_edges,
        }
    }
}

impl Display for NetworkSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "junctions: {}", self.n_junctions)?;
        for (junction_type, count) in self.junction_types.iter() {
            writeln!(f, "  {junction_type}: {count}")?;
        }
        writeln!(
            f,
            "edges: {} ({} internal, {} routable)",
            self.n_edges, self.n_internal_edges, self.n_routable_edges
        )?;
        write!(f, "sample edges:")?;
        for edge in self.sample_edges.iter() {
            write!(f, "\n  {edge}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_summary_of_test_network() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join("test")
            .join("line.net.xml");
        let network = SumoNetwork::from_file(&path).expect("test network parses");
        let summary = NetworkSummary::from_network(&network);

        assert_eq!(summary.n_junctions, 7);
        assert_eq!(summary.junction_types.get("dead_end"), Some(&3));
        assert_eq!(summary.junction_types.get("priority"), Some(&2));
        assert_eq!(summary.junction_types.get("internal"), Some(&1));
        assert_eq!(summary.n_edges, 5);
        assert_eq!(summary.n_internal_edges, 1);
        assert_eq!(summary.n_routable_edges, 4);
        assert_eq!(summary.sample_edges[0], "e1: A -> B");
        assert_eq!(summary.sample_edges.len(), 4);
    }

    #[test]
    fn test_untyped_junctions_and_sample_limit() {
        let edges = (0..8)
            .map(|i| format!(r#"<edge id="e{i}" from="n{i}" to="n{}"/>"#, i + 1))
            .collect::<String>();
        let xml = format!(r#"<net><junction id="n0"/>{edges}</net>"#);
        let network = SumoNetwork::parse(&xml).expect("parses");
        let summary = NetworkSummary::from_network(&network);
        assert_eq!(summary.junction_types.get(UNTYPED_JUNCTION), Some(&1));
        assert_eq!(summary.sample_edges.len(), 5);
        assert_eq!(summary.sample_edges[4], "e4: n4 -> n5");
    }

    #[test]
    fn test_empty_network() {
        let network = SumoNetwork::parse("<net/>").expect("parses");
        let summary = NetworkSummary::from_network(&network);
        assert_eq!(summary, NetworkSummary::default());
        assert!(summary.to_string().starts_with("junctions: 0"));
    }
}
