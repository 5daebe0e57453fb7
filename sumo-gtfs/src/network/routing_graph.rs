use super::{EdgeId, NetworkError, NodeId, SumoNetwork};
use indexmap::IndexSet;
use itertools::Itertools;
use std::collections::{BTreeMap, HashMap};

/// directed graph over the junctions of a SUMO network, built from its
/// non-internal edges. read-only once constructed.
#[derive(Default, Debug, Clone)]
pub struct RoutingGraph {
    /// every node referenced by a retained edge, in the order first seen
    nodes: IndexSet<NodeId>,
    /// forward adjacency list holding the SUMO edge id of each src/dst pair.
    /// neighbors are kept sorted so that searches expand them in a fixed order.
    adj: HashMap<NodeId, BTreeMap<NodeId, EdgeId>>,
}

impl RoutingGraph {
    pub fn empty() -> RoutingGraph {
        RoutingGraph {
            nodes: IndexSet::new(),
            adj: HashMap::new(),
        }
    }

    /// creates the routable graph of a SUMO network. internal edges are skipped.
    ///
    /// when more than one edge connects the same ordered pair of nodes, the
    /// last one in document order is kept.
    pub fn from_network(network: &SumoNetwork) -> Result<RoutingGraph, NetworkError> {
        let mut graph = RoutingGraph::empty();
        for edge in network.routable_edges() {
            let src = edge.from.as_ref().ok_or_else(|| {
                NetworkError::MissingEdgeAttribute(edge.id.clone(), String::from("from"))
            })?;
            let dst = edge.to.as_ref().ok_or_else(|| {
                NetworkError::MissingEdgeAttribute(edge.id.clone(), String::from("to"))
            })?;
            if let Some(replaced) = graph.add_edge(src.clone(), dst.clone(), edge.id.clone()) {
                log::debug!(
                    "edge '{}' replaces edge '{replaced}' between '{src}' and '{dst}'",
                    edge.id
                );
            }
        }

        log::info!(
            "loaded SUMO network with {} nodes and {} edges",
            graph.n_nodes(),
            graph.n_edges()
        );
        log::info!(
            "sample node ids in graph: [{}]",
            graph.nodes.iter().take(5).join(", ")
        );
        Ok(graph)
    }

    /// adds a directed edge, returning the id of the edge it replaced between
    /// the same ordered node pair, if any.
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId, edge_id: EdgeId) -> Option<EdgeId> {
        self.nodes.insert(src.clone());
        self.nodes.insert(dst.clone());
        self.adj.entry(src).or_default().insert(dst, edge_id)
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// number of connected node pairs. parallel SUMO edges count once.
    pub fn n_edges(&self) -> usize {
        self.adj.values().map(|neighbors| neighbors.len()).sum()
    }

    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        self.nodes.contains(node_id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter()
    }

    /// the outgoing neighbors of a node in ascending order. empty for
    /// nodes without outgoing edges or not in the graph.
    pub fn out_neighbors(&self, node_id: &NodeId) -> impl Iterator<Item = &NodeId> {
        self.adj.get(node_id).into_iter().flat_map(|neighbors| neighbors.keys())
    }

    pub fn get_edge_id(&self, src: &NodeId, dst: &NodeId) -> Option<&EdgeId> {
        self.adj.get(src)?.get(dst)
    }

    /// expands a node path into the ids of the edges traversed along it.
    pub fn edges_along(&self, path: &[NodeId]) -> Result<Vec<EdgeId>, NetworkError> {
        path.iter()
            .tuple_windows()
            .map(|(src, dst)| {
                self.get_edge_id(src, dst)
                    .cloned()
                    .ok_or_else(|| NetworkError::GraphMissingEdge(src.clone(), dst.clone()))
            })
            .collect()
    }
}
