use super::{RouteEdgeRecord, RouteMappingSummary, TripFailure};
use crate::{
    mapping::StopNodeLookup,
    network::{search, EdgeId, NetworkError, NodeId, RoutingGraph},
    schedule::{StopId, TripId, TripStopSequences},
};
use itertools::Itertools;
use kdam::tqdm;
use std::collections::HashSet;

/// the result of resolving every trip of a schedule.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RouteMapping {
    /// one record per mapped trip, in trip id order
    pub records: Vec<RouteEdgeRecord>,
    /// one entry per failed trip, in trip id order
    pub failures: Vec<(TripId, TripFailure)>,
    pub summary: RouteMappingSummary,
}

/// translates the ordered stops of a trip into the SUMO edges traversed
/// between them. holds borrowed, read-only views of the network graph and
/// the stop to node lookup.
pub struct RouteEdgeResolver<'a> {
    graph: &'a RoutingGraph,
    lookup: &'a StopNodeLookup,
}

impl<'a> RouteEdgeResolver<'a> {
    pub fn new(graph: &'a RoutingGraph, lookup: &'a StopNodeLookup) -> RouteEdgeResolver<'a> {
        RouteEdgeResolver { graph, lookup }
    }

    /// maps stops to nodes, dropping stops without a node. consecutive
    /// repeats are kept.
    pub fn node_sequence(&self, stops: &[StopId]) -> Vec<NodeId> {
        stops
            .iter()
            .filter_map(|stop_id| self.lookup.get(stop_id).cloned())
            .collect()
    }

    /// resolves the edge sequence of one trip by joining the shortest paths
    /// between each pair of consecutive stop nodes. any failing pair fails
    /// the whole trip. a node without routable edges has no path to or from
    /// any other node.
    pub fn resolve_trip(&self, stops: &[StopId]) -> Result<Vec<EdgeId>, TripFailure> {
        let nodes = self.node_sequence(stops);
        let distinct: HashSet<&NodeId> = nodes.iter().collect();
        if distinct.len() < 2 {
            return Err(TripFailure::InsufficientResolvableStops);
        }

        let mut edge_ids: Vec<EdgeId> = vec![];
        for (src, dst) in nodes.iter().tuple_windows() {
            let path = match search::bfs_shortest_path(src, dst, self.graph) {
                Ok(Some(path)) => path,
                Ok(None) | Err(NetworkError::GraphMissingNodeId(_)) => {
                    return Err(TripFailure::NoPath(src.clone(), dst.clone()))
                }
                Err(e) => return Err(TripFailure::Unexpected(e.to_string())),
            };
            let segment = self
                .graph
                .edges_along(&path)
                .map_err(|e| TripFailure::Unexpected(e.to_string()))?;
            edge_ids.extend(segment);
        }

        if edge_ids.is_empty() {
            Err(TripFailure::EmptyEdgeSequence)
        } else {
            Ok(edge_ids)
        }
    }

    /// resolves every trip, collecting records, failures and the summary.
    pub fn resolve_all(&self, trips: &TripStopSequences) -> RouteMapping {
        let mut mapping = RouteMapping::default();
        let trip_iter = tqdm!(trips.iter(), desc = "map trips to edges", total = trips.len());
        for (trip_id, stops) in trip_iter {
            match self.resolve_trip(stops) {
                Ok(edge_ids) => mapping.records.push(RouteEdgeRecord {
                    trip_id: trip_id.clone(),
                    edge_ids,
                }),
                Err(failure) => {
                    match &failure {
                        TripFailure::Unexpected(msg) => {
                            log::error!("trip {trip_id} failed unexpectedly: {msg}");
                        }
                        other => log::debug!("trip {trip_id}: {other}"),
                    }
                    mapping.failures.push((trip_id.clone(), failure));
                }
            }
        }
        eprintln!();

        mapping.summary = RouteMappingSummary {
            total_trips: trips.len(),
            mapped_trips: mapping.records.len(),
            failed_trips: mapping.failures.len(),
        };
        mapping
    }
}
