use super::{NetworkError, NodeId, RoutingGraph};
use std::collections::{HashMap, HashSet, VecDeque};

/// finds a shortest path by hop count between two nodes using a
/// breadth-first search over the directed graph. SUMO edges carry no
/// traversal cost for this purpose, so every edge weighs the same.
///
/// neighbors are expanded in ascending id order. when several shortest paths
/// exist the one found first under that order is returned, but callers
/// should only rely on its length.
///
/// # Arguments
///
/// * `src` - origin of the search
/// * `dst` - destination of the search
/// * `graph` - graph to search
///
/// # Returns
///
/// The node path from `src` to `dst` inclusive, or None if `dst` is not
/// reachable. A search from a node to itself returns the single node path.
/// Fails if either node is not in the graph.
pub fn bfs_shortest_path<'a>(
    src: &'a NodeId,
    dst: &'a NodeId,
    graph: &'a RoutingGraph,
) -> Result<Option<Vec<NodeId>>, NetworkError> {
    if !graph.contains_node(src) {
        return Err(NetworkError::GraphMissingNodeId(src.clone()));
    }
    if !graph.contains_node(dst) {
        return Err(NetworkError::GraphMissingNodeId(dst.clone()));
    }
    if src == dst {
        return Ok(Some(vec![src.clone()]));
    }

    // breadth-first search is modeled here with a FIFO queue. each visited
    // node remembers the node it was reached from.
    let mut visited: HashSet<&NodeId> = HashSet::from([src]);
    let mut parents: HashMap<&NodeId, &NodeId> = HashMap::new();
    let mut frontier: VecDeque<&NodeId> = VecDeque::from([src]);

    while let Some(next_id) = frontier.pop_front() {
        for neighbor in graph.out_neighbors(next_id) {
            if !visited.insert(neighbor) {
                continue;
            }
            parents.insert(neighbor, next_id);
            if neighbor == dst {
                return Ok(Some(backtrack(&parents, dst)));
            }
            frontier.push_back(neighbor);
        }
    }

    Ok(None)
}

/// walks the parent pointers from the destination back to the origin.
fn backtrack<'a>(parents: &HashMap<&'a NodeId, &'a NodeId>, dst: &'a NodeId) -> Vec<NodeId> {
    let mut path = vec![dst.clone()];
    let mut current = dst;
    while let Some(parent) = parents.get(current) {
        path.push((*parent).clone());
        current = *parent;
    }
    path.reverse();
    path
}
