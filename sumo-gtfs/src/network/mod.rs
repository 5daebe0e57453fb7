mod edge_function;
mod edge_id;
mod network_error;
mod network_summary;
mod node_id;
pub mod routing_graph;
pub mod search;
pub mod sumo_network;

pub use edge_function::EdgeFunction;
pub use edge_id::EdgeId;
pub use network_error::NetworkError;
pub use network_summary::NetworkSummary;
pub use node_id::NodeId;
pub use routing_graph::RoutingGraph;
pub use sumo_network::{SumoEdge, SumoJunction, SumoNetwork};
