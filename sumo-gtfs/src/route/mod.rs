mod route_edge_record;
mod route_edge_resolver;
mod route_mapping_summary;
mod route_ops;
mod trip_failure;

pub use route_edge_record::{RouteEdgeRecord, RouteEdgeRow, DEFAULT_EDGE_SEQUENCE_SEPARATOR};
pub use route_edge_resolver::{RouteEdgeResolver, RouteMapping};
pub use route_mapping_summary::{coverage_percent, RouteMappingSummary};
pub use route_ops::{
    read_route_edge_rows, route_edge_rows_from_reader, write_route_edge_map, write_trip_failures,
};
pub use trip_failure::{TripFailure, TripFailureRow};
