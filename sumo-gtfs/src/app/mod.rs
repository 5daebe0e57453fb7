mod operation;
mod sumo_gtfs_app;
mod sumo_gtfs_error;

pub use operation::{
    map_routes, stop_coverage, summarize_network, trip_coverage, validate_stop_nodes,
    SumoGtfsOperation,
};
pub use sumo_gtfs_app::SumoGtfsApp;
pub use sumo_gtfs_error::SumoGtfsError;
