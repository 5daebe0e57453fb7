//! read-only reports over the inputs and outputs of a route mapping run.
mod stop_coverage;
mod stop_node_validation;
mod trip_coverage;

pub use stop_coverage::{StopCoverage, UnmappedStopRow};
pub use stop_node_validation::{MissingNodeRow, StopNodeValidation};
pub use trip_coverage::{
    read_trip_ids, trip_ids_from_reader, TripCoverageReport, UnmappedReason, UnmappedTripRow,
};
