mod schedule_ops;
mod stop_id;
mod stop_time_row;
mod trip_id;

pub use schedule_ops::{
    distinct_stop_ids, read_trip_stop_sequences, trip_stop_sequences_from_reader, TripStopSequences,
    TripStops,
};
pub use stop_id::{StopId, DEFAULT_STOP_ID_DELIMITER};
pub use stop_time_row::StopTimeRow;
pub use trip_id::TripId;
