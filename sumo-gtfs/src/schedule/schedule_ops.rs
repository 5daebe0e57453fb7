use super::{StopId, StopTimeRow, TripId};
use crate::table::{self, TableError};
use kdam::tqdm;
use std::{
    collections::{BTreeMap, BTreeSet, BinaryHeap},
    io::Read,
    path::Path,
};

/// the stops of one trip in ascending `stop_sequence` order.
pub type TripStops = Vec<StopId>;

/// every trip of a schedule keyed by trip id. iteration follows ascending trip id.
pub type TripStopSequences = BTreeMap<TripId, TripStops>;

/// reads a GTFS `stop_times.txt` file (optionally `.gz`) into the ordered stop
/// list of each trip. stop ids are normalized with `stop_id_delimiter`.
pub fn read_trip_stop_sequences(
    filepath: &Path,
    stop_id_delimiter: &str,
) -> Result<TripStopSequences, TableError> {
    let filename = filepath.to_string_lossy().to_string();
    log::info!("reading stop times from {filename}");
    let reader = table::open_table(filepath)?;
    let trips = trip_stop_sequences_from_reader(reader, &filename, stop_id_delimiter)?;
    log::info!("loaded {} trips from {filename}", trips.len());
    Ok(trips)
}

/// groups stop time rows by trip and orders each group by `stop_sequence`.
/// rows sharing a `stop_sequence` within a trip keep their file order.
///
/// # Arguments
///
/// * `reader` - CSV source with at least the columns `trip_id`, `stop_id` and `stop_sequence`
/// * `filename` - name used when reporting errors
/// * `stop_id_delimiter` - delimiter for [`StopId::normalized`]
pub fn trip_stop_sequences_from_reader<R: Read>(
    reader: R,
    filename: &str,
    stop_id_delimiter: &str,
) -> Result<TripStopSequences, TableError> {
    let rows =
        table::deserialize_rows::<StopTimeRow, R>(reader, filename, &StopTimeRow::REQUIRED_COLUMNS)?;

    let mut grouped: BTreeMap<TripId, Vec<(u32, StopId)>> = BTreeMap::new();
    for row in tqdm!(rows, desc = "group stop times by trip") {
        let row = row?;
        let stop_id = StopId::normalized(&row.stop_id, stop_id_delimiter);
        grouped
            .entry(TripId(row.trip_id))
            .or_default()
            .push((row.stop_sequence, stop_id));
    }
    eprintln!();

    let trips = grouped
        .into_iter()
        .map(|(trip_id, stops)| (trip_id, get_ordered_stops(stops)))
        .collect();
    Ok(trips)
}

/// the distinct stop ids referenced by any trip.
pub fn distinct_stop_ids(trips: &TripStopSequences) -> BTreeSet<&StopId> {
    trips.values().flatten().collect()
}

/// Returns the stops in ascending order of sequence index. Internally uses [BinaryHeap]
/// over (sequence, position) pairs, so equal sequence indices keep their input order.
fn get_ordered_stops(stops: Vec<(u32, StopId)>) -> TripStops {
    let stop_queue_order: BinaryHeap<(u32, usize)> = stops
        .iter()
        .enumerate()
        .map(|(i, (seq, _))| (*seq, i))
        .collect();
    let mut slots: Vec<Option<StopId>> = stops.into_iter().map(|(_, s)| Some(s)).collect();
    stop_queue_order
        .into_sorted_vec() // ascending
        .into_iter()
        .filter_map(|(_, idx)| slots.get_mut(idx).and_then(Option::take))
        .collect()
}
