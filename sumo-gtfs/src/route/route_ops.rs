use super::{RouteEdgeRecord, RouteEdgeRow, TripFailure, TripFailureRow};
use crate::{
    schedule::TripId,
    table::{self, TableError},
};
use std::{io::Read, path::Path};

/// writes the route edge table `trip_id,edge_sequence`.
///
/// # Returns
///
/// false if the file already exists and overwrite is disabled.
pub fn write_route_edge_map(
    filepath: &Path,
    records: &[RouteEdgeRecord],
    separator: &str,
    overwrite: bool,
) -> Result<bool, TableError> {
    let rows = records.iter().map(|r| RouteEdgeRow::new(r, separator));
    let written = table::write_rows(filepath, &RouteEdgeRow::HEADERS, rows, overwrite)?;
    if written {
        log::info!(
            "wrote {} route edge records to {}",
            records.len(),
            filepath.to_string_lossy()
        );
    }
    Ok(written)
}

/// writes the failure table `trip_id,reason`.
pub fn write_trip_failures(
    filepath: &Path,
    failures: &[(TripId, TripFailure)],
    overwrite: bool,
) -> Result<bool, TableError> {
    let rows = failures
        .iter()
        .map(|(trip_id, failure)| TripFailureRow::new(trip_id, failure));
    let written = table::write_rows(filepath, &TripFailureRow::HEADERS, rows, overwrite)?;
    if written {
        log::info!(
            "wrote {} trip failures to {}",
            failures.len(),
            filepath.to_string_lossy()
        );
    }
    Ok(written)
}

/// reads a route edge table (optionally `.gz`).
pub fn read_route_edge_rows(filepath: &Path) -> Result<Vec<RouteEdgeRow>, TableError> {
    let filename = filepath.to_string_lossy().to_string();
    let reader = table::open_table(filepath)?;
    route_edge_rows_from_reader(reader, &filename)
}

pub fn route_edge_rows_from_reader<R: Read>(
    reader: R,
    filename: &str,
) -> Result<Vec<RouteEdgeRow>, TableError> {
    table::deserialize_rows::<RouteEdgeRow, R>(reader, filename, &RouteEdgeRow::HEADERS)?.collect()
}
