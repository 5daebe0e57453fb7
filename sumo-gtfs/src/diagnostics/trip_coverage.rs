use crate::{
    route::{coverage_percent, RouteEdgeRow},
    schedule::TripId,
    table::{self, TableError},
};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display, io::Read, path::Path};

const SAMPLE_TRIPS: usize = 5;

#[derive(Serialize, Deserialize, Debug, Clone)]
struct TripRow {
    trip_id: String,
}

/// why a scheduled trip has no usable route edge record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmappedReason {
    NotInRouteEdgeMap,
    EmptyEdgeSequence,
}

impl Display for UnmappedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnmappedReason::NotInRouteEdgeMap => write!(f, "not present in route edge map"),
            UnmappedReason::EmptyEdgeSequence => write!(f, "empty edge sequence"),
        }
    }
}

/// row of the unmapped trips table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UnmappedTripRow {
    pub trip_id: String,
    pub reason: String,
}

impl UnmappedTripRow {
    pub const HEADERS: [&'static str; 2] = ["trip_id", "reason"];
}

/// compares the trips of a GTFS `trips.txt` table against a route edge table.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TripCoverageReport {
    pub total_trips: usize,
    pub mapped_trips: usize,
    /// unmapped trips in the order they appear in the trips table
    pub unmapped: Vec<(TripId, UnmappedReason)>,
}

impl TripCoverageReport {
    /// a trip counts as mapped when the route edge table holds a non-blank
    /// edge sequence for it. when a trip repeats in the route edge table, the
    /// last row wins.
    pub fn new(trip_ids: &IndexSet<TripId>, route_rows: &[RouteEdgeRow]) -> TripCoverageReport {
        let routes: HashMap<&str, &RouteEdgeRow> = route_rows
            .iter()
            .map(|row| (row.trip_id.as_str(), row))
            .collect();

        let mut report = TripCoverageReport {
            total_trips: trip_ids.len(),
            ..Default::default()
        };
        for trip_id in trip_ids.iter() {
            match routes.get(trip_id.as_str()) {
                None => report
                    .unmapped
                    .push((trip_id.clone(), UnmappedReason::NotInRouteEdgeMap)),
                Some(row) if row.is_blank() => report
                    .unmapped
                    .push((trip_id.clone(), UnmappedReason::EmptyEdgeSequence)),
                Some(_) => report.mapped_trips += 1,
            }
        }
        report
    }

    pub fn coverage_percent(&self) -> f64 {
        coverage_percent(self.mapped_trips, self.total_trips)
    }

    pub fn log(&self) {
        log::info!("total trips: {}", self.total_trips);
        log::info!("mapped trips: {}", self.mapped_trips);
        log::info!("unmapped trips: {}", self.unmapped.len());
        log::info!("coverage: {:.2}%", self.coverage_percent());
        for (trip_id, reason) in self.unmapped.iter().take(SAMPLE_TRIPS) {
            log::info!("  unmapped trip {trip_id}: {reason}");
        }
    }

    pub fn unmapped_rows(&self) -> impl Iterator<Item = UnmappedTripRow> + '_ {
        self.unmapped.iter().map(|(trip_id, reason)| UnmappedTripRow {
            trip_id: trip_id.to_string(),
            reason: reason.to_string(),
        })
    }

    /// writes the unmapped trips table `trip_id,reason`.
    pub fn write_unmapped(&self, filepath: &Path, overwrite: bool) -> Result<bool, TableError> {
        table::write_rows(filepath, &UnmappedTripRow::HEADERS, self.unmapped_rows(), overwrite)
    }
}

/// reads the distinct trip ids of a GTFS `trips.txt` table in order of appearance.
pub fn read_trip_ids(filepath: &Path) -> Result<IndexSet<TripId>, TableError> {
    let filename = filepath.to_string_lossy().to_string();
    log::info!("reading trips from {filename}");
    let reader = table::open_table(filepath)?;
    trip_ids_from_reader(reader, &filename)
}

pub fn trip_ids_from_reader<R: Read>(
    reader: R,
    filename: &str,
) -> Result<IndexSet<TripId>, TableError> {
    table::deserialize_rows::<TripRow, R>(reader, filename, &["trip_id"])?
        .map(|row| row.map(|r| TripId(r.trip_id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::route_edge_rows_from_reader;
    use std::path::PathBuf;

    #[test]
    fn test_coverage_reasons() {
        let trips = trip_ids_from_reader(
            "trip_id\nT1\nT2\nT3\nT2\n".as_bytes(),
            "trips.txt",
        )
        .expect("trips load");
        assert_eq!(trips.len(), 3);
        let routes = route_edge_rows_from_reader(
            "trip_id,edge_sequence\nT1,e1 e2\nT3,  \nT9,e4\n".as_bytes(),
            "route_edges.csv",
        )
        .expect("routes load");

        let report = TripCoverageReport::new(&trips, &routes);
        assert_eq!(report.total_trips, 3);
        assert_eq!(report.mapped_trips, 1);
        assert_eq!(
            report.unmapped,
            vec![
                (TripId::from("T2"), UnmappedReason::NotInRouteEdgeMap),
                (TripId::from("T3"), UnmappedReason::EmptyEdgeSequence),
            ]
        );
        assert!((report.coverage_percent() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_write_unmapped_from_fixture() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join("test")
            .join("trips.txt");
        let trips = read_trip_ids(&path).expect("fixture loads");
        assert_eq!(trips.len(), 6);
        let routes = vec![
            RouteEdgeRow {
                trip_id: String::from("T1"),
                edge_sequence: String::from("e1 e2"),
            },
            RouteEdgeRow {
                trip_id: String::from("T4"),
                edge_sequence: String::from("e1"),
            },
        ];
        let report = TripCoverageReport::new(&trips, &routes);

        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("unmapped_trips.csv");
        report.write_unmapped(&output, false).expect("write succeeds");
        let contents = std::fs::read_to_string(&output).expect("file exists");
        let expected = "trip_id,reason\n\
            T2,not present in route edge map\n\
            T3,not present in route edge map\n\
            T5,not present in route edge map\n\
            T6,not present in route edge map\n";
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_no_trips_is_zero_coverage() {
        let report = TripCoverageReport::new(&IndexSet::new(), &[]);
        assert_eq!(report.coverage_percent(), 0.0);
    }
}
