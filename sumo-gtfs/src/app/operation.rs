//! batch jobs run by the `sumo_gtfs` command line tool. each job loads its
//! inputs once, runs to completion and writes its outputs once.
use super::SumoGtfsError;
use crate::{
    config::RouteMappingConfig,
    diagnostics::{self, StopCoverage, StopNodeValidation, TripCoverageReport},
    mapping::{self, StopNodeLookup},
    network::{NetworkSummary, RoutingGraph, SumoNetwork},
    route::{self, RouteEdgeResolver},
    schedule,
};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum SumoGtfsOperation {
    /// map every trip of a GTFS schedule onto a sequence of SUMO edges
    MapRoutes {
        /// compiled SUMO network, .net.xml or .net.xml.gz
        #[arg(long)]
        net_file: String,
        /// GTFS stop_times.txt
        #[arg(long)]
        stop_times_file: String,
        /// table of stop_id,node_id matches between GTFS stops and SUMO junctions
        #[arg(long)]
        stop_node_mapping_file: String,
        /// output table of trip_id,edge_sequence
        #[arg(long)]
        output_file: String,
        /// optional output table of trip_id,reason for trips that could not be mapped
        #[arg(long)]
        failures_file: Option<String>,
        /// optional .toml or .json run configuration
        #[arg(long)]
        configuration_file: Option<String>,
        /// replace existing output files
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// log junction and edge counts of a SUMO network
    SummarizeNetwork {
        #[arg(long)]
        net_file: String,
    },
    /// compare the trips of a GTFS trips.txt against a route edge table
    TripCoverage {
        /// GTFS trips.txt
        #[arg(long)]
        trips_file: String,
        /// route edge table written by map-routes
        #[arg(long)]
        route_edge_map_file: String,
        /// output table of trip_id,reason for unmapped trips
        #[arg(long)]
        output_file: String,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// check that every node of a stop to node table is a junction of the network
    ValidateStopNodes {
        #[arg(long)]
        net_file: String,
        #[arg(long)]
        stop_node_mapping_file: String,
        /// output table of missing node ids, written only when some are missing
        #[arg(long)]
        output_file: String,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// report how many stops of a GTFS schedule have a node mapping
    StopCoverage {
        #[arg(long)]
        stop_times_file: String,
        #[arg(long)]
        stop_node_mapping_file: String,
        /// optional output table of schedule stop ids without a node
        #[arg(long)]
        output_file: Option<String>,
        /// optional .toml or .json run configuration
        #[arg(long)]
        configuration_file: Option<String>,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
}

impl SumoGtfsOperation {
    pub fn run(&self) -> Result<(), SumoGtfsError> {
        match self {
            SumoGtfsOperation::MapRoutes {
                net_file,
                stop_times_file,
                stop_node_mapping_file,
                output_file,
                failures_file,
                configuration_file,
                overwrite,
            } => {
                let config = RouteMappingConfig::load(configuration_file.as_ref(), *overwrite)?;
                map_routes(
                    Path::new(net_file),
                    Path::new(stop_times_file),
                    Path::new(stop_node_mapping_file),
                    Path::new(output_file),
                    failures_file.as_ref().map(Path::new),
                    &config,
                )
            }
            SumoGtfsOperation::SummarizeNetwork { net_file } => {
                summarize_network(Path::new(net_file))
            }
            SumoGtfsOperation::TripCoverage {
                trips_file,
                route_edge_map_file,
                output_file,
                overwrite,
            } => trip_coverage(
                Path::new(trips_file),
                Path::new(route_edge_map_file),
                Path::new(output_file),
                *overwrite,
            ),
            SumoGtfsOperation::ValidateStopNodes {
                net_file,
                stop_node_mapping_file,
                output_file,
                overwrite,
            } => validate_stop_nodes(
                Path::new(net_file),
                Path::new(stop_node_mapping_file),
                Path::new(output_file),
                *overwrite,
            ),
            SumoGtfsOperation::StopCoverage {
                stop_times_file,
                stop_node_mapping_file,
                output_file,
                configuration_file,
                overwrite,
            } => {
                let config = RouteMappingConfig::load(configuration_file.as_ref(), *overwrite)?;
                stop_coverage(
                    Path::new(stop_times_file),
                    Path::new(stop_node_mapping_file),
                    output_file.as_ref().map(Path::new),
                    &config,
                )
            }
        }
    }
}

/// loads the network, schedule and stop to node lookup, resolves every trip
/// and writes the route edge table along with the optional failure table.
pub fn map_routes(
    net_file: &Path,
    stop_times_file: &Path,
    stop_node_mapping_file: &Path,
    output_file: &Path,
    failures_file: Option<&Path>,
    config: &RouteMappingConfig,
) -> Result<(), SumoGtfsError> {
    let network = SumoNetwork::from_file(net_file)?;
    let graph = RoutingGraph::from_network(&network)?;
    let trips = schedule::read_trip_stop_sequences(stop_times_file, &config.stop_id_delimiter)?;
    let lookup = StopNodeLookup::from_file(stop_node_mapping_file, &config.stop_id_delimiter)?;

    let resolver = RouteEdgeResolver::new(&graph, &lookup);
    let mapping = resolver.resolve_all(&trips);
    mapping.summary.log();

    route::write_route_edge_map(
        output_file,
        &mapping.records,
        &config.edge_sequence_separator,
        config.overwrite,
    )?;
    if let Some(failures_file) = failures_file {
        route::write_trip_failures(failures_file, &mapping.failures, config.overwrite)?;
    }
    Ok(())
}

pub fn summarize_network(net_file: &Path) -> Result<(), SumoGtfsError> {
    let network = SumoNetwork::from_file(net_file)?;
    let summary = NetworkSummary::from_network(&network);
    for line in summary.to_string().lines() {
        log::info!("{line}");
    }
    Ok(())
}

pub fn trip_coverage(
    trips_file: &Path,
    route_edge_map_file: &Path,
    output_file: &Path,
    overwrite: bool,
) -> Result<(), SumoGtfsError> {
    let trip_ids = diagnostics::read_trip_ids(trips_file)?;
    let route_rows = route::read_route_edge_rows(route_edge_map_file)?;
    let report = TripCoverageReport::new(&trip_ids, &route_rows);
    report.log();
    report.write_unmapped(output_file, overwrite)?;
    Ok(())
}

pub fn validate_stop_nodes(
    net_file: &Path,
    stop_node_mapping_file: &Path,
    output_file: &Path,
    overwrite: bool,
) -> Result<(), SumoGtfsError> {
    let network = SumoNetwork::from_file(net_file)?;
    let rows = mapping::read_stop_node_rows(stop_node_mapping_file)?;
    let validation = StopNodeValidation::new(&rows, &network);
    validation.log();
    if validation.write_missing(output_file, overwrite)? {
        log::info!("wrote missing node ids to {}", output_file.to_string_lossy());
    }
    Ok(())
}

pub fn stop_coverage(
    stop_times_file: &Path,
    stop_node_mapping_file: &Path,
    output_file: Option<&Path>,
    config: &RouteMappingConfig,
) -> Result<(), SumoGtfsError> {
    let trips = schedule::read_trip_stop_sequences(stop_times_file, &config.stop_id_delimiter)?;
    let lookup = StopNodeLookup::from_file(stop_node_mapping_file, &config.stop_id_delimiter)?;
    let coverage = StopCoverage::new(&trips, &lookup);
    coverage.log();
    if let Some(output_file) = output_file {
        if coverage.write_unmapped(output_file, config.overwrite)? {
            log::info!("wrote unmapped stops to {}", output_file.to_string_lossy());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join("test")
            .join(name)
    }

    #[test]
    fn test_map_routes_then_trip_coverage() {
        let dir = tempfile::tempdir().expect("temp dir");
        let route_edges = dir.path().join("route_edges.csv");
        let failures = dir.path().join("failures.csv");
        map_routes(
            &fixture_path("line.net.xml"),
            &fixture_path("stop_times.txt"),
            &fixture_path("stop_nodes.csv"),
            &route_edges,
            Some(&failures),
            &RouteMappingConfig::default(),
        )
        .expect("map routes succeeds");

        let contents = std::fs::read_to_string(&route_edges).expect("route edges written");
        assert_eq!(contents, "trip_id,edge_sequence\nT1,e1 e2\nT4,e1\n");
        let contents = std::fs::read_to_string(&failures).expect("failures written");
        assert_eq!(
            contents,
            "trip_id,reason\n\
             T2,insufficient resolvable stops\n\
             T3,no path between A and D\n\
             T5,no path between C and F\n"
        );

        let unmapped = dir.path().join("unmapped.csv");
        trip_coverage(&fixture_path("trips.txt"), &route_edges, &unmapped, false)
            .expect("trip coverage succeeds");
        let contents = std::fs::read_to_string(&unmapped).expect("unmapped written");
        assert_eq!(contents.lines().count(), 5);
    }

    #[test]
    fn test_map_routes_missing_network_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = map_routes(
            &dir.path().join("absent.net.xml"),
            &fixture_path("stop_times.txt"),
            &fixture_path("stop_nodes.csv"),
            &dir.path().join("route_edges.csv"),
            None,
            &RouteMappingConfig::default(),
        );
        assert!(matches!(result, Err(SumoGtfsError::NetworkError(_))));
    }

    #[test]
    fn test_stop_times_without_required_column_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let stop_times = dir.path().join("stop_times.txt");
        std::fs::write(&stop_times, "trip_id,stop_id\nT1,SA\n").expect("seed file");
        let result = stop_coverage(
            &stop_times,
            &fixture_path("stop_nodes.csv"),
            None,
            &RouteMappingConfig::default(),
        );
        assert!(matches!(result, Err(SumoGtfsError::TableError(_))));
    }

    #[test]
    fn test_summarize_and_validate_fixture() {
        summarize_network(&fixture_path("line.net.xml")).expect("summary succeeds");
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("missing.csv");
        validate_stop_nodes(
            &fixture_path("line.net.xml"),
            &fixture_path("stop_nodes.csv"),
            &output,
            false,
        )
        .expect("validation succeeds");
        assert!(output.exists());
    }

    #[test]
    fn test_stop_coverage_writes_unmapped_stops() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("unmapped_stops.csv");
        let op = SumoGtfsOperation::StopCoverage {
            stop_times_file: fixture_path("stop_times.txt").to_string_lossy().to_string(),
            stop_node_mapping_file: fixture_path("stop_nodes.csv").to_string_lossy().to_string(),
            output_file: Some(output.to_string_lossy().to_string()),
            configuration_file: None,
            overwrite: false,
        };
        op.run().expect("stop coverage succeeds");
        let contents = std::fs::read_to_string(&output).expect("unmapped stops written");
        assert_eq!(contents, "stop_id\nSQ\n");
    }

    #[test]
    fn test_unsupported_configuration_fails() {
        let op = SumoGtfsOperation::StopCoverage {
            stop_times_file: fixture_path("stop_times.txt").to_string_lossy().to_string(),
            stop_node_mapping_file: fixture_path("stop_nodes.csv").to_string_lossy().to_string(),
            output_file: None,
            configuration_file: Some(String::from("mapping.yaml")),
            overwrite: false,
        };
        assert!(matches!(op.run(), Err(SumoGtfsError::ConfigurationError(_))));
    }
}
