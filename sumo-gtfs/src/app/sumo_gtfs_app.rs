use super::SumoGtfsOperation;
use clap::Parser;

/// command line tool for mapping GTFS trips onto the edges of a compiled SUMO network
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct SumoGtfsApp {
    /// select the operation to run
    #[command(subcommand)]
    pub op: SumoGtfsOperation,
}
