//! batch tools for mapping GTFS trips onto SUMO network edges and for
//! reporting on the coverage of that mapping.
use clap::Parser;
use sumo_gtfs::app::SumoGtfsApp;

fn main() {
    env_logger::init();
    let args = SumoGtfsApp::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running sumo_gtfs: {e}");
            std::process::exit(1);
        }
    }
}
