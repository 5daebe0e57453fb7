//! Maps scheduled GTFS trips onto edge sequences of a compiled SUMO network.
//!
//! The crate is organized around a single batch job: load the `.net.xml`
//! network into a [`network::RoutingGraph`], load the ordered stop lists of
//! every trip from `stop_times.txt`, load the stop to node lookup, then
//! resolve each trip into a [`route::RouteEdgeRecord`] with breadth-first
//! shortest paths. The [`diagnostics`] module holds read-only companion
//! reports over the same inputs and outputs.
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod mapping;
pub mod network;
pub mod route;
pub mod schedule;
pub mod table;
