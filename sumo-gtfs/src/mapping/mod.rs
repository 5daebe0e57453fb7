mod stop_node_lookup;
mod stop_node_row;

pub use stop_node_lookup::StopNodeLookup;
pub use stop_node_row::{read_stop_node_rows, stop_node_rows_from_reader, StopNodeRow};
