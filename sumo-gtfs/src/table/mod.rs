mod table_error;
pub mod table_ops;
mod table_sink;

pub use table_error::TableError;
pub use table_ops::{create_writer, deserialize_rows, finish_writer, open_table, write_rows};
pub use table_sink::TableSink;
