use flate2::write::GzEncoder;
use std::{
    fs::File,
    io::{BufWriter, Write},
};

/// destination of a table writer. a gzip stream is only complete once
/// [`TableSink::finish`] has written its trailer.
pub enum TableSink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<File>),
}

impl TableSink {
    /// flushes buffered output and, for gzip, writes the stream trailer.
    pub fn finish(self) -> std::io::Result<()> {
        match self {
            TableSink::Plain(mut w) => w.flush(),
            TableSink::Gzip(w) => w.finish()?.flush(),
        }
    }
}

impl Write for TableSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            TableSink::Plain(w) => w.write(buf),
            TableSink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            TableSink::Plain(w) => w.flush(),
            TableSink::Gzip(w) => w.flush(),
        }
    }
}
