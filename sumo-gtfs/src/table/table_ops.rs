//! helpers for reading and writing the flat CSV tables exchanged with the
//! rest of the SUMO preparation scripts. paths ending in `.gz` are
//! transparently (de)compressed.
use crate::table::{TableError, TableSink};
use csv::QuoteStyle;
use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read},
    path::Path,
};

/// opens a table file for reading, decompressing it when the filename ends with `.gz`.
pub fn open_table(filepath: &Path) -> Result<Box<dyn Read>, TableError> {
    let filename = filepath.to_string_lossy().to_string();
    let file = File::open(filepath).map_err(|e| TableError::FileOpenError(filename, e))?;
    if is_gzip(filepath) {
        Ok(Box::new(GzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// validates the header row of a CSV source and returns an iterator over its
/// deserialized rows.
///
/// # Arguments
///
/// * `reader` - CSV source, first row is the header
/// * `filename` - name used when reporting errors
/// * `required_columns` - columns that must appear in the header. extra columns are ignored.
///
/// # Returns
///
/// An iterator of rows, or an error if the header cannot be read or a required column is absent.
/// Rows that fail to decode are reported with their 1-based position among the data rows.
pub fn deserialize_rows<T, R>(
    reader: R,
    filename: &str,
    required_columns: &[&str],
) -> Result<impl Iterator<Item = Result<T, TableError>>, TableError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|source| TableError::HeaderReadError {
            filename: filename.to_string(),
            source,
        })?;
    for column in required_columns {
        if !headers.iter().any(|h| h == *column) {
            return Err(TableError::MissingColumn {
                filename: filename.to_string(),
                column: column.to_string(),
            });
        }
    }

    let filename_owned = filename.to_string();
    let rows = csv_reader
        .into_deserialize::<T>()
        .enumerate()
        .map(move |(idx, row)| {
            row.map_err(|source| TableError::MalformedRow {
                filename: filename_owned.clone(),
                row: idx as u64 + 1,
                source,
            })
        });
    Ok(rows)
}

/// helper function to build a filewriter for writing either .csv or .csv.gz
/// files while respecting the user's overwrite preferences. parent directories
/// are created as needed.
///
/// returns None when the file exists and overwrite is disabled. callers must
/// pass the writer to [`finish_writer`] to complete gzip output.
pub fn create_writer(
    filepath: &Path,
    overwrite: bool,
) -> Result<Option<csv::Writer<TableSink>>, TableError> {
    let filename = filepath.to_string_lossy().to_string();
    if filepath.exists() && !overwrite {
        log::warn!("file {filename} already exists and overwrite is disabled, skipping");
        return Ok(None);
    }
    if let Some(parent) = filepath.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            std::fs::create_dir_all(parent)
                .map_err(|e| TableError::FileCreateError(filename.clone(), e))?;
        }
    }
    let file = File::create(filepath).map_err(|e| TableError::FileCreateError(filename, e))?;
    let buffer = if is_gzip(filepath) {
        TableSink::Gzip(GzEncoder::new(file, Compression::default()))
    } else {
        TableSink::Plain(BufWriter::new(file))
    };
    let writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(buffer);
    Ok(Some(writer))
}

/// flushes a writer from [`create_writer`] and completes its file, reporting
/// any failure to write the gzip trailer.
pub fn finish_writer(writer: csv::Writer<TableSink>, filename: &str) -> Result<(), TableError> {
    let sink = writer
        .into_inner()
        .map_err(|e| TableError::FlushError(filename.to_string(), e.into_error()))?;
    sink.finish()
        .map_err(|e| TableError::FlushError(filename.to_string(), e))
}

/// writes a header row followed by every row to a new table file.
///
/// the header is written explicitly so that a table with zero rows still
/// carries its column names.
///
/// # Returns
///
/// true if the file was written, false if it was skipped because it exists
/// and overwrite is disabled.
pub fn write_rows<T, I>(
    filepath: &Path,
    headers: &[&str],
    rows: I,
    overwrite: bool,
) -> Result<bool, TableError>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let filename = filepath.to_string_lossy().to_string();
    let mut writer = match create_writer(filepath, overwrite)? {
        Some(w) => w,
        None => return Ok(false),
    };
    writer
        .write_record(headers)
        .map_err(|e| TableError::CsvWriteError(filename.clone(), e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| TableError::CsvWriteError(filename.clone(), e))?;
    }
    finish_writer(writer, &filename)?;
    Ok(true)
}

fn is_gzip(filepath: &Path) -> bool {
    filepath
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct PairRow {
        key: String,
        value: u32,
    }

    #[test]
    fn test_deserialize_ignores_extra_columns() {
        let source = "value,extra,key\n1,x,a\n2,y,b\n";
        let rows = deserialize_rows::<PairRow, _>(source.as_bytes(), "pairs.csv", &["key", "value"])
            .expect("header should validate")
            .collect::<Result<Vec<_>, _>>()
            .expect("rows should decode");
        assert_eq!(
            rows,
            vec![
                PairRow {
                    key: String::from("a"),
                    value: 1
                },
                PairRow {
                    key: String::from("b"),
                    value: 2
                },
            ]
        );
    }

    #[test]
    fn test_missing_column_is_reported() {
        let source = "key,other\na,1\n";
        let result = deserialize_rows::<PairRow, _>(source.as_bytes(), "pairs.csv", &["key", "value"]);
        match result {
            Err(TableError::MissingColumn { filename, column }) => {
                assert_eq!(filename, "pairs.csv");
                assert_eq!(column, "value");
            }
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("expected missing column error"),
        }
    }

    #[test]
    fn test_empty_source_is_missing_columns() {
        let result = deserialize_rows::<PairRow, _>("".as_bytes(), "empty.csv", &["key"]);
        assert!(matches!(result, Err(TableError::MissingColumn { .. })));
    }

    #[test]
    fn test_malformed_row_reports_position() {
        let source = "key,value\na,1\nb,not_a_number\n";
        let result = deserialize_rows::<PairRow, _>(source.as_bytes(), "pairs.csv", &["key", "value"])
            .expect("header should validate")
            .collect::<Result<Vec<_>, _>>();
        match result {
            Err(TableError::MalformedRow { row, .. }) => assert_eq!(row, 2),
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("expected malformed row error"),
        }
    }

    #[test]
    fn test_write_rows_always_writes_header() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("empty.csv");
        let written = write_rows::<PairRow, _>(&path, &["key", "value"], vec![], false)
            .expect("write should succeed");
        assert!(written);
        let contents = std::fs::read_to_string(&path).expect("file should exist");
        assert_eq!(contents, "key,value\n");
    }

    #[test]
    fn test_write_rows_respects_overwrite() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("pairs.csv");
        std::fs::write(&path, "untouched").expect("seed file");

        let row = PairRow {
            key: String::from("a"),
            value: 1,
        };
        let written = write_rows(&path, &["key", "value"], vec![&row], false).expect("no error");
        assert!(!written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "untouched");

        let written = write_rows(&path, &["key", "value"], vec![&row], true).expect("no error");
        assert!(written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "key,value\na,1\n");
    }

    #[test]
    fn test_finished_gzip_writer_is_complete_stream() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("pairs.csv.gz");
        let mut writer = create_writer(&path, false)
            .expect("create succeeds")
            .expect("file does not exist yet");
        writer.write_record(["key", "value"]).expect("write header");
        writer.write_record(["a", "1"]).expect("write row");
        finish_writer(writer, "pairs.csv.gz").expect("finish succeeds");

        // a stream without its trailer fails to decode to the end
        let file = File::open(&path).expect("file exists");
        let mut contents = String::new();
        GzDecoder::new(file)
            .read_to_string(&mut contents)
            .expect("gzip stream is complete");
        assert_eq!(contents, "key,value\na,1\n");
    }

    #[test]
    fn test_gzip_round_trip_through_open_table() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("pairs.csv.gz");
        let rows = vec![PairRow {
            key: String::from("z"),
            value: 26,
        }];
        write_rows(&path, &["key", "value"], rows.iter(), false).expect("write should succeed");

        let reader = open_table(&path).expect("open should succeed");
        let decoded = deserialize_rows::<PairRow, _>(reader, "pairs.csv.gz", &["key", "value"])
            .expect("header should validate")
            .collect::<Result<Vec<_>, _>>()
            .expect("rows should decode");
        assert_eq!(decoded, rows);
    }
}
