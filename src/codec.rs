use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::constants::codec::{COLUMN_NAMES, FIELD_COUNT, FIELD_DELIMITER, RATINGS_HEADER};
use crate::data::RatingRecord;
use crate::errors::SplitError;

/// Decode a ratings file into memory, preserving file order.
///
/// The first line is treated as a header and skipped without validating its
/// content. Every other line must carry the four `userId,movieId,rating,timestamp`
/// fields; a short or non-numeric line fails the whole decode.
pub fn read_ratings(path: impl AsRef<Path>) -> Result<Vec<RatingRecord>, SplitError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if idx == 0 {
            continue;
        }
        records.push(parse_line(&line, idx + 1)?);
    }

    debug!(
        count = records.len(),
        path = %path.as_ref().display(),
        "decoded ratings"
    );
    Ok(records)
}

/// Encode `records` to `path`, overwriting any existing file.
///
/// Writes the fixed header line followed by one comma-joined line per record
/// using default numeric formatting. No escaping is performed; field values
/// never contain the delimiter.
pub fn write_ratings(path: impl AsRef<Path>, records: &[RatingRecord]) -> Result<(), SplitError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{RATINGS_HEADER}")?;
    for record in records {
        writeln!(
            writer,
            "{}{delim}{}{delim}{}{delim}{}",
            record.user_id,
            record.item_id,
            record.rating,
            record.timestamp,
            delim = FIELD_DELIMITER,
        )?;
    }
    writer.flush()?;

    debug!(
        count = records.len(),
        path = %path.as_ref().display(),
        "encoded ratings"
    );
    Ok(())
}

fn parse_line(line: &str, line_no: usize) -> Result<RatingRecord, SplitError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() < FIELD_COUNT {
        return Err(SplitError::MalformedLine {
            line: line_no,
            reason: format!("expected {FIELD_COUNT} fields, found {}", fields.len()),
        });
    }
    Ok(RatingRecord {
        user_id: parse_field(fields[0], line_no, COLUMN_NAMES[0])?,
        item_id: parse_field(fields[1], line_no, COLUMN_NAMES[1])?,
        rating: parse_field(fields[2], line_no, COLUMN_NAMES[2])?,
        timestamp: parse_field(fields[3], line_no, COLUMN_NAMES[3])?,
    })
}

/// Parse one field, trimming surrounding whitespace so `\r\n` input decodes.
fn parse_field<T: FromStr>(raw: &str, line: usize, column: &str) -> Result<T, SplitError> {
    raw.trim().parse().map_err(|_| SplitError::MalformedLine {
        line,
        reason: format!("column '{column}' has unparseable value '{}'", raw.trim()),
    })
}
