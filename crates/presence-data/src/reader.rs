//! Presence-log loading for the Presence Analyzer.
//!
//! Reads the flat CSV event log (`user_id,YYYY-MM-DD,HH:MM:SS,HH:MM:SS`,
//! one record per line) and converts it into a [`PresenceLog`] grouped by
//! user id for downstream aggregation.

use std::io::BufRead;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use presence_core::error::{AnalyzerError, Result};
use presence_core::models::{DayRecord, PresenceLog, UserId};
use tracing::{debug, warn};

/// Date format of the second CSV field.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format of the third and fourth CSV fields.
const TIME_FORMAT: &str = "%H:%M:%S";

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and parse the presence CSV at `path` into a [`PresenceLog`].
///
/// Lines that do not split into exactly four fields are silently ignored
/// (header and footer lines). Lines with four fields where any field fails
/// typed parsing are skipped with the error logged – one bad record never
/// aborts the file. Duplicate dates for the same user overwrite earlier
/// entries.
///
/// Fails with [`AnalyzerError::FileRead`] when the file cannot be opened.
pub fn load_presence_log(path: &Path) -> Result<PresenceLog> {
    let file = std::fs::File::open(path).map_err(|e| AnalyzerError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let reader = std::io::BufReader::new(file);
    let mut log = PresenceLog::new();

    let mut lines_ignored = 0u64;
    let mut lines_skipped = 0u64;
    let mut records_parsed = 0u64;

    for (line_no, line_result) in reader.lines().enumerate() {
        let line = match line_result {
            Ok(l) => l,
            Err(e) => {
                warn!("Unreadable line {} in {}: {}", line_no, path.display(), e);
                lines_skipped += 1;
                continue;
            }
        };

        match parse_line(line_no, &line) {
            Ok(Some((user_id, date, record))) => {
                records_parsed += 1;
                log.insert(user_id, date, record);
            }
            // Header / footer shape, not an error.
            Ok(None) => lines_ignored += 1,
            Err(e) => {
                debug!("Problem with line {}: {}", line_no, e);
                lines_skipped += 1;
            }
        }
    }

    debug!(
        "File {}: {} records parsed, {} ignored, {} skipped",
        path.display(),
        records_parsed,
        lines_ignored,
        lines_skipped,
    );

    Ok(log)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Parse one CSV line into a `(user_id, date, record)` triple.
///
/// Returns `Ok(None)` for lines that do not have exactly four comma-separated
/// fields, and [`AnalyzerError::RecordParse`] when a field is present but
/// malformed.
fn parse_line(line_no: usize, line: &str) -> Result<Option<(UserId, NaiveDate, DayRecord)>> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 4 {
        return Ok(None);
    }

    let user_id: UserId = fields[0].parse().map_err(|_| AnalyzerError::RecordParse {
        line: line_no,
        reason: format!("invalid user id {:?}", fields[0]),
    })?;

    let date = NaiveDate::parse_from_str(fields[1], DATE_FORMAT).map_err(|_| {
        AnalyzerError::RecordParse {
            line: line_no,
            reason: format!("invalid date {:?}", fields[1]),
        }
    })?;

    let start = NaiveTime::parse_from_str(fields[2], TIME_FORMAT).map_err(|_| {
        AnalyzerError::RecordParse {
            line: line_no,
            reason: format!("invalid start time {:?}", fields[2]),
        }
    })?;

    let end = NaiveTime::parse_from_str(fields[3], TIME_FORMAT).map_err(|_| {
        AnalyzerError::RecordParse {
            line: line_no,
            reason: format!("invalid end time {:?}", fields[3]),
        }
    })?;

    Ok(Some((user_id, date, DayRecord { start, end })))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
