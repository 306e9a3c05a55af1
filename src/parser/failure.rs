use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

// An example log line: "[2025-02-20 12:00:00] ERROR: Something went wrong"
static FAILURE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\s+(ERROR|FATAL|PANIC):\s+(.*)").unwrap());

/// A failure event parsed from a log line.
///
/// The timestamp is the raw captured text. Upstream log formats vary and
/// nothing downstream does calendar arithmetic on it, so it is never
/// parsed or validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    pub timestamp: String,
    pub message: String,
}

/// Try to parse a single line as a failure event.
///
/// Only lines of the shape `[timestamp] LEVEL: message` with LEVEL one of
/// ERROR, FATAL or PANIC produce a record. Everything else returns `None`.
pub fn parse_failure_line(line: &str) -> Option<FailureRecord> {
    FAILURE_PATTERN.captures(line).map(|caps| FailureRecord {
        timestamp: caps[1].to_string(),
        message: caps[3].to_string(),
    })
}

/// Collect all failure events from a reader, in line order.
///
/// Non-matching lines are skipped without a trace. A read error aborts
/// the whole scan; no partial result is returned.
pub fn extract_failures<R: BufRead>(reader: R) -> io::Result<Vec<FailureRecord>> {
    let mut failures = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(record) = parse_failure_line(&line) {
            failures.push(record);
        }
    }
    Ok(failures)
}

/// Scan a log file for failure events.
pub fn scan_log_file(path: &Path) -> io::Result<Vec<FailureRecord>> {
    log::debug!("Scanning {} for failure markers", path.display());
    let file = File::open(path)?;
    extract_failures(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn matches_all_three_levels() {
        for level in ["ERROR", "FATAL", "PANIC"] {
            let line = format!("[2025-02-20 12:00:00] {level}: disk quota exceeded");
            let record = parse_failure_line(&line).unwrap();
            assert_eq!(record.timestamp, "2025-02-20 12:00:00");
            assert_eq!(record.message, "disk quota exceeded");
        }
    }

    #[test]
    fn skips_non_failure_levels() {
        assert!(parse_failure_line("[2025-02-20 12:00:00] INFO: all good").is_none());
        assert!(parse_failure_line("[2025-02-20 12:00:00] WARN: heads up").is_none());
    }

    #[test]
    fn skips_error_outside_bracket_shape() {
        assert!(parse_failure_line("the last deploy caused an ERROR somewhere").is_none());
        assert!(parse_failure_line("ERROR: no bracket prefix").is_none());
    }

    #[test]
    fn timestamp_capture_is_non_greedy() {
        let record = parse_failure_line("[t1] ERROR: saw [t2] in payload").unwrap();
        assert_eq!(record.timestamp, "t1");
        assert_eq!(record.message, "saw [t2] in payload");
    }

    #[test]
    fn empty_message_is_valid() {
        let record = parse_failure_line("[t1] ERROR: ").unwrap();
        assert_eq!(record.message, "");
    }

    #[test]
    fn missing_space_after_colon_does_not_match() {
        assert!(parse_failure_line("[t1] ERROR:").is_none());
    }

    #[test]
    fn records_come_back_in_line_order() {
        let input = "\
[1] ERROR: first
noise line
[2] FATAL: second
more noise
[3] PANIC: third
";
        let failures = extract_failures(Cursor::new(input)).unwrap();
        assert_eq!(failures.len(), 3);
        assert_eq!(failures[0].message, "first");
        assert_eq!(failures[1].timestamp, "2");
        assert_eq!(failures[2].message, "third");
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        assert!(scan_log_file(Path::new("/no/such/riskcrab.log")).is_err());
    }
}
