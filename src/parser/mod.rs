pub mod failure;

pub use failure::{extract_failures, parse_failure_line, scan_log_file, FailureRecord};
