use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Keywords that indicate risky code changes (matched case-insensitively)
pub const RISK_KEYWORDS: [&str; 4] = ["TODO", "FIXME", "hack", "unsafe"];

/// Counts risk-keyword hits in a change set.
///
/// Scoring is per keyword per line: a line mentioning two different
/// keywords counts twice, a line repeating the same keyword counts once.
pub struct KeywordScanner {
    keywords: Vec<String>,
}

impl KeywordScanner {
    /// Build a scanner over a custom vocabulary.
    #[must_use]
    pub fn new(keywords: &[String]) -> Self {
        let keywords = keywords.iter().map(|k| k.to_lowercase()).collect();
        Self { keywords }
    }

    /// Total keyword hits across the reader.
    ///
    /// A read error aborts the scan; the partial count is discarded.
    pub fn scan<R: BufRead>(&self, reader: R) -> io::Result<u32> {
        let mut score = 0;
        for line in reader.lines() {
            let line = line?.to_lowercase();
            for keyword in &self.keywords {
                if line.contains(keyword.as_str()) {
                    score += 1;
                }
            }
        }
        Ok(score)
    }

    /// Scan a code-change file and return its risk score.
    pub fn scan_file(&self, path: &Path) -> io::Result<u32> {
        log::debug!("Scanning {} for risk keywords", path.display());
        let file = File::open(path)?;
        self.scan(BufReader::new(file))
    }
}

impl Default for KeywordScanner {
    fn default() -> Self {
        Self::new(&RISK_KEYWORDS.map(String::from))
    }
}
