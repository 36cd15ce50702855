//! Content digest over the shipped rule tables.
//!
//! Reports embed this digest so a reviewer can tell which curated revision
//! produced a verdict. Any edit to a pattern or bound changes the digest.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::panic::panic_thresholds;
use crate::reference::reference_ranges;

#[derive(Serialize)]
struct RangeEntry<'a> {
    test: &'a str,
    unit: Option<&'a str>,
    min: f64,
    max: f64,
}

#[derive(Serialize)]
struct PanicEntry<'a> {
    test: &'a str,
    unit: Option<&'a str>,
    low: Option<f64>,
    high: Option<f64>,
}

#[derive(Serialize)]
struct TableSnapshot<'a> {
    reference_ranges: Vec<RangeEntry<'a>>,
    panic_thresholds: Vec<PanicEntry<'a>>,
}

/// Hex-encoded SHA-256 over a canonical serialization of both rule tables.
pub fn rules_digest() -> String {
    let snapshot = TableSnapshot {
        reference_ranges: reference_ranges()
            .iter()
            .map(|rule| RangeEntry {
                test: rule.test.as_str(),
                unit: rule.unit.as_ref().map(|pattern| pattern.as_str()),
                min: rule.min,
                max: rule.max,
            })
            .collect(),
        panic_thresholds: panic_thresholds()
            .iter()
            .map(|rule| PanicEntry {
                test: rule.test.as_str(),
                unit: rule.unit.as_ref().map(|pattern| pattern.as_str()),
                low: rule.low,
                high: rule.high,
            })
            .collect(),
    };
    let canonical = serde_json::to_vec(&snapshot).expect("rule tables serialize to JSON");
    sha256_hex(&canonical)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_hex_sha256() {
        let digest = rules_digest();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_digest_is_stable() {
        assert_eq!(rules_digest(), rules_digest());
    }
}
