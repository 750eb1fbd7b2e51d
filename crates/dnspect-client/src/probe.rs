//! Operator label extraction from a schema-tolerant API document.

use dnspect_core::{CheckError, Result};
use serde_json::{Map, Value};

/// Candidate keys for the ownership field, probed in order. Different
/// lookup services name the field differently; the canonical key first,
/// then the known fallbacks.
const LABEL_KEYS: [&str; 5] = ["llc", "isp", "carrier", "org", "asn_description"];

/// Extract the operator label from a decoded response document.
///
/// Returns the first candidate key whose value is a non-empty string.
/// When none matches, the whole document is carried in the error so a
/// changed upstream schema shows up in the report instead of vanishing.
pub fn extract_label(doc: &Map<String, Value>) -> Result<String> {
    for key in LABEL_KEYS {
        if let Some(Value::String(s)) = doc.get(key) {
            if !s.is_empty() {
                return Ok(s.clone());
            }
        }
    }

    Err(CheckError::MissingLabel {
        document: Value::Object(doc.clone()).to_string(),
    })
}
