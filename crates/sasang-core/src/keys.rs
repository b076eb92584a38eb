//! Storage key conventions.
//!
//! Pure string functions. These define the canonical layout of objects in
//! the assessment store.

use uuid::Uuid;

pub const ASSESSMENTS_PREFIX: &str = "assessments/";

pub fn assessment(id: Uuid) -> String {
    format!("{ASSESSMENTS_PREFIX}{id}.json")
}

/// Parse the record id back out of an assessment key.
pub fn assessment_id(key: &str) -> Option<Uuid> {
    key.strip_prefix(ASSESSMENTS_PREFIX)?
        .strip_suffix(".json")
        .and_then(|id| Uuid::parse_str(id).ok())
}
