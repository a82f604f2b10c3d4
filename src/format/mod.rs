//! Key formatter: turns raw `(key, value)` characteristics into readable
//! `label: value` lines grouped into sections.

mod key;
mod value;

pub use key::{divide_camel_case, split_key, NAMESPACE_PREFIX};
pub use value::{format_value, UNSUPPORTED_MARKER};

use serde::Serialize;

use crate::hardware::Characteristic;

/// Formatted values longer than this are dropped entirely; they are object
/// dumps, not information.
pub const MAX_VALUE_LEN: usize = 300;

/// Replacement for values that look like unprintable object references.
pub const UNKNOWN_MARKER: &str = "unknown";

/// One section of formatted characteristic lines, named after the key
/// namespace segment they share.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeySection {
    pub section: String,
    pub entries: Vec<String>,
}

/// Format characteristics into sections.
///
/// A new section opens only when an entry's section name differs from the
/// immediately preceding one. Keys cluster by namespace in enumeration order,
/// so this adjacent-only rule is equivalent to a group-by in practice; when a
/// source scatters same-named sections the duplicate headers are intended
/// behavior, not a bug to fix here.
pub fn build_sections(characteristics: &[Characteristic]) -> Vec<KeySection> {
    let mut sections: Vec<KeySection> = Vec::new();
    for characteristic in characteristics {
        let (section, label) = split_key(&characteristic.key);
        let mut formatted = format_value(&characteristic.value).replace(':', " = ");
        if formatted.contains('@') {
            formatted = UNKNOWN_MARKER.to_string();
        }
        if formatted.len() > MAX_VALUE_LEN {
            continue;
        }
        let entry = format!("{label}: {formatted}");
        match sections.last_mut() {
            Some(last) if last.section == section => last.entries.push(entry),
            _ => sections.push(KeySection {
                section,
                entries: vec![entry],
            }),
        }
    }
    sections
}
