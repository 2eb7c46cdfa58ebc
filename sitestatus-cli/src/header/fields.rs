//! Field map produced by header inference

use std::collections::BTreeMap;

use serde::Serialize;

/// Field names as they appear in the field map
pub mod keys {
    pub const SITE: &str = "site";
    pub const CLASS_STATUS: &str = "class_status";
    pub const CLASS_NOTES: &str = "class_notes";
    pub const INTERNAL_CLASS_NOTES: &str = "internal_class_notes";
    pub const WEIGHT_STATUS: &str = "weight_status";
    pub const WEIGHT_NOTES: &str = "weight_notes";
    pub const INTERNAL_WEIGHT_NOTES: &str = "internal_weight_notes";
}

/// Column label for each field of a status worksheet
///
/// The internal notes columns are only present when the worksheet has them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderMap {
    pub site: String,
    pub class_status: String,
    pub class_notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_class_notes: Option<String>,
    pub weight_status: String,
    pub weight_notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_weight_notes: Option<String>,
}

impl HeaderMap {
    /// Fields in worksheet order, skipping internal notes that were not detected
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = vec![
            (keys::SITE, self.site.as_str()),
            (keys::CLASS_STATUS, self.class_status.as_str()),
            (keys::CLASS_NOTES, self.class_notes.as_str()),
        ];
        if let Some(col) = &self.internal_class_notes {
            entries.push((keys::INTERNAL_CLASS_NOTES, col.as_str()));
        }
        entries.push((keys::WEIGHT_STATUS, self.weight_status.as_str()));
        entries.push((keys::WEIGHT_NOTES, self.weight_notes.as_str()));
        if let Some(col) = &self.internal_weight_notes {
            entries.push((keys::INTERNAL_WEIGHT_NOTES, col.as_str()));
        }
        entries
    }

    /// Field name to column label
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        self.entries()
            .into_iter()
            .map(|(key, col)| (key, col.to_string()))
            .collect()
    }
}
