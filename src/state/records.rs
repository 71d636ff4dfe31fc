//! Inventory Records
//!
//! The three record kinds and the `Record` trait that lets one generic list
//! view serve all of them.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::json;

/// One column of a record's form/grid schema. `id` is not a field: it is
/// server-assigned and never part of a request payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
}

/// A row of a resource collection as returned by the API.
///
/// Implementations describe their collection path and field schema so the
/// API client, add form, and data grid can be generic over the kind.
pub trait Record: Clone + PartialEq + DeserializeOwned + 'static {
    /// URL path segment of the collection, e.g. `"chemicals"`.
    const COLLECTION: &'static str;
    /// Singular display name, e.g. `"Chemical"`.
    const LABEL: &'static str;
    /// Plural page title, e.g. `"Chemicals"`.
    const TITLE: &'static str;
    /// Non-id fields, in display order.
    const FIELDS: &'static [FieldSpec];
    /// Whether grid cells of this kind commit in-place edits via PUT.
    const INLINE_EDIT: bool;

    fn id(&self) -> i64;

    /// Value of a schema field. Unknown keys read as empty.
    fn field(&self, key: &str) -> &str;

    /// Copy of this record with one schema field replaced.
    fn with_field(&self, key: &str, value: String) -> Self;

    /// JSON body for POST/PUT: every schema field, never `id`.
    fn payload(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for field in Self::FIELDS {
            map.insert(field.key.to_string(), json!(self.field(field.key)));
        }
        serde_json::Value::Object(map)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Chemical {
    pub id: i64,
    pub name: String,
    pub formula: String,
    pub amount: String,
}

impl Record for Chemical {
    const COLLECTION: &'static str = "chemicals";
    const LABEL: &'static str = "Chemical";
    const TITLE: &'static str = "Chemicals";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "name", label: "Name" },
        FieldSpec { key: "formula", label: "Formula" },
        FieldSpec { key: "amount", label: "Amount" },
    ];
    const INLINE_EDIT: bool = true;

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> &str {
        match key {
            "name" => &self.name,
            "formula" => &self.formula,
            "amount" => &self.amount,
            _ => "",
        }
    }

    fn with_field(&self, key: &str, value: String) -> Self {
        let mut record = self.clone();
        match key {
            "name" => record.name = value,
            "formula" => record.formula = value,
            "amount" => record.amount = value,
            _ => {}
        }
        record
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Glassware {
    pub id: i64,
    pub name: String,
    pub amount: String,
}

impl Record for Glassware {
    const COLLECTION: &'static str = "glassware";
    const LABEL: &'static str = "Glassware";
    const TITLE: &'static str = "Glassware";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "name", label: "Name" },
        FieldSpec { key: "amount", label: "Amount" },
    ];
    const INLINE_EDIT: bool = true;

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> &str {
        match key {
            "name" => &self.name,
            "amount" => &self.amount,
            _ => "",
        }
    }

    fn with_field(&self, key: &str, value: String) -> Self {
        let mut record = self.clone();
        match key {
            "name" => record.name = value,
            "amount" => record.amount = value,
            _ => {}
        }
        record
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    pub amount: String,
}

impl Record for Equipment {
    const COLLECTION: &'static str = "equipment";
    const LABEL: &'static str = "Equipment";
    const TITLE: &'static str = "Equipment";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "name", label: "Name" },
        FieldSpec { key: "amount", label: "Amount" },
    ];
    const INLINE_EDIT: bool = false;

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> &str {
        match key {
            "name" => &self.name,
            "amount" => &self.amount,
            _ => "",
        }
    }

    fn with_field(&self, key: &str, value: String) -> Self {
        let mut record = self.clone();
        match key {
            "name" => record.name = value,
            "amount" => record.amount = value,
            _ => {}
        }
        record
    }
}

/// Static lookup from lowercased chemical name to a safety-data-sheet URL,
/// loaded once from the bundled document at Chemicals-page mount.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(transparent)]
pub struct SdsLookup(HashMap<String, String>);

impl SdsLookup {
    /// Case-insensitive exact-match lookup.
    pub fn url_for(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_lowercase()).map(String::as_str)
    }
}

/// Replace the record with a matching id, leaving every other row alone.
/// No-op when the id is absent (e.g. the row was deleted mid-flight).
pub fn replace_record<R: Record>(items: &mut [R], fresh: R) {
    if let Some(slot) = items.iter_mut().find(|r| r.id() == fresh.id()) {
        *slot = fresh;
    }
}

/// Remove exactly the record with the given id, if present.
pub fn remove_record<R: Record>(items: &mut Vec<R>, id: i64) {
    items.retain(|r| r.id() != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chemical(id: i64, name: &str) -> Chemical {
        Chemical {
            id,
            name: name.to_string(),
            formula: "H2O".to_string(),
            amount: "500 mL".to_string(),
        }
    }

    #[test]
    fn payload_contains_all_fields_and_no_id() {
        let payload = chemical(7, "Water").payload();
        let obj = payload.as_object().unwrap();
        assert_eq!(obj.len(), Chemical::FIELDS.len());
        assert_eq!(obj["name"], "Water");
        assert_eq!(obj["formula"], "H2O");
        assert_eq!(obj["amount"], "500 mL");
        assert!(!obj.contains_key("id"));
    }

    #[test]
    fn with_field_replaces_only_that_field() {
        let edited = chemical(1, "Water").with_field("amount", "1 L".to_string());
        assert_eq!(edited.amount, "1 L");
        assert_eq!(edited.name, "Water");
        assert_eq!(edited.id, 1);
    }

    #[test]
    fn unknown_field_reads_empty_and_writes_nothing() {
        let record = chemical(1, "Water");
        assert_eq!(record.field("nope"), "");
        assert_eq!(record.with_field("nope", "x".to_string()), record);
    }

    #[test]
    fn replace_record_swaps_exactly_the_matching_row() {
        let mut items = vec![chemical(1, "Water"), chemical(2, "Ethanol")];
        replace_record(&mut items, chemical(2, "Acetone"));
        assert_eq!(items[0].name, "Water");
        assert_eq!(items[1].name, "Acetone");
    }

    #[test]
    fn replace_record_ignores_missing_id() {
        let mut items = vec![chemical(1, "Water")];
        replace_record(&mut items, chemical(9, "Acetone"));
        assert_eq!(items, vec![chemical(1, "Water")]);
    }

    #[test]
    fn remove_record_removes_only_the_matching_row() {
        let mut items = vec![chemical(1, "Water"), chemical(2, "Ethanol")];
        remove_record(&mut items, 1);
        assert_eq!(items, vec![chemical(2, "Ethanol")]);
        remove_record(&mut items, 42);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn sds_lookup_is_case_insensitive() {
        let lookup: SdsLookup =
            serde_json::from_str(r#"{"water": "https://example.com/water"}"#).unwrap();
        assert_eq!(lookup.url_for("Water"), Some("https://example.com/water"));
        assert_eq!(lookup.url_for("WATER"), Some("https://example.com/water"));
        assert_eq!(lookup.url_for("Ethanol"), None);
    }
}
