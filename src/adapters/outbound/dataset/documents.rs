//! Parsing of the three JSON data documents.
//!
//! Object-shaped documents may carry annotation keys starting with `_`
//! (e.g. `_comment`); they are dropped before the document is typed.

use crate::content_selection::domain::{PoolSet, Vertical, VerticalSystems};
use crate::shared::error::PseoError;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

pub const VERTICALS_FILE: &str = "verticals.json";
pub const SOFTWARE_SYSTEMS_FILE: &str = "software-systems.json";
pub const COPY_POOLS_FILE: &str = "copy-pools.json";

/// Parses `verticals.json`: an array of verticals in catalog order
pub fn parse_verticals(content: &str, origin: &Path) -> Result<Vec<Vertical>> {
    let value = parse_value(content, origin)?;
    typed(value, origin)
}

/// Parses `software-systems.json`: source/destination tables keyed by vertical id
pub fn parse_software_systems(
    content: &str,
    origin: &Path,
) -> Result<BTreeMap<String, VerticalSystems>> {
    let value = strip_annotations(parse_value(content, origin)?);
    typed(value, origin)
}

/// Parses `copy-pools.json`: pool sets keyed by vertical id
pub fn parse_copy_pools(content: &str, origin: &Path) -> Result<BTreeMap<String, PoolSet>> {
    let value = strip_annotations(parse_value(content, origin)?);
    typed(value, origin)
}

fn parse_value(content: &str, origin: &Path) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| parse_error(origin, e))
}

fn typed<T: DeserializeOwned>(value: Value, origin: &Path) -> Result<T> {
    serde_json::from_value(value).map_err(|e| parse_error(origin, e))
}

fn strip_annotations(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(key, _)| !key.starts_with('_'))
                .collect(),
        ),
        other => other,
    }
}

fn parse_error(origin: &Path, err: serde_json::Error) -> anyhow::Error {
    PseoError::DataParseError {
        path: origin.to_path_buf(),
        details: err.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> &'static Path {
        Path::new("test.json")
    }

    #[test]
    fn test_parse_verticals() {
        let json = r#"[
            { "id": "accountants", "slug": "accountants", "name": "Accountants" },
            { "id": "logistics", "slug": "logistics", "name": "Logistics", "status": "planned" }
        ]"#;
        let verticals = parse_verticals(json, origin()).unwrap();
        assert_eq!(verticals.len(), 2);
        assert_eq!(verticals[1].id, "logistics");
    }

    #[test]
    fn test_comment_keys_ignored() {
        let json = r#"{
            "_comment": "ignored",
            "accountants": {
                "source": [{ "id": "xero", "slug": "xero", "name": "Xero" }]
            }
        }"#;
        let systems = parse_software_systems(json, origin()).unwrap();
        assert_eq!(systems.len(), 1);
        assert_eq!(systems["accountants"].source[0].name, "Xero");
        assert!(systems["accountants"].destination.is_empty());
    }

    #[test]
    fn test_invalid_slug_is_parse_error() {
        let json = r#"{
            "accountants": {
                "source": [{ "id": "qb", "slug": "Quick Books", "name": "QuickBooks" }]
            }
        }"#;
        let err = parse_software_systems(json, origin()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to parse data file: test.json"));
        assert!(message.contains("invalid characters"));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_copy_pools("{ not json", origin()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PseoError>(),
            Some(PseoError::DataParseError { .. })
        ));
    }

    #[test]
    fn test_wrong_shape() {
        let err = parse_verticals(r#"{ "id": "accountants" }"#, origin()).unwrap_err();
        assert!(err.to_string().contains("test.json"));
    }
}
