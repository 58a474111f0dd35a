//! Layered panel settings and the injected catalog document.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::{Filter, FilterCatalog, FilterGroup, LabelMap, PropertyKey};
use shared::error::CatalogError;

use crate::results::ResultItem;

#[derive(Debug, Clone)]
pub struct Settings {
    pub allow_collapse: bool,
    pub catalog_path: Option<PathBuf>,
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allow_collapse: true,
            catalog_path: None,
            window_title: "Facet Filter Panel".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    allow_collapse: Option<bool>,
    catalog_path: Option<PathBuf>,
    window_title: Option<String>,
}

/// Defaults, then the optional settings file, then `PANEL__*` environment
/// overrides. CLI flags are merged on top by the caller.
pub fn load_settings(config_path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(config_path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.allow_collapse {
                    settings.allow_collapse = v;
                }
                if let Some(v) = file_cfg.catalog_path {
                    settings.catalog_path = Some(v);
                }
                if let Some(v) = file_cfg.window_title {
                    settings.window_title = v;
                }
            }
            Err(err) => tracing::warn!(
                "ignoring malformed settings file {}: {err}",
                config_path.display()
            ),
        }
    }

    if let Ok(v) = env::var("PANEL__ALLOW_COLLAPSE") {
        if let Some(parsed) = parse_bool_flag(&v) {
            settings.allow_collapse = parsed;
        }
    }
    if let Ok(v) = env::var("PANEL__CATALOG_PATH") {
        settings.catalog_path = Some(PathBuf::from(v));
    }
    if let Ok(v) = env::var("PANEL__WINDOW_TITLE") {
        settings.window_title = v;
    }

    settings
}

fn parse_bool_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// On-disk shape of the injected catalog: available filters grouped by
/// property, display labels, and the demo result rows the worker filters.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    pub groups: Vec<GroupEntry>,
    #[serde(default)]
    pub items: Vec<ItemEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupEntry {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    #[serde(default)]
    pub tags: BTreeMap<String, Vec<String>>,
}

pub struct CatalogParts {
    pub catalog: FilterCatalog,
    pub labels: LabelMap,
    pub items: Vec<ResultItem>,
}

impl CatalogDocument {
    pub fn into_parts(self) -> Result<CatalogParts, CatalogError> {
        let mut labels = LabelMap::default();
        let mut groups = Vec::with_capacity(self.groups.len());
        for entry in self.groups {
            let key = PropertyKey::new(entry.key);
            if let Some(label) = entry.label {
                labels.insert(key.clone(), label);
            }
            let filters = entry
                .values
                .into_iter()
                .map(|value| Filter {
                    property: key.clone(),
                    value,
                })
                .collect();
            groups.push(FilterGroup { key, filters });
        }
        let catalog = FilterCatalog::from_groups(groups)?;

        let items = self
            .items
            .into_iter()
            .map(|entry| ResultItem {
                name: entry.name,
                tags: entry
                    .tags
                    .into_iter()
                    .flat_map(|(property, values)| {
                        let key = PropertyKey::new(property);
                        values.into_iter().map(move |value| Filter {
                            property: key.clone(),
                            value,
                        })
                    })
                    .collect(),
            })
            .collect();

        Ok(CatalogParts {
            catalog,
            labels,
            items,
        })
    }
}

/// Built-in catalog used when no document is configured.
pub fn sample_document() -> CatalogDocument {
    fn group(key: &str, label: &str, values: &[&str]) -> GroupEntry {
        GroupEntry {
            key: key.to_string(),
            label: Some(label.to_string()),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    fn item(name: &str, tags: &[(&str, &[&str])]) -> ItemEntry {
        ItemEntry {
            name: name.to_string(),
            tags: tags
                .iter()
                .map(|(key, values)| {
                    (
                        key.to_string(),
                        values.iter().map(|v| v.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    CatalogDocument {
        groups: vec![
            group("category", "Category", &["Web", "Embedded", "Tooling"]),
            group("language", "Language", &["Rust", "TypeScript", "Python"]),
            group("status", "Status", &["Active", "Archived"]),
        ],
        items: vec![
            item(
                "signal-dashboard",
                &[
                    ("category", &["Web"]),
                    ("language", &["TypeScript"]),
                    ("status", &["Active"]),
                ],
            ),
            item(
                "sensor-firmware",
                &[
                    ("category", &["Embedded"]),
                    ("language", &["Rust"]),
                    ("status", &["Active"]),
                ],
            ),
            item(
                "telemetry-relay",
                &[
                    ("category", &["Embedded", "Tooling"]),
                    ("language", &["Rust"]),
                    ("status", &["Archived"]),
                ],
            ),
            item(
                "release-scripts",
                &[
                    ("category", &["Tooling"]),
                    ("language", &["Python"]),
                    ("status", &["Active"]),
                ],
            ),
            item(
                "storefront",
                &[
                    ("category", &["Web"]),
                    ("language", &["TypeScript", "Rust"]),
                    ("status", &["Archived"]),
                ],
            ),
            item(
                "build-cache",
                &[
                    ("category", &["Tooling"]),
                    ("language", &["Rust"]),
                    ("status", &["Active"]),
                ],
            ),
        ],
    }
}

pub fn load_catalog(settings: &Settings) -> anyhow::Result<CatalogParts> {
    let document = match &settings.catalog_path {
        Some(path) => {
            let raw = fs::read_to_string(path).with_context(|| {
                format!("failed to read catalog document '{}'", path.display())
            })?;
            serde_json::from_str::<CatalogDocument>(&raw).with_context(|| {
                format!("failed to parse catalog document '{}'", path.display())
            })?
        }
        None => sample_document(),
    };

    document
        .into_parts()
        .context("catalog document failed validation")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_bool_flag_spellings() {
        assert_eq!(parse_bool_flag("1"), Some(true));
        assert_eq!(parse_bool_flag(" TRUE "), Some(true));
        assert_eq!(parse_bool_flag("off"), Some(false));
        assert_eq!(parse_bool_flag("no"), Some(false));
        assert_eq!(parse_bool_flag("maybe"), None);
    }

    #[test]
    fn file_settings_are_all_optional() {
        let parsed: FileSettings = toml::from_str("allow_collapse = false").expect("toml");
        assert_eq!(parsed.allow_collapse, Some(false));
        assert!(parsed.catalog_path.is_none());
        assert!(parsed.window_title.is_none());
    }

    #[test]
    fn sample_document_converts_and_validates() {
        let parts = sample_document().into_parts().expect("sample catalog");

        let keys: Vec<&str> = parts
            .catalog
            .groups()
            .iter()
            .map(|g| g.key.as_str())
            .collect();
        assert_eq!(keys, vec!["category", "language", "status"]);
        assert_eq!(
            parts.labels.label_for(&PropertyKey::new("category")),
            "Category"
        );
        assert!(!parts.items.is_empty());
    }

    #[test]
    fn catalog_document_rejects_duplicate_values() {
        let document = CatalogDocument {
            groups: vec![GroupEntry {
                key: "color".to_string(),
                label: None,
                values: vec!["Red".to_string(), "Red".to_string()],
            }],
            items: Vec::new(),
        };

        assert!(document.into_parts().is_err());
    }

    #[test]
    fn missing_catalog_document_is_a_startup_error() {
        let settings = Settings {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.json")),
            ..Settings::default()
        };

        assert!(load_catalog(&settings).is_err());
    }

    #[test]
    fn json_document_round_trips_through_parts() {
        let raw = r#"{
            "groups": [
                {"key": "color", "label": "Colour", "values": ["Red", "Blue"]},
                {"key": "size", "values": ["S", "M"]}
            ],
            "items": [
                {"name": "shirt", "tags": {"color": ["Red"], "size": ["M"]}}
            ]
        }"#;

        let document: CatalogDocument = serde_json::from_str(raw).expect("json");
        let parts = document.into_parts().expect("parts");

        assert_eq!(parts.catalog.groups().len(), 2);
        assert_eq!(parts.labels.label_for(&PropertyKey::new("size")), "size");
        assert_eq!(parts.items[0].tags.len(), 2);
    }
}
