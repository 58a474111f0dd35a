use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PropertyKey(pub String);

impl PropertyKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One selectable criterion: a value belonging to a property group.
/// Identity is the whole pair; no field changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Filter {
    pub property: PropertyKey,
    pub value: String,
}

impl Filter {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: PropertyKey::new(property),
            value: value.into(),
        }
    }
}

/// The active selection. A `BTreeSet` keeps membership unique and gives the
/// renderer a stable iteration order.
pub type SelectedFilters = BTreeSet<Filter>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterGroup {
    pub key: PropertyKey,
    pub filters: Vec<Filter>,
}

/// Catalog of available filters, one group per property, in authored order.
#[derive(Debug, Clone, Default)]
pub struct FilterCatalog {
    groups: Vec<FilterGroup>,
}

impl FilterCatalog {
    pub fn from_groups(groups: Vec<FilterGroup>) -> Result<Self, CatalogError> {
        let mut seen_keys = BTreeSet::new();
        for group in &groups {
            if group.key.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyPropertyKey);
            }
            if !seen_keys.insert(group.key.clone()) {
                return Err(CatalogError::DuplicateProperty(group.key.clone()));
            }
            let mut seen_values = BTreeSet::new();
            for filter in &group.filters {
                if filter.property != group.key {
                    return Err(CatalogError::MisfiledFilter {
                        group: group.key.clone(),
                        filter: filter.clone(),
                    });
                }
                if !seen_values.insert(filter.value.as_str()) {
                    return Err(CatalogError::DuplicateValue {
                        group: group.key.clone(),
                        value: filter.value.clone(),
                    });
                }
            }
        }

        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[FilterGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn contains(&self, filter: &Filter) -> bool {
        self.groups
            .iter()
            .any(|group| group.key == filter.property && group.filters.contains(filter))
    }
}

/// Injected property-key to display-label mapping.
#[derive(Debug, Clone, Default)]
pub struct LabelMap(BTreeMap<PropertyKey, String>);

impl LabelMap {
    pub fn new(labels: BTreeMap<PropertyKey, String>) -> Self {
        Self(labels)
    }

    pub fn insert(&mut self, key: PropertyKey, label: impl Into<String>) {
        self.0.insert(key, label.into());
    }

    /// Falls back to the raw property key when no label is configured.
    pub fn label_for<'a>(&'a self, key: &'a PropertyKey) -> &'a str {
        self.0.get(key).map(String::as_str).unwrap_or(key.as_str())
    }
}
