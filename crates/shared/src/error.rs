use thiserror::Error;

use crate::domain::{Filter, PropertyKey};

/// Shape problems detected while building a [`crate::domain::FilterCatalog`].
/// Selection and visibility operations themselves are total and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("property key must not be empty")]
    EmptyPropertyKey,
    #[error("duplicate property key '{0}'")]
    DuplicateProperty(PropertyKey),
    #[error("duplicate value '{value}' under property '{group}'")]
    DuplicateValue { group: PropertyKey, value: String },
    #[error("filter '{}:{}' filed under property group '{group}'", .filter.property, .filter.value)]
    MisfiledFilter { group: PropertyKey, filter: Filter },
}
