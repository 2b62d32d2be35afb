//! Read-only view over an externally supplied glyph library.
//!
//! The notation addresses glyphs by their *position* in the library, so
//! the catalog is an immutable, ordered snapshot taken once per run: a
//! plain array of glyph definitions whose iteration order cannot shift
//! under the parser.

use std::collections::HashMap;

use derive_new::new;
use thiserror::Error;

use crate::color::Rgb;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A style property value on a glyph sub-path, as found in glyph
/// library definitions (colors for `edgecolor`/`facecolor` properties,
/// plain numbers for properties like `linewidth`).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Color(Rgb),
    Scalar(f64),
}

/// One drawable sub-path of a glyph, with its structural class and
/// default style properties.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(new, Debug, Clone, PartialEq)]
pub struct GlyphPath {
    id: String,
    class: String,
    style: HashMap<String, StyleValue>,
}

impl GlyphPath {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn style(&self) -> &HashMap<String, StyleValue> {
        &self.style
    }
}

/// A named glyph definition: an ordered collection of sub-paths.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(new, Debug, Clone, PartialEq)]
pub struct Glyph {
    name: String,
    paths: Vec<GlyphPath>,
}

impl Glyph {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn paths(&self) -> &[GlyphPath] {
        &self.paths
    }
}

/// An ordered glyph library snapshot.
///
/// Index lookups are positional over the snapshot order, which is fixed
/// at construction. The catalog is never mutated by the parser and may
/// be shared across repeated invocations.
///
/// ```
/// use sbolv_shorthand::catalog::{Glyph, GlyphCatalog};
/// let catalog = GlyphCatalog::new(vec![
///     Glyph::new("promoter".to_owned(), vec![]),
///     Glyph::new("cds".to_owned(), vec![]),
/// ]);
/// assert_eq!(catalog.resolve(1).unwrap().name(), "cds");
/// assert!(catalog.resolve(2).is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphCatalog {
    glyphs: Vec<Glyph>,
}

impl GlyphCatalog {
    pub fn new(glyphs: Vec<Glyph>) -> Self {
        GlyphCatalog { glyphs }
    }

    /// The number of glyphs in the catalog.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Resolves a notation index to the glyph at that position.
    pub fn resolve(&self, index: usize) -> Result<&Glyph, CatalogError> {
        self.glyphs.get(index).ok_or(CatalogError::IndexOutOfRange {
            index,
            len: self.glyphs.len(),
        })
    }

    /// Looks up a glyph definition by name.
    pub fn get(&self, name: &str) -> Option<&Glyph> {
        self.glyphs.iter().find(|g| g.name == name)
    }

    /// Like [`GlyphCatalog::get`], but an absent name is an error.
    pub fn require(&self, name: &str) -> Result<&Glyph, CatalogError> {
        self.get(name)
            .ok_or_else(|| CatalogError::UnknownGlyph(name.to_owned()))
    }

    /// Glyph names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.glyphs.iter().map(|g| g.name.as_str())
    }
}

/// Errors that arise in resolving glyph references.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("glyph index {index} out of range for a catalog of {len} glyphs")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("glyph {0:?} is not in the catalog")]
    UnknownGlyph(String),
}


#[cfg(test)]
mod tests {
    use super::testing::numbered_catalog;
    use super::*;

    #[test]
    fn resolve_is_positional_over_catalog_order() {
        let catalog = numbered_catalog(50);
        assert_eq!(catalog.len(), 50);
        assert_eq!(catalog.resolve(0).unwrap().name(), "glyph-0");
        assert_eq!(catalog.resolve(25).unwrap().name(), "glyph-25");
        assert_eq!(catalog.resolve(49).unwrap().name(), "glyph-49");
    }

    #[test]
    fn resolve_rejects_out_of_range_indices() {
        let catalog = numbered_catalog(50);
        assert_eq!(
            catalog.resolve(50),
            Err(CatalogError::IndexOutOfRange { index: 50, len: 50 })
        );
        assert_eq!(
            catalog.resolve(60),
            Err(CatalogError::IndexOutOfRange { index: 60, len: 50 })
        );
    }

    #[test]
    fn lookup_by_name() {
        let catalog = numbered_catalog(3);
        assert_eq!(catalog.get("glyph-1").unwrap().name(), "glyph-1");
        assert!(catalog.get("nonesuch").is_none());
        assert_eq!(
            catalog.require("nonesuch"),
            Err(CatalogError::UnknownGlyph("nonesuch".to_owned()))
        );
    }

    #[test]
    fn names_iterate_in_order() {
        let catalog = numbered_catalog(3);
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["glyph-0", "glyph-1", "glyph-2"]);
    }
}
