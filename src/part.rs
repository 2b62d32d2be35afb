//! Parts of a genetic construct and the shorthand construct parser.
//!
//! A construct is written as comma-separated part tokens, each token
//! being space-separated fields `[<]index color [label]`: a positional
//! glyph index (a leading `<` reverses the part), a color code, and an
//! optional display label. For example, `25 1,3 3,<43 6 term1` is a
//! three-part construct whose last part is reversed and labelled.

use std::num::ParseIntError;

use derive_new::new;
use lazy_static::lazy_static;
use regex::Regex;
use strum_macros::{AsRefStr, Display};
use thiserror::Error;

use crate::catalog::{CatalogError, GlyphCatalog};
use crate::color::{ColorError, ColorSpec, Rgb};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Drawing direction of a part along the construct baseline.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    Forward,
    Reverse,
}

impl Orientation {
    /// Splits a leading `<` orientation marker off an index field.
    ///
    /// Returns the rest of the field and the orientation it encodes:
    /// a marker means [`Orientation::Reverse`], its absence means
    /// [`Orientation::Forward`].
    ///
    /// ```
    /// use sbolv_shorthand::part::Orientation;
    /// assert_eq!(Orientation::break_marker("<43"), ("43", Orientation::Reverse));
    /// assert_eq!(Orientation::break_marker("43"), ("43", Orientation::Forward));
    /// ```
    pub fn break_marker(field: &str) -> (&str, Orientation) {
        match field.strip_prefix('<') {
            Some(rest) => (rest, Orientation::Reverse),
            None => (field, Orientation::Forward),
        }
    }
}

/// One drawable element of a construct, fully resolved against the
/// glyph catalog. Immutable once built; construct order is preserved
/// and later serves as the index space for interaction endpoints.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(new, Debug, Clone, PartialEq)]
pub struct Part {
    glyph: String,
    orientation: Orientation,
    color: Rgb,
    label: Option<String>,
}

impl Part {
    /// Name of the resolved glyph in the catalog.
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Display label carried verbatim from the notation, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Parses a full construct string into its parts, in notation order.
///
/// The input order is the construct's linear layout and is preserved
/// exactly; interaction endpoints later index into this sequence.
///
/// ```
/// use sbolv_shorthand::catalog::{Glyph, GlyphCatalog};
/// use sbolv_shorthand::part::{parse_construct, Orientation};
/// let catalog = GlyphCatalog::new(
///     vec!["promoter", "res", "cds", "terminator"]
///         .into_iter()
///         .map(|name| Glyph::new(name.to_owned(), vec![]))
///         .collect(),
/// );
/// let parts = parse_construct("0 1,2 3,<3 6 term1", &catalog).unwrap();
/// assert_eq!(parts.len(), 3);
/// assert_eq!(parts[1].glyph(), "cds");
/// assert_eq!(parts[2].orientation(), Orientation::Reverse);
/// assert_eq!(parts[2].label(), Some("term1"));
/// ```
pub fn parse_construct(notation: &str, catalog: &GlyphCatalog) -> Result<Vec<Part>, PartParseError> {
    notation
        .split(',')
        .map(|token| parse_part(token, catalog))
        .collect()
}

/// Parses a single part token against the catalog.
pub fn parse_part(token: &str, catalog: &GlyphCatalog) -> Result<Part, PartParseError> {
    lazy_static! {
        // Exactly two or three space-separated fields; the optional
        // leading marker belongs to the index field.
        static ref PART_RE: Regex = Regex::new(r"^(<?\d+) ([^ ]+)( [^ ]+)?$").unwrap();
    }

    let cap = PART_RE
        .captures(token)
        .ok_or_else(|| PartParseError::MalformedToken(token.to_owned()))?;

    let (index_field, orientation) = Orientation::break_marker(&cap[1]);
    let index: usize = index_field.parse().map_err(PartParseError::ParseIndex)?;
    let glyph = catalog.resolve(index)?;
    let color = ColorSpec::Code(cap[2].to_owned()).resolve()?;
    let label = cap.get(3).map(|m| m.as_str()[1..].to_owned());

    Ok(Part::new(glyph.name().to_owned(), orientation, color, label))
}

/// Errors that arise in parsing part tokens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PartParseError {
    #[error("malformed part token {0:?}; expected \"[<]index color [label]\"")]
    MalformedToken(String),
    #[error("glyph index is not a valid integer: {0}")]
    ParseIndex(#[source] ParseIntError),
    #[error(transparent)]
    Glyph(#[from] CatalogError),
    #[error(transparent)]
    Color(#[from] ColorError),
}
