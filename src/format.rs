//! Conversion of parsed parts into the renderer's configuration shape.
//!
//! The renderer takes, per part, the glyph name, an options map with
//! the orientation and optional label parameters, and a style override
//! map that recolors the glyph's visible sub-paths to the part's color.

use std::collections::HashMap;

use derive_new::new;

use crate::catalog::{CatalogError, Glyph, GlyphCatalog};
use crate::color::Rgb;
use crate::part::{Orientation, Part};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Style overrides keyed by sub-path id; each sub-path maps the style
/// properties to replace to the part's resolved color.
pub type StyleOverrides = HashMap<String, HashMap<String, Rgb>>;

/// Label display parameters forwarded to the renderer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct LabelParameters {
    text: String,
}

impl LabelParameters {
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Per-part display options. `label_parameters` is present only when
/// the part carries a label.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(new, Debug, Clone, PartialEq)]
pub struct PartOptions {
    orientation: Orientation,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    label_parameters: Option<LabelParameters>,
}

impl PartOptions {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn label_parameters(&self) -> Option<&LabelParameters> {
        self.label_parameters.as_ref()
    }
}

/// A part in the shape expected by the renderer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(new, Debug, Clone, PartialEq)]
pub struct FormattedPart {
    glyph: String,
    options: PartOptions,
    style: StyleOverrides,
}

impl FormattedPart {
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn options(&self) -> &PartOptions {
        &self.options
    }

    pub fn style(&self) -> &StyleOverrides {
        &self.style
    }
}

/// Formats parsed parts for the renderer, one [`FormattedPart`] per
/// [`Part`], order preserved. Pure: formatting the same sequence twice
/// yields structurally identical output.
pub fn format_parts(
    parts: &[Part],
    catalog: &GlyphCatalog,
) -> Result<Vec<FormattedPart>, CatalogError> {
    parts
        .iter()
        .map(|part| {
            let glyph = catalog.require(part.glyph())?;
            let options = PartOptions::new(
                part.orientation(),
                part.label().map(|text| LabelParameters::new(text.to_owned())),
            );
            Ok(FormattedPart::new(
                part.glyph().to_owned(),
                options,
                style_overrides(glyph, part.color()),
            ))
        })
        .collect()
}

/// Builds the style override map recoloring a glyph to `color`.
///
/// Structural and backdrop sub-paths (class `baseline` or
/// `bounding-box`, or an id containing `background`) are left alone;
/// on every other sub-path, each style property whose name contains
/// `edge` is overridden with the part color.
fn style_overrides(glyph: &Glyph, color: Rgb) -> StyleOverrides {
    let mut overrides = StyleOverrides::new();
    for path in glyph.paths() {
        if path.class() == "baseline"
            || path.class() == "bounding-box"
            || path.id().contains("background")
        {
            continue;
        }
        let recolored: HashMap<String, Rgb> = path
            .style()
            .keys()
            .filter(|name| name.contains("edge"))
            .map(|name| (name.clone(), color))
            .collect();
        overrides.insert(path.id().to_owned(), recolored);
    }
    overrides
}
