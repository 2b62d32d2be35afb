//! Assembly of a complete, renderer-ready request.
//!
//! This ties the pipeline together: construct parsing, formatting,
//! interaction parsing and rotation evaluation, plus the gap-size
//! pass-through. Any failure aborts the whole pipeline; a partial
//! request is never produced.

use thiserror::Error;

use crate::catalog::{CatalogError, GlyphCatalog};
use crate::format::{format_parts, FormattedPart};
use crate::interaction::{parse_interactions, Interaction, InteractionError};
use crate::part::{parse_construct, PartParseError};
use crate::rotation::{self, RotationError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default spacing between drawn parts, matching the CLI default.
pub const DEFAULT_GAP_SIZE: f64 = 3.0;

/// Everything the external renderer needs to draw a construct.
///
/// `interactions` reference parts by their position in the original
/// parsed sequence, which `parts` preserves one-to-one.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub parts: Vec<FormattedPart>,
    pub interactions: Vec<Interaction>,
    pub rotation: f64,
    pub gap_size: f64,
}

/// Runs the full notation pipeline against a glyph catalog.
///
/// `interactions` and `rotation` are optional inputs: `None` or an
/// empty string mean no interactions and a rotation of zero, without
/// involving the respective parsers at all.
///
/// ```
/// use sbolv_shorthand::catalog::{Glyph, GlyphCatalog};
/// use sbolv_shorthand::request::{build_request, DEFAULT_GAP_SIZE};
/// let catalog = GlyphCatalog::new(
///     (0..50).map(|i| Glyph::new(format!("glyph-{}", i), vec![])).collect(),
/// );
/// let request = build_request(
///     &catalog,
///     "25 1,3 3,43 6",
///     Some("0,1,in,5"),
///     Some("360/4"),
///     DEFAULT_GAP_SIZE,
/// )
/// .unwrap();
/// assert_eq!(request.parts.len(), 3);
/// assert_eq!(request.interactions.len(), 1);
/// assert_eq!(request.rotation, 90.0);
/// ```
pub fn build_request(
    catalog: &GlyphCatalog,
    notation: &str,
    interactions: Option<&str>,
    rotation: Option<&str>,
    gap_size: f64,
) -> Result<RenderRequest, NotationError> {
    let parts = parse_construct(notation, catalog)?;
    let formatted = format_parts(&parts, catalog)?;
    let rotation = match rotation {
        Some(expr) if !expr.is_empty() => rotation::evaluate(expr)?,
        _ => 0.0,
    };
    let interactions = match interactions {
        Some(input) if !input.is_empty() => parse_interactions(input, &parts)?,
        _ => Vec::new(),
    };
    Ok(RenderRequest {
        parts: formatted,
        interactions,
        rotation,
        gap_size,
    })
}

/// Any error the notation pipeline can report. Every variant is a
/// user-input validation failure; the caller is expected to show the
/// message verbatim and re-prompt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotationError {
    #[error(transparent)]
    Part(#[from] PartParseError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Interaction(#[from] InteractionError),
    #[error(transparent)]
    Rotation(#[from] RotationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::numbered_catalog;
    use crate::color::ColorSpec;
    use crate::interaction::InteractionKind;
    use crate::part::Orientation;

    #[test]
    fn full_pipeline() {
        let catalog = numbered_catalog(50);
        let request = build_request(
            &catalog,
            "25 3,3 10 gfp,<43 6",
            Some("1,2,co,10//0,1,in,5"),
            Some("2*(3+4)"),
            DEFAULT_GAP_SIZE,
        )
        .unwrap();

        assert_eq!(request.parts.len(), 3);
        assert_eq!(request.parts[0].glyph(), "glyph-25");
        assert_eq!(
            request.parts[1].options().label_parameters().unwrap().text(),
            "gfp"
        );
        assert_eq!(request.parts[2].options().orientation(), Orientation::Reverse);

        assert_eq!(request.interactions.len(), 2);
        assert_eq!(request.interactions[0].kind(), InteractionKind::Control);
        assert_eq!(
            request.interactions[1].color(),
            ColorSpec::Code("5".to_owned()).resolve().unwrap()
        );

        assert_eq!(request.rotation, 14.0);
        assert_eq!(request.gap_size, DEFAULT_GAP_SIZE);
    }

    #[test]
    fn absent_inputs_default_to_no_interactions_and_zero_rotation() {
        let catalog = numbered_catalog(50);
        for (interactions, rotation) in [(None, None), (Some(""), Some(""))].iter() {
            let request =
                build_request(&catalog, "25 1", *interactions, *rotation, 1.0).unwrap();
            assert!(request.interactions.is_empty());
            assert_eq!(request.rotation, 0.0);
        }
    }

    #[test]
    fn gap_size_passes_through_unmodified() {
        let catalog = numbered_catalog(50);
        let request = build_request(&catalog, "25 1", None, None, 7.25).unwrap();
        assert_eq!(request.gap_size, 7.25);
    }

    #[test]
    fn any_stage_failure_aborts_the_pipeline() {
        let catalog = numbered_catalog(50);
        assert!(matches!(
            build_request(&catalog, "60 1", None, None, 1.0),
            Err(NotationError::Part(_))
        ));
        assert!(matches!(
            build_request(&catalog, "25 1", Some("0,5,in,5"), None, 1.0),
            Err(NotationError::Interaction(_))
        ));
        assert!(matches!(
            build_request(&catalog, "25 1", None, Some("2^3"), 1.0),
            Err(NotationError::Rotation(_))
        ));
    }
}
