//! Regulatory interactions between parts and their shorthand parser.
//!
//! An interaction is written as four comma-separated fields
//! `source,target,kind,color`, where source and target are 0-based
//! positions in the parsed construct and kind is a two-letter code.
//! Several interactions can be batched with a `//` separator, e.g.
//! `1,3,co,10//6,7,de,4`.

use std::num::ParseIntError;

use derive_new::new;
use strum_macros::{AsRefStr, Display};
use thiserror::Error;

use crate::color::{ColorError, ColorSpec, Rgb};
use crate::part::Part;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The five recognized interaction kinds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum InteractionKind {
    Inhibition,
    Control,
    Degradation,
    Process,
    Stimulation,
}

impl InteractionKind {
    /// Resolves a two-letter shorthand code to its interaction kind.
    ///
    /// ```
    /// use sbolv_shorthand::interaction::InteractionKind;
    /// assert_eq!(InteractionKind::from_code("in").unwrap(), InteractionKind::Inhibition);
    /// assert!(InteractionKind::from_code("xx").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Self, InteractionError> {
        match code {
            "in" => Ok(InteractionKind::Inhibition),
            "co" => Ok(InteractionKind::Control),
            "de" => Ok(InteractionKind::Degradation),
            "pr" => Ok(InteractionKind::Process),
            "st" => Ok(InteractionKind::Stimulation),
            invalid => Err(InteractionError::InvalidKind(invalid.to_owned())),
        }
    }

    /// The shorthand code naming this kind.
    pub fn code(&self) -> &'static str {
        match self {
            InteractionKind::Inhibition => "in",
            InteractionKind::Control => "co",
            InteractionKind::Degradation => "de",
            InteractionKind::Process => "pr",
            InteractionKind::Stimulation => "st",
        }
    }
}

/// A directed, typed, colored relationship between two parts.
///
/// Endpoints are positions in the *original* parsed part sequence (not
/// the formatted one); both are validated against the sequence bounds
/// at parse time. A self-referential interaction (source == target) is
/// allowed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(new, Debug, Clone, PartialEq)]
pub struct Interaction {
    source: usize,
    target: usize,
    kind: InteractionKind,
    color: Rgb,
}

impl Interaction {
    /// Index of the source part in the parsed construct.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Index of the target part in the parsed construct.
    pub fn target(&self) -> usize {
        self.target
    }

    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    pub fn color(&self) -> Rgb {
        self.color
    }
}

/// Parses an interaction string, single or `//`-batched, against an
/// already-parsed part sequence.
///
/// Results are concatenated in input order.
pub fn parse_interactions(input: &str, parts: &[Part]) -> Result<Vec<Interaction>, InteractionError> {
    input
        .split("//")
        .map(|segment| parse_interaction(segment, parts.len()))
        .collect()
}

/// Parses one `source,target,kind,color` segment.
fn parse_interaction(segment: &str, parts_len: usize) -> Result<Interaction, InteractionError> {
    let fields: Vec<&str> = segment.split(',').collect();
    if fields.len() != 4 {
        return Err(InteractionError::MalformedInteraction(segment.to_owned()));
    }
    let source = parse_endpoint(fields[0], parts_len)?;
    let target = parse_endpoint(fields[1], parts_len)?;
    let kind = InteractionKind::from_code(fields[2])?;
    let color = ColorSpec::Code(fields[3].to_owned()).resolve()?;
    Ok(Interaction::new(source, target, kind, color))
}

fn parse_endpoint(field: &str, parts_len: usize) -> Result<usize, InteractionError> {
    let index: usize = field.parse().map_err(InteractionError::ParseEndpoint)?;
    if index >= parts_len {
        return Err(InteractionError::EndpointOutOfRange {
            index,
            len: parts_len,
        });
    }
    Ok(index)
}

/// Errors that arise in parsing interaction strings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InteractionError {
    #[error("malformed interaction {0:?}; expected \"source,target,kind,color\"")]
    MalformedInteraction(String),
    #[error("interaction endpoint is not a valid integer: {0}")]
    ParseEndpoint(#[source] ParseIntError),
    #[error("interaction endpoint {index} out of range for a construct of {len} parts")]
    EndpointOutOfRange { index: usize, len: usize },
    #[error("invalid interaction kind {0:?}; valid codes are \"in\", \"co\", \"de\", \"pr\" and \"st\"")]
    InvalidKind(String),
    #[error(transparent)]
    Color(#[from] ColorError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::numbered_catalog;
    use crate::part::parse_construct;

    fn eight_parts() -> Vec<Part> {
        let catalog = numbered_catalog(50);
        parse_construct("25 1,25 2,3 3,3 5,43 6,25 1,3 3,43 6", &catalog).unwrap()
    }

    #[test]
    fn kind_codes_are_a_bijection() {
        let kinds = [
            InteractionKind::Inhibition,
            InteractionKind::Control,
            InteractionKind::Degradation,
            InteractionKind::Process,
            InteractionKind::Stimulation,
        ];
        for kind in kinds.iter() {
            assert_eq!(InteractionKind::from_code(kind.code()).unwrap(), *kind);
        }
        assert_eq!(
            InteractionKind::from_code("xy"),
            Err(InteractionError::InvalidKind("xy".to_owned()))
        );
    }

    #[test]
    fn single_interaction() {
        let parts = eight_parts();
        let interactions = parse_interactions("0,1,in,5", &parts).unwrap();
        assert_eq!(interactions.len(), 1);
        assert_eq!(interactions[0].source(), 0);
        assert_eq!(interactions[0].target(), 1);
        assert_eq!(interactions[0].kind(), InteractionKind::Inhibition);
        assert_eq!(
            interactions[0].color(),
            ColorSpec::Code("5".to_owned()).resolve().unwrap()
        );
    }

    #[test]
    fn batched_interactions_concatenate_in_order() {
        let parts = eight_parts();
        let interactions = parse_interactions("0,1,in,5//1,3,co,10", &parts).unwrap();
        assert_eq!(interactions.len(), 2);
        assert_eq!(interactions[0].kind(), InteractionKind::Inhibition);
        assert_eq!(
            interactions[0].color(),
            ColorSpec::Code("5".to_owned()).resolve().unwrap()
        );
        assert_eq!(interactions[1].kind(), InteractionKind::Control);
        assert_eq!(
            interactions[1].color(),
            ColorSpec::Code("10".to_owned()).resolve().unwrap()
        );
    }

    #[test]
    fn self_interactions_are_allowed() {
        let parts = eight_parts();
        let interactions = parse_interactions("2,2,st,14", &parts).unwrap();
        assert_eq!(interactions[0].source(), interactions[0].target());
    }

    #[test]
    fn endpoints_are_bounds_checked() {
        let parts = eight_parts();
        assert_eq!(
            parse_interactions("0,8,in,5", &parts),
            Err(InteractionError::EndpointOutOfRange { index: 8, len: 8 })
        );
        assert!(matches!(
            parse_interactions("-1,0,in,5", &parts),
            Err(InteractionError::ParseEndpoint(_))
        ));
    }

    #[test]
    fn field_count_must_be_exactly_four() {
        let parts = eight_parts();
        for segment in ["", "0,1,in", "0,1,in,5,6"].iter() {
            assert!(matches!(
                parse_interactions(segment, &parts),
                Err(InteractionError::MalformedInteraction(_))
            ));
        }
    }

    #[test]
    fn one_bad_segment_aborts_the_batch() {
        let parts = eight_parts();
        assert_eq!(
            parse_interactions("0,1,in,5//1,3,zz,10", &parts),
            Err(InteractionError::InvalidKind("zz".to_owned()))
        );
    }
}
