//! Colors for parts and interactions.
//!
//! The shorthand notation names colors by a small numeric code
//! (`"1"` through `"14"`); programmatic callers may instead supply an
//! explicit RGB triple. Both forms resolve to normalized channels in
//! `[0, 1]`, which is what the renderer expects.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An RGB color with each channel normalized into `[0, 1]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f64, pub f64, pub f64);

impl Rgb {
    /// Build a normalized color from 8-bit channels.
    ///
    /// ```
    /// use sbolv_shorthand::color::Rgb;
    /// assert_eq!(Rgb::from_u8(255, 0, 0), Rgb(1.0, 0.0, 0.0));
    /// ```
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Rgb(f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0)
    }
}

/// A color as given by the caller: either a palette code from the
/// notation, or an already-resolved triple.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    /// A palette code, `"1"` through `"14"`.
    Code(String),
    /// An explicit color, passed through unchanged.
    Rgb(Rgb),
}

impl ColorSpec {
    /// Resolves this specification to a normalized RGB triple.
    ///
    /// Palette codes map to the fixed preset palette (codes `"7"` and
    /// `"8"` share a triple); explicit triples are returned unchanged.
    ///
    /// ```
    /// use sbolv_shorthand::color::{ColorSpec, Rgb};
    /// assert_eq!(ColorSpec::Code("6".to_owned()).resolve().unwrap(), Rgb(1.0, 0.0, 0.0));
    /// assert!(ColorSpec::Code("15".to_owned()).resolve().is_err());
    /// ```
    pub fn resolve(&self) -> Result<Rgb, ColorError> {
        match self {
            ColorSpec::Rgb(rgb) => Ok(*rgb),
            ColorSpec::Code(code) => match code.as_str() {
                "1" => Ok(Rgb::from_u8(51, 204, 255)),
                "2" => Ok(Rgb::from_u8(0, 0, 153)),
                "3" => Ok(Rgb::from_u8(0, 204, 102)),
                "4" => Ok(Rgb::from_u8(0, 102, 0)),
                "5" => Ok(Rgb::from_u8(255, 102, 102)),
                "6" => Ok(Rgb::from_u8(255, 0, 0)),
                "7" => Ok(Rgb::from_u8(255, 153, 102)),
                "8" => Ok(Rgb::from_u8(255, 153, 102)),
                "9" => Ok(Rgb::from_u8(255, 153, 255)),
                "10" => Ok(Rgb::from_u8(204, 0, 204)),
                "11" => Ok(Rgb::from_u8(255, 255, 102)),
                "12" => Ok(Rgb::from_u8(255, 204, 0)),
                "13" => Ok(Rgb::from_u8(140, 140, 140)),
                "14" => Ok(Rgb::from_u8(0, 0, 0)),
                unknown => Err(ColorError::UnknownCode(unknown.to_owned())),
            },
        }
    }
}

impl From<Rgb> for ColorSpec {
    fn from(rgb: Rgb) -> Self {
        ColorSpec::Rgb(rgb)
    }
}

/// Errors that arise in resolving color specifications.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("unknown color code {0:?}; valid codes are \"1\" through \"14\"")]
    UnknownCode(String),
}
