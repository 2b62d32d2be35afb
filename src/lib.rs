//! Parser and semantic resolver for shorthand genetic construct
//! notation: a compact, human-typed string like `25 1,3 3,<43 6` is
//! turned into validated, renderer-ready part and interaction records
//! for a paraSBOLv-style glyph renderer. This crate owns tokenization,
//! glyph and color resolution, and rotation-expression evaluation;
//! drawing and layout belong to the renderer.

pub mod catalog;
pub mod color;
pub mod format;
pub mod interaction;
pub mod part;
pub mod request;
pub mod rotation;
