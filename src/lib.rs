//! Pixel format identification for video pipelines.
//!
//! Translates between human-readable format names, the 32-bit format-code
//! space (partly bit-packed FourCC-style, partly arbitrarily enumerated)
//! and the geometric properties a pixel buffer of that format implies:
//! chroma subsampling shifts, component bit depth and an approximate
//! bytes-per-pixel weight for allocation sizing.
//!
//! The crate never touches pixel memory. It reports geometry; colorspace
//! conversion, buffer allocation and codec negotiation live elsewhere.
//!
//! - [names::parse_format_name] resolves a name string to a
//!   [format_code::FormatCode] (or the unknown sentinel)
//! - [describe::format_description] labels any code for diagnostics/UI
//! - [geometry::chroma_geometry] decodes a code into a
//!   [geometry::ChromaGeometry], or fails explicitly
//!
//! All three paths are pure functions over immutable static tables, safe to
//! call concurrently from any thread.

pub mod describe;
pub mod format_code;
pub mod geometry;
pub mod names;

pub use describe::format_description;
pub use format_code::FormatCode;
pub use geometry::{ChromaGeometry, FormatClass, UnknownFormatError, chroma_geometry, classify};
pub use names::parse_format_name;
