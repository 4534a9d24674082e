//! Chroma geometry decoding.
//!
//! Decodes a [FormatCode] into per-axis chroma subsampling shifts, the
//! component bit depth and an approximate bits-per-pixel weight. Structured
//! codes carry a depth tag in the top byte and a chroma layout tag in the
//! low 24 bits and exist in two byte orders; a handful of legacy planar
//! constants are matched explicitly. Everything else is an error — callers
//! must treat that as "cannot process this format", never guess a layout.

use std::fmt::Display;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::format_code::FormatCode;

/// Byte-swapped structured codes: top byte 0x34, low nibble pattern 0x50.
const SWAPPED_MASK: u32 = 0xff00_00f0;
const SWAPPED_PATTERN: u32 = 0x3400_0050;

/// Native structured codes: top nibble 0x5, low byte 0x34.
const STRUCTURED_MASK: u32 = 0xf000_00ff;
const STRUCTURED_PATTERN: u32 = 0x5000_0034;

/// Component bit depth tag, carried in the top byte of a structured code.
#[repr(u32)]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum DepthTag {
    Bits8 = 0x50,
    Bits16 = 0x51,
    Bits10 = 0x52,
    Bits9 = 0x53,
}

impl DepthTag {
    pub const fn component_bits(self) -> u32 {
        match self {
            DepthTag::Bits8 => 8,
            DepthTag::Bits16 => 16,
            DepthTag::Bits10 => 10,
            DepthTag::Bits9 => 9,
        }
    }
}

/// Chroma layout tag, carried in the low 24 bits of a structured code as
/// three ASCII digits.
#[repr(u32)]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum LayoutTag {
    Yuv444 = 0x0034_3434,
    Yuv422 = 0x0032_3234,
    Yuv420 = 0x0030_3234,
    Yuv411 = 0x0031_3134,
    Yuv440 = 0x0030_3434,
}

impl LayoutTag {
    /// Log2 subsampling factors as (x_shift, y_shift).
    pub const fn shifts(self) -> (u32, u32) {
        match self {
            LayoutTag::Yuv444 => (0, 0),
            LayoutTag::Yuv422 => (1, 0),
            LayoutTag::Yuv420 => (1, 1),
            LayoutTag::Yuv411 => (2, 0),
            LayoutTag::Yuv440 => (0, 1),
        }
    }
}

/// The two decodable sub-spaces of the format-code domain.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum FormatClass {
    /// Bit-packed planar YUV code, already byte-order normalized.
    Structured { depth: DepthTag, layout: LayoutTag },
    /// Enumerated constant with no structural meaning.
    Legacy(FormatCode),
}

/// The code matches neither the structured bit pattern nor any legacy
/// constant with a known chroma layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownFormatError(pub FormatCode);

impl Display for UnknownFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "no known chroma geometry for format code {:#010x}",
            self.0.to_u32()
        )
    }
}

impl std::error::Error for UnknownFormatError {}

/// Chroma subsampling and depth information for one format.
///
/// `x_shift`/`y_shift` are log2 chroma subsampling factors per axis;
/// [ChromaGeometry::NO_CHROMA] marks luma-only formats. `bpp_weight` is an
/// approximate average bits per pixel across planes, meant for bandwidth
/// and allocation sizing estimates — never for computing buffer offsets.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct ChromaGeometry {
    pub x_shift: u32,
    pub y_shift: u32,
    pub component_bits: u32,
    pub bpp_weight: u32,
}

impl ChromaGeometry {
    /// Shift value for formats without a chroma plane. Shifting a dimension
    /// right by it collapses the chroma plane size to zero without
    /// branching.
    pub const NO_CHROMA: u32 = 31;
}

fn normalize(code: FormatCode) -> FormatCode {
    if code.to_u32() & SWAPPED_MASK == SWAPPED_PATTERN {
        code.swapped()
    } else {
        code
    }
}

/// Splits the format-code space into its structured and legacy halves.
///
/// A code matching the structured bit pattern whose depth or layout tag is
/// unassigned is an error, not a legacy fallthrough.
pub fn classify(code: FormatCode) -> Result<FormatClass, UnknownFormatError> {
    let normalized = normalize(code);
    let raw = normalized.to_u32();
    if raw & STRUCTURED_MASK != STRUCTURED_PATTERN {
        return Ok(FormatClass::Legacy(normalized));
    }
    let depth =
        DepthTag::try_from_primitive(raw >> 24).map_err(|_| UnknownFormatError(code))?;
    let layout = LayoutTag::try_from_primitive(raw & 0x00ff_ffff)
        .map_err(|_| UnknownFormatError(code))?;
    Ok(FormatClass::Structured { depth, layout })
}

/// Decodes the chroma geometry of a format code.
pub fn chroma_geometry(code: FormatCode) -> Result<ChromaGeometry, UnknownFormatError> {
    let (x_shift, y_shift, component_bits, has_alpha_plane) = match classify(code)? {
        FormatClass::Structured { depth, layout } => {
            let (xs, ys) = layout.shifts();
            (xs, ys, depth.component_bits(), false)
        }
        FormatClass::Legacy(code) => match code {
            FormatCode::YUV420A => (1, 1, 8, true),
            FormatCode::I420 | FormatCode::IYUV | FormatCode::YV12 => (1, 1, 8, false),
            FormatCode::IF09 | FormatCode::YVU9 => (2, 2, 8, false),
            FormatCode::Y8 | FormatCode::Y800 => (
                ChromaGeometry::NO_CHROMA,
                ChromaGeometry::NO_CHROMA,
                8,
                false,
            ),
            _ => return Err(UnknownFormatError(code)),
        },
    };

    // Base luma term plus the chroma contribution, which the NO_CHROMA
    // shift collapses to zero.
    let mut bpp_weight = 8 + ((16 >> x_shift) >> y_shift);
    if has_alpha_plane {
        bpp_weight += 8;
    }
    bpp_weight *= component_bits.div_ceil(8);

    Ok(ChromaGeometry {
        x_shift,
        y_shift,
        component_bits,
        bpp_weight,
    })
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn geometry(raw: u32) -> Result<ChromaGeometry, UnknownFormatError> {
        chroma_geometry(FormatCode::from_u32(raw))
    }

    fn structured(depth: DepthTag, layout: LayoutTag) -> FormatCode {
        FormatCode::from_u32(u32::from(depth) << 24 | u32::from(layout))
    }

    #[test]
    fn test_structured_grid() {
        for depth in DepthTag::iter() {
            for layout in LayoutTag::iter() {
                let expected_bits = match depth {
                    DepthTag::Bits8 => 8,
                    DepthTag::Bits16 => 16,
                    DepthTag::Bits10 => 10,
                    DepthTag::Bits9 => 9,
                };
                let expected_shifts = match layout {
                    LayoutTag::Yuv444 => (0, 0),
                    LayoutTag::Yuv422 => (1, 0),
                    LayoutTag::Yuv420 => (1, 1),
                    LayoutTag::Yuv411 => (2, 0),
                    LayoutTag::Yuv440 => (0, 1),
                };
                let g = chroma_geometry(structured(depth, layout))
                    .unwrap_or_else(|e| panic!("{depth:?}/{layout:?}: {e}"));
                assert_eq!((g.x_shift, g.y_shift), expected_shifts);
                assert_eq!(g.component_bits, expected_bits);
            }
        }
    }

    #[test]
    fn test_byte_order_symmetry() {
        for depth in DepthTag::iter() {
            for layout in LayoutTag::iter() {
                let native = structured(depth, layout);
                let swapped = FormatCode::from_u32(native.to_u32().swap_bytes());
                assert_eq!(
                    chroma_geometry(native).unwrap(),
                    chroma_geometry(swapped).unwrap(),
                    "{depth:?}/{layout:?}"
                );
            }
        }

        // the 4:2:0 8-bit pair, spelled out
        let g = geometry(0x5030_3234).unwrap();
        assert_eq!((g.x_shift, g.y_shift, g.component_bits), (1, 1, 8));
        let g = geometry(0x3432_3050).unwrap();
        assert_eq!((g.x_shift, g.y_shift, g.component_bits), (1, 1, 8));
    }

    #[test]
    fn test_structured_with_unassigned_tags() {
        // pattern matches, depth tag 0x54 is unassigned
        assert!(geometry(0x5430_3234).is_err());
        // pattern matches, layout "421" is unassigned
        assert!(geometry(0x5031_3234).is_err());
        // both tags unassigned
        assert!(geometry(0x5f35_3534).is_err());
    }

    #[test]
    fn test_legacy_420_family() {
        for code in [FormatCode::YV12, FormatCode::I420, FormatCode::IYUV] {
            let g = chroma_geometry(code).unwrap();
            assert_eq!((g.x_shift, g.y_shift), (1, 1));
            assert_eq!(g.component_bits, 8);
            assert_eq!(g.bpp_weight, 12);
        }
    }

    #[test]
    fn test_legacy_420_with_alpha() {
        let g = chroma_geometry(FormatCode::YUV420A).unwrap();
        assert_eq!((g.x_shift, g.y_shift), (1, 1));
        assert_eq!(g.bpp_weight, 20);
    }

    #[test]
    fn test_legacy_410_family() {
        for code in [FormatCode::YVU9, FormatCode::IF09] {
            let g = chroma_geometry(code).unwrap();
            assert_eq!((g.x_shift, g.y_shift), (2, 2));
            assert_eq!(g.bpp_weight, 9);
        }
    }

    #[test]
    fn test_luma_only() {
        for code in [FormatCode::Y8, FormatCode::Y800] {
            let g = chroma_geometry(code).unwrap();
            assert_eq!(g.x_shift, ChromaGeometry::NO_CHROMA);
            assert_eq!(g.y_shift, ChromaGeometry::NO_CHROMA);
            assert_eq!(g.component_bits, 8);
            assert_eq!(g.bpp_weight, 8);
        }
    }

    #[test]
    fn test_wide_sample_weights() {
        // 16-bit samples double the weight
        let g = chroma_geometry(FormatCode::YUV420P16_LE).unwrap();
        assert_eq!(g.bpp_weight, 24);
        // 9- and 10-bit samples occupy two bytes as well
        let g = chroma_geometry(FormatCode::YUV444P9_BE).unwrap();
        assert_eq!(g.bpp_weight, 48);
    }

    #[test]
    fn test_unrecognized_codes_fail() {
        assert!(chroma_geometry(FormatCode::UNKNOWN).is_err());
        assert!(chroma_geometry(FormatCode::RGB24).is_err());
        assert!(chroma_geometry(FormatCode::NV12).is_err());
        assert!(chroma_geometry(FormatCode::VDPAU_H264).is_err());
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify(FormatCode::YUV420P16_BE).unwrap(),
            FormatClass::Structured {
                depth: DepthTag::Bits16,
                layout: LayoutTag::Yuv420
            }
        );
        assert_eq!(
            classify(FormatCode::YV12).unwrap(),
            FormatClass::Legacy(FormatCode::YV12)
        );
        assert!(classify(FormatCode::from_u32(0x5430_3234)).is_err());
    }

    #[test]
    fn test_idempotent() {
        for code in [FormatCode::YV12, FormatCode::YUV420P16_BE, FormatCode::RGB24] {
            assert_eq!(chroma_geometry(code), chroma_geometry(code));
        }
    }

    #[test]
    fn test_error_reports_the_input_code() {
        let err = chroma_geometry(FormatCode::from_u32(0x5430_3234)).unwrap_err();
        assert_eq!(err.0.to_u32(), 0x5430_3234);
        assert!(err.to_string().contains("0x54303234"));
    }
}
