//! Human-readable format descriptions for diagnostics and UI.

use std::borrow::Cow;

use crate::format_code::FormatCode;

/// Returns the descriptive label for a format code.
///
/// Every code the crate recognizes maps to a fixed label; anything else
/// yields `Unknown 0x%04x` with the code's hexadecimal value, so diagnostics
/// stay available even for codes nothing else can process. The returned
/// value is owned by the caller — there is no shared scratch state.
pub fn format_description(code: FormatCode) -> Cow<'static, str> {
    match known_description(code) {
        Some(label) => Cow::Borrowed(label),
        None => Cow::Owned(format!("Unknown 0x{:04x}", code.to_u32())),
    }
}

fn known_description(code: FormatCode) -> Option<&'static str> {
    Some(match code {
        FormatCode::RGB1 => "RGB 1-bit",
        FormatCode::RGB4 => "RGB 4-bit",
        FormatCode::RG4B => "RGB 4-bit per byte",
        FormatCode::RGB8 => "RGB 8-bit",
        FormatCode::RGB12 => "RGB 12-bit",
        FormatCode::RGB15 => "RGB 15-bit",
        FormatCode::RGB16 => "RGB 16-bit",
        FormatCode::RGB24 => "RGB 24-bit",
        // RGB32/BGR32 have no label of their own: the 32-bit packed form is
        // ambiguous between two alpha orderings and aliases one of the
        // explicit constants below.
        FormatCode::RGB48_LE => "RGB 48-bit LE",
        FormatCode::RGB48_BE => "RGB 48-bit BE",
        FormatCode::BGR1 => "BGR 1-bit",
        FormatCode::BGR4 => "BGR 4-bit",
        FormatCode::BG4B => "BGR 4-bit per byte",
        FormatCode::BGR8 => "BGR 8-bit",
        FormatCode::BGR12 => "BGR 12-bit",
        FormatCode::BGR15 => "BGR 15-bit",
        FormatCode::BGR16 => "BGR 16-bit",
        FormatCode::BGR24 => "BGR 24-bit",
        FormatCode::ABGR => "ABGR",
        FormatCode::BGRA => "BGRA",
        FormatCode::ARGB => "ARGB",
        FormatCode::RGBA => "RGBA",
        FormatCode::GBRP => "Planar GBR 24-bit",
        FormatCode::GBRP9_LE => "Planar GBR 27-bit little-endian",
        FormatCode::GBRP9_BE => "Planar GBR 27-bit big-endian",
        FormatCode::GBRP10_LE => "Planar GBR 30-bit little-endian",
        FormatCode::GBRP10_BE => "Planar GBR 30-bit big-endian",
        FormatCode::YVU9 => "Planar YVU9",
        FormatCode::IF09 => "Planar IF09",
        FormatCode::YV12 => "Planar YV12",
        FormatCode::I420 => "Planar I420",
        FormatCode::IYUV => "Planar IYUV",
        FormatCode::CLPL => "Planar CLPL",
        FormatCode::Y800 => "Planar Y800",
        FormatCode::Y8 => "Planar Y8",
        FormatCode::YUV420P16_LE => "Planar 420P 16-bit little-endian",
        FormatCode::YUV420P16_BE => "Planar 420P 16-bit big-endian",
        FormatCode::YUV420P10_LE => "Planar 420P 10-bit little-endian",
        FormatCode::YUV420P10_BE => "Planar 420P 10-bit big-endian",
        FormatCode::YUV420P9_LE => "Planar 420P 9-bit little-endian",
        FormatCode::YUV420P9_BE => "Planar 420P 9-bit big-endian",
        FormatCode::YUV422P16_LE => "Planar 422P 16-bit little-endian",
        FormatCode::YUV422P16_BE => "Planar 422P 16-bit big-endian",
        FormatCode::YUV422P10_LE => "Planar 422P 10-bit little-endian",
        FormatCode::YUV422P10_BE => "Planar 422P 10-bit big-endian",
        FormatCode::YUV422P9_LE => "Planar 422P 9-bit little-endian",
        FormatCode::YUV422P9_BE => "Planar 422P 9-bit big-endian",
        FormatCode::YUV444P16_LE => "Planar 444P 16-bit little-endian",
        FormatCode::YUV444P16_BE => "Planar 444P 16-bit big-endian",
        FormatCode::YUV444P10_LE => "Planar 444P 10-bit little-endian",
        FormatCode::YUV444P10_BE => "Planar 444P 10-bit big-endian",
        FormatCode::YUV444P9_LE => "Planar 444P 9-bit little-endian",
        FormatCode::YUV444P9_BE => "Planar 444P 9-bit big-endian",
        FormatCode::YUV420A => "Planar 420P with alpha",
        FormatCode::YUV444P => "Planar 444P",
        FormatCode::YUV422P => "Planar 422P",
        FormatCode::YUV411P => "Planar 411P",
        FormatCode::NV12 => "Planar NV12",
        FormatCode::NV21 => "Planar NV21",
        FormatCode::HM12 => "Planar NV12 Macroblock",
        FormatCode::IUYV => "Packed IUYV",
        FormatCode::IY41 => "Packed IY41",
        FormatCode::IYU1 => "Packed IYU1",
        FormatCode::IYU2 => "Packed IYU2",
        FormatCode::UYVY => "Packed UYVY",
        FormatCode::UYNV => "Packed UYNV",
        FormatCode::CYUV => "Packed CYUV",
        FormatCode::Y422 => "Packed Y422",
        FormatCode::YUY2 => "Packed YUY2",
        FormatCode::YUNV => "Packed YUNV",
        FormatCode::YVYU => "Packed YVYU",
        FormatCode::Y41P => "Packed Y41P",
        FormatCode::Y211 => "Packed Y211",
        FormatCode::Y41T => "Packed Y41T",
        FormatCode::Y42T => "Packed Y42T",
        FormatCode::V422 => "Packed V422",
        FormatCode::V655 => "Packed V655",
        FormatCode::CLJR => "Packed CLJR",
        FormatCode::YUVP => "Packed YUVP",
        FormatCode::UYVP => "Packed UYVP",
        FormatCode::MPEG_PES => "Mpeg PES",
        FormatCode::VDPAU_MPEG1 => "MPEG1 VDPAU acceleration",
        FormatCode::VDPAU_MPEG2 => "MPEG2 VDPAU acceleration",
        FormatCode::VDPAU_H264 => "H.264 VDPAU acceleration",
        FormatCode::VDPAU_MPEG4 => "MPEG-4 Part 2 VDPAU acceleration",
        FormatCode::VDPAU_WMV3 => "WMV3 VDPAU acceleration",
        FormatCode::VDPAU_VC1 => "VC1 VDPAU acceleration",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(format_description(FormatCode::YV12), "Planar YV12");
        assert_eq!(format_description(FormatCode::RGB24), "RGB 24-bit");
        assert_eq!(format_description(FormatCode::UYVY), "Packed UYVY");
        assert_eq!(
            format_description(FormatCode::YUV420A),
            "Planar 420P with alpha"
        );
        assert_eq!(
            format_description(FormatCode::YUV444P16_LE),
            "Planar 444P 16-bit little-endian"
        );
        assert_eq!(
            format_description(FormatCode::VDPAU_H264),
            "H.264 VDPAU acceleration"
        );
    }

    #[test]
    fn test_unknown_code_embeds_hex() {
        assert_eq!(
            format_description(FormatCode::from_u32(0x0001)),
            "Unknown 0x0001"
        );
        assert_eq!(
            format_description(FormatCode::from_u32(0xdead)),
            "Unknown 0xdead"
        );
        // wider than four digits is printed in full
        assert_eq!(
            format_description(FormatCode::from_u32(0x0001_0203)),
            "Unknown 0x10203"
        );
        assert_eq!(format_description(FormatCode::UNKNOWN), "Unknown 0x0000");
    }

    #[test]
    fn test_ambiguous_packed_rgb32() {
        // RGB32 aliases RGBA or ABGR depending on host byte order, so its
        // label is always one of the explicit alpha orderings.
        let label = format_description(FormatCode::RGB32);
        assert!(label == "RGBA" || label == "ABGR");
        let label = format_description(FormatCode::BGR32);
        assert!(label == "BGRA" || label == "ARGB");
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(
            format_description(FormatCode::YV12),
            format_description(FormatCode::YV12)
        );
        assert_eq!(
            format_description(FormatCode::from_u32(0xbeef)),
            format_description(FormatCode::from_u32(0xbeef))
        );
    }
}
