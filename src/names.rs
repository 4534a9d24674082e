//! Format name vocabulary and name resolution.
//!
//! Two ordered tables exist: the general table, used by option parsing and
//! format-selection fields, and a restricted special table holding
//! hardware-acceleration surfaces and container-only formats that are valid
//! in codec configuration but nowhere else. Lookup is case-insensitive and
//! first match wins; several names may alias one code.

use crate::format_code::FormatCode;

/// One entry of a format name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameEntry {
    pub name: &'static str,
    pub code: FormatCode,
}

const fn entry(name: &'static str, code: FormatCode) -> NameEntry {
    NameEntry { name, code }
}

/// The general format name table. Order is significant.
pub static FORMAT_NAMES: &[NameEntry] = &[
    entry("444p16le", FormatCode::YUV444P16_LE),
    entry("444p16be", FormatCode::YUV444P16_BE),
    entry("444p10le", FormatCode::YUV444P10_LE),
    entry("444p10be", FormatCode::YUV444P10_BE),
    entry("444p9le", FormatCode::YUV444P9_LE),
    entry("444p9be", FormatCode::YUV444P9_BE),
    entry("422p16le", FormatCode::YUV422P16_LE),
    entry("422p16be", FormatCode::YUV422P16_BE),
    entry("422p10le", FormatCode::YUV422P10_LE),
    entry("422p10be", FormatCode::YUV422P10_BE),
    entry("422p9le", FormatCode::YUV422P9_LE),
    entry("422p9be", FormatCode::YUV422P9_BE),
    entry("420p16le", FormatCode::YUV420P16_LE),
    entry("420p16be", FormatCode::YUV420P16_BE),
    entry("420p10le", FormatCode::YUV420P10_LE),
    entry("420p10be", FormatCode::YUV420P10_BE),
    entry("420p9le", FormatCode::YUV420P9_LE),
    entry("420p9be", FormatCode::YUV420P9_BE),
    entry("444p16", FormatCode::YUV444P16),
    entry("444p10", FormatCode::YUV444P10),
    entry("444p9", FormatCode::YUV444P9),
    entry("422p16", FormatCode::YUV422P16),
    entry("422p10", FormatCode::YUV422P10),
    entry("422p9", FormatCode::YUV422P9),
    entry("420p10", FormatCode::YUV420P10),
    entry("420p9", FormatCode::YUV420P9),
    entry("420p16", FormatCode::YUV420P16),
    entry("420a", FormatCode::YUV420A),
    entry("444p", FormatCode::YUV444P),
    entry("422p", FormatCode::YUV422P),
    entry("411p", FormatCode::YUV411P),
    entry("440p", FormatCode::YUV440P),
    entry("yuy2", FormatCode::YUY2),
    entry("yvyu", FormatCode::YVYU),
    entry("uyvy", FormatCode::UYVY),
    entry("yvu9", FormatCode::YVU9),
    entry("if09", FormatCode::IF09),
    entry("yv12", FormatCode::YV12),
    entry("i420", FormatCode::I420),
    entry("iyuv", FormatCode::IYUV),
    entry("clpl", FormatCode::CLPL),
    entry("hm12", FormatCode::HM12),
    entry("y800", FormatCode::Y800),
    entry("y8", FormatCode::Y8),
    entry("nv12", FormatCode::NV12),
    entry("nv21", FormatCode::NV21),
    entry("bgr24", FormatCode::BGR24),
    entry("bgr32", FormatCode::BGR32),
    entry("bgr16", FormatCode::BGR16),
    entry("bgr15", FormatCode::BGR15),
    entry("bgr12", FormatCode::BGR12),
    entry("bgr8", FormatCode::BGR8),
    entry("bgr4", FormatCode::BGR4),
    entry("bg4b", FormatCode::BG4B),
    entry("bgr1", FormatCode::BGR1),
    entry("rgb48be", FormatCode::RGB48_BE),
    entry("rgb48le", FormatCode::RGB48_LE),
    entry("rgb48ne", FormatCode::RGB48_NE),
    entry("rgb24", FormatCode::RGB24),
    entry("rgb32", FormatCode::RGB32),
    entry("rgb16", FormatCode::RGB16),
    entry("rgb15", FormatCode::RGB15),
    entry("rgb12", FormatCode::RGB12),
    entry("rgb8", FormatCode::RGB8),
    entry("rgb4", FormatCode::RGB4),
    entry("rg4b", FormatCode::RG4B),
    entry("rgb1", FormatCode::RGB1),
    entry("rgba", FormatCode::RGBA),
    entry("argb", FormatCode::ARGB),
    entry("bgra", FormatCode::BGRA),
    entry("abgr", FormatCode::ABGR),
    entry("gbrp", FormatCode::GBRP),
    entry("gbrp9", FormatCode::GBRP9),
    entry("gbrp9le", FormatCode::GBRP9_LE),
    entry("gbrp9be", FormatCode::GBRP9_BE),
    entry("gbrp10", FormatCode::GBRP10),
    entry("gbrp10le", FormatCode::GBRP10_LE),
    entry("gbrp10be", FormatCode::GBRP10_BE),
    entry("mjpeg", FormatCode::MJPEG),
    entry("mjpg", FormatCode::MJPEG),
];

/// Formats only valid in codec configuration, gated behind the
/// `allow_special` flag of [parse_format_name].
pub static SPECIAL_FORMAT_NAMES: &[NameEntry] = &[
    entry("mpes", FormatCode::MPEG_PES),
    entry("vdpau_h264", FormatCode::VDPAU_H264),
    entry("vdpau_mpeg1", FormatCode::VDPAU_MPEG1),
    entry("vdpau_mpeg2", FormatCode::VDPAU_MPEG2),
    entry("vdpau_mpeg4", FormatCode::VDPAU_MPEG4),
    entry("vdpau_wmv3", FormatCode::VDPAU_WMV3),
    entry("vdpau_vc1", FormatCode::VDPAU_VC1),
];

fn scan(table: &[NameEntry], name: &str) -> Option<FormatCode> {
    table
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(name))
        .map(|e| e.code)
}

/// Resolves a format name to its code.
///
/// Names are matched case-insensitively against the general table first;
/// the special table is consulted only when `allow_special` is set.
/// An unrecognized name yields [FormatCode::UNKNOWN] — a normal outcome
/// callers are expected to branch on, not an error.
pub fn parse_format_name(name: &str, allow_special: bool) -> FormatCode {
    if let Some(code) = scan(FORMAT_NAMES, name) {
        return code;
    }
    if allow_special {
        if let Some(code) = scan(SPECIAL_FORMAT_NAMES, name) {
            return code;
        }
    }
    FormatCode::UNKNOWN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_case(name: &str) -> String {
        name.chars()
            .enumerate()
            .map(|(i, c)| {
                if i % 2 == 0 {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    }

    #[test]
    fn test_general_table_resolves_any_casing() {
        for e in FORMAT_NAMES {
            assert_eq!(parse_format_name(e.name, false), e.code, "{}", e.name);
            assert_eq!(
                parse_format_name(&e.name.to_ascii_uppercase(), false),
                e.code,
                "{}",
                e.name
            );
            assert_eq!(
                parse_format_name(&mixed_case(e.name), false),
                e.code,
                "{}",
                e.name
            );
        }
    }

    #[test]
    fn test_special_table_is_gated() {
        for e in SPECIAL_FORMAT_NAMES {
            assert_eq!(parse_format_name(e.name, false), FormatCode::UNKNOWN);
            assert_eq!(parse_format_name(e.name, true), e.code, "{}", e.name);
            assert_eq!(
                parse_format_name(&e.name.to_ascii_uppercase(), true),
                e.code,
                "{}",
                e.name
            );
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            parse_format_name("totally-unknown", false),
            FormatCode::UNKNOWN
        );
        assert_eq!(
            parse_format_name("totally-unknown", true),
            FormatCode::UNKNOWN
        );
        assert_eq!(parse_format_name("", false), FormatCode::UNKNOWN);
    }

    #[test]
    fn test_aliases_share_a_code() {
        assert_eq!(
            parse_format_name("mjpeg", false),
            parse_format_name("mjpg", false)
        );
        // "420p16" is a native-endian alias of one of the explicit pair
        assert_eq!(parse_format_name("420p16", false), FormatCode::YUV420P16);
        #[cfg(target_endian = "little")]
        assert_eq!(FormatCode::YUV420P16, FormatCode::YUV420P16_LE);
    }

    // The sentinel must stay out-of-band for every assigned code.
    #[test]
    fn test_no_entry_collides_with_the_sentinel() {
        for e in FORMAT_NAMES.iter().chain(SPECIAL_FORMAT_NAMES) {
            assert!(!e.code.is_unknown(), "{}", e.name);
        }
    }
}
