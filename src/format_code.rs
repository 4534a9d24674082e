//! The 32-bit pixel format code space.
//!
//! Two disjoint sub-spaces exist. *Structured* codes encode byte order,
//! component depth and chroma layout directly in the bit pattern (a
//! FourCC-like scheme, decoded in [crate::geometry]). *Enumerated* codes are
//! arbitrary constants with no structural meaning, mapped only through
//! explicit tables. The value `0` is reserved as the unknown sentinel and is
//! never assigned to a real format.

use std::fmt::{Debug, Display};

use static_assertions::{const_assert, const_assert_eq};

/// Identifies a pixel format.
#[repr(transparent)]
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub struct FormatCode(u32);

impl FormatCode {
    /// Creates a FormatCode from its raw u32 value.
    pub const fn from_u32(code: u32) -> Self {
        FormatCode(code)
    }

    /// Returns the raw u32 value.
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Builds a code from four ASCII characters, first character in the
    /// least significant byte (the usual FourCC packing).
    pub const fn fourcc(bytes: [u8; 4]) -> Self {
        FormatCode(u32::from_le_bytes(bytes))
    }

    /// True for the reserved "unrecognized format" sentinel.
    pub const fn is_unknown(self) -> bool {
        self.0 == Self::UNKNOWN.0
    }

    pub(crate) const fn swapped(self) -> Self {
        FormatCode(self.0.swap_bytes())
    }
}

impl Display for FormatCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes: [u8; 4] = self.0.to_le_bytes();

        write!(f, "{}", String::from_utf8_lossy(&bytes))
    }
}

impl Debug for FormatCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes: [u8; 4] = self.0.to_le_bytes();

        write!(f, "FormatCode({})", String::from_utf8_lossy(&bytes))
    }
}

impl From<u32> for FormatCode {
    fn from(code: u32) -> Self {
        FormatCode(code)
    }
}

impl From<FormatCode> for u32 {
    fn from(code: FormatCode) -> Self {
        code.0
    }
}

/// Planar YUV code: three layout characters plus a depth tag in the top
/// byte. The 8-bit tag 0x50 doubles as ASCII `P`, so the 8-bit constants
/// read as ordinary FourCCs ("444P" and friends).
const fn planar_yuv(layout: [u8; 3], depth_tag: u8) -> FormatCode {
    FormatCode(u32::from_le_bytes([
        layout[0], layout[1], layout[2], depth_tag,
    ]))
}

/// Packed RGB code: "RGB" in the high bytes, bit depth (plus variant flag
/// bit 7) in the low byte.
const fn packed_rgb(depth: u8) -> FormatCode {
    FormatCode((b'R' as u32) << 24 | (b'G' as u32) << 16 | (b'B' as u32) << 8 | depth as u32)
}

const fn packed_bgr(depth: u8) -> FormatCode {
    FormatCode((b'B' as u32) << 24 | (b'G' as u32) << 16 | (b'R' as u32) << 8 | depth as u32)
}

const fn vdpau(codec: u8) -> FormatCode {
    FormatCode((b'V' as u32) << 24 | (b'D' as u32) << 16 | (b'P' as u32) << 8 | codec as u32)
}

const DEPTH_TAG_8: u8 = 0x50;
const DEPTH_TAG_16: u8 = 0x51;
const DEPTH_TAG_10: u8 = 0x52;
const DEPTH_TAG_9: u8 = 0x53;

impl FormatCode {
    /// Returned by name resolution when nothing matches. Not a valid format.
    pub const UNKNOWN: FormatCode = FormatCode(0);

    // Planar YUV, structured codes. The LE constant is the native bit
    // pattern, the BE constant is its byte-swapped twin.
    pub const YUV444P: FormatCode = planar_yuv(*b"444", DEPTH_TAG_8);
    pub const YUV422P: FormatCode = planar_yuv(*b"422", DEPTH_TAG_8);
    pub const YUV411P: FormatCode = planar_yuv(*b"411", DEPTH_TAG_8);
    pub const YUV440P: FormatCode = planar_yuv(*b"440", DEPTH_TAG_8);

    pub const YUV444P16_LE: FormatCode = planar_yuv(*b"444", DEPTH_TAG_16);
    pub const YUV444P16_BE: FormatCode = Self::YUV444P16_LE.swapped();
    pub const YUV444P10_LE: FormatCode = planar_yuv(*b"444", DEPTH_TAG_10);
    pub const YUV444P10_BE: FormatCode = Self::YUV444P10_LE.swapped();
    pub const YUV444P9_LE: FormatCode = planar_yuv(*b"444", DEPTH_TAG_9);
    pub const YUV444P9_BE: FormatCode = Self::YUV444P9_LE.swapped();

    pub const YUV422P16_LE: FormatCode = planar_yuv(*b"422", DEPTH_TAG_16);
    pub const YUV422P16_BE: FormatCode = Self::YUV422P16_LE.swapped();
    pub const YUV422P10_LE: FormatCode = planar_yuv(*b"422", DEPTH_TAG_10);
    pub const YUV422P10_BE: FormatCode = Self::YUV422P10_LE.swapped();
    pub const YUV422P9_LE: FormatCode = planar_yuv(*b"422", DEPTH_TAG_9);
    pub const YUV422P9_BE: FormatCode = Self::YUV422P9_LE.swapped();

    pub const YUV420P16_LE: FormatCode = planar_yuv(*b"420", DEPTH_TAG_16);
    pub const YUV420P16_BE: FormatCode = Self::YUV420P16_LE.swapped();
    pub const YUV420P10_LE: FormatCode = planar_yuv(*b"420", DEPTH_TAG_10);
    pub const YUV420P10_BE: FormatCode = Self::YUV420P10_LE.swapped();
    pub const YUV420P9_LE: FormatCode = planar_yuv(*b"420", DEPTH_TAG_9);
    pub const YUV420P9_BE: FormatCode = Self::YUV420P9_LE.swapped();

    // Native-endian aliases.
    #[cfg(target_endian = "little")]
    pub const YUV444P16: FormatCode = Self::YUV444P16_LE;
    #[cfg(target_endian = "big")]
    pub const YUV444P16: FormatCode = Self::YUV444P16_BE;
    #[cfg(target_endian = "little")]
    pub const YUV444P10: FormatCode = Self::YUV444P10_LE;
    #[cfg(target_endian = "big")]
    pub const YUV444P10: FormatCode = Self::YUV444P10_BE;
    #[cfg(target_endian = "little")]
    pub const YUV444P9: FormatCode = Self::YUV444P9_LE;
    #[cfg(target_endian = "big")]
    pub const YUV444P9: FormatCode = Self::YUV444P9_BE;
    #[cfg(target_endian = "little")]
    pub const YUV422P16: FormatCode = Self::YUV422P16_LE;
    #[cfg(target_endian = "big")]
    pub const YUV422P16: FormatCode = Self::YUV422P16_BE;
    #[cfg(target_endian = "little")]
    pub const YUV422P10: FormatCode = Self::YUV422P10_LE;
    #[cfg(target_endian = "big")]
    pub const YUV422P10: FormatCode = Self::YUV422P10_BE;
    #[cfg(target_endian = "little")]
    pub const YUV422P9: FormatCode = Self::YUV422P9_LE;
    #[cfg(target_endian = "big")]
    pub const YUV422P9: FormatCode = Self::YUV422P9_BE;
    #[cfg(target_endian = "little")]
    pub const YUV420P16: FormatCode = Self::YUV420P16_LE;
    #[cfg(target_endian = "big")]
    pub const YUV420P16: FormatCode = Self::YUV420P16_BE;
    #[cfg(target_endian = "little")]
    pub const YUV420P10: FormatCode = Self::YUV420P10_LE;
    #[cfg(target_endian = "big")]
    pub const YUV420P10: FormatCode = Self::YUV420P10_BE;
    #[cfg(target_endian = "little")]
    pub const YUV420P9: FormatCode = Self::YUV420P9_LE;
    #[cfg(target_endian = "big")]
    pub const YUV420P9: FormatCode = Self::YUV420P9_BE;

    // Legacy planar YUV, enumerated FourCC constants.
    pub const YV12: FormatCode = Self::fourcc(*b"YV12");
    pub const I420: FormatCode = Self::fourcc(*b"I420");
    pub const IYUV: FormatCode = Self::fourcc(*b"IYUV");
    /// 4:2:0 with an extra full-resolution alpha plane.
    pub const YUV420A: FormatCode = Self::fourcc(*b"420A");
    pub const YVU9: FormatCode = Self::fourcc(*b"YVU9");
    pub const IF09: FormatCode = Self::fourcc(*b"IF09");
    pub const Y800: FormatCode = Self::fourcc(*b"Y800");
    pub const Y8: FormatCode = Self::fourcc(*b"Y8  ");
    pub const CLPL: FormatCode = Self::fourcc(*b"CLPL");
    pub const HM12: FormatCode = Self::fourcc(*b"HM12");
    pub const NV12: FormatCode = Self::fourcc(*b"NV12");
    pub const NV21: FormatCode = Self::fourcc(*b"NV21");

    // Packed YUV.
    pub const YUY2: FormatCode = Self::fourcc(*b"YUY2");
    pub const YVYU: FormatCode = Self::fourcc(*b"YVYU");
    pub const UYVY: FormatCode = Self::fourcc(*b"UYVY");
    pub const UYNV: FormatCode = Self::fourcc(*b"UYNV");
    pub const CYUV: FormatCode = Self::fourcc(*b"cyuv");
    pub const Y422: FormatCode = Self::fourcc(*b"Y422");
    pub const YUNV: FormatCode = Self::fourcc(*b"YUNV");
    pub const IUYV: FormatCode = Self::fourcc(*b"IUYV");
    pub const IY41: FormatCode = Self::fourcc(*b"IY41");
    pub const IYU1: FormatCode = Self::fourcc(*b"IYU1");
    pub const IYU2: FormatCode = Self::fourcc(*b"IYU2");
    pub const Y41P: FormatCode = Self::fourcc(*b"Y41P");
    pub const Y211: FormatCode = Self::fourcc(*b"Y211");
    pub const Y41T: FormatCode = Self::fourcc(*b"Y41T");
    pub const Y42T: FormatCode = Self::fourcc(*b"Y42T");
    pub const V422: FormatCode = Self::fourcc(*b"V422");
    pub const V655: FormatCode = Self::fourcc(*b"V655");
    pub const CLJR: FormatCode = Self::fourcc(*b"CLJR");
    pub const YUVP: FormatCode = Self::fourcc(*b"YUVP");
    pub const UYVP: FormatCode = Self::fourcc(*b"UYVP");

    // Packed RGB/BGR. The low byte carries the bit depth; bit 7 marks the
    // byte-swapped (or one-pixel-per-byte) variant of the same depth.
    pub const RGB1: FormatCode = packed_rgb(1);
    pub const RGB4: FormatCode = packed_rgb(4);
    pub const RG4B: FormatCode = packed_rgb(4 | 128);
    pub const RGB8: FormatCode = packed_rgb(8);
    pub const RGB12: FormatCode = packed_rgb(12);
    pub const RGB15: FormatCode = packed_rgb(15);
    pub const RGB16: FormatCode = packed_rgb(16);
    pub const RGB24: FormatCode = packed_rgb(24);
    pub const RGB32: FormatCode = packed_rgb(32);
    pub const RGB48_LE: FormatCode = packed_rgb(48);
    pub const RGB48_BE: FormatCode = packed_rgb(48 | 128);

    pub const BGR1: FormatCode = packed_bgr(1);
    pub const BGR4: FormatCode = packed_bgr(4);
    pub const BG4B: FormatCode = packed_bgr(4 | 128);
    pub const BGR8: FormatCode = packed_bgr(8);
    pub const BGR12: FormatCode = packed_bgr(12);
    pub const BGR15: FormatCode = packed_bgr(15);
    pub const BGR16: FormatCode = packed_bgr(16);
    pub const BGR24: FormatCode = packed_bgr(24);
    pub const BGR32: FormatCode = packed_bgr(32);

    #[cfg(target_endian = "little")]
    pub const RGB48_NE: FormatCode = Self::RGB48_LE;
    #[cfg(target_endian = "big")]
    pub const RGB48_NE: FormatCode = Self::RGB48_BE;

    // The 32-bit packed codes are ambiguous between two alpha orderings:
    // in memory, RGB32 is R,G,B,A on little-endian hosts and A,B,G,R on
    // big-endian ones. The explicit orderings resolve the ambiguity.
    #[cfg(target_endian = "little")]
    pub const RGBA: FormatCode = Self::RGB32;
    #[cfg(target_endian = "little")]
    pub const ABGR: FormatCode = packed_rgb(32 | 128);
    #[cfg(target_endian = "little")]
    pub const BGRA: FormatCode = Self::BGR32;
    #[cfg(target_endian = "little")]
    pub const ARGB: FormatCode = packed_bgr(32 | 128);

    #[cfg(target_endian = "big")]
    pub const ABGR: FormatCode = Self::RGB32;
    #[cfg(target_endian = "big")]
    pub const RGBA: FormatCode = packed_rgb(32 | 128);
    #[cfg(target_endian = "big")]
    pub const ARGB: FormatCode = Self::BGR32;
    #[cfg(target_endian = "big")]
    pub const BGRA: FormatCode = packed_bgr(32 | 128);

    // Planar GBR: "GB" plus a depth byte plus an endian marker.
    pub const GBRP: FormatCode = Self::fourcc([b'G', b'B', b'R', 24]);
    pub const GBRP9_LE: FormatCode = Self::fourcc([b'G', b'B', 9, b'L']);
    pub const GBRP9_BE: FormatCode = Self::fourcc([b'G', b'B', 9, b'B']);
    pub const GBRP10_LE: FormatCode = Self::fourcc([b'G', b'B', 10, b'L']);
    pub const GBRP10_BE: FormatCode = Self::fourcc([b'G', b'B', 10, b'B']);

    #[cfg(target_endian = "little")]
    pub const GBRP9: FormatCode = Self::GBRP9_LE;
    #[cfg(target_endian = "big")]
    pub const GBRP9: FormatCode = Self::GBRP9_BE;
    #[cfg(target_endian = "little")]
    pub const GBRP10: FormatCode = Self::GBRP10_LE;
    #[cfg(target_endian = "big")]
    pub const GBRP10: FormatCode = Self::GBRP10_BE;

    pub const MJPEG: FormatCode = Self::fourcc(*b"MJPG");

    // Container / hardware-acceleration placeholders. No pixel layout.
    pub const MPEG_PES: FormatCode =
        FormatCode((b'M' as u32) << 24 | (b'P' as u32) << 16 | (b'E' as u32) << 8 | b'S' as u32);
    pub const VDPAU_MPEG1: FormatCode = vdpau(0x01);
    pub const VDPAU_MPEG2: FormatCode = vdpau(0x02);
    pub const VDPAU_H264: FormatCode = vdpau(0x03);
    pub const VDPAU_WMV3: FormatCode = vdpau(0x04);
    pub const VDPAU_VC1: FormatCode = vdpau(0x05);
    pub const VDPAU_MPEG4: FormatCode = vdpau(0x06);
}

// Pin the documented bit patterns of the structured scheme and a few
// well-known FourCC values.
const_assert_eq!(FormatCode::UNKNOWN.to_u32(), 0);
const_assert_eq!(FormatCode::YUV444P.to_u32(), 0x5034_3434);
const_assert_eq!(FormatCode::YUV420P16_LE.to_u32(), 0x5130_3234);
const_assert_eq!(FormatCode::YUV420P16_BE.to_u32(), 0x3432_3051);
const_assert_eq!(FormatCode::YV12.to_u32(), 0x3231_5659);
const_assert_eq!(FormatCode::I420.to_u32(), 0x3032_3449);
const_assert_eq!(FormatCode::Y8.to_u32(), 0x2020_3859);
const_assert_eq!(FormatCode::RGB24.to_u32(), 0x5247_4218);
const_assert_eq!(FormatCode::VDPAU_H264.to_u32(), 0x5644_5003);

// No enumerated constant may accidentally match the structured patterns
// decoded by the geometry module.
const_assert!(FormatCode::YUV420A.to_u32() & 0xf000_00ff != 0x5000_0034);
const_assert!(FormatCode::YUVP.to_u32() & 0xf000_00ff != 0x5000_0034);
const_assert!(FormatCode::Y41P.to_u32() & 0xf000_00ff != 0x5000_0034);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt() {
        let code = FormatCode::YV12;
        assert_eq!(code.to_string(), "YV12");
        assert_eq!(format!("{:?}", code), "FormatCode(YV12)");
    }

    #[test]
    fn test_u32_roundtrip() {
        let code = FormatCode::from(0x3231_5659);
        assert_eq!(code, FormatCode::YV12);
        assert_eq!(u32::from(code), 0x3231_5659);
    }

    #[test]
    fn test_unknown_sentinel() {
        assert!(FormatCode::UNKNOWN.is_unknown());
        assert!(!FormatCode::YV12.is_unknown());
    }

    #[test]
    fn test_alpha_orderings_are_distinct() {
        let orderings = [
            FormatCode::RGBA,
            FormatCode::ARGB,
            FormatCode::BGRA,
            FormatCode::ABGR,
        ];
        for (i, a) in orderings.iter().enumerate() {
            for b in &orderings[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
