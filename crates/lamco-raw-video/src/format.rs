//! Raw Video Pixel Formats
//!
//! The closed set of pixel format tags a raw video descriptor may carry,
//! grouped into size classes by chroma subsampling and channel count.
//!
//! # Supported Formats
//!
//! | Format | Layout | Subsampling | Bytes per pixel |
//! |--------|--------|-------------|-----------------|
//! | I420 | Planar Y, U, V | 4:2:0 | 1.5 |
//! | YV12 | Planar Y, V, U | 4:2:0 | 1.5 |
//! | NV12 | Semi-planar Y, interleaved UV | 4:2:0 | 1.5 |
//! | NV21 | Semi-planar Y, interleaved VU | 4:2:0 | 1.5 |
//! | I422 | Planar Y, U, V | 4:2:2 | 2 |
//! | I444 | Planar Y, U, V | 4:4:4 | 3 |
//! | RGB | Packed | none | 3 |
//! | AYUV | Packed | none | 4 |
//! | RGBA | Packed | none | 4 |
//! | BGRA | Packed | none | 4 |
//!
//! The tag set is exhaustive and stable: consumers matching on
//! [`PixelFormat`] may rely on it.
//!
//! # Examples
//!
//! ```rust
//! use lamco_raw_video::{ChromaSubsampling, PixelFormat};
//!
//! let format: PixelFormat = "NV12".parse().expect("known tag");
//! assert!("nv12".parse::<PixelFormat>().is_err());
//! assert_eq!(format, PixelFormat::NV12);
//! assert_eq!(format.subsampling(), ChromaSubsampling::Yuv420);
//! assert_eq!(format.to_string(), "NV12");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::RawVideoError;

/// Pixel format of a raw video frame
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// YUV 4:2:0 planar (Y, U, V)
    I420,
    /// YUV 4:2:2 planar (Y, U, V)
    I422,
    /// YUV 4:4:4 planar (Y, U, V)
    I444,
    /// Packed 24-bit RGB
    RGB,
    /// Packed 32-bit BGRA
    BGRA,
    /// Packed 32-bit RGBA
    RGBA,
    /// YUV 4:2:0 semi-planar (Y, interleaved UV)
    NV12,
    /// YUV 4:2:0 semi-planar (Y, interleaved VU)
    NV21,
    /// YUV 4:2:0 planar (Y, V, U)
    YV12,
    /// Packed 32-bit AYUV
    AYUV,
}

impl PixelFormat {
    /// Every supported format, in contract order
    pub const ALL: [PixelFormat; 10] = [
        PixelFormat::I420,
        PixelFormat::I422,
        PixelFormat::I444,
        PixelFormat::RGB,
        PixelFormat::BGRA,
        PixelFormat::RGBA,
        PixelFormat::NV12,
        PixelFormat::NV21,
        PixelFormat::YV12,
        PixelFormat::AYUV,
    ];

    /// Size class this format belongs to
    ///
    /// Groups are disjoint: every format maps to exactly one.
    #[must_use]
    pub const fn subsampling(self) -> ChromaSubsampling {
        match self {
            Self::I420 | Self::YV12 | Self::NV12 | Self::NV21 => ChromaSubsampling::Yuv420,
            Self::I422 => ChromaSubsampling::Yuv422,
            Self::I444 | Self::RGB => ChromaSubsampling::Yuv444OrRgb,
            Self::AYUV | Self::RGBA | Self::BGRA => ChromaSubsampling::Packed4,
        }
    }

    /// Canonical tag for this format
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I420 => "I420",
            Self::I422 => "I422",
            Self::I444 => "I444",
            Self::RGB => "RGB",
            Self::BGRA => "BGRA",
            Self::RGBA => "RGBA",
            Self::NV12 => "NV12",
            Self::NV21 => "NV21",
            Self::YV12 => "YV12",
            Self::AYUV => "AYUV",
        }
    }

    /// Check if the format carries an alpha channel
    #[must_use]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::AYUV | Self::RGBA | Self::BGRA)
    }

    /// Check if the format stores channels in separate planes
    ///
    /// Semi-planar formats (NV12, NV21) count as planar.
    #[must_use]
    pub const fn is_planar(self) -> bool {
        matches!(
            self,
            Self::I420 | Self::I422 | Self::I444 | Self::NV12 | Self::NV21 | Self::YV12
        )
    }

    /// Check if the format is in the YUV family
    #[must_use]
    pub const fn is_yuv(self) -> bool {
        !matches!(self, Self::RGB | Self::RGBA | Self::BGRA)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PixelFormat {
    type Err = RawVideoError;

    /// Parse a format tag
    ///
    /// Only the exact canonical tags are accepted.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == tag)
            .ok_or_else(|| RawVideoError::UnknownFormat(tag.to_string()))
    }
}

/// Size class of a pixel format
///
/// Groups formats by chroma subsampling and, for the unsubsampled formats,
/// by channel count. RGB formats carry no chroma and fall in the
/// unsubsampled classes. This is the grouping the frame size calculation
/// dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromaSubsampling {
    /// 4:2:0 - chroma halved in both dimensions, 1.5 bytes per pixel
    Yuv420,

    /// 4:2:2 - chroma halved horizontally, 2 bytes per pixel
    Yuv422,

    /// 4:4:4 YUV or packed RGB - 3 channels of 1 byte
    Yuv444OrRgb,

    /// Packed with alpha - 4 channels of 1 byte
    Packed4,
}

impl ChromaSubsampling {
    /// Check if frame width must be even
    #[must_use]
    pub const fn requires_even_width(self) -> bool {
        matches!(self, Self::Yuv420 | Self::Yuv422)
    }

    /// Check if frame height must be even
    #[must_use]
    pub const fn requires_even_height(self) -> bool {
        matches!(self, Self::Yuv420)
    }
}
