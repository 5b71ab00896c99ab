//! Frame Size Calculation
//!
//! Computes the byte size of one unpadded raw video frame from its pixel
//! format and dimensions.
//!
//! | Subsampling | Formats | Precondition | Size |
//! |-------------|---------|--------------|------|
//! | 4:2:0 | I420, YV12, NV12, NV21 | even width and height | `w * h * 3 / 2` |
//! | 4:2:2 | I422 | even width | `w * h * 2` |
//! | none, 3 channels | I444, RGB | - | `w * h * 3` |
//! | none, 4 channels | AYUV, RGBA, BGRA | - | `w * h * 4` |
//!
//! Every rejection is reported as [`RawVideoError::InvalidDimensions`].
//! Strides and row padding are not accounted for.
//!
//! # Examples
//!
//! ```rust
//! use lamco_raw_video::{frame_size, PixelFormat};
//!
//! assert_eq!(frame_size(PixelFormat::I420, 4, 2), Ok(12));
//! assert_eq!(frame_size(PixelFormat::RGB, 3, 3), Ok(27));
//! assert!(frame_size(PixelFormat::I420, 3, 2).is_err());
//! ```

use tracing::{debug, trace};

use crate::descriptor::FrameDescriptor;
use crate::error::{RawVideoError, Result};
use crate::format::{ChromaSubsampling, PixelFormat};

/// Byte size of one unpadded frame of a descriptor
///
/// Equivalent to calling [`frame_size`] with the descriptor's format,
/// width and height.
pub fn frame_size_of(descriptor: &FrameDescriptor) -> Result<u64> {
    frame_size(descriptor.format(), descriptor.width(), descriptor.height())
}

/// Byte size of one unpadded frame
///
/// Fails with [`RawVideoError::InvalidDimensions`] if a dimension is zero,
/// if the format's chroma subsampling needs an even dimension that is odd,
/// or if the size does not fit in a `u64`.
pub fn frame_size(format: PixelFormat, width: u32, height: u32) -> Result<u64> {
    let subsampling = format.subsampling();

    if width == 0 || height == 0 {
        return Err(reject(format.as_str(), width, height, "zero dimension"));
    }
    if subsampling.requires_even_width() && width % 2 != 0 {
        return Err(reject(format.as_str(), width, height, "width must be even"));
    }
    if subsampling.requires_even_height() && height % 2 != 0 {
        return Err(reject(format.as_str(), width, height, "height must be even"));
    }

    // Cannot overflow: (2^32 - 1)^2 < 2^64
    let pixels = u64::from(width) * u64::from(height);

    let size = bytes_for_pixels(subsampling, pixels)
        .ok_or_else(|| reject(format.as_str(), width, height, "size overflows u64"))?;

    trace!("Frame size for {} {}x{}: {} bytes", format, width, height, size);
    Ok(size)
}

/// Byte size of one unpadded frame for a raw format tag
///
/// Tags must match a canonical [`PixelFormat`] tag exactly (`"I420"`, not
/// `"i420"`). Any other tag is rejected with [`RawVideoError::InvalidDimensions`],
/// the same as an unsizable combination.
pub fn frame_size_for_tag(tag: &str, width: u32, height: u32) -> Result<u64> {
    match tag.parse::<PixelFormat>() {
        Ok(format) => frame_size(format, width, height),
        Err(_) => Err(reject(tag, width, height, "unknown format")),
    }
}

/// Total bytes for `pixels` luma samples under a subsampling scheme
///
/// For 4:2:0 the pixel count is a multiple of 4 once parity has been
/// checked, so halving is exact.
fn bytes_for_pixels(subsampling: ChromaSubsampling, pixels: u64) -> Option<u64> {
    match subsampling {
        ChromaSubsampling::Yuv420 => pixels.checked_add(pixels / 2),
        ChromaSubsampling::Yuv422 => pixels.checked_mul(2),
        ChromaSubsampling::Yuv444OrRgb => pixels.checked_mul(3),
        ChromaSubsampling::Packed4 => pixels.checked_mul(4),
    }
}

fn reject(format: &str, width: u32, height: u32, reason: &str) -> RawVideoError {
    debug!(
        "Rejecting frame size for {} {}x{}: {}",
        format, width, height, reason
    );
    RawVideoError::invalid_dimensions(format, width, height)
}
