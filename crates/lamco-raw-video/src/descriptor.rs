//! Raw Video Frame Descriptor
//!
//! The metadata needed to interpret a raw video buffer: dimensions,
//! framerate, pixel format and whether buffers carry whole frames.
//!
//! Descriptors are produced once formats have been negotiated and are
//! read-only afterwards. Every field is required; there is no default
//! descriptor.
//!
//! # Examples
//!
//! ```rust
//! use lamco_raw_video::{FrameDescriptor, PixelFormat};
//!
//! let descriptor = FrameDescriptor::builder()
//!     .width(1920)
//!     .height(1080)
//!     .framerate(30000, 1001)
//!     .format(PixelFormat::NV12)
//!     .aligned(true)
//!     .build()
//!     .expect("all fields set");
//!
//! assert_eq!(descriptor.frame_size(), Ok(3_110_400));
//! ```

use std::fmt;

use crate::error::{RawVideoError, Result};
use crate::format::PixelFormat;
use crate::framerate::Framerate;
use crate::size;

/// Immutable description of a raw video stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameDescriptor {
    width: u32,
    height: u32,
    framerate: Framerate,
    format: PixelFormat,
    aligned: bool,
}

impl FrameDescriptor {
    /// Create a descriptor
    ///
    /// Fails with [`RawVideoError::InvalidDescriptor`] if `width` or
    /// `height` is zero.
    pub fn new(
        width: u32,
        height: u32,
        framerate: Framerate,
        format: PixelFormat,
        aligned: bool,
    ) -> Result<Self> {
        if width == 0 {
            return Err(RawVideoError::invalid_descriptor("width must be positive"));
        }
        if height == 0 {
            return Err(RawVideoError::invalid_descriptor("height must be positive"));
        }

        Ok(Self {
            width,
            height,
            framerate,
            format,
            aligned,
        })
    }

    /// Create a new descriptor builder
    #[must_use]
    pub fn builder() -> FrameDescriptorBuilder {
        FrameDescriptorBuilder::default()
    }

    /// Frame width in pixels
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Stream framerate
    #[must_use]
    pub const fn framerate(&self) -> Framerate {
        self.framerate
    }

    /// Pixel format
    #[must_use]
    pub const fn format(&self) -> PixelFormat {
        self.format
    }

    /// Whether each buffer holds exactly one complete frame
    #[must_use]
    pub const fn aligned(&self) -> bool {
        self.aligned
    }

    /// Byte size of one unpadded frame
    ///
    /// Same as [`frame_size_of`](crate::frame_size_of).
    pub fn frame_size(&self) -> Result<u64> {
        size::frame_size_of(self)
    }
}

impl fmt::Display for FrameDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}x{} @ {} fps",
            self.format, self.width, self.height, self.framerate
        )?;
        if self.aligned {
            f.write_str(" (aligned)")?;
        }
        Ok(())
    }
}

/// Builder for [`FrameDescriptor`]
///
/// Unlike configuration builders there are no defaults: [`build`](Self::build)
/// fails with [`RawVideoError::MissingField`] for any field left unset.
#[derive(Debug, Clone, Default)]
pub struct FrameDescriptorBuilder {
    width: Option<u32>,
    height: Option<u32>,
    framerate: Option<(u32, u32)>,
    format: Option<PixelFormat>,
    aligned: Option<bool>,
}

impl FrameDescriptorBuilder {
    /// Set frame width in pixels
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set frame height in pixels
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set framerate as `frames` over `seconds`
    #[must_use]
    pub fn framerate(mut self, frames: u32, seconds: u32) -> Self {
        self.framerate = Some((frames, seconds));
        self
    }

    /// Set pixel format
    #[must_use]
    pub fn format(mut self, format: PixelFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set whether buffers carry whole frames
    #[must_use]
    pub fn aligned(mut self, aligned: bool) -> Self {
        self.aligned = Some(aligned);
        self
    }

    /// Build the descriptor
    pub fn build(self) -> Result<FrameDescriptor> {
        let width = self.width.ok_or(RawVideoError::MissingField("width"))?;
        let height = self.height.ok_or(RawVideoError::MissingField("height"))?;
        let (frames, seconds) = self
            .framerate
            .ok_or(RawVideoError::MissingField("framerate"))?;
        let format = self.format.ok_or(RawVideoError::MissingField("format"))?;
        let aligned = self.aligned.ok_or(RawVideoError::MissingField("aligned"))?;

        FrameDescriptor::new(width, height, Framerate::new(frames, seconds)?, format, aligned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_builder() -> FrameDescriptorBuilder {
        FrameDescriptor::builder()
            .width(640)
            .height(480)
            .framerate(30, 1)
            .format(PixelFormat::I420)
            .aligned(true)
    }

    #[test]
    fn test_builder_pattern() {
        let descriptor = full_builder().build().expect("all fields set");

        assert_eq!(descriptor.width(), 640);
        assert_eq!(descriptor.height(), 480);
        assert_eq!(descriptor.framerate(), Framerate::new(30, 1).expect("valid"));
        assert_eq!(descriptor.format(), PixelFormat::I420);
        assert!(descriptor.aligned());
    }

    #[test]
    fn test_builder_missing_fields() {
        let cases = [
            (FrameDescriptorBuilder { width: None, ..full_builder() }, "width"),
            (FrameDescriptorBuilder { height: None, ..full_builder() }, "height"),
            (FrameDescriptorBuilder { framerate: None, ..full_builder() }, "framerate"),
            (FrameDescriptorBuilder { format: None, ..full_builder() }, "format"),
            (FrameDescriptorBuilder { aligned: None, ..full_builder() }, "aligned"),
        ];

        for (builder, field) in cases {
            assert_eq!(builder.build(), Err(RawVideoError::MissingField(field)));
        }
    }

    #[test]
    fn test_empty_builder_fails() {
        assert!(FrameDescriptor::builder().build().is_err());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let err = full_builder().width(0).build().expect_err("zero width");
        assert!(matches!(err, RawVideoError::InvalidDescriptor(_)));

        let rate = Framerate::new(30, 1).expect("valid");
        let err = FrameDescriptor::new(640, 0, rate, PixelFormat::RGB, false)
            .expect_err("zero height");
        assert!(matches!(err, RawVideoError::InvalidDescriptor(_)));
    }

    #[test]
    fn test_rejects_zero_seconds() {
        let err = full_builder().framerate(30, 0).build().expect_err("zero seconds");
        assert!(matches!(err, RawVideoError::InvalidFramerate { .. }));
    }

    #[test]
    fn test_frame_size_delegates() {
        let descriptor = full_builder().build().expect("all fields set");
        assert_eq!(descriptor.frame_size(), Ok(640 * 480 * 3 / 2));
    }

    #[test]
    fn test_display() {
        let descriptor = full_builder().framerate(30000, 1001).build().expect("valid");
        assert_eq!(descriptor.to_string(), "I420 640x480 @ 30000/1001 fps (aligned)");

        let descriptor = full_builder().aligned(false).build().expect("valid");
        assert_eq!(descriptor.to_string(), "I420 640x480 @ 30/1 fps");
    }
}
