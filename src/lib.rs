//! # lamco-media
//!
//! Media pipeline building blocks for Rust.
//!
//! This crate provides a unified interface to the lamco media libraries:
//!
//! - **[`raw_video`]** - Raw video frame descriptors and unpadded frame sizing
//!
//! # Features
//!
//! All features are enabled by default. You can selectively enable only what you need:
//!
//! ```toml
//! # Use everything (default)
//! lamco-media = "0.1"
//!
//! # Raw video only
//! lamco-media = { version = "0.1", default-features = false, features = ["raw-video"] }
//! ```
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `raw-video` | Yes | Raw video descriptors and frame sizing |
//! | `full` | No | All features from all sub-crates |
//!
//! # Quick Start
//!
//! ## Sizing Buffers for a Negotiated Format
//!
//! ```rust
//! # #[cfg(feature = "raw-video")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use lamco_media::raw_video::{FrameDescriptor, PixelFormat};
//!
//! // Descriptor agreed between two pipeline stages
//! let descriptor = FrameDescriptor::builder()
//!     .width(1920)
//!     .height(1080)
//!     .framerate(30000, 1001)
//!     .format(PixelFormat::I420)
//!     .aligned(true)
//!     .build()?;
//!
//! // Size receive buffers, or reject the format
//! let bytes = descriptor.frame_size()?;
//! println!("Allocating {} bytes per frame for {}", bytes, descriptor);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │               lamco-media               │
//! ├─────────────────────────────────────────┤
//! │             lamco-raw-video             │
//! │                                         │
//! │  FrameDescriptor    frame_size()        │
//! │  Framerate          frame_size_of()     │
//! │  PixelFormat        frame_size_for_tag()│
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//!        Buffer allocation / format negotiation
//! ```
//!
//! # Related Crates
//!
//! You can also use the individual crates directly:
//!
//! - [`lamco-raw-video`](https://crates.io/crates/lamco-raw-video) - Raw video only

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// RE-EXPORTS
// =============================================================================

/// Raw video frame descriptors and frame size calculation.
///
/// This module provides:
/// - Immutable frame descriptors (dimensions, framerate, format, alignment)
/// - The closed raw pixel format set
/// - Subsampling-aware unpadded frame sizes
///
/// See [`lamco_raw_video`] documentation for details.
#[cfg(feature = "raw-video")]
#[cfg_attr(docsrs, doc(cfg(feature = "raw-video")))]
pub use lamco_raw_video as raw_video;

// =============================================================================
// PRELUDE - Common types for convenience
// =============================================================================

/// Prelude module with commonly used types.
///
/// ```rust
/// use lamco_media::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "raw-video")]
    pub use lamco_raw_video::{
        frame_size, frame_size_for_tag, frame_size_of, FrameDescriptor, Framerate, PixelFormat,
        RawVideoError,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    #[cfg(feature = "raw-video")]
    fn test_raw_video_reexport() {
        // Just verify the re-export works
        assert_eq!(raw_video::supported_formats().len(), 10);
    }

    #[test]
    #[cfg(feature = "raw-video")]
    fn test_prelude() {
        use crate::prelude::*;

        assert_eq!(frame_size(PixelFormat::NV21, 2, 2), Ok(6));
        assert_eq!(frame_size_for_tag("NV21", 2, 2), Ok(6));
        assert!(frame_size_for_tag("nv21", 2, 2).is_err());
        assert!(Framerate::new(1, 0).is_err());
    }
}
