//! Basic lamco-raw-video usage example
//!
//! This example demonstrates:
//! - Building a FrameDescriptor from negotiated parameters
//! - Sizing frames for every supported pixel format, with its layout traits
//! - How rejected dimensions and unknown format tags are reported
//!
//! Rejected sizes are also logged at debug level.

use lamco_raw_video::{
    frame_size, frame_size_for_tag, supported_formats, FrameDescriptor, PixelFormat,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("lamco-raw-video v{}", lamco_raw_video::VERSION);
    println!();

    // Descriptor as produced by format negotiation
    let descriptor = FrameDescriptor::builder()
        .width(1920)
        .height(1080)
        .framerate(30000, 1001)
        .format(PixelFormat::NV12)
        .aligned(true)
        .build()?;

    println!("Descriptor: {}", descriptor);
    println!("  Approx fps: {:.3}", descriptor.framerate().as_f64());
    if let Some(duration) = descriptor.framerate().frame_duration() {
        println!("  Frame duration: {:?}", duration);
    }
    println!("  Frame size: {} bytes", descriptor.frame_size()?);
    println!();

    println!("Frame sizes at 1280x720:");
    for format in supported_formats() {
        println!(
            "  {:<5} {:<12} {:<8} {:<6} {:<5}: {} bytes",
            format,
            format!("{:?}", format.subsampling()),
            if format.is_planar() { "planar" } else { "packed" },
            if format.is_yuv() { "yuv" } else { "rgb" },
            if format.has_alpha() { "alpha" } else { "-" },
            frame_size(format, 1280, 720)?
        );
    }
    println!();

    println!("Rejections:");
    for (tag, width, height) in [("I420", 1279, 720), ("I422", 3, 2), ("YUY2", 1280, 720)] {
        match frame_size_for_tag(tag, width, height) {
            Ok(size) => println!("  {} {}x{}: {} bytes", tag, width, height, size),
            Err(e) => println!("  {} {}x{}: {}", tag, width, height, e),
        }
    }

    Ok(())
}
