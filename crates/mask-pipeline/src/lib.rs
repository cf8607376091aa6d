//! Skin-to-papercraft mask pipeline.
//!
//! Turns a Minecraft skin texture into print-ready page images: the head
//! face and its four edge strips are cropped per layer (base and overlay),
//! scaled to physical paper dimensions, composited into one bitmap, and
//! split into overlapping pages with alignment markers for manual assembly.

pub mod assemble;
pub mod compose;
pub mod config;
pub mod page;
pub mod skin;
pub mod units;

// Re-exports for convenience
pub use assemble::generate_mask_pages;
pub use compose::compose_layer;
pub use config::MaskConfig;
pub use page::split_into_pages;
pub use skin::{FaceTextures, SkinLayer, extract_face_textures};

/// Millimeters per inch, the basis for every print-size conversion.
pub const MM_PER_INCH: f64 = 25.4;

/// Errors that can occur while generating mask pages.
#[derive(Debug, thiserror::Error)]
pub enum MaskError {
    #[error(
        "skin image is {width}x{height}, the {layer} layer needs at least {min_width}x{min_height}"
    )]
    SkinTooSmall {
        layer: skin::SkinLayer,
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },

    #[error("configuration option {option} must be positive, got {value}")]
    NonPositiveOption { option: &'static str, value: f64 },

    #[error("overlap_mm ({overlap_mm}) must be smaller than a4_width_mm ({a4_width_mm})")]
    OverlapExceedsPage { overlap_mm: f64, a4_width_mm: f64 },
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, MaskError>;
