//! Face and edge extraction from the conventional 64x64 skin texel layout.
//!
//! Both skin layers use the same head layout; the overlay's regions sit at
//! a fixed horizontal texel offset. Extraction is therefore written once
//! against [`SkinLayer::x_offset`] rather than per layer.

use image::{RgbaImage, imageops};
use tracing::debug;

use crate::{MaskError, Result};

/// Horizontal texel offset of the overlay layer's head regions.
const OVERLAY_X_OFFSET: u32 = 32;

/// Region coordinates relative to the layer offset: (x, y, width, height).
const FACE: (u32, u32, u32, u32) = (8, 8, 8, 8);
const TOP_EDGE: (u32, u32, u32, u32) = (8, 7, 8, 1);
const BOTTOM_EDGE: (u32, u32, u32, u32) = (16, 7, 8, 1);
const LEFT_EDGE: (u32, u32, u32, u32) = (7, 8, 1, 8);
const RIGHT_EDGE: (u32, u32, u32, u32) = (16, 8, 1, 8);

/// The two texture layers a skin carries.
///
/// The overlay holds hats, hair and other accessories rendered over the
/// base skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinLayer {
    Base,
    Overlay,
}

impl SkinLayer {
    /// Horizontal texel offset of this layer's head regions.
    pub fn x_offset(self) -> u32 {
        match self {
            SkinLayer::Base => 0,
            SkinLayer::Overlay => OVERLAY_X_OFFSET,
        }
    }
}

impl std::fmt::Display for SkinLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkinLayer::Base => f.write_str("base"),
            SkinLayer::Overlay => f.write_str("overlay"),
        }
    }
}

/// The five cropped head regions of one skin layer, in texel resolution.
#[derive(Debug, Clone)]
pub struct FaceTextures {
    /// 8x8 front of the head.
    pub face: RgbaImage,
    /// 8x1 strip folded over the top edge.
    pub top: RgbaImage,
    /// 8x1 strip folded under the bottom edge.
    pub bottom: RgbaImage,
    /// 1x8 strip folded around the left edge.
    pub left: RgbaImage,
    /// 1x8 strip folded around the right edge.
    pub right: RgbaImage,
}

/// Crop the face and its four edge strips for one layer.
///
/// The skin is only read; every crop is an owned copy. Fails if the image
/// is too small to contain the head regions at the layer's texel offset.
pub fn extract_face_textures(skin: &RgbaImage, layer: SkinLayer) -> Result<FaceTextures> {
    let offset = layer.x_offset();
    // The bottom edge strip reaches furthest right, the face furthest down.
    let min_width = BOTTOM_EDGE.0 + BOTTOM_EDGE.2 + offset;
    let min_height = FACE.1 + FACE.3;
    if skin.width() < min_width || skin.height() < min_height {
        return Err(MaskError::SkinTooSmall {
            layer,
            width: skin.width(),
            height: skin.height(),
            min_width,
            min_height,
        });
    }

    debug!(%layer, offset, "Extracting face and edge strips");

    let crop =
        |(x, y, w, h): (u32, u32, u32, u32)| imageops::crop_imm(skin, x + offset, y, w, h).to_image();

    Ok(FaceTextures {
        face: crop(FACE),
        top: crop(TOP_EDGE),
        bottom: crop(BOTTOM_EDGE),
        left: crop(LEFT_EDGE),
        right: crop(RIGHT_EDGE),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const FACE_COLOR: Rgba<u8> = Rgba([200, 0, 0, 255]);
    const TOP_COLOR: Rgba<u8> = Rgba([0, 200, 0, 255]);
    const BOTTOM_COLOR: Rgba<u8> = Rgba([0, 0, 200, 255]);
    const LEFT_COLOR: Rgba<u8> = Rgba([200, 200, 0, 255]);
    const RIGHT_COLOR: Rgba<u8> = Rgba([0, 200, 200, 255]);
    const OVERLAY_FACE_COLOR: Rgba<u8> = Rgba([100, 0, 100, 255]);

    fn fill(skin: &mut RgbaImage, (x, y, w, h): (u32, u32, u32, u32), offset: u32, color: Rgba<u8>) {
        for dy in 0..h {
            for dx in 0..w {
                skin.put_pixel(x + offset + dx, y + dy, color);
            }
        }
    }

    /// 64x64 skin with one solid color per named region, both layers.
    fn test_skin() -> RgbaImage {
        let mut skin = RgbaImage::from_pixel(64, 64, Rgba([9, 9, 9, 255]));
        fill(&mut skin, FACE, 0, FACE_COLOR);
        fill(&mut skin, TOP_EDGE, 0, TOP_COLOR);
        fill(&mut skin, BOTTOM_EDGE, 0, BOTTOM_COLOR);
        fill(&mut skin, LEFT_EDGE, 0, LEFT_COLOR);
        fill(&mut skin, RIGHT_EDGE, 0, RIGHT_COLOR);

        let o = OVERLAY_X_OFFSET;
        fill(&mut skin, FACE, o, OVERLAY_FACE_COLOR);
        fill(&mut skin, TOP_EDGE, o, TOP_COLOR);
        fill(&mut skin, BOTTOM_EDGE, o, BOTTOM_COLOR);
        fill(&mut skin, LEFT_EDGE, o, LEFT_COLOR);
        fill(&mut skin, RIGHT_EDGE, o, RIGHT_COLOR);
        skin
    }

    fn assert_solid(img: &RgbaImage, color: Rgba<u8>) {
        for (x, y, px) in img.enumerate_pixels() {
            assert_eq!(*px, color, "unexpected pixel at ({x}, {y})");
        }
    }

    #[test]
    fn test_base_layer_regions_and_sizes() {
        let skin = test_skin();
        let t = extract_face_textures(&skin, SkinLayer::Base).unwrap();

        assert_eq!(t.face.dimensions(), (8, 8));
        assert_eq!(t.top.dimensions(), (8, 1));
        assert_eq!(t.bottom.dimensions(), (8, 1));
        assert_eq!(t.left.dimensions(), (1, 8));
        assert_eq!(t.right.dimensions(), (1, 8));

        assert_solid(&t.face, FACE_COLOR);
        assert_solid(&t.top, TOP_COLOR);
        assert_solid(&t.bottom, BOTTOM_COLOR);
        assert_solid(&t.left, LEFT_COLOR);
        assert_solid(&t.right, RIGHT_COLOR);
    }

    #[test]
    fn test_overlay_layer_reads_offset_regions() {
        let skin = test_skin();
        let t = extract_face_textures(&skin, SkinLayer::Overlay).unwrap();
        assert_solid(&t.face, OVERLAY_FACE_COLOR);
        assert_solid(&t.top, TOP_COLOR);
    }

    #[test]
    fn test_source_skin_is_untouched() {
        let skin = test_skin();
        let before = skin.clone();
        extract_face_textures(&skin, SkinLayer::Base).unwrap();
        extract_face_textures(&skin, SkinLayer::Overlay).unwrap();
        assert_eq!(skin.as_raw(), before.as_raw());
    }

    #[test]
    fn test_legacy_64x32_skin_extracts_both_layers() {
        // Head regions only use rows 0..16, so the legacy half-height
        // format still works for both layers.
        let skin = RgbaImage::from_pixel(64, 32, Rgba([1, 2, 3, 255]));
        assert!(extract_face_textures(&skin, SkinLayer::Base).is_ok());
        assert!(extract_face_textures(&skin, SkinLayer::Overlay).is_ok());
    }

    #[test]
    fn test_too_small_image_is_rejected() {
        let skin = RgbaImage::new(16, 16);
        let err = extract_face_textures(&skin, SkinLayer::Base).unwrap_err();
        assert!(matches!(
            err,
            MaskError::SkinTooSmall {
                layer: SkinLayer::Base,
                min_width: 24,
                min_height: 16,
                ..
            }
        ));
    }

    #[test]
    fn test_base_can_fit_where_overlay_cannot() {
        let skin = RgbaImage::new(40, 16);
        assert!(extract_face_textures(&skin, SkinLayer::Base).is_ok());
        let err = extract_face_textures(&skin, SkinLayer::Overlay).unwrap_err();
        assert!(matches!(
            err,
            MaskError::SkinTooSmall {
                layer: SkinLayer::Overlay,
                min_width: 56,
                ..
            }
        ));
    }
}
