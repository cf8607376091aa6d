//! Layer compositing: scale the cropped regions to print size and assemble
//! them into one bitmap per skin layer.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::config::MaskConfig;
use crate::skin::FaceTextures;
use crate::units::mm_to_px_scaled;

/// Composite background: white with zero alpha.
const BLANK: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Alpha-composite `top` onto `base` at the given position.
///
/// Fully opaque pixels overwrite, fully transparent pixels are skipped,
/// partial alpha is blended against the existing pixel.
fn overlay(base: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    for (dx, dy, pixel) in top.enumerate_pixels() {
        let target_x = x + dx;
        let target_y = y + dy;
        if target_x < base.width() && target_y < base.height() {
            let alpha = f32::from(pixel[3]) / 255.0;
            if alpha > 0.99 {
                base.put_pixel(target_x, target_y, *pixel);
            } else if alpha > 0.01 {
                let bg = base.get_pixel(target_x, target_y);
                let blended = blend_pixel(bg, pixel, alpha);
                base.put_pixel(target_x, target_y, blended);
            }
        }
    }
}

fn blend_pixel(bg: &Rgba<u8>, fg: &Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let inv = 1.0 - alpha;
    Rgba([
        (f32::from(fg[0]) * alpha + f32::from(bg[0]) * inv) as u8,
        (f32::from(fg[1]) * alpha + f32::from(bg[1]) * inv) as u8,
        (f32::from(fg[2]) * alpha + f32::from(bg[2]) * inv) as u8,
        255,
    ])
}

/// Scale one region to exact target dimensions without smoothing.
///
/// Nearest-neighbor keeps the skin's blocky texels crisp; an interpolating
/// filter would bleed neighboring colors into the print.
fn scale_region(region: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    imageops::resize(region, width, height, FilterType::Nearest)
}

/// Assemble one print-size composite from the five cropped regions.
///
/// The canvas is `face + edge` on every side. Edges sit flush around the
/// inner face rectangle at `(edge, edge)`, and the face is pasted after all
/// four edges so it owns the shared seams. The four corner squares stay
/// blank; they are cut away during assembly.
pub fn compose_layer(textures: &FaceTextures, cfg: &MaskConfig, scale: f64) -> RgbaImage {
    let face_w = mm_to_px_scaled(cfg.face_width_mm, cfg.dpi, scale);
    let face_h = mm_to_px_scaled(cfg.face_height_mm, cfg.dpi, scale);
    let edge = mm_to_px_scaled(cfg.edge_thickness_mm, cfg.dpi, scale);

    let total_w = face_w + 2 * edge;
    let total_h = face_h + 2 * edge;
    debug!(face_w, face_h, edge, total_w, total_h, scale, "Compositing layer");

    let face = scale_region(&textures.face, face_w, face_h);
    let top = scale_region(&textures.top, face_w, edge);
    let bottom = scale_region(&textures.bottom, face_w, edge);
    let left = scale_region(&textures.left, edge, face_h);
    let right = scale_region(&textures.right, edge, face_h);

    let mut composite = RgbaImage::from_pixel(total_w, total_h, BLANK);
    overlay(&mut composite, &top, edge, 0);
    overlay(&mut composite, &bottom, edge, edge + face_h);
    overlay(&mut composite, &left, 0, edge);
    overlay(&mut composite, &right, edge + face_w, edge);
    overlay(&mut composite, &face, edge, edge);
    composite
}
