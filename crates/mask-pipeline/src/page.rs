//! Page splitting with horizontal overlap and alignment markers.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use tracing::debug;

use crate::config::MaskConfig;
use crate::units::mm_to_px;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Canvas position of the alignment-marker grid.
const MARKER_POS: (i32, i32) = (10, 10);

/// Copy the columns `src_x0..src_x1` of the composite onto a page canvas.
///
/// The page is opaque: the composite's alpha is dropped and its RGB values
/// are copied as-is (unpainted composite background is white, same as the
/// page). `dest_y` may be negative, cropping the composite top and bottom;
/// columns running past the right page edge are cropped the same way.
fn paste_columns(
    page: &mut RgbImage,
    composite: &RgbaImage,
    src_x0: u32,
    src_x1: u32,
    dest_x: u32,
    dest_y: i64,
) {
    for y in 0..composite.height() {
        let py = dest_y + i64::from(y);
        if py < 0 || py >= i64::from(page.height()) {
            continue;
        }
        for x in src_x0..src_x1 {
            let px = dest_x + (x - src_x0);
            if px >= page.width() {
                break;
            }
            let Rgba([r, g, b, _]) = *composite.get_pixel(x, y);
            page.put_pixel(px, py as u32, Rgb([r, g, b]));
        }
    }
}

/// Stamp the 2x2 grid of black squares used to line pages up after cutting.
fn draw_alignment_markers(page: &mut RgbImage, marker_size: u32) {
    let (x, y) = MARKER_POS;
    let m = marker_size as i32;
    for (cx, cy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        let square = Rect::at(x + cx * m, y + cy * m).of_size(marker_size, marker_size);
        draw_filled_rect_mut(page, square, BLACK);
    }
}

/// Slice one composite into an ordered sequence of printable pages.
///
/// Each window's crop reaches `overlap_px` columns back past its start, and
/// every page after the first reserves that overlap as a left margin, so
/// the margin strip reprints content from the previous window. Pages after
/// the first also carry the alignment markers. The composite is centered
/// vertically; one taller than the page is cropped top and bottom, which is
/// accepted behavior. Always produces at least one page.
pub fn split_into_pages(composite: &RgbaImage, cfg: &MaskConfig) -> Vec<RgbImage> {
    let overlap_px = mm_to_px(cfg.overlap_mm, cfg.dpi);
    let page_w = mm_to_px(cfg.a4_width_mm, cfg.dpi);
    let page_h = mm_to_px(cfg.a4_height_mm, cfg.dpi);

    let (total_w, total_h) = composite.dimensions();
    let dest_y = (i64::from(page_h) - i64::from(total_h)).div_euclid(2);

    let mut pages = Vec::new();
    let mut x = 0u32;
    loop {
        let crop_left = x.saturating_sub(overlap_px);
        let crop_right = (x + page_w).min(total_w);

        let mut page = RgbImage::from_pixel(page_w, page_h, WHITE);
        let dest_x = if x == 0 { 0 } else { overlap_px };
        paste_columns(&mut page, composite, crop_left, crop_right, dest_x, dest_y);

        if x > 0 {
            draw_alignment_markers(&mut page, cfg.marker_size);
        }
        pages.push(page);

        x += page_w - overlap_px;
        if x >= total_w {
            break;
        }
    }

    debug!(
        pages = pages.len(),
        total_w, total_h, overlap_px, "Split composite into pages"
    );
    pages
}
