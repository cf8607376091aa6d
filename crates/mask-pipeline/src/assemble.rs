//! Two-layer document assembly: extract, composite and split each skin
//! layer, then concatenate the per-layer page sequences.

use image::{RgbImage, RgbaImage};
use tracing::info;

use crate::Result;
use crate::compose::compose_layer;
use crate::config::MaskConfig;
use crate::page::split_into_pages;
use crate::skin::{SkinLayer, extract_face_textures};

/// Run the extract -> composite -> split stage for one skin layer.
///
/// Both layers go through this one stage; they only differ in texel offset
/// and scale factor.
fn layer_pages(
    skin: &RgbaImage,
    cfg: &MaskConfig,
    layer: SkinLayer,
    scale: f64,
) -> Result<Vec<RgbImage>> {
    let textures = extract_face_textures(skin, layer)?;
    let composite = compose_layer(&textures, cfg, scale);
    Ok(split_into_pages(&composite, cfg))
}

/// Generate the full printable page sequence for a skin.
///
/// The base layer renders at scale 1.0, the overlay at the configured
/// scale factor; base pages come first, overlay pages follow, each in its
/// own order. Any failure returns the error alone, never partial pages.
pub fn generate_mask_pages(skin: &RgbaImage, cfg: &MaskConfig) -> Result<Vec<RgbImage>> {
    let mut pages = layer_pages(skin, cfg, SkinLayer::Base, 1.0)?;
    let overlay = layer_pages(skin, cfg, SkinLayer::Overlay, cfg.outer_scale_factor)?;
    pages.extend(overlay);
    info!(pages = pages.len(), "Generated mask page sequence");
    Ok(pages)
}
