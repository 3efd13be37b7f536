//! Caption overlay on a randomly chosen stock image.
//!
//! Per item: pick an asset uniformly (with replacement), draw the caption text
//! at a fixed position, blur the whole frame. Nothing is written to disk.

use crate::config::ComposeConfig;
use crate::content::{ContentItem, ImageSlot};
use crate::error::{AssetError, ComposeError, PreconditionError, Stage};
use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::fmt;
use std::path::{Path, PathBuf};

/// In-memory result of one composition.
#[derive(Clone)]
pub struct ComposedImage {
    pub asset: PathBuf,
    pub pixels: RgbaImage,
}

impl ComposedImage {
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

impl fmt::Debug for ComposedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dimensions();
        f.debug_struct("ComposedImage")
            .field("asset", &self.asset)
            .field("width", &w)
            .field("height", &h)
            .finish()
    }
}

impl fmt::Display for ComposedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dimensions();
        write!(f, "<image {}x{} from {}>", w, h, self.asset.display())
    }
}

/// Outcome of [`ImageComposer::compose_all`].
#[derive(Debug, Default)]
pub struct ComposeReport {
    pub composed: usize,
    /// Items left with [`ImageSlot::Missing`], by index.
    pub failures: Vec<(usize, ComposeError)>,
}

pub struct ImageComposer {
    assets: Vec<PathBuf>,
    font_path: PathBuf,
    font: Option<FontVec>,
    scale: PxScale,
    origin: (i32, i32),
    color: Rgba<u8>,
    blur_sigma: f32,
    rng: StdRng,
}

impl ImageComposer {
    pub fn new(config: &ComposeConfig, rng: StdRng) -> Self {
        Self {
            assets: config.assets.clone(),
            font_path: config.font_path.clone(),
            font: None,
            scale: PxScale::from(config.font_size),
            origin: (config.text_x, config.text_y),
            color: Rgba(config.text_color),
            blur_sigma: config.blur_sigma,
            rng,
        }
    }

    /// Compose one item. `index` is only used to label precondition failures.
    pub fn compose_item(
        &mut self,
        index: usize,
        item: &ContentItem,
    ) -> Result<ComposedImage, ComposeError> {
        let caption = item.caption.as_ref().ok_or(PreconditionError {
            stage: Stage::Compose,
            item_index: index,
        })?;

        let asset = self
            .assets
            .choose(&mut self.rng)
            .cloned()
            .ok_or(ComposeError::NoAssets)?;

        let bytes = std::fs::read(&asset).map_err(|e| AssetError {
            path: asset.clone(),
            reason: e.to_string(),
        })?;
        let decoded = image::load_from_memory(&bytes).map_err(|source| ComposeError::Decode {
            path: asset.clone(),
            source,
        })?;

        let font = cached_font(&mut self.font, &self.font_path)?;
        let mut canvas = decoded.to_rgba8();
        let (x, y) = self.origin;
        draw_text_mut(&mut canvas, self.color, x, y, self.scale, font, &caption.text);
        let pixels = image::imageops::blur(&canvas, self.blur_sigma);

        Ok(ComposedImage { asset, pixels })
    }

    /// Compose every item in order. Asset and decode failures leave the item
    /// `Missing` and are reported; a missing caption aborts before any item is
    /// touched.
    pub fn compose_all(
        &mut self,
        items: &mut [ContentItem],
    ) -> Result<ComposeReport, PreconditionError> {
        if let Some(item_index) = items.iter().position(|i| i.caption.is_none()) {
            return Err(PreconditionError {
                stage: Stage::Compose,
                item_index,
            });
        }

        let mut report = ComposeReport::default();
        for (idx, item) in items.iter_mut().enumerate() {
            match self.compose_item(idx, item) {
                Ok(image) => {
                    tracing::debug!(item = idx, asset = %image.asset.display(), "composed image");
                    item.set_image(ImageSlot::Ready(image));
                    report.composed += 1;
                }
                Err(ComposeError::Precondition(e)) => return Err(e),
                Err(e) => {
                    tracing::warn!(item = idx, error = %e, "image composition failed, continuing without image");
                    item.set_image(ImageSlot::Missing);
                    report.failures.push((idx, e));
                }
            }
        }
        Ok(report)
    }
}

fn load_font(path: &Path) -> Result<FontVec, AssetError> {
    let bytes = std::fs::read(path).map_err(|e| AssetError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    FontVec::try_from_vec(bytes).map_err(|e| AssetError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load the font on first use; later calls reuse it.
fn cached_font<'a>(slot: &'a mut Option<FontVec>, path: &Path) -> Result<&'a FontVec, AssetError> {
    let font = match slot.take() {
        Some(font) => font,
        None => load_font(path)?,
    };
    Ok(slot.insert(font))
}
