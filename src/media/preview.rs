/// Comparison preview generation
///
/// Decodes the uploaded image once, downscales it for display, and builds the
/// "after" rendering with a restoration look. Everything here is display-only:
/// the stored images are never modified.

use std::sync::Arc;

use image::{imageops, imageops::FilterType, Rgba, RgbaImage};

use super::DataUrl;
use crate::error::{AppError, AppResult};

/// Contrast boost applied to the "after" side (percent)
const AFTER_CONTRAST: f32 = 12.0;

/// Brightness lift applied to the "after" side
const AFTER_BRIGHTEN: i32 = 8;

/// Unsharp mask sigma and threshold for the "after" side
const AFTER_SHARPEN_SIGMA: f32 = 1.2;
const AFTER_SHARPEN_THRESHOLD: i32 = 2;

/// Width of the divider line in pixels
const DIVIDER_WIDTH: u32 = 2;

const DIVIDER_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Decoded before/after pair, ready for composition
#[derive(Debug, Clone)]
pub struct Preview {
    pub before: Arc<RgbaImage>,
    pub after: Arc<RgbaImage>,
}

impl Preview {
    pub fn dimensions(&self) -> (u32, u32) {
        self.before.dimensions()
    }
}

/// Decode a preview pair off the UI thread
pub async fn generate_preview(
    before: DataUrl,
    after: DataUrl,
    max_edge: u32,
) -> AppResult<Preview> {
    tokio::task::spawn_blocking(move || generate_preview_blocking(&before, &after, max_edge))
        .await
        .map_err(|e| AppError::PreviewDecode(format!("task join error: {e}")))?
}

/// Blocking version of preview generation
pub fn generate_preview_blocking(
    before: &DataUrl,
    after: &DataUrl,
    max_edge: u32,
) -> AppResult<Preview> {
    let before_img = decode_bounded(before, max_edge)?;

    // Same bytes on both sides: reuse the decode
    let after_base = if after == before {
        before_img.clone()
    } else {
        decode_bounded(after, max_edge)?
    };

    Ok(Preview {
        before: Arc::new(before_img),
        after: Arc::new(restoration_look(&after_base)),
    })
}

fn decode_bounded(image: &DataUrl, max_edge: u32) -> AppResult<RgbaImage> {
    if image.is_empty() {
        return Err(AppError::PreviewDecode("no image data".to_string()));
    }

    let decoded = image::load_from_memory(image.bytes())
        .map_err(|e| AppError::PreviewDecode(e.to_string()))?;

    let decoded = if decoded.width() > max_edge || decoded.height() > max_edge {
        decoded.resize(max_edge, max_edge, FilterType::Triangle)
    } else {
        decoded
    };

    Ok(decoded.to_rgba8())
}

/// Contrast, brightness and sharpening, roughly what the web demo did with CSS filters
pub fn restoration_look(image: &RgbaImage) -> RgbaImage {
    let contrasted = imageops::contrast(image, AFTER_CONTRAST);
    let brightened = imageops::brighten(&contrasted, AFTER_BRIGHTEN);
    imageops::unsharpen(&brightened, AFTER_SHARPEN_SIGMA, AFTER_SHARPEN_THRESHOLD)
}

/// Compose the split view: `before` left of the split, `after` right of it
///
/// # Arguments
/// * `split` - Divider position as a fraction of the width, clamped to [0, 1]
pub fn compose(before: &RgbaImage, after: &RgbaImage, split: f32) -> RgbaImage {
    let (width, height) = before.dimensions();
    let split_x = (split.clamp(0.0, 1.0) * width as f32).round() as u32;
    let half_divider = DIVIDER_WIDTH / 2;

    RgbaImage::from_fn(width, height, |x, y| {
        let on_divider = split_x > 0
            && split_x < width
            && x + half_divider >= split_x
            && x < split_x + half_divider;

        if on_divider {
            DIVIDER_COLOR
        } else if x < split_x {
            *before.get_pixel(x, y)
        } else if x < after.width() && y < after.height() {
            *after.get_pixel(x, y)
        } else {
            *before.get_pixel(x, y)
        }
    })
}
