//! Raster canvas backed by `image` and `ab_glyph`.

use super::canvas::{Canvas, Color, CompositeMode, Point, Rect, TextMeasure};
use crate::error::{Result, ScribeError};
use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// Loads a TrueType/OpenType font from disk.
pub fn load_font(path: &Path) -> Result<FontVec> {
    let bytes = std::fs::read(path).map_err(|e| {
        ScribeError::render(format!("Failed to read font {}: {e}", path.display()))
    })?;
    FontVec::try_from_vec(bytes)
        .map_err(|e| ScribeError::render(format!("Invalid font {}: {e}", path.display())))
}

/// An RGBA raster that text can be measured against and drawn onto.
pub struct RasterCanvas {
    image: RgbaImage,
    font: Arc<FontVec>,
}

impl RasterCanvas {
    /// Wraps an image and the font used for all text.
    pub fn new(image: RgbaImage, font: Arc<FontVec>) -> Self {
        Self { image, font }
    }

    /// Encodes the canvas as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(self.image.clone())
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| ScribeError::render(format!("Failed to encode PNG: {e}")))?;
        Ok(bytes)
    }
}

/// Scale for a font size given as an em size, like CSS `70px`.
///
/// `PxScale` measures ascent to descent, which is taller than the em box for
/// most faces.
fn em_scale(font: &FontVec, font_size: f32) -> PxScale {
    match font.units_per_em() {
        Some(units) if units > 0.0 => PxScale::from(font_size * font.height_unscaled() / units),
        _ => PxScale::from(font_size),
    }
}

/// Blends one channel. `alpha` is the effective source coverage in 0..=1.
fn blend_channel(dst: u8, src: u8, alpha: f32, mode: CompositeMode) -> u8 {
    let dst_f = dst as f32;
    let src_f = match mode {
        CompositeMode::SourceOver => src as f32,
        CompositeMode::Difference => (dst_f - src as f32).abs(),
    };
    (dst_f + (src_f - dst_f) * alpha).round().clamp(0.0, 255.0) as u8
}

fn blend_pixel(pixel: &mut Rgba<u8>, color: Color, coverage: f32, mode: CompositeMode) {
    let alpha = (color.a * coverage).clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }
    let [r, g, b, a] = pixel.0;
    let out_a = alpha + (a as f32 / 255.0) * (1.0 - alpha);
    pixel.0 = [
        blend_channel(r, color.r, alpha, mode),
        blend_channel(g, color.g, alpha, mode),
        blend_channel(b, color.b, alpha, mode),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ];
}

impl TextMeasure for RasterCanvas {
    fn measure_text(&self, font_size: f32, text: &str) -> f32 {
        let font = self.font.as_scaled(em_scale(&self.font, font_size));
        let mut width = 0.0;
        let mut previous: Option<GlyphId> = None;
        for c in text.chars() {
            let id = font.glyph_id(c);
            if let Some(prev) = previous {
                width += font.kern(prev, id);
            }
            width += font.h_advance(id);
            previous = Some(id);
        }
        width
    }
}

impl Canvas for RasterCanvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let x0 = rect.x.max(0.0).round() as u32;
        let y0 = rect.y.max(0.0).round() as u32;
        let x1 = ((rect.x + rect.width).round().max(0.0) as u32).min(self.image.width());
        let y1 = ((rect.y + rect.height).round().max(0.0) as u32).min(self.image.height());

        for y in y0..y1 {
            for x in x0..x1 {
                blend_pixel(
                    self.image.get_pixel_mut(x, y),
                    color,
                    1.0,
                    CompositeMode::SourceOver,
                );
            }
        }
    }

    fn fill_text(
        &mut self,
        text: &str,
        origin: Point,
        font_size: f32,
        color: Color,
        mode: CompositeMode,
    ) {
        let font = &self.font;
        let scale = em_scale(font, font_size);
        let scaled = font.as_scaled(scale);
        let image = &mut self.image;
        let (width, height) = image.dimensions();

        let mut caret = origin.x;
        let mut previous: Option<GlyphId> = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, ab_glyph::point(caret, origin.y));
            caret += scaled.h_advance(id);
            previous = Some(id);

            let Some(outlined) = font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i64 + gx as i64;
                let py = bounds.min.y as i64 + gy as i64;
                if px < 0 || py < 0 || px >= width as i64 || py >= height as i64 {
                    return;
                }
                blend_pixel(
                    image.get_pixel_mut(px as u32, py as u32),
                    color,
                    coverage,
                    mode,
                );
            });
        }
    }
}
