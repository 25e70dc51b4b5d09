//! Drawing surface abstractions.
//!
//! The layout engine only needs to measure text; the card renderer also
//! needs to fill rectangles and text with a compositing mode. Both are traits
//! so layout can be tested without a font or a raster.

/// A point in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// An sRGB color with a fractional alpha, like CSS `rgba()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 1.0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// How drawn pixels combine with what is already on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeMode {
    /// Paint over the destination.
    SourceOver,
    /// Absolute difference between source and destination.
    Difference,
}

/// Measures the rendered width of a single line of text.
pub trait TextMeasure {
    /// Returns the pixel width of `text` at `font_size`.
    fn measure_text(&self, font_size: f32, text: &str) -> f32;
}

/// A raster surface the card renderer draws onto.
pub trait Canvas: TextMeasure {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Fills a rectangle using source-over compositing.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws one line of text with its baseline starting at `origin`.
    fn fill_text(
        &mut self,
        text: &str,
        origin: Point,
        font_size: f32,
        color: Color,
        mode: CompositeMode,
    );
}

/// Fixed-pitch measurement: every character is `advance` ems wide.
///
/// Matches monospace faces such as Courier New (0.6 em per glyph) and is
/// what the layout tests measure with.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasure {
    pub advance: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure_text(&self, font_size: f32, text: &str) -> f32 {
        text.chars().count() as f32 * font_size * self.advance
    }
}
