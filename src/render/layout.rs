//! Caption auto-fit layout.
//!
//! Finds a font size (and, if needed, a single line break) that keeps a
//! caption inside the canvas, then computes the overlay geometry used to draw
//! it legibly over an arbitrary background.

use super::canvas::{Canvas, Color, CompositeMode, Point, Rect, TextMeasure};

/// Font size decrement per shrink attempt.
pub const SIZE_STEP: f32 = 5.0;

/// Right-hand space kept free on every card.
pub const DEFAULT_RIGHT_MARGIN: f32 = 100.0;

const BACKING_LEFT: f32 = 20.0;
const BACKING_TOP: f32 = 30.0;
const BACKING_PAD_X: f32 = 20.0;
const BACKING_PAD_Y: f32 = 30.0;
const BACKING_COLOR: Color = Color::rgba(0, 0, 0, 0.5);
const GLOW_COLOR: Color = Color::rgba(255, 255, 255, 0.25);

/// Input to [`layout`].
#[derive(Debug, Clone)]
pub struct LayoutRequest<'a> {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub text: &'a str,
    /// Where the first line's baseline starts.
    pub anchor: Point,
    pub start_size: f32,
    pub min_size: f32,
    pub right_margin: f32,
}

impl<'a> LayoutRequest<'a> {
    /// Creates a request with the default right margin.
    pub fn new(
        canvas_width: f32,
        canvas_height: f32,
        text: &'a str,
        anchor: Point,
        start_size: f32,
        min_size: f32,
    ) -> Self {
        Self {
            canvas_width,
            canvas_height,
            text,
            anchor,
            start_size,
            min_size,
            right_margin: DEFAULT_RIGHT_MARGIN,
        }
    }

    fn available_width(&self) -> f32 {
        self.canvas_width - self.right_margin
    }
}

/// The chosen layout for a caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub font_size: f32,
    /// Caption text with any inserted line break.
    pub text: String,
    /// Width of the widest line.
    pub width: f32,
    pub line_count: usize,
    /// False when even the best effort overflows the available width.
    pub fits: bool,
}

/// Widest line of `text` at `font_size`.
fn text_width<M: TextMeasure + ?Sized>(measure: &M, font_size: f32, text: &str) -> f32 {
    text.split('\n')
        .map(|line| measure.measure_text(font_size, line))
        .fold(0.0, f32::max)
}

/// Steps the font size down until `text` fits or the floor is reached.
///
/// The size is decremented before the first measurement, so the largest size
/// ever tried is `start_size - SIZE_STEP`.
fn shrink<M: TextMeasure + ?Sized>(measure: &M, request: &LayoutRequest<'_>, text: &str) -> Layout {
    let limit = request.available_width();
    let line_count = text.split('\n').count();
    let mut size = request.start_size;

    loop {
        size -= SIZE_STEP;
        if size.is_nan() || size < request.min_size {
            let width = text_width(measure, request.min_size, text);
            return Layout {
                font_size: request.min_size,
                text: text.to_string(),
                width,
                line_count,
                fits: width + request.anchor.x <= limit,
            };
        }

        let width = text_width(measure, size, text);
        if width + request.anchor.x <= limit {
            return Layout {
                font_size: size,
                text: text.to_string(),
                width,
                line_count,
                fits: true,
            };
        }
    }
}

/// Lays out a caption, shrinking first and wrapping onto two lines if
/// shrinking alone is not enough.
///
/// Wrapping tries a break just past the middle word, then moves it one word
/// earlier per attempt, and gives up once the first line would hold fewer
/// than half of the words. When nothing fits, the narrowest wrapped attempt
/// is returned at the floor size with `fits` unset.
pub fn layout<M: TextMeasure + ?Sized>(measure: &M, request: &LayoutRequest<'_>) -> Layout {
    let single = shrink(measure, request, request.text);
    if single.fits {
        return single;
    }

    let words: Vec<&str> = request.text.split_whitespace().collect();
    let n = words.len();
    if n < 2 {
        return single;
    }

    let mut best: Option<Layout> = None;
    let mut split = (n / 2 + 1).min(n - 1);
    while split >= 1 && split * 2 >= n {
        let wrapped = format!("{}\n{}", words[..split].join(" "), words[split..].join(" "));
        let candidate = shrink(measure, request, &wrapped);
        if candidate.fits {
            return candidate;
        }
        if best.as_ref().map_or(true, |b| candidate.width < b.width) {
            best = Some(candidate);
        }
        split -= 1;
    }

    best.unwrap_or(single)
}

/// One text drawing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPass {
    pub color: Color,
    pub mode: CompositeMode,
}

/// Geometry for drawing a laid-out caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Translucent box behind the text.
    pub backing: Rect,
    pub backing_color: Color,
    /// Baseline start of the first line.
    pub origin: Point,
    pub line_height: f32,
    /// Drawn in order: a white difference pass, then a faint white wash.
    pub passes: [TextPass; 2],
}

impl Overlay {
    /// Computes the overlay for a layout anchored at `anchor`.
    pub fn for_layout(layout: &Layout, anchor: Point) -> Self {
        let size = layout.font_size;
        Self {
            backing: Rect {
                x: anchor.x - BACKING_LEFT,
                y: anchor.y - size / 2.0 - BACKING_TOP,
                width: layout.width + BACKING_PAD_X,
                height: size * layout.line_count as f32 + BACKING_PAD_Y,
            },
            backing_color: BACKING_COLOR,
            origin: anchor,
            line_height: size,
            passes: [
                TextPass {
                    color: Color::WHITE,
                    mode: CompositeMode::Difference,
                },
                TextPass {
                    color: GLOW_COLOR,
                    mode: CompositeMode::SourceOver,
                },
            ],
        }
    }

    /// Draws the backing box and then each text pass.
    pub fn draw(&self, canvas: &mut dyn Canvas, layout: &Layout) {
        canvas.fill_rect(self.backing, self.backing_color);
        for pass in &self.passes {
            for (i, line) in layout.text.split('\n').enumerate() {
                let origin = Point::new(self.origin.x, self.origin.y + self.line_height * i as f32);
                canvas.fill_text(line, origin, layout.font_size, pass.color, pass.mode);
            }
        }
    }
}

/// Lays out and draws a caption in one go.
pub fn draw_caption(
    canvas: &mut dyn Canvas,
    text: &str,
    anchor: Point,
    start_size: f32,
    min_size: f32,
    right_margin: f32,
) -> Layout {
    let request = LayoutRequest {
        canvas_width: canvas.width() as f32,
        canvas_height: canvas.height() as f32,
        text,
        anchor,
        start_size,
        min_size,
        right_margin,
    };
    let chosen = layout(&*canvas, &request);
    Overlay::for_layout(&chosen, anchor).draw(canvas, &chosen);
    chosen
}
