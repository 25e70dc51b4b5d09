//! Quote card rendering.
//!
//! A card is a background image with the quote caption and its attribution
//! drawn on top, each laid out with the auto-fit engine in [`layout`].

pub mod backgrounds;
pub mod canvas;
pub mod layout;
pub mod raster;

pub use backgrounds::BackgroundLibrary;
pub use canvas::{Canvas, Color, CompositeMode, MonospaceMeasure, Point, Rect, TextMeasure};
pub use layout::{layout, Layout, LayoutRequest, Overlay};
pub use raster::RasterCanvas;

use crate::config::RenderConfig;
use crate::error::{Result, ScribeError};
use crate::quotebook::Quote;
use ab_glyph::FontVec;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Fonts tried when no font is configured.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/msttcorefonts/Courier_New.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/Library/Fonts/Courier New.ttf",
    "/System/Library/Fonts/Supplemental/Courier New.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

/// A rendered card ready to send.
#[derive(Debug, Clone)]
pub struct RenderedCard {
    /// PNG-encoded image.
    pub png: Vec<u8>,
    /// Background the card was drawn on.
    pub background: PathBuf,
}

/// Turns a quote into an image.
pub trait QuoteRenderer: Send + Sync {
    fn render(&self, quote: &Quote) -> Result<RenderedCard>;
}

/// Layouts chosen for both lines of a card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub caption: Layout,
    pub attribution: Layout,
}

/// Draws a quote's caption and attribution onto a canvas.
pub fn draw_card(canvas: &mut dyn Canvas, quote: &Quote, config: &RenderConfig) -> CardLayout {
    let anchor = Point::new(
        canvas.width() as f32 / config.anchor_x_divisor,
        canvas.height() as f32 / config.anchor_y_divisor,
    );
    let caption = layout::draw_caption(
        canvas,
        &quote.caption(),
        anchor,
        config.quote_font_size,
        config.min_font_size,
        config.right_margin,
    );

    let [dx, dy] = config.attribution_offset;
    let attribution = layout::draw_caption(
        canvas,
        &quote.attribution(),
        Point::new(anchor.x + dx, anchor.y + dy),
        config.attribution_font_size,
        config.min_font_size,
        config.right_margin,
    );

    CardLayout {
        caption,
        attribution,
    }
}

/// Resolves the font to draw with.
fn resolve_font_path(configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = configured {
        return Ok(path.to_path_buf());
    }
    FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
        .ok_or_else(|| {
            ScribeError::render("No font configured and no fallback font found; set render.font")
        })
}

/// Renders cards onto random backgrounds with a TrueType font.
pub struct CardRenderer {
    backgrounds: BackgroundLibrary,
    font: Arc<FontVec>,
    config: RenderConfig,
}

impl CardRenderer {
    /// Scans the backgrounds directory and loads the font.
    pub fn from_config(config: &RenderConfig) -> Result<Self> {
        config.validate()?;
        let font_path = resolve_font_path(config.font.as_deref())?;
        let font = raster::load_font(&font_path)?;
        debug!("Using font {}", font_path.display());
        let backgrounds = BackgroundLibrary::scan(&config.backgrounds)?;
        Ok(Self::new(backgrounds, font, config.clone()))
    }

    /// Creates a renderer from already-loaded parts.
    pub fn new(backgrounds: BackgroundLibrary, font: FontVec, config: RenderConfig) -> Self {
        Self {
            backgrounds,
            font: Arc::new(font),
            config,
        }
    }
}

impl QuoteRenderer for CardRenderer {
    fn render(&self, quote: &Quote) -> Result<RenderedCard> {
        let background = {
            let mut rng = rand::thread_rng();
            self.backgrounds.choose(&mut rng)?.to_path_buf()
        };
        let (width, height) = BackgroundLibrary::dimensions(&background)?;
        debug!(
            "Drawing card on {} ({width}x{height})",
            background.display()
        );

        let image = BackgroundLibrary::load(&background)?;
        let mut canvas = RasterCanvas::new(image, Arc::clone(&self.font));
        let card = draw_card(&mut canvas, quote, &self.config);
        if !card.caption.fits {
            debug!("Caption overflows even at {}px", card.caption.font_size);
        }

        Ok(RenderedCard {
            png: canvas.to_png()?,
            background,
        })
    }
}
