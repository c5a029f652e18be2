//! Configuration for the desktop front end.

use cushy::kludgine::Color;

use crate::parameters::TransformKind;

/// The colors used to draw the canvas.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Palette {
    /// The canvas background.
    pub background: Color,
    /// The original rectangle and the rectangle being dragged out.
    pub original: Color,
    /// Translated overlays.
    pub translated: Color,
    /// Rotated overlays.
    pub rotated: Color,
    /// Scaled overlays.
    pub scaled: Color,
}

impl Palette {
    /// Returns the color overlays of `kind` are drawn with.
    #[must_use]
    pub const fn overlay(&self, kind: TransformKind) -> Color {
        match kind {
            TransformKind::Translate => self.translated,
            TransformKind::Rotate => self.rotated,
            TransformKind::Scale => self.scaled,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::new(255, 255, 255, 255),
            original: Color::new(0, 0, 255, 255),
            translated: Color::new(255, 0, 0, 255),
            rotated: Color::new(0, 128, 0, 255),
            scaled: Color::new(128, 0, 128, 255),
        }
    }
}

/// Settings for the desktop window.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// The window title.
    pub title: String,
    /// The width of the drawing canvas, in pixels.
    pub canvas_width: u32,
    /// The height of the drawing canvas, in pixels.
    pub canvas_height: u32,
    /// The width of every outline, in pixels.
    pub stroke_width: u32,
    /// The colors to draw with.
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: String::from("2D Geometric Transformations"),
            canvas_width: 600,
            canvas_height: 500,
            stroke_width: 2,
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Sets the window title and returns self.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the canvas size and returns self.
    ///
    /// Zero dimensions are raised to one pixel.
    #[must_use]
    pub fn canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width.max(1);
        self.canvas_height = height.max(1);
        self
    }

    /// Sets the outline width and returns self.
    ///
    /// Outlines are always at least one pixel wide.
    #[must_use]
    pub fn stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width.max(1);
        self
    }
}
