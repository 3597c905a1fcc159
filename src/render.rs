//! Render sink seam
//!
//! Draw methods emit primitives through `RenderSink`; the core computes all
//! coordinates and colors but never touches a surface itself. `RecordingSink`
//! captures the emitted calls for assertions in tests.

/// Packed 0xRRGGBB color
pub type Color = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    #[default]
    Middle,
    Alphabetic,
}

/// Font size, alignment and color for a text primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_px: f32,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub color: Color,
}

impl TextStyle {
    /// Centered white text at the given pixel size (the common HUD style)
    pub fn sized(size_px: f32) -> Self {
        Self {
            size_px,
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
            color: 0xffffff,
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// Drawing primitives the core emits each frame.
///
/// Rectangles are given by their top-left corner; text by its anchor point
/// per the style's alignment and baseline.
pub trait RenderSink {
    /// Clear the full surface
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    /// Outline only; used for debug-mode bounds
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn text(&mut self, text: &str, x: f32, y: f32, style: TextStyle);
}

/// Sink that discards everything (headless update-only ticking)
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn clear(&mut self, _width: f32, _height: f32) {}
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Color) {}
    fn stroke_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Color) {}
    fn text(&mut self, _text: &str, _x: f32, _y: f32, _style: TextStyle) {}
}

/// One captured primitive call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear { width: f32, height: f32 },
    FillRect { x: f32, y: f32, width: f32, height: f32, color: Color },
    StrokeRect { x: f32, y: f32, width: f32, height: f32, color: Color },
    Text { text: String, x: f32, y: f32, style: TextStyle },
}

/// Sink that records every call, for tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<DrawCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded text content, joined for containment checks
    pub fn all_text(&self) -> String {
        let mut out = String::new();
        for call in &self.calls {
            if let DrawCall::Text { text, .. } = call {
                out.push_str(text);
                out.push('\n');
            }
        }
        out
    }

    pub fn fill_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { .. }))
            .count()
    }
}

impl RenderSink for RecordingSink {
    fn clear(&mut self, width: f32, height: f32) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.calls.push(DrawCall::FillRect { x, y, width, height, color });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.calls.push(DrawCall::StrokeRect { x, y, width, height, color });
    }

    fn text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            style,
        });
    }
}
