//! Immediate-mode drawing surface
//!
//! The host provides the real canvas. Draw commands only call into this
//! trait and never read anything back from it.

use glam::Vec2;

use super::colors::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
    Baseline,
}

pub trait Surface {
    /// Save fill/stroke/text state
    fn push_style(&mut self);
    /// Restore the state saved by the matching `push_style`
    fn pop_style(&mut self);
    fn fill(&mut self, color: Color);
    fn stroke(&mut self, color: Color);
    /// Outline width in pixels; 0 disables the outline
    fn stroke_weight(&mut self, weight: f32);
    fn circle(&mut self, center: Vec2, diameter: f32);
    fn ellipse(&mut self, center: Vec2, width: f32, height: f32);
    fn quad(&mut self, vertices: &[Vec2; 4]);
    fn line(&mut self, from: Vec2, to: Vec2);
    fn text(&mut self, text: &str, at: Vec2);
    fn text_align(&mut self, horizontal: HAlign, vertical: VAlign);
    fn text_size(&mut self, size: f32);
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    PushStyle,
    PopStyle,
    Fill(Color),
    Stroke(Color),
    StrokeWeight(f32),
    Circle { center: Vec2, diameter: f32 },
    Ellipse { center: Vec2, width: f32, height: f32 },
    Quad([Vec2; 4]),
    Line { from: Vec2, to: Vec2 },
    Text { text: String, at: Vec2 },
    TextAlign(HAlign, VAlign),
    TextSize(f32),
}

/// Surface that keeps every call in order, for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            SurfaceCall::Circle { center, diameter } => Some((*center, *diameter)),
            _ => None,
        })
    }

    pub fn quads(&self) -> impl Iterator<Item = &[Vec2; 4]> + '_ {
        self.calls.iter().filter_map(|c| match c {
            SurfaceCall::Quad(v) => Some(v),
            _ => None,
        })
    }

    /// Current push depth; 0 when every push was popped
    pub fn style_depth(&self) -> i32 {
        self.calls.iter().fold(0, |depth, c| match c {
            SurfaceCall::PushStyle => depth + 1,
            SurfaceCall::PopStyle => depth - 1,
            _ => depth,
        })
    }
}

impl Surface for RecordingSurface {
    fn push_style(&mut self) {
        self.calls.push(SurfaceCall::PushStyle);
    }

    fn pop_style(&mut self) {
        self.calls.push(SurfaceCall::PopStyle);
    }

    fn fill(&mut self, color: Color) {
        self.calls.push(SurfaceCall::Fill(color));
    }

    fn stroke(&mut self, color: Color) {
        self.calls.push(SurfaceCall::Stroke(color));
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.calls.push(SurfaceCall::StrokeWeight(weight));
    }

    fn circle(&mut self, center: Vec2, diameter: f32) {
        self.calls.push(SurfaceCall::Circle { center, diameter });
    }

    fn ellipse(&mut self, center: Vec2, width: f32, height: f32) {
        self.calls.push(SurfaceCall::Ellipse {
            center,
            width,
            height,
        });
    }

    fn quad(&mut self, vertices: &[Vec2; 4]) {
        self.calls.push(SurfaceCall::Quad(*vertices));
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        self.calls.push(SurfaceCall::Line { from, to });
    }

    fn text(&mut self, text: &str, at: Vec2) {
        self.calls.push(SurfaceCall::Text {
            text: text.to_owned(),
            at,
        });
    }

    fn text_align(&mut self, horizontal: HAlign, vertical: VAlign) {
        self.calls.push(SurfaceCall::TextAlign(horizontal, vertical));
    }

    fn text_size(&mut self, size: f32) {
        self.calls.push(SurfaceCall::TextSize(size));
    }
}
