//! Mixed-script line rendering.
//!
//! A line is split into script runs ([`split_runs`]); each run is measured with the face assigned
//! to its class, the runs are aligned vertically inside the line's block height, centred as a
//! whole on the canvas, and drawn left to right.

use ab_glyph::{Font, FontArc, GlyphId, OutlinedGlyph, PxScale, ScaleFont, point};
use serde::{Deserialize, Serialize};

use crate::{
    effects::composite::blend_coverage,
    foundation::core::{Layer, Rgba8, TextBox, VAlign},
    text::{
        fonts::FontPair,
        script::{ScriptClass, split_runs},
    },
};

/// How a line of text is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f32,
    /// Extra advance between consecutive glyphs of a run, in pixels.
    pub letter_spacing: f32,
    /// Fill colour.
    pub color: Rgba8,
    /// Vertical alignment of runs within the line.
    pub align: VAlign,
}

/// Where a line's block sits vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineAnchor {
    /// Block top at this y.
    Top(f32),
    /// Block bottom this many pixels above the canvas bottom.
    AboveBottom(f32),
}

/// Measured extent of one run, relative to the run origin (x = pen start, y = ascent line).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Horizontal extent: the larger of the pen advance and the rightmost ink.
    pub width: i32,
    /// Topmost ink row (0 when the run has no ink).
    pub top: i32,
    /// One past the bottommost ink row (0 when the run has no ink).
    pub bottom: i32,
}

impl RunMetrics {
    /// Ink height.
    pub fn height(self) -> i32 {
        (self.bottom - self.top).max(0)
    }

    fn has_ink(self) -> bool {
        self.bottom > self.top
    }
}

/// One positioned run.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedRun<'a> {
    /// Script class (selects the face).
    pub class: ScriptClass,
    /// Run text.
    pub text: &'a str,
    /// Measured extent.
    pub metrics: RunMetrics,
    /// Run origin x on the canvas.
    pub x: i32,
    /// Run origin y (ascent line) on the canvas.
    pub y: i32,
}

impl PlacedRun<'_> {
    fn ink_box(&self) -> TextBox {
        TextBox {
            left: self.x,
            top: self.y + self.metrics.top,
            right: self.x + self.metrics.width,
            bottom: self.y + self.metrics.bottom,
        }
    }
}

/// A fully positioned line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout<'a> {
    /// Runs, left to right.
    pub runs: Vec<PlacedRun<'a>>,
    /// Sum of run widths.
    pub total_width: i32,
    /// Tallest run ink height.
    pub block_height: i32,
    /// Block top on the canvas.
    pub block_top: i32,
}

impl LineLayout<'_> {
    /// Union of the runs' boxes: full horizontal extent, vertical ink extent.
    pub fn bounds(&self) -> TextBox {
        let (Some(first), Some(last)) = (self.runs.first(), self.runs.last()) else {
            return TextBox {
                left: 0,
                top: self.block_top,
                right: 0,
                bottom: self.block_top,
            };
        };
        let mut out = TextBox {
            left: first.x,
            top: self.block_top,
            right: last.x + last.metrics.width,
            bottom: self.block_top,
        };
        let mut inked = self.runs.iter().filter(|r| r.metrics.has_ink());
        if let Some(r) = inked.next() {
            let ink = inked.fold(r.ink_box(), |acc, r| acc.union(r.ink_box()));
            out.top = ink.top;
            out.bottom = ink.bottom;
        }
        out
    }
}

/// Measure `text` drawn with `font` at the style's size and spacing.
pub fn measure_run(font: &FontArc, text: &str, style: &TextStyle) -> RunMetrics {
    let mut top = i32::MAX;
    let mut bottom = i32::MIN;
    let mut ink_right = i32::MIN;
    let advance = walk_glyphs(font, text, style, 0, 0, |g| {
        let b = g.px_bounds();
        top = top.min(b.min.y as i32);
        bottom = bottom.max(b.max.y as i32);
        ink_right = ink_right.max(b.max.x as i32);
    });

    let width = (advance.ceil() as i32).max(ink_right).max(0);
    if top == i32::MAX {
        RunMetrics {
            width,
            top: 0,
            bottom: 0,
        }
    } else {
        RunMetrics { width, top, bottom }
    }
}

/// Split, measure and position `text` on a canvas of the given size.
pub fn layout_line<'a>(
    text: &'a str,
    fonts: &FontPair,
    style: &TextStyle,
    canvas_width: u32,
    canvas_height: u32,
    anchor: LineAnchor,
) -> LineLayout<'a> {
    let measured: Vec<_> = split_runs(text)
        .into_iter()
        .map(|run| (run, measure_run(fonts.for_class(run.class), run.text, style)))
        .collect();

    let total_width: i32 = measured.iter().map(|(_, m)| m.width).sum();
    let block_height = measured.iter().map(|(_, m)| m.height()).max().unwrap_or(0);
    let block_top = match anchor {
        LineAnchor::Top(y) => y.round() as i32,
        LineAnchor::AboveBottom(offset) => {
            (canvas_height as f32 - block_height as f32 - offset).round() as i32
        }
    };

    let mut cursor = (i64::from(canvas_width) - i64::from(total_width)).div_euclid(2) as i32;
    let mut runs = Vec::with_capacity(measured.len());
    for (run, metrics) in measured {
        let slack = block_height - metrics.height();
        let align_offset = match style.align {
            VAlign::Top => 0,
            VAlign::Center => slack / 2,
            VAlign::Bottom => slack,
        };
        runs.push(PlacedRun {
            class: run.class,
            text: run.text,
            metrics,
            x: cursor,
            y: block_top + align_offset - metrics.top,
        });
        cursor += metrics.width;
    }

    LineLayout {
        runs,
        total_width,
        block_height,
        block_top,
    }
}

/// Draw a laid-out line.
pub fn draw_line(canvas: &mut Layer, layout: &LineLayout<'_>, fonts: &FontPair, style: &TextStyle) {
    let color = [style.color.r, style.color.g, style.color.b, style.color.a];
    for run in &layout.runs {
        walk_glyphs(
            fonts.for_class(run.class),
            run.text,
            style,
            run.x,
            run.y,
            |g| {
                let b = g.px_bounds();
                let (ox, oy) = (b.min.x as i64, b.min.y as i64);
                g.draw(|px, py, coverage| {
                    blend_coverage(canvas, ox + i64::from(px), oy + i64::from(py), color, coverage);
                });
            },
        );
    }
}

/// Lay out and draw one mixed-script line, centred horizontally. Returns the drawn bounds.
pub fn draw_mixed_text(
    canvas: &mut Layer,
    text: &str,
    fonts: &FontPair,
    style: &TextStyle,
    anchor: LineAnchor,
) -> TextBox {
    let (w, h) = canvas.dimensions();
    let layout = layout_line(text, fonts, style, w, h, anchor);
    draw_line(canvas, &layout, fonts, style);
    layout.bounds()
}

/// Visit every outlined glyph of `text` with the run origin at `(x, y)`; returns the pen advance.
fn walk_glyphs(
    font: &FontArc,
    text: &str,
    style: &TextStyle,
    x: i32,
    y: i32,
    mut visit: impl FnMut(&OutlinedGlyph),
) -> f32 {
    if !style.font_size.is_finite() || style.font_size <= 0.0 {
        return 0.0;
    }
    let scale = PxScale::from(style.font_size);
    let scaled = font.as_scaled(scale);
    let baseline = y as f32 + scaled.ascent();
    let spacing = if style.letter_spacing.is_finite() {
        style.letter_spacing
    } else {
        0.0
    };

    let mut pen = x as f32;
    let mut prev: Option<GlyphId> = None;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let id = scaled.glyph_id(c);
        if let Some(p) = prev {
            pen += scaled.kern(p, id);
        }
        let glyph = id.with_scale_and_position(scale, point(pen, baseline));
        if let Some(outlined) = font.outline_glyph(glyph) {
            visit(&outlined);
        }
        pen += scaled.h_advance(id);
        if chars.peek().is_some() {
            pen += spacing;
        }
        prev = Some(id);
    }
    pen - x as f32
}

#[cfg(test)]
#[path = "../../tests/unit/text/render.rs"]
mod tests;
