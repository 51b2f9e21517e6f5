//! Paint an element tree into a cell buffer.
//!
//! Every child is centered in its parent. Animated bindings are read here,
//! so offsets and opacity reflect the animated value at paint time.

use std::time::Duration;

use crate::buffer::Buffer;
use crate::element::{Content, Element, Size};
use crate::rect::Rect;
use crate::text::glyph_width;
use crate::types::{Color, Rgb, TextStyle};

const DEFAULT_FOREGROUND: Rgb = Rgb::new(255, 255, 255);

/// Paint `root` into `area`. `elapsed` drives spinner frames.
pub fn paint(root: &Element, area: Rect, buf: &mut Buffer, elapsed: Duration) {
    let mut painter = Painter { buf, elapsed };
    painter.element(root, area, 1.0);
}

/// Where `element` lands inside `parent`, before any animated offset.
pub fn resolve_rect(element: &Element, parent: Rect) -> Rect {
    let (iw, ih) = element.intrinsic_size();
    let extent = |size: Size, intrinsic: u16, available: i32| match size {
        Size::Fixed(n) => n as i32,
        Size::Fill => available,
        Size::Auto => intrinsic as i32,
    };
    parent.centered(
        extent(element.width, iw, parent.width),
        extent(element.height, ih, parent.height),
    )
}

struct Painter<'a> {
    buf: &'a mut Buffer,
    elapsed: Duration,
}

/// Glyph color and attributes shared by one element's rows.
#[derive(Clone, Copy)]
struct Ink {
    color: Rgb,
    alpha: f32,
    style: TextStyle,
}

impl Ink {
    fn new(color: Option<&Color>, style: TextStyle, opacity: f32) -> Self {
        Self {
            color: color.map_or(DEFAULT_FOREGROUND, Color::to_rgb),
            alpha: color.map_or(1.0, Color::alpha) * opacity,
            style,
        }
    }
}

impl Painter<'_> {
    fn element(&mut self, element: &Element, parent: Rect, opacity: f32) {
        let mut rect = resolve_rect(element, parent);
        let mut opacity = opacity;

        if let Some(animated) = &element.animated {
            let (dx, dy) = animated.offset();
            rect = rect.offset(dx, dy);
            opacity *= animated.opacity();
        }

        if opacity <= 0.0 || rect.is_empty() {
            return;
        }

        if let Some(bg) = &element.style.background {
            self.buf.tint(rect, bg.to_rgb(), bg.alpha() * opacity);
        }

        let style = &element.style;
        let ink = Ink::new(style.foreground.as_ref(), style.text, opacity);
        match &element.content {
            Content::Empty => {}
            Content::Text(text) => {
                for (row, line) in text.lines().enumerate() {
                    self.row(rect, rect.y + row as i32, line.chars(), ink);
                }
            }
            Content::Pattern(glyph) => {
                for y in rect.y..rect.bottom() {
                    self.row(rect, y, std::iter::repeat(*glyph), ink);
                }
            }
            Content::Spinner(props) => {
                let ink = match &props.color {
                    Some(color) => Ink::new(Some(color), style.text, opacity),
                    None => ink,
                };
                self.row(rect, rect.y, props.frame(self.elapsed).chars(), ink);
            }
            Content::Layers(children) => {
                for child in children {
                    self.element(child, rect, opacity);
                }
            }
        }
    }

    /// Lay glyphs out from the left edge of `rect`, stopping at its right edge.
    fn row(&mut self, rect: Rect, y: i32, glyphs: impl Iterator<Item = char>, ink: Ink) {
        if y < rect.y || y >= rect.bottom() {
            return;
        }
        let mut x = rect.x;
        for glyph in glyphs {
            let width = glyph_width(glyph) as i32;
            if x + width > rect.right() {
                break;
            }
            self.buf.put_glyph(x, y, glyph, ink.color, ink.alpha, ink.style);
            x += width;
        }
    }
}
