//! The default activity indicator.

use std::time::Duration;

use crate::types::Color;

/// Braille dot cycle used by the small spinner.
const SMALL_FRAMES: [&str; 8] = [
    "\u{28F7}", // ⣷
    "\u{28EF}", // ⣯
    "\u{28DF}", // ⣟
    "\u{287F}", // ⡿
    "\u{28BF}", // ⢿
    "\u{28FB}", // ⣻
    "\u{28FD}", // ⣽
    "\u{28FE}", // ⣾
];

/// Three-cell bouncing dots used by the large spinner.
const LARGE_FRAMES: [&str; 6] = [
    "\u{28C0}\u{2800}\u{2800}", // ⣀⠀⠀
    "\u{2824}\u{28C0}\u{2800}", // ⠤⣀⠀
    "\u{281B}\u{2824}\u{28C0}", // ⠛⠤⣀
    "\u{2800}\u{281B}\u{2824}", // ⠀⠛⠤
    "\u{2800}\u{2800}\u{281B}", // ⠀⠀⠛
    "\u{2800}\u{2800}\u{2800}", // ⠀⠀⠀
];

/// Size of the default spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorSize {
    /// A single braille cell.
    Small,
    #[default]
    Large,
}

/// Passthrough configuration for the default spinner.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorProps {
    pub size: IndicatorSize,
    /// Glyph color; white when unset.
    pub color: Option<Color>,
    /// When false the spinner holds its first frame.
    pub animating: bool,
    pub interval: Duration,
}

impl Default for IndicatorProps {
    fn default() -> Self {
        Self {
            size: IndicatorSize::Large,
            color: None,
            animating: true,
            interval: Duration::from_millis(80),
        }
    }
}

impl IndicatorProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: IndicatorSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn animating(mut self, animating: bool) -> Self {
        self.animating = animating;
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Width and height of the spinner in cells.
    pub fn intrinsic_size(&self) -> (u16, u16) {
        match self.size {
            IndicatorSize::Small => (1, 1),
            IndicatorSize::Large => (3, 1),
        }
    }

    /// Glyphs to draw after `elapsed` time.
    pub fn frame(&self, elapsed: Duration) -> &'static str {
        let frames: &[&'static str] = match self.size {
            IndicatorSize::Small => &SMALL_FRAMES,
            IndicatorSize::Large => &LARGE_FRAMES,
        };

        if !self.animating || self.interval.is_zero() {
            return frames[0];
        }

        let index = (elapsed.as_millis() / self.interval.as_millis().max(1)) as usize % frames.len();
        frames[index]
    }
}
