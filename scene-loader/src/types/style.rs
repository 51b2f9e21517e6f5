use super::Color;

/// Attributes of a painted glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
}

/// Colors and attributes of an element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    /// Composited over whatever lies underneath, honoring alpha.
    pub background: Option<Color>,
    /// Glyph color. White when unset.
    pub foreground: Option<Color>,
    pub text: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// A style that only tints the area underneath.
    pub fn tint(color: Color) -> Self {
        Self {
            background: Some(color),
            ..Self::default()
        }
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text.dim = true;
        self
    }
}
