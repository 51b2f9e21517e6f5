//! The element tree the loader renders and [`paint`](crate::paint) draws.

use crate::descriptor::AnimatedStyle;
use crate::spinner::IndicatorProps;
use crate::text::block_size;
use crate::types::Style;

/// How an element is sized along one axis of its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Fixed(u16),
    /// The full extent of the parent.
    #[default]
    Fill,
    /// Shrink to the content.
    Auto,
}

#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    Empty,
    /// Text, one row per line.
    Text(String),
    /// A glyph repeated over the whole area.
    Pattern(char),
    Spinner(IndicatorProps),
    /// Children painted in order, each centered in this element.
    Layers(Vec<Element>),
}

#[derive(Debug, Clone)]
pub struct Element {
    pub id: Option<String>,
    pub content: Content,
    pub width: Size,
    pub height: Size,
    pub style: Style,
    /// Live binding applied to this element and its descendants at paint
    /// time.
    pub animated: Option<AnimatedStyle>,
}

impl Element {
    fn with_content(content: Content, size: Size) -> Self {
        Self {
            id: None,
            content,
            width: size,
            height: size,
            style: Style::default(),
            animated: None,
        }
    }

    /// A box covering its parent, drawn with its background only.
    pub fn panel() -> Self {
        Self::with_content(Content::Empty, Size::Fill)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::with_content(Content::Text(text.into()), Size::Auto)
    }

    /// `glyph` repeated over the whole parent.
    pub fn pattern(glyph: char) -> Self {
        Self::with_content(Content::Pattern(glyph), Size::Fill)
    }

    pub fn spinner(props: IndicatorProps) -> Self {
        Self::with_content(Content::Spinner(props), Size::Auto)
    }

    /// A container covering its parent with overlapping children.
    pub fn layers(children: impl IntoIterator<Item = Element>) -> Self {
        Self::with_content(Content::Layers(children.into_iter().collect()), Size::Fill)
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn size(mut self, width: Size, height: Size) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Bind this subtree to an animated value.
    pub fn bind(mut self, animated: AnimatedStyle) -> Self {
        self.animated = Some(animated);
        self
    }

    pub fn is_animated(&self) -> bool {
        self.animated.is_some()
    }

    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Layers(children) => children,
            _ => &[],
        }
    }

    /// Depth-first search for the element with `id`.
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    /// Width and height of the content alone.
    pub fn intrinsic_size(&self) -> (u16, u16) {
        match &self.content {
            Content::Empty | Content::Pattern(_) => (0, 0),
            Content::Text(text) => block_size(text),
            Content::Spinner(props) => props.intrinsic_size(),
            Content::Layers(children) => children
                .iter()
                .map(Element::requested_size)
                .fold((0, 0), |(w, h), (cw, ch)| (w.max(cw), h.max(ch))),
        }
    }

    /// Fixed extents, falling back to the content size.
    fn requested_size(&self) -> (u16, u16) {
        let (iw, ih) = self.intrinsic_size();
        let pick = |size: Size, intrinsic: u16| match size {
            Size::Fixed(n) => n,
            Size::Fill | Size::Auto => intrinsic,
        };
        (pick(self.width, iw), pick(self.height, ih))
    }
}
