//! Loader configuration.

use std::fmt;

use crate::descriptor::AnimationDescriptor;
use crate::element::Element;
use crate::spinner::IndicatorProps;
use crate::types::{Color, Style};

/// Zero-argument lifecycle hook.
pub type Callback = Box<dyn FnMut()>;

/// Renders a replacement for the default spinner.
pub type IndicatorRenderer = Box<dyn Fn() -> Element>;

/// Renders a replacement for the default underlay panel.
///
/// The argument is the default panel's style, and its background is already
/// the `underlay_color` tint. With an animation set, the overlay paints that
/// tint on the animated wrapper around the returned element, so the element
/// must not fill its background with it again. Without an animation the
/// element is painted exactly as returned.
pub type UnderlayRenderer = Box<dyn Fn(&Style) -> Element>;

/// Default tint of the underlay panel.
pub fn default_underlay_color() -> Color {
    Color::rgba(0, 0, 0, 0.3)
}

/// Hooks fired at transition boundaries. All default to no-ops.
pub struct LifecycleHooks {
    pub on_in_animation_start: Callback,
    pub on_in_animation_end: Callback,
    pub on_out_animation_start: Callback,
    pub on_out_animation_end: Callback,
}

impl Default for LifecycleHooks {
    fn default() -> Self {
        Self {
            on_in_animation_start: Box::new(|| {}),
            on_in_animation_end: Box::new(|| {}),
            on_out_animation_start: Box::new(|| {}),
            on_out_animation_end: Box::new(|| {}),
        }
    }
}

impl fmt::Debug for LifecycleHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LifecycleHooks { .. }")
    }
}

/// Construction-time configuration of a [`SceneLoader`](super::SceneLoader).
pub struct LoaderProps {
    /// Id of the rendered root; children use `<id>-underlay` and `<id>-indicator`.
    pub id: String,
    pub visible: bool,
    pub animation: Option<AnimationDescriptor>,
    pub custom_indicator: Option<IndicatorRenderer>,
    pub custom_underlay: Option<UnderlayRenderer>,
    pub underlay_color: Color,
    pub indicator_props: IndicatorProps,
    pub hooks: LifecycleHooks,
}

impl Default for LoaderProps {
    fn default() -> Self {
        Self {
            id: "scene-loader".to_string(),
            visible: false,
            animation: None,
            custom_indicator: None,
            custom_underlay: None,
            underlay_color: default_underlay_color(),
            indicator_props: IndicatorProps::default(),
            hooks: LifecycleHooks::default(),
        }
    }
}

impl fmt::Debug for LoaderProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderProps")
            .field("id", &self.id)
            .field("visible", &self.visible)
            .field("animation", &self.animation)
            .field("custom_indicator", &self.custom_indicator.is_some())
            .field("custom_underlay", &self.custom_underlay.is_some())
            .field("underlay_color", &self.underlay_color)
            .field("indicator_props", &self.indicator_props)
            .finish_non_exhaustive()
    }
}

impl LoaderProps {
    /// Props with the given initial visibility request.
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn animation(mut self, animation: AnimationDescriptor) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn custom_indicator(mut self, render: impl Fn() -> Element + 'static) -> Self {
        self.custom_indicator = Some(Box::new(render));
        self
    }

    pub fn custom_underlay(mut self, render: impl Fn(&Style) -> Element + 'static) -> Self {
        self.custom_underlay = Some(Box::new(render));
        self
    }

    pub fn underlay_color(mut self, color: Color) -> Self {
        self.underlay_color = color;
        self
    }

    pub fn indicator_props(mut self, props: IndicatorProps) -> Self {
        self.indicator_props = props;
        self
    }

    pub fn on_in_animation_start(mut self, hook: impl FnMut() + 'static) -> Self {
        self.hooks.on_in_animation_start = Box::new(hook);
        self
    }

    pub fn on_in_animation_end(mut self, hook: impl FnMut() + 'static) -> Self {
        self.hooks.on_in_animation_end = Box::new(hook);
        self
    }

    pub fn on_out_animation_start(mut self, hook: impl FnMut() + 'static) -> Self {
        self.hooks.on_out_animation_start = Box::new(hook);
        self
    }

    pub fn on_out_animation_end(mut self, hook: impl FnMut() + 'static) -> Self {
        self.hooks.on_out_animation_end = Box::new(hook);
        self
    }

    /// Style of the default underlay panel.
    pub fn underlay_style(&self) -> Style {
        Style::tint(self.underlay_color.clone())
    }
}
