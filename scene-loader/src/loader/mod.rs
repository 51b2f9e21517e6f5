//! The overlay visibility controller.
//!
//! A [`SceneLoader`] is an explicit state machine advanced only by
//! [`SceneLoader::set_visible`] (a new visibility request from the host) and
//! [`SceneLoader::tick`] (a frame of the animation runtime).
//!
//! ```text
//! Hidden  --show, no animation-->  Shown    mount immediately
//! Hidden  --show, animation----->  Showing  on_in_start, animate to end, mount
//! Showing --motion finished----->  Shown    on_in_end
//! Shown   --hide, no animation-->  Hidden   unmount immediately
//! Shown   --hide, animation----->  Hiding   on_out_start, animate to start
//! Hiding  --motion finished----->  Hidden   unmount, on_out_end
//! ```
//!
//! A request that reverses a running transition stops it. The stopped
//! transition still fires its end hook once, but its deferred mount change
//! is superseded by the new transition.

mod props;
mod render;

pub use props::{
    default_underlay_color, Callback, IndicatorRenderer, LifecycleHooks, LoaderProps,
    UnderlayRenderer,
};

use std::time::Duration;

use log::{debug, trace};

use crate::animation::{AnimatedValue, AnimationId, Animator, Completion};
use crate::descriptor::{AnimatedStyle, AnimationBounds, AnimationDescriptor, Resolver};
use crate::element::Element;
use crate::error::ConfigError;
use crate::rect::Viewport;

/// Visibility phase of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    /// Mounted, animating in.
    Showing,
    Shown,
    /// Still mounted, animating out.
    Hiding,
}

impl Phase {
    /// Whether the overlay subtree is rendered in this phase.
    pub fn is_mounted(self) -> bool {
        !matches!(self, Phase::Hidden)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransitionKind {
    In,
    Out,
}

/// Animation state that exists only when a descriptor is configured.
#[derive(Debug)]
struct Animated {
    descriptor: AnimationDescriptor,
    bounds: AnimationBounds,
    style: AnimatedStyle,
    animator: Animator,
}

/// A full-screen loading overlay driven by a boolean visibility request.
#[derive(Debug)]
pub struct SceneLoader {
    props: LoaderProps,
    viewport: Viewport,
    requested: bool,
    phase: Phase,
    animated: Option<Animated>,
    transition: Option<(AnimationId, TransitionKind)>,
    rendered_mount: Option<bool>,
}

impl SceneLoader {
    /// Validate `props` and build the loader for `viewport`.
    ///
    /// When an animation is configured the animated value is created here,
    /// resting at the hidden bound (or the shown bound if the loader starts
    /// visible).
    pub fn new(props: LoaderProps, viewport: Viewport) -> Result<Self, ConfigError> {
        let animated = match props.animation {
            Some(descriptor) => {
                descriptor.validate()?;
                let resolver = Resolver::new(Some(&descriptor), viewport);
                let bounds = resolver.current_bounds()?;
                let value = AnimatedValue::new(bounds.target(props.visible));
                let style = resolver
                    .current_animated_style(&value)
                    .ok_or(ConfigError::NoAnimation)?;

                Some(Animated {
                    descriptor,
                    bounds,
                    style,
                    animator: Animator::new(value),
                })
            }
            None => None,
        };

        let phase = if props.visible {
            Phase::Shown
        } else {
            Phase::Hidden
        };

        debug!(
            "SceneLoader '{}' created: visible={}, animation={}",
            props.id,
            props.visible,
            animated
                .as_ref()
                .map_or("none", |a| a.descriptor.direction.name()),
        );

        Ok(Self {
            requested: props.visible,
            props,
            viewport,
            phase,
            animated,
            transition: None,
            rendered_mount: None,
        })
    }

    pub fn props(&self) -> &LoaderProps {
        &self.props
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resolver over this loader's descriptor.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self.props.animation.as_ref(), self.viewport)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The last visibility request.
    pub fn requested_visible(&self) -> bool {
        self.requested
    }

    /// Whether the overlay subtree is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.phase.is_mounted()
    }

    /// True only while a hide transition is running.
    pub fn is_out_animating(&self) -> bool {
        self.phase == Phase::Hiding
    }

    /// True while any transition is running.
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn animated_value(&self) -> Option<&AnimatedValue> {
        self.animated.as_ref().map(|a| a.animator.value())
    }

    pub fn bounds(&self) -> Option<AnimationBounds> {
        self.animated.as_ref().map(|a| a.bounds)
    }

    /// Apply a new visibility request.
    ///
    /// A request equal to the previous one is ignored, including while a
    /// hide transition is running.
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.requested {
            trace!("SceneLoader '{}': repeated request visible={}", self.props.id, visible);
            return;
        }
        self.requested = visible;

        if self.animated.is_none() {
            self.phase = if visible { Phase::Shown } else { Phase::Hidden };
            debug!("SceneLoader '{}': {:?} without animation", self.props.id, self.phase);
            return;
        }

        if let Some(interrupted) = self.animated.as_mut().and_then(|a| a.animator.stop()) {
            self.complete(interrupted);
        }

        if visible {
            (self.props.hooks.on_in_animation_start)();
            self.run_animation(true);
            self.phase = Phase::Showing;
        } else {
            (self.props.hooks.on_out_animation_start)();
            self.run_animation(false);
            self.phase = Phase::Hiding;
        }
        debug!("SceneLoader '{}': {:?}", self.props.id, self.phase);
    }

    /// Advance the running transition by one frame.
    pub fn tick(&mut self, dt: Duration) {
        let completion = self.animated.as_mut().and_then(|a| a.animator.tick(dt));
        if let Some(completion) = completion {
            self.complete(completion);
        }
    }

    /// Whether the host should re-render.
    ///
    /// False while a hide transition runs and the mount state has not changed
    /// since the last render, so prop churn cannot restart or flicker the
    /// leaving overlay. Show transitions are not guarded.
    pub fn should_update(&self) -> bool {
        !(self.is_out_animating() && self.rendered_mount == Some(self.is_mounted()))
    }

    /// Render the overlay, or `None` when unmounted.
    pub fn render(&mut self) -> Option<Element> {
        let mounted = self.is_mounted();
        self.rendered_mount = Some(mounted);
        if !mounted {
            return None;
        }

        let binding = self.animated.as_ref().map(|a| &a.style);
        Some(render::render_overlay(&self.props, binding, self.viewport))
    }

    /// Start the configured technique toward the entering or leaving bound.
    fn run_animation(&mut self, is_in: bool) {
        let Some(animated) = self.animated.as_mut() else {
            return;
        };

        let to = animated.bounds.target(is_in);
        let (id, interrupted) = animated.animator.start(to, &animated.descriptor.technique);
        if let Some(interrupted) = interrupted {
            self.complete(interrupted);
        }

        let kind = if is_in {
            TransitionKind::In
        } else {
            TransitionKind::Out
        };
        self.transition = Some((id, kind));
    }

    /// Run the end action of the transition `completion` belongs to.
    fn complete(&mut self, completion: Completion) {
        let Some((id, kind)) = self.transition else {
            return;
        };
        if id != completion.id {
            return;
        }
        self.transition = None;

        match kind {
            TransitionKind::In => {
                if completion.finished {
                    self.phase = Phase::Shown;
                }
                (self.props.hooks.on_in_animation_end)();
            }
            TransitionKind::Out => {
                if completion.finished {
                    self.phase = Phase::Hidden;
                }
                (self.props.hooks.on_out_animation_end)();
            }
        }

        debug!(
            "SceneLoader '{}': {:?} transition {}",
            self.props.id,
            kind,
            if completion.finished {
                "finished"
            } else {
                "interrupted"
            },
        );
    }
}
