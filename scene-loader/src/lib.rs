pub mod animation;
pub mod buffer;
pub mod descriptor;
pub mod element;
pub mod error;
pub mod loader;
pub mod paint;
pub mod rect;
pub mod spinner;
pub mod text;
pub mod transitions;
pub mod types;

pub use animation::{AnimatedValue, Animator, Completion};
pub use buffer::{Buffer, Cell};
pub use descriptor::{
    AnimatedStyle, AnimationBounds, AnimationDescriptor, Direction, Resolver, StyleChannel,
};
pub use element::{Content, Element, Size};
pub use error::{ColorParseError, ConfigError};
pub use loader::{LoaderProps, Phase, SceneLoader};
pub use paint::paint;
pub use rect::{Rect, Viewport};
pub use spinner::{IndicatorProps, IndicatorSize};
pub use transitions::{Easing, SpringConfig, Technique, TimingConfig};
pub use types::*;
