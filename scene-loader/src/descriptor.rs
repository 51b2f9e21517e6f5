//! Animation descriptors and the policy that resolves them.
//!
//! A descriptor names one [`Direction`] and one [`Technique`]. In code the
//! pairing is enforced by the type; descriptors coming from declarative
//! input (`{"fade": {"timing": {"duration": 1000}}}`) are checked here and
//! rejected with a [`ConfigError`].

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::animation::AnimatedValue;
use crate::error::ConfigError;
use crate::rect::Viewport;
use crate::transitions::{Easing, SpringConfig, Technique, TimingConfig};

/// Which way the overlay enters and leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Fade,
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 5] = [
        Direction::Fade,
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
    ];

    /// Key naming this direction in declarative descriptors.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Fade => "fade",
            Direction::Top => "top",
            Direction::Bottom => "bot",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Start (hidden) and end (shown) values for this direction.
    pub fn bounds(self, viewport: Viewport) -> AnimationBounds {
        let height = viewport.height as f32;
        let width = viewport.width as f32;
        match self {
            Direction::Fade => AnimationBounds::new(0.0, 1.0),
            Direction::Top => AnimationBounds::new(-height, 0.0),
            Direction::Bottom => AnimationBounds::new(height, 0.0),
            Direction::Left => AnimationBounds::new(-width, 0.0),
            Direction::Right => AnimationBounds::new(width, 0.0),
        }
    }

    /// The style channel this direction drives.
    pub fn channel(self) -> StyleChannel {
        match self {
            Direction::Fade => StyleChannel::Opacity,
            Direction::Top | Direction::Bottom => StyleChannel::Top,
            Direction::Left | Direction::Right => StyleChannel::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fade" => Ok(Direction::Fade),
            "top" => Ok(Direction::Top),
            "bot" | "bottom" => Ok(Direction::Bottom),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(ConfigError::UnknownAnimation {
                name: other.to_string(),
            }),
        }
    }
}

/// Ordered pair of scalar values a transition runs between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationBounds {
    /// Value while hidden.
    pub start: f32,
    /// Value while shown.
    pub end: f32,
}

impl AnimationBounds {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Target of an entering (`true`) or leaving (`false`) transition.
    pub fn target(&self, is_in: bool) -> f32 {
        if is_in { self.end } else { self.start }
    }
}

/// Visual property an animated value is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleChannel {
    Opacity,
    /// Vertical offset in cells.
    Top,
    /// Horizontal offset in cells.
    Left,
}

/// A style channel bound to a live animated value.
///
/// Painting reads the value at paint time, so a rendered tree keeps
/// animating without being rebuilt.
#[derive(Debug, Clone)]
pub struct AnimatedStyle {
    pub channel: StyleChannel,
    pub value: AnimatedValue,
}

impl AnimatedStyle {
    pub fn new(channel: StyleChannel, value: AnimatedValue) -> Self {
        Self { channel, value }
    }

    /// Current opacity multiplier (1.0 for offset channels).
    pub fn opacity(&self) -> f32 {
        match self.channel {
            StyleChannel::Opacity => self.value.get().clamp(0.0, 1.0),
            _ => 1.0,
        }
    }

    /// Current (x, y) offset in whole cells.
    pub fn offset(&self) -> (i32, i32) {
        let v = self.value.get().round() as i32;
        match self.channel {
            StyleChannel::Opacity => (0, 0),
            StyleChannel::Top => (0, v),
            StyleChannel::Left => (v, 0),
        }
    }
}

/// One direction animated with one technique.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDescriptor {
    pub direction: Direction,
    pub technique: Technique,
}

impl AnimationDescriptor {
    pub fn new(direction: Direction, technique: Technique) -> Self {
        Self {
            direction,
            technique,
        }
    }

    pub fn fade(technique: Technique) -> Self {
        Self::new(Direction::Fade, technique)
    }

    pub fn top(technique: Technique) -> Self {
        Self::new(Direction::Top, technique)
    }

    pub fn bottom(technique: Technique) -> Self {
        Self::new(Direction::Bottom, technique)
    }

    pub fn left(technique: Technique) -> Self {
        Self::new(Direction::Left, technique)
    }

    pub fn right(technique: Technique) -> Self {
        Self::new(Direction::Right, technique)
    }

    /// Check the technique parameters for values no motion can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Technique::Spring(spring) = &self.technique else {
            return Ok(());
        };

        let checks = [
            ("stiffness", spring.stiffness),
            ("damping", spring.damping),
            ("restDisplacementThreshold", spring.rest_displacement_threshold),
            ("restSpeedThreshold", spring.rest_speed_threshold),
        ];
        for (field, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    "spring",
                    format!("{field} must be a non-negative number, got {value}"),
                ));
            }
        }
        if !spring.mass.is_finite() || spring.mass <= 0.0 {
            return Err(ConfigError::invalid("spring", "mass must be positive"));
        }
        Ok(())
    }

    /// Parse a declarative descriptor from JSON text.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json_value(value)
    }

    /// Parse a declarative descriptor of the shape
    /// `{ <direction>: { <technique>: { ...parameters } } }`.
    pub fn from_json_value(value: Value) -> Result<Self, ConfigError> {
        let (name, body) = single_entry(serde_json::from_value(value)?)
            .map_err(|names| match names.len() {
                0 => ConfigError::Empty,
                _ => ConfigError::MultipleAnimations { names },
            })?;
        let direction: Direction = name.parse()?;

        let (technique, params) = single_entry(serde_json::from_value(body)?).map_err(|names| {
            match names.len() {
                0 => ConfigError::MissingTechnique {
                    direction: name.clone(),
                },
                _ => ConfigError::MultipleTechniques {
                    direction: name.clone(),
                    names,
                },
            }
        })?;

        let technique = match technique.as_str() {
            "timing" => Technique::Timing(serde_json::from_value::<TimingParams>(params)?.resolve()?),
            "spring" => Technique::Spring(serde_json::from_value::<SpringParams>(params)?.resolve()?),
            other => {
                return Err(ConfigError::UnknownTechnique {
                    name: other.to_string(),
                });
            }
        };

        Ok(Self::new(direction, technique))
    }
}

/// Take the only entry of a map, or report every key present.
fn single_entry(map: Map<String, Value>) -> Result<(String, Value), Vec<String>> {
    if map.len() != 1 {
        return Err(map.keys().cloned().collect());
    }
    map.into_iter().next().ok_or_else(Vec::new)
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TimingParams {
    duration: Option<f64>,
    delay: Option<f64>,
    easing: Option<Easing>,
}

impl TimingParams {
    fn resolve(self) -> Result<TimingConfig, ConfigError> {
        let mut config = TimingConfig::default();
        if let Some(ms) = self.duration {
            config.duration = millis("duration", ms)?;
        }
        if let Some(ms) = self.delay {
            config.delay = millis("delay", ms)?;
        }
        if let Some(easing) = self.easing {
            config.easing = easing;
        }
        Ok(config)
    }
}

fn millis(field: &str, ms: f64) -> Result<Duration, ConfigError> {
    if !ms.is_finite() || ms < 0.0 {
        return Err(ConfigError::invalid(
            "timing",
            format!("{field} must be a non-negative number of milliseconds, got {ms}"),
        ));
    }
    Ok(Duration::from_nanos((ms * 1_000_000.0).round() as u64))
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct SpringParams {
    bounciness: Option<f32>,
    speed: Option<f32>,
    stiffness: Option<f32>,
    damping: Option<f32>,
    mass: Option<f32>,
    rest_displacement_threshold: Option<f32>,
    rest_speed_threshold: Option<f32>,
    overshoot_clamping: Option<bool>,
}

impl SpringParams {
    fn resolve(self) -> Result<SpringConfig, ConfigError> {
        let origami = self.bounciness.is_some() || self.speed.is_some();
        let physics = self.stiffness.is_some() || self.damping.is_some();
        if origami && physics {
            return Err(ConfigError::invalid(
                "spring",
                "bounciness/speed cannot be combined with stiffness/damping",
            ));
        }

        let non_negative = |field: &str, v: Option<f32>| -> Result<Option<f32>, ConfigError> {
            match v {
                Some(v) if !v.is_finite() || v < 0.0 => Err(ConfigError::invalid(
                    "spring",
                    format!("{field} must be a non-negative number, got {v}"),
                )),
                other => Ok(other),
            }
        };

        let defaults = SpringConfig::default();
        let mut config = if physics {
            SpringConfig::new(
                non_negative("stiffness", self.stiffness)?.unwrap_or(defaults.stiffness),
                non_negative("damping", self.damping)?.unwrap_or(defaults.damping),
            )
        } else {
            SpringConfig::from_bounciness(
                non_negative("bounciness", self.bounciness)?.unwrap_or(8.0),
                non_negative("speed", self.speed)?.unwrap_or(12.0),
            )
        };

        if let Some(mass) = non_negative("mass", self.mass)? {
            if mass == 0.0 {
                return Err(ConfigError::invalid("spring", "mass must be positive"));
            }
            config = config.mass(mass);
        }
        config = config.rest_thresholds(
            non_negative("restDisplacementThreshold", self.rest_displacement_threshold)?
                .unwrap_or(config.rest_displacement_threshold),
            non_negative("restSpeedThreshold", self.rest_speed_threshold)?
                .unwrap_or(config.rest_speed_threshold),
        );
        if let Some(clamp) = self.overshoot_clamping {
            config = config.overshoot_clamping(clamp);
        }
        Ok(config)
    }
}

/// Resolves animation parameters for the currently configured descriptor.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    descriptor: Option<&'a AnimationDescriptor>,
    viewport: Viewport,
}

impl<'a> Resolver<'a> {
    pub fn new(descriptor: Option<&'a AnimationDescriptor>, viewport: Viewport) -> Self {
        Self {
            descriptor,
            viewport,
        }
    }

    /// Configured direction key, or `""` when none.
    pub fn current_direction_name(&self) -> &'static str {
        self.descriptor.map_or("", |d| d.direction.name())
    }

    /// Configured technique key, or `""` when none.
    pub fn current_technique(&self) -> &'static str {
        self.descriptor.map_or("", |d| d.technique.name())
    }

    /// Bounds for the configured direction.
    pub fn current_bounds(&self) -> Result<AnimationBounds, ConfigError> {
        self.descriptor
            .map(|d| d.direction.bounds(self.viewport))
            .ok_or(ConfigError::NoAnimation)
    }

    /// The configured direction's style channel bound to `value`.
    pub fn current_animated_style(&self, value: &AnimatedValue) -> Option<AnimatedStyle> {
        self.descriptor
            .map(|d| AnimatedStyle::new(d.direction.channel(), value.clone()))
    }
}
