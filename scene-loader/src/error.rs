//! Error types.
//!
//! Configuration mistakes are programmer errors: they surface from
//! construction and parsing and are never downgraded to a fallback render.

use thiserror::Error;

use crate::descriptor::Direction;

/// Errors raised while building or resolving an animation descriptor.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The declarative descriptor has no direction key.
    #[error("Animation descriptor is empty, expected one of: {}", known_directions())]
    Empty,

    /// More than one direction key was supplied.
    #[error("Only one animation could be defined at a time, got: {}", .names.join(", "))]
    MultipleAnimations {
        /// The keys that were present.
        names: Vec<String>,
    },

    /// The direction key is not a known one.
    #[error("Unknown animation {name}, known are: {}", known_directions())]
    UnknownAnimation {
        /// The offending key.
        name: String,
    },

    /// Bounds were requested while no direction is configured.
    #[error("No animation is set")]
    NoAnimation,

    /// The direction entry names no technique.
    #[error("Animation '{direction}' does not name a technique (timing or spring)")]
    MissingTechnique {
        /// Direction key the technique was expected under.
        direction: String,
    },

    /// The direction entry names more than one technique.
    #[error("Animation '{direction}' names more than one technique: {}", .names.join(", "))]
    MultipleTechniques {
        /// Direction key the techniques were found under.
        direction: String,
        /// The technique keys that were present.
        names: Vec<String>,
    },

    /// The technique key is not a known one.
    #[error("Unknown animation technique {name}, known are: timing, spring")]
    UnknownTechnique {
        /// The offending key.
        name: String,
    },

    /// Technique parameters failed validation.
    #[error("Invalid {technique} parameters: {message}")]
    InvalidParameter {
        /// Technique the parameters belong to.
        technique: &'static str,
        /// What was wrong.
        message: String,
    },

    /// The declarative input was not valid JSON of the expected shape.
    #[error("Malformed animation descriptor: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a new parameter validation error.
    pub fn invalid(technique: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            technique,
            message: message.into(),
        }
    }
}

fn known_directions() -> String {
    Direction::ALL
        .iter()
        .map(|d| d.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A color string that could not be parsed.
#[derive(Debug, Clone, Error)]
#[error("Invalid color '{input}'")]
pub struct ColorParseError {
    input: String,
}

impl ColorParseError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
