use std::str::FromStr;

use crate::error::ColorParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Composite `top` over `self` with the given coverage (0.0 to 1.0).
    pub fn blend(self, top: Rgb, alpha: f32) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |under: u8, over: u8| {
            let under = under as f32;
            let over = over as f32;
            (under + (over - under) * alpha).round() as u8
        };
        Rgb::new(mix(self.r, top.r), mix(self.g, top.g), mix(self.b, top.b))
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub fn oklcha(l: f32, c: f32, h: f32, a: f32) -> Self {
        Self::Oklch { l, c, h, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::Rgba { r, g, b, a }
    }

    /// Opacity of this color (1.0 = opaque).
    pub fn alpha(&self) -> f32 {
        match self {
            Self::Oklch { a, .. } | Self::Rgba { a, .. } => a.clamp(0.0, 1.0),
            Self::Rgb { .. } => 1.0,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        match self {
            Self::Oklch { l, c, h, .. } => Self::Oklch { l, c, h, a: alpha },
            Self::Rgb { r, g, b } | Self::Rgba { r, g, b, .. } => Self::Rgba { r, g, b, a: alpha },
        }
    }

    pub fn to_dsl(&self) -> String {
        match self {
            Self::Oklch { l, c, h, a } => {
                if *a >= 1.0 {
                    format!("oklch({l}, {c}, {h})")
                } else {
                    format!("oklch({l}, {c}, {h}, {a})")
                }
            }
            Self::Rgb { r, g, b } => format!("rgb({r}, {g}, {b})"),
            Self::Rgba { r, g, b, a } => format!("rgba({r}, {g}, {b}, {a})"),
        }
    }

    /// Opaque RGB components, ignoring alpha.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } | Self::Rgba { r, g, b, .. } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h, .. } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::new(s));
        }

        let (name, args) = s
            .strip_suffix(')')
            .and_then(|rest| rest.split_once('('))
            .ok_or_else(|| ColorParseError::new(s))?;

        let args: Vec<&str> = args.split(',').map(str::trim).collect();
        let float = |i: usize| -> Result<f32, ColorParseError> {
            args[i].parse::<f32>().map_err(|_| ColorParseError::new(s))
        };
        let channel = |i: usize| -> Result<u8, ColorParseError> {
            args[i].parse::<u8>().map_err(|_| ColorParseError::new(s))
        };

        match (name.trim(), args.len()) {
            ("rgb", 3) => Ok(Color::rgb(channel(0)?, channel(1)?, channel(2)?)),
            ("rgba", 4) => Ok(Color::rgba(channel(0)?, channel(1)?, channel(2)?, float(3)?)),
            ("oklch", 3) => Ok(Color::oklch(float(0)?, float(1)?, float(2)?)),
            ("oklch", 4) => Ok(Color::oklcha(float(0)?, float(1)?, float(2)?, float(3)?)),
            _ => Err(ColorParseError::new(s)),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?))
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
