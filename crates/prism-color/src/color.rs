//! The [`Color`] value: a space, three coordinates and an alpha channel.

use std::fmt;
use std::str::FromStr;

use crate::contrast;
use crate::convert::convert;
use crate::error::ColorError;
use crate::gamut;
use crate::interpolate::{self, StepsOptions};
use crate::parse;
use crate::serialize::{self, SerializeOptions};
use crate::space::ColorSpace;
use crate::spaces::{OKLCH, SRGB, XYZ_D65};

/// A color in a specific space.
///
/// Coordinates are public so a single channel can be edited in place;
/// the space is fixed for the lifetime of the value, use [`Color::to`] to
/// get the same color in another space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    space: &'static ColorSpace,
    /// Coordinates in the order declared by the space.
    pub coords: [f64; 3],
    /// Alpha in `[0, 1]`.
    pub alpha: f64,
}

impl Color {
    /// Create a color in the space with the given id.
    pub fn new(space_id: &str, coords: [f64; 3], alpha: f64) -> Result<Self, ColorError> {
        Ok(Self::in_space(ColorSpace::get(space_id)?, coords, alpha))
    }

    /// Create a color in a known space.
    #[must_use]
    pub const fn in_space(space: &'static ColorSpace, coords: [f64; 3], alpha: f64) -> Self {
        Self {
            space,
            coords,
            alpha,
        }
    }

    /// Opaque sRGB black.
    #[must_use]
    pub const fn black() -> Self {
        Self::in_space(&SRGB, [0.0, 0.0, 0.0], 1.0)
    }

    /// Opaque sRGB white.
    #[must_use]
    pub const fn white() -> Self {
        Self::in_space(&SRGB, [1.0, 1.0, 1.0], 1.0)
    }

    /// Parse a CSS color string.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        parse::parse(input)
    }

    /// The space of this color.
    #[must_use]
    pub const fn space(&self) -> &'static ColorSpace {
        self.space
    }

    /// Id of the space of this color.
    #[must_use]
    pub const fn space_id(&self) -> &'static str {
        self.space.id
    }

    /// Convert to the space with the given id.
    pub fn to(&self, space_id: &str) -> Result<Self, ColorError> {
        Ok(self.to_space(ColorSpace::get(space_id)?))
    }

    /// Convert to a known space.
    #[must_use]
    pub fn to_space(&self, space: &'static ColorSpace) -> Self {
        Self {
            space,
            coords: convert(self.space, space, self.coords),
            alpha: self.alpha,
        }
    }

    /// Whether the color fits its own space's gamut.
    #[must_use]
    pub fn in_gamut(&self) -> bool {
        gamut::in_gamut(self, self.space)
    }

    /// Whether the color fits the gamut of `space`.
    #[must_use]
    pub fn in_gamut_of(&self, space: &'static ColorSpace) -> bool {
        gamut::in_gamut(self, space)
    }

    /// Map the color into the gamut of `space` (its own when `None`),
    /// returning it in its original space.
    #[must_use]
    pub fn to_gamut(&self, space: Option<&'static ColorSpace>) -> Self {
        gamut::to_gamut(self, space.unwrap_or(self.space))
    }

    /// Serialize with explicit options.
    #[must_use]
    pub fn serialize(&self, options: &SerializeOptions) -> String {
        serialize::serialize(self, options)
    }

    /// Serialize for a CSS consumer.
    ///
    /// Spaces without CSS syntax are converted to OKLCh first.
    #[must_use]
    pub fn display(&self) -> String {
        self.display_with(&SerializeOptions::default())
    }

    /// [`display`](Self::display) with explicit options.
    #[must_use]
    pub fn display_with(&self, options: &SerializeOptions) -> String {
        if self.space.css_native {
            self.serialize(options)
        } else {
            let fallback = SerializeOptions {
                format: None,
                ..options.clone()
            };
            self.to_space(&OKLCH).serialize(&fallback)
        }
    }

    /// Relative luminance (CIE Y, D65).
    #[must_use]
    pub fn luminance(&self) -> f64 {
        convert(self.space, &XYZ_D65, self.coords)[1]
    }

    /// APCA lightness contrast of `foreground` text on this color as background.
    ///
    /// Signed: positive for dark text on a light background, negative for
    /// light text on a dark background.
    #[must_use]
    pub fn contrast_apca(&self, foreground: &Color) -> f64 {
        contrast::apca(self, foreground)
    }

    /// WCAG 2.1 contrast ratio (`1..=21`).
    #[must_use]
    pub fn contrast_wcag21(&self, other: &Color) -> f64 {
        contrast::wcag21(self, other)
    }

    /// Evenly spaced colors between `self` and `other`.
    #[must_use]
    pub fn steps(&self, other: &Color, options: &StepsOptions) -> Vec<Color> {
        interpolate::steps(self, other, options)
    }

    /// Interpolate a single color at progress `p`.
    #[must_use]
    pub fn mix(&self, other: &Color, p: f64, options: &StepsOptions) -> Color {
        interpolate::mix(self, other, p, options)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize(&SerializeOptions::default()))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
