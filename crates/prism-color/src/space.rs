//! Color space descriptors and the built-in space table.
//!
//! Every space is a `static` [`ColorSpace`] that knows how to reach its
//! `base` space, mostly through `palette` conversions. Following `base`
//! links from any space ends at `xyz-d65`, the connection space;
//! conversion walks those links (see [`crate::convert`]).

use std::fmt;

use palette::white_point;

use crate::error::ColorError;
use crate::spaces;

/// How a coordinate is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordKind {
    /// Plain number.
    Number,
    /// Angle in degrees (hue).
    Angle,
}

/// Raw per-coordinate descriptor, as declared by a space.
///
/// `range` is a hard gamut bound; `ref_range` is only a reference span for
/// UI and percentage parsing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordDescriptor {
    /// Short coordinate id (`"r"`, `"h"`, `"l"`, ...).
    pub id: &'static str,
    /// Human-readable name, if the space declares one.
    pub name: Option<&'static str>,
    /// Hard range; coordinates outside it are out of gamut.
    pub range: Option<[f64; 2]>,
    /// Reference range for spaces without hard bounds.
    pub ref_range: Option<[f64; 2]>,
    /// Number or angle.
    pub kind: CoordKind,
}

impl CoordDescriptor {
    pub(crate) const fn bounded(id: &'static str, name: &'static str, range: [f64; 2]) -> Self {
        Self {
            id,
            name: Some(name),
            range: Some(range),
            ref_range: None,
            kind: CoordKind::Number,
        }
    }

    pub(crate) const fn reference(
        id: &'static str,
        name: Option<&'static str>,
        ref_range: [f64; 2],
    ) -> Self {
        Self {
            id,
            name,
            range: None,
            ref_range: Some(ref_range),
            kind: CoordKind::Number,
        }
    }

    pub(crate) const fn hue() -> Self {
        Self {
            id: "h",
            name: Some("Hue"),
            range: None,
            ref_range: Some([0.0, 360.0]),
            kind: CoordKind::Angle,
        }
    }

    /// `range`, else `ref_range`.
    #[must_use]
    pub fn span(&self) -> Option<[f64; 2]> {
        self.range.or(self.ref_range)
    }

    /// True for angle coordinates.
    #[must_use]
    pub const fn is_angle(&self) -> bool {
        matches!(self.kind, CoordKind::Angle)
    }
}

/// Reference white of a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhitePoint {
    /// CIE standard illuminant D65.
    D65,
    /// CIE standard illuminant D50.
    D50,
}

impl WhitePoint {
    /// XYZ of the white point, normalized to `Y = 1`, as `palette` defines it.
    #[must_use]
    pub fn xyz(self) -> [f64; 3] {
        let white = match self {
            Self::D65 => <white_point::D65 as white_point::WhitePoint<f64>>::get_xyz(),
            Self::D50 => <white_point::D50 as white_point::WhitePoint<f64>>::get_xyz(),
        };
        [white.x, white.y, white.z]
    }
}

/// Gamut behavior of a space.
#[derive(Debug, Clone, Copy)]
pub enum Gamut {
    /// No hard limits (Lab, XYZ, ...): every color is in gamut.
    Unbounded,
    /// Limited by the `range` of its own coordinates.
    Bounded,
    /// Limited by another space's gamut (HSL is limited by sRGB).
    Delegate(&'static ColorSpace),
}

/// Per-coordinate token syntax inside a functional format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordSyntax {
    /// Number as stored.
    Number,
    /// Stored value is already in percent units; a `%` is appended.
    Percent,
    /// `[0, 1]` stored value scaled to `[0, 255]`.
    Byte,
}

/// Serialization format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// CSS functional notation such as `rgb(...)` or `oklch(...)`.
    Function {
        /// Function name written in the output.
        name: &'static str,
        /// Token syntax per coordinate.
        coords: [CoordSyntax; 3],
        /// Legacy comma syntax; alpha is always written.
        commas: bool,
    },
    /// `color(<id> c1 c2 c3)`.
    Color,
    /// `#rrggbb` / `#rrggbbaa`.
    Hex,
    /// Named color keyword.
    Keyword,
}

/// A named serialization format of a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    /// Format name used in options (`"rgb"`, `"hex"`, `"color"`, ...).
    pub name: &'static str,
    /// How the color is written.
    pub kind: FormatKind,
}

impl Format {
    pub(crate) const fn function(
        name: &'static str,
        coords: [CoordSyntax; 3],
        commas: bool,
    ) -> Self {
        Self {
            name,
            kind: FormatKind::Function {
                name,
                coords,
                commas,
            },
        }
    }

    pub(crate) const COLOR: Self = Self {
        name: "color",
        kind: FormatKind::Color,
    };

    pub(crate) const HEX: Self = Self {
        name: "hex",
        kind: FormatKind::Hex,
    };

    pub(crate) const KEYWORD: Self = Self {
        name: "keyword",
        kind: FormatKind::Keyword,
    };
}

/// Conversion function between a space and its base.
pub type ConvertFn = fn([f64; 3]) -> [f64; 3];

/// A color space definition.
pub struct ColorSpace {
    /// Stable identifier (`"srgb"`, `"oklch"`, ...).
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Coordinate descriptors, in order.
    pub coords: [CoordDescriptor; 3],
    /// Space this one is defined relative to; `None` for the connection space.
    pub base: Option<&'static ColorSpace>,
    pub(crate) to_base: ConvertFn,
    pub(crate) from_base: ConvertFn,
    /// Reference white.
    pub white: WhitePoint,
    /// Gamut behavior.
    pub gamut: Gamut,
    /// Available formats; the first one is the default.
    pub formats: &'static [Format],
    /// Identifier used inside `color()`; dashed ids are not CSS-native.
    pub css_id: &'static str,
    /// Whether a CSS consumer understands the default format.
    pub css_native: bool,
}

impl ColorSpace {
    /// Look up a built-in space by id.
    pub fn get(id: &str) -> Result<&'static ColorSpace, ColorError> {
        spaces::ALL
            .iter()
            .copied()
            .find(|space| space.id == id)
            .ok_or_else(|| ColorError::UnknownSpace { id: id.to_string() })
    }

    /// Look up a space by the identifier used inside `color()`.
    #[must_use]
    pub fn by_css_id(css_id: &str) -> Option<&'static ColorSpace> {
        spaces::ALL
            .iter()
            .copied()
            .find(|space| space.css_id == css_id || space.id == css_id)
    }

    /// All built-in spaces, in table order.
    #[must_use]
    pub fn all() -> &'static [&'static ColorSpace] {
        spaces::ALL
    }

    /// Index of the hue coordinate, if the space is polar.
    #[must_use]
    pub fn hue_index(&self) -> Option<usize> {
        self.coords.iter().position(CoordDescriptor::is_angle)
    }

    /// Find a format by name.
    #[must_use]
    pub fn format(&self, name: &str) -> Option<&'static Format> {
        self.formats.iter().find(|f| f.name == name)
    }

    /// Default (first) format.
    #[must_use]
    pub fn default_format(&self) -> &'static Format {
        // Every table entry carries at least the `color` format.
        self.formats.first().unwrap_or(&Format::COLOR)
    }

    /// Names of all formats, in declaration order.
    pub fn format_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formats.iter().map(|f| f.name)
    }

    /// The space whose coordinate ranges define this space's gamut, if any.
    #[must_use]
    pub fn gamut_space(&'static self) -> Option<&'static ColorSpace> {
        match self.gamut {
            Gamut::Unbounded => None,
            Gamut::Bounded => Some(self),
            Gamut::Delegate(space) => space.gamut_space(),
        }
    }

    /// Chain from this space up to the connection space, inclusive.
    pub(crate) fn path(&'static self) -> Vec<&'static ColorSpace> {
        let mut path = vec![self];
        let mut current = self;
        while let Some(base) = current.base {
            path.push(base);
            current = base;
        }
        path
    }
}

impl PartialEq for ColorSpace {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ColorSpace {}

impl fmt::Debug for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSpace")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("base", &self.base.map(|b| b.id))
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_and_unknown() {
        assert_eq!(ColorSpace::get("srgb").map(|s| s.name), Ok("sRGB"));
        assert_eq!(
            ColorSpace::get("cmyk"),
            Err(ColorError::UnknownSpace { id: "cmyk".into() })
        );
    }

    #[test]
    fn ids_are_unique() {
        let all = ColorSpace::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_path_ends_at_xyz_d65() {
        for space in ColorSpace::all() {
            let path = space.path();
            assert_eq!(path.last().map(|s| s.id), Some("xyz-d65"), "{}", space.id);
        }
    }

    #[test]
    fn every_space_has_a_color_format() {
        for space in ColorSpace::all() {
            assert!(space.format("color").is_some(), "{}", space.id);
        }
    }

    #[test]
    fn hue_index_for_polar_spaces() {
        assert_eq!(ColorSpace::get("hsl").map(|s| s.hue_index()), Ok(Some(0)));
        assert_eq!(ColorSpace::get("oklch").map(|s| s.hue_index()), Ok(Some(2)));
        assert_eq!(ColorSpace::get("srgb").map(|s| s.hue_index()), Ok(None));
    }

    #[test]
    fn gamut_space_resolves_delegates() {
        let hsl = ColorSpace::get("hsl").map(|s| s.gamut_space().map(|g| g.id));
        assert_eq!(hsl, Ok(Some("srgb")));
        let lab = ColorSpace::get("lab").map(|s| s.gamut_space().map(|g| g.id));
        assert_eq!(lab, Ok(None));
    }

    #[test]
    fn white_points_normalized() {
        let d65 = WhitePoint::D65.xyz();
        assert_eq!(d65[1], 1.0);
        assert!((d65[0] - 0.950_47).abs() < 1e-4);
        let d50 = WhitePoint::D50.xyz();
        assert!((d50[2] - 0.825_21).abs() < 1e-4);
    }
}
