//! Slider metadata for color coordinates.

use prism_color::{ColorSpace, CoordDescriptor, CoordKind};

/// Slider resolution: a full range spans this many steps.
pub const STEP_RESOLUTION: f64 = 1000.0;

/// Range used when a descriptor declares none.
pub const DEFAULT_RANGE: [f64; 2] = [0.0, 100.0];

/// UI-ready metadata for one coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordMeta {
    /// Coordinate id (`"l"`, `"c"`, `"h"`, ...).
    pub id: String,
    /// Label; single letters get a `*` suffix (`"a"` becomes `"a*"`).
    pub name: String,
    /// True for a hue angle.
    pub is_hue: bool,
    /// Slider minimum.
    pub min: f64,
    /// Slider maximum.
    pub max: f64,
    /// Slider step, at most 1.
    pub step: f64,
}

/// Derive slider metadata from a raw coordinate descriptor.
#[must_use]
pub fn create_coord_meta(id: &str, descriptor: &CoordDescriptor) -> CoordMeta {
    let mut name = descriptor.name.unwrap_or(id).to_string();
    if name.chars().count() == 1 {
        name.push('*');
    }
    let [min, max] = descriptor
        .range
        .or(descriptor.ref_range)
        .unwrap_or(DEFAULT_RANGE);
    let step = ((max - min) / STEP_RESOLUTION).min(1.0);
    let is_hue = id == "h" && descriptor.kind == CoordKind::Angle;
    CoordMeta {
        id: id.to_string(),
        name,
        is_hue,
        min,
        max,
        step,
    }
}

/// Metadata for every coordinate of `space`, in declared order.
#[must_use]
pub fn coords_meta(space: &ColorSpace) -> Vec<CoordMeta> {
    space
        .coords
        .iter()
        .map(|descriptor| create_coord_meta(descriptor.id, descriptor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(
        name: Option<&'static str>,
        range: Option<[f64; 2]>,
        ref_range: Option<[f64; 2]>,
        kind: CoordKind,
    ) -> CoordDescriptor {
        CoordDescriptor {
            id: "x",
            name,
            range,
            ref_range,
            kind,
        }
    }

    #[test]
    fn hue_descriptor() {
        let d = descriptor(Some("Hue"), None, Some([0.0, 360.0]), CoordKind::Angle);
        let meta = create_coord_meta("h", &d);
        assert_eq!(meta.name, "Hue");
        assert!(meta.is_hue);
        assert_eq!((meta.min, meta.max), (0.0, 360.0));
        assert!((meta.step - 0.36).abs() < 1e-12);
    }

    #[test]
    fn single_letter_names_get_a_star() {
        let d = descriptor(Some("L"), Some([0.0, 1.0]), None, CoordKind::Number);
        let meta = create_coord_meta("l", &d);
        assert_eq!(meta.name, "L*");
        assert!(!meta.is_hue);
        assert!((meta.step - 0.001).abs() < 1e-15);
    }

    #[test]
    fn missing_name_falls_back_to_id() {
        let d = descriptor(None, None, Some([-125.0, 125.0]), CoordKind::Number);
        assert_eq!(create_coord_meta("a", &d).name, "a*");
        assert_eq!(create_coord_meta("ab", &d).name, "ab");
    }

    #[test]
    fn missing_ranges_default() {
        let d = descriptor(Some("Chroma"), None, None, CoordKind::Number);
        let meta = create_coord_meta("c", &d);
        assert_eq!((meta.min, meta.max), (0.0, 100.0));
        assert!((meta.step - 0.1).abs() < 1e-12);
    }

    #[test]
    fn step_is_capped_at_one() {
        let d = descriptor(Some("Big"), Some([0.0, 10_000.0]), None, CoordKind::Number);
        assert_eq!(create_coord_meta("big", &d).step, 1.0);
    }

    #[test]
    fn range_wins_over_ref_range() {
        let d = descriptor(Some("S"), Some([0.0, 1.0]), Some([0.0, 50.0]), CoordKind::Number);
        assert_eq!(create_coord_meta("s", &d).max, 1.0);
    }

    #[test]
    fn h_without_angle_is_not_hue() {
        let d = descriptor(Some("H"), Some([0.0, 1.0]), None, CoordKind::Number);
        assert!(!create_coord_meta("h", &d).is_hue);
    }

    #[test]
    fn oklch_metadata() {
        let Ok(space) = ColorSpace::get("oklch") else {
            panic!("oklch missing");
        };
        let metas = coords_meta(space);
        let ids: Vec<_> = metas.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["l", "c", "h"]);
        assert!(metas[2].is_hue);
        assert!(!metas[0].is_hue);
    }
}
