//! Property-based invariant tests for the picker model.
//!
//! 1. The registry lists each id at most once, all from the allowlist.
//! 2. Single-letter coordinate names gain a `*` suffix.
//! 3. Slider step is `min((max - min) / 1000, 1)`.
//! 4. Hue flag is set iff the id is `h` and the coordinate is an angle.
//! 5. Missing or NaN coordinate input never changes the color.
//! 6. A single value writes exactly the addressed coordinate.
//! 7. Gradient output has one entry per coordinate plus alpha.
//! 8. Every coordinate gradient holds exactly `steps` color tokens.
//! 9. Degenerate ranges never produce `NaN`.
//! 10. The maximum contrast pick is never beaten by a candidate's signed Lc.

use prism_color::spaces::{HSL, LAB, OKLCH, SRGB};
use prism_color::{Color, ColorSpace, CoordDescriptor, CoordKind};
use prism_picker::registry::allowlisted;
use prism_picker::{
    ColorPicker, CoordMeta, GradientOptions, STEP_RESOLUTION, create_coord_meta, gradient_stops,
    list_color_spaces, maximum_contrast_combination,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn space_strategy() -> impl Strategy<Value = &'static ColorSpace> {
    prop::sample::select(vec![&HSL, &SRGB, &LAB, &OKLCH])
}

fn srgb_strategy() -> impl Strategy<Value = Color> {
    (0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64)
        .prop_map(|(r, g, b)| Color::in_space(&SRGB, [r, g, b], 1.0))
}

fn descriptor_strategy() -> impl Strategy<Value = CoordDescriptor> {
    (
        prop::sample::select(vec!["h", "l", "c", "a", "x"]),
        prop::option::of(prop::sample::select(vec!["a", "b", "L", "Hue", "Chroma"])),
        -500.0..500.0f64,
        0.0..2000.0f64,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(id, name, min, width, hard, angle)| {
            let range = [min, min + width];
            CoordDescriptor {
                id,
                name,
                range: hard.then_some(range),
                ref_range: (!hard).then_some(range),
                kind: if angle {
                    CoordKind::Angle
                } else {
                    CoordKind::Number
                },
            }
        })
}

fn token_count(stops: &str) -> usize {
    stops.split(", ").count()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Registry ids are unique and allowlisted
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn registry_ids_unique_and_allowlisted() {
    let items = list_color_spaces();
    assert!(!items.is_empty());
    for (i, item) in items.iter().enumerate() {
        assert!(allowlisted(item.id).is_some(), "{} not allowlisted", item.id);
        assert!(
            items[i + 1..].iter().all(|other| other.id != item.id),
            "{} listed twice",
            item.id
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2-4. Coordinate metadata
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn single_letter_names_get_star(descriptor in descriptor_strategy()) {
        let meta = create_coord_meta(descriptor.id, &descriptor);
        let label = descriptor.name.unwrap_or(descriptor.id);
        if label.chars().count() == 1 {
            prop_assert_eq!(meta.name.chars().count(), 2);
            prop_assert!(meta.name.ends_with('*'));
        } else {
            prop_assert_eq!(meta.name.as_str(), label);
        }
    }

    #[test]
    fn step_follows_resolution(descriptor in descriptor_strategy()) {
        let meta = create_coord_meta(descriptor.id, &descriptor);
        let expected = ((meta.max - meta.min) / STEP_RESOLUTION).min(1.0);
        prop_assert_eq!(meta.step, expected);
        prop_assert!(meta.step <= 1.0);
    }

    #[test]
    fn hue_flag_needs_id_and_angle(descriptor in descriptor_strategy()) {
        let meta = create_coord_meta(descriptor.id, &descriptor);
        prop_assert_eq!(
            meta.is_hue,
            descriptor.id == "h" && descriptor.kind == CoordKind::Angle
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5-6. Coordinate writes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn missing_or_nan_input_is_ignored(
        coords in prop::array::uniform3(-100.0..400.0f64),
        index in 0usize..4,
    ) {
        let picker = ColorPicker::new(Color::in_space(&HSL, coords, 1.0));
        prop_assert!(!picker.update_coord(index, None::<f64>));
        prop_assert!(!picker.update_coord(index, f64::NAN));
        prop_assert!(!picker.update_coord(index, vec![1.0, f64::NAN]));
        prop_assert_eq!(picker.coords(), coords);
        prop_assert_eq!(picker.version(), 0);
    }

    #[test]
    fn single_value_sets_only_its_index(
        coords in prop::array::uniform3(-100.0..400.0f64),
        index in 0usize..3,
        value in -1000.0..1000.0f64,
    ) {
        let picker = ColorPicker::new(Color::in_space(&OKLCH, coords, 1.0));
        picker.update_coord(index, vec![value]);
        let after = picker.coords();
        for (i, (&before, &now)) in coords.iter().zip(after.iter()).enumerate() {
            if i == index {
                prop_assert_eq!(now, value);
            } else {
                prop_assert_eq!(now, before);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7-9. Gradient stops
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn gradient_shape(
        space in space_strategy(),
        coords in prop::array::uniform3(0.0..100.0f64),
        alpha in 0.0..=1.0f64,
        steps in 1usize..16,
    ) {
        let picker = ColorPicker::new(Color::in_space(space, coords, alpha));
        let metas = picker.coords_meta();
        let stops = picker.gradient_stops(&GradientOptions { steps });
        prop_assert_eq!(stops.len(), metas.len() + 1);
        for entry in &stops {
            prop_assert_eq!(token_count(entry), steps, "entry {}", entry);
            prop_assert!(!entry.contains("NaN"), "entry {}", entry);
        }
    }

    #[test]
    fn degenerate_range_has_no_nan(
        space in space_strategy(),
        value in -10.0..10.0f64,
        steps in 1usize..12,
    ) {
        let metas: Vec<CoordMeta> = space
            .coords
            .iter()
            .map(|d| CoordMeta {
                min: value,
                max: value,
                step: 0.0,
                ..create_coord_meta(d.id, d)
            })
            .collect();
        let stops = gradient_stops(space, [value; 3], 1.0, &metas, &GradientOptions { steps });
        for entry in &stops[..metas.len()] {
            prop_assert!(!entry.contains("NaN"), "entry {}", entry);
            let tokens: Vec<&str> = entry.split(", ").collect();
            prop_assert!(tokens.windows(2).all(|w| w[0] == w[1]), "entry {}", entry);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 10. Maximum contrast
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn maximum_contrast_is_not_beaten(
        base in srgb_strategy(),
        candidates in prop::collection::vec(srgb_strategy(), 0..6),
    ) {
        let best = maximum_contrast_combination(&base, &candidates);
        let best_lc = base.contrast_apca(&best);
        prop_assert!(best == Color::black() || candidates.contains(&best));
        for candidate in &candidates {
            prop_assert!(base.contrast_apca(candidate) <= best_lc);
        }
        prop_assert!(base.contrast_apca(&Color::black()) <= best_lc);
    }
}
