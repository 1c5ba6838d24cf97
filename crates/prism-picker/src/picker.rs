//! Picker state: the color being edited and the operations a UI binds to.

use prism_color::{Color, ColorSpace};

use crate::contrast;
use crate::coords::{self, CoordMeta};
use crate::error::PickerError;
use crate::gradient::{self, GradientOptions};
use crate::reactive::{Memo, Observable, Subscription};

/// Value delivered by a coordinate input.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CoordInput {
    /// No value (an input that was cleared).
    #[default]
    Missing,
    /// One value for the addressed coordinate.
    Value(f64),
    /// Consecutive values starting at the addressed coordinate.
    Values(Vec<f64>),
}

impl CoordInput {
    fn values(&self) -> &[f64] {
        match self {
            Self::Missing => &[],
            Self::Value(v) => std::slice::from_ref(v),
            Self::Values(vs) => vs,
        }
    }
}

impl From<f64> for CoordInput {
    fn from(v: f64) -> Self {
        Self::Value(v)
    }
}

impl From<Option<f64>> for CoordInput {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Self::Missing, Self::Value)
    }
}

impl From<Vec<f64>> for CoordInput {
    fn from(vs: Vec<f64>) -> Self {
        Self::Values(vs)
    }
}

impl From<&[f64]> for CoordInput {
    fn from(vs: &[f64]) -> Self {
        Self::Values(vs.to_vec())
    }
}

/// State of one color picker.
///
/// Clones share the same color.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    color: Observable<Color>,
    meta: std::rc::Rc<Memo<&'static str, Vec<CoordMeta>>>,
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new(Color::black())
    }
}

impl ColorPicker {
    /// Create a picker editing `color`.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self::bind(Observable::new(color))
    }

    /// Create a picker over an existing shared color.
    #[must_use]
    pub fn bind(color: Observable<Color>) -> Self {
        Self {
            color,
            meta: std::rc::Rc::new(Memo::new()),
        }
    }

    /// The shared color cell.
    #[must_use]
    pub fn observable(&self) -> &Observable<Color> {
        &self.color
    }

    /// Current color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color.get()
    }

    /// Replace the color.
    pub fn set_color(&self, color: Color) {
        self.color.set(color);
    }

    /// Current coordinates.
    #[must_use]
    pub fn coords(&self) -> [f64; 3] {
        self.color.with(|c| c.coords)
    }

    /// Current alpha.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.color.with(|c| c.alpha)
    }

    /// Active space.
    #[must_use]
    pub fn space(&self) -> &'static ColorSpace {
        self.color.with(Color::space)
    }

    /// Id of the active space.
    #[must_use]
    pub fn space_id(&self) -> &'static str {
        self.space().id
    }

    /// Slider metadata for the active space, recomputed only when it changes.
    #[must_use]
    pub fn coords_meta(&self) -> Vec<CoordMeta> {
        let space = self.space();
        self.meta
            .get_or_compute(&space.id, |_| coords::coords_meta(space))
    }

    /// Number of times coordinate metadata was computed.
    #[must_use]
    pub fn coords_meta_computations(&self) -> u64 {
        self.meta.computations()
    }

    /// Switch the active space, converting the color.
    ///
    /// Selecting the current space does nothing; an unknown id is an error
    /// and leaves the color untouched.
    pub fn set_space_id(&self, id: &str) -> Result<(), PickerError> {
        if id == self.space_id() {
            return Ok(());
        }
        let space = ColorSpace::get(id).inspect_err(|err| {
            tracing::warn!(id, error = %err, "rejected color space change");
        })?;
        let converted = self.color().to_space(space);
        tracing::debug!(from = self.space_id(), to = space.id, "color space changed");
        self.color.set(converted);
        Ok(())
    }

    /// Write `input` into the coordinates starting at `index`.
    ///
    /// Missing or empty input, any `NaN` value and an out-of-range index are
    /// ignored; values past the last coordinate are dropped. Returns whether
    /// the color changed.
    pub fn update_coord(&self, index: usize, input: impl Into<CoordInput>) -> bool {
        let input = input.into();
        let values = input.values();
        if values.is_empty() || index >= 3 {
            return false;
        }
        if values.iter().any(|v| v.is_nan()) {
            tracing::debug!(index, "ignored NaN coordinate input");
            return false;
        }
        self.color.update(|color| {
            for (slot, &value) in color.coords[index..].iter_mut().zip(values) {
                *slot = value;
            }
        })
    }

    /// Set alpha, clamped to `[0, 1]`; `NaN` is ignored.
    pub fn set_alpha(&self, alpha: f64) -> bool {
        if alpha.is_nan() {
            return false;
        }
        self.color.update(|color| color.alpha = alpha.clamp(0.0, 1.0))
    }

    /// Gradient stops for every slider.
    #[must_use]
    pub fn gradient_stops(&self, options: &GradientOptions) -> Vec<String> {
        let color = self.color();
        gradient::gradient_stops(
            color.space(),
            color.coords,
            color.alpha,
            &self.coords_meta(),
            options,
        )
    }

    /// Black or white, whichever reads best on the current color.
    #[must_use]
    pub fn contrast_color(&self) -> Color {
        contrast::contrast_color(&self.color())
    }

    /// Call `callback` after every color change.
    pub fn subscribe(&self, callback: impl Fn(&Color) + 'static) -> Subscription {
        self.color.subscribe(callback)
    }

    /// Number of color changes so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.color.version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_color::spaces::{HSL, SRGB};

    fn picker(coords: [f64; 3]) -> ColorPicker {
        ColorPicker::new(Color::in_space(&HSL, coords, 1.0))
    }

    // --- update_coord ---

    #[test]
    fn single_value_sets_one_coordinate() {
        let p = picker([0.0, 1.0, 0.5]);
        assert!(p.update_coord(1, 40.0));
        assert_eq!(p.coords(), [0.0, 40.0, 0.5]);
    }

    #[test]
    fn sequence_writes_from_index_and_truncates() {
        let p = picker([0.0, 1.0, 0.5]);
        assert!(p.update_coord(1, vec![10.0, 20.0, 30.0]));
        assert_eq!(p.coords(), [0.0, 10.0, 20.0]);
        assert!(p.update_coord(0, vec![5.0]));
        assert_eq!(p.coords(), [5.0, 10.0, 20.0]);
    }

    #[test]
    fn invalid_input_is_ignored() {
        let p = picker([0.0, 1.0, 0.5]);
        let v0 = p.version();
        assert!(!p.update_coord(0, CoordInput::Missing));
        assert!(!p.update_coord(0, None::<f64>));
        assert!(!p.update_coord(0, Vec::<f64>::new()));
        assert!(!p.update_coord(0, f64::NAN));
        assert!(!p.update_coord(0, vec![1.0, f64::NAN]));
        assert!(!p.update_coord(3, 1.0));
        assert_eq!(p.coords(), [0.0, 1.0, 0.5]);
        assert_eq!(p.version(), v0);
    }

    #[test]
    fn coordinate_values_are_not_clamped() {
        let p = picker([0.0, 1.0, 0.5]);
        p.update_coord(2, 250.0);
        assert_eq!(p.coords()[2], 250.0);
    }

    // --- space ---

    #[test]
    fn same_space_is_a_no_op() {
        let p = picker([0.0, 1.0, 0.5]);
        let before = p.coords();
        let v0 = p.version();
        assert_eq!(p.set_space_id("hsl"), Ok(()));
        assert_eq!(p.coords(), before);
        assert_eq!(p.version(), v0);
    }

    #[test]
    fn switching_space_converts() {
        let p = ColorPicker::new(Color::in_space(&HSL, [0.0, 100.0, 50.0], 1.0));
        assert!(p.set_space_id("srgb").is_ok());
        assert_eq!(p.space_id(), "srgb");
        let [r, g, b] = p.coords();
        assert!((r - 1.0).abs() < 1e-9 && g.abs() < 1e-9 && b.abs() < 1e-9);
    }

    #[test]
    fn unknown_space_is_rejected() {
        let p = picker([0.0, 1.0, 0.5]);
        assert!(p.set_space_id("cmyk").is_err());
        assert_eq!(p.space_id(), "hsl");
    }

    #[test]
    fn coords_meta_memoized_per_space() {
        let p = picker([0.0, 1.0, 0.5]);
        let first = p.coords_meta();
        let _ = p.coords_meta();
        p.update_coord(0, 30.0);
        let _ = p.coords_meta();
        assert_eq!(p.coords_meta_computations(), 1);
        assert_eq!(first[0].name, "Hue");
        assert!(p.set_space_id("srgb").is_ok());
        assert_eq!(p.coords_meta()[0].name, "Red");
        assert_eq!(p.coords_meta_computations(), 2);
    }

    // --- alpha ---

    #[test]
    fn alpha_clamps_and_ignores_nan() {
        let p = ColorPicker::new(Color::in_space(&SRGB, [0.0; 3], 1.0));
        p.set_alpha(1.5);
        assert_eq!(p.alpha(), 1.0);
        p.set_alpha(-0.5);
        assert_eq!(p.alpha(), 0.0);
        assert!(!p.set_alpha(f64::NAN));
        assert_eq!(p.alpha(), 0.0);
    }

    #[test]
    fn subscribers_see_changes() {
        let p = picker([0.0, 1.0, 0.5]);
        let seen = std::rc::Rc::new(std::cell::Cell::new(0.0));
        let sink = std::rc::Rc::clone(&seen);
        let _sub = p.subscribe(move |c| sink.set(c.coords[0]));
        p.update_coord(0, 90.0);
        assert_eq!(seen.get(), 90.0);
    }
}
