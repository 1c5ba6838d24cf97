//! Range clamping for numeric text inputs.
//!
//! Inputs keep their value and bounds as strings. Clamping parses all three;
//! an unparsable value is left alone and an unparsable bound is ignored.
//! Whenever a clamp changes the value the input records one synthetic
//! `input` event so listeners can resynchronize.

/// Clamp `value` to `[min, max]`.
///
/// Returns `Some(clamped)` only when clamping changed the value.
#[must_use]
pub fn clamp_to_range(value: &str, min: &str, max: &str) -> Option<f64> {
    let value = parse(value)?;
    let mut clamped = value;
    if let Some(min) = parse(min) {
        clamped = clamped.max(min);
    }
    if let Some(max) = parse(max) {
        clamped = clamped.min(max);
    }
    (clamped != value).then_some(clamped)
}

fn parse(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// A numeric input whose value is kept within its `min`/`max` attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeInput {
    value: String,
    min: String,
    max: String,
    dispatched: usize,
}

impl RangeInput {
    /// Create an input and apply the initial clamp.
    #[must_use]
    pub fn new(value: impl Into<String>, min: impl Into<String>, max: impl Into<String>) -> Self {
        let mut input = Self {
            value: value.into(),
            min: min.into(),
            max: max.into(),
            dispatched: 0,
        };
        input.reclamp();
        input
    }

    /// Current value attribute.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Current `min` attribute.
    #[must_use]
    pub fn min(&self) -> &str {
        &self.min
    }

    /// Current `max` attribute.
    #[must_use]
    pub fn max(&self) -> &str {
        &self.max
    }

    /// Parsed value, if numeric.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        parse(&self.value)
    }

    /// Set the value as typed by the user, then clamp.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.reclamp();
    }

    /// Change the lower bound, then clamp.
    pub fn set_min(&mut self, min: impl Into<String>) {
        self.min = min.into();
        self.reclamp();
    }

    /// Change the upper bound, then clamp.
    pub fn set_max(&mut self, max: impl Into<String>) {
        self.max = max.into();
        self.reclamp();
    }

    /// Number of synthetic input events dispatched so far.
    #[must_use]
    pub const fn dispatched_events(&self) -> usize {
        self.dispatched
    }

    fn reclamp(&mut self) {
        if let Some(clamped) = clamp_to_range(&self.value, &self.min, &self.max) {
            tracing::trace!(from = %self.value, to = clamped, "clamped range input");
            self.value = clamped.to_string();
            self.dispatched += 1;
        }
    }
}
