//! Picker configuration and the per-picker config store.
//!
//! Environment overrides:
//!
//! | Variable                 | Field       | Values                  |
//! |--------------------------|-------------|-------------------------|
//! | `PRISM_PICKER_LAYOUT`    | `layout`    | `standard`, `compact`   |
//! | `PRISM_PICKER_PRECISION` | `precision` | unsigned integer        |
//! | `PRISM_PICKER_IN_GAMUT`  | `in_gamut`  | `1`/`true`, `0`/`false` |
//! | `PRISM_PICKER_FORMAT`    | `format`    | format name             |
//!
//! Unparsable values are logged and ignored.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::str::FromStr;

use prism_color::{DEFAULT_PRECISION, SerializeOptions};

use crate::reactive::Observable;

/// Picker layout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Layout {
    /// Full picker with every slider.
    #[default]
    Standard,
    /// Condensed picker.
    Compact,
}

impl Layout {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Compact => "compact",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown layout {other:?}")),
        }
    }
}

/// Settings shared by the parts of one picker.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PickerConfig {
    /// Layout variant.
    pub layout: Layout,
    /// Significant digits in serialized output.
    pub precision: usize,
    /// Map colors into gamut before display.
    pub in_gamut: bool,
    /// Display format; `None` lets the display pick.
    pub format: Option<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Standard,
            precision: DEFAULT_PRECISION,
            in_gamut: false,
            format: None,
        }
    }
}

impl PickerConfig {
    /// Defaults with `PRISM_PICKER_*` overrides applied.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from `lookup` (an environment-like source).
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(val) = lookup("PRISM_PICKER_LAYOUT") {
            match val.parse() {
                Ok(layout) => self.layout = layout,
                Err(err) => tracing::warn!(%err, "ignoring PRISM_PICKER_LAYOUT"),
            }
        }
        if let Some(val) = lookup("PRISM_PICKER_PRECISION") {
            match val.trim().parse() {
                Ok(n) => self.precision = n,
                Err(_) => tracing::warn!(value = %val, "ignoring PRISM_PICKER_PRECISION"),
            }
        }
        if let Some(val) = lookup("PRISM_PICKER_IN_GAMUT") {
            match parse_flag(&val) {
                Some(flag) => self.in_gamut = flag,
                None => tracing::warn!(value = %val, "ignoring PRISM_PICKER_IN_GAMUT"),
            }
        }
        if let Some(val) = lookup("PRISM_PICKER_FORMAT") {
            let val = val.trim();
            self.format = (!val.is_empty()).then(|| val.to_string());
        }
        self
    }

    /// Serialization options carried by this config.
    #[must_use]
    pub fn serialize_options(&self) -> SerializeOptions {
        SerializeOptions {
            format: self.format.clone(),
            precision: self.precision,
            in_gamut: self.in_gamut,
        }
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Per-picker configuration cells, keyed by picker id.
#[derive(Debug, Default)]
pub struct ConfigStore {
    configs: RefCell<HashMap<String, Observable<PickerConfig>>>,
    next_id: Cell<u64>,
}

impl ConfigStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared config for picker `id`, created with defaults on first use.
    ///
    /// Without an id a fresh unique one is generated. Returns the id with
    /// the config cell.
    pub fn picker(&self, id: Option<&str>) -> (String, Observable<PickerConfig>) {
        let id = id.map_or_else(|| self.generate_id(), str::to_string);
        let config = self
            .configs
            .borrow_mut()
            .entry(id.clone())
            .or_insert_with(|| Observable::new(PickerConfig::default()))
            .clone();
        (id, config)
    }

    /// Number of pickers with a config.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.borrow().len()
    }

    /// True when no picker has a config yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.borrow().is_empty()
    }

    fn generate_id(&self) -> String {
        loop {
            let n = self.next_id.get();
            self.next_id.set(n + 1);
            let id = format!("prism-picker-{n}");
            if !self.configs.borrow().contains_key(&id) {
                return id;
            }
        }
    }
}
