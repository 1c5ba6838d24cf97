//! Color space registry.
//!
//! The registry lists the spaces a picker offers: every space the catalog
//! knows about whose id is on the [`COLOR_SPACES`] allowlist, in catalog
//! order, with the allowlist's display name. The list is computed once per
//! registry and cached behind a [`OnceLock`].
//!
//! | Scenario                   | Result                          |
//! |----------------------------|---------------------------------|
//! | Catalog lists a foreign id | Skipped                         |
//! | Catalog lists an id twice  | First occurrence kept           |
//! | Catalog enumeration fails  | `error!` logged, empty list     |

use std::sync::OnceLock;

use prism_color::ColorSpace;

use crate::error::{CatalogError, PickerError};

/// Allowlisted space ids and their display names.
///
/// The list is the full picker catalog. Eleven ids (`acescc`, `acescg`,
/// `cam16-jmh`, `hct`, `hpluv`, `hsluv`, `ictcp`, `jzczhz`, `jzazbz`,
/// `rec2100hlg`, `rec2100pq`) have no built-in engine space; they are only
/// offered when a custom [`SpaceCatalog`] lists them.
pub const COLOR_SPACES: [(&str, &str); 34] = [
    ("a98rgb", "Adobe® 98 RGB compatible"),
    ("a98rgb-linear", "Linear Adobe® 98 RGB compatible"),
    ("acescc", "ACEScc"),
    ("acescg", "ACEScg"),
    ("cam16-jmh", "CAM16-JMh"),
    ("hct", "HCT"),
    ("hpluv", "HPLuv"),
    ("hsl", "HSL"),
    ("hsluv", "HSLuv"),
    ("hsv", "HSV"),
    ("hwb", "HWB"),
    ("ictcp", "ICTCP"),
    ("jzczhz", "JzCzHz"),
    ("jzazbz", "Jzazbz"),
    ("lch", "LCH"),
    ("lchuv", "LChuv"),
    ("lab", "Lab"),
    ("lab-d65", "Lab D65"),
    ("luv", "Luv"),
    ("oklch", "Oklch"),
    ("oklab", "Oklab"),
    ("p3", "P3"),
    ("p3-linear", "Linear P3"),
    ("prophoto", "ProPhoto"),
    ("prophoto-linear", "Linear ProPhoto"),
    ("rec2020", "REC.2020"),
    ("rec2020-linear", "Linear REC.2020"),
    ("rec2100hlg", "REC.2100-HLG"),
    ("rec2100pq", "REC.2100-PQ"),
    ("xyz-abs-d65", "Absolute XYZ D65"),
    ("xyz-d50", "XYZ D50"),
    ("xyz-d65", "XYZ D65"),
    ("srgb", "sRGB"),
    ("srgb-linear", "Linear sRGB"),
];

/// Allowlist entry for `id`, if any.
#[must_use]
pub fn allowlisted(id: &str) -> Option<(&'static str, &'static str)> {
    COLOR_SPACES.iter().copied().find(|(key, _)| *key == id)
}

/// A space offered by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorSpaceItem {
    /// Space id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
}

/// Source of known space ids.
pub trait SpaceCatalog {
    /// Ids of every space the catalog can produce, in its preferred order.
    fn space_ids(&self) -> Result<Vec<String>, CatalogError>;
}

/// Catalog backed by the engine's built-in space table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl SpaceCatalog for BuiltinCatalog {
    fn space_ids(&self) -> Result<Vec<String>, CatalogError> {
        Ok(ColorSpace::all().iter().map(|s| s.id.to_string()).collect())
    }
}

/// Filter a catalog's spaces through the allowlist.
pub fn load_spaces(catalog: &dyn SpaceCatalog) -> Result<Vec<ColorSpaceItem>, PickerError> {
    let mut items: Vec<ColorSpaceItem> = Vec::new();
    for id in catalog.space_ids()? {
        match allowlisted(&id) {
            Some((id, name)) if !items.iter().any(|item| item.id == id) => {
                items.push(ColorSpaceItem { id, name });
            }
            Some(_) => {}
            None => tracing::debug!(id = %id, "space not on allowlist, skipped"),
        }
    }
    Ok(items)
}

/// Lazily initialized list of offered spaces.
pub struct SpaceRegistry<C = BuiltinCatalog> {
    catalog: C,
    cache: OnceLock<Vec<ColorSpaceItem>>,
}

impl<C: std::fmt::Debug> std::fmt::Debug for SpaceRegistry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpaceRegistry")
            .field("catalog", &self.catalog)
            .field("initialized", &self.cache.get().is_some())
            .finish()
    }
}

impl SpaceRegistry {
    /// Process-wide registry over the built-in catalog.
    #[must_use]
    pub fn global() -> &'static SpaceRegistry {
        static GLOBAL: SpaceRegistry = SpaceRegistry::new(BuiltinCatalog);
        &GLOBAL
    }
}

impl<C: SpaceCatalog> SpaceRegistry<C> {
    /// Create a registry; the catalog is not queried until first use.
    #[must_use]
    pub const fn new(catalog: C) -> Self {
        Self {
            catalog,
            cache: OnceLock::new(),
        }
    }

    /// Offered spaces, computed on first call.
    pub fn list_color_spaces(&self) -> &[ColorSpaceItem] {
        self.cache.get_or_init(|| match load_spaces(&self.catalog) {
            Ok(items) => {
                tracing::debug!(count = items.len(), "color space registry initialized");
                items
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to initialize color space registry");
                Vec::new()
            }
        })
    }

    /// Look up an offered space.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ColorSpaceItem> {
        self.list_color_spaces().iter().find(|item| item.id == id)
    }

    /// Whether `id` is offered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Engine space for an offered id.
    #[must_use]
    pub fn space(&self, id: &str) -> Option<&'static ColorSpace> {
        self.get(id).and_then(|item| ColorSpace::get(item.id).ok())
    }

    /// Whether the cache has been filled.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.cache.get().is_some()
    }
}

/// Offered spaces of the global registry.
#[must_use]
pub fn list_color_spaces() -> &'static [ColorSpaceItem] {
    SpaceRegistry::global().list_color_spaces()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tracing_test::traced_test;

    struct FixedCatalog(Vec<&'static str>);

    impl SpaceCatalog for FixedCatalog {
        fn space_ids(&self) -> Result<Vec<String>, CatalogError> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }
    }

    struct BrokenCatalog;

    impl SpaceCatalog for BrokenCatalog {
        fn space_ids(&self) -> Result<Vec<String>, CatalogError> {
            Err(CatalogError::new("space table poisoned"))
        }
    }

    struct CountingCatalog(Cell<u32>);

    impl SpaceCatalog for CountingCatalog {
        fn space_ids(&self) -> Result<Vec<String>, CatalogError> {
            self.0.set(self.0.get() + 1);
            Ok(vec!["srgb".into()])
        }
    }

    #[test]
    fn allowlist_has_unique_ids() {
        for (i, (a, _)) in COLOR_SPACES.iter().enumerate() {
            assert!(COLOR_SPACES[i + 1..].iter().all(|(b, _)| a != b), "{a}");
        }
    }

    #[test]
    fn filters_foreign_and_duplicate_ids() {
        let registry = SpaceRegistry::new(FixedCatalog(vec!["oklch", "cmyk", "srgb", "oklch"]));
        let ids: Vec<_> = registry.list_color_spaces().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["oklch", "srgb"]);
    }

    #[test]
    fn uses_allowlist_names() {
        let registry = SpaceRegistry::new(FixedCatalog(vec!["a98rgb", "srgb-linear"]));
        assert_eq!(
            registry.get("a98rgb").map(|i| i.name),
            Some("Adobe® 98 RGB compatible")
        );
        assert_eq!(registry.get("srgb-linear").map(|i| i.name), Some("Linear sRGB"));
    }

    #[test]
    fn ids_without_engine_space_come_from_custom_catalogs() {
        let builtin: Vec<_> = list_color_spaces().iter().map(|i| i.id).collect();
        let extra: Vec<_> = COLOR_SPACES
            .iter()
            .map(|(id, _)| *id)
            .filter(|id| ColorSpace::get(id).is_err())
            .collect();
        assert_eq!(extra.len(), 11);
        assert!(extra.iter().all(|id| !builtin.contains(id)));

        let registry = SpaceRegistry::new(FixedCatalog(vec!["hct", "srgb"]));
        let ids: Vec<_> = registry.list_color_spaces().iter().map(|i| i.id).collect();
        assert_eq!(ids, ["hct", "srgb"]);
    }

    #[test]
    fn catalog_queried_once() {
        let registry = SpaceRegistry::new(CountingCatalog(Cell::new(0)));
        assert!(!registry.is_initialized());
        assert_eq!(registry.list_color_spaces().len(), 1);
        assert_eq!(registry.list_color_spaces().len(), 1);
        assert!(registry.contains("srgb"));
        assert_eq!(registry.catalog.0.get(), 1);
    }

    #[test]
    #[traced_test]
    fn failing_catalog_logs_and_yields_empty() {
        let registry = SpaceRegistry::new(BrokenCatalog);
        assert!(registry.list_color_spaces().is_empty());
        assert!(registry.is_initialized());
        assert!(logs_contain("failed to initialize color space registry"));
        assert!(logs_contain("space table poisoned"));
    }

    #[test]
    fn builtin_registry_offers_engine_spaces() {
        let spaces = list_color_spaces();
        assert_eq!(spaces.len(), ColorSpace::all().len());
        assert!(spaces.iter().all(|item| allowlisted(item.id).is_some()));
        assert!(SpaceRegistry::global().space("oklch").is_some());
        assert!(SpaceRegistry::global().space("hct").is_none());
    }
}
