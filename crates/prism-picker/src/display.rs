//! Serialized display of the picker color.
//!
//! [`DisplayState`] owns the serialization options and watches the color.
//! Whenever the color changes the available formats are recomputed; when the
//! first available format differs from the previous first format, it is
//! selected automatically. Explicit [`DisplayState::set_format`] calls made
//! afterwards always win.

use std::cell::RefCell;
use std::rc::Rc;

use prism_color::{Color, ColorSpace, SerializeOptions};

use crate::reactive::{Observable, Subscription};

/// Format names offered for `space`: every format except `keyword`.
#[must_use]
pub fn formats(space: &ColorSpace) -> Vec<String> {
    space
        .format_names()
        .filter(|name| *name != "keyword")
        .map(str::to_string)
        .collect()
}

#[derive(Debug)]
struct DisplayInner {
    options: SerializeOptions,
    formats: Vec<String>,
}

impl DisplayInner {
    /// Recompute formats for `space`, auto-selecting on a new first entry.
    fn refresh(&mut self, space: &ColorSpace) {
        let next = formats(space);
        let changed = next.first() != self.formats.first();
        if changed && let Some(first) = next.first() {
            tracing::debug!(space = space.id, format = %first, "auto-selected display format");
            self.options.format = Some(first.clone());
        }
        self.formats = next;
    }
}

/// Display options bound to a color.
#[derive(Debug)]
pub struct DisplayState {
    color: Observable<Color>,
    inner: Rc<RefCell<DisplayInner>>,
    _watch: Subscription,
}

impl DisplayState {
    /// Watch `color` with default options.
    #[must_use]
    pub fn new(color: &Observable<Color>) -> Self {
        Self::with_options(color, SerializeOptions::default())
    }

    /// Watch `color` starting from `options`.
    ///
    /// A format given in `options` is kept; otherwise the first available
    /// format is selected immediately.
    #[must_use]
    pub fn with_options(color: &Observable<Color>, options: SerializeOptions) -> Self {
        let space = color.with(Color::space);
        let explicit = options.format.is_some();
        let mut inner = DisplayInner {
            options,
            formats: Vec::new(),
        };
        if explicit {
            inner.formats = formats(space);
        } else {
            inner.refresh(space);
        }
        let inner = Rc::new(RefCell::new(inner));
        let watched = Rc::clone(&inner);
        let watch = color.subscribe(move |c: &Color| watched.borrow_mut().refresh(c.space()));
        Self {
            color: color.clone(),
            inner,
            _watch: watch,
        }
    }

    /// Formats available for the current space.
    #[must_use]
    pub fn formats(&self) -> Vec<String> {
        self.inner.borrow().formats.clone()
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> SerializeOptions {
        self.inner.borrow().options.clone()
    }

    /// Selected format, if any.
    #[must_use]
    pub fn format(&self) -> Option<String> {
        self.inner.borrow().options.format.clone()
    }

    /// Choose a format explicitly.
    pub fn set_format(&self, format: impl Into<String>) {
        self.inner.borrow_mut().options.format = Some(format.into());
    }

    /// Set significant digits.
    pub fn set_precision(&self, precision: usize) {
        self.inner.borrow_mut().options.precision = precision;
    }

    /// Toggle gamut mapping before serialization.
    pub fn set_in_gamut(&self, in_gamut: bool) {
        self.inner.borrow_mut().options.in_gamut = in_gamut;
    }

    /// The color in the selected format.
    #[must_use]
    pub fn serialized(&self) -> String {
        let options = self.options();
        self.color.with(|c| c.serialize(&options))
    }

    /// The color for a CSS consumer; non-CSS spaces are shown as OKLCh.
    #[must_use]
    pub fn display_color(&self) -> String {
        let options = self.options();
        self.color.with(|c| c.display_with(&options))
    }
}
