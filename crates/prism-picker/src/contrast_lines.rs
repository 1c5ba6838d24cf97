//! Approximate gamut boundary lines per hue slice.
//!
//! For each hue slice the source space is sampled on a regular grid over
//! its two non-hue coordinates. Grid points whose color lands inside the
//! target gamut are kept, and of those the points whose successor (in
//! sampling order, wrapping) is more than `tolerance` away on either axis
//! form the line. This is a coarse heuristic, not a contour trace.
//!
//! Grid values are normalized: `[0, 1]` on each axis maps onto the source
//! coordinate's slider range, and a line's `hue` is the slice's fraction of
//! the hue range.

use prism_color::{Color, ColorError, ColorSpace};

use crate::coords::{CoordMeta, create_coord_meta};

/// One boundary polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryLine {
    /// Hue slice as a fraction in `[0, 1)`.
    pub hue: f64,
    /// Normalized `[x, y]` points in sampling order.
    pub points: Vec<[f64; 2]>,
}

/// Boundary tracer configuration.
#[derive(Debug, Clone, Copy)]
pub struct ContrastLines {
    /// Space sampled on the grid; must have a hue coordinate.
    pub source: &'static ColorSpace,
    /// Space whose gamut decides which points are kept.
    pub target: &'static ColorSpace,
    /// Number of hue slices over `[0, 1)`.
    pub hue_slices: usize,
    /// Grid intervals per axis; the grid has `grid_steps + 1` points per axis.
    pub grid_steps: usize,
    /// Distance under which two points count as the same.
    pub tolerance: f64,
}

impl Default for ContrastLines {
    fn default() -> Self {
        Self {
            source: &prism_color::spaces::HSL,
            target: &prism_color::spaces::SRGB,
            hue_slices: 10,
            grid_steps: 10,
            tolerance: 0.01,
        }
    }
}

impl ContrastLines {
    /// Tracer between two spaces by id, with default sampling.
    pub fn between(source: &str, target: &str) -> Result<Self, ColorError> {
        Ok(Self {
            source: ColorSpace::get(source)?,
            target: ColorSpace::get(target)?,
            ..Self::default()
        })
    }

    /// Lines for every hue slice with more than two boundary points.
    #[must_use]
    pub fn hue_lines(&self) -> Vec<BoundaryLine> {
        let Some(axes) = Axes::of(self.source) else {
            tracing::warn!(space = self.source.id, "contrast lines need a hue coordinate");
            return Vec::new();
        };
        (0..self.hue_slices)
            .filter_map(|i| self.line(&axes, i as f64 / self.hue_slices as f64))
            .collect()
    }

    fn line(&self, axes: &Axes, hue: f64) -> Option<BoundaryLine> {
        let steps = self.grid_steps.max(1);
        let mut points: Vec<[f64; 2]> = Vec::new();
        for i in 0..=steps {
            let x = i as f64 / steps as f64;
            for j in 0..=steps {
                let y = j as f64 / steps as f64;
                let color = Color::in_space(self.source, axes.coords(hue, x, y), 1.0);
                if color.in_gamut_of(self.target)
                    && !contains_similar(&points, [x, y], self.tolerance)
                {
                    points.push([x, y]);
                }
            }
        }
        let boundary = find_boundary_points(&points, self.tolerance);
        (boundary.len() > 2).then_some(BoundaryLine {
            hue,
            points: boundary,
        })
    }
}

/// Coordinate layout of the source space.
struct Axes {
    hue: (usize, CoordMeta),
    x: (usize, CoordMeta),
    y: (usize, CoordMeta),
}

impl Axes {
    fn of(space: &ColorSpace) -> Option<Self> {
        let hue_index = space.hue_index()?;
        let mut others = (0..3).filter(|&i| i != hue_index);
        let (xi, yi) = (others.next()?, others.next()?);
        let meta = |i: usize| (i, create_coord_meta(space.coords[i].id, &space.coords[i]));
        Some(Self {
            hue: meta(hue_index),
            x: meta(xi),
            y: meta(yi),
        })
    }

    fn coords(&self, hue: f64, x: f64, y: f64) -> [f64; 3] {
        let mut coords = [0.0; 3];
        for ((index, meta), t) in [(&self.hue, hue), (&self.x, x), (&self.y, y)] {
            coords[*index] = meta.min + t * (meta.max - meta.min);
        }
        coords
    }
}

/// Whether any point lies within `tolerance` of `point` on both axes.
#[must_use]
pub fn contains_similar(points: &[[f64; 2]], point: [f64; 2], tolerance: f64) -> bool {
    points
        .iter()
        .any(|p| (p[0] - point[0]).abs() < tolerance && (p[1] - point[1]).abs() < tolerance)
}

/// Points whose successor (wrapping) differs by more than `tolerance` on either axis.
#[must_use]
pub fn find_boundary_points(points: &[[f64; 2]], tolerance: f64) -> Vec<[f64; 2]> {
    let n = points.len();
    (0..n)
        .filter(|&i| {
            let (p1, p2) = (points[i], points[(i + 1) % n]);
            (p1[0] - p2[0]).abs() > tolerance || (p1[1] - p2[1]).abs() > tolerance
        })
        .map(|i| points[i])
        .collect()
}
