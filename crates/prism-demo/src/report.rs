//! Text report for one color.

use std::fmt::Write as _;

use prism::prelude::*;
use prism::{ColorSpaceItem, contrast_color, format_number};

use crate::cli::Opts;

/// Build the full report for `opts`.
pub fn render(opts: &Opts) -> Result<String> {
    let color: Color = opts.color.parse()?;
    let picker = ColorPicker::new(color);
    picker.set_space_id(&opts.space)?;

    let options = SerializeOptions {
        format: opts.format.clone(),
        precision: opts.precision,
        in_gamut: opts.in_gamut,
    };
    let display = DisplayState::with_options(picker.observable(), options);

    let mut out = String::new();
    let space = picker.space();
    let _ = writeln!(out, "space     {} ({})", space.id, space.name);
    let _ = writeln!(out, "formats   {}", display.formats().join(", "));
    let _ = writeln!(out, "value     {}", display.serialized());
    let _ = writeln!(out, "css       {}", display.display_color());
    let _ = writeln!(out, "in gamut  {}", picker.color().in_gamut());
    let _ = writeln!(out, "text      {}", contrast_color(&picker.color()).display());

    let _ = writeln!(out);
    let coords = picker.coords();
    for (meta, value) in picker.coords_meta().iter().zip(coords) {
        let _ = writeln!(
            out,
            "{:<10} {} in [{}, {}] step {}",
            meta.name,
            num(value),
            num(meta.min),
            num(meta.max),
            num(meta.step),
        );
    }

    let _ = writeln!(out);
    let metas = picker.coords_meta();
    let stops = picker.gradient_stops(&GradientOptions { steps: opts.steps });
    let labels = metas.iter().map(|m| m.name.as_str()).chain(["alpha"]);
    for (label, stop) in labels.zip(&stops) {
        let _ = writeln!(out, "{label:<10} linear-gradient(to right, {stop})");
    }

    if opts.lines {
        let _ = writeln!(out);
        out.push_str(&lines_summary(&ContrastLines::default()));
    }
    Ok(out)
}

fn num(value: f64) -> String {
    format_number(value, 5)
}

/// One line per hue slice with its boundary point count.
#[must_use]
pub fn lines_summary(tracer: &ContrastLines) -> String {
    let mut out = String::new();
    for line in tracer.hue_lines() {
        let _ = writeln!(
            out,
            "hue {:<5} {} boundary points",
            num(line.hue),
            line.points.len()
        );
    }
    out
}

/// Id and name of every selectable space.
#[must_use]
pub fn spaces_listing(items: &[ColorSpaceItem]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "{:<16} {}", item.id, item.name);
    }
    out
}
