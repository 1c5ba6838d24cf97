//! Parsing of CSS color strings.
//!
//! Accepted syntax: hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), named
//! keywords, functional notation of any built-in space format (modern space
//! syntax with `/ alpha`, or legacy commas), and `color(<id> c1 c2 c3)`.

use crate::color::Color;
use crate::error::ColorError;
use crate::named;
use crate::space::{ColorSpace, CoordDescriptor, CoordSyntax, FormatKind};
use crate::spaces::SRGB;

/// Parse a CSS color string.
pub fn parse(input: &str) -> Result<Color, ColorError> {
    let text = input.trim().to_ascii_lowercase();
    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(input, hex);
    }
    if let Some(open) = text.find('(') {
        let body = text[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| ColorError::parse(input, "missing closing parenthesis"))?;
        return parse_function(input, text[..open].trim(), body);
    }
    named::lookup(&text).ok_or_else(|| ColorError::parse(input, "unknown keyword"))
}

fn parse_hex(input: &str, hex: &str) -> Result<Color, ColorError> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::parse(input, "bad hex digit"));
    }
    let digits: Vec<u8> = match hex.len() {
        3 | 4 => hex
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| (d * 17) as u8)
            .collect(),
        6 | 8 => hex
            .as_bytes()
            .chunks(2)
            .filter_map(|pair| std::str::from_utf8(pair).ok())
            .filter_map(|pair| u8::from_str_radix(pair, 16).ok())
            .collect(),
        _ => return Err(ColorError::parse(input, "bad hex length")),
    };
    let channel = |i: usize| digits.get(i).map_or(1.0, |&v| f64::from(v) / 255.0);
    Ok(Color::in_space(
        &SRGB,
        [channel(0), channel(1), channel(2)],
        channel(3),
    ))
}

fn parse_function(input: &str, name: &str, body: &str) -> Result<Color, ColorError> {
    let (space, syntax, body) = if name == "color" {
        let body = body.trim_start();
        let end = body.find(char::is_whitespace).unwrap_or(body.len());
        let space = ColorSpace::by_css_id(&body[..end])
            .ok_or_else(|| ColorError::parse(input, "unknown color() space"))?;
        (space, [CoordSyntax::Number; 3], &body[end..])
    } else {
        let (space, syntax) =
            function_space(name).ok_or_else(|| ColorError::parse(input, "unknown function"))?;
        (space, syntax, body)
    };

    let (coord_tokens, alpha_token) = split_arguments(body);
    if coord_tokens.len() != 3 {
        return Err(ColorError::parse(input, "expected three coordinates"));
    }

    let mut coords = [0.0; 3];
    for (i, token) in coord_tokens.iter().enumerate() {
        coords[i] = parse_coord(token, &space.coords[i], syntax[i])
            .ok_or_else(|| ColorError::parse(input, "bad coordinate"))?;
    }
    let alpha = match alpha_token {
        Some(token) => parse_alpha(token).ok_or_else(|| ColorError::parse(input, "bad alpha"))?,
        None => 1.0,
    };
    Ok(Color::in_space(space, coords, alpha))
}

/// Find the space and coordinate syntax owning a function format.
fn function_space(name: &str) -> Option<(&'static ColorSpace, [CoordSyntax; 3])> {
    ColorSpace::all().iter().copied().find_map(|space| {
        space.formats.iter().find_map(|format| match format.kind {
            FormatKind::Function { name: n, coords, .. } if n == name => Some((space, coords)),
            _ => None,
        })
    })
}

/// Split arguments into coordinate tokens and an optional alpha token.
fn split_arguments(body: &str) -> (Vec<&str>, Option<&str>) {
    if body.contains(',') {
        let mut tokens: Vec<&str> = body.split(',').map(str::trim).collect();
        let alpha = if tokens.len() == 4 { tokens.pop() } else { None };
        return (tokens, alpha);
    }
    let (coords, alpha) = match body.split_once('/') {
        Some((coords, alpha)) => (coords, Some(alpha.trim())),
        None => (body, None),
    };
    (coords.split_whitespace().collect(), alpha)
}

fn parse_coord(token: &str, descriptor: &CoordDescriptor, syntax: CoordSyntax) -> Option<f64> {
    if token == "none" {
        return Some(0.0);
    }
    if let Some(pct) = token.strip_suffix('%') {
        let pct: f64 = pct.parse().ok()?;
        let upper = descriptor.span().map_or(1.0, |[_, max]| max);
        return Some(pct / 100.0 * upper);
    }
    if descriptor.is_angle() {
        return parse_angle(token);
    }
    let value: f64 = token.parse().ok()?;
    Some(match syntax {
        CoordSyntax::Byte => value / 255.0,
        CoordSyntax::Number | CoordSyntax::Percent => value,
    })
}

fn parse_angle(token: &str) -> Option<f64> {
    const UNITS: [(&str, f64); 4] = [
        ("grad", 360.0 / 400.0),
        ("deg", 1.0),
        ("rad", 180.0 / std::f64::consts::PI),
        ("turn", 360.0),
    ];
    for (unit, factor) in UNITS {
        if let Some(value) = token.strip_suffix(unit) {
            return value.parse::<f64>().ok().map(|v| v * factor);
        }
    }
    token.parse().ok()
}

fn parse_alpha(token: &str) -> Option<f64> {
    if token == "none" {
        return Some(0.0);
    }
    let value = match token.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().ok()? / 100.0,
        None => token.parse().ok()?,
    };
    Some(value.clamp(0.0, 1.0))
}
