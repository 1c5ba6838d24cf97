//! Small linear-algebra and angle helpers shared by the space definitions.

/// Row-major 3x3 matrix.
pub(crate) type Mat3 = [[f64; 3]; 3];

/// Multiply a 3x3 matrix by a column vector.
#[inline]
pub(crate) fn mul(m: &Mat3, v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Normalize an angle in degrees into `[0, 360)`.
#[inline]
pub(crate) fn constrain_angle(deg: f64) -> f64 {
    let h = deg.rem_euclid(360.0);
    // rem_euclid keeps the sign of zero and can round up to 360.
    if h == 0.0 || h >= 360.0 { 0.0 } else { h }
}

/// Linear interpolation.
#[inline]
pub(crate) fn lerp(start: f64, end: f64, p: f64) -> f64 {
    start + (end - start) * p
}

/// Sign-preserving power, used by transfer functions that accept
/// extended-range (negative) components.
#[inline]
pub(crate) fn spow(v: f64, exp: f64) -> f64 {
    v.signum() * v.abs().powf(exp)
}

/// Hue of a polar color in `[0, 360)`, or 0 when `chroma` is below
/// `epsilon` so no noise angle leaks into serialized output.
#[inline]
pub(crate) fn polar_hue(chroma: f64, degrees: f64, epsilon: f64) -> f64 {
    if chroma < epsilon {
        0.0
    } else {
        constrain_angle(degrees)
    }
}
