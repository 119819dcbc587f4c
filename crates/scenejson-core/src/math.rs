//! Small vector helpers shared by the parser and the converter.
//!
//! Positions and normals are plain `[f64; 3]` arrays, texture
//! coordinates `[f64; 2]`. Nothing here needs a linear algebra crate;
//! the converter only ever normalizes, subtracts, and crosses.

/// A 3-component vector (position or normal)
pub type Vec3 = [f64; 3];

/// A 2-component vector (texture coordinate)
pub type Vec2 = [f64; 2];

/// Decimal digits used when canonicalizing vertex attributes for
/// deduplication. Two corners are considered identical when every
/// component matches after rounding to this precision.
pub const KEY_PRECISION_DIGITS: u32 = 6;

/// Normalize a vector to unit length.
///
/// A zero-length input yields the zero vector rather than dividing by
/// zero; degenerate geometry is accepted, not an error.
#[must_use]
pub fn normalize(v: Vec3) -> Vec3 {
    let length = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if length == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    [v[0] / length, v[1] / length, v[2] / length]
}

/// Component-wise subtraction `a - b`.
#[inline]
#[must_use]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// Cross product `a × b`.
#[inline]
#[must_use]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Unit normal of the triangle (p0, p1, p2).
///
/// Zero-area triangles yield the zero vector.
#[must_use]
pub fn face_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    normalize(cross(sub(p1, p0), sub(p2, p0)))
}

/// Round a component to [`KEY_PRECISION_DIGITS`] decimals, expressed
/// in integer millionths so the result is `Eq + Hash`.
#[inline]
#[must_use]
pub fn round_component(x: f64) -> i64 {
    (x * 1_000_000.0).round() as i64
}
