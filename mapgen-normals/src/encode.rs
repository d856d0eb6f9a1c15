//! 8-bit RGB packing of unit vectors.
//!
//! Each component `c ∈ [-1, 1]` maps to `((c + 1) / 2) · 255`, truncated. A flat normal
//! `(0, 0, 1)` therefore encodes as `(127, 127, 255)`, the familiar lilac of tangent-space
//! normal maps.

use mapgen_math::Vector3D;

/// Packs a unit vector into RGB bytes.
///
/// Components outside `[-1, 1]` saturate at 0 or 255; NaN encodes as 0.
///
/// ```
/// use mapgen_math::Vector3D;
/// use mapgen_normals::encode_unit_vector_rgb8;
///
/// assert_eq!(encode_unit_vector_rgb8(&Vector3D::z_axis()), [127, 127, 255]);
/// ```
pub fn encode_unit_vector_rgb8(v: &Vector3D) -> [u8; 3] {
    v.to_array().map(encode_component)
}

/// Unpacks RGB bytes into a unit vector.
///
/// Truncation in [`encode_unit_vector_rgb8`] loses up to one step per channel, so the
/// round trip is accurate to about `2 / 255` per component.
pub fn decode_rgb8_unit_vector(rgb: [u8; 3]) -> Vector3D {
    Vector3D::from_array(rgb.map(decode_component)).unit_vector()
}

#[inline]
fn encode_component(c: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    ((c + 1.0) / 2.0 * 255.0) as u8
}

#[inline]
fn decode_component(byte: u8) -> f64 {
    byte as f64 / 255.0 * 2.0 - 1.0
}
