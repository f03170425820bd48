//! Half-plane derivation from a directed segment via the 3D-lift cross product.

use nalgebra::{Vector2, Vector3};

use super::types::{Halfplane, HullError, Segment};

/// Half-plane `n · p <= c` bounded by a directed segment.
///
/// Lifts the segment into 3D: `a -> (a.x, a.y, 0)`, `b -> (b.x, b.y, 0)`,
/// and a copy of `a` raised to `z = 1`. The plane normal through those three
/// points is `cross(b - a, c - a)`, normalized to unit length; its z
/// component vanishes by construction, so the first two components are the
/// segment's perpendicular in 2D. The offset is `a · n`.
///
/// Orientation follows the segment's direction: for a CCW hull edge the
/// normal points outward and every hull point satisfies the inequality.
/// Reversing the segment negates both `n` and `c`.
///
/// Fails with `DegenerateSegment` when the endpoints coincide, since the
/// cross product is then zero and normalization is undefined.
pub fn halfplane_of_segment(seg: Segment) -> Result<Halfplane, HullError> {
    let a = Vector3::new(seg.a.x, seg.a.y, 0.0);
    let b = Vector3::new(seg.b.x, seg.b.y, 0.0);
    let c = Vector3::new(seg.a.x, seg.a.y, 1.0);
    let normal = (b - a).cross(&(c - a));
    let norm = normal.norm();
    if !norm.is_finite() || norm < 1e-12 {
        return Err(HullError::DegenerateSegment);
    }
    let normal = normal / norm;
    let offset = a.dot(&normal);
    Ok(Halfplane::new(Vector2::new(normal.x, normal.y), offset))
}
