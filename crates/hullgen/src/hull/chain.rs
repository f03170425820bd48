//! Convex hull extraction via Andrew's monotone chain.

use nalgebra::Vector2;

use super::types::{GeomCfg, Hull, HullError, Segment};

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Convex hull of a point set as an ordered boundary cycle.
///
/// Andrew's monotone chain with strict turns: collinear points are dropped,
/// duplicates within `GeomCfg::default().eps_dedup` are collapsed, and the
/// hull comes out in counter-clockwise order. Returns one directed segment
/// per hull vertex; the final segment closes back to the first vertex.
///
/// Fails with `InsufficientPoints` when fewer than 3 hull vertices survive
/// (short input, coincident points, or a fully collinear set).
pub fn extract_hull(points: &[Vector2<f64>]) -> Result<Hull, HullError> {
    let cfg = GeomCfg::default();
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < cfg.eps_dedup);
    if pts.len() < 3 {
        return Err(HullError::InsufficientPoints {
            distinct: pts.len(),
        });
    }
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut vertices = lower;
    vertices.extend(upper);
    if vertices.len() < 3 {
        // Distinct but collinear: both chains degenerate to the extremes.
        return Err(HullError::InsufficientPoints {
            distinct: pts.len(),
        });
    }
    let n = vertices.len();
    let segments = (0..n)
        .map(|i| Segment::new(vertices[i], vertices[(i + 1) % n]))
        .collect();
    Ok(Hull { vertices, segments })
}
