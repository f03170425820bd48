//! Data model for hull fixtures and the shared tolerances.
//!
//! - `Segment`: directed edge along the hull traversal.
//! - `Hull`: CCW vertex cycle plus one segment per edge.
//! - `Halfplane`: closed half-plane `n · p <= c` with unit normal.
//! - `GeomCfg`: centralizes epsilons for duplicate collapse and feasibility.

use std::fmt;

use nalgebra::Vector2;

use super::halfplane::halfplane_of_segment;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Points closer than this are collapsed before hull construction.
    pub eps_dedup: f64,
    /// Slack for membership / feasibility checks.
    pub eps_feas: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_dedup: 1e-12,
            eps_feas: 1e-9,
        }
    }
}

/// Errors from hull extraction and half-plane derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullError {
    /// The input cannot form a 2D hull: fewer than 3 distinct points, or all
    /// points collinear. `distinct` counts the points after duplicate collapse.
    InsufficientPoints { distinct: usize },
    /// A segment's endpoints coincide, so its normal is undefined.
    DegenerateSegment,
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientPoints { distinct } => write!(
                f,
                "point set cannot form a 2D hull ({distinct} distinct, possibly collinear)"
            ),
            Self::DegenerateSegment => {
                write!(f, "segment endpoints coincide; half-plane normal undefined")
            }
        }
    }
}

impl std::error::Error for HullError {}

/// Directed segment from `a` to `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }

    /// Same endpoints, opposite direction. Flips which side the derived
    /// half-plane accepts.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

/// Closed half-plane `n · p <= c` with unit normal `n`.
#[derive(Clone, Copy, Debug)]
pub struct Halfplane {
    pub n: Vector2<f64>,
    pub c: f64,
}

impl Halfplane {
    #[inline]
    pub fn new(n: Vector2<f64>, c: f64) -> Self {
        Self { n, c }
    }

    #[inline]
    pub fn satisfies(&self, p: Vector2<f64>) -> bool {
        self.n.dot(&p) <= self.c
    }

    #[inline]
    pub fn satisfies_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.n.dot(&p) <= self.c + eps
    }
}

/// Convex hull as an ordered vertex cycle plus its boundary segments.
///
/// Invariants:
/// - `vertices` are in CCW traversal order without a closing duplicate.
/// - `segments.len() == vertices.len()`; `segments[i]` joins `vertices[i]`
///   to `vertices[(i + 1) % n]`, so the last segment closes the cycle.
/// - No segment has coincident endpoints.
#[derive(Clone, Debug)]
pub struct Hull {
    pub vertices: Vec<Vector2<f64>>,
    pub segments: Vec<Segment>,
}

impl Hull {
    /// Outward half-plane of every boundary segment, in edge order.
    ///
    /// Hull invariants rule out degenerate segments, but a hand-built `Hull`
    /// could violate them, so the derivation error still propagates.
    pub fn edge_halfplanes(&self) -> Result<Vec<Halfplane>, HullError> {
        self.segments.iter().map(|s| halfplane_of_segment(*s)).collect()
    }

    /// Membership check with slack, via orientation tests (no normalization).
    ///
    /// For a CCW hull, `p` is inside iff it lies on or left of every edge.
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.segments.iter().all(|s| {
            let e = s.b - s.a;
            let w = p - s.a;
            e.x * w.y - e.y * w.x >= -eps
        })
    }
}
