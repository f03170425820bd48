//! Convex hulls of 2D point sets and the half-planes of their edges.
//!
//! Purpose
//! - Turn an unordered point cloud into an ordered boundary: hull vertices in
//!   counter-clockwise traversal order and one directed segment per edge, the
//!   last segment closing back to the first vertex.
//! - Derive from any directed segment the closed half-plane `n · p <= c` it
//!   bounds, with `n` unit length and orientation fixed by the segment's
//!   direction (reversing the segment flips the accepted side).
//!
//! Winding convention
//! - Hulls are counter-clockwise. For a CCW edge the derived normal points
//!   outward, so every hull point satisfies its edge's inequality.
//!
//! Code cross-refs: `types::{Segment, Hull, Halfplane, GeomCfg, HullError}`,
//! `chain::extract_hull`, `halfplane::halfplane_of_segment`.

mod chain;
mod halfplane;
mod types;

pub use chain::extract_hull;
pub use halfplane::halfplane_of_segment;
pub use types::{GeomCfg, Halfplane, Hull, HullError, Segment};
