//! Synthetic 2D convex-hull fixtures for geometry and optimization tests.
//!
//! Three small operations compose into one workflow:
//! - `hull::extract_hull`: convex hull of a point set as an ordered cycle of
//!   directed boundary segments plus the hull vertices.
//! - `hull::halfplane_of_segment`: the half-plane inequality `n · p <= c`
//!   induced by one directed segment.
//! - `sample::fill_from_segment`: rejection-sample uniform points into the
//!   segment's half-plane and re-extract the hull of the augmented set.
//!
//! Fixture-generation glue, not a system: single-threaded, no persistence,
//! all errors surface to the caller immediately.

pub mod hull;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{
        extract_hull, halfplane_of_segment, GeomCfg, Halfplane, Hull, HullError, Segment,
    };
    pub use crate::sample::{fill_from_segment, FillCfg, GeneratorError, Range2, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}
