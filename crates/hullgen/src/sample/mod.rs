//! Constrained random point generation (rejection sampling + replay tokens).
//!
//! Purpose
//! - Grow a point set on one side of a directed segment: derive the segment's
//!   half-plane, rejection-sample uniform points from a bounding rectangle
//!   into it, and re-extract the hull of the augmented set.
//!
//! Model
//! - The working set starts from the caller's existing points plus the
//!   segment's own endpoints, so the constraint boundary is always part of
//!   the fixture. Candidates outside the half-plane are discarded.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Termination
//! - With `max_attempts: None` the loop is unbounded: if the rectangle barely
//!   overlaps the accepting half-plane the loop may run arbitrarily long, and
//!   never terminates when they are disjoint. Supplying sane ranges is the
//!   caller's responsibility; `Some(cap)` turns the risk into an explicit
//!   `AttemptsExhausted` error instead.
//!
//! Code cross-refs: `hull::{extract_hull, halfplane_of_segment, Segment, Hull}`.

use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hull::{extract_hull, halfplane_of_segment, Hull, HullError, Segment};

/// Error type for the constrained generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
    Hull(HullError),
    AttemptsExhausted { attempts: u64 },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
            Self::Hull(err) => write!(f, "hull extraction failed: {err}"),
            Self::AttemptsExhausted { attempts } => write!(
                f,
                "rejection sampling exhausted {attempts} attempts without reaching the target"
            ),
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Hull(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HullError> for GeneratorError {
    fn from(err: HullError) -> Self {
        Self::Hull(err)
    }
}

/// Axis-aligned sampling rectangle. Draws are uniform and independent per axis.
#[derive(Clone, Copy, Debug)]
pub struct Range2 {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Range2 {
    fn validate(&self) -> Result<(), GeneratorError> {
        let bounds = [self.x_min, self.x_max, self.y_min, self.y_max];
        if bounds.iter().any(|v| !v.is_finite()) {
            return Err(GeneratorError::invalid("range bounds must be finite"));
        }
        if self.x_min > self.x_max || self.y_min > self.y_max {
            return Err(GeneratorError::invalid("range min must not exceed max"));
        }
        Ok(())
    }

    #[inline]
    fn sample<R: Rng>(&self, rng: &mut R) -> Vector2<f64> {
        let x = self.x_min + (self.x_max - self.x_min) * rng.gen::<f64>();
        let y = self.y_min + (self.y_max - self.y_min) * rng.gen::<f64>();
        Vector2::new(x, y)
    }
}

/// Configuration for one constrained fill.
#[derive(Clone, Copy, Debug)]
pub struct FillCfg {
    /// Stop sampling once the working set holds this many points.
    pub target: usize,
    /// Rectangle candidates are drawn from.
    pub range: Range2,
    /// Optional cap on candidate draws. `None` preserves the unbounded loop.
    pub max_attempts: Option<u64>,
}

impl FillCfg {
    fn validate(&self) -> Result<(), GeneratorError> {
        self.range.validate()?;
        if self.max_attempts == Some(0) {
            return Err(GeneratorError::invalid("max_attempts cap must be > 0"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Fill the half-plane bounded by `seg` with random points and hull them.
///
/// Seeds the working set with `existing` followed by the segment's endpoints,
/// then draws uniform candidates from `cfg.range`, keeping only those with
/// `n · p <= c` for the segment's half-plane, until the set holds
/// `cfg.target` points. The hull of the final set is returned.
///
/// Errors: `DegenerateSegment` if `seg` has coincident endpoints,
/// `InsufficientPoints` if the final set is still degenerate (both via
/// `GeneratorError::Hull`), and `AttemptsExhausted` when a cap is set and
/// consumed before the target is reached.
pub fn fill_from_segment(
    seg: Segment,
    cfg: &FillCfg,
    existing: &[Vector2<f64>],
    tok: ReplayToken,
) -> Result<Hull, GeneratorError> {
    cfg.validate()?;
    let hp = halfplane_of_segment(seg)?;
    let mut gen: Vec<Vector2<f64>> = Vec::with_capacity(cfg.target.max(existing.len() + 2));
    gen.extend_from_slice(existing);
    gen.push(seg.a);
    gen.push(seg.b);
    let mut rng = tok.to_std_rng();
    let mut attempts: u64 = 0;
    while gen.len() < cfg.target {
        if let Some(cap) = cfg.max_attempts {
            if attempts >= cap {
                return Err(GeneratorError::AttemptsExhausted { attempts });
            }
        }
        attempts += 1;
        let p = cfg.range.sample(&mut rng);
        if hp.satisfies(p) {
            gen.push(p);
        }
    }
    Ok(extract_hull(&gen)?)
}
