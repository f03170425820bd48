//! Generate a constrained hull fixture and print it for quick visual sanity.
//!
//! Usage:
//!   cargo run -p hullgen --example segment_fixture -- [target]
//!
//! Draws `target` points (default 8) left of the vertical segment
//! x = 0.5 inside the unit square, then prints the hull cycle.

use hullgen::prelude::*;

fn main() {
    let target = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(8);
    let seg = Segment::new(Vec2::new(0.5, 0.0), Vec2::new(0.5, 0.5));
    let cfg = FillCfg {
        target,
        range: Range2 {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        },
        max_attempts: Some(1_000_000),
    };
    let tok = ReplayToken {
        seed: 2025,
        index: 0,
    };
    match fill_from_segment(seg, &cfg, &[], tok) {
        Ok(hull) => {
            println!("hull with {} vertices:", hull.vertices.len());
            for s in &hull.segments {
                println!(
                    "  ({:.3}, {:.3}) -> ({:.3}, {:.3})",
                    s.a.x, s.a.y, s.b.x, s.b.y
                );
            }
        }
        Err(err) => eprintln!("fixture generation failed: {err}"),
    }
}
