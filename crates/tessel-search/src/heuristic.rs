//! Distance estimates for A*.
//!
//! Each function takes `(position, goal)` and returns an estimate of the
//! remaining cost. Which one is admissible depends on the move set and the
//! cheapest step cost:
//!
//! | Moves | Step cost | Admissible + consistent |
//! |-------|-----------|--------------------------|
//! | cardinal | >= 1 | [`manhattan_distance`] |
//! | eight-way | >= 1 for every step | [`chebyshev_distance`] |
//! | eight-way | 1 straight, sqrt(2) diagonal | [`octile_distance`] |
//! | any | any | [`zero_heuristic`] (A* degrades to Dijkstra) |

use tessel_core::Position;

/// L1 distance.
pub fn manhattan_distance(a: Position, b: Position) -> f64 {
    f64::from(a.manhattan(b))
}

/// L-infinity distance.
pub fn chebyshev_distance(a: Position, b: Position) -> f64 {
    f64::from(a.chebyshev(b))
}

/// Octile distance: straight moves cost 1, diagonal moves cost sqrt(2).
pub fn octile_distance(a: Position, b: Position) -> f64 {
    let dx = f64::from(a.x.abs_diff(b.x));
    let dy = f64::from(a.y.abs_diff(b.y));
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    hi + (std::f64::consts::SQRT_2 - 1.0) * lo
}

/// Always zero.
pub fn zero_heuristic(_: Position, _: Position) -> f64 {
    0.0
}
