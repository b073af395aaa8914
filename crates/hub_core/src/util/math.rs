use crate::constants::{Location, Weight};

/// Straight line distance between two hub locations.
///
/// Coordinate differences are taken in `f64`, so extreme `i32` values do not overflow.
pub fn euclidean(src: Location, dst: Location) -> Weight {
    let dx = src.0 as Weight - dst.0 as Weight;
    let dy = src.1 as Weight - dst.1 as Weight;
    (dx * dx + dy * dy).sqrt()
}
