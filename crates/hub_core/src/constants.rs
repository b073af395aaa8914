/// Distance type, used for edge weights and cumulative path lengths
pub type Weight = f64;
/// Integer hub coordinates `(x, y)`
pub type Location = (i32, i32);
/// Distance of a hub that has not been reached from the source
pub const UNREACHABLE: Weight = f64::INFINITY;
