mod curve_line;
mod curve_curve;

pub use self::curve_line::*;
pub use self::curve_curve::*;
