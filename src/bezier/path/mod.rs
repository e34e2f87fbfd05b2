mod path;
mod to_curves;
mod bounds;
mod length;
mod tangent;
mod closest_point;
mod self_intersect;
mod trim;
mod path_builder;

pub use self::path::*;
pub use self::to_curves::*;
pub use self::bounds::*;
pub use self::length::*;
pub use self::tangent::*;
pub use self::closest_point::*;
pub use self::self_intersect::*;
pub use self::trim::*;
pub use self::path_builder::*;
