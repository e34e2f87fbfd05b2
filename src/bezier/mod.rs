mod basis;
mod curve;
mod bounds;
mod subdivide;
mod derivative;
mod flatten;
mod length;
mod search;
mod solve;
mod fit;
mod intersection;

pub mod path;

pub use self::basis::*;
pub use self::curve::*;
pub use self::bounds::*;
pub use self::subdivide::*;
pub use self::derivative::*;
pub use self::flatten::*;
pub use self::length::*;
pub use self::search::*;
pub use self::solve::*;
pub use self::fit::*;
pub use self::intersection::*;
