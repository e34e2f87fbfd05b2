#![warn(bare_trait_objects)]

//! Fast geometric queries for cubic bezier curves and the paths built from
//! them: flattening to polylines, arc length and its inverse, curve/curve
//! and curve/line intersection, closest-point searches, trimming and curve
//! fitting.
//!
//! The engine is stateless: every operation is a pure function of its
//! inputs plus a caller-supplied tolerance, so queries can be made from any
//! number of threads at once (provided the host does not mutate the curve
//! data while a query is in flight).

pub mod bezier;
pub mod line;

pub mod consts;
pub use self::consts::*;

pub mod error;
pub use self::error::*;

pub mod coordinate;
pub use self::coordinate::*;

pub mod geo;
pub use self::geo::*;

pub use self::bezier::BezierCurve;
pub use self::bezier::BezierCurveFactory;
pub use self::line::Line;
