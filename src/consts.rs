/// Length we consider a small distance (points closer than this far apart are considered to be the same)
pub const SMALL_DISTANCE: f64 = 0.001;

/// Length we consider a 'close' distance (we may round to this precision or cut out points that are closer than this)
pub const CLOSE_DISTANCE: f64 = 0.01;

/// Maximum recursion depth used when bisecting a curve (flattening and intersection searches)
///
/// Numerically degenerate curves stop subdividing at this depth and the best approximation
/// found so far is used instead.
pub const MAX_SUBDIVISION_DEPTH: usize = 32;

/// Maximum number of Newton-Raphson steps used when refining an intersection estimate
pub const MAX_REFINE_STEPS: usize = 12;
