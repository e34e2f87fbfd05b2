use thiserror::Error;

///
/// Errors that can be produced by the geometry operations in this crate
///
/// Approximate-but-usable results (for instance, a flattening that hit the
/// recursion cap) are returned as successes rather than errors, as they
/// still answer the caller's query.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum GeomError {
    /// A parameter was outside the domain of the operation (a `t` value
    /// outside 0..1, or a tolerance that was zero or negative). Indicates a
    /// caller bug and is reported immediately.
    #[error("parameter is outside the domain of this operation")]
    InvalidParameter,

    /// A requested length was beyond the extent of the curve or path. The
    /// caller can recover by clamping the request.
    #[error("requested length is beyond the end of the curve or path")]
    OutOfRange,

    /// Numeric refinement failed to converge within its iteration budget.
    /// The caller can retry with a looser tolerance.
    #[error("numeric refinement did not converge within its iteration budget")]
    NoConvergence,
}
