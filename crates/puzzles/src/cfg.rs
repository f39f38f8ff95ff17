//! Tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants, same as the judges use. If a problem ever needs a
//!   different tolerance it gets its own constant here rather than a knob.

/// Absolute tolerance for comparing numeric answer tokens.
pub const ABS_TOL: f64 = 1e-6;
/// Relative tolerance for comparing numeric answer tokens.
pub const REL_TOL: f64 = 1e-6;
/// Decimal places printed for the 3D printer volume.
pub(crate) const VOLUME_DECIMALS: usize = 2;
/// Upper bound on up-front allocation sized from an untrusted input count.
pub(crate) const MAX_PREALLOC: usize = 1 << 20;
