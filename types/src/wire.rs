//! Float wire convention for compiled artifacts.
//!
//! Animator curves and parameter-drive actions store booleans as floats:
//! `1.0 = true`, `0.0 = false`. This is a fixed host convention; model types
//! use real bools and convert only at the artifact boundary.

/// Wire value for `true`.
pub const WIRE_TRUE: f32 = 1.0;

/// Wire value for `false`.
pub const WIRE_FALSE: f32 = 0.0;

/// Encode a model bool for a compiled artifact.
pub fn to_wire(value: bool) -> f32 {
    if value { WIRE_TRUE } else { WIRE_FALSE }
}

/// Decode a compiled-artifact float back into a model bool.
pub fn from_wire(value: f32) -> bool {
    value == WIRE_TRUE
}
