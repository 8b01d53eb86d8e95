//! Math module re-exports.
//!
//! The remainder routines follow the fdlibm word-pair designs: every f64 is
//! manipulated as two 32-bit words so the reduction stays exact for any
//! exponent gap, with no division anywhere on the hot path. Suitable for
//! no_std.

pub mod exactlibm;
