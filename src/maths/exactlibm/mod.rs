//! Bit-level binary64 remainder routines.
//!
//! fdlibm-style word-pair implementations: each f64 is taken apart into a
//! (hi, lo) pair of 32-bit words, where `hi` carries the sign, the 11-bit
//! biased exponent and the top 20 mantissa bits and `lo` the remaining 32
//! mantissa bits. The split is fixed by convention here, not by host byte
//! order, and goes through `to_bits`/`from_bits` rather than aliasing.

mod classify;
mod fmod;
mod ilogb;
mod remainder;

pub use classify::{
    fpclassify, isfinite, isinf, isnan, signbit, FP_INFINITE, FP_NAN, FP_NORMAL, FP_SUBNORMAL,
    FP_ZERO,
};
pub use fmod::fmod;
pub use ilogb::{ilogb, FP_ILOGB0, FP_ILOGBNAN};
pub use remainder::remainder;

// ========= bit helpers =========

const SIGN_MASK: u64 = 0x8000_0000_0000_0000u64;

#[inline(always)]
fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

/// High word: sign bit, biased exponent, top 20 mantissa bits.
#[inline(always)]
fn hi_word(x: f64) -> u32 {
    (f64_to_bits(x) >> 32) as u32
}
/// Low word: bottom 32 mantissa bits.
#[inline(always)]
fn lo_word(x: f64) -> u32 {
    (f64_to_bits(x) & 0xffff_ffffu64) as u32
}
/// Reassemble a value from its two words. Arbitrary patterns, non-canonical
/// NaNs included, pass through unchanged.
#[inline(always)]
fn with_hi_lo(hi: u32, lo: u32) -> f64 {
    f64_from_bits(((hi as u64) << 32) | (lo as u64))
}
/// Overwrite the high word, keeping the low word.
#[inline(always)]
fn set_hi_word(x: f64, hi: u32) -> f64 {
    with_hi_lo(hi, lo_word(x))
}

/// |x| by clearing the sign bit; no libm call.
#[inline(always)]
fn fabs(x: f64) -> f64 {
    f64_from_bits(f64_to_bits(x) & !SIGN_MASK)
}

/// Checkpoint trace of an intermediate word pair. Compiled in only with the
/// `trace` feature; a no-op otherwise.
#[cfg(feature = "trace")]
macro_rules! trace_words {
    ($stage:expr, $hi:expr, $lo:expr) => {
        log::trace!(target: "exactmaths", "{}: hi={:#010x} lo={:#010x}", $stage, $hi, $lo)
    };
}
#[cfg(not(feature = "trace"))]
macro_rules! trace_words {
    ($stage:expr, $hi:expr, $lo:expr) => {{
        let _ = || ($hi, $lo);
    }};
}
pub(crate) use trace_words;
