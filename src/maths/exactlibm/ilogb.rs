//! ilogb(x): unbiased base-2 exponent of the leading significant bit.

use super::{hi_word, lo_word};

const SIGN_BIT_HI: u32 = 0x8000_0000;
const EXP_MASK_HI: u32 = 0x7ff0_0000;
const IMPLICIT_BIT_HI: u32 = 0x0010_0000;

pub const FP_ILOGB0: i32 = i32::MIN;
pub const FP_ILOGBNAN: i32 = i32::MAX;

/// Unbiased exponent of a nonzero finite word pair, sign already stripped.
/// Normal encodings read it straight off the exponent field; subnormals
/// count leading zeros of the stored mantissa against base -1022 while the
/// leading bit is still in the high word, base -1043 once it sits entirely
/// in the low word.
#[inline(always)]
pub(super) fn ilogb_words(hi: u32, lo: u32) -> i32 {
    if hi >= IMPLICIT_BIT_HI {
        ((hi >> 20) as i32) - 1023
    } else if hi == 0 {
        -1043 - lo.leading_zeros() as i32
    } else {
        -1022 - (hi << 11).leading_zeros() as i32
    }
}

#[inline(always)]
pub fn ilogb(x: f64) -> i32 {
    let hx = hi_word(x) & !SIGN_BIT_HI;
    let lx = lo_word(x);
    if (hx | lx) == 0 {
        return FP_ILOGB0;
    }
    if hx >= EXP_MASK_HI {
        return FP_ILOGBNAN;
    }
    ilogb_words(hx, lx)
}
