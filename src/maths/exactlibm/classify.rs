use super::{hi_word, lo_word};

const SIGN_BIT_HI: u32 = 0x8000_0000;
const EXP_MASK_HI: u32 = 0x7ff0_0000;
const MANT_MASK_HI: u32 = 0x000f_ffff;

pub const FP_NAN: i32 = 0;
pub const FP_INFINITE: i32 = 1;
pub const FP_ZERO: i32 = 2;
pub const FP_SUBNORMAL: i32 = 3;
pub const FP_NORMAL: i32 = 4;

#[inline(always)]
pub fn isfinite(x: f64) -> bool {
    (hi_word(x) & EXP_MASK_HI) != EXP_MASK_HI
}

#[inline(always)]
pub fn isinf(x: f64) -> bool {
    (hi_word(x) & !SIGN_BIT_HI) == EXP_MASK_HI && lo_word(x) == 0
}

#[inline(always)]
pub fn isnan(x: f64) -> bool {
    let hx = hi_word(x) & !SIGN_BIT_HI;
    hx > EXP_MASK_HI || (hx == EXP_MASK_HI && lo_word(x) != 0)
}

#[inline(always)]
pub fn signbit(x: f64) -> bool {
    (hi_word(x) >> 31) != 0
}

#[inline(always)]
pub fn fpclassify(x: f64) -> i32 {
    let hx = hi_word(x);
    let e = (hx >> 20) & 0x7ff;
    let mant = (hx & MANT_MASK_HI) | lo_word(x);
    if e == 0x7ff {
        if mant == 0 { FP_INFINITE } else { FP_NAN }
    } else if e == 0 {
        if mant == 0 { FP_ZERO } else { FP_SUBNORMAL }
    } else {
        FP_NORMAL
    }
}
