//! IEEE-754 remainder built on the fmod pipeline.
//!
//! The dividend is reduced modulo 2p first, so the correction step works on
//! a bounded magnitude whatever the original exponent gap; at most two
//! conditional subtractions then land the result within p/2, and the
//! dividend's sign is restored last.

use super::{fabs, fmod, hi_word, lo_word, set_hi_word};

const SIGN_BIT_HI: u32 = 0x8000_0000;
const EXP_MASK_HI: u32 = 0x7ff0_0000;

/// Largest divisor high word with |p| < 2^1023, one binade below the top of
/// the finite range, so p + p cannot overflow to infinity. Above it the
/// fmod(x, 2p) pre-reduction is skipped; |x| is finite and already < 2p.
const DOUBLING_SAFE_HI: u32 = 0x7fdf_ffff;
/// Divisor high words below this bound have |p| < 2^-1021, within one binade
/// of the normal floor, where 0.5 * p can drop the lowest mantissa bit going
/// subnormal. The comparison doubles x instead of halving p there.
const HALVING_SAFE_HI: u32 = 0x0020_0000;

pub fn remainder(x: f64, p: f64) -> f64 {
    let mut hx = hi_word(x);
    let lx = lo_word(x);
    let mut hp = hi_word(p);
    let lp = lo_word(p);
    let sx = hx & SIGN_BIT_HI;
    hp &= !SIGN_BIT_HI;
    hx &= !SIGN_BIT_HI;

    // p = 0, x not finite, or p NaN
    if (hp | lp) == 0 {
        return (x * p) / (x * p);
    }
    if hx >= EXP_MASK_HI || (hp >= EXP_MASK_HI && ((hp - EXP_MASK_HI) | lp) != 0) {
        return (x * p) / (x * p);
    }

    let mut x = x;
    if hp <= DOUBLING_SAFE_HI {
        x = fmod(x, p + p); // now |x| < 2p
    }
    if (hx.wrapping_sub(hp) | lx.wrapping_sub(lp)) == 0 {
        return 0.0 * x; // |x| == |p|
    }

    let mut x = fabs(x);
    let p = fabs(p);
    if hp < HALVING_SAFE_HI {
        if x + x > p {
            x -= p;
            if x + x >= p {
                x -= p;
            }
        }
    } else {
        let p_half = 0.5 * p;
        if x > p_half {
            x -= p;
            if x >= p_half {
                x -= p;
            }
        }
    }
    // Flip the stored sign bit back to the dividend's: the correction may
    // have left a negative magnitude, which the xor also handles.
    set_hi_word(x, hi_word(x) ^ sx)
}
