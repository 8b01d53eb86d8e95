//! fmod(x,y): remainder with the dividend's sign, |result| < |y|.
//!
//! The operands are reduced by restoring division on their significands,
//! held as (hi, lo) word pairs with the implicit leading bit made explicit.
//! Every step is an integer shift or subtract, so the result is exact no
//! matter how far apart the exponents sit; a floating subtract-in-a-loop
//! would round at every step once the gap exceeds 53 bits.

use super::ilogb::ilogb_words;
use super::{hi_word, lo_word, trace_words, with_hi_lo};

const SIGN_BIT_HI: u32 = 0x8000_0000;
const EXP_MASK_HI: u32 = 0x7ff0_0000;
const IMPLICIT_BIT_HI: u32 = 0x0010_0000;
const MANT_MASK_HI: u32 = 0x000f_ffff;

/// Signed zeros indexed by the dividend's sign bit.
const ZERO: [f64; 2] = [0.0, -0.0];

/// Make the implicit leading bit explicit at bit 20 of the high word. A
/// subnormal pair is left-shifted as one 64-bit quantity until the leading 1
/// reaches that position, so the reduction loop never sees a subnormal
/// encoding.
#[inline(always)]
fn normalize(hi: u32, lo: u32, exp: i32) -> (u32, u32) {
    if exp >= -1022 {
        (IMPLICIT_BIT_HI | (hi & MANT_MASK_HI), lo)
    } else {
        let n = (-1022 - exp) as u32;
        if n <= 31 {
            ((hi << n) | (lo >> (32 - n)), lo << n)
        } else {
            (lo << (n - 32), 0)
        }
    }
}

/// 64-bit trial subtraction across the word pair, low-word borrow propagated
/// into the high word. `None` when it would borrow past the top, i.e.
/// (hx,lx) < (hy,ly).
#[inline(always)]
fn sub_words(hx: u32, lx: u32, hy: u32, ly: u32) -> Option<(u32, u32)> {
    let (lz, borrow) = lx.overflowing_sub(ly);
    let hy = hy + borrow as u32;
    if hx < hy {
        None
    } else {
        Some((hx - hy, lz))
    }
}

/// Double the pair: one-bit left shift, carrying the low word's top bit.
#[inline(always)]
fn shl1_words(hi: u32, lo: u32) -> (u32, u32) {
    ((hi << 1) | (lo >> 31), lo << 1)
}

/// Rebuild a binary64 from the remainder pair: shift the leading bit back to
/// position 20, re-bias the exponent and restore the sign. Results below the
/// normal range are shifted right into subnormal position.
fn reconstruct(mut hx: u32, mut lx: u32, mut exp: i32, sx: u32) -> f64 {
    if (hx | lx) == 0 {
        return ZERO[(sx >> 31) as usize];
    }
    while hx < IMPLICIT_BIT_HI {
        let (h, l) = shl1_words(hx, lx);
        hx = h;
        lx = l;
        exp -= 1;
    }
    let out = if exp >= -1022 {
        let hi = (hx - IMPLICIT_BIT_HI) | (((exp + 1023) as u32) << 20);
        with_hi_lo(hi | sx, lx)
    } else {
        let n = (-1022 - exp) as u32;
        if n <= 20 {
            lx = (lx >> n) | (hx << (32 - n));
            hx >>= n;
        } else if n <= 31 {
            lx = (hx << (32 - n)) | (lx >> n);
            hx = 0;
        } else {
            lx = hx >> (n - 32);
            hx = 0;
        }
        let sub = with_hi_lo(hx | sx, lx);
        sub * 1.0 // raise the underflow signal for the subnormal result
    };
    trace_words!("fmod reconstructed", hi_word(out), lo_word(out));
    out
}

pub fn fmod(x: f64, y: f64) -> f64 {
    let mut hx = hi_word(x);
    let lx = lo_word(x);
    let mut hy = hi_word(y);
    let ly = lo_word(y);
    let sx = hx & SIGN_BIT_HI;
    hx ^= sx;
    hy &= !SIGN_BIT_HI;
    trace_words!("fmod pre-filter |x|", hx, lx);
    trace_words!("fmod pre-filter |y|", hy, ly);

    // y = 0, x not finite, or y NaN: let the hardware build the NaN so its
    // payload conventions survive.
    if (hy | ly) == 0 || hx >= EXP_MASK_HI || hy > EXP_MASK_HI || (hy == EXP_MASK_HI && ly != 0) {
        return (x * y) / (x * y);
    }

    if hx <= hy {
        if hx < hy || lx < ly {
            return x; // |x| < |y|: already reduced
        }
        if lx == ly {
            return ZERO[(sx >> 31) as usize]; // |x| == |y|
        }
    }

    let ix = ilogb_words(hx, lx);
    let iy = ilogb_words(hy, ly);
    let (mut hx, mut lx) = normalize(hx, lx, ix);
    let (hy, ly) = normalize(hy, ly, iy);
    trace_words!("fmod normalized x", hx, lx);
    trace_words!("fmod normalized y", hy, ly);

    // Restoring division on the significands, one quotient bit per exponent
    // step. The quotient bits are discarded; only the remainder is carried.
    for _ in 0..(ix - iy) {
        match sub_words(hx, lx, hy, ly) {
            None => {
                let (h, l) = shl1_words(hx, lx);
                hx = h;
                lx = l;
            }
            Some((0, 0)) => return ZERO[(sx >> 31) as usize], // exact multiple
            Some((hz, lz)) => {
                let (h, l) = shl1_words(hz, lz);
                hx = h;
                lx = l;
            }
        }
    }
    // The loop doubles one step past the last aligned position; a final
    // trial subtraction settles that bit. Freshly scoped so the
    // zero-iteration case never touches loop-local state.
    if let Some((hz, lz)) = sub_words(hx, lx, hy, ly) {
        hx = hz;
        lx = lz;
    }
    trace_words!("fmod post-loop", hx, lx);

    reconstruct(hx, lx, iy, sx)
}
