//! Fixed-point scales of the control fields and the conversions between them.
//!
//! A `Q<N>` integer stores `real * 2^N`. Each field group of the control
//! records has its scale fixed here, so code that rescales between fields
//! refers to a name instead of repeating a shift amount. The float helpers
//! follow `silk/float/SigProc_FLP.h`: analysis done in floating point is
//! brought into the record with round-half-even and saturation.

use core::cmp::Ordering;

use libm::{ldexpf, rintf};

/// Quantised and unquantised subframe gains.
pub const GAIN_Q: u32 = 16;
/// Short-term prediction coefficients.
pub const PRED_COEF_Q: u32 = 12;
/// Long-term prediction taps.
pub const LTP_COEF_Q: u32 = 14;
/// Long-term prediction state scale.
pub const LTP_SCALE_Q: u32 = 14;
/// Noise-shaping AR filter coefficients (`AR1`/`AR2`).
pub const SHAPE_AR_Q: u32 = 13;
/// Low-frequency shaping, pre-shaping gain, harmonic boost, tilt and harmonic shape gain.
pub const SHAPE_Q: u32 = 14;
/// Rate/distortion trade-off.
pub const LAMBDA_Q: u32 = 10;
/// Input and coding quality estimates.
pub const QUALITY_Q: u32 = 14;
/// Spectral sparseness measure.
pub const SPARSENESS_Q: u32 = 8;
/// Short-term prediction gain.
pub const PRED_GAIN_Q: u32 = 16;
/// Long-term prediction coding gain.
pub const LT_PRED_COD_GAIN_Q: u32 = 7;

/// One in each of the common scales.
pub const ONE_Q7: i32 = 1 << LT_PRED_COD_GAIN_Q;
pub const ONE_Q10: i32 = 1 << LAMBDA_Q;
pub const ONE_Q12: i32 = 1 << PRED_COEF_Q;
pub const ONE_Q13: i32 = 1 << SHAPE_AR_Q;
pub const ONE_Q14: i32 = 1 << SHAPE_Q;
pub const ONE_Q16: i32 = 1 << GAIN_Q;

/// Compile-time conversion of a real constant into `Q<q>`.
///
/// Mirrors `SILK_FIX_CONST`: adds one half and truncates toward zero, so
/// negative constants round the same way as the reference tables.
#[must_use]
pub const fn fix_const(value: f64, q: u32) -> i32 {
    (value * (1i64 << q) as f64 + 0.5) as i32
}

/// Float to integer conversion rounding half to even, like `lrintf`.
///
/// Out-of-range values saturate at the `i32` limits and NaN maps to zero.
#[inline]
#[must_use]
pub fn float2int(value: f32) -> i32 {
    rintf(value) as i32
}

/// Converts a real value into `Q<q>`, saturating at the `i32` range.
#[inline]
#[must_use]
pub fn float_to_q(value: f32, q: u32) -> i32 {
    float2int(ldexpf(value, exponent(q)))
}

/// Converts a real value into a 16-bit `Q<q>` coefficient, saturating at the `i16` range.
#[inline]
#[must_use]
pub fn float_to_q_i16(value: f32, q: u32) -> i16 {
    float_to_q(value, q).clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

/// Fills `out` with the `Q<q>` representation of `input`.
pub fn float_to_q_i16_array(out: &mut [i16], input: &[f32], q: u32) {
    assert_eq!(
        out.len(),
        input.len(),
        "output and input slices must have matching lengths"
    );

    for (dst, &src) in out.iter_mut().zip(input.iter()) {
        *dst = float_to_q_i16(src, q);
    }
}

/// Real value stored by a `Q<q>` integer.
#[inline]
#[must_use]
pub fn q_to_float(value: i32, q: u32) -> f32 {
    ldexpf(value as f32, -exponent(q))
}

fn exponent(q: u32) -> i32 {
    i32::try_from(q).unwrap_or(i32::MAX)
}

/// Moves a value from `Q<from>` to `Q<to>`, rounding when precision is dropped.
///
/// Widening saturates at the `i32` range and narrowing by 32 bits or more
/// rounds to zero, so any pair of scales is accepted.
#[must_use]
pub fn rescale(value: i32, from: u32, to: u32) -> i32 {
    let wide = i64::from(value);
    let scaled = match from.cmp(&to) {
        Ordering::Equal => return value,
        Ordering::Less => {
            let shift = to - from;
            if shift >= 32 {
                return match value.cmp(&0) {
                    Ordering::Equal => 0,
                    Ordering::Greater => i32::MAX,
                    Ordering::Less => i32::MIN,
                };
            }
            wide << shift
        }
        Ordering::Greater => {
            let shift = (from - to).min(63);
            ((wide >> (shift - 1)) + 1) >> 1
        }
    };
    scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
