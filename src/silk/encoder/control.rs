//! Encoder per-frame control structure.
//!
//! Mirrors `silk_encoder_control_FIX` from `silk/fixed/structs_FIX.h`. The
//! analysis stage (pitch search, LPC/LTP estimation, noise-shape analysis and
//! gain processing) writes every field once per frame; the noise-shaping
//! quantiser then reads them without modification. Extents are fixed by the
//! constants in [`crate::silk::define`] and the Q-format of each field is part
//! of its name (see [`crate::silk::q_format`]).
//!
//! One record belongs to one encoder channel and is reused for every frame.
//! [`EncoderControl::reset`] clears it at the start of each frame.

use crate::silk::define::{LTP_ORDER, MAX_LPC_ORDER, MAX_NB_SUBFR, MAX_SHAPE_LPC_ORDER};
use crate::silk::shaping::LowFreqShaping;

const SHAPE_COEF_LEN: usize = MAX_NB_SUBFR * MAX_SHAPE_LPC_ORDER;
const LTP_COEF_LEN: usize = MAX_NB_SUBFR * LTP_ORDER;

// The two `pred_coef_q12` rows each cover half of the subframes.
const _: () = assert!(MAX_NB_SUBFR.is_multiple_of(2));
const _: () = assert!(MAX_LPC_ORDER >= crate::silk::define::MIN_LPC_ORDER);
// Shaping filters are run two taps at a time.
const _: () = assert!(MAX_SHAPE_LPC_ORDER.is_multiple_of(2));

/// Working state produced by the encoder analysis path each frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncoderControl {
    // Prediction and coding parameters
    /// Q16 gains per subframe, as used for synthesis.
    pub gains_q16: [i32; MAX_NB_SUBFR],
    /// LPC predictor coefficients in Q12: row 0 interpolated, row 1 final.
    pub pred_coef_q12: [[i16; MAX_LPC_ORDER]; 2],
    /// LTP predictor taps in Q14, `LTP_ORDER` per subframe.
    pub ltp_coef_q14: [i16; LTP_COEF_LEN],
    /// Q14 LTP scaling factor.
    pub ltp_scale_q14: i32,
    /// Pitch lags per subframe (in samples).
    pub pitch_l: [i32; MAX_NB_SUBFR],

    // Noise shaping parameters
    /// First shaping AR filter, `MAX_SHAPE_LPC_ORDER` Q13 taps per subframe.
    pub ar1_q13: [i16; SHAPE_COEF_LEN],
    /// Second shaping AR filter, `MAX_SHAPE_LPC_ORDER` Q13 taps per subframe.
    pub ar2_q13: [i16; SHAPE_COEF_LEN],
    /// Low-frequency shaping AR/MA pairs in Q14.
    pub lf_shp_q14: [LowFreqShaping; MAX_NB_SUBFR],
    /// Pre-shaping gains in Q14.
    pub gains_pre_q14: [i32; MAX_NB_SUBFR],
    /// Harmonic boost in Q14.
    pub harm_boost_q14: [i32; MAX_NB_SUBFR],
    /// Per-subframe spectral tilt in Q14.
    pub tilt_q14: [i32; MAX_NB_SUBFR],
    /// Per-subframe harmonic shape gain in Q14.
    pub harm_shape_gain_q14: [i32; MAX_NB_SUBFR],
    /// Rate/distortion trade-off lambda in Q10.
    pub lambda_q10: i32,
    /// Input-quality metric in Q14.
    pub input_quality_q14: i32,
    /// Coding-quality metric in Q14.
    pub coding_quality_q14: i32,

    // Measures
    /// Spectral sparseness in Q8.
    pub sparseness_q8: i32,
    /// Predicted coding gain in Q16.
    pub pred_gain_q16: i32,
    /// Long-term prediction coding gain in Q7.
    pub lt_pred_cod_gain_q7: i32,
    /// Residual energies per subframe, each in Q`res_nrg_q[k]`.
    pub res_nrg: [i32; MAX_NB_SUBFR],
    /// Q-domain for each residual energy entry.
    pub res_nrg_q: [i32; MAX_NB_SUBFR],

    // Parameters for CBR mode
    /// Unquantised gains in Q16 (before scalar quantisation).
    pub gains_unq_q16: [i32; MAX_NB_SUBFR],
    /// Channel gain index captured before this frame's gains were quantised.
    pub last_gain_index_prev: i8,
}

impl EncoderControl {
    /// All-zero record.
    pub const ZERO: Self = Self {
        gains_q16: [0; MAX_NB_SUBFR],
        pred_coef_q12: [[0; MAX_LPC_ORDER]; 2],
        ltp_coef_q14: [0; LTP_COEF_LEN],
        ltp_scale_q14: 0,
        pitch_l: [0; MAX_NB_SUBFR],
        ar1_q13: [0; SHAPE_COEF_LEN],
        ar2_q13: [0; SHAPE_COEF_LEN],
        lf_shp_q14: [LowFreqShaping::ZERO; MAX_NB_SUBFR],
        gains_pre_q14: [0; MAX_NB_SUBFR],
        harm_boost_q14: [0; MAX_NB_SUBFR],
        tilt_q14: [0; MAX_NB_SUBFR],
        harm_shape_gain_q14: [0; MAX_NB_SUBFR],
        lambda_q10: 0,
        input_quality_q14: 0,
        coding_quality_q14: 0,
        sparseness_q8: 0,
        pred_gain_q16: 0,
        lt_pred_cod_gain_q7: 0,
        res_nrg: [0; MAX_NB_SUBFR],
        res_nrg_q: [0; MAX_NB_SUBFR],
        gains_unq_q16: [0; MAX_NB_SUBFR],
        last_gain_index_prev: 0,
    };

    /// Creates a zeroed record.
    #[must_use]
    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Zeroes every field, `last_gain_index_prev` included.
    ///
    /// Valid in any state, including after a partially populated frame.
    /// Extents never change and nothing is allocated.
    pub fn reset(&mut self) {
        self.gains_q16.fill(0);
        for row in &mut self.pred_coef_q12 {
            row.fill(0);
        }
        self.ltp_coef_q14.fill(0);
        self.ltp_scale_q14 = 0;
        self.pitch_l.fill(0);
        self.ar1_q13.fill(0);
        self.ar2_q13.fill(0);
        self.lf_shp_q14.fill(LowFreqShaping::ZERO);
        self.gains_pre_q14.fill(0);
        self.harm_boost_q14.fill(0);
        self.tilt_q14.fill(0);
        self.harm_shape_gain_q14.fill(0);
        self.lambda_q10 = 0;
        self.input_quality_q14 = 0;
        self.coding_quality_q14 = 0;
        self.sparseness_q8 = 0;
        self.pred_gain_q16 = 0;
        self.lt_pred_cod_gain_q7 = 0;
        self.res_nrg.fill(0);
        self.res_nrg_q.fill(0);
        self.gains_unq_q16.fill(0);
        self.last_gain_index_prev = 0;
    }

    /// Returns `true` when every field is zero.
    #[must_use]
    pub fn is_zeroed(&self) -> bool {
        *self == Self::ZERO
    }

    /// Short-term predictor for subframe `k`.
    ///
    /// With NLSF interpolation active the first half of the frame uses the
    /// interpolated row; otherwise every subframe uses the final row.
    #[must_use]
    pub fn pred_coef_for_subframe(&self, k: usize, order: usize, interpolated: bool) -> &[i16] {
        assert!(k < MAX_NB_SUBFR, "subframe index out of range");
        assert!(order <= MAX_LPC_ORDER, "prediction order exceeds record extent");
        let row = (k >> 1) | usize::from(!interpolated);
        &self.pred_coef_q12[row][..order]
    }

    /// LTP taps of subframe `k`.
    #[must_use]
    pub fn ltp_coef_for_subframe(&self, k: usize) -> &[i16] {
        assert!(k < MAX_NB_SUBFR, "subframe index out of range");
        &self.ltp_coef_q14[k * LTP_ORDER..(k + 1) * LTP_ORDER]
    }

    /// Mutable LTP taps of subframe `k`.
    pub fn ltp_coef_for_subframe_mut(&mut self, k: usize) -> &mut [i16] {
        assert!(k < MAX_NB_SUBFR, "subframe index out of range");
        &mut self.ltp_coef_q14[k * LTP_ORDER..(k + 1) * LTP_ORDER]
    }

    /// First shaping filter of subframe `k`, truncated to `order` taps.
    #[must_use]
    pub fn ar1_for_subframe(&self, k: usize, order: usize) -> &[i16] {
        &self.ar1_q13[shape_range(k, order)]
    }

    /// Mutable first shaping filter of subframe `k`.
    pub fn ar1_for_subframe_mut(&mut self, k: usize, order: usize) -> &mut [i16] {
        &mut self.ar1_q13[shape_range(k, order)]
    }

    /// Second shaping filter of subframe `k`, truncated to `order` taps.
    #[must_use]
    pub fn ar2_for_subframe(&self, k: usize, order: usize) -> &[i16] {
        &self.ar2_q13[shape_range(k, order)]
    }

    /// Mutable second shaping filter of subframe `k`.
    pub fn ar2_for_subframe_mut(&mut self, k: usize, order: usize) -> &mut [i16] {
        &mut self.ar2_q13[shape_range(k, order)]
    }

    /// Low-frequency shaping pairs in the packed word layout read by the quantiser.
    ///
    /// Entries past `nb_subfr` are zero.
    #[must_use]
    pub fn lf_shp_packed(&self, nb_subfr: usize) -> [i32; MAX_NB_SUBFR] {
        assert!(nb_subfr <= MAX_NB_SUBFR, "subframe count out of range");
        let mut packed = [0i32; MAX_NB_SUBFR];
        for (dst, pair) in packed.iter_mut().zip(&self.lf_shp_q14).take(nb_subfr) {
            *dst = pair.pack();
        }
        packed
    }

    /// Stores the gains ahead of quantisation for constant-bitrate correction.
    ///
    /// Copies the live part of `gains_q16` into `gains_unq_q16` and records the
    /// channel's gain index so a rejected rate-control iteration can restore it.
    pub fn save_unquantized_gains(&mut self, nb_subfr: usize, last_gain_index: i8) {
        assert!(nb_subfr <= MAX_NB_SUBFR, "subframe count out of range");
        self.gains_unq_q16[..nb_subfr].copy_from_slice(&self.gains_q16[..nb_subfr]);
        self.last_gain_index_prev = last_gain_index;
    }
}

impl Default for EncoderControl {
    fn default() -> Self {
        Self::ZERO
    }
}

fn shape_range(k: usize, order: usize) -> core::ops::Range<usize> {
    assert!(k < MAX_NB_SUBFR, "subframe index out of range");
    assert!(order <= MAX_SHAPE_LPC_ORDER, "shaping order exceeds record extent");
    let start = k * MAX_SHAPE_LPC_ORDER;
    start..start + order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_scalars_and_arrays() {
        let mut control = EncoderControl::new();
        control.lambda_q10 = 1_024;
        control.pitch_l = [80, 81, 82, 83];
        control.pred_coef_q12[1][MAX_LPC_ORDER - 1] = -7;
        control.lf_shp_q14[3] = LowFreqShaping::new(1, -1);
        control.last_gain_index_prev = 12;

        control.reset();

        assert!(control.is_zeroed());
        assert_eq!(control, EncoderControl::default());
    }

    #[test]
    fn pred_coef_row_follows_interpolation_flag() {
        let mut control = EncoderControl::new();
        control.pred_coef_q12[0].fill(100);
        control.pred_coef_q12[1].fill(200);

        let rows: [i16; MAX_NB_SUBFR] =
            core::array::from_fn(|k| control.pred_coef_for_subframe(k, 10, true)[0]);
        assert_eq!(rows, [100, 100, 200, 200]);

        let rows: [i16; MAX_NB_SUBFR] =
            core::array::from_fn(|k| control.pred_coef_for_subframe(k, 10, false)[0]);
        assert_eq!(rows, [200; MAX_NB_SUBFR]);

        assert_eq!(control.pred_coef_for_subframe(0, 10, true).len(), 10);
    }

    #[test]
    fn subframe_views_do_not_overlap() {
        let mut control = EncoderControl::new();
        for k in 0..MAX_NB_SUBFR {
            control.ltp_coef_for_subframe_mut(k).fill(k as i16 + 1);
            control.ar1_for_subframe_mut(k, 16).fill(10 * (k as i16 + 1));
            control.ar2_for_subframe_mut(k, 16).fill(-10 * (k as i16 + 1));
        }

        for k in 0..MAX_NB_SUBFR {
            assert!(control.ltp_coef_for_subframe(k).iter().all(|&c| c == k as i16 + 1));
            assert_eq!(control.ar1_for_subframe(k, 16), &[10 * (k as i16 + 1); 16]);
            assert_eq!(control.ar2_for_subframe(k, 16), &[-10 * (k as i16 + 1); 16]);
            let tail = &control.ar1_q13[k * MAX_SHAPE_LPC_ORDER + 16..(k + 1) * MAX_SHAPE_LPC_ORDER];
            assert!(tail.iter().all(|&c| c == 0));
        }
    }

    #[test]
    #[should_panic(expected = "subframe index out of range")]
    fn subframe_index_is_bounds_checked() {
        let control = EncoderControl::new();
        let _ = control.ltp_coef_for_subframe(MAX_NB_SUBFR);
    }

    #[test]
    #[should_panic(expected = "shaping order exceeds record extent")]
    fn shaping_order_is_bounds_checked() {
        let control = EncoderControl::new();
        let _ = control.ar2_for_subframe(0, MAX_SHAPE_LPC_ORDER + 1);
    }

    #[test]
    fn packed_lf_shaping_only_covers_live_subframes() {
        let mut control = EncoderControl::new();
        control.lf_shp_q14 = [LowFreqShaping::new(2, -3); MAX_NB_SUBFR];
        let packed = control.lf_shp_packed(2);
        assert_eq!(packed[0], (2 << 16) | 0xFFFD);
        assert_eq!(packed[1], packed[0]);
        assert_eq!(&packed[2..], &[0, 0]);
    }

    #[test]
    fn unquantized_gain_snapshot_covers_live_subframes() {
        let mut control = EncoderControl::new();
        control.gains_q16 = [65_536, 98_304, 147_456, 229_376];
        control.save_unquantized_gains(2, 10);
        assert_eq!(control.gains_unq_q16, [65_536, 98_304, 0, 0]);
        assert_eq!(control.last_gain_index_prev, 10);

        control.save_unquantized_gains(MAX_NB_SUBFR, 6);
        assert_eq!(control.gains_unq_q16, control.gains_q16);
        assert_eq!(control.last_gain_index_prev, 6);
    }
}
