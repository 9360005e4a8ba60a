//! Decoder per-frame control structure.
//!
//! Mirrors `silk_decoder_control` from `silk/structs.h`: the subset of the
//! encoder's control fields that the decoder reconstructs from the bitstream
//! before running synthesis. Shares extents and Q-formats with
//! [`EncoderControl`](crate::silk::encoder::control::EncoderControl).

use crate::silk::define::{LTP_ORDER, MAX_LPC_ORDER, MAX_NB_SUBFR};
use crate::silk::encoder::control::EncoderControl;

/// Prediction and gain parameters decoded for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderControl {
    /// Pitch lags per subframe (in samples).
    pub pitch_l: [i32; MAX_NB_SUBFR],
    /// Q16 gains per subframe.
    pub gains_q16: [i32; MAX_NB_SUBFR],
    /// LPC coefficients in Q12: row 0 interpolated, row 1 final.
    pub pred_coef_q12: [[i16; MAX_LPC_ORDER]; 2],
    /// LTP taps in Q14, `LTP_ORDER` per subframe.
    pub ltp_coef_q14: [i16; LTP_ORDER * MAX_NB_SUBFR],
    /// Q14 LTP scaling factor.
    pub ltp_scale_q14: i32,
}

impl DecoderControl {
    /// All-zero record.
    pub const ZERO: Self = Self {
        pitch_l: [0; MAX_NB_SUBFR],
        gains_q16: [0; MAX_NB_SUBFR],
        pred_coef_q12: [[0; MAX_LPC_ORDER]; 2],
        ltp_coef_q14: [0; LTP_ORDER * MAX_NB_SUBFR],
        ltp_scale_q14: 0,
    };

    /// Creates a zeroed record.
    #[must_use]
    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Zeroes every field.
    pub fn reset(&mut self) {
        self.pitch_l.fill(0);
        self.gains_q16.fill(0);
        for row in &mut self.pred_coef_q12 {
            row.fill(0);
        }
        self.ltp_coef_q14.fill(0);
        self.ltp_scale_q14 = 0;
    }

    /// Returns `true` when every field is zero.
    #[must_use]
    pub fn is_zeroed(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Default for DecoderControl {
    fn default() -> Self {
        Self::ZERO
    }
}

/// What a decoder reconstructs from a frame the encoder described with `control`.
impl From<&EncoderControl> for DecoderControl {
    fn from(control: &EncoderControl) -> Self {
        Self {
            pitch_l: control.pitch_l,
            gains_q16: control.gains_q16,
            pred_coef_q12: control.pred_coef_q12,
            ltp_coef_q14: control.ltp_coef_q14,
            ltp_scale_q14: control.ltp_scale_q14,
        }
    }
}
