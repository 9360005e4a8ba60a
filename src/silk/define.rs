//! Frame geometry constants shared by the encoder control records.
//!
//! Mirrors the subset of `silk/define.h` that fixes the extents of the
//! per-frame control arrays. Every array in [`EncoderControl`] and
//! [`DecoderControl`] is sized from these values, so analysis and quantisation
//! agree on the layout without passing lengths around.
//!
//! [`EncoderControl`]: crate::silk::encoder::control::EncoderControl
//! [`DecoderControl`]: crate::silk::decoder_control::DecoderControl

/// Maximum number of subframes per frame (20 ms frames use four).
pub const MAX_NB_SUBFR: usize = 4;

/// Short-term prediction order used at 16 kHz.
pub const MAX_LPC_ORDER: usize = 16;

/// Short-term prediction order used at 8 and 12 kHz.
pub const MIN_LPC_ORDER: usize = 10;

/// Number of taps in the long-term (pitch) predictor.
pub const LTP_ORDER: usize = 5;

/// Maximum order of the noise-shaping AR filters.
pub const MAX_SHAPE_LPC_ORDER: usize = 24;

/// Subframe duration in milliseconds.
pub const SUB_FRAME_LENGTH_MS: usize = 5;

/// Longest frame handled in a single call, in milliseconds.
pub const MAX_FRAME_LENGTH_MS: usize = SUB_FRAME_LENGTH_MS * MAX_NB_SUBFR;

/// Highest internal sampling rate in kHz.
pub const MAX_FS_KHZ: usize = 16;

/// Number of independent encoder channels (stereo).
pub const ENCODER_NUM_CHANNELS: usize = 2;

/// Gain index a channel starts from after (re)initialisation.
pub const INITIAL_LAST_GAIN_INDEX: i8 = 10;
