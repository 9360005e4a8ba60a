//! Interfaces of the two stages that share the control record.
//!
//! The analysis stage receives the record mutably and must populate every
//! field the quantiser reads. The quantisation stage receives it shared and
//! cannot write back. Neither stage may keep the borrow past the call, so a
//! channel's record is never aliased across frames or channels.

use crate::silk::encoder::config::FrameLayout;
use crate::silk::encoder::control::EncoderControl;
use crate::silk::encoder::state::EncoderShapeState;
use crate::silk::errors::SilkError;

/// Per-call description of the frame being encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameContext {
    /// Channel index (0 = left/mid, 1 = right/side).
    pub channel: usize,
    /// Number of frames this channel has completed so far.
    pub frame_index: u64,
    /// Live extents of the control arrays.
    pub layout: FrameLayout,
}

/// Computes prediction, gain and shaping parameters for one frame.
pub trait FrameAnalyzer {
    /// Populates `control` for the frame described by `ctx`.
    ///
    /// `control` is zeroed on entry. `shape` carries the channel's cross-frame
    /// gain memory; the gain step is expected to snapshot it with
    /// [`EncoderControl::save_unquantized_gains`] before quantising gains.
    fn analyze(
        &mut self,
        ctx: &FrameContext,
        shape: &mut EncoderShapeState,
        control: &mut EncoderControl,
    ) -> Result<(), SilkError>;
}

/// Quantises the frame residual and codes it using a populated record.
pub trait FrameQuantizer {
    /// Consumes `control` read-only. `shape` may be rolled back with
    /// [`EncoderShapeState::restore_gain_index`] when a coding attempt is discarded.
    fn quantize(
        &mut self,
        ctx: &FrameContext,
        shape: &mut EncoderShapeState,
        control: &EncoderControl,
    ) -> Result<(), SilkError>;
}
