//! Channel configuration and the frame layout derived from it.
//!
//! Follows `silk/check_control_input.c` for validation and the
//! `setup_fs`/`setup_complexity` steps of `silk/control_codec.c` for deriving
//! how many subframes and which filter orders of the control record a frame
//! actually uses. The control arrays are always allocated at their maximum
//! extents; [`FrameLayout`] says how much of each one is live.

use log::debug;

use crate::silk::define::{
    ENCODER_NUM_CHANNELS, MAX_FRAME_LENGTH_MS, MAX_FS_KHZ, MAX_NB_SUBFR, MAX_SHAPE_LPC_ORDER,
    SUB_FRAME_LENGTH_MS,
};
use crate::silk::errors::SilkError;
use crate::silk::{MAX_LPC_ORDER, MIN_LPC_ORDER};

const INTERNAL_SAMPLE_RATES_KHZ: [u32; 3] = [8, 12, 16];
const PAYLOAD_SIZES_MS: [u32; 4] = [10, 20, 40, 60];
const MAX_COMPLEXITY: u32 = 10;

/// Encoder parameters that fix the shape of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Number of encoded channels; either 1 or 2.
    pub n_channels: usize,
    /// Internal sampling rate in kHz (8, 12 or 16).
    pub fs_khz: u32,
    /// Number of milliseconds per packet (10, 20, 40 or 60).
    pub packet_size_ms: u32,
    /// Complexity setting in the range 0–10.
    pub complexity: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            n_channels: 1,
            fs_khz: 16,
            packet_size_ms: 20,
            complexity: 10,
        }
    }
}

impl EncoderConfig {
    /// Validate the configuration.
    pub fn check(&self) -> Result<(), SilkError> {
        if !INTERNAL_SAMPLE_RATES_KHZ.contains(&self.fs_khz) {
            return Err(SilkError::EncFsNotSupported);
        }

        if !PAYLOAD_SIZES_MS.contains(&self.packet_size_ms) {
            return Err(SilkError::EncPacketSizeNotSupported);
        }

        if self.complexity > MAX_COMPLEXITY {
            return Err(SilkError::EncInvalidComplexitySetting);
        }

        if self.n_channels < 1 || self.n_channels > ENCODER_NUM_CHANNELS {
            return Err(SilkError::EncInvalidNumberOfChannelsError);
        }

        Ok(())
    }

    /// Validate the configuration and derive the per-frame layout.
    pub fn frame_layout(&self) -> Result<FrameLayout, SilkError> {
        if let Err(err) = self.check() {
            debug!("frame_layout: rejecting {self:?}: {err}");
            return Err(err);
        }

        let nb_subfr = if self.packet_size_ms == 10 {
            MAX_NB_SUBFR / 2
        } else {
            MAX_NB_SUBFR
        };
        let predict_lpc_order = if self.fs_khz == 16 {
            MAX_LPC_ORDER
        } else {
            MIN_LPC_ORDER
        };
        let shaping_lpc_order = shaping_order_for_complexity(self.complexity);
        let subfr_length = SUB_FRAME_LENGTH_MS * self.fs_khz as usize;

        FrameLayout::new(nb_subfr, predict_lpc_order, shaping_lpc_order, subfr_length)
    }

    /// Number of 20 ms (or one 10 ms) frames carried by a packet.
    #[must_use]
    pub fn frames_per_packet(&self) -> usize {
        (self.packet_size_ms as usize / MAX_FRAME_LENGTH_MS).max(1)
    }
}

fn shaping_order_for_complexity(complexity: u32) -> usize {
    match complexity {
        0 | 2 => 12,
        1 | 3 => 14,
        4 | 5 => 16,
        6 | 7 => 20,
        _ => MAX_SHAPE_LPC_ORDER,
    }
}

/// Live portion of the control arrays for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    nb_subfr: usize,
    predict_lpc_order: usize,
    shaping_lpc_order: usize,
    subfr_length: usize,
}

impl FrameLayout {
    /// Builds a layout, rejecting anything the control arrays cannot hold.
    pub fn new(
        nb_subfr: usize,
        predict_lpc_order: usize,
        shaping_lpc_order: usize,
        subfr_length: usize,
    ) -> Result<Self, SilkError> {
        if nb_subfr != MAX_NB_SUBFR && nb_subfr != MAX_NB_SUBFR / 2 {
            return Err(SilkError::EncPacketSizeNotSupported);
        }
        if predict_lpc_order != MIN_LPC_ORDER && predict_lpc_order != MAX_LPC_ORDER {
            return Err(SilkError::EncInternalError);
        }
        if shaping_lpc_order == 0
            || shaping_lpc_order > MAX_SHAPE_LPC_ORDER
            || !shaping_lpc_order.is_multiple_of(2)
        {
            return Err(SilkError::EncInternalError);
        }
        if subfr_length == 0 {
            return Err(SilkError::EncInternalError);
        }

        Ok(Self {
            nb_subfr,
            predict_lpc_order,
            shaping_lpc_order,
            subfr_length,
        })
    }

    /// Number of subframes in use (2 or 4).
    #[must_use]
    pub fn nb_subfr(&self) -> usize {
        self.nb_subfr
    }

    /// Short-term prediction order in use.
    #[must_use]
    pub fn predict_lpc_order(&self) -> usize {
        self.predict_lpc_order
    }

    /// Noise-shaping filter order in use.
    #[must_use]
    pub fn shaping_lpc_order(&self) -> usize {
        self.shaping_lpc_order
    }

    /// Samples per subframe.
    #[must_use]
    pub fn subfr_length(&self) -> usize {
        self.subfr_length
    }

    /// Samples per frame.
    #[must_use]
    pub fn frame_length(&self) -> usize {
        self.subfr_length * self.nb_subfr
    }
}

impl Default for FrameLayout {
    fn default() -> Self {
        Self {
            nb_subfr: MAX_NB_SUBFR,
            predict_lpc_order: MAX_LPC_ORDER,
            shaping_lpc_order: MAX_SHAPE_LPC_ORDER,
            subfr_length: SUB_FRAME_LENGTH_MS * MAX_FS_KHZ,
        }
    }
}
