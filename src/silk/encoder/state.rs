//! Encoder-side channel state.
//!
//! Each channel exclusively owns one [`EncoderControl`] and reuses it for
//! every frame, plus the small amount of memory that has to survive from one
//! frame to the next. [`EncoderChannelState::encode_frame`] fixes the order
//! in which the record is touched: reset, populate, consume.

use log::{debug, trace};

use crate::silk::define::{ENCODER_NUM_CHANNELS, INITIAL_LAST_GAIN_INDEX};
use crate::silk::encoder::config::{EncoderConfig, FrameLayout};
use crate::silk::encoder::control::EncoderControl;
use crate::silk::encoder::stages::{FrameAnalyzer, FrameContext, FrameQuantizer};
use crate::silk::errors::SilkError;

/// Cross-frame noise-shaping memory of one channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncoderShapeState {
    /// Gain index of the last quantised subframe, the base for delta coding.
    pub last_gain_index: i8,
}

impl Default for EncoderShapeState {
    fn default() -> Self {
        Self {
            last_gain_index: INITIAL_LAST_GAIN_INDEX,
        }
    }
}

impl EncoderShapeState {
    /// Rolls the gain index back to the value captured in `control` before
    /// the frame's gains were quantised.
    pub fn restore_gain_index(&mut self, control: &EncoderControl) {
        self.last_gain_index = control.last_gain_index_prev;
    }
}

/// Encoder channel state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct EncoderChannelState {
    layout: FrameLayout,
    control: EncoderControl,
    /// Cross-frame shaping and gain memory.
    pub shape_state: EncoderShapeState,
    n_frames_encoded: u64,
}

impl EncoderChannelState {
    /// Creates a channel with a zeroed control record.
    #[must_use]
    pub fn new(layout: FrameLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Frame layout the channel encodes with.
    #[must_use]
    pub fn layout(&self) -> &FrameLayout {
        &self.layout
    }

    /// Borrow the control record as left by the most recent frame.
    #[must_use]
    pub fn control(&self) -> &EncoderControl {
        &self.control
    }

    /// Number of frames encoded successfully since (re)initialisation.
    #[must_use]
    pub fn frames_encoded(&self) -> u64 {
        self.n_frames_encoded
    }

    /// Updates the live extents without touching per-channel memory.
    ///
    /// Packet-size and complexity changes only alter how much of the record
    /// is in use; the gain index and frame count carry on.
    pub fn set_layout(&mut self, layout: FrameLayout) {
        if self.layout != layout {
            debug!("set_layout: {:?} -> {:?}", self.layout, layout);
            self.layout = layout;
        }
    }

    /// Switches to a new layout, clearing every piece of per-channel memory.
    ///
    /// Mirrors the state reset performed when the internal sampling rate changes.
    pub fn reinitialize(&mut self, layout: FrameLayout) {
        debug!("reinitialize: {:?} -> {:?}", self.layout, layout);
        self.layout = layout;
        self.control.reset();
        self.shape_state = EncoderShapeState::default();
        self.n_frames_encoded = 0;
    }

    /// Runs one frame through `analyzer` and then `quantizer`.
    ///
    /// The record is zeroed first, so a frame that failed half-way never
    /// leaks parameters into the next one.
    pub fn encode_frame<A, Q>(
        &mut self,
        channel: usize,
        analyzer: &mut A,
        quantizer: &mut Q,
    ) -> Result<(), SilkError>
    where
        A: FrameAnalyzer + ?Sized,
        Q: FrameQuantizer + ?Sized,
    {
        let ctx = FrameContext {
            channel,
            frame_index: self.n_frames_encoded,
            layout: self.layout,
        };

        self.control.reset();
        trace!(
            "encode_frame: channel {} frame {} (nb_subfr={}, last_gain_index={})",
            channel,
            ctx.frame_index,
            self.layout.nb_subfr(),
            self.shape_state.last_gain_index
        );

        if let Err(err) = analyzer.analyze(&ctx, &mut self.shape_state, &mut self.control) {
            debug!(
                "encode_frame: analysis failed on channel {} frame {}: {}",
                channel, ctx.frame_index, err
            );
            return Err(err);
        }

        trace!(
            "encode_frame: channel {} analysed (lambda_q10={}, gains_q16={:?})",
            channel,
            self.control.lambda_q10,
            &self.control.gains_q16[..self.layout.nb_subfr()]
        );

        if let Err(err) = quantizer.quantize(&ctx, &mut self.shape_state, &self.control) {
            debug!(
                "encode_frame: quantisation failed on channel {} frame {}: {}",
                channel, ctx.frame_index, err
            );
            return Err(err);
        }

        self.n_frames_encoded += 1;
        Ok(())
    }
}

/// Multi-channel encoder: one independent [`EncoderChannelState`] per channel.
#[derive(Clone, Debug, PartialEq)]
pub struct Encoder {
    config: EncoderConfig,
    channels: [EncoderChannelState; ENCODER_NUM_CHANNELS],
}

impl Encoder {
    /// Validates `config` and builds zeroed channel states.
    pub fn new(config: EncoderConfig) -> Result<Self, SilkError> {
        let layout = config.frame_layout()?;
        Ok(Self {
            config,
            channels: core::array::from_fn(|_| EncoderChannelState::new(layout)),
        })
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Number of channels being encoded.
    #[must_use]
    pub fn n_channels(&self) -> usize {
        self.config.n_channels
    }

    /// Borrow an active channel.
    #[must_use]
    pub fn channel(&self, index: usize) -> Option<&EncoderChannelState> {
        self.channels[..self.n_channels()].get(index)
    }

    /// Mutably borrow an active channel.
    pub fn channel_mut(&mut self, index: usize) -> Option<&mut EncoderChannelState> {
        let n_channels = self.n_channels();
        self.channels[..n_channels].get_mut(index)
    }

    /// Applies a new configuration.
    ///
    /// A change of internal sampling rate reinitialises every channel, as
    /// does a channel becoming active. Other changes (packet size,
    /// complexity) only update the layout.
    pub fn reconfigure(&mut self, config: EncoderConfig) -> Result<(), SilkError> {
        let layout = config.frame_layout()?;
        let sample_rate_changed = config.fs_khz != self.config.fs_khz;
        for (index, channel) in self.channels.iter_mut().enumerate() {
            let newly_active = index >= self.config.n_channels && index < config.n_channels;
            if sample_rate_changed || newly_active {
                channel.reinitialize(layout);
            } else {
                channel.set_layout(layout);
            }
        }
        self.config = config;
        Ok(())
    }

    /// Encodes one frame on every active channel, in channel order.
    pub fn encode_frame<A, Q>(&mut self, analyzer: &mut A, quantizer: &mut Q) -> Result<(), SilkError>
    where
        A: FrameAnalyzer + ?Sized,
        Q: FrameQuantizer + ?Sized,
    {
        let n_channels = self.n_channels();
        for (index, channel) in self.channels[..n_channels].iter_mut().enumerate() {
            channel.encode_frame(index, analyzer, quantizer)?;
        }
        Ok(())
    }
}
