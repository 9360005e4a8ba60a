//! SILK encoder channel state and its per-frame control record.
//!
//! [`control::EncoderControl`] is the contract between the analysis and
//! quantisation stages; [`state::EncoderChannelState`] owns one record per
//! channel and drives the [`stages`] in order.

pub mod config;
pub mod control;
pub mod stages;
pub mod state;

pub use config::{EncoderConfig, FrameLayout};
pub use control::EncoderControl;
pub use stages::{FrameAnalyzer, FrameContext, FrameQuantizer};
pub use state::{Encoder, EncoderChannelState, EncoderShapeState};
