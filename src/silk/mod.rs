pub mod decoder_control;
pub mod define;
pub mod encoder;
pub mod errors;
pub mod q_format;
pub mod shaping;

pub use decoder_control::DecoderControl;
pub use define::{
    ENCODER_NUM_CHANNELS, LTP_ORDER, MAX_LPC_ORDER, MAX_NB_SUBFR, MAX_SHAPE_LPC_ORDER,
    MIN_LPC_ORDER,
};
pub use encoder::EncoderControl;
pub use errors::SilkError;
pub use shaping::LowFreqShaping;
