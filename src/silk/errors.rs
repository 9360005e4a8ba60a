//! Error codes surfaced around the encoder control record.
//!
//! The record itself never fails. These codes cover the layers that hold it:
//! channel configuration and the analysis/quantisation collaborators driven by
//! [`EncoderChannelState::encode_frame`]. The numeric values keep the SILK
//! error numbering so callers can classify failures the same way.
//!
//! [`EncoderChannelState::encode_frame`]: crate::silk::encoder::state::EncoderChannelState::encode_frame

use core::fmt;

/// Error codes produced while configuring or driving an encoder channel.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SilkError {
    /// Internal sampling frequency not 8000, 12000 or 16000 Hertz.
    EncFsNotSupported = -102,

    /// Packet size not 10, 20, 40, or 60 ms.
    EncPacketSizeNotSupported = -103,

    /// Complexity setting not valid, must be within 0..=10.
    EncInvalidComplexitySetting = -106,

    /// Internal encoder error, raised by a collaborator or an inconsistent layout.
    EncInternalError = -110,

    /// Number of channels setting invalid.
    EncInvalidNumberOfChannelsError = -111,
}

impl SilkError {
    /// Returns the numeric error code corresponding to this enum variant.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Converts a raw error code into the corresponding [`SilkError`] value.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -102 => Some(Self::EncFsNotSupported),
            -103 => Some(Self::EncPacketSizeNotSupported),
            -106 => Some(Self::EncInvalidComplexitySetting),
            -110 => Some(Self::EncInternalError),
            -111 => Some(Self::EncInvalidNumberOfChannelsError),
            _ => None,
        }
    }
}

impl fmt::Display for SilkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::EncFsNotSupported => "unsupported internal sampling rate",
            Self::EncPacketSizeNotSupported => "unsupported packet size",
            Self::EncInvalidComplexitySetting => "invalid complexity setting",
            Self::EncInternalError => "internal encoder error",
            Self::EncInvalidNumberOfChannelsError => "invalid number of channels",
        };
        write!(f, "{text} ({})", self.code())
    }
}
