//! Low-frequency noise-shaping coefficient pair.
//!
//! The noise-shape analysis produces, per subframe, one AR and one MA
//! coefficient (both Q14) for the low-frequency shaping filter. The fixed-point
//! quantiser reads them from a single 32-bit word: the MA tap through the
//! bottom half (`smulwb`) and the AR tap through the top half (`smlawt`).
//! [`LowFreqShaping`] keeps the two values apart and produces that word only
//! where a kernel needs it.

/// AR/MA coefficient pair of the low-frequency shaping filter, both in Q14.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LowFreqShaping {
    /// Feedback (AR) coefficient, stored in the high half of the packed word.
    pub ar_q14: i16,
    /// Feed-forward (MA) coefficient, stored in the low half of the packed word.
    pub ma_q14: i16,
}

impl LowFreqShaping {
    /// Both coefficients zero.
    pub const ZERO: Self = Self { ar_q14: 0, ma_q14: 0 };

    /// Creates a pair from 16-bit coefficients.
    #[must_use]
    pub const fn new(ar_q14: i16, ma_q14: i16) -> Self {
        Self { ar_q14, ma_q14 }
    }

    /// Creates a pair from 32-bit intermediates, saturating each to 16 bits.
    #[must_use]
    pub fn from_q14(ar_q14: i32, ma_q14: i32) -> Self {
        Self {
            ar_q14: saturate_i16(ar_q14),
            ma_q14: saturate_i16(ma_q14),
        }
    }

    /// Packs the pair as `(ar << 16) | (ma & 0xFFFF)`.
    #[must_use]
    pub const fn pack(self) -> i32 {
        ((self.ar_q14 as i32) << 16) | ((self.ma_q14 as i32) & 0xFFFF)
    }

    /// Splits a packed word back into its two coefficients.
    #[must_use]
    pub const fn unpack(packed: i32) -> Self {
        Self {
            ar_q14: (packed >> 16) as i16,
            ma_q14: packed as i16,
        }
    }
}

impl From<LowFreqShaping> for i32 {
    fn from(value: LowFreqShaping) -> Self {
        value.pack()
    }
}

impl From<i32> for LowFreqShaping {
    fn from(packed: i32) -> Self {
        Self::unpack(packed)
    }
}

fn saturate_i16(value: i32) -> i16 {
    value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}
