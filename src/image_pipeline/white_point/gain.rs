/// Full-scale value of an 8-bit channel
const WHITE: f64 = 255.0;

/// Multiplicative correction for the three color channels. Alpha is never
/// scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainVector {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl GainVector {
    pub const IDENTITY: GainVector = GainVector { r: 1.0, g: 1.0, b: 1.0 };

    /// Gain that lifts each channel of `reference` to 255.
    ///
    /// A zero channel keeps a gain of 1 and stays unscaled.
    pub fn from_reference(reference: [u8; 4]) -> Self {
        let channel_gain = |c: u8| if c != 0 { WHITE / c as f64 } else { 1.0 };
        Self {
            r: channel_gain(reference[0]),
            g: channel_gain(reference[1]),
            b: channel_gain(reference[2]),
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Scales one RGBA pixel in place, saturating at 255.
    #[inline]
    pub(crate) fn apply_to_pixel(&self, pixel: &mut [u8]) {
        pixel[0] = scale(pixel[0], self.r);
        pixel[1] = scale(pixel[1], self.g);
        pixel[2] = scale(pixel[2], self.b);
    }
}

// Rounds half to even, like a clamped byte array store
#[inline]
fn scale(value: u8, gain: f64) -> u8 {
    (value as f64 * gain).min(WHITE).max(0.0).round_ties_even() as u8
}
