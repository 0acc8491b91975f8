//! Glove closure input
//!
//! Four channels, each 0.0 (open) to 1.0 (closed):
//! thumb closure, index closure, middle closure, thumb abduction.

use crate::error::GloveError;

/// Channel names in wire order
pub const GLOVE_CHANNELS: [&str; 4] = [
    "thumb_closure",
    "index_closure",
    "middle_closure",
    "thumb_abduction",
];

/// Validated glove control vector
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GloveClosure {
    pub thumb_closure: f32,
    pub index_closure: f32,
    pub middle_closure: f32,
    pub thumb_abduction: f32,
}

impl GloveClosure {
    pub fn new(
        thumb_closure: f32,
        index_closure: f32,
        middle_closure: f32,
        thumb_abduction: f32,
    ) -> Result<Self, GloveError> {
        Self::from_array([thumb_closure, index_closure, middle_closure, thumb_abduction])
    }

    pub fn from_array(values: [f32; 4]) -> Result<Self, GloveError> {
        for (value, channel) in values.iter().zip(GLOVE_CHANNELS) {
            if !value.is_finite() {
                return Err(GloveError::NonFinite { channel });
            }
            if !(0.0..=1.0).contains(value) {
                return Err(GloveError::OutOfRange { channel, value: *value });
            }
        }
        Ok(Self {
            thumb_closure: values[0],
            index_closure: values[1],
            middle_closure: values[2],
            thumb_abduction: values[3],
        })
    }

    /// Parse a flat 4-value slice as sent by the glove driver
    pub fn from_slice(values: &[f32]) -> Result<Self, GloveError> {
        let array: [f32; 4] = values
            .try_into()
            .map_err(|_| GloveError::ChannelCount { got: values.len() })?;
        Self::from_array(array)
    }

    pub fn to_array(&self) -> [f32; 4] {
        [
            self.thumb_closure,
            self.index_closure,
            self.middle_closure,
            self.thumb_abduction,
        ]
    }
}
