#![cfg(feature = "serde")]

use serde::ser::*;

use crate::channel_order::ChannelOrder;
use crate::color::{BlendMode, Rgba8};
use crate::options::EffectOptions;

impl Serialize for ChannelOrder {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // channel order serialization is simply it's debug value
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for BlendMode {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut seq = serializer.serialize_tuple(4)?;
        for component in self.to_array() {
            seq.serialize_element(&component)?;
        }
        seq.end()
    }
}

impl Serialize for EffectOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("EffectOptions", 4)?;
        state.serialize_field("radius", &self.get_radius())?;
        state.serialize_field("saturation", &self.get_saturation())?;
        state.serialize_field("tint", &self.get_tint())?;
        state.serialize_field("blend_mode", &self.get_blend_mode())?;
        state.end()
    }
}
