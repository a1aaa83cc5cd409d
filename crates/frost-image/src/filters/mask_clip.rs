/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Restrict an effect to the region selected by a mask
//!
//! The mask weight of a pixel is its alpha when the mask has an alpha channel,
//! otherwise its gray value. A weight of `0` keeps the base pixel, `255` takes
//! the effect pixel and anything in between interpolates every channel.
//! Colors of straight alpha buffers are interpolated weighted by their alpha.
use frost_core::channel_order::ChannelOrder;
use frost_procs::mask::{lerp_row, lerp_row_straight, mask_weights};

use crate::buffer::PixelBuffer;
use crate::errors::EffectErrors;
use crate::traits::OperationsTrait;

/// Blend an effect buffer over the buffer it is executed on, weighted by a mask
///
/// The effect must have the same channel order as the base buffer, and both
/// the effect and the mask must have the base buffer's dimensions.
pub struct MaskClip<'a> {
    effect: &'a PixelBuffer,
    mask:   &'a PixelBuffer
}

impl<'a> MaskClip<'a> {
    /// Create a new mask clip operation
    ///
    /// # Arguments
    /// - effect: What the masked region should look like
    /// - mask: Alpha or gray mask selecting the region
    pub fn new(effect: &'a PixelBuffer, mask: &'a PixelBuffer) -> MaskClip<'a> {
        MaskClip { effect, mask }
    }
}

/// Offset of the byte carrying the mask weight
fn weight_position(mask: &PixelBuffer) -> Result<usize, EffectErrors> {
    let order = mask.get_channel_order();

    order
        .alpha_position()
        .or_else(|| order.gray_position())
        .ok_or(EffectErrors::UnsupportedChannelLayout(order, "mask"))
}

impl<'a> OperationsTrait for MaskClip<'a> {
    fn get_name(&self) -> &'static str {
        "Mask clip"
    }

    fn execute_impl(&self, base: &PixelBuffer) -> Result<PixelBuffer, EffectErrors> {
        if !base.same_dimensions(self.effect) {
            return Err(EffectErrors::DimensionMismatch(
                base.get_dimensions(),
                self.effect.get_dimensions()
            ));
        }
        if !base.same_dimensions(self.mask) {
            return Err(EffectErrors::DimensionMismatch(
                base.get_dimensions(),
                self.mask.get_dimensions()
            ));
        }
        if base.get_channel_order() != self.effect.get_channel_order() {
            return Err(EffectErrors::ChannelOrderMismatch(
                base.get_channel_order(),
                self.effect.get_channel_order()
            ));
        }
        let position = weight_position(self.mask)?;

        let (width, _) = base.get_dimensions();
        let channels = base.get_channel_order().bytes_per_pixel();
        let mask_channels = self.mask.get_channel_order().bytes_per_pixel();

        let straight_alpha = if base.is_premultiplied() {
            None
        } else {
            base.get_channel_order().alpha_position()
        };

        let mut output = base.clone();
        let mut weights = vec![0_u8; width];

        for (((out_row, base_row), effect_row), mask_row) in output
            .rows_mut()
            .zip(base.rows())
            .zip(self.effect.rows())
            .zip(self.mask.rows())
        {
            mask_weights(mask_row, mask_channels, position, &mut weights);
            match straight_alpha {
                Some(alpha) => {
                    lerp_row_straight(base_row, effect_row, &weights, channels, alpha, out_row);
                }
                None => lerp_row(base_row, effect_row, &weights, channels, out_row)
            }
        }
        Ok(output)
    }

    fn supports_layout(&self, _: ChannelOrder) -> bool {
        true
    }
}

/// Replace `base` with `effect` where `mask` selects it
///
/// # Errors
/// - `DimensionMismatch`: the three buffers are not the same size
/// - `ChannelOrderMismatch`: `base` and `effect` use different channel orders
/// - `UnsupportedChannelLayout`: the mask's channel order is unknown
pub fn clip(
    base: &PixelBuffer, effect: &PixelBuffer, mask: &PixelBuffer
) -> Result<PixelBuffer, EffectErrors> {
    MaskClip::new(effect, mask).execute(base)
}
