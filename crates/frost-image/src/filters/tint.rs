/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Composite a solid tint color over a buffer
use frost_core::channel_order::ChannelOrder;
use frost_core::color::{BlendMode, Rgba8};
use frost_core::log::trace;
use frost_procs::blend::{tint_row, TintParams};

use crate::buffer::PixelBuffer;
use crate::errors::EffectErrors;
use crate::traits::OperationsTrait;

/// Cover a buffer with a translucent color
///
/// The tint's alpha is its strength, a missing tint or a fully transparent
/// one leaves the buffer byte for byte unchanged.
///
/// Gray buffers are tinted with the luma of the tint color.
#[derive(Copy, Clone, Debug, Default)]
pub struct Tint {
    color: Option<Rgba8>,
    mode:  BlendMode
}

impl Tint {
    /// Create a new tint operation
    pub fn new(color: Option<Rgba8>, mode: BlendMode) -> Tint {
        Tint { color, mode }
    }

    /// Composite the tint over `buffer`, reusing its storage
    ///
    /// # Errors
    /// - `UnsupportedChannelLayout`: the buffer's channel order is unknown
    pub fn composite(&self, mut buffer: PixelBuffer) -> Result<PixelBuffer, EffectErrors> {
        let order = buffer.get_channel_order();

        let params = match self.color {
            Some(color) if color.a > 0 => self.params(color, &buffer, order)?,
            _ => {
                trace!("No visible tint, buffer unchanged");
                return Ok(buffer);
            }
        };
        for row in buffer.rows_mut() {
            tint_row(row, &params);
        }
        Ok(buffer)
    }

    fn params(
        &self, color: Rgba8, buffer: &PixelBuffer, order: ChannelOrder
    ) -> Result<TintParams, EffectErrors> {
        const SCALE: f32 = 1.0 / 255.0;

        let (color_positions, num_colors, tint) = if let Some(rgb) = order.rgb_positions() {
            let tint = [
                f32::from(color.r) * SCALE,
                f32::from(color.g) * SCALE,
                f32::from(color.b) * SCALE
            ];
            (rgb, 3, tint)
        } else if let Some(gray) = order.gray_position() {
            let luma = f32::from(color.luma()) * SCALE;
            ([gray; 3], 1, [luma; 3])
        } else {
            return Err(EffectErrors::UnsupportedChannelLayout(order, self.get_name()));
        };

        Ok(TintParams {
            color: tint,
            alpha: f32::from(color.a) * SCALE,
            mode: self.mode,
            channels: order.bytes_per_pixel(),
            color_positions,
            num_colors,
            alpha_position: order.alpha_position(),
            premultiplied: buffer.is_premultiplied()
        })
    }
}

impl OperationsTrait for Tint {
    fn get_name(&self) -> &'static str {
        "Tint"
    }

    fn execute_impl(&self, buffer: &PixelBuffer) -> Result<PixelBuffer, EffectErrors> {
        self.composite(buffer.clone())
    }
}

/// Composite `tint` over `buffer` with the given blend mode
///
/// The buffer is consumed and returned with the tint applied in place.
///
/// # Errors
/// - `UnsupportedChannelLayout`: the buffer's channel order is unknown
pub fn composite(
    buffer: PixelBuffer, tint: Option<Rgba8>, mode: BlendMode
) -> Result<PixelBuffer, EffectErrors> {
    Tint::new(tint, mode).composite(buffer)
}
