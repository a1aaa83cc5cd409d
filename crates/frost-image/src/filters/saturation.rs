/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Saturation adjustment through a fixed point color matrix
use frost_core::log::{trace, warn};
pub use frost_procs::color_matrix::ColorMatrix;

use crate::buffer::PixelBuffer;
use crate::errors::EffectErrors;
use crate::traits::OperationsTrait;

/// Adjust the saturation of a buffer
///
/// A saturation of `1.0` leaves the buffer untouched, `0.0` turns it
/// into grays and larger values make colors more vivid.
/// Negative values are treated as `0.0` and `NaN` as `1.0`.
///
/// Alpha is never modified and gray buffers pass through unchanged.
#[derive(Copy, Clone, Debug)]
pub struct Saturation {
    saturation: f32
}

impl Saturation {
    /// Create a new saturation operation
    pub fn new(saturation: f32) -> Saturation {
        Saturation { saturation }
    }

    /// Whether running this operation changes anything
    pub fn is_neutral(&self) -> bool {
        self.saturation.is_nan() || (self.saturation - 1.0).abs() <= f32::EPSILON
    }
}

impl OperationsTrait for Saturation {
    fn get_name(&self) -> &'static str {
        "Saturation"
    }

    fn execute_impl(&self, buffer: &PixelBuffer) -> Result<PixelBuffer, EffectErrors> {
        if self.is_neutral() {
            trace!("Saturation is 1.0, copying buffer");
            return Ok(buffer.clone());
        }
        if self.saturation < 0.0 {
            warn!("Negative saturation {} clamped to 0.0", self.saturation);
        }
        apply_color_matrix(&ColorMatrix::saturation(self.saturation), buffer)
    }
}

/// Apply a color matrix to every pixel of `buffer`
///
/// Gray layouts have no color to transform and are returned as a copy.
///
/// # Errors
/// - `UnsupportedChannelLayout`: the buffer's channel order is unknown
pub fn apply_color_matrix(
    matrix: &ColorMatrix, buffer: &PixelBuffer
) -> Result<PixelBuffer, EffectErrors> {
    let order = buffer.get_channel_order();

    if order.is_grayscale() {
        trace!("Buffer is already gray, color matrix is a no-op");
        return Ok(buffer.clone());
    }
    let rgb_positions = order
        .rgb_positions()
        .ok_or(EffectErrors::UnsupportedChannelLayout(order, "color matrix"))?;

    let channels = order.bytes_per_pixel();
    let mut output = buffer.clone();

    for row in output.rows_mut() {
        matrix.apply(row, channels, rgb_positions);
    }
    Ok(output)
}
