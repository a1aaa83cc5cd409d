/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reduce a buffer to its average color
use frost_core::color::Rgba8;
use frost_procs::statistics::{accumulate_row, rounded_mean};

use crate::buffer::PixelBuffer;
use crate::errors::EffectErrors;

/// Arithmetic mean of every channel over all pixels
///
/// Equivalent to downsampling the buffer to a single pixel with a box filter.
///
/// - Gray buffers return a gray color
/// - Buffers without alpha return an opaque color
/// - Pre-multiplied buffers are averaged as stored and the mean is then
///   converted back to straight alpha
///
/// # Errors
/// - `UnsupportedChannelLayout`: the buffer's channel order is unknown
/// - `InvalidDimensions`: the buffer has no pixels
pub fn average(buffer: &PixelBuffer) -> Result<Rgba8, EffectErrors> {
    let order = buffer.get_channel_order();
    let (width, height) = buffer.get_dimensions();

    if !order.is_known() {
        return Err(EffectErrors::UnsupportedChannelLayout(order, "average color"));
    }
    let count = (width * height) as u64;

    if count == 0 {
        return Err(EffectErrors::InvalidDimensions(width, height));
    }
    let channels = order.bytes_per_pixel();
    let mut sums = [0_u64; 4];

    for row in buffer.rows() {
        accumulate_row(row, channels, &mut sums);
    }
    let mut means = [0_u8; 4];

    for (mean, sum) in means.iter_mut().zip(sums) {
        *mean = rounded_mean(sum, count);
    }

    let a = order.alpha_position().map_or(255, |pos| means[pos]);

    let [r, g, b] = match (order.rgb_positions(), order.gray_position()) {
        (Some([r, g, b]), _) => [means[r], means[g], means[b]],
        (None, Some(gray)) => [means[gray]; 3],
        (None, None) => return Err(EffectErrors::UnsupportedChannelLayout(order, "average color"))
    };

    if buffer.is_premultiplied() {
        return Ok(Rgba8::new(
            unpremultiply(r, a),
            unpremultiply(g, a),
            unpremultiply(b, a),
            a
        ));
    }
    Ok(Rgba8::new(r, g, b, a))
}

#[allow(clippy::cast_possible_truncation)]
fn unpremultiply(value: u8, alpha: u8) -> u8 {
    if alpha == 0 {
        return 0;
    }
    let alpha = u32::from(alpha);
    ((u32::from(value) * 255 + alpha / 2) / alpha).min(255) as u8
}
