/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert a buffer to grayscale while keeping its transparency
//!
//! The conversion works in two steps, the color channels are reduced to a
//! single luma plane and the source's alpha, extracted as its own `GrayOnly`
//! buffer, is then put back next to it.
use frost_core::channel_order::ChannelOrder;
use frost_core::log::warn;
use frost_procs::grayscale::{extract_channel_row, insert_channel_row, rgb_row_to_gray};

use crate::buffer::PixelBuffer;
use crate::errors::EffectErrors;
use crate::traits::OperationsTrait;

/// Convert color buffers to grayscale
///
/// Buffers with alpha become `GrayAlpha` with the exact same alpha bytes,
/// opaque ones become `GrayOnly`. Buffers that are already gray are copied.
///
/// The output is tightly packed.
#[derive(Default, Copy, Clone, Debug)]
pub struct RgbToGrayScale;

impl RgbToGrayScale {
    pub fn new() -> RgbToGrayScale {
        RgbToGrayScale
    }
}

impl OperationsTrait for RgbToGrayScale {
    fn get_name(&self) -> &'static str {
        "RGB to Grayscale"
    }

    fn execute_impl(&self, buffer: &PixelBuffer) -> Result<PixelBuffer, EffectErrors> {
        let order = buffer.get_channel_order();

        let Some(rgb_positions) = order.rgb_positions() else {
            if order.is_grayscale() {
                warn!("Buffer is already gray, copying it");
                return Ok(buffer.clone());
            }
            return Err(EffectErrors::UnsupportedChannelLayout(order, self.get_name()));
        };
        let (width, height) = buffer.get_dimensions();
        let channels = order.bytes_per_pixel();

        let mut luma = vec![0_u8; width * height];

        for (row, out) in buffer.rows().zip(luma.chunks_exact_mut(width)) {
            rgb_row_to_gray(row, channels, rgb_positions, out);
        }
        let mut gray = PixelBuffer::new(
            width,
            height,
            width,
            ChannelOrder::GrayOnly,
            buffer.is_premultiplied(),
            luma
        )?
        .with_scale(buffer.get_scale());

        if let Some(alpha) = extract_alpha(buffer)? {
            gray = apply_alpha(&gray, &alpha)?;
        }
        Ok(gray)
    }
}

/// Convert `buffer` to grayscale, preserving its alpha channel
///
/// # Errors
/// - `UnsupportedChannelLayout`: the buffer's channel order is unknown
pub fn to_grayscale(buffer: &PixelBuffer) -> Result<PixelBuffer, EffectErrors> {
    RgbToGrayScale::new().execute(buffer)
}

/// Copy the alpha channel of `buffer` into its own `GrayOnly` buffer
///
/// Returns `None` for layouts without alpha.
///
/// # Errors
/// - `UnsupportedChannelLayout`: the alpha position cannot be determined
///   from the channel order
pub fn extract_alpha(buffer: &PixelBuffer) -> Result<Option<PixelBuffer>, EffectErrors> {
    let order = buffer.get_channel_order();

    if order.alpha_info().is_none() {
        return Err(EffectErrors::UnsupportedChannelLayout(order, "extract alpha"));
    }
    let Some(position) = order.alpha_position() else {
        return Ok(None);
    };
    let (width, height) = buffer.get_dimensions();
    let channels = order.bytes_per_pixel();

    let mut alpha = vec![0_u8; width * height];

    for (row, out) in buffer.rows().zip(alpha.chunks_exact_mut(width)) {
        extract_channel_row(row, channels, position, out);
    }

    PixelBuffer::new(width, height, width, ChannelOrder::GrayOnly, false, alpha).map(Some)
}

/// Combine a `GrayOnly` image and a `GrayOnly` alpha mask into a `GrayAlpha` buffer
///
/// The result keeps `gray`'s pre-multiplied flag and scale.
///
/// # Errors
/// - `UnsupportedChannelLayout`: either input is not `GrayOnly`
/// - `DimensionMismatch`: the inputs differ in size
pub fn apply_alpha(gray: &PixelBuffer, alpha: &PixelBuffer) -> Result<PixelBuffer, EffectErrors> {
    for buffer in [gray, alpha] {
        let order = buffer.get_channel_order();

        if order != ChannelOrder::GrayOnly {
            return Err(EffectErrors::UnsupportedChannelLayout(order, "apply alpha"));
        }
    }
    if !gray.same_dimensions(alpha) {
        return Err(EffectErrors::DimensionMismatch(
            gray.get_dimensions(),
            alpha.get_dimensions()
        ));
    }
    let (width, height) = gray.get_dimensions();
    let mut output = PixelBuffer::new(
        width,
        height,
        width * 2,
        ChannelOrder::GrayAlpha,
        gray.is_premultiplied(),
        vec![0; width * height * 2]
    )?
    .with_scale(gray.get_scale());

    for ((out, g), a) in output.rows_mut().zip(gray.rows()).zip(alpha.rows()) {
        insert_channel_row(out, 2, 0, g);
        insert_channel_row(out, 2, 1, a);
    }
    Ok(output)
}
