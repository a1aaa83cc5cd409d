/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Mask driven interpolation between two images
//!
//! For every pixel the mask weight `m` picks how much of the effect
//! replaces the base
//! ```text
//! out = (base * (255 - m) + effect * m) / 255
//! ```
//! rounded to nearest, so `m = 0` keeps the base byte exact and `m = 255`
//! yields the effect byte exact.
use crate::mathops::div_255;

/// Interpolate one row of interleaved pixels
///
/// # Arguments
/// - base: Row of the image the effect is applied over
/// - effect: Same row of the effect image
/// - weights: One mask weight per pixel
/// - channels: Bytes per pixel in `base`,`effect` and `out`
/// - out: Where to write the result, may not alias the inputs
pub fn lerp_row(base: &[u8], effect: &[u8], weights: &[u8], channels: usize, out: &mut [u8]) {
    for (((b_px, e_px), w), o_px) in base
        .chunks_exact(channels)
        .zip(effect.chunks_exact(channels))
        .zip(weights)
        .zip(out.chunks_exact_mut(channels))
    {
        match *w {
            0 => o_px.copy_from_slice(b_px),
            255 => o_px.copy_from_slice(e_px),
            m => {
                let m = u32::from(m);
                let inv = 255 - m;

                for ((b, e), o) in b_px.iter().zip(e_px).zip(o_px.iter_mut()) {
                    *o = div_255(u32::from(*b) * inv + u32::from(*e) * m);
                }
            }
        }
    }
}

/// Interpolate one row of straight alpha pixels
///
/// Works like [`lerp_row`] but weighs every color byte by its pixel's alpha,
/// so the color of a transparent pixel never shows up in the result.
/// Fully opaque pixels give the same bytes as [`lerp_row`].
///
/// # Arguments
/// - alpha_position: Offset of the alpha byte within a pixel
#[allow(clippy::cast_possible_truncation)]
pub fn lerp_row_straight(
    base: &[u8], effect: &[u8], weights: &[u8], channels: usize, alpha_position: usize,
    out: &mut [u8]
) {
    for (((b_px, e_px), w), o_px) in base
        .chunks_exact(channels)
        .zip(effect.chunks_exact(channels))
        .zip(weights)
        .zip(out.chunks_exact_mut(channels))
    {
        match *w {
            0 => o_px.copy_from_slice(b_px),
            255 => o_px.copy_from_slice(e_px),
            m => {
                let m = u32::from(m);
                let inv = 255 - m;

                let base_alpha = u32::from(b_px[alpha_position]);
                let effect_alpha = u32::from(e_px[alpha_position]);
                let alpha = div_255(base_alpha * inv + effect_alpha * m);

                // both color terms carry a factor of 255 from the weights
                let denominator = 255 * u32::from(alpha);

                for (i, ((b, e), o)) in b_px.iter().zip(e_px).zip(o_px.iter_mut()).enumerate() {
                    if i == alpha_position {
                        *o = alpha;
                    } else if denominator == 0 {
                        *o = 0;
                    } else {
                        let sum = u32::from(*b) * base_alpha * inv + u32::from(*e) * effect_alpha * m;
                        *o = ((sum + denominator / 2) / denominator).min(255) as u8;
                    }
                }
            }
        }
    }
}

/// Gather per pixel mask weights from an interleaved mask row
///
/// `position` is the offset of the byte that carries the weight,
/// alpha for masks with alpha, gray otherwise.
pub fn mask_weights(mask_row: &[u8], channels: usize, position: usize, weights: &mut [u8]) {
    for (pixel, w) in mask_row.chunks_exact(channels).zip(weights.iter_mut()) {
        *w = pixel[position];
    }
}
