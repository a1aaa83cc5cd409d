/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Device gray conversion of interleaved pixels
//!
//! Luma is `0.2989*R + 0.5870*G + 0.1140*B` computed in Q15 fixed point.

const R_COEF: u32 = 9794; // (0.2989 * 32768.0 + 0.5)
const G_COEF: u32 = 19235; // (0.5870 * 32768.0 + 0.5)
const B_COEF: u32 = 3736; // (0.1140 * 32768.0 + 0.5)

/// Luma of a single red, green, blue triple
#[inline(always)]
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    // Multiply input elements by 64 for improved accuracy.
    let r = u32::from(r) * 64;
    let g = u32::from(g) * 64;
    let b = u32::from(b) * 64;

    let g1 = ((r * R_COEF) + (1 << 14)) >> 15;
    let g2 = ((g * G_COEF) + (1 << 14)) >> 15;
    let g3 = ((b * B_COEF) + (1 << 14)) >> 15;

    ((g1 + g2 + g3) / 64).min(255) as u8
}

/// Convert a row of interleaved color pixels into a row of gray values
///
/// # Arguments
/// - row: Interleaved pixels with `channels` bytes each
/// - channels: Bytes per pixel
/// - rgb_positions: Offsets of red, green and blue inside a pixel
/// - gray: Output row, one byte per pixel
pub fn rgb_row_to_gray(row: &[u8], channels: usize, rgb_positions: [usize; 3], gray: &mut [u8]) {
    let [r, g, b] = rgb_positions;

    for (pixel, out) in row.chunks_exact(channels).zip(gray.iter_mut()) {
        *out = luma_u8(pixel[r], pixel[g], pixel[b]);
    }
}

/// Copy one channel out of a row of interleaved pixels
pub fn extract_channel_row(row: &[u8], channels: usize, position: usize, out: &mut [u8]) {
    for (pixel, o) in row.chunks_exact(channels).zip(out.iter_mut()) {
        *o = pixel[position];
    }
}

/// Write `values` into one channel of a row of interleaved pixels
pub fn insert_channel_row(row: &mut [u8], channels: usize, position: usize, values: &[u8]) {
    for (pixel, v) in row.chunks_exact_mut(channels).zip(values) {
        pixel[position] = *v;
    }
}
