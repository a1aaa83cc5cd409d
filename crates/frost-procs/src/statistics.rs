/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Per channel reductions over interleaved pixels

/// Add every channel of a row of interleaved pixels into `sums`
///
/// `sums` must hold at least `channels` entries, entry `i` accumulates
/// byte `i` of each pixel.
pub fn accumulate_row(row: &[u8], channels: usize, sums: &mut [u64]) {
    for pixel in row.chunks_exact(channels) {
        for (sum, value) in sums.iter_mut().zip(pixel) {
            *sum += u64::from(*value);
        }
    }
}

/// Divide a sum by `count` rounding to nearest
///
/// Returns zero for an empty count.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn rounded_mean(sum: u64, count: u64) -> u8 {
    if count == 0 {
        return 0;
    }
    ((sum + count / 2) / count).min(255) as u8
}
