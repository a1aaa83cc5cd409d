/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Split interleaved rows into separate channel planes and back
//!
//! Both functions take the row stride so padding bytes at the end of a
//! row are skipped on the way out and left untouched on the way back in.

/// De-interleave `height` rows of `width` pixels with `channels` bytes each
///
/// `planes` must contain `channels` planes, each at least `width*height` long.
pub fn deinterleave_u8(
    src: &[u8], planes: &mut [Vec<u8>], width: usize, height: usize, stride: usize,
    channels: usize
) {
    debug_assert_eq!(planes.len(), channels);

    let row_bytes = width * channels;

    for (y, row) in src.chunks(stride).take(height).enumerate() {
        for (x, pixel) in row[..row_bytes].chunks_exact(channels).enumerate() {
            for (plane, value) in planes.iter_mut().zip(pixel) {
                plane[y * width + x] = *value;
            }
        }
    }
}

/// Interleave `channels` planes back into rows with the given stride
///
/// Bytes in `dst` past `width*channels` in each row are not written.
pub fn interleave_u8(
    planes: &[Vec<u8>], dst: &mut [u8], width: usize, height: usize, stride: usize,
    channels: usize
) {
    debug_assert_eq!(planes.len(), channels);

    let row_bytes = width * channels;

    for (y, row) in dst.chunks_mut(stride).take(height).enumerate() {
        for (x, pixel) in row[..row_bytes].chunks_exact_mut(channels).enumerate() {
            for (plane, value) in planes.iter().zip(pixel.iter_mut()) {
                *value = plane[y * width + x];
            }
        }
    }
}
