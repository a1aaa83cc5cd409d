/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Box blur and its use as a gaussian blur approximation
//!
//! A box blur replaces every pixel with the unweighted average of the
//! `size` pixels centered on it, taps falling outside the plane repeat
//! the nearest edge pixel.
//!
//! Three successive box blurs of the same size are a good approximation
//! of a gaussian blur, see [`compute_effective_radius`] for how a gaussian
//! radius is mapped to a box size.
//!
//! Note that blurring is not idempotent, blurring an already blurred plane
//! spreads it further.
use crate::mathops::{compute_mod_u32, fastdiv_u32};
use crate::transpose::transpose;

/// Largest box size we will blur with
///
/// Keeps `255 * size + size / 2` inside a `u32` accumulator
pub const MAX_BOX_SIZE: u32 = 0x00FF_FFFF;

/// Convert a logical gaussian radius into a box size in pixels
///
/// The box size is `floor(radius * scale * 3 * sqrt(2π) / 4 + 0.5)`, bumped
/// to the next odd number so that the box has a center pixel.
///
/// Returns `0` (no blur) when `desired_radius * scale` is not a positive finite
/// number, any positive product returns an odd size `>= 1`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]
#[must_use]
pub fn compute_effective_radius(desired_radius: f32, scale: f32) -> u32 {
    let radius = f64::from(desired_radius) * f64::from(scale);

    if !radius.is_finite() || radius <= 0.0 {
        return 0;
    }
    let d = (radius * 3.0 * (2.0 * core::f64::consts::PI).sqrt() / 4.0 + 0.5).floor();

    let mut d = if d >= f64::from(MAX_BOX_SIZE) {
        MAX_BOX_SIZE
    } else {
        d as u32
    };

    if d % 2 == 0 {
        d += 1;
    }
    d
}

/// Blur a single row with clamp to edge boundaries
///
/// `m` is the fastdiv constant for `size`
#[allow(clippy::cast_possible_truncation)]
fn box_blur_row(input: &[u8], output: &mut [u8], size: usize, m: u128) {
    let width = input.len();
    let last = width - 1;
    let half = size / 2;

    // window for x = 0 covers -half..=half, everything left of zero is input[0]
    let in_bounds = half.min(last);
    let mut acc = (half as u32 + 1) * u32::from(input[0]);

    for pix in &input[1..=in_bounds] {
        acc += u32::from(*pix);
    }
    acc += (half - in_bounds) as u32 * u32::from(input[last]);

    let rounding = half as u32;

    for (x, out) in output.iter_mut().enumerate() {
        *out = fastdiv_u32(acc + rounding, m) as u8;

        let incoming = input[(x + half + 1).min(last)];
        let outgoing = input[x.saturating_sub(half)];

        acc = acc + u32::from(incoming) - u32::from(outgoing);
    }
}

/// Run one box blur pass, horizontal then vertical, over a plane
///
/// # Arguments
/// - in_out_image: A `width*height` plane, the result is written back here
/// - scratch_space: Temporary plane of the same size
/// - size: Box size in pixels, sizes `<= 1` leave the plane untouched
pub fn box_blur(
    in_out_image: &mut [u8], scratch_space: &mut [u8], width: usize, height: usize, size: usize
) {
    if width == 0 || height == 0 || size <= 1 {
        return;
    }
    let size = size.min(MAX_BOX_SIZE as usize);
    let m = compute_mod_u32(size as u64);

    for (in_row, out_row) in in_out_image
        .chunks_exact(width)
        .zip(scratch_space.chunks_exact_mut(width))
    {
        box_blur_row(in_row, out_row, size, m);
    }
    // columns become rows
    transpose(scratch_space, in_out_image, width, height);

    for (in_row, out_row) in in_out_image
        .chunks_exact(height)
        .zip(scratch_space.chunks_exact_mut(height))
    {
        box_blur_row(in_row, out_row, size, m);
    }
    transpose(scratch_space, in_out_image, height, width);
}

/// Approximate a gaussian blur with three box blurs of the same size
///
/// Pass two reads pass one's complete output and pass three reads pass two's.
pub fn triple_box_blur(
    in_out_image: &mut [u8], scratch_space: &mut [u8], width: usize, height: usize, size: usize
) {
    for _ in 0..3 {
        box_blur(in_out_image, scratch_space, width, height, size);
    }
}
