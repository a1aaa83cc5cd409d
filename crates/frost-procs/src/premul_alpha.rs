/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conversion between straight and premultiplied alpha planes
//!
//! Blurring or interpolating straight alpha pixels lets the color of
//! transparent pixels leak into their visible neighbours, so those
//! operations run on premultiplied values and convert back afterwards.
//!
//! Premultiplying is `c * a / 255` rounded to nearest. Undoing it is
//! `(c * 255 + a / 2) / a`, where the division by `a` goes through a
//! table of fastdiv constants, one per alpha value.
use crate::mathops::{compute_mod_u32, div_255, fastdiv_u32};

/// Fastdiv constants for every non zero alpha value
///
/// Entry `0` is zero, dividing with it yields `0`
#[allow(clippy::needless_range_loop)]
#[must_use]
pub fn create_unpremul_table_u8() -> [u128; 256] {
    let mut table = [0; 256];

    for i in 1..256 {
        table[i] = compute_mod_u32(i as u64);
    }
    table
}

/// Multiply a plane of color values by their alpha
///
/// `input` is modified in place, `alpha` must be at least as long
pub fn premultiply_u8(input: &mut [u8], alpha: &[u8]) {
    for (color, a) in input.iter_mut().zip(alpha) {
        *color = div_255(u32::from(*color) * u32::from(*a));
    }
}

/// Divide a plane of premultiplied values by their alpha
///
/// Pixels with zero alpha come out as `0`
#[allow(clippy::cast_possible_truncation)]
pub fn unpremultiply_u8(input: &mut [u8], alpha: &[u8], table: &[u128; 256]) {
    for (color, a) in input.iter_mut().zip(alpha) {
        let value = fastdiv_u32(
            u32::from(*color) * 255 + u32::from(*a) / 2,
            table[usize::from(*a)]
        );
        *color = value.min(255) as u8;
    }
}
