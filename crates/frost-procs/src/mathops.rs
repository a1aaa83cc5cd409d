/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Mathematical operations shared amongst kernels

/// Compute the magic constant used by [`fastdiv_u32`] to divide by `d`
///
/// Implements Daniel Lemire's fastmod.
///
/// See [Faster Remainder by Direct Computation: Applications to Compilers and Software Libraries](https://arxiv.org/abs/1902.01961),
/// Software: Practice and Experience  49 (6), 2019.
///
/// `d` must be non-zero.
#[inline(always)]
#[must_use]
pub fn compute_mod_u32(d: u64) -> u128 {
    return (u128::from(0xFFFF_FFFF_FFFF_FFFF_u64) / u128::from(d)) + 1;
}

/// Divide `a` by the divisor `m` was computed for
///
/// Exact for every `u32` numerator, the box blur uses it since
/// its divisor is fixed for a whole pass.
#[inline(always)]
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn fastdiv_u32(a: u32, m: u128) -> u32 {
    return ((m * u128::from(a)) >> 64) as u32;
}

/// Divide by 255 rounding to nearest, for `x <= 255 * 255 + 127`
#[inline(always)]
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn div_255(x: u32) -> u8 {
    let t = x + 128;
    ((t + (t >> 8)) >> 8) as u8
}
