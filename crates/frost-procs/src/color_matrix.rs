/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Saturation as a fixed point color matrix
//!
//! Each output channel is an affine combination of the source red, green and blue
//! ```text
//! red   = m[0][0]*r + m[0][1]*g + m[0][2]*b + m[0][3]
//! green = m[1][0]*r + m[1][1]*g + m[1][2]*b + m[1][3]
//! blue  = m[2][0]*r + m[2][1]*g + m[2][2]*b + m[2][3]
//! alpha = a
//!```
//! with the coefficients stored as 16 bit integers scaled by [`DIVISOR`].
//!
//! For a saturation `s` the matrix blends between the identity (`s = 1`) and
//! the luminance matrix (`s = 0`) built from the ITU-R BT.709 weights
//! `0.2126, 0.7152, 0.0722`
//! ```text
//! [[0.2126+0.7873s, 0.7152-0.7152s, 0.0722-0.0722s, 0],
//!  [0.2126-0.2126s, 0.7152+0.2848s, 0.0722-0.0722s, 0],
//!  [0.2126-0.2126s, 0.7152-0.7152s, 0.0722+0.9278s, 0]]
//! ```
//! Every row sums to one, so the transform never shifts luminance and at
//! `s = 0` all three channels are the same.

/// Fixed point divisor of the coefficients
pub const DIVISOR: i32 = 256;

const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// A fixed point saturation matrix
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ColorMatrix {
    rows: [[i16; 4]; 3]
}

impl ColorMatrix {
    /// Build the saturation matrix for `saturation`
    ///
    /// Negative saturations are clamped to zero, `NaN` builds the identity.
    #[must_use]
    pub fn saturation(saturation: f32) -> ColorMatrix {
        let s = if saturation.is_nan() {
            1.0
        } else {
            saturation.max(0.0)
        };

        let real = [
            [LUMA_R + 0.7873 * s, LUMA_G - LUMA_G * s, LUMA_B - LUMA_B * s, 0.0],
            [LUMA_R - LUMA_R * s, LUMA_G + 0.2848 * s, LUMA_B - LUMA_B * s, 0.0],
            [LUMA_R - LUMA_R * s, LUMA_G - LUMA_G * s, LUMA_B + 0.9278 * s, 0.0]
        ];

        let mut rows = [[0_i16; 4]; 3];

        for (row, real_row) in rows.iter_mut().zip(real.iter()) {
            for (c, r) in row.iter_mut().zip(real_row.iter()) {
                *c = quantize(*r);
            }
        }
        ColorMatrix { rows }
    }

    /// Fixed point coefficients, one row per output channel (red, green, blue)
    pub const fn rows(&self) -> &[[i16; 4]; 3] {
        &self.rows
    }

    /// Transform a single red, green, blue triple
    #[inline(always)]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn transform(&self, rgb: [u8; 3]) -> [u8; 3] {
        let r = i32::from(rgb[0]);
        let g = i32::from(rgb[1]);
        let b = i32::from(rgb[2]);

        let mut out = [0; 3];

        for (o, row) in out.iter_mut().zip(self.rows.iter()) {
            let acc = i32::from(row[0]) * r
                + i32::from(row[1]) * g
                + i32::from(row[2]) * b
                + i32::from(row[3]) * DIVISOR
                + (DIVISOR / 2);

            *o = (acc >> 8).clamp(0, 255) as u8;
        }
        out
    }

    /// Apply the matrix in place to interleaved pixels
    ///
    /// # Arguments
    /// - pixels: Interleaved pixels, length must be a multiple of `channels`
    /// - channels: Bytes per pixel
    /// - rgb_positions: Offsets of red, green and blue inside a pixel,
    ///  every other byte (alpha) is left untouched.
    pub fn apply(&self, pixels: &mut [u8], channels: usize, rgb_positions: [usize; 3]) {
        let [r, g, b] = rgb_positions;

        for pixel in pixels.chunks_exact_mut(channels) {
            let [nr, ng, nb] = self.transform([pixel[r], pixel[g], pixel[b]]);

            pixel[r] = nr;
            pixel[g] = ng;
            pixel[b] = nb;
        }
    }
}

/// Scale by the divisor and round half away from zero
#[allow(clippy::cast_possible_truncation)]
fn quantize(coefficient: f32) -> i16 {
    let scaled = (coefficient * DIVISOR as f32).round();
    scaled.clamp(f32::from(i16::MIN), f32::from(i16::MAX)) as i16
}
