/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Blend a solid color over interleaved pixels
//!
//! Follows the W3C compositing model, for a tint color `Cs` with alpha `αs`
//! over a backdrop `Cb` with alpha `αb`
//! ```text
//! Cm = (1 - αb) * Cs + αb * B(Cb, Cs)
//! αo = αs + αb * (1 - αs)
//! Co = αs * Cm + (1 - αs) * αb * Cb      (pre-multiplied)
//! ```
//! where `B` is the blend function of the chosen [`BlendMode`]. With
//! `BlendMode::Normal` this is plain source-over.
use frost_core::color::BlendMode;

/// Separable blend function `B(Cb, Cs)`, both values in `0.0..=1.0`
#[must_use]
pub fn blend_channel(mode: BlendMode, cb: f32, cs: f32) -> f32 {
    match mode {
        BlendMode::Normal => cs,
        BlendMode::Multiply => cb * cs,
        BlendMode::Screen => screen(cb, cs),
        BlendMode::Overlay => hard_light(cs, cb),
        BlendMode::Darken => cb.min(cs),
        BlendMode::Lighten => cb.max(cs),
        BlendMode::ColorDodge => {
            if cb <= 0.0 {
                0.0
            } else if cs >= 1.0 {
                1.0
            } else {
                (cb / (1.0 - cs)).min(1.0)
            }
        }
        BlendMode::ColorBurn => {
            if cb >= 1.0 {
                1.0
            } else if cs <= 0.0 {
                0.0
            } else {
                1.0 - ((1.0 - cb) / cs).min(1.0)
            }
        }
        BlendMode::HardLight => hard_light(cb, cs),
        BlendMode::SoftLight => {
            if cs <= 0.5 {
                cb - (1.0 - 2.0 * cs) * cb * (1.0 - cb)
            } else {
                let d = if cb <= 0.25 {
                    ((16.0 * cb - 12.0) * cb + 4.0) * cb
                } else {
                    cb.sqrt()
                };
                cb + (2.0 * cs - 1.0) * (d - cb)
            }
        }
        BlendMode::Difference => (cb - cs).abs(),
        BlendMode::Exclusion => cb + cs - 2.0 * cb * cs
    }
}

fn screen(cb: f32, cs: f32) -> f32 {
    cb + cs - cb * cs
}

fn hard_light(cb: f32, cs: f32) -> f32 {
    if cs <= 0.5 {
        cb * 2.0 * cs
    } else {
        screen(cb, 2.0 * cs - 1.0)
    }
}

/// Everything needed to tint a row of pixels
#[derive(Copy, Clone, Debug)]
pub struct TintParams {
    /// Tint color channels in `0.0..=1.0`, only the first `num_colors` are used
    pub color:           [f32; 3],
    /// Tint alpha in `0.0..=1.0`
    pub alpha:           f32,
    pub mode:            BlendMode,
    /// Bytes per pixel
    pub channels:        usize,
    /// Offsets of the color bytes inside a pixel, matching `color`
    pub color_positions: [usize; 3],
    /// 3 for color layouts, 1 for gray layouts
    pub num_colors:      usize,
    /// Offset of the alpha byte, `None` for opaque layouts
    pub alpha_position:  Option<usize>,
    /// Whether the pixels store pre-multiplied colors
    pub premultiplied:   bool
}

#[inline(always)]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Composite the tint described by `params` over a row of pixels in place
pub fn tint_row(row: &mut [u8], params: &TintParams) {
    const SCALE: f32 = 1.0 / 255.0;

    let alpha_s = params.alpha.clamp(0.0, 1.0);
    let inv_alpha_s = 1.0 - alpha_s;
    let colors = &params.color_positions[..params.num_colors];

    for pixel in row.chunks_exact_mut(params.channels) {
        let alpha_b = params
            .alpha_position
            .map_or(1.0, |pos| f32::from(pixel[pos]) * SCALE);

        let alpha_o = alpha_s + alpha_b * inv_alpha_s;

        for (pos, cs) in colors.iter().zip(params.color.iter()) {
            let stored = f32::from(pixel[*pos]) * SCALE;

            let cb = if params.premultiplied {
                if alpha_b > 0.0 {
                    (stored / alpha_b).min(1.0)
                } else {
                    0.0
                }
            } else {
                stored
            };

            let mixed = (1.0 - alpha_b) * cs + alpha_b * blend_channel(params.mode, cb, *cs);
            let premultiplied = alpha_s * mixed + inv_alpha_s * alpha_b * cb;

            let value = if params.premultiplied {
                premultiplied
            } else if alpha_o > 0.0 {
                premultiplied / alpha_o
            } else {
                0.0
            };
            pixel[*pos] = to_u8(value);
        }
        if let Some(pos) = params.alpha_position {
            pixel[pos] = to_u8(alpha_o);
        }
    }
}
