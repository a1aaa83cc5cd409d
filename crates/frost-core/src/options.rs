/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Effect options
//!
//! Configuration for a single blur, saturate and tint run.
use crate::color::{BlendMode, Rgba8};
use crate::log::warn;

/// Options controlling the blur-tint effect
///
/// The defaults do nothing, i.e. no blur, neutral saturation and no tint,
/// running a pipeline with them returns a copy of the source.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EffectOptions {
    /// Logical blur radius in points.
    ///
    /// Multiplied by the buffer's scale to get a radius in pixels
    ///
    /// - Default value: 0.0 (no blur)
    radius:     f32,
    /// Saturation factor
    ///
    /// `1.0` leaves colors untouched, `0.0` produces grayscale and values
    /// above one boost saturation.
    ///
    /// - Default value: 1.0
    saturation: f32,
    /// Color composited over the whole result, its alpha is the strength
    ///
    /// - Default value: None
    tint:       Option<Rgba8>,
    /// How the tint mixes with the image below it
    ///
    /// - Default value: `BlendMode::Normal`
    blend_mode: BlendMode
}

impl Default for EffectOptions {
    fn default() -> Self {
        EffectOptions {
            radius:     0.0,
            saturation: 1.0,
            tint:       None,
            blend_mode: BlendMode::Normal
        }
    }
}

/// Initializers
impl EffectOptions {
    /// Create options that leave the image unchanged
    ///
    /// Same as `EffectOptions::default()`
    pub fn new() -> EffectOptions {
        EffectOptions::default()
    }

    /// A light frosted look
    ///
    /// Large blur, slightly boosted saturation and a translucent white veil
    pub fn light() -> EffectOptions {
        EffectOptions::default()
            .set_radius(30.0)
            .set_saturation(1.8)
            .set_tint(Some(Rgba8::gray(1.0, 0.3)))
    }

    /// Like [`light`](Self::light) with an almost opaque white veil
    pub fn extra_light() -> EffectOptions {
        EffectOptions::default()
            .set_radius(20.0)
            .set_saturation(1.8)
            .set_tint(Some(Rgba8::gray(0.97, 0.82)))
    }

    /// A dark frosted look with a dark gray veil
    pub fn dark() -> EffectOptions {
        EffectOptions::default()
            .set_radius(20.0)
            .set_saturation(1.8)
            .set_tint(Some(Rgba8::gray(0.11, 0.73)))
    }

    /// Blur and desaturate the image, then wash it with `color`
    ///
    /// The alpha of `color` is ignored and replaced with 0.6
    pub fn tint(color: Rgba8) -> EffectOptions {
        EffectOptions::default()
            .set_radius(10.0)
            .set_saturation(0.0)
            .set_tint(Some(color.with_alpha(0.6)))
    }
}

impl EffectOptions {
    /// Get the logical blur radius
    pub const fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Get the saturation factor
    pub const fn get_saturation(&self) -> f32 {
        self.saturation
    }

    /// Get the tint color if any
    pub const fn get_tint(&self) -> Option<Rgba8> {
        self.tint
    }

    /// Get the blend mode used for the tint
    pub const fn get_blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    /// Set the logical blur radius
    ///
    /// Negative and non-finite radii are treated as zero
    ///
    /// # Arguments
    ///
    /// * `radius`: Blur radius in points
    ///
    /// returns: EffectOptions
    pub fn set_radius(mut self, radius: f32) -> Self {
        if !radius.is_finite() || radius < 0.0 {
            warn!("Invalid blur radius {radius}, using 0.0");
            self.radius = 0.0;
        } else {
            self.radius = radius;
        }
        self
    }

    /// Set the saturation factor
    ///
    /// Negative values are clamped to zero (full desaturation),
    /// NaN keeps the image saturation unchanged
    pub fn set_saturation(mut self, saturation: f32) -> Self {
        if saturation.is_nan() {
            warn!("Saturation is NaN, using 1.0");
            self.saturation = 1.0;
        } else if saturation < 0.0 {
            warn!("Negative saturation {saturation} clamped to 0.0");
            self.saturation = 0.0;
        } else {
            self.saturation = saturation;
        }
        self
    }

    /// Set the tint color, `None` disables tinting
    pub fn set_tint(mut self, tint: Option<Rgba8>) -> Self {
        self.tint = tint;
        self
    }

    /// Set the blend mode used when compositing the tint
    pub fn set_blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = mode;
        self
    }

    /// Whether this configuration blurs the image
    pub fn has_blur(&self) -> bool {
        self.radius > f32::EPSILON
    }

    /// Whether this configuration changes saturation
    pub fn has_saturation_change(&self) -> bool {
        (self.saturation - 1.0).abs() > f32::EPSILON
    }
}
