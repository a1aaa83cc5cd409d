/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Solid colors and the modes used to blend them into an image

/// A straight (non pre-multiplied) 8-bit color
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8
}

impl Rgba8 {
    pub const BLACK: Rgba8 = Rgba8::new(0, 0, 0, 255);
    pub const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);
    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Rgba8 {
        Rgba8 { r, g, b, a }
    }

    /// Create a gray color from a white level and an alpha value,
    /// both in the range `0.0..=1.0`
    ///
    /// Values outside that range are clamped
    pub fn gray(white: f32, alpha: f32) -> Rgba8 {
        let w = unit_to_u8(white);
        Rgba8::new(w, w, w, unit_to_u8(alpha))
    }

    /// Create a color from floating point components in the range `0.0..=1.0`
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Rgba8 {
        Rgba8::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b), unit_to_u8(a))
    }

    /// Return the same color with a different alpha, `alpha` is in `0.0..=1.0`
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Rgba8 {
        Rgba8 {
            a: unit_to_u8(alpha),
            ..self
        }
    }

    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Whether red, green and blue are equal
    pub const fn is_gray(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Luminance of the color using the device gray weights
    /// `0.2989R + 0.5870G + 0.1140B`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn luma(&self) -> u8 {
        let l = 0.2989 * f32::from(self.r) + 0.5870 * f32::from(self.g) + 0.1140 * f32::from(self.b);
        l.round().clamp(0.0, 255.0) as u8
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(value: [u8; 4]) -> Self {
        Rgba8::new(value[0], value[1], value[2], value[3])
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Blend mode used when compositing a tint over an image
///
/// These are the separable blend modes of the W3C compositing model,
/// each one picks how the tint color `Cs` mixes with the backdrop `Cb`
/// before the result is alpha-composited with the tint's own alpha.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum BlendMode {
    /// Source over, the tint simply covers the backdrop
    #[default]
    Normal,
    /// `Cb * Cs`
    Multiply,
    /// `Cb + Cs - Cb * Cs`
    Screen,
    /// Hard light with the layers swapped
    Overlay,
    /// `min(Cb, Cs)`
    Darken,
    /// `max(Cb, Cs)`
    Lighten,
    /// Brighten the backdrop to reflect the tint
    ColorDodge,
    /// Darken the backdrop to reflect the tint
    ColorBurn,
    /// Multiply or screen depending on the tint
    HardLight,
    /// Darken or lighten depending on the tint, softer than hard light
    SoftLight,
    /// `|Cb - Cs|`
    Difference,
    /// `Cb + Cs - 2 * Cb * Cs`
    Exclusion
}

/// All supported blend modes
pub static ALL_BLEND_MODES: [BlendMode; 12] = [
    BlendMode::Normal,
    BlendMode::Multiply,
    BlendMode::Screen,
    BlendMode::Overlay,
    BlendMode::Darken,
    BlendMode::Lighten,
    BlendMode::ColorDodge,
    BlendMode::ColorBurn,
    BlendMode::HardLight,
    BlendMode::SoftLight,
    BlendMode::Difference,
    BlendMode::Exclusion
];
