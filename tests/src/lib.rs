/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use frost_core::channel_order::ChannelOrder;
use frost_image::buffer::PixelBuffer;
use nanorand::Rng;
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;

mod errors;
mod layouts;
mod presets;
mod scenarios;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonChannelOrder {
    RGBA,
    BGRA,
    ARGB,
    ABGR,
    GrayAlpha,
    GrayOnly
}

impl JsonChannelOrder {
    pub fn to_channel_order(self) -> ChannelOrder {
        match self {
            Self::RGBA => ChannelOrder::RGBA,
            Self::BGRA => ChannelOrder::BGRA,
            Self::ARGB => ChannelOrder::ARGB,
            Self::ABGR => ChannelOrder::ABGR,
            Self::GrayAlpha => ChannelOrder::GrayAlpha,
            Self::GrayOnly => ChannelOrder::GrayOnly
        }
    }
}

/// What a scenario expects from the pipeline output
#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Expectation {
    /// Output is byte for byte the source
    Unchanged,
    /// Output differs from the source
    Changed,
    /// Every color pixel has equal red, green and blue
    Gray
}

#[derive(Clone, Deserialize, Debug)]
pub struct ScenarioEntry {
    pub name:       String,
    pub width:      usize,
    pub height:     usize,
    pub layout:     JsonChannelOrder,
    pub padding:    usize,
    pub radius:     f32,
    pub saturation: f32,
    pub tint:       Option<[u8; 4]>,
    pub expect:     Expectation,
    pub comment:    Option<String>
}

/// A buffer filled with seeded random bytes, padding included
pub fn random_buffer(
    width: usize, height: usize, order: ChannelOrder, padding: usize, seed: u64
) -> PixelBuffer {
    let stride = width * order.bytes_per_pixel() + padding;
    let mut data = vec![0_u8; stride * height];
    nanorand::WyRand::new_seed(seed).fill(&mut data);

    PixelBuffer::new(width, height, stride, order, false, data).unwrap()
}

/// Make every pixel of a random buffer fully opaque
pub fn make_opaque(buffer: &mut PixelBuffer) {
    let order = buffer.get_channel_order();

    if let Some(position) = order.alpha_position() {
        let bpp = order.bytes_per_pixel();
        for row in buffer.rows_mut() {
            for pixel in row.chunks_exact_mut(bpp) {
                pixel[position] = 255;
            }
        }
    }
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}
