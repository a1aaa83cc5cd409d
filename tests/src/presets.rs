/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use frost_core::channel_order::ChannelOrder;
use frost_core::color::Rgba8;
use frost_core::options::EffectOptions;
use frost_image::buffer::PixelBuffer;
use frost_image::filters::average_color::average;
use frost_image::pipeline::BlurTintPipeline;

use crate::{hash, make_opaque, random_buffer};

fn presets() -> [(&'static str, EffectOptions); 4] {
    [
        ("light", EffectOptions::light()),
        ("extra_light", EffectOptions::extra_light()),
        ("dark", EffectOptions::dark()),
        ("tint", EffectOptions::tint(Rgba8::new(255, 0, 0, 255)))
    ]
}

#[test]
fn presets_are_deterministic_and_distinct() {
    let mut source = random_buffer(32, 24, ChannelOrder::BGRA, 8, 1);
    make_opaque(&mut source);

    let mut hashes = Vec::new();

    for (name, options) in presets() {
        let pipeline = BlurTintPipeline::new(options);
        let first = pipeline.execute(&source).unwrap();
        let second = pipeline.execute(&source).unwrap();

        assert_eq!(
            hash(first.get_data()),
            hash(second.get_data()),
            "{name} is not deterministic"
        );
        assert_ne!(hash(first.get_data()), hash(source.get_data()), "{name} did nothing");
        hashes.push(hash(first.get_data()));
    }
    hashes.sort_unstable();
    hashes.dedup();
    assert_eq!(hashes.len(), 4);
}

#[test]
fn presets_shift_brightness() {
    let source = PixelBuffer::fill(16, 16, ChannelOrder::RGBA, &[100, 100, 100, 255]).unwrap();

    let run = |options: EffectOptions| {
        let output = BlurTintPipeline::new(options).execute(&source).unwrap();
        average(&output).unwrap()
    };

    let light = run(EffectOptions::light());
    assert!(light.r > 130 && light.r < 160, "{light:?}");

    let extra_light = run(EffectOptions::extra_light());
    assert!(extra_light.r > 200, "{extra_light:?}");

    let dark = run(EffectOptions::dark());
    assert!(dark.r < 70, "{dark:?}");

    let red = run(EffectOptions::tint(Rgba8::new(255, 0, 0, 255)));
    assert!(red.r > red.g && red.g == red.b, "{red:?}");

    for color in [light, extra_light, dark, red] {
        assert_eq!(color.a, 255);
    }
}

#[test]
fn presets_keep_source_alpha_coverage() {
    // fully transparent source, only the veil remains
    let source = PixelBuffer::fill(8, 8, ChannelOrder::ARGB, &[0, 0, 0, 0]).unwrap();

    let output = BlurTintPipeline::new(EffectOptions::dark())
        .execute(&source)
        .unwrap();

    let veil = Rgba8::gray(0.11, 0.73);
    for pixel in output.get_data().chunks_exact(4) {
        assert_eq!(pixel, &[veil.a, veil.r, veil.g, veil.b]);
    }
}
