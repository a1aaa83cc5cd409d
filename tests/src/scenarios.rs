/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;
use std::path::Path;

use frost_core::channel_order::ChannelOrder;
use frost_core::color::Rgba8;
use frost_core::options::EffectOptions;
use frost_image::buffer::PixelBuffer;
use frost_image::filters::box_blur::{apply_triple_box_blur, compute_effective_radius};
use frost_image::filters::mask_clip::clip;
use frost_image::pipeline::BlurTintPipeline;

use crate::{random_buffer, Expectation, ScenarioEntry};

fn checkerboard(width: usize, height: usize) -> PixelBuffer {
    let pixels: Vec<[u8; 4]> = (0..width * height)
        .map(|i| {
            let v = if (i % width + i / width) % 2 == 0 { 0 } else { 255 };
            [v, v, v, 255]
        })
        .collect();

    PixelBuffer::from_rgba(width, height, &pixels).unwrap()
}

#[test]
fn opaque_red_without_effects_is_unchanged() {
    let source = PixelBuffer::fill(4, 4, ChannelOrder::RGBA, &[255, 0, 0, 255]).unwrap();
    let options = EffectOptions::new()
        .set_radius(0.0)
        .set_saturation(1.0)
        .set_tint(None);

    let output = BlurTintPipeline::new(options).execute(&source).unwrap();

    assert_eq!(output, source);
}

#[test]
fn checkerboard_is_smoothed() {
    let source = checkerboard(8, 8);
    let options = EffectOptions::new().set_radius(4.0);

    let output = BlurTintPipeline::new(options).execute(&source).unwrap();

    for pixel in output.get_data().chunks_exact(4) {
        for c in &pixel[..3] {
            assert!(*c > 0 && *c < 255, "{pixel:?} is not smoothed");
        }
        assert_eq!(pixel[3], 255);
    }
}

#[test]
fn zero_saturation_removes_color() {
    for seed in 0..4 {
        let source = random_buffer(11, 7, ChannelOrder::RGBA, 0, seed);
        let options = EffectOptions::new().set_saturation(0.0);

        let output = BlurTintPipeline::new(options).execute(&source).unwrap();

        for pixel in output.get_data().chunks_exact(4) {
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
        }
    }
}

#[test]
fn single_quadrant_mask_changes_single_pixel() {
    let base = PixelBuffer::from_rgba(
        2,
        2,
        &[
            [255, 0, 0, 255],
            [0, 255, 0, 255],
            [0, 0, 255, 255],
            [255, 255, 255, 255]
        ]
    )
    .unwrap();
    let effect = apply_triple_box_blur(&base, 3).unwrap();
    let mask = PixelBuffer::from_pixels(2, 2, ChannelOrder::GrayOnly, vec![0, 0, 0, 255]).unwrap();

    let output = clip(&base, &effect, &mask).unwrap();

    for (x, y) in [(0, 0), (1, 0), (0, 1)] {
        assert_eq!(output.get_pixel(x, y), base.get_pixel(x, y));
    }
    assert_ne!(effect.get_pixel(1, 1), base.get_pixel(1, 1));
    assert_eq!(output.get_pixel(1, 1), effect.get_pixel(1, 1));

    // the same through the pipeline, radius 1.3 maps to a 3 pixel box
    assert_eq!(compute_effective_radius(1.3, 1.0), 3);

    let options = EffectOptions::new().set_radius(1.3);
    let piped = BlurTintPipeline::new(options)
        .mask(&mask)
        .execute(&base)
        .unwrap();

    assert_eq!(piped, output);
}

fn check_expectation(entry: &ScenarioEntry, source: &PixelBuffer, output: &PixelBuffer) -> bool {
    match entry.expect {
        Expectation::Unchanged => output == source,
        Expectation::Changed => output != source,
        Expectation::Gray => {
            let order = output.get_channel_order();
            let Some([r, g, b]) = order.rgb_positions() else {
                return true;
            };
            output.rows().all(|row| {
                row.chunks_exact(order.bytes_per_pixel())
                    .all(|p| p[r] == p[g] && p[g] == p[b])
            })
        }
    }
}

#[test]
fn test_scenarios() {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/scenarios.json");

    let json_file = read(file).unwrap();

    let entries: Vec<ScenarioEntry> = serde_json::from_slice(&json_file).unwrap();

    let mut failed = Vec::new();

    for (seed, entry) in entries.iter().enumerate() {
        let order = entry.layout.to_channel_order();
        let source = random_buffer(entry.width, entry.height, order, entry.padding, seed as u64);

        let options = EffectOptions::new()
            .set_radius(entry.radius)
            .set_saturation(entry.saturation)
            .set_tint(entry.tint.map(Rgba8::from));

        let output = BlurTintPipeline::new(options).execute(&source).unwrap();

        assert_eq!(output.get_dimensions(), source.get_dimensions());
        assert_eq!(output.get_row_stride(), source.get_row_stride());
        assert_eq!(output.get_channel_order(), order);

        if !check_expectation(entry, &source, &output) {
            eprintln!("Scenario {} failed, expected {:?}\nConfig:{:#?}", entry.name, entry.expect, entry);
            failed.push(entry.name.clone());
        }
    }
    assert!(failed.is_empty(), "Failed scenarios {failed:?}");
}
