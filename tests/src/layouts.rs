/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The same pixels stored in different layouts must come out the same

use frost_core::channel_order::ChannelOrder;
use frost_core::color::{BlendMode, Rgba8};
use frost_core::options::EffectOptions;
use frost_image::buffer::PixelBuffer;
use frost_image::filters::average_color::average;
use frost_image::filters::grayscale::to_grayscale;
use frost_image::pipeline::BlurTintPipeline;

use crate::random_buffer;

const COLOR_ORDERS: [ChannelOrder; 4] = [
    ChannelOrder::RGBA,
    ChannelOrder::BGRA,
    ChannelOrder::ARGB,
    ChannelOrder::ABGR
];

/// Store `RGBA` pixels in `order` with `padding` extra bytes per row
fn convert(rgba: &PixelBuffer, order: ChannelOrder, padding: usize) -> PixelBuffer {
    let (width, height) = rgba.get_dimensions();
    let stride = width * 4 + padding;
    let [r, g, b] = order.rgb_positions().unwrap();
    let a = order.alpha_position().unwrap();

    let mut data = vec![0_u8; stride * height];

    for (out_row, in_row) in data.chunks_exact_mut(stride).zip(rgba.rows()) {
        for (o, i) in out_row[..width * 4]
            .chunks_exact_mut(4)
            .zip(in_row.chunks_exact(4))
        {
            o[r] = i[0];
            o[g] = i[1];
            o[b] = i[2];
            o[a] = i[3];
        }
    }
    PixelBuffer::new(width, height, stride, order, rgba.is_premultiplied(), data).unwrap()
}

fn options() -> EffectOptions {
    EffectOptions::new()
        .set_radius(2.5)
        .set_saturation(1.6)
        .set_tint(Some(Rgba8::new(30, 140, 220, 120)))
        .set_blend_mode(BlendMode::SoftLight)
}

#[test]
fn pipeline_is_layout_independent() {
    let rgba = random_buffer(13, 9, ChannelOrder::RGBA, 0, 3);
    let mask = random_buffer(13, 9, ChannelOrder::GrayAlpha, 0, 4);

    let expected = BlurTintPipeline::new(options())
        .mask(&mask)
        .execute(&rgba)
        .unwrap();

    for order in COLOR_ORDERS {
        for padding in [0, 3] {
            let source = convert(&rgba, order, padding);
            let output = BlurTintPipeline::new(options())
                .mask(&mask)
                .execute(&source)
                .unwrap();

            assert_eq!(output, convert(&expected, order, padding), "{order:?} {padding}");
        }
    }
}

#[test]
fn grayscale_and_average_are_layout_independent() {
    let rgba = random_buffer(6, 6, ChannelOrder::RGBA, 0, 8);

    let gray = to_grayscale(&rgba).unwrap();
    let color = average(&rgba).unwrap();

    for order in COLOR_ORDERS {
        let source = convert(&rgba, order, 5);

        assert_eq!(to_grayscale(&source).unwrap(), gray, "{order:?}");
        assert_eq!(average(&source).unwrap(), color, "{order:?}");
    }
}

#[test]
fn premultiplied_buffers_keep_layout_independence() {
    let mut rgba = random_buffer(7, 5, ChannelOrder::RGBA, 0, 21);
    rgba.set_premultiplied(true);

    let options = EffectOptions::dark();
    let expected = BlurTintPipeline::new(options).execute(&rgba).unwrap();

    for order in COLOR_ORDERS {
        let output = BlurTintPipeline::new(options)
            .execute(&convert(&rgba, order, 2))
            .unwrap();

        assert_eq!(output, convert(&expected, order, 2), "{order:?}");
    }
}
