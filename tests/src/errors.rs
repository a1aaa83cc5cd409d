/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::num::NonZeroU8;

use frost_core::channel_order::ChannelOrder;
use frost_core::color::Rgba8;
use frost_core::options::EffectOptions;
use frost_image::buffer::PixelBuffer;
use frost_image::errors::EffectErrors;
use frost_image::filters::grayscale::to_grayscale;
use frost_image::pipeline::BlurTintPipeline;

#[test]
fn invalid_buffers_are_rejected() {
    assert!(matches!(
        PixelBuffer::from_pixels(0, 0, ChannelOrder::RGBA, vec![]),
        Err(EffectErrors::InvalidDimensions(0, 0))
    ));
    assert!(matches!(
        PixelBuffer::new(3, 3, 8, ChannelOrder::RGBA, false, vec![0; 36]),
        Err(EffectErrors::InvalidRowStride(8, 12))
    ));
    assert!(matches!(
        PixelBuffer::from_pixels(3, 3, ChannelOrder::GrayAlpha, vec![0; 17]),
        Err(EffectErrors::MissingPixelData(18, 17))
    ));
}

#[test]
fn mask_size_is_validated_before_running() {
    let source = PixelBuffer::fill(4, 4, ChannelOrder::RGBA, &[1, 2, 3, 4]).unwrap();
    let mask = PixelBuffer::fill(4, 5, ChannelOrder::GrayOnly, &[255]).unwrap();

    // even a pipeline that would otherwise only tint must reject the mask
    let options = EffectOptions::new().set_tint(Some(Rgba8::WHITE));
    let result = BlurTintPipeline::new(options).mask(&mask).execute(&source);

    let err = result.unwrap_err();
    assert!(matches!(err, EffectErrors::DimensionMismatch((4, 4), (4, 5))));
    assert!(err.to_string().contains("expected 4x4 but found 4x5"));
}

#[test]
fn unknown_layouts_fail_where_channels_matter() {
    let order = ChannelOrder::Unknown(NonZeroU8::new(4).unwrap());
    let source = PixelBuffer::fill(3, 3, order, &[9; 4]).unwrap();

    let result = BlurTintPipeline::new(EffectOptions::new().set_saturation(0.5)).execute(&source);
    assert!(matches!(
        result,
        Err(EffectErrors::UnsupportedChannelLayout(_, "blur-tint pipeline"))
    ));

    assert!(matches!(
        to_grayscale(&source),
        Err(EffectErrors::UnsupportedChannelLayout(_, _))
    ));

    let mask = PixelBuffer::fill(3, 3, order, &[255; 4]).unwrap();
    let rgba = PixelBuffer::fill(3, 3, ChannelOrder::RGBA, &[9; 4]).unwrap();
    let result = BlurTintPipeline::new(EffectOptions::new().set_radius(2.0))
        .mask(&mask)
        .execute(&rgba);
    assert!(matches!(
        result,
        Err(EffectErrors::UnsupportedChannelLayout(_, "mask"))
    ));
}
