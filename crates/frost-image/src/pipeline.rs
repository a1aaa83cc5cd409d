/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The blur, saturate, mask and tint pipeline
//!
//! A pipeline runs a fixed sequence of stages over a source buffer
//!
//! 1. Blur, if the radius is above zero
//! 2. Saturation, if the saturation is not one
//! 3. Mask, if a mask was given and one of the above produced an effect.
//!    The mask picks where the effect replaces the source.
//! 4. Tint, if a visible tint color was given. The tint always covers
//!    the whole buffer, it is never clipped by the mask.
//!
//! Stages that do not apply are skipped and leave the buffer exactly as it was.
use std::time::Instant;

use frost_core::log::{trace, Level::Trace, log_enabled};
use frost_core::options::EffectOptions;

use crate::buffer::PixelBuffer;
use crate::errors::EffectErrors;
use crate::filters::box_blur::BoxBlur;
use crate::filters::mask_clip::MaskClip;
use crate::filters::saturation::Saturation;
use crate::filters::tint::Tint;
use crate::traits::OperationsTrait;

/// States a pipeline run moves through
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PipelineState {
    Init,
    Blur,
    Saturate,
    Mask,
    Tint,
    Done
}

impl PipelineState {
    /// The state after this one, `None` after [`Done`](PipelineState::Done)
    pub fn next(self) -> Option<Self> {
        match self {
            PipelineState::Init => Some(PipelineState::Blur),
            PipelineState::Blur => Some(PipelineState::Saturate),
            PipelineState::Saturate => Some(PipelineState::Mask),
            PipelineState::Mask => Some(PipelineState::Tint),
            PipelineState::Tint => Some(PipelineState::Done),
            PipelineState::Done => None
        }
    }
}

/// Applies a frosted glass effect to buffers
///
/// # Example
/// ```
/// use frost_core::channel_order::ChannelOrder;
/// use frost_core::options::EffectOptions;
/// use frost_image::buffer::PixelBuffer;
/// use frost_image::pipeline::BlurTintPipeline;
///
/// let source = PixelBuffer::fill(16, 16, ChannelOrder::RGBA, &[30, 60, 90, 255]).unwrap();
/// let output = BlurTintPipeline::new(EffectOptions::dark()).execute(&source).unwrap();
///
/// assert_eq!(output.get_dimensions(), (16, 16));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct BlurTintPipeline<'a> {
    options: EffectOptions,
    mask:    Option<&'a PixelBuffer>
}

impl<'a> BlurTintPipeline<'a> {
    /// Create a new pipeline without a mask
    pub fn new(options: EffectOptions) -> BlurTintPipeline<'a> {
        BlurTintPipeline {
            options,
            mask: None
        }
    }

    /// Restrict the blur and saturation effect to the region selected by `mask`
    ///
    /// The mask must have the same dimensions as the buffers this pipeline
    /// runs on, its alpha (or gray value when it has no alpha) is the weight.
    #[must_use]
    pub fn mask(mut self, mask: &'a PixelBuffer) -> BlurTintPipeline<'a> {
        self.mask = Some(mask);
        self
    }

    pub fn set_mask(&mut self, mask: Option<&'a PixelBuffer>) {
        self.mask = mask;
    }

    pub const fn get_options(&self) -> &EffectOptions {
        &self.options
    }

    fn has_visible_tint(&self) -> bool {
        self.options.get_tint().is_some_and(|tint| tint.a > 0)
    }

    /// Check everything the enabled stages need before touching pixels
    fn validate(&self, source: &PixelBuffer) -> Result<(), EffectErrors> {
        let order = source.get_channel_order();

        let needs_layout = self.options.has_saturation_change() || self.has_visible_tint();

        if needs_layout && !order.is_known() {
            return Err(EffectErrors::UnsupportedChannelLayout(
                order,
                "blur-tint pipeline"
            ));
        }
        if let Some(mask) = self.mask {
            if !mask.same_dimensions(source) {
                return Err(EffectErrors::DimensionMismatch(
                    source.get_dimensions(),
                    mask.get_dimensions()
                ));
            }
            let mask_order = mask.get_channel_order();

            if !mask_order.is_known() {
                return Err(EffectErrors::UnsupportedChannelLayout(mask_order, "mask"));
            }
        }
        Ok(())
    }

    /// Run the pipeline over `source` and return the result
    ///
    /// The source is never modified, the output has the source's
    /// dimensions, row stride and channel order.
    ///
    /// # Errors
    /// - `DimensionMismatch`: the mask is not the size of `source`
    /// - `UnsupportedChannelLayout`: saturation, tint or mask need to
    ///   interpret a channel order that is unknown
    ///
    /// Errors are only raised before the first stage runs
    pub fn execute(&self, source: &PixelBuffer) -> Result<PixelBuffer, EffectErrors> {
        let start = Instant::now();

        // None while nothing has changed the source
        let mut working: Option<PixelBuffer> = None;
        let mut state = Some(PipelineState::Init);

        while let Some(current) = state {
            trace!("Current state: {current:?}");

            match current {
                PipelineState::Init => self.validate(source)?,
                PipelineState::Blur => {
                    if self.options.has_blur() {
                        let blur =
                            BoxBlur::from_radius(self.options.get_radius(), source.get_scale());
                        working = Some(blur.execute(working.as_ref().unwrap_or(source))?);
                    } else {
                        trace!("Skipping blur, radius is zero");
                    }
                }
                PipelineState::Saturate => {
                    if self.options.has_saturation_change() {
                        let saturation = Saturation::new(self.options.get_saturation());
                        working = Some(saturation.execute(working.as_ref().unwrap_or(source))?);
                    } else {
                        trace!("Skipping saturation, factor is 1.0");
                    }
                }
                PipelineState::Mask => match (self.mask, working.take()) {
                    (Some(mask), Some(effect)) => {
                        working = Some(MaskClip::new(&effect, mask).execute(source)?);
                    }
                    (None, effect) => {
                        trace!("Skipping mask, none given");
                        working = effect;
                    }
                    (Some(_), None) => {
                        trace!("Skipping mask, there is no effect to clip");
                    }
                },
                PipelineState::Tint => {
                    if self.has_visible_tint() {
                        let tint = Tint::new(self.options.get_tint(), self.options.get_blend_mode());
                        let buffer = working.take().unwrap_or_else(|| source.clone());

                        working = Some(tint.composite(buffer)?);
                    } else {
                        trace!("Skipping tint, no visible tint color");
                    }
                }
                PipelineState::Done => {
                    if log_enabled!(Trace) {
                        trace!(
                            "Pipeline finished in {} ms",
                            start.elapsed().as_millis()
                        );
                    }
                }
            }
            state = current.next();
        }

        Ok(working.unwrap_or_else(|| source.clone()))
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroU8;

    use frost_core::channel_order::ChannelOrder;
    use frost_core::color::{BlendMode, Rgba8};
    use frost_core::options::EffectOptions;
    use nanorand::Rng;

    use crate::buffer::PixelBuffer;
    use crate::errors::EffectErrors;
    use crate::filters::box_blur::BoxBlur;
    use crate::filters::mask_clip::clip;
    use crate::filters::saturation::Saturation;
    use crate::filters::tint::composite;
    use crate::pipeline::{BlurTintPipeline, PipelineState};
    use crate::traits::OperationsTrait;

    fn random_rgba(width: usize, height: usize) -> PixelBuffer {
        let mut data = vec![0_u8; width * height * 4];
        nanorand::WyRand::new_seed(17).fill(&mut data);
        PixelBuffer::from_pixels(width, height, ChannelOrder::RGBA, data).unwrap()
    }

    #[test]
    fn states_advance_in_order() {
        let mut state = Some(PipelineState::Init);
        let mut visited = vec![];

        while let Some(current) = state {
            visited.push(current);
            state = current.next();
        }
        assert_eq!(
            visited,
            [
                PipelineState::Init,
                PipelineState::Blur,
                PipelineState::Saturate,
                PipelineState::Mask,
                PipelineState::Tint,
                PipelineState::Done
            ]
        );
    }

    #[test]
    fn neutral_options_return_the_source() {
        let source = random_rgba(6, 6);
        let output = BlurTintPipeline::new(EffectOptions::new())
            .execute(&source)
            .unwrap();

        assert_eq!(output, source);
    }

    #[test]
    fn stages_run_blur_then_saturation_then_tint() {
        let source = random_rgba(8, 5).with_scale(2.0);
        let tint = Rgba8::new(20, 40, 200, 90);
        let options = EffectOptions::new()
            .set_radius(1.5)
            .set_saturation(1.8)
            .set_tint(Some(tint))
            .set_blend_mode(BlendMode::Overlay);

        let expected = BoxBlur::from_radius(1.5, 2.0).execute(&source).unwrap();
        let expected = Saturation::new(1.8).execute(&expected).unwrap();
        let expected = composite(expected, Some(tint), BlendMode::Overlay).unwrap();

        let output = BlurTintPipeline::new(options).execute(&source).unwrap();

        assert_eq!(output, expected);
    }

    #[test]
    fn mask_clips_effect_but_not_tint() {
        let source = random_rgba(4, 4);
        let mut mask_data = vec![0_u8; 16];
        mask_data[..8].fill(255);
        let mask = PixelBuffer::from_pixels(4, 4, ChannelOrder::GrayOnly, mask_data).unwrap();

        let tint = Rgba8::new(255, 0, 0, 100);
        let options = EffectOptions::new()
            .set_radius(2.0)
            .set_tint(Some(tint));

        let blurred = BoxBlur::from_radius(2.0, 1.0).execute(&source).unwrap();
        let clipped = clip(&source, &blurred, &mask).unwrap();
        let expected = composite(clipped, Some(tint), BlendMode::Normal).unwrap();

        let output = BlurTintPipeline::new(options)
            .mask(&mask)
            .execute(&source)
            .unwrap();

        assert_eq!(output, expected);
    }

    #[test]
    fn mask_without_effect_is_skipped() {
        let source = random_rgba(3, 3);
        let mask = PixelBuffer::fill(3, 3, ChannelOrder::GrayOnly, &[255]).unwrap();

        let output = BlurTintPipeline::new(EffectOptions::new())
            .mask(&mask)
            .execute(&source)
            .unwrap();

        assert_eq!(output, source);
    }

    #[test]
    fn mismatched_mask_fails_before_running() {
        let source = random_rgba(4, 4);
        let mask = PixelBuffer::fill(2, 2, ChannelOrder::GrayOnly, &[255]).unwrap();

        let result = BlurTintPipeline::new(EffectOptions::light())
            .mask(&mask)
            .execute(&source);

        assert!(matches!(
            result,
            Err(EffectErrors::DimensionMismatch((4, 4), (2, 2)))
        ));
    }

    #[test]
    fn straight_alpha_edges_keep_their_color() {
        let pixels: Vec<[u8; 4]> = (0..64)
            .map(|i| if i % 8 < 4 { [255, 0, 0, 255] } else { [0, 0, 0, 0] })
            .collect();
        let source = PixelBuffer::from_rgba(8, 8, &pixels).unwrap();

        let output = BlurTintPipeline::new(EffectOptions::new().set_radius(2.0))
            .execute(&source)
            .unwrap();

        for pixel in output.get_data().chunks_exact(4) {
            if pixel[3] != 0 {
                assert_eq!(&pixel[..3], &[255, 0, 0], "{pixel:?}");
            }
        }
        assert!(output.get_pixel(4, 4).unwrap()[3] > 0);
    }

    #[test]
    fn unknown_layout_only_blurs() {
        let order = ChannelOrder::Unknown(NonZeroU8::new(3).unwrap());
        let source = PixelBuffer::fill(5, 5, order, &[1, 2, 3]).unwrap();

        let blur_only = EffectOptions::new().set_radius(3.0);
        assert!(BlurTintPipeline::new(blur_only).execute(&source).is_ok());

        let with_tint = blur_only.set_tint(Some(Rgba8::WHITE));
        assert!(matches!(
            BlurTintPipeline::new(with_tint).execute(&source),
            Err(EffectErrors::UnsupportedChannelLayout(_, _))
        ));
    }
}
