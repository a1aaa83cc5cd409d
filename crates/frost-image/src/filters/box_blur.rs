/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Gaussian blur approximated by three box blurs
use frost_core::channel_order::ChannelOrder;
use frost_core::log::trace;
pub use frost_procs::box_blur::compute_effective_radius;
use frost_procs::box_blur::triple_box_blur;
use frost_procs::deinterleave::{deinterleave_u8, interleave_u8};
use frost_procs::premul_alpha::{create_unpremul_table_u8, premultiply_u8, unpremultiply_u8};

use crate::buffer::PixelBuffer;
use crate::errors::EffectErrors;
use crate::traits::OperationsTrait;

/// Blur every channel with three successive box blurs
///
/// The size is the box window length in pixels, see
/// [`compute_effective_radius`] for turning a logical radius into one.
///
/// Every channel, alpha included, is blurred on its own, so the blur works for
/// any channel order including unknown ones.
///
/// Straight alpha buffers are premultiplied before blurring and converted
/// back afterwards, so transparent pixels do not darken their neighbours.
///
/// This operation is multithreaded capable
#[derive(Default, Copy, Clone, Debug)]
pub struct BoxBlur {
    size: u32
}

impl BoxBlur {
    /// Create a new blur operation.
    ///
    /// # Arguments
    /// - size: Box window length in pixels, sizes of `0` and `1` do not blur
    pub fn new(size: u32) -> BoxBlur {
        BoxBlur { size }
    }

    /// Create a blur from a logical radius and a device scale
    pub fn from_radius(radius: f32, scale: f32) -> BoxBlur {
        BoxBlur::new(compute_effective_radius(radius, scale))
    }

    pub const fn get_size(&self) -> u32 {
        self.size
    }
}

impl OperationsTrait for BoxBlur {
    fn get_name(&self) -> &'static str {
        "Triple box blur"
    }

    fn execute_impl(&self, buffer: &PixelBuffer) -> Result<PixelBuffer, EffectErrors> {
        let mut output = buffer.clone();

        if self.size <= 1 {
            trace!("Box size {} does not blur, copying buffer", self.size);
            return Ok(output);
        }
        let (width, height) = buffer.get_dimensions();
        let stride = buffer.get_row_stride();
        let channels = buffer.get_channel_order().bytes_per_pixel();
        let size = self.size as usize;

        let mut planes = vec![vec![0_u8; width * height]; channels];

        deinterleave_u8(buffer.get_data(), &mut planes, width, height, stride, channels);

        let straight_alpha = if buffer.is_premultiplied() {
            None
        } else {
            buffer.get_channel_order().alpha_position()
        };

        if let Some(position) = straight_alpha {
            trace!("Premultiplying alpha before blurring");
            let alpha = planes[position].clone();

            for (i, plane) in planes.iter_mut().enumerate() {
                if i != position {
                    premultiply_u8(plane, &alpha);
                }
            }
        }

        #[cfg(feature = "threads")]
        {
            trace!("Running box blur in multithreaded mode");
            std::thread::scope(|s| {
                // blur each channel on a separate thread
                for plane in &mut planes {
                    s.spawn(move || {
                        let mut scratch_space = vec![0; width * height];
                        triple_box_blur(plane, &mut scratch_space, width, height, size);
                    });
                }
            });
        }
        #[cfg(not(feature = "threads"))]
        {
            trace!("Running box blur in single threaded mode");

            let mut scratch_space = vec![0; width * height];

            for plane in &mut planes {
                triple_box_blur(plane, &mut scratch_space, width, height, size);
            }
        }

        if let Some(position) = straight_alpha {
            let alpha = planes[position].clone();
            let table = create_unpremul_table_u8();

            for (i, plane) in planes.iter_mut().enumerate() {
                if i != position {
                    unpremultiply_u8(plane, &alpha, &table);
                }
            }
        }

        interleave_u8(&planes, output.get_data_mut(), width, height, stride, channels);

        Ok(output)
    }

    fn supports_layout(&self, _: ChannelOrder) -> bool {
        true
    }
}

/// Blur `buffer` with three box blurs of `effective_radius` pixels
///
/// # Errors
/// Never fails for a valid buffer, the result type matches the other stages
pub fn apply_triple_box_blur(
    buffer: &PixelBuffer, effective_radius: u32
) -> Result<PixelBuffer, EffectErrors> {
    BoxBlur::new(effective_radius).execute(buffer)
}
