/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An owned raster of interleaved 8-bit pixels
//!
//! A [`PixelBuffer`] is the single currency every stage of this crate
//! accepts and returns. It is `height` rows of `row_stride` bytes each,
//! where the first `width * bytes_per_pixel` bytes of a row are pixels and the
//! rest is padding that the stages never read and carry over untouched.
use frost_core::channel_order::ChannelOrder;
use frost_core::log::{trace, warn};

use crate::errors::EffectErrors;

/// An owned, validated pixel raster
///
/// The buffer's invariants (non-zero dimensions, a stride that can hold a row
/// and storage of exactly `row_stride * height` bytes) are checked on
/// construction and cannot be broken afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width:         usize,
    height:        usize,
    row_stride:    usize,
    order:         ChannelOrder,
    premultiplied: bool,
    scale:         f32,
    data:          Vec<u8>
}

impl PixelBuffer {
    /// Create a new pixel buffer from raw storage
    ///
    /// # Arguments
    /// - width, height: Dimensions in pixels, both must be at least 1
    /// - row_stride: Bytes per row, at least `width * order.bytes_per_pixel()`
    /// - order: Channel order of each pixel
    /// - premultiplied: Whether color channels are pre-multiplied by alpha
    /// - data: Pixel storage, at least `row_stride * height` bytes.
    ///   Anything past that is dropped.
    ///
    /// The scale starts out as `1.0`, see [`with_scale`](Self::with_scale)
    ///
    /// # Errors
    /// - `InvalidDimensions`: width or height is zero
    /// - `InvalidRowStride`: the stride is smaller than a row of pixels
    /// - `MissingPixelData`: `data` is too short
    pub fn new(
        width: usize, height: usize, row_stride: usize, order: ChannelOrder, premultiplied: bool,
        mut data: Vec<u8>
    ) -> Result<PixelBuffer, EffectErrors> {
        if width == 0 || height == 0 {
            return Err(EffectErrors::InvalidDimensions(width, height));
        }
        let minimum_stride = width
            .checked_mul(order.bytes_per_pixel())
            .ok_or(EffectErrors::InvalidDimensions(width, height))?;

        if row_stride < minimum_stride {
            return Err(EffectErrors::InvalidRowStride(row_stride, minimum_stride));
        }
        let expected = row_stride
            .checked_mul(height)
            .ok_or(EffectErrors::InvalidDimensions(width, height))?;

        if data.len() < expected {
            return Err(EffectErrors::MissingPixelData(expected, data.len()));
        }
        if data.len() > expected {
            trace!(
                "Truncating pixel storage from {} to {expected} bytes",
                data.len()
            );
            data.truncate(expected);
        }

        Ok(PixelBuffer {
            width,
            height,
            row_stride,
            order,
            premultiplied,
            scale: 1.0,
            data
        })
    }

    /// Create a tightly packed, straight alpha buffer
    ///
    /// Same as [`new`](Self::new) with `row_stride = width * bytes_per_pixel`
    ///
    /// # Errors
    /// See [`new`](Self::new)
    pub fn from_pixels(
        width: usize, height: usize, order: ChannelOrder, data: Vec<u8>
    ) -> Result<PixelBuffer, EffectErrors> {
        let stride = width.saturating_mul(order.bytes_per_pixel());
        PixelBuffer::new(width, height, stride, order, false, data)
    }

    /// Create a tightly packed `RGBA` buffer from whole pixels
    ///
    /// # Errors
    /// See [`new`](Self::new)
    pub fn from_rgba(
        width: usize, height: usize, pixels: &[[u8; 4]]
    ) -> Result<PixelBuffer, EffectErrors> {
        let data: &[u8] = bytemuck::cast_slice(pixels);
        PixelBuffer::from_pixels(width, height, ChannelOrder::RGBA, data.to_vec())
    }

    /// Create a tightly packed buffer with every pixel set to `pixel`
    ///
    /// # Errors
    /// - `MissingPixelData`: `pixel` does not have exactly
    ///   `order.bytes_per_pixel()` bytes
    /// - `InvalidDimensions`: the storage size does not fit in a `usize`
    /// - Anything [`new`](Self::new) returns
    pub fn fill(
        width: usize, height: usize, order: ChannelOrder, pixel: &[u8]
    ) -> Result<PixelBuffer, EffectErrors> {
        let bpp = order.bytes_per_pixel();

        if pixel.len() != bpp {
            return Err(EffectErrors::MissingPixelData(bpp, pixel.len()));
        }
        let count = width
            .checked_mul(height)
            .filter(|count| count.checked_mul(bpp).is_some())
            .ok_or(EffectErrors::InvalidDimensions(width, height))?;
        let data = pixel.repeat(count);

        PixelBuffer::from_pixels(width, height, order, data)
    }

    /// Set the device pixel density and return the buffer
    ///
    /// Non-finite or non-positive scales fall back to `1.0`
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> PixelBuffer {
        self.set_scale(scale);
        self
    }

    /// Set the device pixel density
    ///
    /// Non-finite or non-positive scales fall back to `1.0`
    pub fn set_scale(&mut self, scale: f32) {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale;
        } else {
            warn!("Invalid buffer scale {scale}, using 1.0");
            self.scale = 1.0;
        }
    }

    /// Mark the color channels as pre-multiplied or straight
    ///
    /// This only changes how the bytes are interpreted, it does not
    /// convert them.
    pub fn set_premultiplied(&mut self, premultiplied: bool) {
        self.premultiplied = premultiplied;
    }
}

impl PixelBuffer {
    /// Return `(width, height)` in pixels
    pub const fn get_dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Bytes from the start of one row to the start of the next
    pub const fn get_row_stride(&self) -> usize {
        self.row_stride
    }

    pub const fn get_channel_order(&self) -> ChannelOrder {
        self.order
    }

    pub const fn is_premultiplied(&self) -> bool {
        self.premultiplied
    }

    /// Device pixel density, used to turn logical radii into pixels
    pub const fn get_scale(&self) -> f32 {
        self.scale
    }

    /// Bytes occupied by the pixels of one row, i.e. the row without padding
    pub const fn row_bytes(&self) -> usize {
        self.width * self.order.bytes_per_pixel()
    }

    /// The whole storage, padding included
    pub fn get_data(&self) -> &[u8] {
        &self.data
    }

    /// The whole storage, padding included
    ///
    /// The length is fixed, only the contents can change.
    pub fn get_data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its storage
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Iterate over rows, each without its padding
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let row_bytes = self.row_bytes();

        self.data
            .chunks_exact(self.row_stride)
            .map(move |row| &row[..row_bytes])
    }

    /// Iterate mutably over rows, each without its padding
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let row_bytes = self.row_bytes();

        self.data
            .chunks_exact_mut(self.row_stride)
            .map(move |row| &mut row[..row_bytes])
    }

    /// Bytes of the pixel at `(x, y)`, or `None` if out of bounds
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.order.bytes_per_pixel();
        let start = y * self.row_stride + x * bpp;

        self.data.get(start..start + bpp)
    }

    /// Whether `other` has the same width and height
    pub fn same_dimensions(&self, other: &PixelBuffer) -> bool {
        self.get_dimensions() == other.get_dimensions()
    }
}
