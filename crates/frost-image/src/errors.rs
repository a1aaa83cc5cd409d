/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during effect processing
use core::fmt::{Debug, Display, Formatter};

use frost_core::channel_order::ChannelOrder;

/// All errors that can occur while building a buffer or running an effect
///
/// Errors are detected before a stage touches any pixel, so a failed
/// operation never hands out a half processed buffer.
pub enum EffectErrors {
    /// Width or height is zero, contains `(width, height)`
    InvalidDimensions(usize, usize),
    /// Two buffers that must agree in size do not,
    /// contains `((width, height), (width, height))` as expected and found
    DimensionMismatch((usize, usize), (usize, usize)),
    /// The operation cannot interpret the buffer's channel order
    UnsupportedChannelLayout(ChannelOrder, &'static str),
    /// Pixel storage is shorter than `row_stride * height`,
    /// contains expected and found lengths
    MissingPixelData(usize, usize),
    /// Row stride cannot hold a full row, contains stride and minimum stride
    InvalidRowStride(usize, usize),
    /// Two buffers that must share a channel order do not
    ChannelOrderMismatch(ChannelOrder, ChannelOrder),
    /// Generic message
    GenericStr(&'static str)
}

impl Debug for EffectErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            EffectErrors::InvalidDimensions(width, height) => {
                writeln!(
                    f,
                    "Invalid dimensions {width}x{height}, width and height must be at least 1"
                )
            }
            EffectErrors::DimensionMismatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {}x{} but found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            EffectErrors::UnsupportedChannelLayout(layout, operation) => {
                writeln!(
                    f,
                    "Unsupported channel layout {layout:?} for the operation {operation}"
                )
            }
            EffectErrors::MissingPixelData(expected, found) => {
                writeln!(
                    f,
                    "Missing pixel data, expected a buffer of at least {expected} bytes but found {found}"
                )
            }
            EffectErrors::InvalidRowStride(stride, minimum) => {
                writeln!(
                    f,
                    "Row stride {stride} is too small, a row needs at least {minimum} bytes"
                )
            }
            EffectErrors::ChannelOrderMismatch(expected, found) => {
                writeln!(
                    f,
                    "Channel order mismatch, expected {expected:?} but found {found:?}"
                )
            }
            EffectErrors::GenericStr(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for EffectErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for EffectErrors {}

impl From<&'static str> for EffectErrors {
    fn from(value: &'static str) -> Self {
        EffectErrors::GenericStr(value)
    }
}
