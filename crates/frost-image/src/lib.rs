/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Frosted glass effects for in-memory pixel buffers
//!
//! This crate blurs, saturates, masks and tints 8-bit interleaved
//! buffers, and provides the grayscale and average color routines
//! that share the same buffer model.
//!
//! # Example
//! - Blur a buffer and wash it with a light veil
//! ```
//! use frost_core::channel_order::ChannelOrder;
//! use frost_core::options::EffectOptions;
//! use frost_image::buffer::PixelBuffer;
//! use frost_image::pipeline::BlurTintPipeline;
//!
//! let mut data = vec![0_u8; 8 * 8 * 4];
//! for (i, pixel) in data.chunks_exact_mut(4).enumerate() {
//!     let v = if (i % 8 + i / 8) % 2 == 0 { 0 } else { 255 };
//!     pixel.copy_from_slice(&[v, v, v, 255]);
//! }
//! let source = PixelBuffer::from_pixels(8, 8, ChannelOrder::RGBA, data).unwrap();
//! let output = BlurTintPipeline::new(EffectOptions::light()).execute(&source).unwrap();
//!
//! assert_ne!(output, source);
//! ```
//!
//! # Features
//! - `log`: Trace stage execution through the [`log`](https://docs.rs/log) crate. Enabled by default
//! - `threads`: Blur channels on separate threads
//! - `serde-support`: Serialize options and layouts
#![cfg_attr(feature = "benchmarks", feature(test))]
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::new_without_default
)]

pub mod buffer;
pub mod errors;
pub mod filters;
pub mod pipeline;
pub mod traits;
