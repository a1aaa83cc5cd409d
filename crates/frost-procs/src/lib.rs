/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel kernels for `frost-image`
//!
//! Everything in here works on plain slices, interleaved 8-bit rows or
//! de-interleaved planes, and knows nothing about buffers, strides or errors.
//! `frost-image` wraps these kernels into filters with validation.
//!
//! # Example
//! - Blur a single 4x4 plane with a 3 pixel box, three times
//! ```
//! use frost_procs::box_blur::triple_box_blur;
//! let mut plane = vec![0_u8; 16];
//! plane[5] = 255;
//! let mut scratch = vec![0; 16];
//! triple_box_blur(&mut plane, &mut scratch, 4, 4, 3);
//! assert!(plane.iter().all(|x| *x < 255));
//! ```

// Benchmark support needs nightly
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
    clippy::missing_errors_doc,
    clippy::wildcard_imports
)]

pub mod blend;
pub mod box_blur;
pub mod color_matrix;
pub mod deinterleave;
pub mod grayscale;
pub mod mask;
pub mod mathops;
pub mod premul_alpha;
pub mod statistics;
pub mod transpose;
