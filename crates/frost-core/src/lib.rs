/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all frost crates
//!
//! This crate provides the small set of leaf types the
//! blur, saturation and tint routines agree on
//!
//! It currently contains
//!
//! - Channel layout information for interleaved 8-bit buffers
//! - A straight-alpha color type and the supported blend modes
//! - Effect options, i.e. the configuration of one blur-tint run
//! - Logging macros that compile to nothing unless the `log` feature is on
//!
//! # Features
//!  - `log`: Route `trace!`,`warn!` and friends to the [`log`](https://docs.rs/log) crate.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![macro_use]

pub mod channel_order;
pub mod color;
pub mod log;
pub mod options;
pub mod serde;
