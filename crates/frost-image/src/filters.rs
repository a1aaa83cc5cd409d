/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Operations on pixel buffers
//!
//! Each stage of the blur-tint pipeline lives in its own module, they can also
//! be used on their own through [`OperationsTrait`](crate::traits::OperationsTrait)
//! or the free functions each module exports.
pub mod average_color;
pub mod box_blur;
pub mod grayscale;
pub mod mask_clip;
pub mod saturation;
pub mod tint;
