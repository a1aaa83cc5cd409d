/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Instant;

use frost_core::channel_order::ChannelOrder;
use frost_core::log::trace;

use crate::buffer::PixelBuffer;
use crate::errors::EffectErrors;

/// This encapsulates a buffer operation.
///
/// Operations never modify their input, they return a freshly
/// allocated buffer with the result.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn get_name(&self) -> &'static str;

    /// Execute the operation on `buffer`
    ///
    /// This is called by [`execute`](Self::execute) after the channel
    /// order has been checked, implementors should not call it directly.
    ///
    /// # Errors
    /// Any operation specific error
    fn execute_impl(&self, buffer: &PixelBuffer) -> Result<PixelBuffer, EffectErrors>;

    /// Whether this operation can interpret `order`
    ///
    /// Defaults to every layout whose channels are known
    fn supports_layout(&self, order: ChannelOrder) -> bool {
        order.is_known()
    }

    /// Execute the operation on `buffer` returning the result
    ///
    /// # Errors
    /// - `UnsupportedChannelLayout`: the operation does not support the buffer's
    ///   channel order
    /// - Any operation specific error
    ///
    /// # Example
    /// ```
    /// use frost_core::channel_order::ChannelOrder;
    /// use frost_image::buffer::PixelBuffer;
    /// use frost_image::filters::saturation::Saturation;
    /// use frost_image::traits::OperationsTrait;
    ///
    /// let buffer = PixelBuffer::fill(4, 4, ChannelOrder::RGBA, &[200, 10, 10, 255]).unwrap();
    /// let gray = Saturation::new(0.0).execute(&buffer).unwrap();
    ///
    /// let pixel = gray.get_pixel(0, 0).unwrap();
    /// assert_eq!(pixel[0], pixel[1]);
    /// ```
    fn execute(&self, buffer: &PixelBuffer) -> Result<PixelBuffer, EffectErrors> {
        let order = buffer.get_channel_order();

        if !self.supports_layout(order) {
            return Err(EffectErrors::UnsupportedChannelLayout(
                order,
                self.get_name()
            ));
        }
        let operation_name = self.get_name();

        trace!("Running {operation_name}");

        let start = Instant::now();
        let result = self.execute_impl(buffer)?;
        let stop = Instant::now();

        trace!(
            "Finished running `{operation_name}` in {} ms",
            (stop - start).as_millis()
        );

        Ok(result)
    }
}
