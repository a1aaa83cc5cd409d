/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Channel layout information for interleaved 8-bit pixel buffers.
use core::num::NonZeroU8;

/// Where the alpha byte of a pixel lives
///
/// This mirrors how host graphics stacks describe their layouts,
/// e.g. `premultipliedFirst`/`premultipliedLast` map to `First`/`Last`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AlphaInfo {
    /// Alpha is the first byte of each pixel (`ARGB`, `ABGR`)
    First,
    /// Alpha is the last byte of each pixel (`RGBA`, `BGRA`, `GrayAlpha`)
    Last,
    /// The layout carries no alpha, pixels are fully opaque
    NoAlpha
}

/// All possible channel orders of a pixel buffer
///
/// Every channel is one byte wide.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ChannelOrder {
    /// Red, Green, Blue, Alpha
    RGBA,
    /// Blue, Green, Red, Alpha
    BGRA,
    /// Alpha, Red, Green, Blue
    ARGB,
    /// Alpha, Blue, Green, Red
    ABGR,
    /// Grayscale with alpha
    GrayAlpha,
    /// Grayscale without alpha
    GrayOnly,
    /// A layout with `n` bytes per pixel whose meaning we do not know.
    ///
    /// Layout agnostic operations (blurring) accept it,
    /// anything that needs to know where color or alpha live rejects it.
    Unknown(NonZeroU8)
}

impl ChannelOrder {
    /// Number of bytes making up a single pixel
    ///
    /// E.g. RGBA returns 4 since it contains R,G,B and A bytes to make up a pixel
    pub const fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::RGBA | Self::BGRA | Self::ARGB | Self::ABGR => 4,
            Self::GrayAlpha => 2,
            Self::GrayOnly => 1,
            Self::Unknown(n) => n.get() as usize
        }
    }

    /// Return the alpha layout or `None` if it cannot be determined
    pub const fn alpha_info(&self) -> Option<AlphaInfo> {
        match self {
            Self::ARGB | Self::ABGR => Some(AlphaInfo::First),
            Self::RGBA | Self::BGRA | Self::GrayAlpha => Some(AlphaInfo::Last),
            Self::GrayOnly => Some(AlphaInfo::NoAlpha),
            Self::Unknown(_) => None
        }
    }

    /// Returns the position of the alpha byte in a pixel
    ///
    /// That is for a pixel say `[0,1,2,3]` in `RGBA` format this will return `Some(3)`,
    /// but for `ARGB` format it will return `Some(0)`
    ///
    /// Returns `None` if the layout has no alpha or if it is unknown,
    /// use [`alpha_info`](Self::alpha_info) to tell the two apart
    pub const fn alpha_position(&self) -> Option<usize> {
        match self.alpha_info() {
            Some(AlphaInfo::First) => Some(0),
            Some(AlphaInfo::Last) => Some(self.bytes_per_pixel() - 1),
            _ => None
        }
    }

    pub const fn has_alpha(&self) -> bool {
        matches!(
            self.alpha_info(),
            Some(AlphaInfo::First) | Some(AlphaInfo::Last)
        )
    }

    pub const fn is_grayscale(&self) -> bool {
        matches!(self, Self::GrayAlpha | Self::GrayOnly)
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Byte offsets of the red, green and blue channels inside a pixel
    ///
    /// Returns `None` for grayscale and unknown layouts
    pub const fn rgb_positions(&self) -> Option<[usize; 3]> {
        match self {
            Self::RGBA => Some([0, 1, 2]),
            Self::BGRA => Some([2, 1, 0]),
            Self::ARGB => Some([1, 2, 3]),
            Self::ABGR => Some([3, 2, 1]),
            _ => None
        }
    }

    /// Byte offset of the gray channel inside a pixel
    ///
    /// Returns `None` for color and unknown layouts
    pub const fn gray_position(&self) -> Option<usize> {
        match self {
            Self::GrayAlpha | Self::GrayOnly => Some(0),
            _ => None
        }
    }
}

/// Encapsulates all channel orders whose meaning is known
pub static ALL_CHANNEL_ORDERS: [ChannelOrder; 6] = [
    ChannelOrder::RGBA,
    ChannelOrder::BGRA,
    ChannelOrder::ARGB,
    ChannelOrder::ABGR,
    ChannelOrder::GrayAlpha,
    ChannelOrder::GrayOnly
];

#[cfg(test)]
mod tests {
    use core::num::NonZeroU8;

    use crate::channel_order::{AlphaInfo, ChannelOrder, ALL_CHANNEL_ORDERS};

    #[test]
    fn alpha_positions_follow_layout() {
        assert_eq!(ChannelOrder::RGBA.alpha_position(), Some(3));
        assert_eq!(ChannelOrder::BGRA.alpha_position(), Some(3));
        assert_eq!(ChannelOrder::ARGB.alpha_position(), Some(0));
        assert_eq!(ChannelOrder::ABGR.alpha_position(), Some(0));
        assert_eq!(ChannelOrder::GrayAlpha.alpha_position(), Some(1));
        assert_eq!(ChannelOrder::GrayOnly.alpha_position(), None);
    }

    #[test]
    fn unknown_layout_has_indeterminate_alpha() {
        let order = ChannelOrder::Unknown(NonZeroU8::new(3).unwrap());

        assert_eq!(order.alpha_info(), None);
        assert_eq!(order.bytes_per_pixel(), 3);
        assert!(!order.is_known());
        assert!(!order.has_alpha());
    }

    #[test]
    fn color_and_alpha_never_overlap() {
        for order in ALL_CHANNEL_ORDERS {
            if let Some(rgb) = order.rgb_positions() {
                let alpha = order.alpha_position().unwrap();
                assert!(!rgb.contains(&alpha), "{order:?}");
                assert!(rgb.iter().all(|x| *x < order.bytes_per_pixel()));
            }
        }
        assert_eq!(
            ChannelOrder::GrayOnly.alpha_info(),
            Some(AlphaInfo::NoAlpha)
        );
    }
}
