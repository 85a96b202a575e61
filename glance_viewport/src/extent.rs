// Copyright 2025 the Glance Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image dimensions as decoded and as displayed.

use kurbo::Size;

use crate::error::{Result, ViewportError};

/// EXIF orientation of a decoded image.
///
/// Only the dimension swap matters to the viewport; flips are carried so the
/// host can round-trip the tag it read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Tag 1.
    #[default]
    Normal,
    /// Tag 2.
    FlipHorizontal,
    /// Tag 3.
    Rotate180,
    /// Tag 4.
    FlipVertical,
    /// Tag 5: mirrored about the top-left/bottom-right diagonal.
    Transpose,
    /// Tag 6.
    Rotate90,
    /// Tag 7: mirrored about the top-right/bottom-left diagonal.
    Transverse,
    /// Tag 8.
    Rotate270,
}

impl Orientation {
    /// Parses an EXIF orientation tag.
    pub fn from_exif(tag: u16) -> Result<Self> {
        Ok(match tag {
            1 => Self::Normal,
            2 => Self::FlipHorizontal,
            3 => Self::Rotate180,
            4 => Self::FlipVertical,
            5 => Self::Transpose,
            6 => Self::Rotate90,
            7 => Self::Transverse,
            8 => Self::Rotate270,
            _ => return Err(ViewportError::UnknownOrientation(tag)),
        })
    }

    /// Returns the EXIF tag for this orientation.
    #[must_use]
    pub fn exif_tag(self) -> u16 {
        match self {
            Self::Normal => 1,
            Self::FlipHorizontal => 2,
            Self::Rotate180 => 3,
            Self::FlipVertical => 4,
            Self::Transpose => 5,
            Self::Rotate90 => 6,
            Self::Transverse => 7,
            Self::Rotate270 => 8,
        }
    }

    /// Returns `true` when displaying the image exchanges width and height.
    #[must_use]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Self::Transpose | Self::Rotate90 | Self::Transverse | Self::Rotate270
        )
    }
}

/// Pixel dimensions of the loaded image.
///
/// `natural` is the decoded buffer size; `rendered` is what the viewer lays
/// out after applying the orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageExtent {
    /// Decoded pixel size.
    pub natural: Size,
    /// Orientation-adjusted size.
    pub rendered: Size,
    /// Orientation the rendered size was derived from.
    pub orientation: Orientation,
}

impl ImageExtent {
    /// Creates an extent from the decoded size and its orientation.
    #[must_use]
    pub fn new(natural: Size, orientation: Orientation) -> Self {
        let rendered = if orientation.swaps_dimensions() {
            Size::new(natural.height, natural.width)
        } else {
            natural
        };
        Self {
            natural,
            rendered,
            orientation,
        }
    }

    /// Creates an unrotated extent from integer pixel dimensions.
    #[must_use]
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(
            Size::new(f64::from(width), f64::from(height)),
            Orientation::Normal,
        )
    }

    /// Returns `true` when there is nothing to display.
    ///
    /// A zero, negative, or non-finite dimension counts as "no image loaded".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let Size { width, height } = self.natural;
        !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0)
    }
}
