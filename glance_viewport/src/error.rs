// Copyright 2025 the Glance Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors raised while constructing or configuring a viewport.
///
/// Event handlers never fail; misuse there degrades to a no-op instead.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum ViewportError {
    /// The wheel sensitivity must be finite and strictly positive.
    #[error("invalid wheel sensitivity: {0}")]
    InvalidWheelSensitivity(f64),

    /// The scale limits do not bracket the default (fit) scale of 1.0.
    #[error("invalid scale limits: min {min}, max {max:?}")]
    InvalidScaleLimits {
        /// Requested absolute floor.
        min: f64,
        /// Requested ceiling, if any.
        max: Option<f64>,
    },

    /// The zoom anchor threshold must be finite and non-negative.
    #[error("invalid anchor threshold: {0}")]
    InvalidAnchorThreshold(f64),

    /// The device pixel ratio must be finite and strictly positive.
    #[error("invalid device pixel ratio: {0}")]
    InvalidDevicePixelRatio(f64),

    /// EXIF orientation tags are `1..=8`.
    #[error("unknown EXIF orientation tag: {0}")]
    UnknownOrientation(u16),
}

/// Result alias used throughout this crate.
pub type Result<T> = core::result::Result<T, ViewportError>;
