// Copyright 2025 the Glance Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::DEFAULT_SCALE;

/// Pan and zoom applied to the image surface.
///
/// The host renders this as a CSS-style `matrix(scale, 0, 0, scale, pan.x,
/// pan.y)` with `transform-origin` set to `origin`. `origin` is expressed in
/// the image box's local, untransformed coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Zoom relative to the fitted layout; `1.0` is fit.
    pub scale: f64,
    /// Translation applied after scaling about `origin`.
    pub pan: Vec2,
    /// Anchor of the scale, in image-local coordinates.
    pub origin: Point,
}

impl TransformState {
    /// Fit state for an image box of the given local center.
    #[must_use]
    pub fn fit(center: Point) -> Self {
        Self {
            scale: DEFAULT_SCALE,
            pan: Vec2::ZERO,
            origin: center,
        }
    }

    /// The six matrix coefficients `[a, b, c, d, e, f]`, to be applied about
    /// [`TransformState::origin`].
    #[must_use]
    pub fn matrix(&self) -> [f64; 6] {
        [self.scale, 0.0, 0.0, self.scale, self.pan.x, self.pan.y]
    }

    /// The transform as a single affine in image-local space, with the
    /// origin folded in.
    #[must_use]
    pub fn local_affine(&self) -> Affine {
        let origin = self.origin.to_vec2();
        Affine::translate(origin + self.pan) * Affine::scale(self.scale) * Affine::translate(-origin)
    }

    /// Maps an image-local point through the transform.
    #[must_use]
    pub fn apply(&self, local: Point) -> Point {
        self.local_affine() * local
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::fit(Point::ZERO)
    }
}
