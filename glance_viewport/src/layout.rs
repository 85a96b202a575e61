// Copyright 2025 the Glance Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host geometry: where the viewing frame and the untransformed image sit.

use kurbo::{Point, Rect, Size};

/// Supplies the rectangles the engine measures on every reset.
///
/// Both rectangles are in the same viewport (CSS pixel) coordinate space as
/// the pointer positions fed to the engine. The image rectangle is the box
/// the host laid out **before** any transform is applied.
pub trait LayoutSource {
    /// Bounding box of the fixed viewing frame.
    fn container_rect(&self) -> Rect;

    /// Bounding box of the image surface at its default (fit) layout.
    fn image_layout_rect(&self) -> Rect;
}

impl<T: LayoutSource + ?Sized> LayoutSource for &T {
    fn container_rect(&self) -> Rect {
        (**self).container_rect()
    }

    fn image_layout_rect(&self) -> Rect {
        (**self).image_layout_rect()
    }
}

impl<T: LayoutSource + ?Sized> LayoutSource for &mut T {
    fn container_rect(&self) -> Rect {
        (**self).container_rect()
    }

    fn image_layout_rect(&self) -> Rect {
        (**self).image_layout_rect()
    }
}

/// How an image is laid out inside its container before any zoom.
///
/// Both modes center the image and preserve its aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Scale up or down until the image touches the container on one axis.
    Contain,
    /// Like [`FitMode::Contain`], but never enlarge past the natural size.
    #[default]
    ScaleDown,
}

/// Lays out an image of `size` centered inside `container`.
///
/// Degenerate inputs yield an empty rectangle at the container center.
#[must_use]
pub fn fit_image_rect(container: Rect, size: Size, mode: FitMode) -> Rect {
    let center = container.center();
    if size.width <= 0.0 || size.height <= 0.0 {
        return Rect::from_center_size(center, Size::ZERO);
    }
    let view = container.size();
    if view.width <= 0.0 || view.height <= 0.0 {
        return Rect::from_center_size(center, Size::ZERO);
    }

    let sx = view.width / size.width;
    let sy = view.height / size.height;
    let mut factor = sx.min(sy);
    if mode == FitMode::ScaleDown {
        factor = factor.min(1.0);
    }
    Rect::from_center_size(center, size * factor)
}

/// Fixed layout for headless hosts and tests.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct StaticLayout {
    /// The viewing frame.
    pub container: Rect,
    /// The untransformed image box.
    pub image: Rect,
}

impl StaticLayout {
    /// Creates a layout from explicit rectangles.
    #[must_use]
    pub fn new(container: Rect, image: Rect) -> Self {
        Self { container, image }
    }

    /// Creates a layout with the image fitted into `container`.
    #[must_use]
    pub fn fitted(container: Rect, rendered: Size, mode: FitMode) -> Self {
        Self {
            container,
            image: fit_image_rect(container, rendered, mode),
        }
    }

    /// Moves the container to `container` and refits the image into it,
    /// keeping the image's current aspect ratio.
    ///
    /// This mirrors what a browser-style host does on window resize.
    pub fn resize(&mut self, container: Rect, rendered: Size, mode: FitMode) {
        *self = Self::fitted(container, rendered, mode);
    }

    /// Returns the offset of the image box from the container origin.
    #[must_use]
    pub fn image_offset(&self) -> Point {
        (self.image.origin() - self.container.origin()).to_point()
    }
}

impl LayoutSource for StaticLayout {
    fn container_rect(&self) -> Rect {
        self.container
    }

    fn image_layout_rect(&self) -> Rect {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{FitMode, LayoutSource, StaticLayout, fit_image_rect};

    #[test]
    fn contain_fills_the_limiting_axis() {
        let container = Rect::new(0.0, 0.0, 800.0, 600.0);
        let fitted = fit_image_rect(container, Size::new(4000.0, 3000.0), FitMode::Contain);
        assert_eq!(fitted, container);

        let wide = fit_image_rect(container, Size::new(1600.0, 800.0), FitMode::Contain);
        assert_eq!(wide, Rect::new(0.0, 100.0, 800.0, 500.0));
    }

    #[test]
    fn scale_down_keeps_small_images_at_natural_size() {
        let container = Rect::new(0.0, 0.0, 800.0, 600.0);
        let small = fit_image_rect(container, Size::new(200.0, 100.0), FitMode::ScaleDown);
        assert_eq!(small, Rect::new(300.0, 250.0, 500.0, 350.0));

        let enlarged = fit_image_rect(container, Size::new(200.0, 100.0), FitMode::Contain);
        assert_eq!(enlarged, Rect::new(0.0, 100.0, 800.0, 500.0));
    }

    #[test]
    fn degenerate_inputs_collapse_to_center() {
        let container = Rect::new(10.0, 10.0, 110.0, 60.0);
        let empty = fit_image_rect(container, Size::ZERO, FitMode::Contain);
        assert_eq!(empty.size(), Size::ZERO);
        assert_eq!(empty.center(), container.center());

        let hidden = Rect::new(50.0, 50.0, 50.0, 50.0);
        let collapsed = fit_image_rect(hidden, Size::new(10.0, 10.0), FitMode::Contain);
        assert_eq!(collapsed.size(), Size::ZERO);
    }

    #[test]
    fn static_layout_reports_its_rects() {
        let container = Rect::new(20.0, 40.0, 820.0, 640.0);
        let layout = StaticLayout::fitted(container, Size::new(1600.0, 800.0), FitMode::Contain);
        assert_eq!(layout.container_rect(), container);
        assert_eq!(layout.image_layout_rect(), Rect::new(20.0, 140.0, 820.0, 540.0));
        assert_eq!(layout.image_offset(), Point::new(0.0, 100.0));

        let by_ref = &layout;
        assert_eq!(by_ref.image_layout_rect(), layout.image);
    }
}
