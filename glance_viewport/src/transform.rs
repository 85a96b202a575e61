// Copyright 2025 the Glance Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Affine, Point, Rect, Vec2};
use log::{debug, trace};

use crate::DEFAULT_SCALE;
use crate::config::ViewportConfig;
use crate::drag::{DragSession, PointerButtons};
use crate::error::{Result, ViewportError};
use crate::event::{ViewportEvent, ViewportSink};
use crate::extent::ImageExtent;
use crate::layout::LayoutSource;
use crate::state::TransformState;

/// Scales this close to fit are treated as fit.
const SCALE_EPSILON: f64 = 1.0e-9;

/// Pan/zoom engine for one displayed image.
///
/// The engine pulls geometry from a [`LayoutSource`] whenever it resets and
/// reports every visible change to a [`ViewportSink`]. All state is owned
/// here; hosts mutate it only through the event handlers below.
///
/// Coordinates: pointer positions, the container rectangle, and the image
/// layout rectangle all share the host's viewport space. The image's
/// on-screen position is always measured relative to the container, and on
/// any axis where the zoomed image overflows the container that position is
/// kept within `[-bound, 0]`.
#[derive(Clone, Debug)]
pub struct ViewportTransform<L, S> {
    layout: L,
    sink: S,
    config: ViewportConfig,
    extent: Option<ImageExtent>,
    container: Rect,
    image_rect: Rect,
    state: TransformState,
    bound: Vec2,
    shrinkable: bool,
    device_pixel_ratio: f64,
    scale_for_actual_size: f64,
    drag: Option<DragSession>,
    image_moved: bool,
}

impl<L: LayoutSource, S: ViewportSink> ViewportTransform<L, S> {
    /// Binds a new engine to a host layout and event sink.
    ///
    /// No geometry is measured until [`ViewportTransform::set_image`].
    #[must_use]
    pub fn new(layout: L, sink: S) -> Self {
        Self::build(layout, sink, ViewportConfig::default())
    }

    /// Like [`ViewportTransform::new`], with custom tunables.
    pub fn with_config(layout: L, sink: S, config: ViewportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(layout, sink, config))
    }

    fn build(layout: L, sink: S, config: ViewportConfig) -> Self {
        Self {
            layout,
            sink,
            config,
            extent: None,
            container: Rect::ZERO,
            image_rect: Rect::ZERO,
            state: TransformState::default(),
            bound: Vec2::ZERO,
            shrinkable: config.shrinkable,
            device_pixel_ratio: 1.0,
            scale_for_actual_size: DEFAULT_SCALE,
            drag: None,
            image_moved: false,
        }
    }

    /// Installs a freshly laid-out image and resets to fit.
    ///
    /// The host must have laid out the image surface before calling this, so
    /// that [`LayoutSource::image_layout_rect`] reports the new box. An empty
    /// extent unloads the image instead.
    pub fn set_image(&mut self, extent: ImageExtent) {
        if extent.is_empty() {
            debug!(
                "ignoring empty image extent {}x{}",
                extent.natural.width, extent.natural.height
            );
            self.clear_image();
            return;
        }
        debug!(
            "image loaded: {}x{} natural, {}x{} rendered ({:?})",
            extent.natural.width,
            extent.natural.height,
            extent.rendered.width,
            extent.rendered.height,
            extent.orientation
        );
        self.extent = Some(extent);
        self.image_moved = false;
        self.reset_image();
    }

    /// Unloads the image; every handler becomes a no-op until the next
    /// [`ViewportTransform::set_image`].
    pub fn clear_image(&mut self) {
        self.extent = None;
        self.drag = None;
        self.image_moved = false;
        self.container = Rect::ZERO;
        self.image_rect = Rect::ZERO;
        self.state = TransformState::default();
        self.bound = Vec2::ZERO;
        self.scale_for_actual_size = DEFAULT_SCALE;
    }

    /// Re-measures everything after the host window changed size.
    pub fn on_window_resize(&mut self) {
        if self.extent.is_none() {
            return;
        }
        self.reset_image();
    }

    /// Opens a drag session at `pos`.
    ///
    /// Emits [`ViewportEvent::DragStart`] only when zoomed, since a fitted
    /// image has nothing to pan.
    pub fn on_pointer_down(&mut self, pos: Point) {
        if self.extent.is_none() {
            return;
        }
        self.drag = Some(DragSession::start(pos));
        if self.is_resized() {
            self.sink.emit(ViewportEvent::DragStart);
        }
    }

    /// Pans by the pointer delta while the primary button is held.
    ///
    /// Each axis is checked independently: a delta that would move the image
    /// past its bounds on that axis is ignored. An axis on which the image
    /// fits never pans.
    pub fn on_pointer_move(&mut self, pos: Point, buttons: PointerButtons) {
        if self.extent.is_none()
            || !buttons.contains(PointerButtons::PRIMARY)
            || !pos.is_finite()
        {
            return;
        }
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        let delta = session.update(pos);

        let position = self.image_position();
        let pan = self.state.pan;
        self.state.pan = Vec2::new(
            drag_axis(position.x, pan.x, delta.x, self.bound.x),
            drag_axis(position.y, pan.y, delta.y, self.bound.y),
        );
        trace!(
            "drag by ({:.1}, {:.1}) -> pan ({:.1}, {:.1})",
            delta.x, delta.y, self.state.pan.x, self.state.pan.y
        );
        self.emit_transform();
    }

    /// Closes the drag session and emits [`ViewportEvent::DragEnd`].
    ///
    /// Whether the pointer moved is kept for [`ViewportTransform::is_image_moved`].
    pub fn on_pointer_up(&mut self) {
        let Some(session) = self.drag.take() else {
            return;
        };
        self.image_moved = session.has_moved();
        self.sink.emit(ViewportEvent::DragEnd);
    }

    /// Zooms by a wheel step, keeping the point under `pointer` fixed.
    ///
    /// Negative `delta_y` zooms in. Zooming out stops at fit unless shrinking
    /// is enabled, and never goes below the configured minimum. Landing
    /// exactly on fit performs a full reset.
    pub fn on_wheel(&mut self, delta_y: f64, pointer: Point) {
        if self.extent.is_none() || delta_y == 0.0 || !delta_y.is_finite() {
            return;
        }

        let previous = self.state.scale;
        let zooming_in = delta_y < 0.0;
        let mut scale = previous - delta_y * self.config.wheel_sensitivity;

        let floor = if zooming_in || self.shrinkable {
            self.config.min_scale
        } else {
            self.config.min_scale.max(DEFAULT_SCALE)
        };
        scale = scale.max(floor);
        if zooming_in && let Some(max) = self.config.max_scale {
            scale = scale.min(max);
        }

        if (scale - DEFAULT_SCALE).abs() < SCALE_EPSILON {
            trace!("wheel {delta_y} returned to fit");
            self.reset_image();
            return;
        }

        self.state.scale = scale;
        self.calculate_bound();
        self.calculate_transform(pointer, previous);
        self.adjust_transform();
        trace!(
            "wheel {delta_y} at ({:.1}, {:.1}): scale {previous:.3} -> {scale:.3}",
            pointer.x, pointer.y
        );
        self.emit_transform();
    }

    /// Jumps to the scale where one image pixel covers one physical pixel.
    ///
    /// The zoom origin is kept; this is not a pointer gesture. Calling it
    /// again at actual size does nothing.
    pub fn show_actual_size(&mut self) {
        if self.extent.is_none() {
            return;
        }
        let mut target = self.scale_for_actual_size.max(self.config.min_scale);
        if let Some(max) = self.config.max_scale {
            target = target.min(max);
        }
        if (target - DEFAULT_SCALE).abs() < SCALE_EPSILON
            || (target - self.state.scale).abs() < SCALE_EPSILON
        {
            return;
        }

        debug!("actual size: scale {:.3} -> {target:.3}", self.state.scale);
        self.state.scale = target;
        self.calculate_bound();
        self.center_fitting_axes();
        self.adjust_transform();
        self.emit_transform();
    }

    /// Allows or forbids zooming out below fit.
    ///
    /// Forbidding it while shrunk snaps back to fit.
    pub fn enable_shrink(&mut self, enabled: bool) {
        self.shrinkable = enabled;
        debug!("shrink below fit {}", if enabled { "enabled" } else { "disabled" });
        if !enabled && self.extent.is_some() && self.state.scale < DEFAULT_SCALE {
            self.reset_image();
        }
    }

    /// Sets the ratio of physical to logical pixels used by
    /// [`ViewportTransform::show_actual_size`] and
    /// [`ViewportTransform::image_ratio`].
    pub fn set_device_pixel_ratio(&mut self, ratio: f64) -> Result<()> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(ViewportError::InvalidDevicePixelRatio(ratio));
        }
        self.device_pixel_ratio = ratio;
        self.update_scale_for_actual_size();
        Ok(())
    }

    /// Current zoom factor; `1.0` is fit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// On-screen size of the image as a fraction of its pixel size.
    ///
    /// Returns `1.0` when no image is loaded.
    #[must_use]
    pub fn image_ratio(&self) -> f64 {
        let Some(extent) = self.extent else {
            return DEFAULT_SCALE;
        };
        let laid_out = self.image_rect.size();
        let factor = self.state.scale * self.device_pixel_ratio;
        (laid_out.width * factor / extent.rendered.width)
            .max(laid_out.height * factor / extent.rendered.height)
    }

    /// Returns `true` when zoomed away from fit.
    #[must_use]
    pub fn is_resized(&self) -> bool {
        self.state.scale != DEFAULT_SCALE
    }

    /// Returns `true` if the pointer moved during the most recent drag
    /// session, letting the host tell a click from a pan.
    #[must_use]
    pub fn is_image_moved(&self) -> bool {
        self.image_moved
    }

    /// Returns `true` if zooming out below fit is allowed.
    #[must_use]
    pub fn is_shrinkable(&self) -> bool {
        self.shrinkable
    }

    /// Returns `true` between pointer-down and pointer-up.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Scale at which the image is shown at its actual pixel size.
    #[must_use]
    pub fn scale_for_actual_size(&self) -> f64 {
        self.scale_for_actual_size
    }

    /// Current transform.
    #[must_use]
    pub fn state(&self) -> TransformState {
        self.state
    }

    /// How far the image may be panned on each axis at the current scale.
    #[must_use]
    pub fn bound_extent(&self) -> Vec2 {
        self.bound
    }

    /// Top-left corner of the transformed image, relative to the container.
    #[must_use]
    pub fn image_position(&self) -> Point {
        let offset = self.image_rect.origin() - self.container.origin();
        self.state.apply(Point::ZERO) + offset
    }

    /// Maps image-local coordinates to viewport coordinates.
    #[must_use]
    pub fn view_affine(&self) -> Affine {
        Affine::translate(self.image_rect.origin().to_vec2()) * self.state.local_affine()
    }

    /// The loaded image, if any.
    #[must_use]
    pub fn extent(&self) -> Option<&ImageExtent> {
        self.extent.as_ref()
    }

    /// Container rectangle measured at the last reset.
    #[must_use]
    pub fn container_rect(&self) -> Rect {
        self.container
    }

    /// Image layout rectangle measured at the last reset.
    #[must_use]
    pub fn image_rect(&self) -> Rect {
        self.image_rect
    }

    /// Active tunables.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// The host layout.
    #[must_use]
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Mutable access to the host layout.
    ///
    /// Changes are picked up on the next reset, typically
    /// [`ViewportTransform::on_window_resize`].
    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    /// The event sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the event sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Snapshot of the engine for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportTransformDebugInfo {
        ViewportTransformDebugInfo {
            container: self.container,
            image_rect: self.image_rect,
            state: self.state,
            bound: self.bound,
            image_position: self.image_position(),
            scale_for_actual_size: self.scale_for_actual_size,
            shrinkable: self.shrinkable,
            dragging: self.is_dragging(),
        }
    }

    fn reset_image(&mut self) {
        self.container = self.layout.container_rect();
        self.image_rect = self.layout.image_layout_rect();
        self.state = TransformState::fit(self.local_center());
        self.calculate_bound();
        self.update_scale_for_actual_size();
        debug!(
            "reset: container {:?}, image {:?}, actual size at {:.3}",
            self.container, self.image_rect, self.scale_for_actual_size
        );
        self.emit_transform();
    }

    fn local_center(&self) -> Point {
        let size = self.image_rect.size();
        Point::new(size.width / 2.0, size.height / 2.0)
    }

    fn calculate_bound(&mut self) {
        let scaled = self.image_rect.size() * self.state.scale;
        let view = self.container.size();
        self.bound = Vec2::new(
            (scaled.width.floor() - view.width).max(0.0),
            (scaled.height.floor() - view.height).max(0.0),
        );
    }

    /// Moves the origin under the pointer so it stays put while scaling.
    fn calculate_transform(&mut self, pointer: Point, previous: f64) {
        let local = pointer - self.image_rect.origin();
        let threshold = self.config.anchor_threshold;
        let TransformState { pan, origin, .. } = self.state;

        let (origin_x, pan_x) = reanchor(local.x, origin.x, pan.x, previous, threshold);
        let (origin_y, pan_y) = reanchor(local.y, origin.y, pan.y, previous, threshold);
        self.state.origin = Point::new(origin_x, origin_y);
        self.state.pan = Vec2::new(pan_x, pan_y);
        self.center_fitting_axes();
    }

    fn center_fitting_axes(&mut self) {
        let center = self.local_center();
        if self.bound.x <= 0.0 {
            self.state.pan.x = 0.0;
            self.state.origin.x = center.x;
        }
        if self.bound.y <= 0.0 {
            self.state.pan.y = 0.0;
            self.state.origin.y = center.y;
        }
    }

    fn adjust_transform(&mut self) {
        let position = self.image_position();
        let pan = self.state.pan;
        self.state.pan = Vec2::new(
            contain(position.x, pan.x, self.bound.x),
            contain(position.y, pan.y, self.bound.y),
        );
    }

    fn update_scale_for_actual_size(&mut self) {
        let laid_out = self.image_rect.size();
        self.scale_for_actual_size = match self.extent {
            Some(extent) if laid_out.width > 0.0 && laid_out.height > 0.0 => {
                (extent.rendered.width / laid_out.width)
                    .max(extent.rendered.height / laid_out.height)
                    / self.device_pixel_ratio
            }
            _ => DEFAULT_SCALE,
        };
    }

    fn emit_transform(&mut self) {
        self.sink.emit(ViewportEvent::TransformChanged(self.state));
    }
}

/// Re-anchors one axis of the zoom origin at the pointer.
///
/// `pointer` is relative to the image box. The pan is corrected so the image
/// does not jump at the previous scale. Returns the new `(origin, pan)`.
fn reanchor(pointer: f64, origin: f64, pan: f64, previous: f64, threshold: f64) -> (f64, f64) {
    let local = (pointer - origin - pan) / previous + origin;
    let shift = local - origin;
    if (shift * previous).abs() < threshold {
        return (origin, pan);
    }
    (local, pan - shift * (1.0 - previous))
}

/// Returns the pan that pulls `position` back within `[-bound, 0]`.
///
/// `pan` is returned unchanged on an axis without overflow.
fn contain(position: f64, pan: f64, bound: f64) -> f64 {
    if bound <= 0.0 {
        return pan;
    }
    pan + (position.clamp(-bound, 0.0) - position)
}

/// Applies one axis of a drag delta, or keeps `pan` if the move would leave
/// `[-bound, 0]`.
fn drag_axis(position: f64, pan: f64, delta: f64, bound: f64) -> f64 {
    if bound <= 0.0 {
        return pan;
    }
    let moved = position + delta;
    if (-bound..=0.0).contains(&moved) {
        pan + delta
    } else {
        pan
    }
}

/// Debug snapshot of a [`ViewportTransform`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportTransformDebugInfo {
    /// Container rectangle from the last reset.
    pub container: Rect,
    /// Image layout rectangle from the last reset.
    pub image_rect: Rect,
    /// Current transform.
    pub state: TransformState,
    /// Pan bound on each axis.
    pub bound: Vec2,
    /// Top-left of the transformed image relative to the container.
    pub image_position: Point,
    /// Scale for one-to-one display.
    pub scale_for_actual_size: f64,
    /// Whether zooming below fit is allowed.
    pub shrinkable: bool,
    /// Whether a drag session is open.
    pub dragging: bool,
}
