// Copyright 2025 the Glance Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=glance_viewport --heading-base-level=0

//! Glance Viewport: the pan/zoom engine behind an image viewer's display
//! surface.
//!
//! This crate turns mouse-wheel and drag input into a bounded 2D transform
//! (uniform scale plus pan, anchored at a movable origin) for one displayed
//! image. It enforces:
//! - Containment: a zoomed image never pans past its edges, and an axis on
//!   which the image fits is never panned at all.
//! - Zoom toward the pointer: the image point under the cursor stays put.
//! - Scale limits, with zooming below fit gated by a shrink policy.
//! - A one-step jump to actual pixel size.
//!
//! It does **not** decode, lay out, or draw images. The host:
//! - Lays the image out at its fitted size and reports the container and
//!   image rectangles through a [`LayoutSource`].
//! - Forwards pointer and wheel input to [`ViewportTransform`].
//! - Applies each [`ViewportEvent::TransformChanged`] state to the image
//!   surface, for example as a CSS `matrix()` with a `transform-origin`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use glance_viewport::{
//!     FitMode, ImageExtent, PointerButtons, StaticLayout, ViewportEvent, ViewportTransform,
//! };
//!
//! // An 800x600 frame showing a 4000x3000 photo.
//! let frame = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let layout = StaticLayout::fitted(frame, Size::new(4000.0, 3000.0), FitMode::Contain);
//! let mut view = ViewportTransform::new(layout, Vec::<ViewportEvent>::new());
//! view.set_image(ImageExtent::from_pixels(4000, 3000));
//! assert_eq!(view.scale(), 1.0);
//!
//! // Wheel up over the center zooms in.
//! view.on_wheel(-120.0, Point::new(400.0, 300.0));
//! assert!(view.is_resized());
//!
//! // Drag to pan.
//! view.on_pointer_down(Point::new(400.0, 300.0));
//! view.on_pointer_move(Point::new(380.0, 290.0), PointerButtons::PRIMARY);
//! view.on_pointer_up();
//! assert!(view.is_image_moved());
//!
//! // Every visible change was reported to the sink.
//! let last = view.sink().iter().rev().find_map(|event| match event {
//!     ViewportEvent::TransformChanged(state) => Some(*state),
//!     _ => None,
//! });
//! assert_eq!(last, Some(view.state()));
//! ```
//!
//! ## Design notes
//!
//! - One engine instance per display surface; instances share nothing.
//! - Everything runs synchronously on the caller's input loop. Events are
//!   delivered to the [`ViewportSink`] before the handler returns.
//! - Handlers called without a loaded image, or out of gesture order, are
//!   no-ops. Only construction and configuration can fail.
//! - Each image swap or window resize is a full reset to fit.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod drag;
mod error;
mod event;
mod extent;
mod layout;
mod state;
mod transform;

pub use config::ViewportConfig;
pub use drag::{DragSession, PointerButtons};
pub use error::{Result, ViewportError};
pub use event::{FnSink, ViewportEvent, ViewportSink};
pub use extent::{ImageExtent, Orientation};
pub use layout::{FitMode, LayoutSource, StaticLayout, fit_image_rect};
pub use state::TransformState;
pub use transform::{ViewportTransform, ViewportTransformDebugInfo};

/// Scale at which the image exactly fills its laid-out box.
pub const DEFAULT_SCALE: f64 = 1.0;
